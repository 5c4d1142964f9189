use framecast::{
    CompositionBuilder, FixedAdvanceMeasure, RenderThreading, ScriptLibrary, SeededRandom,
    render_frames_with,
};

fn main() {
    if let Err(e) = try_main() {
        eprintln!("{e:?}");
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let topic = std::env::args().nth(1).unwrap_or_else(|| "motivation".to_string());

    let library = ScriptLibrary::builtin();
    let mut rng = SeededRandom::from_text(&topic);
    let script = library.select(&topic, &mut rng);
    let duration = f64::from(script.estimate_narration_secs());
    eprintln!("topic '{topic}' -> {} words, {duration} s", script.word_count());

    let comp = CompositionBuilder::new(script.text(), duration).build()?;
    let seq = render_frames_with(
        &comp,
        &FixedAdvanceMeasure::default(),
        &RenderThreading {
            parallel: true,
            threads: None,
        },
    )?;

    let out_dir = std::path::Path::new("target").join("frames");
    std::fs::create_dir_all(&out_dir)?;
    for (i, frame) in seq.frames.iter().enumerate() {
        std::fs::write(out_dir.join(format!("frame_{i:03}.svg")), frame)?;
    }

    eprintln!(
        "wrote {} frames ({}x{}, {:.1} s rendered) to {}",
        seq.frame_count,
        seq.canvas.width,
        seq.canvas.height,
        seq.rendered_secs,
        out_dir.display()
    );
    Ok(())
}
