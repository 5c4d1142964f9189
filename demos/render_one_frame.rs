use framecast::{CompositionBuilder, FixedAdvanceMeasure, FrameIndex, render_frame};

fn parse_frame_arg() -> u64 {
    std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(45)
}

fn main() {
    if let Err(e) = try_main() {
        eprintln!("{e:?}");
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let comp = CompositionBuilder::new("Hello world this is a test", 3.0).build()?;
    let frame = FrameIndex(parse_frame_arg());
    let svg = render_frame(&comp, frame, &FixedAdvanceMeasure::default())?;

    let out_dir = std::path::Path::new("target");
    std::fs::create_dir_all(out_dir)?;
    let out_path = out_dir.join(format!("frame_{:03}.svg", frame.0));
    std::fs::write(&out_path, svg)?;

    eprintln!("wrote {}", out_path.display());
    Ok(())
}
