use crate::{composition::model::Composition, eval::composer::FrameDescriptor};

/// Serialize one composed frame to a self-contained SVG document.
///
/// Pure and total: no IO, no randomness, fixed-precision number formatting.
/// Identical inputs yield byte-identical markup, which is the core testable
/// property of the whole engine.
pub fn serialize_frame(desc: &FrameDescriptor, comp: &Composition) -> String {
    let w = comp.canvas.width;
    let h = comp.canvas.height;
    let frame = desc.frame.0;
    let [sr, sg, sb] = hsl_to_rgb8(
        desc.hue_deg,
        comp.gradient.saturation_pct,
        comp.gradient.lightness_pct,
    );
    let [er, eg, eb] = hsl_to_rgb8(
        desc.hue2_deg,
        comp.gradient.saturation_pct,
        comp.gradient.lightness_pct,
    );

    let mut out = String::with_capacity(2048);
    out.push_str(&format!(
        "<svg width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" xmlns=\"http://www.w3.org/2000/svg\">\n"
    ));

    // Background gradient; def ids are scoped by frame index.
    out.push_str("  <defs>\n");
    out.push_str(&format!(
        "    <linearGradient id=\"grad{frame}\" x1=\"0%\" y1=\"0%\" x2=\"100%\" y2=\"100%\">\n"
    ));
    out.push_str(&format!(
        "      <stop offset=\"0%\" stop-color=\"rgb({sr},{sg},{sb})\"/>\n"
    ));
    out.push_str(&format!(
        "      <stop offset=\"100%\" stop-color=\"rgb({er},{eg},{eb})\"/>\n"
    ));
    out.push_str("    </linearGradient>\n");
    let shadow = comp.text.shadow;
    out.push_str(&format!(
        "    <filter id=\"shadow{frame}\" x=\"-50%\" y=\"-50%\" width=\"200%\" height=\"200%\">\n"
    ));
    out.push_str(&format!(
        "      <feDropShadow dx=\"{}\" dy=\"{}\" stdDeviation=\"{}\" flood-color=\"{}\" flood-opacity=\"{}\"/>\n",
        fmt_px(shadow.dx_px),
        fmt_px(shadow.dy_px),
        fmt_px(shadow.blur_px),
        rgb(shadow.color_rgba8),
        fmt_alpha(shadow.color_rgba8[3]),
    ));
    out.push_str("    </filter>\n");
    out.push_str("  </defs>\n");
    out.push_str(&format!(
        "  <rect width=\"{w}\" height=\"{h}\" fill=\"url(#grad{frame})\"/>\n"
    ));

    // Revealed text block, centered, with the opacity envelope applied.
    out.push_str(&format!(
        "  <g font-family=\"{}\" font-size=\"{}\" font-weight=\"bold\" text-anchor=\"middle\" fill=\"{}\" opacity=\"{}\" filter=\"url(#shadow{frame})\">\n",
        escape_xml(&comp.text.font_family),
        fmt_px(comp.text.size_px),
        rgb(comp.text.color_rgba8),
        fmt_scalar(desc.opacity),
    ));
    for line in &desc.lines {
        out.push_str(&format!(
            "    <text x=\"{}\" y=\"{}\" dominant-baseline=\"middle\">{}</text>\n",
            fmt_px(comp.canvas.center_x()),
            fmt_px(line.y_px),
            escape_xml(&line.text),
        ));
    }
    out.push_str("  </g>\n");

    // Decorative circles, oscillating out of phase.
    for center in [desc.circle_top, desc.circle_bottom] {
        out.push_str(&format!(
            "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" fill-opacity=\"{}\"/>\n",
            fmt_px(center.x),
            fmt_px(center.y),
            fmt_px(comp.decor.circle_radius_px),
            rgb(comp.decor.color_rgba8),
            fmt_alpha(comp.decor.color_rgba8[3]),
        ));
    }

    // Progress indicator hugging the bottom edge.
    out.push_str(&format!(
        "  <rect x=\"0\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" fill-opacity=\"{}\"/>\n",
        fmt_px(f64::from(h) - comp.progress_bar.height_px),
        fmt_px(desc.progress_bar_width_px),
        fmt_px(comp.progress_bar.height_px),
        rgb(comp.progress_bar.color_rgba8),
        fmt_alpha(comp.progress_bar.color_rgba8[3]),
    ));

    out.push_str("</svg>\n");
    out
}

/// Fixed two-decimal pixel formatting.
fn fmt_px(v: f64) -> String {
    format!("{v:.2}")
}

/// Fixed four-decimal formatting for normalized scalars.
fn fmt_scalar(v: f64) -> String {
    format!("{v:.4}")
}

/// Straight alpha channel as a normalized three-decimal scalar.
fn fmt_alpha(a: u8) -> String {
    format!("{:.3}", f64::from(a) / 255.0)
}

fn rgb([r, g, b, _]: [u8; 4]) -> String {
    format!("rgb({r},{g},{b})")
}

/// Escape text for XML content and attribute values.
fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Convert HSL (degrees, percents) to RGB8.
///
/// SVG 1.1 color grammar has no `hsl()`, so gradient stops are emitted as
/// `rgb()` triples.
fn hsl_to_rgb8(h_deg: f64, s_pct: f64, l_pct: f64) -> [u8; 3] {
    let h = h_deg.rem_euclid(360.0);
    let s = (s_pct / 100.0).clamp(0.0, 1.0);
    let l = (l_pct / 100.0).clamp(0.0, 1.0);

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
    let m = l - c / 2.0;

    let (r1, g1, b1) = match h {
        v if v < 60.0 => (c, x, 0.0),
        v if v < 120.0 => (x, c, 0.0),
        v if v < 180.0 => (0.0, c, x),
        v if v < 240.0 => (0.0, x, c),
        v if v < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [
        ((r1 + m) * 255.0).round() as u8,
        ((g1 + m) * 255.0).round() as u8,
        ((b1 + m) * 255.0).round() as u8,
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
