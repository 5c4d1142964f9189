use crate::{
    foundation::error::FramecastResult,
    layout::measure::TextMeasure,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// One laid-out line of the revealed text block.
pub struct TextLine {
    /// Line text, trailing whitespace trimmed.
    pub text: String,
    /// Vertical position of the line in canvas pixels.
    pub y_px: f64,
}

/// Greedy word wrap with single-word look-ahead and no hyphenation.
///
/// Words accumulate onto the current line until appending the next word
/// would exceed `max_width_px`; the line is then flushed and the word starts
/// a new one. A word is never broken, so a line holding a single over-long
/// word may exceed the limit. The last partial line is always flushed, even
/// when empty. Candidate width is measured with a trailing space appended,
/// matching canvas-style measurement of the incremental line.
pub fn wrap_greedy(
    text: &str,
    size_px: f64,
    max_width_px: f64,
    measure: &dyn TextMeasure,
) -> FramecastResult<Vec<String>> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split(' ') {
        let mut candidate = current.clone();
        candidate.push_str(word);
        candidate.push(' ');
        let width = measure.measure_width(&candidate, size_px)?;
        if width > max_width_px && !current.is_empty() {
            lines.push(current.trim_end().to_string());
            current = format!("{word} ");
        } else {
            current = candidate;
        }
    }
    lines.push(current.trim_end().to_string());

    Ok(lines)
}

/// Place wrapped lines as a block vertically centered on `center_y_px`.
///
/// The block starts at `center_y_px - line_count * line_height_px / 2`; line
/// `i` sits `i * line_height_px` below the start.
pub fn layout_block(lines: Vec<String>, center_y_px: f64, line_height_px: f64) -> Vec<TextLine> {
    let start_y = center_y_px - (lines.len() as f64 * line_height_px) / 2.0;
    lines
        .into_iter()
        .enumerate()
        .map(|(i, text)| TextLine {
            text,
            y_px: start_y + (i as f64) * line_height_px,
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/layout/wrap.rs"]
mod tests;
