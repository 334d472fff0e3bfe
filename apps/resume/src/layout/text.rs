//! Greedy text wrapping and list grouping shared by the layout engine and the
//! PDF backend.

use crate::layout::font_metrics::FontMetricTable;

/// Splits `text` into lines of at most `max_chars_per_line` characters.
///
/// Words are packed greedily; a word longer than the limit sits alone on its
/// line and is never split. Text already within the limit is returned as is,
/// which keeps the operation idempotent for a fixed width.
pub fn ensure_text_fits_in_column(text: &str, max_chars_per_line: usize) -> String {
    if char_len(text) <= max_chars_per_line {
        return text.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = char_len(word);
        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len > max_chars_per_line {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        } else {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines.join("\n")
}

/// Partitions `items` into consecutive groups of `group_size`, preserving order.
/// The last group may be shorter. A size of 0 is treated as 1.
pub fn group_skills<T: Clone>(items: &[T], group_size: usize) -> Vec<Vec<T>> {
    items
        .chunks(group_size.max(1))
        .map(|chunk| chunk.to_vec())
        .collect()
}

/// Greedy word-wrap measured in points. Same packing policy as
/// `ensure_text_fits_in_column`, but with real glyph widths.
///
/// Leading spaces of the input are kept on the first line so indented
/// continuation lines stay indented. An empty string yields one empty line.
pub fn wrap_to_width(
    text: &str,
    metrics: &FontMetricTable,
    size_pt: f32,
    max_width_pt: f32,
) -> Vec<String> {
    if metrics.measure_str(text, size_pt) <= max_width_pt {
        return vec![text.to_string()];
    }

    let indent_len = text.len() - text.trim_start().len();
    let indent = &text[..indent_len];
    let space_w = metrics.measure_str(" ", size_pt);

    let mut lines: Vec<String> = Vec::new();
    let mut current = indent.to_string();
    let mut current_width = metrics.measure_str(indent, size_pt);
    let mut first_on_line = true;

    for word in text.split_whitespace() {
        let word_w = metrics.measure_str(word, size_pt);
        if first_on_line {
            current.push_str(word);
            current_width += word_w;
            first_on_line = false;
        } else if current_width + space_w + word_w > max_width_pt {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_w;
        } else {
            current.push(' ');
            current.push_str(word);
            current_width += space_w + word_w;
        }
    }
    lines.push(current);
    lines
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}
