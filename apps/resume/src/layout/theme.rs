//! Styling constants for the PDF résumé.

use crate::layout::grid::Color;

// Font sizes (pt)
pub const FONT_SIZE_TITLE: f32 = 26.0;
pub const FONT_SIZE_SUBTITLE: f32 = 18.0;
pub const FONT_SIZE_HEADING: f32 = 16.0;
pub const FONT_SIZE_SUBHEADING: f32 = 12.0;
pub const FONT_SIZE_NORMAL: f32 = 10.0;
pub const FONT_SIZE_SMALL: f32 = 8.0;

// Wrap widths (characters)
pub const DESCRIPTION_CHARS_PER_LINE: usize = 80;
pub const WIDE_CHARS_PER_LINE: usize = 90;

pub const SKILLS_PER_GROUP: usize = 3;

pub const HEADER_COLOR: Color = Color::rgb(0, 51, 102);
pub const PRIMARY_COLOR: Color = Color::rgb(17, 24, 39);
pub const GRAY_COLOR: Color = Color::rgb(107, 114, 128);
pub const ACCENT_COLOR: Color = Color::rgb(55, 48, 163);
