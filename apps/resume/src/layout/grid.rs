//! Row/column layout primitives consumed by a [`PdfBackend`](crate::render::pdf::PdfBackend).
//!
//! A document is an ordered list of rows. Each row spans the content width and
//! is split into columns measured in grid units (12 per row). Components inside
//! a column stack top to bottom.

use crate::layout::font_metrics::FontStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Color { red, green, blue }
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextProps {
    pub size_pt: f32,
    pub style: FontStyle,
    pub align: Align,
    pub color: Color,
    /// Padding above the text, in millimetres.
    pub top_mm: f32,
}

impl TextProps {
    pub fn top(mut self, top_mm: f32) -> Self {
        self.top_mm = top_mm;
        self
    }
}

impl Default for TextProps {
    fn default() -> Self {
        TextProps {
            size_pt: 10.0,
            style: FontStyle::Normal,
            align: Align::Left,
            color: Color::BLACK,
            top_mm: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// `\n` forces a line break; long lines are also wrapped to the column.
    pub content: String,
    pub props: TextProps,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RuleProps {
    pub color: Color,
    pub thickness_pt: f32,
    /// Fraction of the column width, 0.0..=1.0.
    pub length: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    Text(Text),
    Rule(RuleProps),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Col {
    pub size: u8,
    pub components: Vec<Component>,
}

impl Col {
    pub fn new(size: u8) -> Self {
        Col {
            size,
            components: Vec::new(),
        }
    }

    pub fn text(mut self, content: impl Into<String>, props: TextProps) -> Self {
        self.components.push(Component::Text(Text {
            content: content.into(),
            props,
        }));
        self
    }

    pub fn rule(mut self, props: RuleProps) -> Self {
        self.components.push(Component::Rule(props));
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Minimum height in millimetres; content taller than this grows the row.
    pub height_mm: f32,
    pub cols: Vec<Col>,
}

impl Row {
    pub fn new(height_mm: f32) -> Self {
        Row {
            height_mm,
            cols: Vec::new(),
        }
    }

    /// An empty row used for vertical spacing.
    pub fn spacer(height_mm: f32) -> Self {
        Self::new(height_mm)
    }

    pub fn col(mut self, col: Col) -> Self {
        self.cols.push(col);
        self
    }

    pub fn is_spacer(&self) -> bool {
        self.cols.is_empty()
    }

    /// Sum of the column sizes, in grid units.
    pub fn span(&self) -> u32 {
        self.cols.iter().map(|c| c.size as u32).sum()
    }

    /// All text contents of the row, left to right.
    pub fn texts(&self) -> impl Iterator<Item = &Text> {
        self.cols
            .iter()
            .flat_map(|col| col.components.iter())
            .filter_map(|component| match component {
                Component::Text(text) => Some(text),
                Component::Rule(_) => None,
            })
    }
}
