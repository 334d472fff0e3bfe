// PDF layout: maps the résumé onto a 12-column row grid that a PDF backend
// flows down the page. Everything here is pure and synchronous.

pub mod engine;
pub mod font_metrics;
pub mod grid;
pub mod page;
pub mod text;
pub mod theme;

// Re-export the public API consumed by the renderers.
pub use engine::{layout_resume, LayoutEngine};
pub use font_metrics::{get_metrics, FontStyle};
pub use grid::{Align, Col, Color, Component, Row, RuleProps, Text, TextProps};
pub use page::PageConfig;
pub use text::{ensure_text_fits_in_column, group_skills};
