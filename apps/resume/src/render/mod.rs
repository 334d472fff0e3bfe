pub mod html;
pub mod pdf;

pub use html::render_html;
pub use pdf::{render_pdf, PdfBackend, PdfError, PrintPdfBackend};
