//! Web rendering of the résumé through the `resume.html` askama template.

use askama::Template;

use crate::models::ResumeData;

#[derive(Template)]
#[template(path = "resume.html")]
struct ResumePage<'a> {
    resume: &'a ResumeData,
    /// Target of the download button; `None` hides the button.
    pdf_link: Option<&'a str>,
}

/// Renders the full résumé page.
///
/// Asset links are relative (`static/...`) so the same markup works behind the
/// server and from a static host rooted at any sub-path.
pub fn render_html(resume: &ResumeData, pdf_link: Option<&str>) -> Result<String, askama::Error> {
    ResumePage { resume, pdf_link }.render()
}
