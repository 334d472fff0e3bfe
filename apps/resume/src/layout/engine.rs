//! Maps a [`ResumeData`] onto an ordered list of layout rows.
//!
//! Section order is fixed: header, contact, experience, education, skills,
//! languages, projects. A section whose list is empty is omitted entirely.
//! The engine is cheap to build and holds no shared state, so every PDF
//! export constructs its own.

use tracing::debug;

use crate::layout::font_metrics::FontStyle;
use crate::layout::grid::{Align, Col, Color, Row, RuleProps, TextProps};
use crate::layout::text::{ensure_text_fits_in_column, group_skills};
use crate::layout::theme::*;
use crate::models::{Education, Experience, Language, Project, ResumeData, SkillCategory};

pub struct LayoutEngine<'a> {
    resume: &'a ResumeData,
    rows: Vec<Row>,
}

impl<'a> LayoutEngine<'a> {
    pub fn new(resume: &'a ResumeData) -> Self {
        LayoutEngine {
            resume,
            rows: Vec::new(),
        }
    }

    /// Emits every section and returns the finished rows.
    pub fn build(mut self) -> Vec<Row> {
        let resume = self.resume;

        self.add_header();
        self.add_contact();

        if !resume.experience.is_empty() {
            self.add_section_title("Experience", Some("Professional work history"));
            for exp in &resume.experience {
                self.add_experience_item(exp);
            }
        }

        if !resume.education.is_empty() {
            self.add_section_title("Education", Some("Academic background and qualifications"));
            for edu in &resume.education {
                self.add_education_item(edu);
            }
        }

        if !resume.skills.is_empty() {
            self.add_section_title("Skills", Some("Technical competencies and expertise"));
            self.add_skills(&resume.skills);
        }

        if !resume.languages.is_empty() {
            self.add_section_title("Languages", None);
            self.add_languages(&resume.languages);
        }

        if !resume.projects.is_empty() {
            self.add_section_title("Projects", None);
            for project in &resume.projects {
                self.add_project_item(project);
            }
        }

        debug!(rows = self.rows.len(), "Resume layout built");
        self.rows
    }

    fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    fn spacer(&mut self, height_mm: f32) {
        self.rows.push(Row::spacer(height_mm));
    }

    fn add_header(&mut self) {
        let resume = self.resume;
        let personal = &resume.personal;

        self.push(Row::new(16.0).col(Col::new(12).text(
            &personal.name,
            props(FONT_SIZE_TITLE, FontStyle::Bold, Align::Center, HEADER_COLOR),
        )));
        self.push(Row::new(8.0).col(Col::new(12).text(
            &personal.title,
            props(FONT_SIZE_SUBTITLE, FontStyle::Normal, Align::Center, HEADER_COLOR),
        )));

        if !personal.summary.trim().is_empty() {
            self.spacer(4.0);
            let summary = ensure_text_fits_in_column(personal.summary.trim(), WIDE_CHARS_PER_LINE);
            self.push(Row::new(6.0).col(Col::new(12).text(
                summary,
                props(FONT_SIZE_NORMAL, FontStyle::Italic, Align::Left, PRIMARY_COLOR).top(1.0),
            )));
        }

        self.spacer(10.0);
    }

    fn add_contact(&mut self) {
        let resume = self.resume;
        let contacts = resume.personal.contacts();
        if contacts.is_empty() {
            return;
        }

        self.add_heading("Contact Information", 12.0, 0.5);
        for (label, value) in contacts {
            self.push(
                Row::new(7.0)
                    .col(Col::new(3).text(
                        format!("{label}:"),
                        props(FONT_SIZE_NORMAL, FontStyle::Bold, Align::Left, HEADER_COLOR),
                    ))
                    .col(Col::new(9).text(
                        value,
                        props(FONT_SIZE_NORMAL, FontStyle::Normal, Align::Left, PRIMARY_COLOR),
                    )),
            );
        }
    }

    /// Section heading preceded by spacing, followed by a divider and an
    /// optional italic subtitle.
    fn add_section_title(&mut self, title: &str, subtitle: Option<&str>) {
        self.spacer(8.0);
        self.add_heading(title, 10.0, 0.35);

        if let Some(subtitle) = subtitle {
            self.push(Row::new(6.0).col(Col::new(12).text(
                subtitle,
                props(FONT_SIZE_NORMAL, FontStyle::Italic, Align::Left, ACCENT_COLOR).top(1.0),
            )));
            self.spacer(5.0);
        }
    }

    fn add_heading(&mut self, title: &str, height_mm: f32, divider_length: f32) {
        self.push(Row::new(height_mm).col(Col::new(12).text(
            title,
            props(FONT_SIZE_HEADING, FontStyle::Bold, Align::Left, HEADER_COLOR).top(2.0),
        )));
        self.add_divider(divider_length);
    }

    fn add_divider(&mut self, length: f32) {
        self.push(Row::new(2.0).col(Col::new(12).rule(RuleProps {
            color: HEADER_COLOR,
            thickness_pt: 1.2,
            length,
        })));
        self.spacer(2.0);
    }

    fn add_experience_item(&mut self, exp: &Experience) {
        self.spacer(3.0);

        self.push(
            Row::new(10.0)
                .col(Col::new(8).text(
                    &exp.position,
                    props(FONT_SIZE_SUBHEADING, FontStyle::Bold, Align::Left, HEADER_COLOR).top(2.0),
                ))
                .col(Col::new(4).text(
                    exp.period(),
                    props(FONT_SIZE_NORMAL, FontStyle::Bold, Align::Right, GRAY_COLOR).top(2.0),
                )),
        );
        self.push(place_row(&exp.company, &exp.location));

        if let Some(employment_type) = exp.employment_type() {
            self.push(Row::new(7.0).col(Col::new(12).text(
                format!("• {employment_type} •"),
                props(FONT_SIZE_NORMAL, FontStyle::Bold, Align::Left, HEADER_COLOR).top(1.0),
            )));
        }

        let bullets: Vec<&str> = exp
            .description
            .iter()
            .map(|item| item.trim())
            .filter(|item| !item.is_empty())
            .collect();
        if !bullets.is_empty() {
            self.spacer(2.0);
            for item in bullets {
                self.push(Row::new(6.0).col(Col::new(12).text(
                    bullet_point(item, DESCRIPTION_CHARS_PER_LINE),
                    props(FONT_SIZE_NORMAL, FontStyle::Normal, Align::Left, PRIMARY_COLOR)
                        .top(1.5),
                )));
            }
        }

        if !exp.technologies.is_empty() {
            self.push(technologies_row(&exp.technology_names()));
        }

        self.add_separator("• • • • •", 4.0);
    }

    fn add_education_item(&mut self, edu: &Education) {
        self.spacer(2.0);

        self.push(
            Row::new(8.0)
                .col(Col::new(8).text(
                    &edu.degree,
                    props(FONT_SIZE_SUBHEADING, FontStyle::Bold, Align::Left, HEADER_COLOR).top(1.0),
                ))
                .col(Col::new(4).text(
                    edu.period(),
                    props(FONT_SIZE_NORMAL, FontStyle::Normal, Align::Right, GRAY_COLOR).top(1.0),
                )),
        );
        self.push(place_row(&edu.institution, &edu.location));
        self.add_separator("· · ·", 0.0);
    }

    fn add_skills(&mut self, skills: &[SkillCategory]) {
        for (i, category) in skills.iter().enumerate() {
            if i > 0 {
                self.spacer(3.0);
            }

            self.push(Row::new(8.0).col(Col::new(12).text(
                &category.category,
                props(FONT_SIZE_SUBHEADING, FontStyle::Bold, Align::Left, HEADER_COLOR).top(1.0),
            )));
            self.add_divider(0.18);

            let formatted: Vec<String> = category
                .items
                .iter()
                .map(|item| format!("• {}", item.name))
                .collect();

            for group in group_skills(&formatted, SKILLS_PER_GROUP) {
                let line = ensure_text_fits_in_column(&group.join("   "), WIDE_CHARS_PER_LINE);
                self.push(Row::new(6.0).col(Col::new(12).text(
                    line,
                    props(FONT_SIZE_NORMAL, FontStyle::Normal, Align::Left, PRIMARY_COLOR).top(1.0),
                )));
            }

            self.spacer(1.0);
        }
    }

    fn add_languages(&mut self, languages: &[Language]) {
        for lang in languages {
            self.push(Row::new(7.0).col(Col::new(12).text(
                format!("• {} — {}", lang.language, lang.proficiency),
                props(FONT_SIZE_NORMAL, FontStyle::Normal, Align::Left, PRIMARY_COLOR),
            )));
        }
        self.spacer(3.0);
    }

    fn add_project_item(&mut self, project: &Project) {
        self.spacer(2.0);

        let mut title_row = Row::new(8.0);
        if let Some(link) = project.link() {
            title_row = title_row
                .col(Col::new(7).text(
                    &project.name,
                    props(FONT_SIZE_SUBHEADING, FontStyle::Bold, Align::Left, HEADER_COLOR).top(1.0),
                ))
                .col(Col::new(5).text(
                    link,
                    props(FONT_SIZE_NORMAL, FontStyle::Normal, Align::Right, HEADER_COLOR).top(1.0),
                ));
        } else {
            title_row = title_row.col(Col::new(12).text(
                &project.name,
                props(FONT_SIZE_SUBHEADING, FontStyle::Bold, Align::Left, HEADER_COLOR).top(1.0),
            ));
        }
        self.push(title_row);

        if !project.description.trim().is_empty() {
            self.push(Row::new(6.0).col(Col::new(12).text(
                ensure_text_fits_in_column(project.description.trim(), WIDE_CHARS_PER_LINE),
                props(FONT_SIZE_NORMAL, FontStyle::Normal, Align::Left, PRIMARY_COLOR).top(1.0),
            )));
        }

        if !project.technologies.is_empty() {
            self.push(technologies_row(&project.technology_names()));
        }
    }

    fn add_separator(&mut self, glyphs: &str, padding_mm: f32) {
        if padding_mm > 0.0 {
            self.spacer(padding_mm);
        }
        self.push(Row::new(3.0).col(Col::new(12).text(
            glyphs,
            props(FONT_SIZE_SMALL, FontStyle::Normal, Align::Center, GRAY_COLOR),
        )));
        if padding_mm > 0.0 {
            self.spacer(padding_mm);
        }
    }
}

/// Convenience wrapper around [`LayoutEngine`].
pub fn layout_resume(resume: &ResumeData) -> Vec<Row> {
    LayoutEngine::new(resume).build()
}

fn props(size_pt: f32, style: FontStyle, align: Align, color: Color) -> TextProps {
    TextProps {
        size_pt,
        style,
        align,
        color,
        top_mm: 0.0,
    }
}

/// Bold name on the left, italic location on the right.
fn place_row(name: &str, location: &str) -> Row {
    Row::new(7.0)
        .col(Col::new(8).text(
            name,
            props(FONT_SIZE_NORMAL, FontStyle::Bold, Align::Left, PRIMARY_COLOR).top(1.0),
        ))
        .col(Col::new(4).text(
            location,
            props(FONT_SIZE_NORMAL, FontStyle::Italic, Align::Right, GRAY_COLOR).top(1.0),
        ))
}

fn technologies_row(names: &str) -> Row {
    let line = ensure_text_fits_in_column(&format!("Technologies: {names}"), WIDE_CHARS_PER_LINE);
    Row::new(6.0).col(Col::new(12).text(
        line,
        props(FONT_SIZE_NORMAL, FontStyle::Italic, Align::Left, GRAY_COLOR).top(1.0),
    ))
}

/// `"• "` prefix with continuation lines indented to align under the text.
fn bullet_point(item: &str, max_chars: usize) -> String {
    format!("• {}", ensure_text_fits_in_column(item, max_chars)).replace('\n', "\n  ")
}
