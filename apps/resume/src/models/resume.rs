use serde::{Deserialize, Serialize};

/// The résumé record as described by `config.yaml`.
///
/// Every key is optional: missing scalars deserialize to empty strings and
/// missing lists to empty vectors. The record is loaded once at startup and
/// never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeData {
    pub personal: Personal,
    pub skills: Vec<SkillCategory>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub projects: Vec<Project>,
    pub languages: Vec<Language>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Personal {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
    pub summary: String,
}

impl Personal {
    /// Labelled contact fields in display order, skipping blank values.
    pub fn contacts(&self) -> Vec<(&'static str, &str)> {
        [
            ("Email", self.email.as_str()),
            ("Phone", self.phone.as_str()),
            ("Location", self.location.as_str()),
            ("LinkedIn", self.linkedin.as_str()),
            ("GitHub", self.github.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .collect()
    }
}

/// A named item with an optional hyperlink (skills, technologies).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkItem {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl LinkItem {
    /// The link target, treating an empty string as no link.
    pub fn link(&self) -> Option<&str> {
        non_blank(self.link.as_deref().unwrap_or_default())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillCategory {
    pub category: String,
    pub items: Vec<LinkItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub description: Vec<String>,
    pub employment_type: String,
    pub technologies: Vec<LinkItem>,
}

impl Experience {
    pub fn period(&self) -> String {
        period(&self.start_date, &self.end_date)
    }

    pub fn employment_type(&self) -> Option<&str> {
        non_blank(&self.employment_type)
    }

    pub fn technology_names(&self) -> String {
        join_names(&self.technologies)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
}

impl Education {
    pub fn period(&self) -> String {
        period(&self.start_date, &self.end_date)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub technologies: Vec<LinkItem>,
    pub link: String,
}

impl Project {
    pub fn link(&self) -> Option<&str> {
        non_blank(&self.link)
    }

    pub fn technology_names(&self) -> String {
        join_names(&self.technologies)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Language {
    pub language: String,
    pub proficiency: String,
}

/// Dates are opaque display strings; they are joined, never parsed.
fn period(start: &str, end: &str) -> String {
    format!("{start} - {end}")
}

fn non_blank(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

fn join_names(items: &[LinkItem]) -> String {
    items
        .iter()
        .map(|item| item.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
personal:
  name: Jane Doe
  title: Backend Engineer
  email: jane@example.com
  github: github.com/jane
experience:
  - company: Acme
    position: Engineer
    location: Berlin
    startDate: Jan 2020
    endDate: Present
    employmentType: Full-time
    description:
      - Built things
    technologies:
      - name: Rust
        link: https://www.rust-lang.org
      - name: Postgres
skills:
  - category: Languages
    items:
      - name: Rust
      - name: Go
        link: ""
"#;

    fn sample() -> ResumeData {
        serde_yaml::from_str(SAMPLE).expect("sample should parse")
    }

    #[test]
    fn test_camel_case_fields_deserialize() {
        let resume = sample();
        let exp = &resume.experience[0];
        assert_eq!(exp.start_date, "Jan 2020");
        assert_eq!(exp.end_date, "Present");
        assert_eq!(exp.employment_type(), Some("Full-time"));
        assert_eq!(exp.period(), "Jan 2020 - Present");
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let resume = sample();
        assert!(resume.education.is_empty());
        assert!(resume.projects.is_empty());
        assert!(resume.languages.is_empty());
        assert_eq!(resume.personal.phone, "");
    }

    #[test]
    fn test_empty_link_is_treated_as_absent() {
        let resume = sample();
        let items = &resume.skills[0].items;
        assert_eq!(items[0].link(), None);
        assert_eq!(items[1].link(), None);
        assert_eq!(
            resume.experience[0].technologies[0].link(),
            Some("https://www.rust-lang.org")
        );
    }

    #[test]
    fn test_technology_names_are_comma_joined() {
        assert_eq!(sample().experience[0].technology_names(), "Rust, Postgres");
    }

    #[test]
    fn test_contacts_skip_blank_fields_and_keep_order() {
        let resume = sample();
        let contacts = resume.personal.contacts();
        assert_eq!(
            contacts,
            vec![("Email", "jane@example.com"), ("GitHub", "github.com/jane")]
        );
    }

    #[test]
    fn test_blank_employment_type_is_none() {
        let exp = Experience {
            employment_type: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(exp.employment_type(), None);
    }
}
