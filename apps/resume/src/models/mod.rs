pub mod resume;

pub use resume::{
    Education, Experience, Language, LinkItem, Personal, Project, ResumeData, SkillCategory,
};
