use serde::Deserialize;

pub mod filter;

pub use filter::{CourseFilter, FilterOptions};

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub estimated_time: String,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: bool,
}

impl Course {
    pub fn is_assessment(&self) -> bool {
        self.category == "Assessment" || self.tags.iter().any(|t| t == "assessment")
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Catalog {
    pub courses: Vec<Course>,
}

impl Catalog {
    pub fn find(&self, course_id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == course_id)
    }

    /// Courses flagged as published.
    pub fn active_courses(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter().filter(|c| c.status)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Topic {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub order: Option<u32>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ChapterSummary {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub order: Option<u32>,
    #[serde(default)]
    pub topics: Vec<Topic>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CourseStructure {
    #[serde(default)]
    pub course_id: Option<String>,
    #[serde(default)]
    pub chapters: Vec<ChapterSummary>,
}

impl CourseStructure {
    pub fn first_chapter(&self) -> Option<&ChapterSummary> {
        self.chapters.first()
    }

    pub fn chapter(&self, chapter_id: &str) -> Option<&ChapterSummary> {
        self.chapters.iter().find(|c| c.id == chapter_id)
    }

    /// The chapter listing the given topic in the sidebar.
    pub fn chapter_of_topic(&self, topic_id: &str) -> Option<&ChapterSummary> {
        self.chapters
            .iter()
            .find(|c| c.topics.iter().any(|t| t.id == topic_id))
    }
}
