use serde::Deserialize;

pub mod cache;

pub use cache::ContentCache;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Subtopic {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub code_example: Option<String>,
}

impl Subtopic {
    /// Body text, treating a blank string like a missing one.
    pub fn body(&self) -> Option<&str> {
        self.content.as_deref().filter(|c| !c.is_empty())
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ChapterContent {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "practice-quiz", default)]
    pub practice_quiz: bool,
    #[serde(default)]
    pub subtopics: Vec<Subtopic>,
}

impl ChapterContent {
    pub fn from_json(json: &str) -> serde_json::Result<ChapterContent> {
        serde_json::from_str(json)
    }

    pub fn subtopic(&self, subtopic_id: &str) -> Option<&Subtopic> {
        self.subtopics.iter().find(|s| s.id == subtopic_id)
    }
}
