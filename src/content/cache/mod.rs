use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::content::ChapterContent;
use crate::error::ContentLoadError;
use crate::source::ContentSource;


/// Chapters of one course, fetched at most once each and kept for as long as
/// the course stays open. Iteration follows the order chapters were first
/// loaded in.
#[derive(Debug)]
pub struct ContentCache {
    course_id: String,
    chapters: HashMap<String, ChapterContent>,
    load_order: Vec<String>,
}

impl ContentCache {
    pub fn new<S: Into<String>>(course_id: S) -> Self {
        ContentCache {
            course_id: course_id.into(),
            chapters: HashMap::new(),
            load_order: Vec::new(),
        }
    }

    pub fn course_id(&self) -> &str {
        &self.course_id
    }

    pub fn get<S: ContentSource + ?Sized>(
        &mut self,
        source: &S,
        chapter_id: &str,
    ) -> Result<&ChapterContent, ContentLoadError> {
        match self.chapters.entry(chapter_id.to_owned()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let content = source.fetch_chapter(&self.course_id, chapter_id)?;
                log::debug!("Cached chapter {} of course {}", chapter_id, self.course_id);
                self.load_order.push(chapter_id.to_owned());
                Ok(entry.insert(content))
            }
        }
    }

    pub fn peek(&self, chapter_id: &str) -> Option<&ChapterContent> {
        self.chapters.get(chapter_id)
    }

    pub fn contains(&self, chapter_id: &str) -> bool {
        self.chapters.contains_key(chapter_id)
    }

    pub fn len(&self) -> usize {
        self.load_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.load_order.is_empty()
    }

    /// Cached chapters keyed by the id they were requested under, which need
    /// not match the `id` inside the chapter file.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ChapterContent)> {
        self.load_order
            .iter()
            .filter_map(move |id| self.chapters.get(id).map(|c| (id.as_str(), c)))
    }
}
