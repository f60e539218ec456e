use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::content::{ChapterContent, Subtopic};
use crate::course::{Catalog, CourseStructure};
use crate::error::{ContentLoadError, LoadErrorKind};
use crate::source::ContentSource;

#[derive(Default)]
struct Contents {
    catalog: Catalog,
    structures: HashMap<String, CourseStructure>,
    chapters: HashMap<String, ChapterContent>,
    quiz_csv: HashMap<String, String>,
    failing_chapters: Vec<String>,
    failing_quiz: bool,
    chapter_fetches: Vec<String>,
    quiz_fetches: usize,
}

/// In-memory source. Clones share contents, so a test can keep a handle
/// after moving one into a viewer.
#[derive(Clone, Default)]
pub struct MockSource {
    contents: Rc<RefCell<Contents>>,
}

impl MockSource {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_catalog(self, catalog: Catalog) -> Self {
        self.contents.borrow_mut().catalog = catalog;
        self
    }

    pub fn with_structure(self, course_id: &str, structure: CourseStructure) -> Self {
        self.contents
            .borrow_mut()
            .structures
            .insert(course_id.to_owned(), structure);
        self
    }

    pub fn with_chapter(self, chapter: ChapterContent) -> Self {
        let chapter_id = chapter.id.clone();
        self.with_chapter_at(&chapter_id, chapter)
    }

    /// Serves `chapter` under a file id other than its own `id`.
    pub fn with_chapter_at(self, chapter_id: &str, chapter: ChapterContent) -> Self {
        self.contents
            .borrow_mut()
            .chapters
            .insert(chapter_id.to_owned(), chapter);
        self
    }

    pub fn with_quiz_csv(self, course_id: &str, csv: &str) -> Self {
        self.contents
            .borrow_mut()
            .quiz_csv
            .insert(course_id.to_owned(), csv.to_owned());
        self
    }

    pub fn fail_chapter(&self, chapter_id: &str, failing: bool) {
        let mut contents = self.contents.borrow_mut();
        contents.failing_chapters.retain(|id| id != chapter_id);
        if failing {
            contents.failing_chapters.push(chapter_id.to_owned());
        }
    }

    pub fn fail_quiz(&self, failing: bool) {
        self.contents.borrow_mut().failing_quiz = failing;
    }

    pub fn chapter_fetches(&self, chapter_id: &str) -> usize {
        self.contents
            .borrow()
            .chapter_fetches
            .iter()
            .filter(|id| *id == chapter_id)
            .count()
    }

    pub fn quiz_fetches(&self) -> usize {
        self.contents.borrow().quiz_fetches
    }
}

impl ContentSource for MockSource {
    fn fetch_catalog(&self) -> Result<Catalog, ContentLoadError> {
        Ok(self.contents.borrow().catalog.clone())
    }

    fn fetch_structure(&self, course_id: &str) -> Result<CourseStructure, ContentLoadError> {
        self.contents
            .borrow()
            .structures
            .get(course_id)
            .cloned()
            .ok_or_else(|| ContentLoadError::not_found(format!("{}/structure.json", course_id)))
    }

    fn fetch_chapter(
        &self,
        course_id: &str,
        chapter_id: &str,
    ) -> Result<ChapterContent, ContentLoadError> {
        let mut contents = self.contents.borrow_mut();
        contents.chapter_fetches.push(chapter_id.to_owned());
        let resource = format!("{}/chapters/{}.json", course_id, chapter_id);
        if contents.failing_chapters.iter().any(|id| id == chapter_id) {
            return Err(ContentLoadError::new(
                LoadErrorKind::Fetch,
                resource,
                anyhow::anyhow!("connection reset"),
            ));
        }
        contents
            .chapters
            .get(chapter_id)
            .cloned()
            .ok_or_else(|| ContentLoadError::not_found(resource))
    }

    fn fetch_quiz_csv(&self, course_id: &str) -> Result<Option<String>, ContentLoadError> {
        let mut contents = self.contents.borrow_mut();
        contents.quiz_fetches += 1;
        if contents.failing_quiz {
            return Err(ContentLoadError::new(
                LoadErrorKind::Fetch,
                format!("{}/quizzes.csv", course_id),
                anyhow::anyhow!("connection reset"),
            ));
        }
        Ok(contents.quiz_csv.get(course_id).cloned())
    }
}

pub fn subtopic(id: &str, title: &str, content: Option<&str>) -> Subtopic {
    Subtopic {
        id: id.to_owned(),
        title: title.to_owned(),
        content: content.map(|c| c.to_owned()),
        code_example: None,
    }
}

pub fn chapter(id: &str, title: &str, subtopics: Vec<Subtopic>) -> ChapterContent {
    ChapterContent {
        id: id.to_owned(),
        title: title.to_owned(),
        description: None,
        practice_quiz: false,
        subtopics,
    }
}
