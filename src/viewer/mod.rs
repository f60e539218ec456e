use crate::content::{ChapterContent, ContentCache, Subtopic};
use crate::course::{Catalog, Course, CourseStructure};
use crate::error::{ContentLoadError, LoadErrorKind};
use crate::quiz::{QuizBank, QuizQuestion, QuizSession, QuizSessions};
use crate::search::{SearchIndex, SearchResults};
use crate::settings::Settings;
use crate::source::ContentSource;


/// A chapter ready for display. Quizzes are only listed when the chapter has
/// practice quizzes enabled, and only for subtopics that have questions.
#[derive(Debug)]
pub struct ChapterView<'a> {
    pub chapter: &'a ChapterContent,
    pub quizzes: Vec<(&'a Subtopic, &'a [QuizQuestion])>,
}

impl<'a> ChapterView<'a> {
    pub fn quiz_for(&self, subtopic_id: &str) -> Option<&'a [QuizQuestion]> {
        self.quizzes
            .iter()
            .find(|(s, _)| s.id == subtopic_id)
            .map(|(_, questions)| *questions)
    }
}

/// Everything kept about the course currently being viewed.
#[derive(Debug)]
pub struct OpenCourse {
    pub course: Course,
    pub structure: CourseStructure,
    cache: ContentCache,
    quiz_bank: QuizBank,
    sessions: QuizSessions,
    current_chapter: Option<String>,
}

impl OpenCourse {
    fn new(course: Course, structure: CourseStructure) -> Self {
        OpenCourse {
            cache: ContentCache::new(course.id.clone()),
            quiz_bank: QuizBank::new(course.id.clone()),
            sessions: QuizSessions::new(),
            current_chapter: None,
            course,
            structure,
        }
    }

    pub fn cache(&self) -> &ContentCache {
        &self.cache
    }

    pub fn quiz_bank(&self) -> &QuizBank {
        &self.quiz_bank
    }

    pub fn current_chapter(&self) -> Option<&ChapterContent> {
        self.current_chapter
            .as_ref()
            .and_then(|id| self.cache.peek(id))
    }
}

/// Page controller state: the catalog plus the course being viewed, with its
/// chapter cache, quiz bank and quiz sessions. Nothing here is global; the
/// view layer holds one viewer and calls into it.
pub struct CourseViewer<S: ContentSource> {
    source: S,
    search_index: SearchIndex,
    catalog: Catalog,
    open_course: Option<OpenCourse>,
}

impl<S: ContentSource> CourseViewer<S> {
    pub fn new(source: S, settings: &Settings) -> Self {
        CourseViewer {
            source,
            search_index: SearchIndex::new(settings.preview_length),
            catalog: Catalog::default(),
            open_course: None,
        }
    }

    pub fn load_catalog(&mut self) -> Result<&Catalog, ContentLoadError> {
        self.catalog = self.source.fetch_catalog()?;
        log::info!("Loaded {} courses", self.catalog.courses.len());
        Ok(&self.catalog)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn open_course(&self) -> Option<&OpenCourse> {
        self.open_course.as_ref()
    }

    /// Switches to another course, dropping everything cached for the previous
    /// one. Reopening the current course keeps its state.
    pub fn load_course(&mut self, course_id: &str) -> Result<&OpenCourse, ContentLoadError> {
        let already_open = self
            .open_course
            .as_ref()
            .map_or(false, |c| c.course.id == course_id);

        if !already_open {
            let course = self.catalog.find(course_id).cloned().ok_or_else(|| {
                ContentLoadError::not_found(format!("course {}", course_id))
            })?;
            if course.is_assessment() {
                log::info!("Course {} is an assessment", course_id);
            }
            let structure = self.source.fetch_structure(course_id)?;
            log::info!(
                "Opened course {} with {} chapters",
                course_id,
                structure.chapters.len()
            );
            self.open_course = Some(OpenCourse::new(course, structure));
        }

        self.open_course
            .as_ref()
            .ok_or_else(|| ContentLoadError::not_found(format!("course {}", course_id)))
    }

    pub fn load_chapter(&mut self, chapter_id: &str) -> Result<ChapterView<'_>, ContentLoadError> {
        let source = &self.source;
        let open = self.open_course.as_mut().ok_or_else(|| {
            ContentLoadError::new(
                LoadErrorKind::NotFound,
                format!("chapter {}", chapter_id),
                anyhow::anyhow!("no course is open"),
            )
        })?;

        let practice_quiz = open.cache.get(source, chapter_id)?.practice_quiz;
        open.current_chapter = Some(chapter_id.to_owned());

        if practice_quiz {
            if let Err(e) = open.quiz_bank.build(source) {
                log::warn!("Practice quizzes unavailable: {}", e);
            }
        }

        let open: &OpenCourse = open;
        let chapter = open
            .cache
            .peek(chapter_id)
            .ok_or_else(|| ContentLoadError::not_found(format!("chapter {}", chapter_id)))?;
        let quizzes = if chapter.practice_quiz {
            chapter
                .subtopics
                .iter()
                .map(|s| (s, open.quiz_bank.get(&s.id)))
                .filter(|(_, questions)| !questions.is_empty())
                .collect()
        } else {
            Vec::new()
        };
        Ok(ChapterView { chapter, quizzes })
    }

    /// Loads the first chapter of the open course, if it has any.
    pub fn load_default_chapter(&mut self) -> Result<Option<ChapterView<'_>>, ContentLoadError> {
        let first = self
            .open_course
            .as_ref()
            .and_then(|c| c.structure.first_chapter())
            .map(|c| c.id.clone());
        match first {
            Some(chapter_id) => self.load_chapter(&chapter_id).map(Some),
            None => Ok(None),
        }
    }

    pub fn search(&self, query: &str) -> SearchResults {
        match &self.open_course {
            Some(open) => self.search_index.search(query, &open.cache),
            None if query.trim().is_empty() => SearchResults::Inactive,
            None => SearchResults::Active(Vec::new()),
        }
    }

    /// Starts or resumes the quiz of a subtopic. Only subtopics of a loaded
    /// chapter with practice quizzes enabled get one.
    pub fn open_quiz(&mut self, subtopic_id: &str) -> Option<&mut QuizSession> {
        let open = self.open_course.as_mut()?;
        let enabled = open
            .cache
            .iter()
            .any(|(_, chapter)| chapter.practice_quiz && chapter.subtopic(subtopic_id).is_some());
        if !enabled {
            log::debug!("No practice quiz enabled for subtopic {}", subtopic_id);
            return None;
        }
        open.sessions.open(subtopic_id, &open.quiz_bank)
    }

    pub fn quiz_session(&self, subtopic_id: &str) -> Option<&QuizSession> {
        self.open_course.as_ref()?.sessions.get(subtopic_id)
    }

    pub fn quiz_session_mut(&mut self, subtopic_id: &str) -> Option<&mut QuizSession> {
        self.open_course.as_mut()?.sessions.get_mut(subtopic_id)
    }
}
