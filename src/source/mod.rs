use crate::content::ChapterContent;
use crate::course::{Catalog, CourseStructure};
use crate::error::ContentLoadError;

pub mod disk;
#[cfg(test)]
pub mod mock;

pub use disk::DiskSource;

/// Where course data comes from. Implementations own timeouts and transport.
pub trait ContentSource {
    fn fetch_catalog(&self) -> Result<Catalog, ContentLoadError>;

    fn fetch_structure(&self, course_id: &str) -> Result<CourseStructure, ContentLoadError>;

    fn fetch_chapter(
        &self,
        course_id: &str,
        chapter_id: &str,
    ) -> Result<ChapterContent, ContentLoadError>;

    /// `Ok(None)` when the course has no quiz data at all.
    fn fetch_quiz_csv(&self, course_id: &str) -> Result<Option<String>, ContentLoadError>;
}
