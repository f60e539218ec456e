pub mod content;
pub mod course;
pub mod error;
pub mod quiz;
pub mod search;
pub mod settings;
pub mod source;
pub mod table;
pub mod viewer;

pub use crate::error::{ContentLoadError, LoadErrorKind, SessionError};
pub use crate::settings::Settings;
pub use crate::viewer::{ChapterView, CourseViewer};
