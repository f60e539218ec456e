use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::content::ChapterContent;
use crate::course::{Catalog, CourseStructure};
use crate::error::{ContentLoadError, LoadErrorKind};
use crate::settings::Settings;
use crate::source::ContentSource;

/// Serves the static layout of a course site from a directory:
/// `courses.json`, `<course>/structure.json`, `<course>/chapters/<chapter>.json`
/// and `<course>/<quiz file>`.
#[derive(Clone, Debug)]
pub struct DiskSource {
    root: PathBuf,
    quiz_file_name: String,
}

impl DiskSource {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        DiskSource {
            root: root.into(),
            quiz_file_name: Settings::default().quiz_file_name,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        DiskSource {
            root: settings.content_root.clone(),
            quiz_file_name: settings.quiz_file_name.clone(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read(&self, relative: &Path) -> Result<Option<String>, ContentLoadError> {
        let path = self.root.join(relative);
        log::debug!("Reading {:?}", path);
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ContentLoadError::new(
                LoadErrorKind::Fetch,
                relative.display().to_string(),
                e,
            )),
        }
    }

    fn read_json<T: DeserializeOwned>(&self, relative: &Path) -> Result<T, ContentLoadError> {
        let resource = relative.display().to_string();
        let text = self
            .read(relative)?
            .ok_or_else(|| ContentLoadError::not_found(resource.clone()))?;
        serde_json::from_str(&text)
            .map_err(|e| ContentLoadError::new(LoadErrorKind::Parse, resource, e))
    }
}

/// Ids name a single file or directory below the root; anything that could
/// step outside it is reported as missing.
fn segment(id: &str) -> Result<&str, ContentLoadError> {
    let escapes = id.is_empty()
        || id.contains("..")
        || id.contains('/')
        || id.contains('\\')
        || Path::new(id).is_absolute();
    if escapes {
        log::warn!("Refusing path-like content id {:?}", id);
        return Err(ContentLoadError::not_found(id));
    }
    Ok(id)
}

impl ContentSource for DiskSource {
    fn fetch_catalog(&self) -> Result<Catalog, ContentLoadError> {
        self.read_json(Path::new("courses.json"))
    }

    fn fetch_structure(&self, course_id: &str) -> Result<CourseStructure, ContentLoadError> {
        self.read_json(&Path::new(segment(course_id)?).join("structure.json"))
    }

    fn fetch_chapter(
        &self,
        course_id: &str,
        chapter_id: &str,
    ) -> Result<ChapterContent, ContentLoadError> {
        let relative = Path::new(segment(course_id)?)
            .join("chapters")
            .join(format!("{}.json", segment(chapter_id)?));
        self.read_json(&relative)
    }

    fn fetch_quiz_csv(&self, course_id: &str) -> Result<Option<String>, ContentLoadError> {
        self.read(&Path::new(segment(course_id)?).join(&self.quiz_file_name))
    }
}
