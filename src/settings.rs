use std::env;
use std::path::PathBuf;

pub const ENV_ROOT: &'static str = "COURSE_VIEWER_ROOT";
pub const ENV_QUIZ_FILE: &'static str = "COURSE_VIEWER_QUIZ_FILE";
pub const ENV_PREVIEW_LENGTH: &'static str = "COURSE_VIEWER_PREVIEW_LENGTH";

#[derive(Clone, Debug)]
pub struct Settings {
    pub content_root: PathBuf,
    pub quiz_file_name: String,
    pub preview_length: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            content_root: PathBuf::from("."),
            quiz_file_name: "quizzes.csv".to_owned(),
            preview_length: 150,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        let mut settings = Settings::default();
        if let Ok(root) = env::var(ENV_ROOT) {
            settings.content_root = PathBuf::from(root);
        }
        if let Ok(file_name) = env::var(ENV_QUIZ_FILE) {
            if !file_name.trim().is_empty() {
                settings.quiz_file_name = file_name.trim().to_owned();
            }
        }
        if let Ok(length) = env::var(ENV_PREVIEW_LENGTH) {
            match length.trim().parse() {
                Ok(length) => settings.preview_length = length,
                Err(e) => log::warn!("Ignoring {}={:?}: {}", ENV_PREVIEW_LENGTH, length, e),
            }
        }
        settings
    }
}
