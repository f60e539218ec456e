use anyhow::Result;
use csv::StringRecord;
use std::collections::HashMap;
use std::convert::TryFrom;

use crate::error::ContentLoadError;
use crate::source::ContentSource;
use crate::table;

pub mod question;

pub use question::{OptionKey, QuizQuestion, RawQuestion};

#[cfg(test)]
mod tests;

/// Lowercases a header and joins its words with underscores, so that
/// `Subtopic ID` and `subtopic_id` name the same column.
fn normalize_header(header: &str) -> String {
    header
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join("_")
        .to_lowercase()
}

fn parse_row(headers: &StringRecord, row: &[String]) -> Result<QuizQuestion> {
    let record = StringRecord::from(row.to_vec());
    let raw_question: RawQuestion = record.deserialize(Some(headers))?;
    QuizQuestion::try_from(raw_question)
}

/// Quiz questions of one course, grouped by subtopic in source row order.
#[derive(Debug)]
pub struct QuizBank {
    course_id: String,
    questions: HashMap<String, Vec<QuizQuestion>>,
    loaded: bool,
}

impl QuizBank {
    pub fn new<S: Into<String>>(course_id: S) -> Self {
        QuizBank {
            course_id: course_id.into(),
            questions: HashMap::new(),
            loaded: false,
        }
    }

    pub fn course_id(&self) -> &str {
        &self.course_id
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Fetches and indexes the course's quiz data unless that already
    /// happened. A course without quiz data yields an empty, loaded bank.
    pub fn build<S: ContentSource + ?Sized>(
        &mut self,
        source: &S,
    ) -> Result<(), ContentLoadError> {
        if self.loaded {
            return Ok(());
        }

        let questions = match source.fetch_quiz_csv(&self.course_id)? {
            Some(csv) => QuizBank::index(&csv),
            None => {
                log::info!("No quiz data for course {}", self.course_id);
                HashMap::new()
            }
        };

        log::info!(
            "Loaded {} questions over {} subtopics for course {}",
            questions.values().map(Vec::len).sum::<usize>(),
            questions.len(),
            self.course_id
        );
        self.questions = questions;
        self.loaded = true;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.questions.clear();
        self.loaded = false;
    }

    pub fn get(&self, subtopic_id: &str) -> &[QuizQuestion] {
        self.questions
            .get(subtopic_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn has_questions(&self, subtopic_id: &str) -> bool {
        !self.get(subtopic_id).is_empty()
    }

    fn index(csv: &str) -> HashMap<String, Vec<QuizQuestion>> {
        let mut questions: HashMap<String, Vec<QuizQuestion>> = HashMap::new();

        let mut rows = table::parse(csv).into_iter();
        let headers: StringRecord = match rows.next() {
            Some(header_row) => header_row.iter().map(|h| normalize_header(h)).collect(),
            None => return questions,
        };

        for (line, row) in rows.enumerate() {
            match parse_row(&headers, &row) {
                Ok(question) => questions
                    .entry(question.subtopic_id.clone())
                    .or_default()
                    .push(question),
                Err(e) => log::debug!("Skipping quiz row {}: {:#}", line + 2, e),
            }
        }

        questions
    }
}
