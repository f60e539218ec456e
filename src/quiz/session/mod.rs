use std::collections::HashMap;

use crate::error::SessionError;
use crate::quiz::definition::{OptionKey, QuizBank, QuizQuestion};


#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CheckResult {
    pub option: OptionKey,
    pub correct_option: OptionKey,
    pub is_correct: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Solution<'a> {
    pub correct_option: OptionKey,
    pub correct_text: &'a str,
    pub explanation: &'a str,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Progress {
    pub checked: usize,
    pub correct: usize,
    pub total: usize,
}

/// Self-check state for the questions of one subtopic.
///
/// `answers` and `checked` hold one slot per question and only change through
/// `check` and `retry`. `selections` is the pending choice the learner has
/// made but not checked yet. There is no final state: the learner can keep
/// navigating, checking and retrying for as long as the page is open.
#[derive(Clone, Debug)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    index: usize,
    selections: Vec<Option<OptionKey>>,
    answers: Vec<Option<OptionKey>>,
    checked: Vec<bool>,
}

impl QuizSession {
    /// Returns `None` when there is nothing to quiz on.
    pub fn new(questions: Vec<QuizQuestion>) -> Option<Self> {
        if questions.is_empty() {
            return None;
        }
        let count = questions.len();
        Some(QuizSession {
            questions,
            index: 0,
            selections: vec![None; count],
            answers: vec![None; count],
            checked: vec![false; count],
        })
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current_question(&self) -> &QuizQuestion {
        &self.questions[self.index]
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.questions.len()
    }

    /// Moves to the following question. Returns `false` on the last one.
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Moves to the preceding question. Returns `false` on the first one.
    pub fn prev(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Remembers the learner's choice for the current question. Nothing is
    /// recorded as an answer until `check`.
    pub fn select(&mut self, option: OptionKey) -> Result<(), SessionError> {
        if self.checked[self.index] {
            return Err(SessionError::AlreadyChecked);
        }
        self.selections[self.index] = Some(option);
        Ok(())
    }

    pub fn selection(&self) -> Option<OptionKey> {
        self.selections[self.index]
    }

    /// Commits the pending selection of the current question and grades it.
    pub fn check(&mut self) -> Result<CheckResult, SessionError> {
        if self.checked[self.index] {
            return Err(SessionError::AlreadyChecked);
        }
        let option = self.selections[self.index].ok_or(SessionError::NoSelection)?;

        self.answers[self.index] = Some(option);
        self.checked[self.index] = true;

        let question = self.current_question();
        Ok(CheckResult {
            option,
            correct_option: question.correct_option,
            is_correct: question.is_correct(option),
        })
    }

    pub fn view_solution(&self) -> Solution<'_> {
        let question = self.current_question();
        Solution {
            correct_option: question.correct_option,
            correct_text: question.option_text(question.correct_option),
            explanation: &question.solution,
        }
    }

    /// Reopens the current question after a wrong answer.
    pub fn retry(&mut self) -> Result<(), SessionError> {
        if self.is_correct(self.index) != Some(false) {
            return Err(SessionError::NotRetryable);
        }
        self.answers[self.index] = None;
        self.checked[self.index] = false;
        self.selections[self.index] = None;
        Ok(())
    }

    pub fn answer(&self, index: usize) -> Option<OptionKey> {
        self.answers.get(index).copied().flatten()
    }

    pub fn is_checked(&self, index: usize) -> bool {
        self.checked.get(index).copied().unwrap_or(false)
    }

    /// `None` until the question at `index` is checked.
    pub fn is_correct(&self, index: usize) -> Option<bool> {
        if !self.is_checked(index) {
            return None;
        }
        let answer = self.answer(index)?;
        Some(self.questions[index].is_correct(answer))
    }

    pub fn progress(&self) -> Progress {
        let total = self.questions.len();
        let checked = (0..total).filter(|i| self.is_checked(*i)).count();
        let correct = (0..total)
            .filter(|i| self.is_correct(*i) == Some(true))
            .count();
        Progress {
            checked,
            correct,
            total,
        }
    }
}

/// Every quiz session opened while a course is being viewed, by subtopic.
#[derive(Debug, Default)]
pub struct QuizSessions {
    sessions: HashMap<String, QuizSession>,
}

impl QuizSessions {
    pub fn new() -> Self {
        Default::default()
    }

    /// Returns the subtopic's session, starting one on first use. Reopening
    /// keeps earlier answers. `None` when the subtopic has no questions.
    pub fn open(&mut self, subtopic_id: &str, bank: &QuizBank) -> Option<&mut QuizSession> {
        if !self.sessions.contains_key(subtopic_id) {
            let session = QuizSession::new(bank.get(subtopic_id).to_vec())?;
            log::debug!("Opened quiz session for subtopic {}", subtopic_id);
            self.sessions.insert(subtopic_id.to_owned(), session);
        }
        self.sessions.get_mut(subtopic_id)
    }

    pub fn get(&self, subtopic_id: &str) -> Option<&QuizSession> {
        self.sessions.get(subtopic_id)
    }

    pub fn get_mut(&mut self, subtopic_id: &str) -> Option<&mut QuizSession> {
        self.sessions.get_mut(subtopic_id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn clear(&mut self) {
        self.sessions.clear();
    }
}
