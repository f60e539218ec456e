use anyhow::{anyhow, Context, Error, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

lazy_static! {
    static ref OPTION_MARKER_REGEX: Regex =
        Regex::new(r"^(?:option\s*)?([a-d1-4])$").expect("valid option marker regex");
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OptionKey {
    A,
    B,
    C,
    D,
}

impl OptionKey {
    pub const ALL: [OptionKey; 4] = [OptionKey::A, OptionKey::B, OptionKey::C, OptionKey::D];

    pub fn index(self) -> usize {
        match self {
            OptionKey::A => 0,
            OptionKey::B => 1,
            OptionKey::C => 2,
            OptionKey::D => 3,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            OptionKey::A => "a",
            OptionKey::B => "b",
            OptionKey::C => "c",
            OptionKey::D => "d",
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Accepts `a`-`d`, `1`-`4` and `option1`-`option4`, in any case.
impl FromStr for OptionKey {
    type Err = Error;

    fn from_str(marker: &str) -> Result<Self> {
        let marker = marker.trim().to_lowercase();
        let captures = OPTION_MARKER_REGEX
            .captures(&marker)
            .with_context(|| format!("Unrecognized option marker {:?}", marker))?;
        match &captures[1] {
            "a" | "1" => Ok(OptionKey::A),
            "b" | "2" => Ok(OptionKey::B),
            "c" | "3" => Ok(OptionKey::C),
            "d" | "4" => Ok(OptionKey::D),
            other => Err(anyhow!("Unrecognized option marker {:?}", other)),
        }
    }
}

/// One CSV row, keyed by normalized header names.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct RawQuestion {
    pub subtopic_id: String,
    pub question: String,
    pub option1: String,
    pub option2: String,
    pub option3: String,
    pub option4: String,
    pub correct_option: String,
    #[serde(default)]
    pub correct_answer_logic: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuizQuestion {
    pub subtopic_id: String,
    pub question: String,
    pub options: [String; 4],
    pub correct_option: OptionKey,
    pub solution: String,
}

impl QuizQuestion {
    pub fn option_text(&self, option: OptionKey) -> &str {
        &self.options[option.index()]
    }

    pub fn is_correct(&self, option: OptionKey) -> bool {
        option == self.correct_option
    }
}

impl TryFrom<RawQuestion> for QuizQuestion {
    type Error = Error;

    fn try_from(raw_question: RawQuestion) -> Result<Self> {
        let subtopic_id = raw_question.subtopic_id.trim().to_owned();
        if subtopic_id.is_empty() {
            return Err(anyhow!("Question has no subtopic id"));
        }
        let correct_option = raw_question.correct_option.parse()?;
        Ok(QuizQuestion {
            subtopic_id,
            question: raw_question.question,
            options: [
                raw_question.option1,
                raw_question.option2,
                raw_question.option3,
                raw_question.option4,
            ],
            correct_option,
            solution: raw_question.correct_answer_logic.unwrap_or_default(),
        })
    }
}
