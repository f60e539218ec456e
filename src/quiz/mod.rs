pub mod definition;
pub mod session;

pub use self::definition::{OptionKey, QuizBank, QuizQuestion};
pub use self::session::{CheckResult, Progress, QuizSession, QuizSessions, Solution};
