use super::*;
use crate::source::mock::MockSource;

const HEADER: &str = "subtopic_id,question,option1,option2,option3,option4,correct_option,correct_answer_logic\n";

fn bank_from(csv: &str) -> QuizBank {
    let source = MockSource::new().with_quiz_csv("rust", csv);
    let mut bank = QuizBank::new("rust");
    bank.build(&source).unwrap();
    bank
}

#[test]
fn groups_questions_by_subtopic_in_row_order() {
    let csv = format!(
        "{}s1,First?,a,b,c,d,a,Because\ns1,Second?,a,b,c,d,b,Why not\ns2,Third?,a,b,c,d,c,\n",
        HEADER
    );
    let bank = bank_from(&csv);

    let s1 = bank.get("s1");
    assert_eq!(s1.len(), 2);
    assert_eq!(s1[0].question, "First?");
    assert_eq!(s1[1].question, "Second?");
    assert_eq!(bank.get("s2").len(), 1);
    assert!(bank.get("s3").is_empty());
}

#[test]
fn maps_row_fields() {
    let csv = format!(
        "{}s1,\"Which keyword, exactly?\",let,mut,fn,\"\"\"loop\"\"\",option4,It repeats\n",
        HEADER
    );
    let bank = bank_from(&csv);
    let question = &bank.get("s1")[0];
    assert_eq!(question.question, "Which keyword, exactly?");
    assert_eq!(question.options[0], "let");
    assert_eq!(question.option_text(OptionKey::D), "loop");
    assert_eq!(question.correct_option, OptionKey::D);
    assert_eq!(question.solution, "It repeats");
}

#[test]
fn matches_headers_case_insensitively() {
    let csv = "Subtopic ID,Question,Option1,Option2,Option3,Option4,Correct_Option,Correct_Answer_Logic\n\
               s1,Q?,a,b,c,d,B,Explained\n";
    let bank = bank_from(csv);
    assert_eq!(bank.get("s1").len(), 1);
    assert_eq!(bank.get("s1")[0].correct_option, OptionKey::B);
}

#[test]
fn skips_rows_without_subtopic() {
    let csv = format!("{},Q?,a,b,c,d,a,x\ns1,Q?,a,b,c,d,a,x\n", HEADER);
    let bank = bank_from(&csv);
    assert_eq!(bank.get("s1").len(), 1);
    assert!(bank.get("").is_empty());
}

#[test]
fn skips_short_rows() {
    let csv = format!("{}s1,Q?,a,b\ns1,Q2?,a,b,c,d,a,x\n", HEADER);
    let bank = bank_from(&csv);
    assert_eq!(bank.get("s1").len(), 1);
    assert_eq!(bank.get("s1")[0].question, "Q2?");
}

#[test]
fn skips_unknown_correct_option() {
    let csv = format!("{}s1,Q?,a,b,c,d,e,x\n", HEADER);
    let bank = bank_from(&csv);
    assert!(bank.get("s1").is_empty());
}

#[test]
fn missing_quiz_data_is_empty_and_loaded() {
    let source = MockSource::new();
    let mut bank = QuizBank::new("rust");
    bank.build(&source).unwrap();
    assert!(bank.is_loaded());
    assert!(bank.get("s1").is_empty());
}

#[test]
fn header_only_csv_is_empty() {
    let bank = bank_from(HEADER);
    assert!(bank.is_loaded());
    assert!(!bank.has_questions("s1"));
}

#[test]
fn builds_only_once() {
    let csv = format!("{}s1,Q?,a,b,c,d,a,x\n", HEADER);
    let source = MockSource::new().with_quiz_csv("rust", &csv);
    let mut bank = QuizBank::new("rust");
    bank.build(&source).unwrap();
    bank.build(&source).unwrap();
    assert_eq!(source.quiz_fetches(), 1);

    bank.reset();
    assert!(!bank.is_loaded());
    bank.build(&source).unwrap();
    assert_eq!(source.quiz_fetches(), 2);
    assert_eq!(bank.get("s1").len(), 1);
}

#[test]
fn failed_fetch_leaves_bank_unloaded() {
    let source = MockSource::new();
    source.fail_quiz(true);
    let mut bank = QuizBank::new("rust");
    assert!(bank.build(&source).is_err());
    assert!(!bank.is_loaded());

    source.fail_quiz(false);
    bank.build(&source).unwrap();
    assert!(bank.is_loaded());
}

#[test]
fn parses_option_markers() {
    assert_eq!("b".parse::<OptionKey>().unwrap(), OptionKey::B);
    assert_eq!(" C ".parse::<OptionKey>().unwrap(), OptionKey::C);
    assert_eq!("4".parse::<OptionKey>().unwrap(), OptionKey::D);
    assert_eq!("Option1".parse::<OptionKey>().unwrap(), OptionKey::A);
    assert!("e".parse::<OptionKey>().is_err());
    assert!("".parse::<OptionKey>().is_err());
}
