use super::*;

#[test]
fn splits_simple_rows() {
    let rows = parse("a,b,c\nd,e,f\n");
    assert_eq!(rows, vec![vec!["a", "b", "c"], vec!["d", "e", "f"]]);
}

#[test]
fn keeps_commas_inside_quotes() {
    let rows = parse("a,\"b,c\",d\n");
    assert_eq!(rows, vec![vec!["a", "b,c", "d"]]);
}

#[test]
fn unescapes_doubled_quotes() {
    let rows = parse("a,\"b\"\"c\"\n");
    assert_eq!(rows, vec![vec!["a", "b\"c"]]);
}

#[test]
fn keeps_newlines_inside_quotes() {
    let rows = parse("x,\"first line\nsecond line\"\ny,z\n");
    assert_eq!(
        rows,
        vec![vec!["x", "first line\nsecond line"], vec!["y", "z"]]
    );
}

#[test]
fn crlf_is_a_single_row_break() {
    let rows = parse("a,b\r\nc,d\r\n");
    assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"]]);
}

#[test]
fn emits_trailing_row_without_newline() {
    let rows = parse("a,b\nc,d");
    assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"]]);
}

#[test]
fn trims_whitespace_and_stray_quotes() {
    let rows = parse("  a  , \"b\" ,c\n");
    assert_eq!(rows, vec![vec!["a", "b", "c"]]);
}

#[test]
fn allows_rows_of_different_lengths() {
    let rows = parse("a,b,c\nd\n");
    assert_eq!(rows, vec![vec!["a", "b", "c"], vec!["d"]]);
}

#[test]
fn survives_unbalanced_quotes() {
    let rows = parse("a,\"b,c\nd,e\n");
    assert!(!rows.is_empty());
    assert_eq!(rows[0][0], "a");
}

#[test]
fn empty_input_has_no_rows() {
    assert!(parse("").is_empty());
}

#[test]
fn lone_carriage_return_is_content() {
    let rows = parse("a\rb,c\n");
    assert_eq!(rows, vec![vec!["a\rb", "c"]]);
}

#[test]
fn crlf_after_quoted_field() {
    let rows = parse("\"a\",\"b\"\r\n\r\nc,d");
    assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"]]);
}
