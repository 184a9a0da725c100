#![allow(clippy::expect_used)]

use super::*;

fn csv(text: &str) -> Result<Selector, &'static str> {
    Selector::parse(text, DataFormat::Csv)
}

fn xls(text: &str) -> Result<Selector, &'static str> {
    Selector::parse(text, DataFormat::Xls)
}

// ── accepted selectors ──────────────────────────────────────────────────────

#[test]
fn empty_selector_selects_everything() {
    let s = csv("").expect("empty");
    assert!(s.is_empty());
    assert_eq!(s, Selector::default());
}

#[test]
fn column_list() {
    let s = csv(r#"["column1","column2"]"#).expect("columns");
    assert_eq!(
        s.columns,
        Some(vec!["column1".to_owned(), "column2".to_owned()])
    );
    assert_eq!(s.rows, None);
}

#[test]
fn empty_column_list_then_rows() {
    let s = csv("[],[0,7]").expect("rows");
    assert_eq!(s.columns, Some(vec![]));
    assert_eq!(
        s.rows,
        Some(RowRange {
            start: 0,
            end: Some(7)
        })
    );
}

#[test]
fn open_row_range() {
    let s = csv(r#"["column1"],[0]"#).expect("rows");
    assert_eq!(s.rows, Some(RowRange { start: 0, end: None }));
}

#[test]
fn row_range_without_columns() {
    let s = csv("[2,5]").expect("rows only");
    assert_eq!(s.columns, None);
    assert_eq!(
        s.rows,
        Some(RowRange {
            start: 2,
            end: Some(5)
        })
    );
}

#[test]
fn empty_row_range_after_columns_means_all_rows() {
    let s = csv("[],[]").expect("all rows");
    assert_eq!(s.rows, Some(RowRange::ALL));
}

#[test]
fn reader_options_alone() {
    let s = csv(r#"{"usecols":["col1","col2"]}"#).expect("options");
    let options = s.options.expect("options present");
    assert_eq!(options["usecols"], serde_json::json!(["col1", "col2"]));
}

#[test]
fn sheet_forms() {
    assert_eq!(
        xls(r#""Sheet""#).expect("named").sheet,
        Some(SheetRef::Named("Sheet".to_owned()))
    );
    assert_eq!(xls(r#""""#).expect("first").sheet, Some(SheetRef::First));
    assert_eq!(xls("''").expect("first").sheet, Some(SheetRef::First));
    assert_eq!(
        xls("'My Sheet'").expect("single quoted").sheet,
        Some(SheetRef::Named("My Sheet".to_owned()))
    );
}

#[test]
fn sheet_columns_options_and_rows() {
    let s = xls(r#""Sheet",["column1"],{"header":1},[0,3]"#).expect("all parts");
    assert_eq!(s.sheet, Some(SheetRef::Named("Sheet".to_owned())));
    assert_eq!(s.columns, Some(vec!["column1".to_owned()]));
    assert_eq!(
        s.rows,
        Some(RowRange {
            start: 0,
            end: Some(3)
        })
    );
    assert!(s.options.is_some());
}

#[test]
fn sheet_then_options() {
    let s = xls(r#""Sheet1",{"parse_cols":"A:B"}"#).expect("sheet + options");
    assert_eq!(s.columns, None);
    let options = s.options.expect("options");
    assert_eq!(options["parse_cols"], serde_json::json!("A:B"));
}

#[test]
fn options_as_column_spec_then_rows() {
    let s = csv(r#"{"usecols":["col1","col2"]},[0,7]"#).expect("options + rows");
    assert_eq!(s.columns, None);
    assert!(s.options.is_some());
    assert_eq!(
        s.rows,
        Some(RowRange {
            start: 0,
            end: Some(7)
        })
    );
}

#[test]
fn sheet_options_then_rows() {
    let s = xls(r#""Sheet1",{"parse_cols":"A:B"},[0]"#).expect("sheet + options + rows");
    assert_eq!(s.sheet, Some(SheetRef::Named("Sheet1".to_owned())));
    assert!(s.options.is_some());
    assert_eq!(s.rows, Some(RowRange { start: 0, end: None }));
}

#[test]
fn brackets_inside_strings_do_not_count() {
    let s = csv(r#"["a]b","c[d"]"#).expect("columns");
    assert_eq!(s.columns, Some(vec!["a]b".to_owned(), "c[d".to_owned()]));
}

#[test]
fn escaped_quote_in_sheet_name() {
    let s = xls(r#""say \"hi\"""#).expect("escaped");
    assert_eq!(s.sheet, Some(SheetRef::Named(r#"say "hi""#.to_owned())));
}

// ── rejected selectors ──────────────────────────────────────────────────────

#[test]
fn unbalanced_quote_is_rejected() {
    assert_eq!(
        xls(r#"",[],[0,7]"#),
        Err("unterminated string in selector")
    );
    assert!(xls("'Sheet").is_err());
}

#[test]
fn empty_parts_are_rejected() {
    assert_eq!(csv(",[0]"), Err("empty selector part"));
    assert_eq!(csv("[],"), Err("empty selector part"));
    assert_eq!(csv("[],,[0]"), Err("empty selector part"));
}

#[test]
fn unbalanced_brackets_are_rejected() {
    assert_eq!(csv("[\"a\""), Err("unbalanced brackets in selector"));
    assert_eq!(csv("[\"a\"}"), Err("mismatched brackets in selector"));
    assert!(csv(r#"{"a":[1}"#).is_err());
}

#[test]
fn whitespace_between_parts_is_rejected() {
    assert_eq!(
        csv(r#"["a"] ,[0]"#),
        Err("unexpected text after selector part")
    );
    assert_eq!(csv(r#" ["a"]"#), Err("unexpected character in selector"));
}

#[test]
fn bare_words_are_rejected() {
    assert!(csv("column1").is_err());
    assert!(csv("/\"column0\":").is_err());
}

#[test]
fn sheet_requires_xls() {
    assert_eq!(
        csv(r#""Sheet""#),
        Err("sheet selection requires the xls format")
    );
}

#[test]
fn parts_out_of_order_are_rejected() {
    assert_eq!(
        xls(r#"["a"],"Sheet""#),
        Err("sheet must be the first selector part")
    );
    assert!(csv(r#"[0],["a"]"#).is_err());
    assert_eq!(csv("[0],[1]"), Err("selector parts out of order"));
    assert_eq!(csv("{},{}"), Err("reader options given twice"));
    assert_eq!(
        csv(r#"[],[0],{"header":1}"#),
        Err("selector parts out of order")
    );
    assert_eq!(
        xls(r#"{"header":1},"Sheet""#),
        Err("sheet must be the first selector part")
    );
}

#[test]
fn malformed_row_ranges_are_rejected() {
    assert_eq!(
        csv("[],[0,1,2]"),
        Err("row range holds at most two bounds")
    );
    assert_eq!(csv("[],[7,0]"), Err("row range end precedes its start"));
    assert_eq!(
        csv("[],[-1]"),
        Err("row range must hold non-negative integers")
    );
    assert_eq!(
        csv(r#"["a"],["b"]"#),
        Err("row range must hold non-negative integers")
    );
}

#[test]
fn non_json_lists_are_rejected() {
    assert_eq!(csv("['a']"), Err("malformed list in selector"));
    assert_eq!(csv("{'a':1}"), Err("malformed reader options"));
}

// ── RowRange ────────────────────────────────────────────────────────────────

#[test]
fn row_range_len_and_contains() {
    let closed = RowRange {
        start: 2,
        end: Some(5),
    };
    assert_eq!(closed.len(), Some(3));
    assert!(!closed.is_empty());
    assert!(closed.contains(2));
    assert!(closed.contains(4));
    assert!(!closed.contains(5));
    assert!(!closed.contains(1));

    let open = RowRange { start: 3, end: None };
    assert_eq!(open.len(), None);
    assert!(open.contains(1_000_000));

    let empty = RowRange {
        start: 4,
        end: Some(4),
    };
    assert!(empty.is_empty());
}
