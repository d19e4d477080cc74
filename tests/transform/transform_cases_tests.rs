/// Runs every case in `transform_cases.json`
use crate::case_loader::{decode, load_cases};
use query_links::query_transform;

#[test]
fn test_transform_cases_decode_to_expected() {
    let cases = load_cases();
    assert!(!cases.is_empty(), "case table should not be empty");

    for case in &cases {
        let output = query_transform(&case.query(), case.overrides());
        assert_eq!(
            decode(&output),
            case.expected,
            "case {:?}: output {output:?}",
            case.name
        );
    }
}

#[test]
fn test_transform_cases_encoded_form() {
    for case in load_cases() {
        let Some(encoded) = &case.encoded else {
            continue;
        };
        let output = query_transform(&case.query(), case.overrides());
        assert_eq!(&output, encoded, "case {:?}", case.name);
    }
}

#[test]
fn test_transform_cases_leave_input_untouched() {
    for case in load_cases() {
        let query = case.query();
        let before = query.clone();
        let _ = query.transform(case.overrides());
        assert_eq!(query, before, "case {:?}", case.name);
    }
}
