//! Integration tests for per-file block extraction.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use pugdoc_blocks::{
    Error, MalformedReason, SourceFile, extract_blocks, process_file, synthesize,
};
use rstest::rstest;

fn file(content: &str) -> SourceFile {
    SourceFile::in_memory("views/component.pug", content)
}

#[test]
fn test_single_clean_block() {
    let result = process_file(&file("//- @pugdoc\n//- Button component.\n//- @endpugdoc")).unwrap();

    assert_eq!(result.blocks.len(), 1);
    assert_eq!(result.blocks[0].lines(), ["Button component."]);
    assert_eq!(result.blocks[0].raw(), "/**Button component.*/");
    assert_eq!(result.raw, "/**Button component.*/");
}

#[test]
fn test_nested_start_without_close() {
    let err = process_file(&file("//- @pugdoc\n  text\n//- @pugdoc\n  more")).unwrap_err();

    assert!(matches!(
        err,
        Error::MalformedBlock {
            line: 2,
            reason: MalformedReason::NestedStart,
            ..
        }
    ));
}

#[test]
fn test_premature_dedent() {
    let err = process_file(&file("  //- @pugdoc\nx\n//- @endpugdoc")).unwrap_err();

    assert!(matches!(
        err,
        Error::MalformedBlock {
            line: 1,
            reason: MalformedReason::Dedent {
                required: 2,
                found: 0
            },
            ..
        }
    ));
}

#[rstest]
#[case::start_as_last_line("p hello\n//- @pugdoc", 1)]
#[case::start_as_only_line("//- @pugdoc", 0)]
#[case::trailing_blank_lines("//- @pugdoc\n  name: card\n\n\n", 1)]
fn test_unterminated_block(#[case] content: &str, #[case] expected_line: usize) {
    let err = process_file(&file(content)).unwrap_err();

    match err {
        Error::UnterminatedBlock { line, .. } => assert_eq!(line, expected_line),
        other => panic!("expected unterminated block, got {other:?}"),
    }
}

#[test]
fn test_realistic_mixin_file() {
    let content = "\
//- @pugdoc
  name: button
  description: Renders a button.
  arguments:
    - {string} label - the button text
//- @endpugdoc
mixin button(label)
  button.btn= label

//- @pugdoc
//- Card wrapper.
//- @endpugdoc
mixin card()
  .card
    block
";
    let result = process_file(&file(content)).unwrap();

    assert_eq!(result.blocks.len(), 2);
    assert_eq!(
        result.blocks[0].lines(),
        [
            "  name: button",
            "  description: Renders a button.",
            "  arguments:",
            "    - {string} label - the button text"
        ]
    );
    assert_eq!(
        (result.blocks[0].start_line(), result.blocks[0].end_line()),
        (0, 5)
    );
    assert_eq!(
        (result.blocks[1].start_line(), result.blocks[1].end_line()),
        (9, 11)
    );
    assert_eq!(
        result.raw,
        "/**  name: button\n  description: Renders a button.\n  arguments:\n    - {string} label - the button text*//**Card wrapper.*/"
    );
}

#[test]
fn test_empty_comment_line_between_description_and_tags() {
    let content = "\
//- @pugdoc
//- Renders a button.
//-
//- @param {string} label
//- @endpugdoc
mixin button(label)
  button= label
";
    let result = process_file(&file(content)).unwrap();

    assert_eq!(
        result.blocks[0].lines(),
        ["Renders a button.", "", "@param {string} label"]
    );
    assert_eq!(
        result.raw,
        "/**Renders a button.\n\n@param {string} label*/"
    );
}

#[test]
fn test_block_inside_indented_template() {
    let content = "\
div.layout
  //- @pugdoc
  //- Sidebar slot.
    extra: indented deeper
  //- @endpugdoc
  aside
";
    let result = process_file(&file(content)).unwrap();
    assert_eq!(
        result.blocks[0].lines(),
        ["Sidebar slot.", "    extra: indented deeper"]
    );
}

/// Payload text as it appears after `//- `; may be empty.
fn payload_line() -> impl Strategy<Value = String> {
    "([A-Za-z@{][A-Za-z0-9 ,.:{}-]{0,30})?".prop_filter("no markers", |s| !s.contains("pugdoc"))
}

proptest! {
    #[test]
    fn test_files_without_markers_have_no_blocks(lines in prop::collection::vec("[^@\\n]{0,40}", 0..20)) {
        let content = lines.join("\n");
        let result = process_file(&file(&content)).unwrap();
        prop_assert!(result.blocks.is_empty());
        prop_assert_eq!(result.raw, "");
    }

    #[test]
    fn test_block_count_matches_start_markers(
        blocks in prop::collection::vec(prop::collection::vec(payload_line(), 0..5), 0..6)
    ) {
        let mut content = String::new();
        for payload in &blocks {
            content.push_str("//- @pugdoc\n");
            for line in payload {
                content.push_str("//- ");
                content.push_str(line);
                content.push('\n');
            }
            content.push_str("//- @endpugdoc\nmixin x()\n  p x\n");
        }

        let result = process_file(&file(&content)).unwrap();
        prop_assert_eq!(result.blocks.len(), blocks.len());
    }

    #[test]
    fn test_payload_round_trips(payload in prop::collection::vec(payload_line(), 1..8)) {
        let mut lines = vec!["//- @pugdoc".to_string()];
        lines.extend(payload.iter().map(|l| format!("//- {l}")));
        lines.push("//- @endpugdoc".to_string());

        let blocks = extract_blocks(lines.iter().map(String::as_str)).unwrap();
        prop_assert_eq!(blocks[0].lines().len(), payload.len());
        prop_assert_eq!(blocks[0].lines(), payload.as_slice());
    }

    #[test]
    fn test_bare_leader_lines_round_trip(
        payload in prop::collection::vec(payload_line(), 1..8),
        leader in prop::sample::select(vec!["//", "//-", "//- ", "  //-"]),
    ) {
        let mut lines = vec!["//- @pugdoc".to_string()];
        for line in &payload {
            if line.is_empty() {
                lines.push(leader.to_string());
            } else {
                lines.push(format!("//- {line}"));
            }
        }
        lines.push("//- @endpugdoc".to_string());

        let blocks = extract_blocks(lines.iter().map(String::as_str)).unwrap();
        prop_assert_eq!(blocks[0].lines(), payload.as_slice());
    }

    #[test]
    fn test_synthesize_is_deterministic(lines in prop::collection::vec(".*", 0..10)) {
        prop_assert_eq!(synthesize(&lines), synthesize(&lines));
    }
}
