//! Integration tests for the parsing module.
//!
//! Fixtures (.md) and their expected HTML (.html) are co-located in `fixtures/`.

use pretty_assertions::assert_eq;

use crate::html::{Node, serialize};
use crate::parsing::{convert, inline::InlineError, split_blocks};

// Fixture-based tests

#[test]
fn fixture_paragraphs() {
    assert_fixture("paragraphs");
}

#[test]
fn fixture_full_page() {
    assert_fixture("full_page");
}

#[test]
fn fixture_raw_zones() {
    assert_fixture("raw_zones");
}

#[test]
fn fixture_fallbacks() {
    assert_fixture("fallbacks");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();
    let expected = std::fs::read_to_string(format!("{fixtures_dir}/{name}.html")).unwrap();

    let root = convert(&md).unwrap();
    assert_eq!(serialize(&root).unwrap(), expected);
}

// Block splitting

#[test]
fn split_markdown_into_blocks() {
    let md = "
This is **bolded** paragraph

This is another paragraph with _italic_ text and `code` here
This is the same paragraph on a new line

- This is a list
- with items
";
    assert_eq!(
        split_blocks(md),
        vec![
            "This is **bolded** paragraph",
            "This is another paragraph with _italic_ text and `code` here\nThis is the same paragraph on a new line",
            "- This is a list\n- with items",
        ]
    );
}

#[test]
fn runs_of_blank_lines_are_one_separator() {
    assert_eq!(split_blocks("a\n\n\n\n  \t\nb"), vec!["a", "b"]);
}

#[test]
fn crlf_line_endings() {
    assert_eq!(split_blocks("# T\r\n\r\nbody\r\nmore"), vec!["# T", "body\nmore"]);
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    assert_eq!(split_blocks("   indented start  \n\n"), vec!["indented start"]);
}

// Document-level properties

#[test]
fn empty_document() {
    let root = convert("").unwrap();
    assert_eq!(root.tag(), Some("div"));
    assert!(root.children().is_empty());
    assert_eq!(serialize(&root).unwrap(), "<div></div>\n");
}

#[test]
fn blank_lines_only() {
    let root = convert("\n\n\n").unwrap();
    assert!(root.children().is_empty());
}

#[test]
fn markup_free_text_is_one_plain_leaf() {
    let root = convert("plain words\nacross lines").unwrap();
    assert_eq!(root.children().len(), 1);

    let p = &root.children()[0];
    assert_eq!(p.tag(), Some("p"));
    assert_eq!(p.children(), &[Node::text("plain words across lines")]);
}

#[test]
fn block_order_is_preserved() {
    let root = convert("# one\n\ntwo\n\n- three").unwrap();
    let tags: Vec<_> = root.children().iter().map(|n| n.tag()).collect();
    assert_eq!(tags, vec![Some("h1"), Some("p"), Some("ul")]);
}

#[test]
fn serialization_is_deterministic() {
    let md = std::fs::read_to_string(format!(
        "{}/src/parsing/tests/fixtures/full_page.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();
    let first = serialize(&convert(&md).unwrap()).unwrap();
    let second = serialize(&convert(&md).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn unbalanced_delimiter_fails_whole_document() {
    let err = convert("# fine\n\nthis **is not closed").unwrap_err();
    assert_eq!(
        err,
        InlineError::UnbalancedDelimiter {
            delimiter: "**",
            text: "this **is not closed".to_string()
        }
    );
}

#[test]
fn documents_convert_in_parallel() {
    let docs: Vec<String> = (0..8)
        .map(|i| format!("# Page {i}\n\nBody **{i}**"))
        .collect();

    let outputs: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = docs
            .iter()
            .map(|doc| scope.spawn(move || serialize(&convert(doc).unwrap()).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (i, html) in outputs.iter().enumerate() {
        assert_eq!(
            html,
            &format!("<div><h1>Page {i}</h1>\n<p>Body <b>{i}</b></p>\n</div>\n")
        );
    }
}

#[test]
fn long_fence_converts_without_stray_markers() {
    let root = convert("````\ncode\n````").unwrap();
    assert_eq!(
        serialize(&root).unwrap(),
        "<div><pre><code>code\n</code>\n</pre>\n</div>\n"
    );
}
