use constraint_core::constraint::{extract, RawConstraint, Syntax};

fn exprs(content: &str) -> Vec<(Syntax, String)> {
    extract(content.as_bytes())
        .into_iter()
        .map(|raw| (raw.syntax, raw.expr))
        .collect()
}

#[test]
fn no_header_no_constraints() {
    assert!(extract(b"").is_empty());
    assert!(extract(b"package p\n").is_empty());
    assert!(extract(b"THIS IS A README").is_empty());
    assert!(extract(b"// Package p is great.\npackage p\n").is_empty());
}

#[test]
fn go_build_line() {
    let raws = extract(b"//go:build linux && amd64\n\npackage p\n");
    assert_eq!(
        raws,
        vec![RawConstraint {
            syntax: Syntax::Modern,
            expr: "linux && amd64".to_string(),
            line: "//go:build linux && amd64".to_string(),
            line_number: 1,
        }]
    );
}

#[test]
fn go_build_needs_no_blank_line() {
    assert_eq!(
        exprs("//go:build linux\npackage p\n"),
        vec![(Syntax::Modern, "linux".to_string())]
    );
}

#[test]
fn go_build_requires_separator_after_marker() {
    assert!(extract(b"//go:builder linux\n\npackage p\n").is_empty());
    assert!(extract(b"// go:build linux\n\npackage p\n").is_empty());
}

#[test]
fn go_build_with_empty_expression_is_extracted() {
    assert_eq!(
        exprs("//go:build\n\npackage p\n"),
        vec![(Syntax::Modern, String::new())]
    );
}

#[test]
fn plus_build_followed_by_blank_line() {
    assert_eq!(
        exprs("// +build js,wasm\n\n// Package js only works with wasm.\npackage js\n"),
        vec![(Syntax::Legacy, "js,wasm".to_string())]
    );
}

#[test]
fn plus_build_without_blank_line_is_comment_text() {
    assert!(extract(b"// +build js,wasm\npackage js\n").is_empty());
    assert!(extract(b"// +build js,wasm\n// Package js.\npackage js\n").is_empty());
}

#[test]
fn plus_build_marker_variants() {
    assert_eq!(
        exprs("//+build linux\n\npackage p\n"),
        vec![(Syntax::Legacy, "linux".to_string())]
    );
    assert_eq!(
        exprs("//   +build\tlinux\n\npackage p\n"),
        vec![(Syntax::Legacy, "linux".to_string())]
    );
    assert!(extract(b"// +builder linux\n\npackage p\n").is_empty());
    assert!(extract(b"// see +build linux\n\npackage p\n").is_empty());
}

#[test]
fn indented_lines_are_trimmed() {
    let content = "\n\t\t// +build js,wasm\n\n\t\t// Package js only works with wasm.\n\t\tpackage js\n";
    assert_eq!(exprs(content), vec![(Syntax::Legacy, "js,wasm".to_string())]);
}

#[test]
fn crlf_line_endings() {
    assert_eq!(
        exprs("// +build linux\r\n\r\npackage p\r\n"),
        vec![(Syntax::Legacy, "linux".to_string())]
    );
    assert_eq!(
        exprs("//go:build linux\r\n\r\npackage p\r\n"),
        vec![(Syntax::Modern, "linux".to_string())]
    );
}

#[test]
fn extraction_stops_at_code() {
    let content = "package p\n\n//go:build linux\n\n// +build linux\n\nvar X int\n";
    assert!(extract(content.as_bytes()).is_empty());
}

#[test]
fn multiple_lines_keep_file_order() {
    let content = "// Copyright 2024.\n\n// +build linux\n// +build amd64\n\n//go:build linux && amd64\n//go:build windows\n\npackage p\n";
    assert_eq!(
        exprs(content),
        vec![
            (Syntax::Legacy, "linux".to_string()),
            (Syntax::Legacy, "amd64".to_string()),
            (Syntax::Modern, "linux && amd64".to_string()),
            (Syntax::Modern, "windows".to_string()),
        ]
    );
}

#[test]
fn line_numbers_are_one_based() {
    let raws = extract(b"// Copyright.\n\n//go:build linux\n\npackage p\n");
    assert_eq!(raws.len(), 1);
    assert_eq!(raws[0].line_number, 3);
}

#[test]
fn block_comments_are_part_of_the_header() {
    let content = "/* Copyright\n * 2024 */\n//go:build linux\n\npackage p\n";
    assert_eq!(exprs(content), vec![(Syntax::Modern, "linux".to_string())]);
}

#[test]
fn constraints_inside_block_comments_are_ignored() {
    let content = "/*\n//go:build linux\n// +build linux\n*/\n\npackage p\n";
    assert!(extract(content.as_bytes()).is_empty());
}

#[test]
fn code_after_block_comment_on_same_line_stops_extraction() {
    let content = "/* hi */ package p\n\n//go:build linux\n";
    assert!(extract(content.as_bytes()).is_empty());
}

#[test]
fn plus_build_after_block_comment_line_is_ignored() {
    // A line not starting with `//` ends the region in which blank lines
    // count as separators.
    let content = "/* Copyright */\n\n// +build linux\n\npackage p\n";
    assert!(extract(content.as_bytes()).is_empty());
}

#[test]
fn plus_build_before_earlier_blank_line_still_counts() {
    let content = "// +build linux\n\n// Package p.\n// More docs.\npackage p\n";
    assert_eq!(exprs(content), vec![(Syntax::Legacy, "linux".to_string())]);
}

#[test]
fn file_with_only_comments() {
    assert_eq!(
        exprs("// +build ignore\n\n// nothing else"),
        vec![(Syntax::Legacy, "ignore".to_string())]
    );
    assert!(extract(b"// +build ignore").is_empty());
}

#[test]
fn invalid_utf8_outside_header_is_fine() {
    let mut content = b"//go:build linux\n\npackage p\nvar s = \"".to_vec();
    content.extend_from_slice(&[0xff, 0xfe]);
    content.extend_from_slice(b"\"\n");
    assert_eq!(extract(&content).len(), 1);
}

#[test]
fn leading_byte_order_mark_is_skipped() {
    let content = "\u{feff}//go:build windows\n\npackage p\n";
    assert_eq!(exprs(content), vec![(Syntax::Modern, "windows".to_string())]);

    let content = "\u{feff}// +build js,wasm\n\npackage p\n";
    assert_eq!(exprs(content), vec![(Syntax::Legacy, "js,wasm".to_string())]);
}
