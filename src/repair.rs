//! Markup repair for bookmark exports
//!
//! Exporters write `<DT><A ...>title</A>` and `<DD>note` without closing
//! tags. Closing them per line keeps each note attached to its link once
//! the document goes through an HTML parser.

use regex::Regex;
use std::sync::LazyLock;

// Marker content never spans a line terminator (`\r`, U+2028, U+2029)

/// `<DT>` line ending in a closed link
static UNCLOSED_TERM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*<DT[^\r\x{2028}\x{2029}]+</A>\s*$").expect("Failed to compile term regex")
});

/// `<DD>` line with content, up to the end of the line
static ANNOTATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*<DD[^\r\x{2028}\x{2029}]+$").expect("Failed to compile annotation regex")
});

static ANNOTATION_CLOSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</DD>").expect("Failed to compile annotation close regex"));

static LINE_BREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n").expect("Failed to compile line break regex"));

/// Closing marker a line needs, if any
fn missing_close(line: &str) -> Option<&'static str> {
    if UNCLOSED_TERM_RE.is_match(line) {
        Some("</DT>")
    } else if ANNOTATION_RE.is_match(line) && !ANNOTATION_CLOSE_RE.is_match(line) {
        Some("</DD>")
    } else {
        None
    }
}

fn lines(raw: &str) -> impl Iterator<Item = &str> {
    LINE_BREAK_RE.split(raw)
}

/// Append the missing `</DT>` / `</DD>` markers, line by line.
///
/// Lines are split on `\r?\n` and rejoined with `\n`. A `\r` not followed
/// by `\n` stays part of its line. Content is never removed.
pub fn repair_markup(raw: &str) -> String {
    lines(raw)
        .map(|line| match missing_close(line) {
            Some(close) => format!("{line}{close}"),
            None => line.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Number of lines `repair_markup` would touch
pub fn repaired_line_count(raw: &str) -> usize {
    lines(raw).filter(|line| missing_close(line).is_some()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closes_term_with_link() {
        let raw = r#"    <DT><A HREF="https://example.com" ADD_DATE="1">Example</A>"#;
        assert_eq!(repair_markup(raw), format!("{raw}</DT>"));
    }

    #[test]
    fn test_closes_term_case_insensitive() {
        let raw = r#"<dt><a href="https://example.com">Example</a>  "#;
        assert_eq!(repair_markup(raw), format!("{raw}</DT>"));
    }

    #[test]
    fn test_closes_annotation() {
        assert_eq!(repair_markup("    <DD>A note"), "    <DD>A note</DD>");
    }

    #[test]
    fn test_closed_annotation_untouched() {
        assert_eq!(repair_markup("<DD>A note</DD>"), "<DD>A note</DD>");
        assert_eq!(repair_markup("<dd>A note</dd> trailing"), "<dd>A note</dd> trailing");
    }

    #[test]
    fn test_folder_term_untouched() {
        let raw = r#"<DT><H3 ADD_DATE="1">Work</H3>"#;
        assert_eq!(repair_markup(raw), raw);
    }

    #[test]
    fn test_term_rule_wins_over_annotation_rule() {
        // Only one marker per line, term rule first
        let raw = r#"<DT><A HREF="x">y</A>"#;
        let repaired = repair_markup(raw);
        assert!(repaired.ends_with("</A></DT>"));
        assert!(!repaired.contains("</DD>"));
    }

    #[test]
    fn test_crlf_normalized() {
        let raw = "<DL><p>\r\n<DD>note\r\n</DL>";
        assert_eq!(repair_markup(raw), "<DL><p>\n<DD>note</DD>\n</DL>");
    }

    #[test]
    fn test_lone_carriage_return_kept() {
        assert_eq!(repair_markup("<DL>\r"), "<DL>\r");
        assert_eq!(repair_markup("<DL>\r<p>\r\n</DL>"), "<DL>\r<p>\n</DL>");
        // A stray `\r` ends the annotation content, so the line is left alone
        assert_eq!(repair_markup("<DD>note\r"), "<DD>note\r");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(repair_markup(""), "");
        assert_eq!(repaired_line_count(""), 0);
    }

    #[test]
    fn test_well_formed_is_noop() {
        let raw = "<DL><p>\n<DT><A HREF=\"x\">y</A></DT>\n<DD>note</DD>\n</DL><p>";
        assert_eq!(repair_markup(raw), raw);
        assert_eq!(repaired_line_count(raw), 0);
    }

    #[test]
    fn test_second_pass_adds_nothing() {
        let raw = "<DT><A HREF=\"x\">y</A>\n<DD>note\n<DT><H3>F</H3>";
        let once = repair_markup(raw);
        assert_eq!(repaired_line_count(raw), 2);
        assert_eq!(repair_markup(&once), once);
    }

    #[test]
    fn test_bare_markers_need_content() {
        // `.+` requires at least one character after the opening marker
        assert_eq!(repair_markup("<DD"), "<DD");
        assert_eq!(repair_markup("<DD>"), "<DD></DD>");
    }
}
