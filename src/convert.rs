//! convert command: Bookmarks export to JSON
//!
//! Same pipeline as `extract`, but always emits the record list, even
//! when it is empty.

use crate::extract::extract_bookmarks;
use crate::output::{read_input, render, write_output, OutputArgs};
use crate::repair::repair_markup;
use crate::schema::BookmarkRecord;
use anyhow::Result;
use clap::Args;
use scraper::Html;

#[derive(Args)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub io: OutputArgs,
}

/// Run the convert command
pub async fn run_convert(args: ConvertArgs) -> Result<()> {
    let raw = read_input(&args.io).await?;
    let records = parse_bookmarks(&raw);

    tracing::debug!(count = records.len(), "bookmarks converted");
    let rendered = render(&records, args.io.format, !args.io.compact)?;
    write_output(&args.io, &rendered).await
}

/// Repair, parse and extract a raw bookmarks export in one step
pub fn parse_bookmarks(raw: &str) -> Vec<BookmarkRecord> {
    let doc = Html::parse_document(&repair_markup(raw));
    extract_bookmarks(&doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bookmarks() {
        let raw = "<DL><p>\r\n    <DT><H3>Reading</H3>\r\n    <DL><p>\r\n        <DT><A HREF=\"https://example.com\">Example</A>\r\n        <DD>Worth a look\r\n    </DL><p>\r\n</DL><p>\r\n";
        let records = parse_bookmarks(raw);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Example");
        assert_eq!(records[0].note, "Worth a look");
        assert_eq!(records[0].folders[0].title, "Reading");
    }

    #[test]
    fn test_parse_bookmarks_empty_document() {
        assert!(parse_bookmarks("<html><body><p>nothing</p></body></html>").is_empty());
    }
}
