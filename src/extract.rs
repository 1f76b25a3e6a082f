//! extract command: Bookmark records from a bookmarks export
//!
//! Walks every `<A>` in document order and recovers its title, note,
//! link metadata and the chain of folders it is filed under.

use crate::dom::{attributes_of, closest, next_element_if, prev_element, text_of};
use crate::links::{extract_domain, is_valid_url};
use crate::output::{read_input, render, write_output, OutputArgs};
use crate::repair::{repair_markup, repaired_line_count};
use crate::schema::{BookmarkRecord, FolderRef};
use anyhow::Result;
use clap::Args;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static LINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a").expect("Failed to parse link selector"));

/// Folder list containers, tried in order
const LIST_TAGS: [&str; 2] = ["dl", "ul"];

#[derive(Args)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub io: OutputArgs,
}

/// Run the extract command
pub async fn run_extract(args: ExtractArgs) -> Result<()> {
    let raw = read_input(&args.io).await?;

    tracing::debug!(
        lines = repaired_line_count(&raw),
        "closing unterminated DT/DD lines"
    );
    let doc = Html::parse_document(&repair_markup(&raw));
    let records = extract_bookmarks(&doc);

    if records.is_empty() {
        println!("No data to extract!");
        return Ok(());
    }

    tracing::debug!(count = records.len(), "bookmarks extracted");
    let rendered = render(&records, args.io.format, !args.io.compact)?;
    write_output(&args.io, &rendered).await
}

/// One record per link, in document order
pub fn extract_bookmarks(doc: &Html) -> Vec<BookmarkRecord> {
    doc.select(&LINK_SELECTOR).map(extract_item).collect()
}

fn extract_item(link: ElementRef<'_>) -> BookmarkRecord {
    let href = link.value().attr("href").map(str::to_string);
    let icon = link.value().attr("icon").map(str::to_string);

    let mut attributes = attributes_of(link);
    attributes.shift_remove("href");
    attributes.shift_remove("icon");

    let note = closest(link, "dt")
        .and_then(|term| next_element_if(term, "dd"))
        .map(text_of)
        .unwrap_or_default();

    BookmarkRecord {
        title: text_of(link),
        note,
        domain: extract_domain(href.as_deref()),
        valid_url: is_valid_url(href.as_deref()),
        href,
        icon,
        attributes,
        folders: folders_of(link),
    }
}

/// Label element of the list `el` is filed in
fn folder_label(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    LIST_TAGS
        .iter()
        .find_map(|tag| closest(el, tag).and_then(prev_element))
}

/// Enclosing folders of `el`, innermost first.
///
/// Each step takes the element right before the nearest `<DL>` (or `<UL>`)
/// as the folder label and continues outward from that label. The walk
/// stops at the first label with no text, even if named folders exist
/// further out.
pub fn folders_of(el: ElementRef<'_>) -> Vec<FolderRef> {
    let mut folders = Vec::new();
    let mut current = el;

    while let Some(label) = folder_label(current) {
        match FolderRef::named(text_of(label), attributes_of(label)) {
            Some(folder) => folders.push(folder),
            None => break,
        }
        current = label;
    }

    folders
}
