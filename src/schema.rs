//! Bookmark record schema
//!
//! Output shape for every link found in a bookmarks export. Field names
//! match the JSON emitted by the original bookmarks-to-JSON scripts.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Attribute name/value pairs of an element, in source order
pub type Attributes = IndexMap<String, String>;

/// A single link extracted from the export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkRecord {
    /// Visible link text (may be empty)
    pub title: String,
    /// Text of the `<DD>` annotation following the link's `<DT>`, or empty
    pub note: String,
    /// Raw `href` attribute (absent, empty or malformed values are kept as-is)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Whether `href` passes the URL syntax check
    pub valid_url: bool,
    /// Host (and port) of `href` when it carries a `scheme://` prefix
    pub domain: String,
    /// Raw `icon` attribute (usually a data URI)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Remaining link attributes, without `href` and `icon`
    #[serde(rename = "attribs")]
    pub attributes: Attributes,
    /// Enclosing folders, innermost first
    pub folders: Vec<FolderRef>,
}

/// A named folder enclosing a link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderRef {
    /// Folder label text (never empty)
    pub title: String,
    /// Attributes of the label element (`ADD_DATE`, `PERSONAL_TOOLBAR_FOLDER`, ...)
    #[serde(rename = "attribs")]
    pub attributes: Attributes,
}

impl FolderRef {
    /// Build a folder entry, rejecting labels with no text
    pub fn named(title: String, attributes: Attributes) -> Option<Self> {
        if title.is_empty() {
            None
        } else {
            Some(Self { title, attributes })
        }
    }
}
