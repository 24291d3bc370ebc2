//! Media records: a file (local path or URL) linked from a family tree.
//!
//! Records are built either from a structured database row or from a raw
//! GEDCOM `OBJE` block, and are read-only afterwards.

mod gedcom;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{MediaError, MediaResult};

pub use gedcom::{gedcom_value, record_xref};

/// The family tree (GEDCOM file) a record belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TreeRef {
    pub id: u32,
    pub name: String,
}

impl TreeRef {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Structured media row, as stored by the application database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaRow {
    pub id: String,
    pub file: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub tree: Option<TreeRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaRecord {
    xref: String,
    filename: String,
    title: String,
    tree: Option<TreeRef>,
    note: Option<String>,
    media_type: Option<String>,
}

impl MediaRecord {
    pub fn new(xref: impl Into<String>, filename: impl Into<String>) -> Self {
        let filename = filename.into();
        Self {
            xref: xref.into(),
            title: filename.clone(),
            filename,
            tree: None,
            note: None,
            media_type: None,
        }
    }

    /// Sets the title; an empty title keeps the filename fallback.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        if !title.trim().is_empty() {
            self.title = title;
        }
        self
    }

    pub fn with_tree(mut self, tree: TreeRef) -> Self {
        self.tree = Some(tree);
        self
    }

    pub fn from_row(row: MediaRow) -> Self {
        let mut record = Self::new(row.id, row.file);
        if let Some(title) = row.title {
            record = record.with_title(title);
        }
        record.tree = row.tree;
        record
    }

    /// Builds a record from a raw GEDCOM `OBJE` block.
    ///
    /// Older GEDCOM versions put `TITL` at level 1, newer ones at level 2
    /// under `FILE`; both are accepted.
    pub fn from_gedcom(text: &str, tree: Option<TreeRef>) -> MediaResult<Self> {
        let xref = record_xref(text).unwrap_or_default();
        let filename = gedcom_value("FILE", 1, text)
            .filter(|f| !f.trim().is_empty())
            .ok_or_else(|| MediaError::MissingFile { xref: xref.clone() })?;
        let title = gedcom_value("TITL", 1, text)
            .filter(|t| !t.is_empty())
            .or_else(|| gedcom_value("TITL", 2, text));

        let mut record = Self::new(xref, filename.trim());
        if let Some(title) = title {
            record = record.with_title(title);
        }
        record.tree = tree;
        record.note = gedcom_value("NOTE", 1, text).filter(|n| !n.is_empty());
        record.media_type = gedcom_value("FORM:TYPE", 2, text)
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty());
        Ok(record)
    }

    pub fn xref(&self) -> &str {
        &self.xref
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tree(&self) -> Option<&TreeRef> {
        self.tree.as_ref()
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    /// Lowercased `FORM`/`TYPE` value, e.g. `"photo"` or `"document"`.
    pub fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }

    /// Name to show when the viewer may see details but no title exists.
    pub fn fallback_name(&self) -> String {
        let base = self
            .filename
            .split('?')
            .next()
            .map(Path::new)
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.filename.clone());
        base.to_uppercase()
    }

    /// Key used by [`crate::locator::LocationCache`]: the xref, or the
    /// filename for records without one.
    pub fn cache_key(&self) -> &str {
        if self.xref.is_empty() {
            &self.filename
        } else {
            &self.xref
        }
    }
}
