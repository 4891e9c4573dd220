// synchub-rs: Hugo site restructuring and mount sync
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Format-preserving TOML document tree.
//!
//! ```text
//! ConfigTree::load(path) --> get / set / delete ("module.mounts") --> save(path)
//!       |                                                              |
//!   NotFound, Parse, Read                                            Write
//! ```
//!
//! The tree is a `toml_edit` document. Keys that are not edited keep their
//! position, spelling (dotted keys, inline tables, `[[array]]` tables) and
//! surrounding comments through load, edit and save. A new key is appended
//! after its siblings.

use std::ops::Range;
use std::path::Path;

use toml_edit::{DocumentMut, InlineTable, Item, Table, TableLike, Value};
use tracing::trace;

use crate::error::DocumentError;

/// Result type for document operations.
pub type DocumentResult<T> = std::result::Result<T, DocumentError>;

/// A mutable, hierarchical key-value document.
#[derive(Debug, Clone, Default)]
pub struct ConfigTree {
    doc: DocumentMut,
}

impl ConfigTree {
    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a tree from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::NotFound` if the file is absent,
    /// `DocumentError::Read` on other I/O failures, and
    /// `DocumentError::Parse` if the document is malformed.
    pub fn load(path: &Path) -> DocumentResult<Self> {
        let text = read_document(path)?;
        Self::parse(&text, &path.display().to_string())
    }

    /// Parse a tree from TOML text. `origin` names the source in errors.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::Parse` if the text is not valid TOML.
    pub fn parse(text: &str, origin: &str) -> DocumentResult<Self> {
        text.parse::<DocumentMut>()
            .map(|doc| Self { doc })
            .map_err(|e| parse_error(e.message(), e.span(), text, origin))
    }

    /// Render the whole tree as TOML text.
    #[must_use]
    pub fn render(&self) -> String {
        self.doc.to_string()
    }

    /// Render the tree and overwrite `path` in place.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::Write` if the file cannot be written.
    pub fn save(&self, path: &Path) -> DocumentResult<()> {
        std::fs::write(path, self.render()).map_err(|source| DocumentError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Top-level keys in document order.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        self.doc.iter().map(|(key, _)| key).collect()
    }

    /// Look up a dotted key. `None` means absent; an empty table or array is
    /// still `Some`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Item> {
        let (last, parents) = split_key(key)?;
        let mut item = self.doc.as_item();
        for segment in parents {
            item = item.get(segment)?;
        }
        item.as_table_like()?.get(last)
    }

    /// Whether a dotted key is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Set a dotted key, creating intermediate tables as needed.
    ///
    /// An existing key keeps its position; a new key is appended after its
    /// siblings. Below an inline table, new tables are inline as well.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::EmptyKey` for an empty key and
    /// `DocumentError::NotATable` if an intermediate key holds a non-table.
    pub fn set(&mut self, key: &str, item: Item) -> DocumentResult<()> {
        let (last, parents) = split_key(key).ok_or(DocumentError::EmptyKey)?;
        let mut walked = String::new();
        insert_at(
            self.doc.as_table_mut(),
            false,
            &parents,
            last,
            item,
            &mut walked,
        )?;
        trace!(key, "set");
        Ok(())
    }

    /// Remove a dotted key, returning its value. Absent keys are a no-op.
    ///
    /// The remaining siblings keep their relative order.
    pub fn delete(&mut self, key: &str) -> Option<Item> {
        let (last, parents) = split_key(key)?;
        let mut item = self.doc.as_item_mut();
        for segment in parents {
            item = item.get_mut(segment)?;
        }
        let removed = item.as_table_like_mut()?.remove(last);
        if removed.is_some() {
            trace!(key, "delete");
        }
        removed
    }
}

fn insert_at(
    table: &mut dyn TableLike,
    inline: bool,
    parents: &[&str],
    last: &str,
    item: Item,
    walked: &mut String,
) -> DocumentResult<()> {
    let Some((segment, rest)) = parents.split_first() else {
        let item = if inline {
            item.into_value().map_or_else(|item| item, Item::Value)
        } else {
            item
        };
        table.insert(last, item);
        return Ok(());
    };

    if !walked.is_empty() {
        walked.push('.');
    }
    walked.push_str(segment);

    let child = table.entry(segment).or_insert_with(|| {
        if inline {
            Item::Value(Value::InlineTable(InlineTable::new()))
        } else {
            let mut table = Table::new();
            table.set_implicit(true);
            Item::Table(table)
        }
    });
    let child_inline = inline || child.is_value();
    let next = child
        .as_table_like_mut()
        .ok_or_else(|| DocumentError::NotATable {
            key: walked.clone(),
        })?;
    insert_at(next, child_inline, rest, last, item, walked)
}

/// Read a document file, mapping a missing file to `NotFound`.
pub(crate) fn read_document(path: &Path) -> DocumentResult<String> {
    std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            DocumentError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            DocumentError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Build a `Parse` error carrying the 1-based line of the failure.
pub(crate) fn parse_error(
    message: &str,
    span: Option<Range<usize>>,
    text: &str,
    origin: &str,
) -> DocumentError {
    let message = match span {
        Some(span) => {
            let end = span.start.min(text.len());
            let line = text.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count() + 1;
            format!("{} (line {line})", message.trim_end())
        }
        None => message.trim_end().to_string(),
    };
    DocumentError::Parse {
        origin: origin.to_string(),
        message,
    }
}

/// Split `a.b.c` into `("c", ["a", "b"])`. Empty keys and empty segments
/// yield `None`.
fn split_key(key: &str) -> Option<(&str, Vec<&str>)> {
    let mut segments: Vec<&str> = key.split('.').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return None;
    }
    let last = segments.pop()?;
    Some((last, segments))
}
