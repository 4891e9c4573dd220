// synchub-rs: Hugo site restructuring and mount sync
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Rewrite of the `module` section of a site config.
//!
//! `module.imports` and `module.mounts` are owned by this step and replaced
//! wholesale on every run. Anything else in the tree is left as loaded.

use toml_edit::{Array, InlineTable, Item, Table, Value};
use tracing::{debug, trace};

use super::THEME_IMPORT_PATH;
use crate::document::ConfigTree;
use crate::error::{DocumentError, SyncResult};
use crate::mounts::{MountEntry, SyncSpecification};

const MODULE_KEY: &str = "module";
const IMPORTS_KEY: &str = "module.imports";
const MOUNTS_KEY: &str = "module.mounts";

/// Replace the theme import and mount list of `tree`.
///
/// Prior imports are discarded. Mounts are written in `mounts` order, after
/// any other keys of the `module` table.
///
/// # Errors
///
/// Returns `DocumentError::NotATable` if `module` holds a non-table value.
pub fn merge_mounts(tree: &mut ConfigTree, mounts: &SyncSpecification) -> SyncResult<()> {
    match tree.get(MODULE_KEY) {
        None => {
            trace!("creating module section");
            tree.set(MODULE_KEY, Item::Table(Table::new()))?;
        }
        Some(item) if !item.is_table_like() => {
            return Err(DocumentError::NotATable {
                key: MODULE_KEY.to_string(),
            }
            .into());
        }
        Some(_) => {}
    }

    tree.set(IMPORTS_KEY, Item::Value(theme_imports()))?;

    tree.delete(MOUNTS_KEY);
    tree.set(MOUNTS_KEY, Item::Value(mount_list(mounts)))?;

    debug!(mounts = mounts.len(), import = THEME_IMPORT_PATH, "merged module section");
    Ok(())
}

fn theme_imports() -> Value {
    let mut import = InlineTable::new();
    import.insert("path", Value::from(THEME_IMPORT_PATH));
    Value::Array(Array::from_iter([Value::InlineTable(import)]))
}

/// One inline table per line, so each mount reads as its own entry.
fn mount_list(mounts: &SyncSpecification) -> Value {
    let mut list = Array::new();
    for entry in mounts {
        let mut value = mount_value(entry);
        value.decor_mut().set_prefix("\n  ");
        list.push_formatted(value);
    }
    if !list.is_empty() {
        list.set_trailing_comma(true);
        list.set_trailing("\n");
    }
    Value::Array(list)
}

fn mount_value(entry: &MountEntry) -> Value {
    let mut table = InlineTable::new();
    table.insert("source", Value::from(entry.source.as_str()));
    table.insert("target", Value::from(entry.target.as_str()));
    Value::InlineTable(table)
}
