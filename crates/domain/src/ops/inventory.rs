//! Admin inventory maintenance.

use crate::model::Item;
use crate::snapshot::AppData;

/// Intent to add or replace one inventory item.
#[derive(Debug, Clone)]
pub struct UpsertItem {
    pub item: Item,
}

impl UpsertItem {
    pub fn new(item: Item) -> Self {
        Self { item }
    }
}

/// Upserts an item by id: replaces the existing record or appends a new one.
///
/// Field validation beyond identity belongs to the caller; this operation
/// accepts the record as given.
pub fn upsert_item(data: &AppData, cmd: &UpsertItem) -> AppData {
    let mut next = data.clone();
    match next.items.iter_mut().find(|i| i.id == cmd.item.id) {
        Some(existing) => *existing = cmd.item.clone(),
        None => next.items.push(cmd.item.clone()),
    }
    next
}

/// Intent to bulk-import already-parsed item records.
#[derive(Debug, Clone)]
pub struct ImportItems {
    pub items: Vec<Item>,
}

impl ImportItems {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }
}

/// Applies upsert-by-id for each record in sequence; a later record with a
/// duplicate id wins.
pub fn import_items(data: &AppData, cmd: &ImportItems) -> AppData {
    let mut next = data.clone();
    for item in &cmd.items {
        match next.items.iter_mut().find(|i| i.id == item.id) {
            Some(existing) => *existing = item.clone(),
            None => next.items.push(item.clone()),
        }
    }
    next
}
