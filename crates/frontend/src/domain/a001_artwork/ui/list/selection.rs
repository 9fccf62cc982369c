//! Cross-page selection of artwork ids.
//!
//! The selection outlives page turns and page size changes and is mirrored
//! to localStorage after every mutation.

use super::paging::total_pages;
use crate::shared::storage::{load_json, save_json};
use leptos::prelude::*;
use serde::{Serialize, Serializer};
use std::collections::HashSet;

const STORAGE_KEY: &str = "selectedArtworks";

/// Ordered set of selected ids, insertion order preserved.
///
/// `order` keeps the catalog order of "select N"; `index` answers
/// membership for the per-row checkboxes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectedIds {
    order: Vec<u64>,
    index: HashSet<u64>,
}

impl Serialize for SelectedIds {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.order)
    }
}

impl SelectedIds {
    /// Build from a list that may contain duplicates; first occurrence wins.
    pub fn from_ids(ids: impl IntoIterator<Item = u64>) -> Self {
        let mut out = Self::default();
        for id in ids {
            out.insert(id);
        }
        out
    }

    pub fn contains(&self, id: u64) -> bool {
        self.index.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.order
    }

    /// Returns false when `id` was already selected.
    fn insert(&mut self, id: u64) -> bool {
        if !self.index.insert(id) {
            return false;
        }
        self.order.push(id);
        true
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.index.clear();
    }

    pub fn toggle(&mut self, id: u64) {
        if self.index.remove(&id) {
            self.order.retain(|&x| x != id);
        } else {
            self.insert(id);
        }
    }

    /// Every id of the page is selected. False for an empty page.
    pub fn all_selected(&self, page_ids: &[u64]) -> bool {
        !page_ids.is_empty() && page_ids.iter().all(|&id| self.contains(id))
    }

    /// Header checkbox. A fully checked page clears the whole selection,
    /// otherwise the selection becomes exactly the current page.
    pub fn toggle_page(&mut self, page_ids: &[u64]) {
        if self.all_selected(page_ids) {
            self.clear();
        } else {
            *self = Self::from_ids(page_ids.iter().copied());
        }
    }

    pub fn replace(&mut self, ids: Vec<u64>) {
        *self = Self::from_ids(ids);
    }

    pub fn into_vec(self) -> Vec<u64> {
        self.order
    }
}

/// Restore the selection saved by a previous session.
pub fn load_selection() -> SelectedIds {
    selection_from_stored(load_json::<Vec<u64>>(STORAGE_KEY))
}

fn selection_from_stored(stored: Option<Vec<u64>>) -> SelectedIds {
    stored.map(SelectedIds::from_ids).unwrap_or_default()
}

pub fn persist_selection(selected: &SelectedIds) {
    save_json(STORAGE_KEY, selected);
}

pub fn create_selection() -> RwSignal<SelectedIds> {
    RwSignal::new(load_selection())
}

/// Parse the "select N" field. No validation: anything that is not a
/// non-negative number selects nothing, decimals are truncated.
pub fn parse_select_count(raw: &str) -> usize {
    let raw = raw.trim();
    if let Ok(n) = raw.parse::<usize>() {
        return n;
    }
    match raw.parse::<f64>() {
        Ok(f) if f.is_finite() && f > 0.0 => f.trunc() as usize,
        _ => 0,
    }
}

/// Drives the page-by-page loop that collects the first `needed` ids of
/// the catalog.
///
/// ```ignore
/// let mut c = IdCollector::new(needed, rows, total);
/// while let Some(page) = c.next_page() {
///     c.absorb(&fetch(page, rows).await?.ids());
/// }
/// let ids = c.finish();
/// ```
#[derive(Clone, Debug)]
pub struct IdCollector {
    needed: usize,
    collected: SelectedIds,
    page: u32,
    last_page: u32,
    exhausted: bool,
}

impl IdCollector {
    pub fn new(needed: usize, rows: u32, total: u64) -> Self {
        Self {
            needed,
            collected: SelectedIds::default(),
            page: 1,
            last_page: total_pages(total, rows),
            exhausted: false,
        }
    }

    /// Page to fetch next, `None` when done.
    pub fn next_page(&self) -> Option<u32> {
        if self.needed == 0 || self.exhausted || self.page > self.last_page {
            None
        } else {
            Some(self.page)
        }
    }

    /// Take ids of the fetched page in catalog order and move to the next
    /// page. An empty page means the catalog ran out early.
    pub fn absorb(&mut self, page_ids: &[u64]) {
        if page_ids.is_empty() {
            self.exhausted = true;
            return;
        }
        for &id in page_ids {
            if self.needed == 0 {
                break;
            }
            if self.collected.insert(id) {
                self.needed -= 1;
            }
        }
        self.page += 1;
    }

    pub fn finish(self) -> Vec<u64> {
        self.collected.into_vec()
    }
}
