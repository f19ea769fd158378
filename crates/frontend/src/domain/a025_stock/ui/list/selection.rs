//! Checkbox state of the stock table.
//!
//! Flags are keyed by record id, so a row keeps its flag when other rows are
//! added or removed. `order` mirrors the list so index-based callers (row
//! checkbox N) still work and misalignment can be detected.

use crate::domain::a025_stock::error::IndexError;
use contracts::domain::a025_stock::StockRecord;
use std::collections::{HashMap, HashSet};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionTracker {
    order: Vec<String>,
    checked: HashMap<String, bool>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// All rows of `list` unchecked; called after every load
    pub fn reset_all(&mut self, list: &[StockRecord]) {
        self.order = list.iter().map(|r| r.id.clone()).collect();
        self.checked = self.order.iter().map(|id| (id.clone(), false)).collect();
    }

    /// Follow a structural change of the list: new rows start unchecked,
    /// vanished rows are forgotten, surviving rows keep their flag.
    pub fn sync(&mut self, list: &[StockRecord]) {
        let order: Vec<String> = list.iter().map(|r| r.id.clone()).collect();
        let mut checked = HashMap::with_capacity(order.len());
        for id in &order {
            let flag = self.checked.get(id).copied().unwrap_or(false);
            checked.insert(id.clone(), flag);
        }
        self.order = order;
        self.checked = checked;
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Flip the flag of row `index`, returns the new value
    pub fn toggle(&mut self, index: usize) -> Result<bool, IndexError> {
        let id = self.order.get(index).ok_or(IndexError::OutOfRange {
            index,
            len: self.order.len(),
        })?;
        let flag = self.checked.entry(id.clone()).or_insert(false);
        *flag = !*flag;
        Ok(*flag)
    }

    /// Set the flag of a row by id; unknown ids are ignored
    pub fn set(&mut self, id: &str, checked: bool) -> bool {
        match self.checked.get_mut(id) {
            Some(flag) => {
                *flag = checked;
                true
            }
            None => false,
        }
    }

    pub fn set_all(&mut self, checked: bool) {
        for flag in self.checked.values_mut() {
            *flag = checked;
        }
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.checked.get(id).copied().unwrap_or(false)
    }

    /// Flags in row order
    pub fn current_selection(&self) -> Vec<bool> {
        self.order.iter().map(|id| self.is_checked(id)).collect()
    }

    pub fn selected_count(&self) -> usize {
        self.order.iter().filter(|id| self.is_checked(id)).count()
    }

    /// Ids of the checked rows of `list`.
    ///
    /// Fails if the tracker was not resynchronised after `list` changed shape.
    pub fn selected_ids(&self, list: &[StockRecord]) -> Result<HashSet<String>, IndexError> {
        self.ensure_aligned(list)?;
        Ok(list
            .iter()
            .filter(|r| self.is_checked(&r.id))
            .map(|r| r.id.clone())
            .collect())
    }

    pub fn all_selected(&self, list: &[StockRecord]) -> bool {
        !list.is_empty()
            && self.ensure_aligned(list).is_ok()
            && list.iter().all(|r| self.is_checked(&r.id))
    }

    fn ensure_aligned(&self, list: &[StockRecord]) -> Result<(), IndexError> {
        let aligned = self.order.len() == list.len()
            && self.order.iter().zip(list).all(|(id, r)| *id == r.id);
        if aligned {
            Ok(())
        } else {
            Err(IndexError::Misaligned {
                tracked: self.order.len(),
                listed: list.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a025_stock::testing::record;

    fn rows(ids: &[&str]) -> Vec<StockRecord> {
        ids.iter().map(|id| record(id, "FactoryStock", 1.0, 1.0)).collect()
    }

    #[test]
    fn reset_matches_list_length_and_clears_flags() {
        let list = rows(&["1", "2", "3"]);
        let mut sel = SelectionTracker::new();
        assert!(sel.is_empty());
        sel.reset_all(&list);
        sel.toggle(1).unwrap();
        sel.reset_all(&list);
        assert!(!sel.is_empty());
        assert_eq!(sel.len(), list.len());
        assert_eq!(sel.current_selection(), vec![false, false, false]);
    }

    #[test]
    fn toggle_out_of_range_is_an_index_error() {
        let mut sel = SelectionTracker::new();
        sel.reset_all(&rows(&["1"]));
        assert_eq!(
            sel.toggle(5),
            Err(IndexError::OutOfRange { index: 5, len: 1 })
        );
        assert_eq!(sel.current_selection(), vec![false]);
    }

    #[test]
    fn selected_ids_projects_checked_rows() {
        let list = rows(&["a", "b", "c"]);
        let mut sel = SelectionTracker::new();
        sel.reset_all(&list);
        assert_eq!(sel.toggle(0), Ok(true));
        assert_eq!(sel.toggle(2), Ok(true));
        assert_eq!(sel.toggle(2), Ok(false));
        let ids = sel.selected_ids(&list).unwrap();
        assert_eq!(ids, HashSet::from(["a".to_string()]));
    }

    #[test]
    fn selected_ids_refuses_a_list_of_another_shape() {
        let mut sel = SelectionTracker::new();
        sel.reset_all(&rows(&["a", "b"]));
        let grown = rows(&["a", "b", "c"]);
        assert_eq!(
            sel.selected_ids(&grown),
            Err(IndexError::Misaligned { tracked: 2, listed: 3 })
        );
        let reordered = rows(&["b", "a"]);
        assert!(sel.selected_ids(&reordered).is_err());
    }

    #[test]
    fn sync_keeps_flags_of_surviving_rows() {
        let mut sel = SelectionTracker::new();
        sel.reset_all(&rows(&["a", "b", "c"]));
        sel.set("c", true);
        let after = rows(&["b", "c", "d"]);
        sel.sync(&after);
        assert_eq!(sel.len(), 3);
        assert_eq!(sel.current_selection(), vec![false, true, false]);
        assert_eq!(
            sel.selected_ids(&after).unwrap(),
            HashSet::from(["c".to_string()])
        );
    }

    #[test]
    fn all_selected_requires_non_empty_list() {
        let mut sel = SelectionTracker::new();
        sel.reset_all(&[]);
        assert!(!sel.all_selected(&[]));

        let list = rows(&["a", "b"]);
        sel.reset_all(&list);
        assert!(!sel.all_selected(&list));
        sel.set_all(true);
        assert!(sel.all_selected(&list));
        assert_eq!(sel.selected_count(), 2);
        sel.toggle(1).unwrap();
        assert!(!sel.all_selected(&list));
    }

    #[test]
    fn set_ignores_unknown_ids() {
        let mut sel = SelectionTracker::new();
        sel.reset_all(&rows(&["a"]));
        assert!(!sel.set("zzz", true));
        assert!(sel.set("a", true));
        assert!(sel.is_checked("a"));
    }
}
