//! Per-kind entity storage: the in-memory entity factory.
//!
//! A [`Collection`] allocates records in a `SlotMap` arena and keeps a
//! separate, ordered list of the records that have been appended. Creation
//! alone never makes a record visible.
//!
//! Appends are staged. Other builders only observe committed records, so a
//! builder's effects become visible all at once when its stage is committed:
//!
//! ```rust,ignore
//! let key = graph.items.create_new();
//! graph.items.append(key)?;          // staged, invisible to lookups
//! graph.commit_staged();             // now visible in collection order
//! ```

use serde::{Deserialize, Serialize};
use slotmap::{Key, SlotMap};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors raised by the entity factory.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollectionError {
    #[error("unknown {kind} handle")]
    UnknownHandle { kind: &'static str },
    #[error("{kind} identifier {id} is already in use")]
    DuplicateId { kind: &'static str, id: u32 },
    #[error("{kind} {id} was already appended")]
    AlreadyAppended { kind: &'static str, id: u32 },
}

// ---------------------------------------------------------------------------
// Entity marker
// ---------------------------------------------------------------------------

/// A configuration record type stored in a [`Collection`].
pub trait Entity {
    /// Human readable kind name, used in errors and logs.
    const KIND: &'static str;
}

// ---------------------------------------------------------------------------
// Collection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Record<T> {
    id: u32,
    appended: bool,
    value: T,
}

/// Storage for every record of one entity kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection<K: Key, T> {
    records: SlotMap<K, Record<T>>,
    /// Committed records in collection order.
    order: Vec<K>,
    /// Appended since the last commit.
    #[serde(skip)]
    staged: Vec<K>,
    /// Created since the last commit, appended or not.
    #[serde(skip)]
    created: Vec<K>,
    next_id: u32,
}

impl<K: Key, T> Default for Collection<K, T> {
    fn default() -> Self {
        Self {
            records: SlotMap::with_key(),
            order: Vec::new(),
            staged: Vec::new(),
            created: Vec::new(),
            next_id: 1,
        }
    }
}

impl<K: Key, T: Entity> Collection<K, T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh, zero-valued record with an assigned identifier.
    pub fn create_new(&mut self) -> K
    where
        T: Default,
    {
        self.insert_new(T::default())
    }

    /// Allocate a record holding `value`. The record is not appended.
    pub fn insert_new(&mut self, value: T) -> K {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        let key = self.records.insert(Record {
            id,
            appended: false,
            value,
        });
        self.created.push(key);
        key
    }

    /// Replace the assigned identifier of a record.
    pub fn set_explicit_id(&mut self, key: K, id: u32) -> Result<(), CollectionError> {
        if !self.records.contains_key(key) {
            return Err(CollectionError::UnknownHandle { kind: T::KIND });
        }
        if self
            .records
            .iter()
            .any(|(other, record)| other != key && record.id == id)
        {
            return Err(CollectionError::DuplicateId { kind: T::KIND, id });
        }
        self.records[key].id = id;

        // Keep auto-assigned identifiers above any explicit one.
        if id >= self.next_id {
            self.next_id = id.saturating_add(1);
        }
        Ok(())
    }

    /// Register a record in collection order. It stays staged until the
    /// next [`commit_staged`](Self::commit_staged).
    pub fn append(&mut self, key: K) -> Result<(), CollectionError> {
        let record = self
            .records
            .get_mut(key)
            .ok_or(CollectionError::UnknownHandle { kind: T::KIND })?;
        if record.appended {
            return Err(CollectionError::AlreadyAppended {
                kind: T::KIND,
                id: record.id,
            });
        }
        record.appended = true;
        self.staged.push(key);
        Ok(())
    }

    pub fn get(&self, key: K) -> Option<&T> {
        self.records.get(key).map(|r| &r.value)
    }

    pub fn get_mut(&mut self, key: K) -> Option<&mut T> {
        self.records.get_mut(key).map(|r| &mut r.value)
    }

    /// Identifier of a record, explicit or assigned.
    pub fn id(&self, key: K) -> Option<u32> {
        self.records.get(key).map(|r| r.id)
    }

    /// Whether the record exists and has been appended (staged or committed).
    pub fn contains(&self, key: K) -> bool {
        self.records.get(key).is_some_and(|r| r.appended)
    }

    /// Committed records in collection order.
    pub fn iter(&self) -> impl Iterator<Item = (K, &T)> + '_ {
        self.order
            .iter()
            .filter_map(move |&k| self.records.get(k).map(|r| (k, &r.value)))
    }

    /// Committed records followed by the current stage's appended records.
    pub fn iter_all(&self) -> impl Iterator<Item = (K, &T)> + '_ {
        self.order
            .iter()
            .chain(self.staged.iter())
            .filter_map(move |&k| self.records.get(k).map(|r| (k, &r.value)))
    }

    /// `(identifier, record)` pairs of committed records.
    pub fn iter_with_ids(&self) -> impl Iterator<Item = (u32, &T)> + '_ {
        self.order
            .iter()
            .filter_map(move |&k| self.records.get(k).map(|r| (r.id, &r.value)))
    }

    /// Number of committed records.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of records appended since the last commit.
    pub fn staged_len(&self) -> usize {
        self.staged.len()
    }

    pub fn has_staged(&self) -> bool {
        !self.staged.is_empty() || !self.created.is_empty()
    }

    /// Publish the current stage. Records created but never appended are
    /// discarded. Returns the number of records made visible.
    pub fn commit_staged(&mut self) -> usize {
        for key in self.created.drain(..) {
            if self.records.get(key).is_some_and(|r| !r.appended) {
                self.records.remove(key);
            }
        }
        let published = self.staged.len();
        self.order.append(&mut self.staged);
        published
    }

    /// Discard every record created since the last commit. Returns the number
    /// of appended records that were dropped.
    pub fn rollback_staged(&mut self) -> usize {
        for key in self.created.drain(..) {
            self.records.remove(key);
        }
        let dropped = self.staged.len();
        self.staged.clear();
        dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::new_key_type;

    new_key_type! {
        struct WidgetKey;
    }

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Widget {
        number: u16,
    }

    impl Entity for Widget {
        const KIND: &'static str = "widget";
    }

    fn widget(number: u16) -> Widget {
        Widget { number }
    }

    #[test]
    fn create_new_is_zero_valued_and_invisible() {
        let mut c: Collection<WidgetKey, Widget> = Collection::new();
        let key = c.create_new();
        assert_eq!(c.get(key), Some(&Widget::default()));
        assert!(!c.contains(key));
        assert_eq!(c.len(), 0);
        assert_eq!(c.iter_all().count(), 0);
    }

    #[test]
    fn append_is_staged_until_commit() {
        let mut c: Collection<WidgetKey, Widget> = Collection::new();
        let key = c.insert_new(widget(7));
        c.append(key).unwrap();

        assert!(c.contains(key));
        assert_eq!(c.iter().count(), 0);
        assert_eq!(c.iter_all().count(), 1);
        assert_eq!(c.staged_len(), 1);

        assert_eq!(c.commit_staged(), 1);
        assert_eq!(c.iter().count(), 1);
        assert_eq!(c.staged_len(), 0);
    }

    #[test]
    fn assigned_ids_are_sequential_from_one() {
        let mut c: Collection<WidgetKey, Widget> = Collection::new();
        let a = c.insert_new(widget(1));
        let b = c.insert_new(widget(2));
        assert_eq!(c.id(a), Some(1));
        assert_eq!(c.id(b), Some(2));
    }

    #[test]
    fn explicit_id_keeps_assigned_ids_above() {
        let mut c: Collection<WidgetKey, Widget> = Collection::new();
        let a = c.insert_new(widget(1));
        c.set_explicit_id(a, 100).unwrap();
        let b = c.insert_new(widget(2));
        assert_eq!(c.id(a), Some(100));
        assert_eq!(c.id(b), Some(101));
    }

    #[test]
    fn explicit_id_zero_is_allowed() {
        let mut c: Collection<WidgetKey, Widget> = Collection::new();
        let a = c.insert_new(widget(1));
        c.set_explicit_id(a, 0).unwrap();
        assert_eq!(c.id(a), Some(0));
    }

    #[test]
    fn duplicate_explicit_id_fails() {
        let mut c: Collection<WidgetKey, Widget> = Collection::new();
        let a = c.insert_new(widget(1));
        let b = c.insert_new(widget(2));
        c.set_explicit_id(a, 5).unwrap();
        let err = c.set_explicit_id(b, 5).unwrap_err();
        assert_eq!(
            err,
            CollectionError::DuplicateId {
                kind: "widget",
                id: 5
            }
        );
        // Re-assigning the same id to the same record is fine.
        c.set_explicit_id(a, 5).unwrap();
    }

    #[test]
    fn append_twice_fails() {
        let mut c: Collection<WidgetKey, Widget> = Collection::new();
        let key = c.insert_new(widget(1));
        c.append(key).unwrap();
        assert!(matches!(
            c.append(key),
            Err(CollectionError::AlreadyAppended {
                kind: "widget",
                id: 1
            })
        ));
    }

    #[test]
    fn commit_discards_unappended_records() {
        let mut c: Collection<WidgetKey, Widget> = Collection::new();
        let kept = c.insert_new(widget(1));
        let orphan = c.insert_new(widget(2));
        c.append(kept).unwrap();
        c.commit_staged();

        assert!(c.get(kept).is_some());
        assert!(c.get(orphan).is_none());
        assert!(!c.has_staged());
    }

    #[test]
    fn rollback_discards_the_stage_only() {
        let mut c: Collection<WidgetKey, Widget> = Collection::new();
        let committed = c.insert_new(widget(1));
        c.append(committed).unwrap();
        c.commit_staged();

        let staged = c.insert_new(widget(2));
        c.append(staged).unwrap();
        assert_eq!(c.rollback_staged(), 1);

        assert!(c.get(staged).is_none());
        assert_eq!(c.iter().map(|(_, w)| w.number).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn operations_on_unknown_handle_fail() {
        let mut c: Collection<WidgetKey, Widget> = Collection::new();
        let key = c.insert_new(widget(1));
        c.rollback_staged();
        assert!(matches!(
            c.append(key),
            Err(CollectionError::UnknownHandle { kind: "widget" })
        ));
        assert!(c.set_explicit_id(key, 3).is_err());
        assert!(c.id(key).is_none());
    }

    #[test]
    fn iteration_follows_collection_order() {
        let mut c: Collection<WidgetKey, Widget> = Collection::new();
        for n in [5, 3, 9] {
            let key = c.insert_new(widget(n));
            c.append(key).unwrap();
        }
        c.commit_staged();
        let numbers: Vec<u16> = c.iter().map(|(_, w)| w.number).collect();
        assert_eq!(numbers, vec![5, 3, 9]);
        let ids: Vec<u32> = c.iter_with_ids().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
