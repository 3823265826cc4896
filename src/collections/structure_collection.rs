//! Immutable ordered collection of records
//!
//! Every transform on [`StructureCollection`] returns a new collection; the
//! receiver and the records it holds are never touched.

use std::cmp::Ordering;
use std::ops::Index;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::error::{CollectionError, CollectionResult};
use crate::models::{Record, Structure};
use crate::validation::{ValidationError, ValidationResult};

/// Ordered, immutable sequence of records.
///
/// Generic over the [`Record`] capability; defaults to [`Structure`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StructureCollection<R: Record = Structure> {
    items: Vec<R>,
}

impl<R: Record> Default for StructureCollection<R> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<R: Record> StructureCollection<R> {
    /// Create a collection from an initial sequence of records
    pub fn new(items: impl IntoIterator<Item = R>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    /// Create an empty collection
    pub fn empty() -> Self {
        Self::default()
    }

    /// Copy with `item` appended.
    pub fn with_new_one_item(&self, item: R) -> Self {
        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.extend(self.items.iter().cloned());
        items.push(item);
        Self { items }
    }

    /// Copy with every record of `items` appended, in order.
    pub fn with_many_new_items(&self, items: impl IntoIterator<Item = R>) -> Self {
        let mut all = self.items.clone();
        all.extend(items);
        Self { items: all }
    }

    /// Copy with one raw row converted and appended.
    pub fn with_new_row<S>(&self, row: S) -> ValidationResult<Self>
    where
        R: TryFrom<S, Error = ValidationError>,
    {
        let item = R::try_from(row)?;
        Ok(self.with_new_one_item(item))
    }

    /// Copy with every raw row converted and appended.
    ///
    /// All rows are converted before anything is appended; the first invalid
    /// row rejects the whole batch with [`ValidationError::InvalidItem`].
    pub fn with_many_new_rows<S, I>(&self, rows: I) -> ValidationResult<Self>
    where
        I: IntoIterator<Item = S>,
        R: TryFrom<S, Error = ValidationError>,
    {
        let converted = rows
            .into_iter()
            .enumerate()
            .map(|(index, row)| {
                R::try_from(row).map_err(|source| ValidationError::InvalidItem {
                    index,
                    source: Box::new(source),
                })
            })
            .collect::<ValidationResult<Vec<R>>>();

        match converted {
            Ok(items) => Ok(self.with_many_new_items(items)),
            Err(e) => {
                warn!("Rejected batch append: {}", e);
                Err(e)
            }
        }
    }

    /// Snapshot copy of the records, in order.
    pub fn get_all(&self) -> Vec<R> {
        self.items.clone()
    }

    /// Borrow the records without copying.
    pub fn as_slice(&self) -> &[R] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.items.iter()
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get_first_or_null(&self) -> Option<&R> {
        self.items.first()
    }

    pub fn get_last_or_null(&self) -> Option<&R> {
        self.items.last()
    }

    /// First record; an empty collection is an assertion failure.
    pub fn get_first_asserted(&self) -> CollectionResult<&R> {
        self.items.first().ok_or(CollectionError::Empty {
            operation: "get_first_asserted",
        })
    }

    /// Last record; an empty collection is an assertion failure.
    pub fn get_last_asserted(&self) -> CollectionResult<&R> {
        self.items.last().ok_or(CollectionError::Empty {
            operation: "get_last_asserted",
        })
    }

    /// Records for which `predicate` holds, in their original order.
    pub fn filtered_by<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&R) -> bool,
    {
        Self {
            items: self.items.iter().filter(|item| predicate(item)).cloned().collect(),
        }
    }

    /// Project every record to an arbitrary value.
    pub fn map<T, F>(&self, f: F) -> Vec<T>
    where
        F: FnMut(&R) -> T,
    {
        self.items.iter().map(f).collect()
    }

    /// Replace every record with the record `f` builds from it.
    pub fn reworked_by<U, F>(&self, f: F) -> StructureCollection<U>
    where
        U: Record,
        F: FnMut(&R) -> U,
    {
        StructureCollection {
            items: self.items.iter().map(f).collect(),
        }
    }

    /// Like [`reworked_by`](Self::reworked_by) for reworks that can fail
    /// validation; the first failure aborts the whole rework.
    pub fn try_reworked_by<U, F>(&self, f: F) -> ValidationResult<StructureCollection<U>>
    where
        U: Record,
        F: FnMut(&R) -> ValidationResult<U>,
    {
        Ok(StructureCollection {
            items: self.items.iter().map(f).collect::<ValidationResult<Vec<U>>>()?,
        })
    }

    /// Copy ordered by `compare`. The sort is stable.
    pub fn sorted_by<F>(&self, compare: F) -> Self
    where
        F: FnMut(&R, &R) -> Ordering,
    {
        let mut items = self.items.clone();
        items.sort_by(compare);
        Self { items }
    }

    /// Copy without records loosely equal to `template`.
    ///
    /// - `limit == 0`: remove every match
    /// - `limit > 0`: remove the first `limit` matches
    /// - `limit < 0`: remove the last `|limit|` matches
    pub fn without_objects_like(&self, template: &R, limit: i64) -> Self {
        let matches: Vec<usize> = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_rude_equals(template))
            .map(|(index, _)| index)
            .collect();

        let bound = usize::try_from(limit.unsigned_abs()).unwrap_or(usize::MAX);
        let removed: &[usize] = match limit.cmp(&0) {
            Ordering::Equal => &matches,
            Ordering::Greater => &matches[..bound.min(matches.len())],
            Ordering::Less => &matches[matches.len().saturating_sub(bound)..],
        };

        debug!(
            "Removing {} of {} matching records (limit {})",
            removed.len(),
            matches.len(),
            limit
        );

        let items = self
            .items
            .iter()
            .enumerate()
            .filter(|(index, _)| removed.binary_search(index).is_err())
            .map(|(_, item)| item.clone())
            .collect();
        Self { items }
    }

    /// Fail unless `predicate(count)` holds; otherwise hand back `self` for chaining.
    pub fn assert_count<F>(&self, predicate: F) -> CollectionResult<&Self>
    where
        F: FnOnce(usize) -> bool,
    {
        let count = self.count();
        if predicate(count) {
            Ok(self)
        } else {
            Err(CollectionError::CountRejected { count })
        }
    }
}

impl<R: Record> FromIterator<R> for StructureCollection<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<R: Record> IntoIterator for StructureCollection<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, R: Record> IntoIterator for &'a StructureCollection<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<R: Record> Index<usize> for StructureCollection<R> {
    type Output = R;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}
