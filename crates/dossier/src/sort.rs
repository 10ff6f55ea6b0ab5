//! Partition-exchange sort over record collections.
//!
//! The first element of each sub-collection is the pivot. The remaining
//! elements are split, in order, into those with a key strictly less than
//! the pivot's and those with a greater or equal key; the result is
//! `sort(less) + [pivot] + sort(greater_or_equal)`. The pivot is the
//! earliest of its equals, so records with equal keys keep their input
//! order.
//!
//! Sub-collections are kept on an explicit work stack instead of the call
//! stack, so input size is limited by memory rather than recursion depth
//! (already-sorted input is the worst case for a first-element pivot).

use crate::error::{DossierError, Result};
use crate::record::{Field, Record};

enum Task<K, T> {
    Sort(Vec<(K, T)>),
    Emit((K, T)),
}

/// Sort items by a key extracted once per item.
pub fn sort_by_key<T, K, F>(items: Vec<T>, mut key: F) -> Vec<T>
where
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    let keyed = items.into_iter().map(|item| (key(&item), item)).collect();
    partition_sort(keyed).into_iter().map(|(_, item)| item).collect()
}

/// Sort records by the numeric value of one field.
///
/// Fails without sorting anything if a record has no finite numeric value
/// for `key`.
pub fn quick_sort(records: Vec<Record>, key: Field) -> Result<Vec<Record>> {
    let keyed = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| match record.numeric(key) {
            Some(value) => Ok((value, record)),
            None => Err(DossierError::SortKey {
                index,
                field: key.to_string(),
                value: record.text(key).into_owned(),
            }),
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(records = keyed.len(), %key, "sorting records");

    Ok(partition_sort(keyed)
        .into_iter()
        .map(|(_, record)| record)
        .collect())
}

/// Returns true if records are non-decreasing by the numeric value of `key`.
///
/// A record without a numeric value for `key` makes the collection unsorted.
pub fn is_sorted_by_key(records: &[Record], key: Field) -> bool {
    records
        .windows(2)
        .all(|pair| match (pair[0].numeric(key), pair[1].numeric(key)) {
            (Some(a), Some(b)) => a <= b,
            _ => false,
        })
        && (records.len() != 1 || records[0].numeric(key).is_some())
}

fn partition_sort<K: PartialOrd, T>(items: Vec<(K, T)>) -> Vec<(K, T)> {
    let mut output = Vec::with_capacity(items.len());
    let mut stack = vec![Task::Sort(items)];

    while let Some(task) = stack.pop() {
        match task {
            Task::Emit(item) => output.push(item),
            Task::Sort(items) if items.len() < 2 => output.extend(items),
            Task::Sort(items) => {
                let mut rest = items.into_iter();
                let Some(pivot) = rest.next() else {
                    continue;
                };
                let (less, greater_or_equal): (Vec<_>, Vec<_>) =
                    rest.partition(|(key, _)| *key < pivot.0);

                // Popped in reverse: less, pivot, greater_or_equal.
                stack.push(Task::Sort(greater_or_equal));
                stack.push(Task::Emit(pivot));
                stack.push(Task::Sort(less));
            }
        }
    }

    output
}
