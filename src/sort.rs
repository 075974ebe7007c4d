//! Stable ordering of entries by name, modification time, or size.

use std::cmp::Ordering;
use std::time::SystemTime;

use tracing::trace;

use crate::entry::{Entry, EntryProbe};
use crate::error::Result;
use crate::tree::TreeNode;

/// What to order by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Name,
    Modified,
    Size,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

/// Sort field paired with a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortKey {
    pub field: SortField,
    pub direction: Direction,
}

impl SortKey {
    pub fn new(field: SortField, direction: Direction) -> Self {
        Self { field, direction }
    }
}

/// The value an item was measured by, fetched once per sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Ordering by name needs nothing from the filesystem.
    Name,
    Modified(SystemTime),
    Size(u64),
}

impl Metric {
    pub fn size(&self) -> Option<u64> {
        match self {
            Metric::Size(size) => Some(*size),
            _ => None,
        }
    }

    pub fn modified(&self) -> Option<SystemTime> {
        match self {
            Metric::Modified(time) => Some(*time),
            _ => None,
        }
    }
}

/// An item together with the metric it is sorted by.
#[derive(Debug, Clone, PartialEq)]
pub struct Measured<T> {
    pub item: T,
    pub metric: Metric,
}

impl<T: AsRef<Entry>> Measured<T> {
    pub fn entry(&self) -> &Entry {
        self.item.as_ref()
    }
}

/// Case-insensitive lexicographic comparison.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Fetch the metric for `field` from every item.
pub fn measure<T, P>(items: Vec<T>, field: SortField, probe: &P) -> Result<Vec<Measured<T>>>
where
    T: AsRef<Entry>,
    P: EntryProbe + ?Sized,
{
    items
        .into_iter()
        .map(|item| {
            let path = &item.as_ref().path;
            let metric = match field {
                SortField::Name => Metric::Name,
                SortField::Modified => Metric::Modified(probe.modified(path)?),
                SortField::Size => Metric::Size(probe.size(path)?),
            };
            Ok(Measured { item, metric })
        })
        .collect()
}

/// Compare two measured items under `key`.
///
/// Descending reverses the primary comparison only; equal times and sizes
/// still fall back to ascending name.
pub fn compare_measured<T: AsRef<Entry>>(a: &Measured<T>, b: &Measured<T>, key: SortKey) -> Ordering {
    let directed = |ord: Ordering| match key.direction {
        Direction::Ascending => ord,
        Direction::Descending => ord.reverse(),
    };
    let by_name = || compare_names(&a.entry().name, &b.entry().name);
    match (a.metric, b.metric) {
        (Metric::Modified(x), Metric::Modified(y)) => directed(x.cmp(&y)).then_with(by_name),
        (Metric::Size(x), Metric::Size(y)) => directed(x.cmp(&y)).then_with(by_name),
        _ => directed(by_name()),
    }
}

/// Stable in-place sort of measured items.
pub fn sort_measured<T: AsRef<Entry>>(items: &mut [Measured<T>], key: SortKey) {
    trace!(count = items.len(), ?key, "sorting");
    items.sort_by(|a, b| compare_measured(a, b, key));
}

/// Measure and sort `items`, returning them with their metrics.
pub fn sort_with_metrics<T, P>(items: Vec<T>, key: SortKey, probe: &P) -> Result<Vec<Measured<T>>>
where
    T: AsRef<Entry>,
    P: EntryProbe + ?Sized,
{
    let mut measured = measure(items, key.field, probe)?;
    sort_measured(&mut measured, key);
    Ok(measured)
}

/// Stable sort of entries (or tree nodes) by `key`.
pub fn sort_entries<T, P>(items: Vec<T>, key: SortKey, probe: &P) -> Result<Vec<T>>
where
    T: AsRef<Entry>,
    P: EntryProbe + ?Sized,
{
    Ok(sort_with_metrics(items, key, probe)?
        .into_iter()
        .map(|m| m.item)
        .collect())
}

/// Re-order the children of every directory in the tree by `key`.
pub fn sort_tree<P: EntryProbe + ?Sized>(node: &mut TreeNode, key: SortKey, probe: &P) -> Result<()> {
    let children = std::mem::take(&mut node.children);
    node.children = sort_entries(children, key, probe)?;
    for child in &mut node.children {
        sort_tree(child, key, probe)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sized(name: &str, size: u64) -> Measured<Entry> {
        Measured {
            item: Entry::new(format!("/t/{name}"), name, false),
            metric: Metric::Size(size),
        }
    }

    fn names(items: &[Measured<Entry>]) -> Vec<&str> {
        items.iter().map(|m| m.entry().name.as_str()).collect()
    }

    #[test]
    fn compare_names_ignores_case() {
        assert_eq!(compare_names("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_names("README", "readme"), Ordering::Equal);
        assert_eq!(compare_names("b", "A"), Ordering::Greater);
    }

    #[test]
    fn size_descending_scenario() {
        let mut items = vec![sized("a", 10), sized("b", 30), sized("c", 20)];
        sort_measured(&mut items, SortKey::new(SortField::Size, Direction::Descending));
        assert_eq!(names(&items), vec!["b", "c", "a"]);
    }

    #[test]
    fn descending_ties_break_by_ascending_name() {
        let mut items = vec![sized("zeta", 5), sized("alpha", 5), sized("big", 9)];
        sort_measured(&mut items, SortKey::new(SortField::Size, Direction::Descending));
        assert_eq!(names(&items), vec!["big", "alpha", "zeta"]);
    }

    #[test]
    fn empty_and_single_are_noops() {
        let mut empty: Vec<Measured<Entry>> = Vec::new();
        sort_measured(&mut empty, SortKey::default());
        assert!(empty.is_empty());

        let mut one = vec![sized("only", 1)];
        sort_measured(&mut one, SortKey::new(SortField::Size, Direction::Descending));
        assert_eq!(names(&one), vec!["only"]);
    }
}
