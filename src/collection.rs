//! Ordered record collections and the higher-order operations over them.
//!
//! A [`Collection`] is an ordered sequence of [`Record`]s, insertion order
//! significant. The operations never mutate their input: each produces a new
//! value (boolean, index, new collection, or value list) from a read-only
//! borrow of the source.
//!
//! All eight operations share one internal iteration primitive, an
//! index-stepping scan with early exit. [`each`](Collection::each) wraps it
//! directly; everything else is a fold or early-exit scan over it, so no
//! operation carries its own loop.

use std::ops::ControlFlow;

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// An ordered sequence of records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    records: Vec<Record>,
}

impl Collection {
    /// An empty collection.
    pub fn new() -> Collection {
        Collection::default()
    }

    /// The record at `index`, `None` past the end.
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the records in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// The single iteration primitive behind every operation.
    ///
    /// Steps through the records in order with their zero-based indices,
    /// stopping at the first `Break` and returning its value.
    fn scan<B, F>(&self, mut step: F) -> Option<B>
    where
        F: FnMut(usize, &Record) -> ControlFlow<B>,
    {
        for (index, record) in self.records.iter().enumerate() {
            if let ControlFlow::Break(value) = step(index, record) {
                return Some(value);
            }
        }
        None
    }

    /// Invoke `visit` once per record in order with its zero-based index.
    pub fn each<F>(&self, mut visit: F)
    where
        F: FnMut(&Record, usize),
    {
        self.scan(|index, record| {
            visit(record, index);
            ControlFlow::<()>::Continue(())
        });
    }

    /// True iff `pred` holds for every record.
    ///
    /// Vacuously true on an empty collection.
    pub fn all<P>(&self, pred: P) -> bool
    where
        P: Fn(&Record) -> bool,
    {
        self.scan(|_, record| {
            if pred(record) {
                ControlFlow::Continue(())
            } else {
                ControlFlow::Break(())
            }
        })
        .is_none()
    }

    /// True iff `pred` holds for at least one record.
    ///
    /// False on an empty collection.
    pub fn any<P>(&self, pred: P) -> bool
    where
        P: Fn(&Record) -> bool,
    {
        self.scan(|_, record| {
            if pred(record) {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .is_some()
    }

    /// True iff some record is field-wise equal to `record`.
    pub fn contains(&self, record: &Record) -> bool {
        self.index_of(record).is_some()
    }

    /// Zero-based index of the first record field-wise equal to `record`.
    ///
    /// `None` means not found; it is a result, not a failure.
    pub fn index_of(&self, record: &Record) -> Option<usize> {
        self.scan(|index, candidate| {
            if candidate == record {
                ControlFlow::Break(index)
            } else {
                ControlFlow::Continue(())
            }
        })
    }

    /// New collection of exactly the records where `pred` is true, in
    /// original order.
    pub fn filter<P>(&self, pred: P) -> Collection
    where
        P: Fn(&Record) -> bool,
    {
        let mut kept = Vec::new();
        self.each(|record, _| {
            if pred(record) {
                kept.push(record.clone());
            }
        });
        Collection::from(kept)
    }

    /// New collection of exactly the records where `pred` is false, in
    /// original order.
    ///
    /// Together with [`filter`](Collection::filter) this partitions the
    /// collection: no record lands in both, none is dropped.
    pub fn reject<P>(&self, pred: P) -> Collection
    where
        P: Fn(&Record) -> bool,
    {
        self.filter(|record| !pred(record))
    }

    /// The value `extract` produces for each record, in order.
    ///
    /// Same length and order as the collection.
    pub fn pluck<E>(&self, extract: E) -> Vec<String>
    where
        E: Fn(&Record) -> String,
    {
        let mut values = Vec::with_capacity(self.len());
        self.each(|record, _| values.push(extract(record)));
        values
    }
}

impl From<Vec<Record>> for Collection {
    fn from(records: Vec<Record>) -> Collection {
        Collection { records }
    }
}

impl FromIterator<Record> for Collection {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Collection {
        Collection {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Collection {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: build a student record.
    fn student(first: &str, last: &str, age: u32, class: &str) -> Record {
        Record::from_pairs([
            ("first", first.to_string()),
            ("last", last.to_string()),
            ("age", age.to_string()),
            ("class", class.to_string()),
        ])
        .unwrap()
    }

    /// Helper: the four-student roster.
    fn roster() -> Collection {
        vec![
            student("Obi-Wan", "Kenobi", 55, "Math"),
            student("Mace", "Windu", 56, "Science"),
            student("Han", "Solo", 35, "Science"),
            student("Chew", "Bacca", 33, "Science"),
        ]
        .into()
    }

    /// Helper: predicate over the numeric age field.
    fn age_between(low: u32, high: u32) -> impl Fn(&Record) -> bool {
        move |r| {
            r.field("age")
                .parse::<u32>()
                .map(|age| low < age && age < high)
                .unwrap_or(false)
        }
    }

    #[test]
    fn test_each_visits_in_order_with_indices() {
        let mut seen = Vec::new();
        roster().each(|record, index| seen.push((index, record.field("last").to_string())));
        assert_eq!(
            seen,
            vec![
                (0, "Kenobi".to_string()),
                (1, "Windu".to_string()),
                (2, "Solo".to_string()),
                (3, "Bacca".to_string()),
            ]
        );
    }

    #[test]
    fn test_each_indices_strictly_increasing() {
        let c = roster();
        let mut indices = Vec::new();
        c.each(|_, index| indices.push(index));
        assert_eq!(indices, (0..c.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_all_true_when_every_record_matches() {
        assert!(roster().all(|r| !r.field("last").is_empty()));
    }

    #[test]
    fn test_all_false_on_one_mismatch() {
        assert!(!roster().all(|r| r.field("class") == "Science"));
    }

    #[test]
    fn test_any_true_on_one_match() {
        assert!(roster().any(|r| r.field("class") == "Math"));
    }

    #[test]
    fn test_any_false_when_nothing_matches() {
        assert!(!roster().any(|r| r.field("class") == "History"));
    }

    #[test]
    fn test_all_any_duality() {
        let c = roster();
        for field in ["class", "last"] {
            for value in ["Science", "Math", "Solo"] {
                let all = c.all(|r| r.field(field) == value);
                let any_not = c.any(|r| r.field(field) != value);
                assert_eq!(all, !any_not, "duality broken for {field}={value}");
            }
        }
    }

    #[test]
    fn test_contains_and_index_of_agree() {
        let c = roster();
        let present = student("Han", "Solo", 35, "Science");
        let absent = student("Leia", "Organa", 32, "Science");
        assert!(c.contains(&present));
        assert_eq!(c.index_of(&present), Some(2));
        assert!(!c.contains(&absent));
        assert_eq!(c.index_of(&absent), None);
    }

    #[test]
    fn test_index_of_returns_first_match() {
        let twin = student("Han", "Solo", 35, "Science");
        let c: Collection = vec![twin.clone(), student("Mace", "Windu", 56, "Science"), twin]
            .into_iter()
            .collect();
        let probe = student("Han", "Solo", 35, "Science");
        assert_eq!(c.index_of(&probe), Some(0));
    }

    #[test]
    fn test_filter_keeps_matches_in_order() {
        let science = roster().filter(|r| r.field("class") == "Science");
        assert_eq!(
            science.pluck(|r| r.field("last").to_string()),
            vec!["Windu", "Solo", "Bacca"]
        );
    }

    #[test]
    fn test_filter_does_not_mutate_source() {
        let c = roster();
        let before = c.clone();
        let _ = c.filter(|r| r.field("class") == "Math");
        let _ = c.reject(|r| r.field("class") == "Math");
        assert_eq!(c, before);
    }

    #[test]
    fn test_filter_reject_partition() {
        let c = roster();
        let pred = |r: &Record| r.field("class") == "Science";
        let kept = c.filter(pred);
        let dropped = c.reject(pred);

        assert_eq!(kept.len() + dropped.len(), c.len());
        // Every record lands in exactly the side its predicate value selects,
        // and each side preserves original order.
        let mut kept_iter = kept.iter();
        let mut dropped_iter = dropped.iter();
        c.each(|record, _| {
            if pred(record) {
                assert_eq!(kept_iter.next(), Some(record));
            } else {
                assert_eq!(dropped_iter.next(), Some(record));
            }
        });
        assert_eq!(kept_iter.next(), None);
        assert_eq!(dropped_iter.next(), None);
    }

    #[test]
    fn test_pluck_length_and_pointwise() {
        let c = roster();
        let firsts = c.pluck(|r| r.field("first").to_string());
        assert_eq!(firsts.len(), c.len());
        for (i, value) in firsts.iter().enumerate() {
            assert_eq!(value, c.get(i).unwrap().field("first"));
        }
    }

    #[test]
    fn test_roster_scenario() {
        let in_session = |r: &Record| {
            let class = r.field("class");
            class == "Math" || class == "Science"
        };
        let adult = age_between(25, 80);
        let lasts = roster()
            .filter(|r| in_session(r) && adult(r))
            .pluck(|r| r.field("last").to_string());
        assert_eq!(lasts, vec!["Kenobi", "Windu", "Solo", "Bacca"]);
    }

    #[test]
    fn test_empty_collection_contracts() {
        let empty = Collection::new();
        assert!(empty.all(|_| false));
        assert!(!empty.any(|_| true));
        assert_eq!(empty.filter(|_| true), Collection::new());
        assert_eq!(empty.reject(|_| false), Collection::new());
        assert_eq!(empty.pluck(|r| r.field("last").to_string()), Vec::<String>::new());
        assert_eq!(empty.index_of(&Record::default()), None);

        let mut visited = 0;
        empty.each(|_, _| visited += 1);
        assert_eq!(visited, 0);
    }

    #[test]
    fn test_collection_iteration() {
        let c = roster();
        assert_eq!(c.iter().count(), 4);
        assert_eq!((&c).into_iter().count(), 4);
        let owned: Vec<Record> = c.into_iter().collect();
        assert_eq!(owned.len(), 4);
    }
}
