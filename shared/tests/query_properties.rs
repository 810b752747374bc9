//! Property tests for the filter and pagination pipeline.

use std::borrow::Cow;
use std::collections::BTreeMap;

use proptest::prelude::*;
use shared::query::{filter, paginate, Constraint, FilterSpec, PageRequest, PageSize, Record};

#[derive(Clone, Debug, PartialEq)]
struct TestRow {
    id: String,
    fields: BTreeMap<String, String>,
}

impl Record for TestRow {
    const FIELDS: &'static [&'static str] = &["id", "status", "kind", "name"];

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        if name == "id" {
            return Some(Cow::Borrowed(&self.id));
        }
        self.fields.get(name).map(|v| Cow::Borrowed(v.as_str()))
    }
}

fn arb_value() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("completed".to_string()),
        Just("pending".to_string()),
        Just("failed".to_string()),
        "[a-zA-Z ]{0,6}",
    ]
}

fn arb_row() -> impl Strategy<Value = TestRow> {
    (
        "[A-Z]{3}[0-9]{3}",
        prop::option::of(arb_value()),
        prop::option::of(arb_value()),
        prop::option::of(arb_value()),
    )
        .prop_map(|(id, status, kind, name)| {
            let mut fields = BTreeMap::new();
            for (key, value) in [("status", status), ("kind", kind), ("name", name)] {
                if let Some(value) = value {
                    fields.insert(key.to_string(), value);
                }
            }
            TestRow { id, fields }
        })
}

fn arb_rows() -> impl Strategy<Value = Vec<TestRow>> {
    prop::collection::vec(arb_row(), 0..40)
}

fn arb_constraint() -> impl Strategy<Value = Constraint> {
    prop_oneof![
        arb_value().prop_map(Constraint::exact),
        "[a-z]{0,3}".prop_map(Constraint::contains),
    ]
}

fn arb_spec() -> impl Strategy<Value = FilterSpec> {
    prop::collection::btree_map(
        prop_oneof![
            Just("status".to_string()),
            Just("kind".to_string()),
            Just("name".to_string()),
            Just("undeclared".to_string()),
        ],
        arb_constraint(),
        0..4,
    )
    .prop_map(|constraints| {
        constraints
            .into_iter()
            .fold(FilterSpec::new(), |spec, (field, c)| spec.with(field, c))
    })
}

fn arb_page_size() -> impl Strategy<Value = PageSize> {
    prop::sample::select(PageSize::ALLOWED.to_vec())
}

/// True when `sub` appears in `all` in the same relative order.
fn is_subsequence(sub: &[&TestRow], all: &[TestRow]) -> bool {
    let mut remaining = all.iter();
    sub.iter()
        .all(|wanted| remaining.any(|row| std::ptr::eq(row, *wanted)))
}

proptest! {
    #[test]
    fn filter_output_is_ordered_subsequence(rows in arb_rows(), spec in arb_spec()) {
        let matched = filter(&rows, &spec);
        prop_assert!(matched.len() <= rows.len());
        prop_assert!(is_subsequence(&matched, &rows));
    }

    #[test]
    fn empty_spec_is_identity(rows in arb_rows()) {
        let matched = filter(&rows, &FilterSpec::new());
        prop_assert_eq!(matched.len(), rows.len());
        prop_assert!(matched.iter().zip(rows.iter()).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[test]
    fn every_match_satisfies_every_active_constraint(rows in arb_rows(), spec in arb_spec()) {
        for row in filter(&rows, &spec) {
            for (field, constraint) in spec.active() {
                if !TestRow::declares(field) {
                    continue;
                }
                let value = row.field(field);
                prop_assert!(value.is_some_and(|v| constraint.matches(&v)));
            }
        }
    }

    #[test]
    fn filter_is_idempotent(rows in arb_rows(), spec in arb_spec()) {
        let once = filter(&rows, &spec);
        let twice = filter(&once, &spec);
        prop_assert_eq!(once.len(), twice.len());
        prop_assert!(once.iter().zip(twice.iter()).all(|(a, b)| std::ptr::eq(*a, **b)));
    }

    #[test]
    fn page_respects_size_and_total(
        rows in arb_rows(),
        page in 1usize..12,
        page_size in arb_page_size(),
    ) {
        let request = PageRequest::new(page, page_size).unwrap();
        let result = paginate(&rows, request);
        prop_assert!(result.items.len() <= page_size.get());
        prop_assert_eq!(result.total_count, rows.len());
        prop_assert_eq!(result.page, page);
    }

    #[test]
    fn pages_beyond_the_last_are_empty(rows in arb_rows(), page_size in arb_page_size()) {
        let size = page_size.get();
        let past_end = rows.len().div_ceil(size) + 1;
        let result = paginate(&rows, PageRequest::new(past_end, page_size).unwrap());
        prop_assert!(result.items.is_empty());
        prop_assert_eq!(result.total_count, rows.len());
    }

    #[test]
    fn pages_partition_the_collection(rows in arb_rows(), page_size in arb_page_size()) {
        let pages = rows.len().div_ceil(page_size.get()).max(1);
        let stitched: Vec<TestRow> = (1..=pages)
            .flat_map(|page| paginate(&rows, PageRequest::new(page, page_size).unwrap()).items)
            .collect();
        prop_assert_eq!(stitched, rows);
    }
}
