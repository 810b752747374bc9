//! End-to-end table scenarios over the embedded snapshot.

use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use shared::query::{PageSize, TableAction, TableQuery};
use shared::{
    Snapshot, Transaction, TransactionStatus, TRANSACTION_FILTERS, USER_FILTERS,
};

#[fixture]
fn snapshot() -> Snapshot {
    Snapshot::load().unwrap()
}

/// The eight snapshot transactions restatused to 3 completed, 2 pending
/// and 3 failed.
#[fixture]
fn mixed_transactions(snapshot: Snapshot) -> Vec<Transaction> {
    use TransactionStatus::*;
    let statuses = [Completed, Completed, Pending, Completed, Failed, Failed, Failed, Pending];
    snapshot
        .transactions
        .into_iter()
        .zip(statuses)
        .map(|(mut txn, status)| {
            txn.status = status;
            txn
        })
        .collect()
}

fn set_filter(key: &str, value: &str) -> TableAction {
    TableAction::SetFilter {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn ids<'a>(items: &[&'a Transaction]) -> Vec<&'a str> {
    items.iter().map(|t| t.id.as_str()).collect()
}

#[rstest]
fn completed_filter_keeps_original_order(mixed_transactions: Vec<Transaction>) {
    let query = TableQuery::default().reduced(set_filter("status", "completed"));
    let page = query.run(&mixed_transactions, TRANSACTION_FILTERS);

    assert_eq!(page.total_count, 3);
    assert!(page.items.iter().all(|t| t.status == TransactionStatus::Completed));
    assert_eq!(ids(&page.items), vec!["TXN001", "TXN002", "TXN004"]);
}

#[rstest]
fn five_per_page_splits_eight_rows(snapshot: Snapshot) {
    let size = PageSize::try_from(5).unwrap();
    let mut query = TableQuery::new(size);

    let first = query.run(&snapshot.transactions, TRANSACTION_FILTERS);
    assert_eq!(first.items.len(), 5);
    assert_eq!(first.total_count, 8);
    assert_eq!(ids(&first.items), vec!["TXN001", "TXN002", "TXN003", "TXN004", "TXN005"]);
    assert_eq!(first.range_label(), "1 to 5 of 8");

    query.apply(TableAction::SetPage(2));
    let second = query.run(&snapshot.transactions, TRANSACTION_FILTERS);
    assert_eq!(ids(&second.items), vec!["TXN006", "TXN007", "TXN008"]);
    assert_eq!(second.total_count, 8);
    assert!(!second.has_next());
}

#[rstest]
fn name_search_is_case_insensitive(snapshot: Snapshot) {
    for term in ["sa", "SA", "Sa"] {
        let query = TableQuery::default().reduced(set_filter("searchTerm", term));
        let page = query.run(&snapshot.users, USER_FILTERS);
        let names: Vec<&str> = page.items.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Sarah Johnson"]);
    }
}

#[rstest]
fn changing_filter_on_page_three_returns_to_first_page(mixed_transactions: Vec<Transaction>) {
    let mut query = TableQuery::new(PageSize::try_from(5).unwrap());
    query.apply(TableAction::SetPage(3));
    assert!(query.run(&mixed_transactions, TRANSACTION_FILTERS).is_empty());

    query.apply(set_filter("type", "deposit"));
    let page = query.run(&mixed_transactions, TRANSACTION_FILTERS);
    assert_eq!(page.page, 1);
    assert_eq!(ids(&page.items), vec!["TXN001", "TXN004", "TXN007"]);
}

#[rstest]
fn combined_filters_intersect(snapshot: Snapshot) {
    let query = TableQuery::default()
        .reduced(set_filter("status", "completed"))
        .reduced(set_filter("type", "deposit"));
    let page = query.run(&snapshot.transactions, TRANSACTION_FILTERS);
    assert_eq!(ids(&page.items), vec!["TXN001", "TXN004", "TXN007"]);
}

#[rstest]
fn reset_restores_full_collection(snapshot: Snapshot) {
    let query = TableQuery::default()
        .reduced(set_filter("status", "inactive"))
        .reduced(TableAction::ResetFilters);
    let page = query.run(&snapshot.users, USER_FILTERS);
    assert_eq!(page.total_count, 5);
    assert!(query.filters().is_empty());
}

#[rstest]
fn no_match_yields_empty_page(snapshot: Snapshot) {
    let query = TableQuery::default().reduced(set_filter("searchTerm", "zz"));
    let page = query.run(&snapshot.users, USER_FILTERS);
    assert!(page.is_empty());
    assert_eq!(page.range_label(), "No items");
    assert_eq!(page.total_pages(), 0);
}
