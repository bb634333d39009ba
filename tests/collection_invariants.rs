mod common;

use std::sync::Arc;

use common::{at, doc, post};
use postindex::collection::{DocumentList, DocumentSet};
use postindex::document::Document;

fn shared(title: &str, published_on: &str) -> Arc<Document> {
    Arc::new(doc(&post(title, published_on, "")))
}

#[test]
fn sort_by_recency_is_newest_first() {
    let mut list: DocumentList = vec![
        shared("Jan", "2012-01-01"),
        shared("Dec", "2012-12-01"),
        shared("Jun", "2012-06-01"),
    ]
    .into();

    list.sort_by_recency();

    assert_eq!(list.titles(), vec!["Dec", "Jun", "Jan"]);
    assert!(list.is_recency_sorted());
}

#[test]
fn sort_by_recency_keeps_insertion_order_on_ties() {
    let mut list: DocumentList = vec![
        shared("First In", "2012-06-01"),
        shared("Newer", "2012-07-01"),
        shared("Second In", "2012-06-01"),
        shared("Third In", "2012-06-01"),
    ]
    .into();

    list.sort_by_recency();

    assert_eq!(list.titles(), vec!["Newer", "First In", "Second In", "Third In"]);
}

#[test]
fn undated_documents_sort_last() {
    let undated = Arc::new(doc("---\ntitle: Undated\npublished: true\n---\nBody"));
    let mut list: DocumentList = vec![undated, shared("Dated", "1990-01-01")].into();

    list.sort_by_recency();

    assert_eq!(list.titles(), vec!["Dated", "Undated"]);
}

#[test]
fn visible_before_filters_without_mutating() {
    let list: DocumentList = vec![
        shared("Future", "2030-01-01"),
        shared("Now", "2013-01-01"),
        shared("Past", "2012-01-01"),
    ]
    .into();

    let visible = list.visible_before(at(2013, 1, 1));

    assert_eq!(visible.titles(), vec!["Now", "Past"]);
    assert_eq!(list.len(), 3);
}

#[test]
fn set_add_is_idempotent_per_id() {
    let a = shared("A", "2012-01-01");
    let mut set = DocumentSet::new();

    set.add(&a);
    set.add(&a);
    set.add(&Arc::new((*a).clone()));

    assert_eq!(set.len(), 1);
    assert!(set.contains(&a.id));
}

#[test]
fn set_union_merges_by_id() {
    let a = shared("A", "2012-01-01");
    let b = shared("B", "2012-02-01");
    let c = shared("C", "2012-03-01");

    let mut left = DocumentSet::new();
    left.add(&a);
    left.add(&b);
    let mut right = DocumentSet::new();
    right.add(&b);
    right.add(&c);

    left.union(&right);
    left.union(&right);

    assert_eq!(left.len(), 3);
    assert_eq!(right.len(), 2);

    let mut values = left.values();
    values.sort_by_recency();
    assert_eq!(values.titles(), vec!["C", "B", "A"]);
}

#[test]
fn empty_set_yields_empty_list() {
    let set = DocumentSet::new();
    assert!(set.is_empty());
    assert!(set.values().is_empty());
}
