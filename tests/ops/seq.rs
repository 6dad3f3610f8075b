//! Sequence reshaping: exclusion, filling, sorting, concatenation.

use std::cmp::Ordering;

use wicker_foundation::{Error, Value};
use wicker_ops as ops;

use crate::ints;

#[test]
fn exclude_never_mutates_input() {
    let list = ints(&[1, 2, 3]);
    let snapshot = list.clone();

    for index in 0..5 {
        let result = ops::exclude_at(&list, index).unwrap();
        let expected_len = if index < 3 { 2 } else { 3 };
        assert_eq!(result.as_list().unwrap().len(), expected_len);
        assert_eq!(list, snapshot);
    }
}

#[test]
fn exclude_last_by_computed_index() {
    // The "drop the last element without pop" idiom.
    let list = ints(&[1, 2, 3]);
    let last = list.as_list().unwrap().len() - 1;
    assert_eq!(ops::exclude_at(&list, last).unwrap(), ints(&[1, 2]));
}

#[test]
fn replace_at_bounds() {
    let list = ints(&[1, 2, 3]);
    assert_eq!(
        ops::replace_at(&list, 2, Value::Int(30)).unwrap(),
        ints(&[1, 2, 30])
    );
    assert!(matches!(
        ops::replace_at(&list, 5, Value::Nil),
        Err(Error::IndexOutOfBounds { index: 5, length: 3 })
    ));
}

#[test]
fn fill_map_indexes() {
    #[allow(clippy::cast_possible_wrap)]
    let indexes = ops::fill_map(10, |i| Value::Int(i as i64));
    assert_eq!(indexes, ints(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]));
}

#[test]
fn sort_leaves_original_alone() {
    let list = ints(&[3, 1, 2]);
    let sorted = ops::sorted(&list).unwrap();
    assert_eq!(sorted, ints(&[1, 2, 3]));
    assert_eq!(list, ints(&[3, 1, 2]));

    let reversed = ops::reversed(&list).unwrap();
    assert_eq!(reversed, ints(&[2, 1, 3]));
    assert_eq!(list, ints(&[3, 1, 2]));
}

#[test]
fn sort_ints_interleaved_with_digit_strings() {
    // Numeric order inside the int group, lexicographic inside the
    // string group, never a panic from an inconsistent comparator.
    let mixed = Value::List(
        (0..40)
            .flat_map(|n| [Value::Int(n), Value::from(n.to_string())])
            .collect(),
    );
    let result = ops::sorted(&mixed).unwrap();
    let items = result.as_list().unwrap();

    let ints: Vec<i64> = items.iter().filter_map(Value::as_int).collect();
    assert_eq!(ints, (0..40).collect::<Vec<_>>());

    let strings: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
    assert_eq!(strings.len(), 40);
    assert!(strings.windows(2).all(|w| w[0] <= w[1]));

    // All ints precede all strings.
    let first_string = items.iter().position(|v| v.as_str().is_some()).unwrap();
    assert!(items.iter().take(first_string).all(|v| v.as_int().is_some()));
}

#[test]
fn sort_records_by_id_comparator() {
    let rows = Value::list([
        Value::record([("id", Value::Int(2)), ("label", "Aomori".into())]),
        Value::record([("id", Value::Int(3)), ("label", "Akita".into())]),
        Value::record([("id", Value::Int(1)), ("label", "Hokkaido".into())]),
    ]);
    let by_id = ops::sorted_by(&rows, |a, b| id_of(a).cmp(&id_of(b))).unwrap();
    let ids: Vec<_> = by_id.as_list().unwrap().iter().map(id_of).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn sort_stability_preserves_tie_order() {
    let rows = Value::list([
        Value::record([("id", Value::Int(2)), ("label", "a".into())]),
        Value::record([("id", Value::Int(1)), ("label", "b".into())]),
        Value::record([("id", Value::Int(2)), ("label", "c".into())]),
        Value::record([("id", Value::Int(1)), ("label", "d".into())]),
    ]);
    let by_id = ops::sorted_by(&rows, |a, b| id_of(a).cmp(&id_of(b))).unwrap();
    let labels: Vec<_> = by_id
        .as_list()
        .unwrap()
        .iter()
        .map(|row| row.field("label").and_then(Value::as_str).unwrap().to_string())
        .collect();
    assert_eq!(labels, vec!["b", "d", "a", "c"]);
}

#[test]
fn sorted_by_reverse_comparator() {
    let list = ints(&[1, 3, 2]);
    let descending = ops::sorted_by(&list, |a, b| {
        b.partial_cmp(a).unwrap_or(Ordering::Equal)
    })
    .unwrap();
    assert_eq!(descending, ints(&[3, 2, 1]));
}

#[test]
fn concat_layout() {
    let a = ints(&[1, 2, 3]);
    let b = ints(&[4, 5]);
    let joined = ops::concat(&a, &b).unwrap();
    let items = joined.as_list().unwrap();

    assert_eq!(items.len(), 5);
    for (i, expected) in [1i64, 2, 3, 4, 5].into_iter().enumerate() {
        assert_eq!(items.get(i), Some(&Value::Int(expected)));
    }
}

#[test]
fn concat_empty_sides() {
    let a = ints(&[1]);
    let empty = ints(&[]);
    assert_eq!(ops::concat(&a, &empty).unwrap(), a);
    assert_eq!(ops::concat(&empty, &a).unwrap(), a);
    assert_eq!(ops::concat(&empty, &empty).unwrap(), empty);
}

fn id_of(row: &Value) -> i64 {
    row.field("id").and_then(Value::as_int).unwrap_or(0)
}
