//! Predicate queries: membership, any/all, find.

use std::cell::Cell;

use wicker_foundation::Value;
use wicker_ops as ops;

use crate::ints;

#[test]
fn contains_scalars_and_strings() {
    assert!(ops::contains(&ints(&[1, 2, 3]), &Value::Int(2)).unwrap());
    assert!(!ops::contains(&ints(&[1, 2, 3]), &Value::Int(9)).unwrap());

    let letters = Value::list(["a", "b", "c"]);
    assert!(ops::contains(&letters, &Value::from("c")).unwrap());
}

#[test]
fn any_stops_at_first_match() {
    let list = ints(&[1, 2, 3, 4, 5]);
    let calls = Cell::new(0usize);
    let hit = ops::any(&list, |v| {
        calls.set(calls.get() + 1);
        v.as_int() == Some(3)
    })
    .unwrap();

    assert!(hit);
    assert_eq!(calls.get(), 3);
}

#[test]
fn all_stops_at_first_failure() {
    let list = ints(&[1, 2, 0, 4, 5]);
    let calls = Cell::new(0usize);
    let ok = ops::all(&list, |v| {
        calls.set(calls.get() + 1);
        v.as_int().is_some_and(|n| n != 0)
    })
    .unwrap();

    assert!(!ok);
    assert_eq!(calls.get(), 3);
}

#[test]
fn all_is_vacuously_true() {
    assert!(ops::all(&ints(&[]), |_| false).unwrap());
}

#[test]
fn absent_id_check_three_ways() {
    let data = Value::list([
        Value::record([("id", Value::Int(1)), ("name", "Suzuki".into())]),
        Value::record([("id", Value::Int(2)), ("name", "Tanaka".into())]),
        Value::record([("id", Value::Int(3)), ("name", "Gonzalez".into())]),
    ]);

    let wanted = Value::Int(5);
    assert!(!ops::any(&data, |row| row.field("id") == Some(&wanted)).unwrap());
    assert!(ops::all(&data, |row| row.field("id") != Some(&wanted)).unwrap());
    assert_eq!(
        ops::find_first(&data, |row| row.field("id") == Some(&wanted)).unwrap(),
        None
    );
}

#[test]
fn find_first_and_last_direction() {
    let rows = Value::list([
        Value::record([("country", "Japan".into()), ("is_country", true.into())]),
        Value::record([("country", "Spain".into()), ("is_country", true.into())]),
        Value::record([("country", "America".into()), ("is_country", true.into())]),
    ]);

    let first = ops::find_first(&rows, |row| {
        row.field("is_country") == Some(&Value::Bool(true))
    })
    .unwrap()
    .unwrap();
    assert_eq!(first.field("country"), Some(&Value::from("Japan")));

    let last = ops::find_last(&rows, |row| {
        row.field("is_country") == Some(&Value::Bool(true))
    })
    .unwrap()
    .unwrap();
    assert_eq!(last.field("country"), Some(&Value::from("America")));
}
