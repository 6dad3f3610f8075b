//! Integration tests for persistent collections
//!
//! Tests WkVec, WkSet, WkMap with structural sharing and immutability.

use wicker_foundation::Value;
use wicker_foundation::collections::{WkMap, WkSet, WkVec};

// =============================================================================
// WkVec
// =============================================================================

#[test]
fn vector_empty() {
    let v: WkVec<Value> = WkVec::new();
    assert!(v.is_empty());
    assert_eq!(v.len(), 0);
}

#[test]
fn vector_push_back() {
    let v = WkVec::new();
    let v = v.push_back(Value::Int(1));
    let v = v.push_back(Value::Int(2));

    assert_eq!(v.len(), 2);
    assert_eq!(v.get(0), Some(&Value::Int(1)));
    assert_eq!(v.get(1), Some(&Value::Int(2)));
}

#[test]
fn vector_immutability() {
    let v1 = WkVec::new().push_back(Value::Int(1));
    let v2 = v1.push_back(Value::Int(2));

    // v1 is unchanged
    assert_eq!(v1.len(), 1);
    assert_eq!(v2.len(), 2);
}

#[test]
fn vector_push_front_pop_front() {
    let v = WkVec::new()
        .push_back(Value::Int(2))
        .push_front(Value::Int(1));
    assert_eq!(v.first(), Some(&Value::Int(1)));

    let (rest, head) = v.pop_front().unwrap();
    assert_eq!(head, Value::Int(1));
    assert_eq!(rest.len(), 1);
    // original still has both
    assert_eq!(v.len(), 2);
}

#[test]
fn vector_pop_back() {
    let v: WkVec<Value> = [Value::Int(1), Value::Int(2)].into_iter().collect();
    let (rest, tail) = v.pop_back().unwrap();
    assert_eq!(tail, Value::Int(2));
    assert_eq!(rest.len(), 1);

    let empty: WkVec<Value> = WkVec::new();
    assert!(empty.pop_back().is_none());
}

#[test]
fn vector_structural_sharing() {
    // Create a large vector
    let mut v = WkVec::new();
    for i in 0..1000 {
        v = v.push_back(Value::Int(i));
    }

    // Clone shares structure
    let v2 = v.clone();
    assert!(v.ptr_eq(&v2));

    // Modify the clone - original unchanged
    let v3 = v2.push_back(Value::Int(1000));
    assert_eq!(v.len(), 1000);
    assert_eq!(v3.len(), 1001);
}

#[test]
fn vector_without_index_middle() {
    let v: WkVec<Value> = (0..5).map(Value::Int).collect();
    let dropped = v.without_index(2);

    assert_eq!(dropped.len(), 4);
    assert_eq!(dropped.get(2), Some(&Value::Int(3)));
    assert_eq!(v.len(), 5);
}

#[test]
fn vector_without_index_out_of_range() {
    let v: WkVec<Value> = (0..3).map(Value::Int).collect();
    assert_eq!(v.without_index(3), v);
}

#[test]
fn vector_append_orders_elements() {
    let a: WkVec<Value> = (0..3).map(Value::Int).collect();
    let b: WkVec<Value> = (3..6).map(Value::Int).collect();
    let joined = a.append(&b);

    let collected: Vec<_> = joined.iter().cloned().collect();
    let expected: Vec<_> = (0..6).map(Value::Int).collect();
    assert_eq!(collected, expected);
}

#[test]
fn vector_update() {
    let v = WkVec::new()
        .push_back(Value::Int(1))
        .push_back(Value::Int(2));

    let v2 = v.update(0, Value::Int(10)).unwrap();
    assert_eq!(v.get(0), Some(&Value::Int(1))); // original unchanged
    assert_eq!(v2.get(0), Some(&Value::Int(10)));
}

#[test]
fn vector_update_out_of_bounds() {
    let v = WkVec::new().push_back(Value::Int(1));
    assert!(v.update(5, Value::Int(10)).is_none());
}

// =============================================================================
// WkSet
// =============================================================================

#[test]
fn set_insert_contains() {
    let s = WkSet::new();
    let s = s.insert(Value::Int(1));
    let s = s.insert(Value::Int(2));
    let s = s.insert(Value::Int(1)); // duplicate

    assert_eq!(s.len(), 2);
    assert!(s.contains(&Value::Int(1)));
    assert!(!s.contains(&Value::Int(3)));
}

#[test]
fn set_remove_keeps_original() {
    let s1: WkSet<Value> = [Value::Int(1), Value::Int(2)].into_iter().collect();
    let s2 = s1.remove(&Value::Int(1));

    assert_eq!(s1.len(), 2);
    assert_eq!(s2.len(), 1);
    assert!(!s2.contains(&Value::Int(1)));
}

#[test]
fn set_union_intersection() {
    let a: WkSet<Value> = (0..4).map(Value::Int).collect();
    let b: WkSet<Value> = (2..6).map(Value::Int).collect();

    assert_eq!(a.union(&b).len(), 6);
    let both = a.intersection(&b);
    assert_eq!(both.len(), 2);
    assert!(both.contains(&Value::Int(2)));
    assert!(both.contains(&Value::Int(3)));
}

#[test]
fn set_clone_shares_backing() {
    let s: WkSet<Value> = (0..10).map(Value::Int).collect();
    let cloned = s.clone();
    assert!(s.ptr_eq(&cloned));

    let rebuilt: WkSet<Value> = s.iter().cloned().collect();
    assert_eq!(rebuilt, s);
    assert!(!rebuilt.ptr_eq(&s));
}

// =============================================================================
// WkMap
// =============================================================================

#[test]
fn map_insert_get() {
    let m = WkMap::new();
    let m = m.insert(Value::from("a"), Value::Int(1));
    let m = m.insert(Value::from("b"), Value::Int(2));

    assert_eq!(m.get(&Value::from("a")), Some(&Value::Int(1)));
    assert_eq!(m.get(&Value::from("c")), None);
    assert!(m.contains_key(&Value::from("b")));
}

#[test]
fn map_structural_sharing() {
    let m1 = WkMap::new().insert(Value::from("a"), Value::Int(1));
    let m2 = m1.insert(Value::from("b"), Value::Int(2));

    assert_eq!(m1.len(), 1);
    assert_eq!(m2.len(), 2);
    assert_eq!(m1.get(&Value::from("b")), None);
}

#[test]
fn map_remove_keeps_original() {
    let m1 = WkMap::new()
        .insert(Value::from("a"), Value::Int(1))
        .insert(Value::from("b"), Value::Int(2));
    let m2 = m1.remove(&Value::from("a"));

    assert_eq!(m1.len(), 2);
    assert_eq!(m2.len(), 1);
}

#[test]
fn map_keys_and_values() {
    let m: WkMap<Value, Value> = (0..3)
        .map(|i| (Value::Int(i), Value::Int(i * 10)))
        .collect();

    assert_eq!(m.keys().count(), 3);
    assert!(m.values().any(|v| v == &Value::Int(20)));
}
