//! Console walkthrough of wicker's non-destructive collection operations.
//!
//! Each demo builds a small literal input, applies one or two operations,
//! and prints the result next to the untouched original. Demos share no
//! state; any failure stops the walkthrough with the error.

use std::cmp::Ordering;

use wicker_foundation::{Result, Value};
use wicker_ops as ops;

fn main() -> Result<()> {
    demo_exclude()?;
    demo_replace()?;
    demo_fill_map()?;
    demo_sort_and_reverse()?;
    demo_sort_records()?;
    demo_concat()?;
    demo_lookup_entries()?;
    demo_membership()?;
    demo_find()?;
    demo_distinct()?;
    demo_intersect()?;
    demo_copies()?;
    demo_filter_then_map()?;
    demo_flat_map()?;
    demo_flatten_depths()?;
    demo_to_list()?;
    Ok(())
}

/// Dropping an element without touching the source list.
fn demo_exclude() -> Result<()> {
    println!("-- exclude by index --");
    let list = Value::list([1i64, 2, 3]);
    let last = list.as_list().map_or(0, |v| v.len().saturating_sub(1));
    println!("without last:      {}", ops::exclude_at(&list, last)?);
    println!("without index 9:   {}", ops::exclude_at(&list, 9)?);
    println!("original:          {list}");
    Ok(())
}

/// Replacing an element, again without touching the source.
fn demo_replace() -> Result<()> {
    println!("-- replace by index --");
    let list = Value::list([1i64, 2, 3]);
    println!("replaced index 0:  {}", ops::replace_at(&list, 0, Value::Int(10))?);
    println!("original:          {list}");
    Ok(())
}

/// Building a list from indexes instead of a counting loop.
fn demo_fill_map() -> Result<()> {
    println!("-- fill and map --");
    #[allow(clippy::cast_possible_wrap)]
    let squares = ops::fill_map(10, |i| Value::Int((i * i) as i64));
    println!("first 10 squares:  {squares}");
    Ok(())
}

/// Copy first, then sort or reverse the copy.
fn demo_sort_and_reverse() -> Result<()> {
    println!("-- sort / reverse --");
    let list = Value::list([3i64, 1, 2]);
    println!("sorted:            {}", ops::sorted(&list)?);
    println!("reversed:          {}", ops::reversed(&list)?);
    println!("original:          {list}");
    Ok(())
}

/// Sorting records by a field with a comparator; ties keep their order.
fn demo_sort_records() -> Result<()> {
    println!("-- sort records by id --");
    let prefectures = Value::list([
        Value::record([("id", Value::Int(2)), ("label", "Aomori".into())]),
        Value::record([("id", Value::Int(3)), ("label", "Akita".into())]),
        Value::record([("id", Value::Int(1)), ("label", "Hokkaido".into())]),
    ]);
    let by_id = ops::sorted_by(&prefectures, |a, b| compare_field(a, b, "id"))?;
    println!("sorted by id:      {by_id}");
    Ok(())
}

fn compare_field(a: &Value, b: &Value, name: &str) -> Ordering {
    let a = a.field(name).and_then(Value::as_int).unwrap_or(0);
    let b = b.field(name).and_then(Value::as_int).unwrap_or(0);
    a.cmp(&b)
}

/// Joining two lists into a third.
fn demo_concat() -> Result<()> {
    println!("-- concat --");
    let a = Value::list([1i64, 2, 3]);
    let b = Value::list([4i64, 5, 6]);
    println!("a ++ b:            {}", ops::concat(&a, &b)?);
    Ok(())
}

/// Iterating key/value pairs of a lookup table.
///
/// The table is a local constant handed to exactly this demo; nothing
/// process-wide.
fn demo_lookup_entries() -> Result<()> {
    println!("-- lookup entries --");
    let dishes = Value::record([("Japan", "sushi".into()), ("America", "hamburger".into())]);
    let pairs = ops::entries(&dishes)?;
    if let Some(list) = pairs.as_list() {
        for pair in list.iter() {
            if let Some(pair) = pair.as_list() {
                if let (Some(country), Some(dish)) = (pair.get(0), pair.get(1)) {
                    println!("{country} : {dish}");
                }
            }
        }
    }
    Ok(())
}

/// Membership and predicate checks.
fn demo_membership() -> Result<()> {
    println!("-- contains / any / all --");
    let letters = Value::list(["a", "b", "c"]);
    println!(
        "contains \"c\":      {}",
        ops::contains(&letters, &Value::from("c"))?
    );

    let countries = Value::list([
        Value::record([("country", "Japan".into()), ("is_country", true.into())]),
        Value::record([("country", "Spain".into()), ("is_country", true.into())]),
        Value::record([("country", "America".into()), ("is_country", true.into())]),
    ]);
    let has_america = ops::any(&countries, |row| {
        row.field("country") == Some(&Value::from("America"))
    })?;
    println!("any == America:    {has_america}");

    let all_countries = ops::all(&countries, |row| {
        row.field("is_country") == Some(&Value::Bool(true))
    })?;
    println!("all are countries: {all_countries}");

    // The absent-id check, once with any and once with all.
    let data = Value::list([
        Value::record([("id", Value::Int(1)), ("name", "Suzuki".into())]),
        Value::record([("id", Value::Int(2)), ("name", "Tanaka".into())]),
        Value::record([("id", Value::Int(3)), ("name", "Gonzalez".into())]),
    ]);
    let found = ops::any(&data, |row| row.field("id") == Some(&Value::Int(5)))?;
    if !found {
        println!("no row with id = 5");
    }
    let no_such_id = ops::all(&data, |row| row.field("id") != Some(&Value::Int(5)))?;
    if no_such_id {
        println!("still no row with id = 5");
    }
    Ok(())
}

/// Finding the matching element itself, from the front or the back.
fn demo_find() -> Result<()> {
    println!("-- find first / last --");
    let countries = Value::list([
        Value::record([("country", "Japan".into()), ("is_country", true.into())]),
        Value::record([("country", "Spain".into()), ("is_country", true.into())]),
        Value::record([("country", "America".into()), ("is_country", true.into())]),
    ]);
    let japan = ops::find_first(&countries, |row| {
        row.field("country") == Some(&Value::from("Japan"))
    })?;
    let last = ops::find_last(&countries, |row| {
        row.field("is_country") == Some(&Value::Bool(true))
    })?;
    println!("first Japan:       {}", japan.unwrap_or(Value::Nil));
    println!("last country:      {}", last.unwrap_or(Value::Nil));
    Ok(())
}

/// Deduplication via a set, keeping first-occurrence order.
fn demo_distinct() -> Result<()> {
    println!("-- distinct --");
    let duplicated = Value::list([1i64, 2, 3, 3, 4, 4, 5, 6, 5]);
    println!("as set:            {}", ops::to_set(&duplicated)?);
    println!("distinct:          {}", ops::distinct(&duplicated)?);
    Ok(())
}

/// Shared elements of two sequences, duplicates removed first.
fn demo_intersect() -> Result<()> {
    println!("-- intersect --");
    let a = Value::list([1i64, 2, 3, 3, 3, 5, 6]);
    let b = Value::list([2i64, 3, 3, 4, 5, 5, 7]);
    println!("a ∩ b:             {}", ops::intersect(&a, &b)?);
    Ok(())
}

/// Shallow copy shares nested backing; deep copy shares nothing.
fn demo_copies() -> Result<()> {
    println!("-- shallow vs deep copy --");
    let origin = Value::list([
        Value::record([
            ("id", Value::Int(1)),
            ("label", "Hokkaido".into()),
            ("extra", Value::record([("has_sea", true.into())])),
        ]),
        Value::record([
            ("id", Value::Int(2)),
            ("label", "Aomori".into()),
            ("extra", Value::record([("has_sea", true.into())])),
        ]),
    ]);
    let shallow = ops::shallow_copy(&origin);
    let deep = ops::deep_copy(&origin);

    println!(
        "shallow is a new list:       {}",
        !shallow.shares_backing(&origin)
    );
    println!(
        "shallow shares records:      {}",
        shares_first_extra(&shallow, &origin)
    );
    println!(
        "deep shares records:         {}",
        shares_first_extra(&deep, &origin)
    );
    Ok(())
}

fn shares_first_extra(copy: &Value, origin: &Value) -> bool {
    let pick = |v: &Value| {
        v.as_list()
            .and_then(|list| list.first().cloned())
            .and_then(|row| row.field("extra").cloned())
    };
    match (pick(copy), pick(origin)) {
        (Some(a), Some(b)) => a.shares_backing(&b),
        _ => false,
    }
}

/// Filter down to matching rows, then project a field.
fn demo_filter_then_map() -> Result<()> {
    println!("-- filter then map --");
    let people = Value::list([
        Value::record([("age", Value::Int(40)), ("name", "Suzuki".into())]),
        Value::record([("age", Value::Int(30)), ("name", "Tanaka".into())]),
        Value::record([("age", Value::Int(21)), ("name", "Gonzalez".into())]),
    ]);
    let adults = ops::filter(&people, |p| {
        p.field("age").and_then(Value::as_int).is_some_and(|a| a >= 30)
    })?;
    let names = ops::map(&adults, |p| p.field("name").cloned().unwrap_or(Value::Nil))?;
    println!("30 or older:       {names}");
    Ok(())
}

/// Collecting nested tag lists into one flat list.
fn demo_flat_map() -> Result<()> {
    println!("-- flat map --");
    let tweets = Value::list([
        Value::record([
            ("tweet", "busy morning at work".into()),
            ("hash_tags", Value::list(["commute", "early", "sky"])),
        ]),
        Value::record([
            ("tweet", "yakiniku for lunch".into()),
            ("hash_tags", Value::list(["lunch", "yakiniku"])),
        ]),
        Value::record([
            ("tweet", "new game tonight".into()),
            ("hash_tags", Value::list(["home", "games", "daily"])),
        ]),
    ]);
    let tags = ops::flat_map(&tweets, |row| {
        row.field("hash_tags").cloned().unwrap_or(Value::Nil)
    })?;
    println!("all tags:          {tags}");
    Ok(())
}

/// Flattening by exact depth.
fn demo_flatten_depths() -> Result<()> {
    println!("-- flatten --");
    let nested = Value::list([
        Value::Int(1),
        Value::list([Value::Int(1), Value::Int(2), Value::list([3i64, 4, 5])]),
        Value::Int(6),
    ]);
    println!("depth 0:           {}", ops::flatten(&nested, 0)?);
    println!("depth 1:           {}", ops::flatten(&nested, 1)?);
    println!("depth 2:           {}", ops::flatten(&nested, 2)?);
    Ok(())
}

/// Converting a non-list collection before applying list operations.
fn demo_to_list() -> Result<()> {
    println!("-- to list --");
    let checkboxes = Value::record([
        ("terms", Value::Bool(true)),
        ("newsletter", Value::Bool(true)),
    ]);
    let as_pairs = ops::to_list(&checkboxes)?;
    let all_checked = ops::all(&as_pairs, |pair| {
        pair.as_list()
            .and_then(|p| p.get(1).cloned())
            .is_some_and(|v| v.is_truthy())
    })?;
    println!("entries:           {as_pairs}");
    if all_checked {
        println!("every box is checked");
    }
    Ok(())
}
