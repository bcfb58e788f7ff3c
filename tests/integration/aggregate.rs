//! The explicit aggregation pass.

use coing::{aggregate, from_str};

use crate::{assignment, close, open};

#[test]
fn test_flatten_never_merges_on_its_own() {
    let entries = from_str(
        "server:\n\
        \x20 hosts: [a, b]\n\
         server:\n\
        \x20 hosts: [c]\n",
    )
    .unwrap();
    assert_eq!(
        entries,
        vec![
            open(&["server"]),
            assignment(&["server"], "hosts", &["a", "b"]),
            close(&["server"]),
            open(&["server"]),
            assignment(&["server"], "hosts", &["c"]),
            close(&["server"]),
        ]
    );
}

#[test]
fn test_aggregate_merges_values_into_first_occurrence() {
    let entries = from_str(
        "server:\n\
        \x20 hosts: [a, b]\n\
         server:\n\
        \x20 hosts: [c]\n",
    )
    .unwrap();
    let merged = aggregate(entries);
    assert_eq!(
        merged,
        vec![
            open(&["server"]),
            assignment(&["server"], "hosts", &["a", "b", "c"]),
            close(&["server"]),
            open(&["server"]),
            close(&["server"]),
        ]
    );
}

#[test]
fn test_aggregate_distinguishes_paths() {
    let entries = from_str(
        "val: 1\n\
         sub:\n\
        \x20 val: 2\n",
    )
    .unwrap();
    let merged = aggregate(entries);
    assert_eq!(
        merged,
        vec![
            assignment(&[], "val", &["1"]),
            open(&["sub"]),
            assignment(&["sub"], "val", &["2"]),
            close(&["sub"]),
        ]
    );
}
