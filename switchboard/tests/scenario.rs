//! End-to-end walk through a permissive table.

use switchboard::{DispatchTable, testing::RecordingHandler};

mod common;
use common::{Args, args, h1, h2};

#[test]
fn test_register_invoke_delete_walkthrough() {
    let mut t: DispatchTable<String, Args, String> = DispatchTable::new();
    t.register("x".to_string(), h1);
    t.register("y".to_string(), h2);
    assert_eq!(t.len(), 3);
    assert_eq!(t.keys(), vec!["default", "x", "y"]);

    assert_eq!(t.invoke("x", args(1, "2")), h1(args(1, "2")));

    // `z` is unregistered and the missing handler is no_op
    assert_eq!(t.invoke("z", args(0, "")), String::new());

    t.delete("y");
    assert_eq!(t.len(), 2);
    t.delete("y");
    assert_eq!(t.len(), 2);
}

#[test]
fn test_missing_and_default_can_share_a_handler() {
    let fallback = RecordingHandler::<Args, String>::named("fallback", "fell back".to_string());
    let shared = switchboard::into_shared(fallback.clone());

    let mut t: DispatchTable<String, Args, String> = DispatchTable::new();
    t.register_shared("default".to_string(), shared.clone());
    t.set_missing_handler(fallback.clone());

    assert_eq!(t.invoke("default", args(1, "d")), "fell back");
    assert_eq!(t.invoke("nowhere", args(2, "n")), "fell back");
    assert_eq!(fallback.call_count(), 2);
    assert_eq!(shared.name(), "fallback");
}

#[test]
fn test_handlers_can_be_fetched_and_called_later() {
    let mut t: DispatchTable<&str, Args, String> = DispatchTable::new();
    t.register("x", h1);

    let handler = t.lookup("x").clone();
    t.delete("x");

    // The fetched handler outlives its registration
    assert_eq!(handler.call(args(3, "late")), "h1:3:late");
    assert!(!t.contains("x"));
}
