//! Identifier generation tests — format, uniqueness, determinism.

use chrono::NaiveDate;
use tcgen_core::ids::{behavior_id, test_case_id, RequirementIdAllocator};

fn run_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 11).unwrap()
}

#[test]
fn requirement_ids_are_date_stamped_sequences() {
    let mut alloc = RequirementIdAllocator::new(run_date());

    assert_eq!(alloc.next_id(), "REQ-20260211-0001");
    assert_eq!(alloc.next_id(), "REQ-20260211-0002");
    assert_eq!(alloc.allocated(), 2);
}

#[test]
fn requirement_ids_never_repeat_within_a_batch() {
    let mut alloc = RequirementIdAllocator::new(run_date());
    let ids: Vec<String> = (0..50).map(|_| alloc.next_id()).collect();

    let unique: std::collections::HashSet<&String> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());
}

#[test]
fn behavior_ids_are_zero_padded_and_sequential() {
    assert_eq!(behavior_id("FR-3", 0), "FR-3B01");
    assert_eq!(behavior_id("FR-3", 1), "FR-3B02");
    assert_eq!(behavior_id("FR-3", 11), "FR-3B12");
}

#[test]
fn test_case_ids_carry_prefix_and_requirement_id() {
    let id = test_case_id("REQ-20260211-0001", "POS");

    assert!(id.starts_with("TTC-"));
    assert!(id.contains("REQ-20260211-0001"));
    assert!(id.contains("POS"));
}

#[test]
fn test_case_ids_differ_across_type_codes() {
    let pos = test_case_id("REQ-20260211-0001", "POS");
    let neg = test_case_id("REQ-20260211-0001", "NEG");

    assert_ne!(pos, neg);
}

#[test]
fn test_case_ids_are_stable_across_calls() {
    let a = test_case_id("REQ-20260211-0001", "SEC");
    let b = test_case_id("REQ-20260211-0001", "SEC");

    assert_eq!(a, b);
}
