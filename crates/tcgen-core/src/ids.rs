//! Deterministic identifier generation.
//!
//! Requirement ids are date-stamped sequences ("REQ-20260806-0001"),
//! unique within a batch. Behavior ids append a zero-padded two-digit
//! sequence ("…B01"). Test-case ids combine the requirement id, a
//! 3-letter type code, and an xxh3-derived disambiguator — pure and
//! collision-resistant per (requirement_id, type_code) pair.

use chrono::NaiveDate;
use xxhash_rust::xxh3::xxh3_64;

/// Allocates batch-unique, date-stamped requirement ids.
#[derive(Debug)]
pub struct RequirementIdAllocator {
    date_stamp: String,
    next: u32,
}

impl RequirementIdAllocator {
    /// Create an allocator stamping ids with the given run date.
    pub fn new(run_date: NaiveDate) -> Self {
        Self {
            date_stamp: run_date.format("%Y%m%d").to_string(),
            next: 1,
        }
    }

    /// Allocate the next requirement id. Never reused within a batch.
    pub fn next_id(&mut self) -> String {
        let id = format!("REQ-{}-{:04}", self.date_stamp, self.next);
        self.next += 1;
        id
    }

    /// Number of ids allocated so far.
    pub fn allocated(&self) -> u32 {
        self.next - 1
    }
}

/// Behavior id: requirement id + "B" + zero-padded two-digit sequence.
/// `index` is 0-based; the first behavior of a requirement is "…B01".
pub fn behavior_id(requirement_id: &str, index: usize) -> String {
    format!("{}B{:02}", requirement_id, index + 1)
}

/// Test-case id: `"TTC-" + requirement_id + "-" + type_code + disambiguator`.
///
/// The disambiguator is the low 16 bits of xxh3("{requirement_id}:{type_code}")
/// in hex — stable per run and distinct across type codes.
pub fn test_case_id(requirement_id: &str, type_code: &str) -> String {
    let key = format!("{}:{}", requirement_id, type_code);
    let h = xxh3_64(key.as_bytes()) & 0xffff;
    format!("TTC-{}-{}{:04x}", requirement_id, type_code, h)
}
