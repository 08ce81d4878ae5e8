//! Atomic behavior — one actor, one action, one object.

use serde::{Deserialize, Serialize};

/// The smallest behavioral unit within a requirement.
///
/// `behavior_id` is the requirement id plus a zero-padded two-digit
/// sequence ("…B01", "…B02"), unique within the requirement and never
/// reused.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtomicBehavior {
    pub behavior_id: String,
    pub requirement_id: String,
    pub actor: String,
    pub action: String,
    pub object_name: String,
    pub condition: Option<String>,
    pub description: String,
}
