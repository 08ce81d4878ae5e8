//! Classification — requirement-type labels, priority hint, reasoning.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::classes::{Priority, RequirementClass};

/// Output of the classifier stage.
///
/// `secondary_classes` is ordered by descending score, contains no
/// duplicates and never contains `primary_class`. `confidence_scores`
/// maps every class considered to a normalized value in [0, 1]; the
/// primary class sits in [0.7, 1.0] when clearly dominant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    pub primary_class: RequirementClass,
    pub secondary_classes: SmallVec<[RequirementClass; 3]>,
    pub confidence_scores: BTreeMap<RequirementClass, f32>,
    pub priority_hint: Priority,
    /// Human-readable audit sentence, always beginning
    /// "Primary classification: …".
    pub reasoning: String,
}

impl Classification {
    /// Primary class followed by secondaries, report order.
    pub fn all_classes(&self) -> Vec<RequirementClass> {
        let mut out = Vec::with_capacity(1 + self.secondary_classes.len());
        out.push(self.primary_class);
        out.extend(self.secondary_classes.iter().copied());
        out
    }
}
