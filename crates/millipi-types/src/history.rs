//! Append-only audit records for growth events.
//!
//! Exactly one [`HistoryRecord`] is created per successful growth event.
//! Records are never mutated or deleted; the durable store enforces that no
//! two records share a [`GrowthCount`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::expansion::PiExpansion;
use crate::growth::GrowthCount;
use crate::ids::RecordId;

/// The pairing of a [`PiExpansion`] with the [`GrowthCount`] that produced
/// it, used to answer "latest expansion" queries and for audit reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct HistoryRecord {
    /// Unique record identifier.
    pub id: RecordId,
    /// The growth count this expansion was computed for.
    pub growth_count: GrowthCount,
    /// The expansion materialized by this growth event.
    pub expansion: PiExpansion,
    /// Real-world timestamp of the growth event.
    pub created_at: DateTime<Utc>,
}

impl HistoryRecord {
    /// Create a record for a freshly computed expansion, stamped with a new
    /// ID and the current time.
    pub fn new(growth_count: GrowthCount, expansion: PiExpansion) -> Self {
        Self {
            id: RecordId::new(),
            growth_count,
            expansion,
            created_at: Utc::now(),
        }
    }

    /// Reassemble a record from its stored parts (used by store
    /// implementations when loading persisted history).
    pub const fn from_parts(
        id: RecordId,
        growth_count: GrowthCount,
        expansion: PiExpansion,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            growth_count,
            expansion,
            created_at,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_record_carries_count_and_expansion() {
        let record = HistoryRecord::new(GrowthCount(3), PiExpansion::from_digits("14"));
        assert_eq!(record.growth_count, GrowthCount(3));
        assert_eq!(record.expansion.as_str(), "3.14");
    }

    #[test]
    fn records_serialize_roundtrip() {
        let record = HistoryRecord::new(GrowthCount(7), PiExpansion::from_digits("141592"));
        let json = serde_json::to_string(&record).unwrap();
        let restored: HistoryRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, record);
    }

    #[test]
    fn from_parts_restores_state() {
        let original = HistoryRecord::new(GrowthCount(1), PiExpansion::seed());
        let rebuilt = HistoryRecord::from_parts(
            original.id,
            original.growth_count,
            original.expansion.clone(),
            original.created_at,
        );
        assert_eq!(rebuilt, original);
    }
}
