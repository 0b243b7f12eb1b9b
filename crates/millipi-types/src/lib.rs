//! Shared type definitions for the Millipi precision growth engine.
//!
//! This crate is the single source of truth for the types that cross crate
//! boundaries in the Millipi workspace. Types defined here flow downstream
//! to `TypeScript` via `ts-rs` for the viewer client.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrapper for history record identifiers
//! - [`growth`] -- The [`GrowthCount`] event counter
//! - [`expansion`] -- The [`PiExpansion`] decimal string
//! - [`history`] -- The [`HistoryRecord`] audit entry

pub mod expansion;
pub mod growth;
pub mod history;
pub mod ids;

// Re-export all public types at crate root for convenience.
pub use expansion::PiExpansion;
pub use growth::GrowthCount;
pub use history::HistoryRecord;
pub use ids::RecordId;

#[cfg(test)]
mod tests {
    //! Integration tests for type exports and `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // ts-rs generates TypeScript bindings when types with
        // #[ts(export)] are used. Importing them here triggers generation.
        // The actual files are written to the `bindings/` directory
        // relative to the crate root.
        use ts_rs::TS;

        let _ = crate::ids::RecordId::export_all();
        let _ = crate::growth::GrowthCount::export_all();
        let _ = crate::expansion::PiExpansion::export_all();
        let _ = crate::history::HistoryRecord::export_all();
    }
}
