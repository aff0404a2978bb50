//! Deterministic bullet stitching and deduplication engine for CV assembly.
//!
//! `stitch-core` merges independently generated, per-role achievement
//! bullets into one coherent CV body: composite cross-text similarity
//! scoring, cross-role duplicate resolution with a recency tie-break, and
//! word-budgeted trimming that never touches the current role. All
//! operations are deterministic — identical inputs always produce identical
//! outputs, byte-for-byte.
//!
//! The engine performs no I/O and holds no global state. Upstream bullet
//! generation and downstream rendering live outside this crate.

pub mod dedup;
pub mod similarity;
pub mod stitch;
pub mod types;
