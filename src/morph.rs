//! Morphological stemming core for kokbul.
//!
//! This module holds the stem-selection algorithm and the collaborators it
//! draws on: the external/in-process morphological analyzers and the
//! precomputed override lookup.

pub mod aggregate;
pub mod invoke;
pub mod override_map;

pub use aggregate::{Aggregation, select_stem};
pub use invoke::{MorphAnalyzer, ProcessMorphAnalyzer, TableMorphAnalyzer};
pub use override_map::{OverrideMap, OverrideMapBuilder};
