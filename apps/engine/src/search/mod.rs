//! Fuzzy search over the skill catalog.
//!
//! `fuzzy` holds the string-distance primitives; `index` owns the prebuilt,
//! read-only `SkillIndex` that every caller shares.

pub mod fuzzy;
pub mod index;

pub use index::{IndexOptions, SkillIndex};
