//! Builders for composing complete sample data sets.

pub mod race;

pub use race::RaceBuilder;
