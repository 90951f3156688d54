//! Derived Column Registry
//!
//! Metadata for every derived column, in the order they are computed. Built
//! from the derivation steps themselves.

use crate::derive::derivation_steps;

/// Derived column metadata
#[derive(Debug, Clone)]
pub struct DerivedColumnInfo {
    /// Column name (unique identifier)
    pub name: &'static str,
    /// Brief description of what the column holds
    pub description: &'static str,
    /// Columns read to compute it
    pub inputs: &'static [&'static str],
}

/// Get all derived column info, in dependency order
pub fn derived_columns() -> Vec<DerivedColumnInfo> {
    derivation_steps()
        .iter()
        .map(|step| DerivedColumnInfo {
            name: step.name(),
            description: step.description(),
            inputs: step.required_columns(),
        })
        .collect()
}

/// Get info for a specific derived column by name
pub fn get_derived_column_info(name: &str) -> Option<DerivedColumnInfo> {
    derived_columns().into_iter().find(|c| c.name == name)
}
