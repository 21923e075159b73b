use core::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::SchemaKey;

/// An action schema bound to concrete object parameters from a state.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct GroundedAction {
    pub schema: SchemaKey,
    pub params: Vec<String>,
}

impl GroundedAction {
    pub fn new(schema: SchemaKey, params: Vec<String>) -> Self {
        Self { schema, params }
    }

    pub fn nullary(schema: SchemaKey) -> Self {
        Self::new(schema, Vec::new())
    }
}

impl fmt::Display for GroundedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.schema.0, self.params.join(", "))
    }
}
