#[cfg(feature = "serde")]
use serde::Serialize;

/// Stable identifier for an action schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SchemaKey(pub &'static str);

impl SchemaKey {
    pub fn name(self) -> &'static str {
        self.0
    }
}

/// An ungrounded action schema: a name plus typed parameter slots.
///
/// Parameter order groups mark slots whose arguments are interchangeable:
/// binding enumeration must yield only one of any two bindings that differ
/// by a permutation of arguments within a single group. An empty group list
/// means every parameter is in its own group (nothing is interchangeable).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ActionSchema {
    key: SchemaKey,
    parameter_classes: Vec<&'static str>,
    parameter_order_groups: Vec<&'static str>,
}

impl ActionSchema {
    pub fn new(key: SchemaKey, parameter_classes: Vec<&'static str>) -> Self {
        Self {
            key,
            parameter_classes,
            parameter_order_groups: Vec::new(),
        }
    }

    /// A schema with no parameters; it grounds to exactly one action.
    pub fn nullary(key: SchemaKey) -> Self {
        Self::new(key, Vec::new())
    }

    /// A schema with a single parameter of the given object class.
    pub fn unary(key: SchemaKey, parameter_class: &'static str) -> Self {
        Self::new(key, vec![parameter_class])
    }

    /// Assign an order group per parameter.
    ///
    /// # Panics
    ///
    /// Panics if the group count does not match the parameter count.
    pub fn with_order_groups(mut self, groups: Vec<&'static str>) -> Self {
        assert_eq!(
            groups.len(),
            self.parameter_classes.len(),
            "order group count must match parameter count for schema {}",
            self.key.0
        );
        self.parameter_order_groups = groups;
        self
    }

    pub fn key(&self) -> SchemaKey {
        self.key
    }

    pub fn arity(&self) -> usize {
        self.parameter_classes.len()
    }

    pub fn parameter_classes(&self) -> &[&'static str] {
        &self.parameter_classes
    }

    pub fn parameter_order_groups(&self) -> &[&'static str] {
        &self.parameter_order_groups
    }
}
