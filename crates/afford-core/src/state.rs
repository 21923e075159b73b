use crate::ActionSchema;

/// Read-only view of an object-composed state.
///
/// This crate intentionally does not prescribe a state representation;
/// domains implement binding enumeration against their own object
/// population. States used as cache keys additionally need
/// `Clone + Eq + Hash` with structural (value) equality.
pub trait StateView {
    /// Every legal parameter binding for `schema` against the current
    /// object population.
    ///
    /// Implementations must honor the schema's parameter order groups:
    /// bindings that differ only by a permutation of arguments within one
    /// group are the same binding and must appear once. A nullary schema
    /// has exactly one binding, the empty one.
    fn possible_bindings(&self, schema: &ActionSchema) -> Vec<Vec<String>>;
}
