#[cfg(feature = "serde")]
use serde::Serialize;

/// Named goal condition.
///
/// The pruning engine treats goals as opaque tokens: it never evaluates goal
/// satisfaction (that belongs to the planner's termination check). Goals
/// matter only as explicit parameters to activation/sampling calls and for
/// goal-conditioned delegate activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct GoalKey(pub &'static str);

impl GoalKey {
    pub fn name(self) -> &'static str {
        self.0
    }
}
