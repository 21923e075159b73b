use afford_core::{GoalKey, GroundedAction, StateView};
use rand::Rng;

use crate::Affordance;

/// How a delegate decides whether its affordance is active in a state.
///
/// This is a closed set: new activation policies are added here, not via
/// open subclassing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivationMode {
    /// Active iff the wrapped affordance's precondition holds; the current
    /// goal is ignored.
    #[default]
    StateOnly,
    /// Additionally requires the affordance's goal association to match the
    /// current goal. An affordance with no association is goal-agnostic and
    /// activates on its precondition alone.
    GoalConditioned,
}

/// Wraps one [`Affordance`] and adds goal-aware activation plus per-pass
/// stochastic materialization of its grounded action set.
///
/// The current goal is threaded explicitly through every call rather than
/// stored on the delegate, so a goal change can never leave a delegate
/// holding a stale one.
#[derive(Debug, Clone)]
pub struct AffordanceDelegate<S> {
    key: &'static str,
    affordance: Affordance<S>,
    mode: ActivationMode,
    primed_state: Option<S>,
    listed: Vec<GroundedAction>,
}

impl<S> AffordanceDelegate<S>
where
    S: StateView + Clone,
{
    pub fn new(key: &'static str, affordance: Affordance<S>) -> Self {
        Self {
            key,
            affordance,
            mode: ActivationMode::default(),
            primed_state: None,
            listed: Vec::new(),
        }
    }

    pub fn with_mode(mut self, mode: ActivationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Evaluate activation in `state` under `goal`, and on success retain
    /// the state as the grounding context for a subsequent [`resample`].
    ///
    /// Must be called before `resample` within the same pruning pass.
    ///
    /// [`resample`]: AffordanceDelegate::resample
    pub fn prime_and_check_active(&mut self, state: &S, goal: GoalKey) -> bool {
        let active = match self.mode {
            ActivationMode::StateOnly => self.affordance.is_applicable(state, goal),
            ActivationMode::GoalConditioned => {
                let goal_matches = self.affordance.goal_key().map_or(true, |g| g == goal);
                goal_matches && self.affordance.is_applicable(state, goal)
            }
        };
        if active {
            self.primed_state = Some(state.clone());
        }
        active
    }

    /// Redraw the listed action set from the primed grounding context.
    ///
    /// The schema set is fixed; grounded content varies across calls when
    /// soft weights are in play. Before the first successful prime there is
    /// nothing to ground against and the listed set stays empty.
    pub fn resample<R: Rng>(&mut self, goal: GoalKey, rng: &mut R) {
        self.listed = match &self.primed_state {
            Some(state) => self.affordance.applicable_actions(state, goal, rng),
            None => Vec::new(),
        };
    }

    /// Schema-level relevance: whether the action's schema belongs to the
    /// wrapped affordance's schema set. Grounded parameters play no part.
    pub fn action_is_relevant(&self, action: &GroundedAction) -> bool {
        self.affordance.contains_schema(action.schema)
    }

    /// The most recent stochastic grounding sample.
    pub fn listed_action_set(&self) -> &[GroundedAction] {
        &self.listed
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn affordance(&self) -> &Affordance<S> {
        &self.affordance
    }

    pub fn mode(&self) -> ActivationMode {
        self.mode
    }
}
