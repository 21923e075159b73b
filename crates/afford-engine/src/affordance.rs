use afford_core::{ActionSchema, GoalKey, GroundedAction, Predicate, SchemaKey, StateView};
use rand::Rng;

/// A schema together with its inclusion weight in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedSchema {
    pub schema: ActionSchema,
    pub weight: f32,
}

/// A precondition-to-action-set rule.
///
/// A *hard* affordance (every weight 1.0) deterministically admits every
/// legal grounding of its schemas whenever its precondition holds. A *soft*
/// affordance admits each grounding independently with probability equal to
/// the schema's weight, injecting exploration noise into the pruned set.
///
/// Affordances are immutable after construction and cheap to clone; the
/// precondition closure is shared.
pub struct Affordance<S> {
    precondition: Predicate<S>,
    goal: Option<GoalKey>,
    actions: Vec<WeightedSchema>,
}

impl<S> Affordance<S> {
    /// A hard rule: every schema gets weight 1.0.
    pub fn hard(precondition: Predicate<S>, schemas: Vec<ActionSchema>) -> Self {
        let actions = schemas
            .into_iter()
            .map(|schema| WeightedSchema { schema, weight: 1.0 })
            .collect();
        Self {
            precondition,
            goal: None,
            actions,
        }
    }

    /// A soft rule: each schema carries its own inclusion weight.
    ///
    /// Weights are clamped to `[0, 1]`.
    pub fn soft(precondition: Predicate<S>, weighted: Vec<(ActionSchema, f32)>) -> Self {
        let actions = weighted
            .into_iter()
            .map(|(schema, weight)| WeightedSchema {
                schema,
                weight: weight.clamp(0.0, 1.0),
            })
            .collect();
        Self {
            precondition,
            goal: None,
            actions,
        }
    }

    /// Associate this rule with a goal.
    ///
    /// The association is inert at this layer (see [`Affordance::is_applicable`]);
    /// it is consulted only by goal-conditioned delegate activation.
    pub fn with_goal(mut self, goal: GoalKey) -> Self {
        self.goal = Some(goal);
        self
    }

    /// Whether this affordance applies in `state`.
    ///
    /// The goal argument is accepted but unused here: goal-aware gating
    /// lives at the delegate layer, not on the rule itself.
    pub fn is_applicable(&self, state: &S, _goal: GoalKey) -> bool {
        self.precondition.holds(state)
    }

    /// Stochastically ground this affordance's schemas against `state`.
    ///
    /// If the precondition holds, every legal binding of every schema draws
    /// an independent uniform value in `[0, 1)` and is included iff its
    /// schema weight exceeds the draw. Hard schemas therefore admit every
    /// legal binding; weight-0 schemas admit none. Results vary across
    /// calls for soft weights, but are reproducible for a fixed RNG state.
    pub fn applicable_actions<R: Rng>(
        &self,
        state: &S,
        goal: GoalKey,
        rng: &mut R,
    ) -> Vec<GroundedAction>
    where
        S: StateView,
    {
        if !self.is_applicable(state, goal) {
            return Vec::new();
        }

        let mut out = Vec::new();
        for entry in &self.actions {
            for params in state.possible_bindings(&entry.schema) {
                if entry.weight > rng.gen::<f32>() {
                    out.push(GroundedAction::new(entry.schema.key(), params));
                }
            }
        }
        out
    }

    /// Schema-level membership test.
    pub fn contains_schema(&self, key: SchemaKey) -> bool {
        self.actions.iter().any(|entry| entry.schema.key() == key)
    }

    pub fn weight(&self, key: SchemaKey) -> Option<f32> {
        self.actions
            .iter()
            .find(|entry| entry.schema.key() == key)
            .map(|entry| entry.weight)
    }

    pub fn actions(&self) -> &[WeightedSchema] {
        &self.actions
    }

    pub fn precondition(&self) -> &Predicate<S> {
        &self.precondition
    }

    pub fn goal_key(&self) -> Option<GoalKey> {
        self.goal
    }
}

impl<S> Clone for Affordance<S> {
    fn clone(&self) -> Self {
        Self {
            precondition: self.precondition.clone(),
            goal: self.goal,
            actions: self.actions.clone(),
        }
    }
}

impl<S> core::fmt::Debug for Affordance<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Affordance")
            .field("precondition", &self.precondition)
            .field("goal", &self.goal)
            .field("actions", &self.actions)
            .finish()
    }
}
