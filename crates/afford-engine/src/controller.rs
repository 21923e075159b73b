use std::collections::{BTreeSet, HashMap};
use std::hash::Hash;

use afford_core::{GoalKey, GroundedAction, StateView};
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;
use tracing::{debug, warn};

use crate::AffordanceDelegate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PruneError {
    /// No current goal has been set; pruning calls are rejected rather than
    /// guessing a default.
    #[error("current goal has not been set; actions cannot be pruned")]
    GoalUnset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AffordancesConfig {
    /// Cache computed action lists per state (by structural equality) and
    /// serve repeated states verbatim, without resampling.
    pub cache_action_sets: bool,

    /// Seed for the stochastic-inclusion RNG. Same seed, same delegate set,
    /// same call sequence: same samples.
    pub seed: u64,
}

impl Default for AffordancesConfig {
    fn default() -> Self {
        Self {
            cache_action_sets: false,
            seed: 0,
        }
    }
}

/// Owns the delegate collection, the current goal, the per-state cache, and
/// the sampling RNG; exposes the two pruning entry points a planner calls
/// per decision step.
///
/// A controller starts *uninitialized*: every pruning call fails with
/// [`PruneError::GoalUnset`] until [`set_current_goal`] is called. Goal
/// changes and delegate-set mutation invalidate the cache.
///
/// Single-threaded, synchronous use is assumed. Parallel planners must
/// serialize calls to one controller or give each worker its own controller
/// and delegates, sharing only the (immutable, cheaply cloned)
/// [`Affordance`](crate::Affordance) rule definitions.
///
/// [`set_current_goal`]: AffordancesController::set_current_goal
pub struct AffordancesController<S> {
    delegates: Vec<AffordanceDelegate<S>>,
    current_goal: Option<GoalKey>,
    cache: HashMap<S, Vec<GroundedAction>>,
    config: AffordancesConfig,
    rng: StdRng,
    prune_calls: u64,
    cache_hits: u64,
    fail_opens: u64,
}

impl<S> AffordancesController<S>
where
    S: StateView + Clone + Eq + Hash,
{
    pub fn new(delegates: Vec<AffordanceDelegate<S>>) -> Self {
        let config = AffordancesConfig::default();
        Self {
            delegates,
            current_goal: None,
            cache: HashMap::new(),
            rng: StdRng::seed_from_u64(config.seed),
            config,
            prune_calls: 0,
            cache_hits: 0,
            fail_opens: 0,
        }
    }

    /// Replace the config. Reseeds the sampling RNG from `config.seed`.
    pub fn with_config(mut self, config: AffordancesConfig) -> Self {
        self.rng = StdRng::seed_from_u64(config.seed);
        self.config = config;
        self
    }

    /// Set the current goal. Previously cached action sets were computed
    /// under the old goal, so the cache is invalidated.
    pub fn set_current_goal(&mut self, goal: GoalKey) {
        self.current_goal = Some(goal);
        self.cache.clear();
    }

    /// Force every delegate to redraw its stochastic sample immediately,
    /// from its primed grounding context, independent of caching.
    pub fn resample_action_sets(&mut self) -> Result<(), PruneError> {
        let goal = self.current_goal.ok_or(PruneError::GoalUnset)?;
        for delegate in &mut self.delegates {
            delegate.resample(goal, &mut self.rng);
        }
        Ok(())
    }

    /// The pruned candidate set for `state`: the duplicate-free union of
    /// freshly sampled grounded actions over every active delegate.
    ///
    /// An empty result is legal — no delegate activated, or every
    /// stochastic draw excluded — and is distinct from "the domain has no
    /// legal actions". Callers must handle it.
    pub fn pruned_actions_for(&mut self, state: &S) -> Result<Vec<GroundedAction>, PruneError> {
        let goal = self.current_goal.ok_or(PruneError::GoalUnset)?;
        self.prune_calls += 1;

        if self.config.cache_action_sets {
            if let Some(cached) = self.cache.get(state) {
                self.cache_hits += 1;
                debug!(actions = cached.len(), "pruned action set served from cache");
                return Ok(cached.clone());
            }
        }

        let mut union: BTreeSet<GroundedAction> = BTreeSet::new();
        for delegate in &mut self.delegates {
            if delegate.prime_and_check_active(state, goal) {
                delegate.resample(goal, &mut self.rng);
                union.extend(delegate.listed_action_set().iter().cloned());
            }
        }

        if union.is_empty() {
            debug!(goal = goal.0, "empty pruned action set");
        }

        let actions: Vec<GroundedAction> = union.into_iter().collect();
        if self.config.cache_action_sets {
            self.cache.insert(state.clone(), actions.clone());
        }
        Ok(actions)
    }

    /// Filter `candidates` down to those some active delegate considers
    /// relevant (schema-level membership; no resampling happens here).
    ///
    /// Fail-open: if filtering would empty a non-empty candidate list, the
    /// original list is returned — affordance misconfiguration must never
    /// strand the planner with zero actions.
    pub fn filter_irrelevant(
        &mut self,
        candidates: Vec<GroundedAction>,
        state: &S,
    ) -> Result<Vec<GroundedAction>, PruneError> {
        let goal = self.current_goal.ok_or(PruneError::GoalUnset)?;
        self.prune_calls += 1;

        if self.config.cache_action_sets {
            if let Some(cached) = self.cache.get(state) {
                self.cache_hits += 1;
                debug!(actions = cached.len(), "filtered action set served from cache");
                return Ok(cached.clone());
            }
        }

        let mut active: Vec<usize> = Vec::with_capacity(self.delegates.len());
        for (idx, delegate) in self.delegates.iter_mut().enumerate() {
            if delegate.prime_and_check_active(state, goal) {
                active.push(idx);
            }
        }

        let mut filtered: Vec<GroundedAction> = Vec::with_capacity(candidates.len());
        for action in &candidates {
            if active
                .iter()
                .any(|&idx| self.delegates[idx].action_is_relevant(action))
            {
                filtered.push(action.clone());
            }
        }

        let result = if filtered.is_empty() && !candidates.is_empty() {
            self.fail_opens += 1;
            warn!(
                candidates = candidates.len(),
                "affordance filter emptied the candidate set; failing open"
            );
            candidates
        } else {
            filtered
        };

        if self.config.cache_action_sets {
            self.cache.insert(state.clone(), result.clone());
        }
        Ok(result)
    }

    /// Register a delegate. Idempotent by delegate key; a successful add
    /// invalidates the cache.
    pub fn add_delegate(&mut self, delegate: AffordanceDelegate<S>) {
        if self.delegates.iter().any(|d| d.key() == delegate.key()) {
            return;
        }
        self.delegates.push(delegate);
        self.cache.clear();
    }

    /// Remove the delegate with the given key. No-op if absent; a
    /// successful removal invalidates the cache.
    pub fn remove_delegate(&mut self, key: &str) {
        let before = self.delegates.len();
        self.delegates.retain(|d| d.key() != key);
        if self.delegates.len() != before {
            self.cache.clear();
        }
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn current_goal(&self) -> Option<GoalKey> {
        self.current_goal
    }

    pub fn delegates(&self) -> &[AffordanceDelegate<S>] {
        &self.delegates
    }

    pub fn caching_enabled(&self) -> bool {
        self.config.cache_action_sets
    }

    /// Number of pruning entry-point invocations (both entry points).
    pub fn prune_calls(&self) -> u64 {
        self.prune_calls
    }

    /// Number of pruning calls served verbatim from the cache.
    pub fn cache_hits(&self) -> u64 {
        self.cache_hits
    }

    /// Number of times filtering fell back to the unfiltered candidate list.
    pub fn fail_opens(&self) -> u64 {
        self.fail_opens
    }
}
