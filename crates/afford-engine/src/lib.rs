//! Affordance-based action pruning for goal-directed planners.
//!
//! Grounding every action schema against every object combination in a
//! state produces a candidate set that grows combinatorially with object
//! count. This crate prunes that set with small precondition-triggered,
//! optionally stochastic rules ([`Affordance`]s): an [`AffordancesController`]
//! asks each registered [`AffordanceDelegate`] whether it activates in the
//! current state under the current goal, samples grounded actions from the
//! active ones, and hands the planner the union.
//!
//! The engine is a pure filter/selector: it models no transition dynamics,
//! computes no rewards, and performs no search.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod affordance;
pub mod controller;
pub mod delegate;

pub use affordance::{Affordance, WeightedSchema};
pub use controller::{AffordancesConfig, AffordancesController, PruneError};
pub use delegate::{ActivationMode, AffordanceDelegate};
