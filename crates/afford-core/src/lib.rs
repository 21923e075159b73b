//! Representation seam for affordance-based action pruning.
//!
//! This crate defines the vocabulary the pruning engine speaks: action
//! schemas, grounded actions, named predicates, goal tokens, and the
//! [`StateView`] trait a domain implements to expose its object population.
//! It deliberately does not prescribe a state representation.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod action;
pub mod goal;
pub mod predicate;
pub mod schema;
pub mod state;

pub use action::GroundedAction;
pub use goal::GoalKey;
pub use predicate::Predicate;
pub use schema::{ActionSchema, SchemaKey};
pub use state::StateView;
