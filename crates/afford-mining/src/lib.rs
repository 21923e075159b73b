//! Grid mining reference domain for the `afford-*` crates.
//!
//! A small object-composed world — an agent on a grid of floor cells, ore
//! veins, furnaces, and walls — with the schemas, predicates, and stock
//! affordance rules the engine's tests and examples exercise. It doubles as
//! a worked example of implementing the [`afford_core::StateView`] seam,
//! including order-group-aware binding enumeration and ASCII map loading.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod domain;
pub mod map;
pub mod state;

pub use domain::{
    at_furnace, holding_ore, mine_block_schema, move_to_schema, place_block_schema, smelt_schema,
    standard_delegates, MINE_BLOCK, MOVE_TO, ORE_DELIVERED, PLACE_BLOCK, SMELT,
};
pub use map::{parse_map, MapError};
pub use state::MiningState;
