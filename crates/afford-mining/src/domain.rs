use afford_core::{ActionSchema, GoalKey, Predicate, SchemaKey};
use afford_engine::{Affordance, AffordanceDelegate};

use crate::state::{MiningState, CELL, FURNACE, ORE};

pub const MOVE_TO: SchemaKey = SchemaKey("move_to");
pub const MINE_BLOCK: SchemaKey = SchemaKey("mine_block");
pub const PLACE_BLOCK: SchemaKey = SchemaKey("place_block");
pub const SMELT: SchemaKey = SchemaKey("smelt");

pub const ORE_DELIVERED: GoalKey = GoalKey("ore_delivered");

pub fn move_to_schema() -> ActionSchema {
    ActionSchema::unary(MOVE_TO, CELL)
}

pub fn mine_block_schema() -> ActionSchema {
    ActionSchema::unary(MINE_BLOCK, ORE)
}

pub fn place_block_schema() -> ActionSchema {
    ActionSchema::unary(PLACE_BLOCK, CELL)
}

pub fn smelt_schema() -> ActionSchema {
    ActionSchema::unary(SMELT, FURNACE)
}

pub fn holding_ore() -> Predicate<MiningState> {
    Predicate::new("holding_ore", |s: &MiningState| s.holding_ore())
}

pub fn at_furnace() -> Predicate<MiningState> {
    Predicate::new("at_furnace", |s: &MiningState| {
        s.furnaces().contains(&s.agent())
    })
}

/// The stock delegate set for this domain.
///
/// Movement is always afforded; mining is a soft rule (candidate veins are
/// admitted at 50% per pass, keeping exploration noise in the pruned set);
/// placing requires held ore; smelting requires standing at a furnace and
/// is associated with the delivery goal.
pub fn standard_delegates() -> Vec<AffordanceDelegate<MiningState>> {
    vec![
        AffordanceDelegate::new(
            "reach",
            Affordance::hard(Predicate::always(), vec![move_to_schema()]),
        ),
        AffordanceDelegate::new(
            "mine",
            Affordance::soft(Predicate::always(), vec![(mine_block_schema(), 0.5)]),
        ),
        AffordanceDelegate::new(
            "build",
            Affordance::hard(holding_ore(), vec![place_block_schema()]),
        ),
        AffordanceDelegate::new(
            "deliver",
            Affordance::hard(at_furnace(), vec![smelt_schema()]).with_goal(ORE_DELIVERED),
        ),
    ]
}
