//! Prunes the mining domain's grounded actions across a few decision steps.
//!
//! Run with `cargo run -p afford-engine --example mining_prune`.

use afford_engine::{AffordancesConfig, AffordancesController};
use afford_mining::{parse_map, standard_delegates, ORE_DELIVERED};

fn main() {
    let state = parse_map("a..*\n.=.*\n.o..\n").expect("valid map");

    let mut controller = AffordancesController::new(standard_delegates()).with_config(
        AffordancesConfig {
            cache_action_sets: false,
            seed: 0xA110,
        },
    );
    controller.set_current_goal(ORE_DELIVERED);

    println!("goal: {}", ORE_DELIVERED.name());
    for pass in 0..4 {
        let pruned = controller
            .pruned_actions_for(&state)
            .expect("goal was set");
        println!("pass {pass}: {} candidate actions", pruned.len());
        for action in &pruned {
            println!("  {action}");
        }
    }

    // Holding ore unlocks the placement rule.
    let holding = state.clone().with_holding_ore(true);
    let pruned = controller
        .pruned_actions_for(&holding)
        .expect("goal was set");
    println!("holding ore: {} candidate actions", pruned.len());
}
