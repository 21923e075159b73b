use afford_core::{GoalKey, GroundedAction};
use afford_engine::{ActivationMode, AffordancesConfig, AffordancesController};
use afford_mining::{
    parse_map, standard_delegates, MiningState, MINE_BLOCK, ORE_DELIVERED, PLACE_BLOCK, SMELT,
};

fn quarry() -> MiningState {
    // Agent top-left, two ore veins on the right, a furnace at the bottom.
    parse_map("a.*\n..*\n.o.\n").unwrap()
}

fn quarry_controller(seed: u64, cache: bool) -> AffordancesController<MiningState> {
    AffordancesController::new(standard_delegates()).with_config(AffordancesConfig {
        cache_action_sets: cache,
        seed,
    })
}

#[test]
fn mining_is_soft_and_placing_is_gated() {
    let mut controller = quarry_controller(13, false);
    controller.set_current_goal(ORE_DELIVERED);

    let state = quarry();
    assert!(!state.holding_ore());

    let vein = GroundedAction::new(MINE_BLOCK, vec!["ore_2_0".into()]);
    let samples = 400;
    let mut vein_included = 0usize;
    for _ in 0..samples {
        let pruned = controller.pruned_actions_for(&state).unwrap();
        assert!(
            pruned.iter().all(|a| a.schema != PLACE_BLOCK),
            "place_block must never appear while not holding ore"
        );
        if pruned.contains(&vein) {
            vein_included += 1;
        }
    }

    let rate = vein_included as f64 / samples as f64;
    assert!(
        (0.35..=0.65).contains(&rate),
        "mine_block inclusion rate {rate} strayed too far from 0.5"
    );
}

#[test]
fn holding_ore_unlocks_placement() {
    let mut controller = quarry_controller(13, false);
    controller.set_current_goal(ORE_DELIVERED);

    let state = quarry().with_holding_ore(true);
    let pruned = controller.pruned_actions_for(&state).unwrap();
    let placements: Vec<_> = pruned
        .iter()
        .filter(|a| a.schema == PLACE_BLOCK)
        .collect();
    // Placement is hard: one grounding per floor cell.
    assert_eq!(placements.len(), state.objects_of("cell").len());
}

#[test]
fn cached_scenario_repeats_verbatim() {
    let mut controller = quarry_controller(13, true);
    controller.set_current_goal(ORE_DELIVERED);

    let state = quarry();
    let first = controller.pruned_actions_for(&state).unwrap();
    let second = controller.pruned_actions_for(&state).unwrap();
    assert_eq!(first, second);
    assert_eq!(controller.cache_hits(), 1);
}

#[test]
fn goal_conditioned_delegates_require_the_matching_goal() {
    let mut delegates = standard_delegates();
    for delegate in &mut delegates {
        if delegate.key() == "deliver" {
            *delegate = delegate.clone().with_mode(ActivationMode::GoalConditioned);
        }
    }
    let mut controller = AffordancesController::new(delegates);

    // Standing at the furnace, but pursuing an unrelated goal.
    let mut state = quarry();
    state.set_agent((1, 2));
    controller.set_current_goal(GoalKey("escape"));
    let pruned = controller.pruned_actions_for(&state).unwrap();
    assert!(pruned.iter().all(|a| a.schema != SMELT));

    controller.set_current_goal(ORE_DELIVERED);
    let pruned = controller.pruned_actions_for(&state).unwrap();
    assert!(pruned.iter().any(|a| a.schema == SMELT));
}
