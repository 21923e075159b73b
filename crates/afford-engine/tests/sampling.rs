use std::collections::BTreeSet;

use afford_core::{ActionSchema, GoalKey, GroundedAction, Predicate, SchemaKey, StateView};
use afford_engine::{Affordance, AffordanceDelegate, AffordancesConfig, AffordancesController, PruneError};

const GOAL: GoalKey = GoalKey("deliver");
const MINE: SchemaKey = SchemaKey("mine");

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct VeinField {
    veins: Vec<&'static str>,
}

impl StateView for VeinField {
    fn possible_bindings(&self, schema: &ActionSchema) -> Vec<Vec<String>> {
        match schema.parameter_classes() {
            [] => vec![Vec::new()],
            ["vein"] => self.veins.iter().map(|v| vec![v.to_string()]).collect(),
            _ => Vec::new(),
        }
    }
}

fn mine_schema() -> ActionSchema {
    ActionSchema::unary(MINE, "vein")
}

fn soft_controller(weight: f32, seed: u64) -> AffordancesController<VeinField> {
    let delegate = AffordanceDelegate::new(
        "mine",
        Affordance::soft(Predicate::always(), vec![(mine_schema(), weight)]),
    );
    AffordancesController::new(vec![delegate]).with_config(AffordancesConfig {
        cache_action_sets: false,
        seed,
    })
}

#[test]
fn soft_inclusion_rate_tracks_weight() {
    let mut controller = soft_controller(0.5, 7);
    controller.set_current_goal(GOAL);

    let state = VeinField { veins: vec!["v0"] };
    let target = GroundedAction::new(MINE, vec!["v0".into()]);

    let samples = 400;
    let mut included = 0usize;
    for _ in 0..samples {
        let pruned = controller.pruned_actions_for(&state).unwrap();
        if pruned.contains(&target) {
            included += 1;
        }
    }

    let rate = included as f64 / samples as f64;
    assert!(
        (0.35..=0.65).contains(&rate),
        "inclusion rate {rate} strayed too far from weight 0.5"
    );
}

#[test]
fn zero_weight_never_includes() {
    let mut controller = soft_controller(0.0, 3);
    controller.set_current_goal(GOAL);

    let state = VeinField {
        veins: vec!["v0", "v1"],
    };
    for _ in 0..50 {
        assert!(controller.pruned_actions_for(&state).unwrap().is_empty());
    }
}

#[test]
fn weights_clamp_to_unit_interval() {
    let affordance = Affordance::soft(
        Predicate::always(),
        vec![(mine_schema(), 1.5), (ActionSchema::nullary(SchemaKey("rest")), -0.5)],
    );
    assert_eq!(affordance.weight(MINE), Some(1.0));
    assert_eq!(affordance.weight(SchemaKey("rest")), Some(0.0));

    // Clamped-to-hard behaves like a hard rule.
    let delegate = AffordanceDelegate::new("mine", affordance);
    let mut controller = AffordancesController::new(vec![delegate]);
    controller.set_current_goal(GOAL);
    let state = VeinField {
        veins: vec!["v0", "v1"],
    };
    let pruned = controller.pruned_actions_for(&state).unwrap();
    assert_eq!(
        pruned,
        vec![
            GroundedAction::new(MINE, vec!["v0".into()]),
            GroundedAction::new(MINE, vec!["v1".into()]),
        ]
    );
}

#[test]
fn same_seed_reproduces_the_same_samples() {
    let state = VeinField {
        veins: vec!["v0", "v1", "v2", "v3", "v4", "v5"],
    };

    let mut first = soft_controller(0.5, 42);
    first.set_current_goal(GOAL);
    let mut second = soft_controller(0.5, 42);
    second.set_current_goal(GOAL);

    for _ in 0..20 {
        assert_eq!(
            first.pruned_actions_for(&state).unwrap(),
            second.pruned_actions_for(&state).unwrap()
        );
    }
}

#[test]
fn resample_requires_a_goal() {
    let mut controller = soft_controller(0.5, 0);
    assert_eq!(controller.resample_action_sets(), Err(PruneError::GoalUnset));
    controller.set_current_goal(GOAL);
    assert_eq!(controller.resample_action_sets(), Ok(()));
}

#[test]
fn resampling_redraws_soft_samples_in_place() {
    let mut controller = soft_controller(0.5, 11);
    controller.set_current_goal(GOAL);

    let state = VeinField {
        veins: vec!["v0", "v1", "v2", "v3", "v4", "v5"],
    };
    // Prime the delegate through a pruning pass, then redraw repeatedly.
    controller.pruned_actions_for(&state).unwrap();

    let mut distinct: BTreeSet<Vec<GroundedAction>> = BTreeSet::new();
    for _ in 0..32 {
        controller.resample_action_sets().unwrap();
        distinct.insert(controller.delegates()[0].listed_action_set().to_vec());
    }
    assert!(
        distinct.len() > 1,
        "soft resampling should vary the listed set"
    );
}

#[test]
fn unprimed_delegate_resamples_to_empty() {
    let mut controller = soft_controller(1.0, 0);
    controller.set_current_goal(GOAL);
    controller.resample_action_sets().unwrap();
    assert!(controller.delegates()[0].listed_action_set().is_empty());
}
