use afford_core::Predicate;

#[derive(Debug)]
struct Counter {
    value: i32,
}

#[test]
fn predicates_evaluate_against_the_state() {
    let positive = Predicate::new("positive", |c: &Counter| c.value > 0);
    assert!(positive.holds(&Counter { value: 3 }));
    assert!(!positive.holds(&Counter { value: -1 }));
    assert_eq!(positive.name(), "positive");
}

#[test]
fn always_holds_everywhere() {
    let always = Predicate::<Counter>::always();
    assert!(always.holds(&Counter { value: i32::MIN }));
    assert_eq!(always.name(), "always");
}

#[test]
fn clones_share_the_evaluation_closure() {
    let positive = Predicate::new("positive", |c: &Counter| c.value > 0);
    let copy = positive.clone();
    assert_eq!(copy.name(), positive.name());
    assert_eq!(copy.holds(&Counter { value: 1 }), positive.holds(&Counter { value: 1 }));
}

#[test]
fn debug_prints_the_name() {
    let positive = Predicate::new("positive", |c: &Counter| c.value > 0);
    assert_eq!(format!("{positive:?}"), "Predicate(\"positive\")");
}
