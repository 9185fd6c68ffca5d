use std::io;

use outcome_rail::{combine, combine_with_policy, Failure, WarningPolicy};

fn samples() -> Vec<Failure> {
    vec![
        Failure::Generic,
        Failure::warning("w"),
        Failure::not_found(1),
        Failure::invalid("f", "m"),
        Failure::exception(io::Error::other("boom")),
    ]
}

#[test]
fn success_is_identity_on_both_sides() {
    for failure in samples() {
        assert_eq!(combine(None, Some(failure.clone())), Some(failure.clone()));
        assert_eq!(combine(Some(failure.clone()), None), Some(failure));
    }
    assert_eq!(combine(None, None), None);
}

#[test]
fn heavier_kind_wins_in_either_order() {
    let failures = samples();
    for (i, lighter) in failures.iter().enumerate() {
        for heavier in &failures[i + 1..] {
            assert_eq!(combine(Some(lighter.clone()), Some(heavier.clone())).as_ref(), Some(heavier));
            assert_eq!(combine(Some(heavier.clone()), Some(lighter.clone())).as_ref(), Some(heavier));
        }
    }
}

#[test]
fn generic_receiver_yields_even_to_generic() {
    // incoming wins on the generic tie, unlike every other kind
    let incoming = Failure::Generic.join(Failure::not_found(1));
    assert_eq!(incoming, Failure::not_found(1));

    let warning = Failure::Generic.join(Failure::warning("later"));
    assert_eq!(warning, Failure::warning("later"));

    assert_eq!(Failure::Generic.join(Failure::Generic), Failure::Generic);
    assert_eq!(combine(Some(Failure::Generic), Some(Failure::Generic)), Some(Failure::Generic));
}

#[test]
fn equal_weight_keeps_receiver() {
    assert_eq!(Failure::not_found(1).join(Failure::not_found(2)), Failure::not_found(1));
    assert_eq!(Failure::warning("first").join(Failure::warning("second")), Failure::warning("first"));
}

#[test]
fn validation_merge_is_ordered_and_associative() {
    let a = || Failure::invalid("p1", "m1");
    let b = || Failure::invalid("p2", "m2");
    let c = || Failure::invalid("p3", "m3");

    assert_eq!(a().join(b()), Failure::invalid_many([("p1", "m1"), ("p2", "m2")]));

    let left = a().join(b()).join(c());
    let right = a().join(b().join(c()));
    assert_eq!(left, right);
    assert_eq!(left, Failure::invalid_many([("p1", "m1"), ("p2", "m2"), ("p3", "m3")]));
}

#[test]
fn exception_is_never_replaced() {
    let exception = Failure::exception(io::Error::other("first"));
    for incoming in samples() {
        assert_eq!(exception.clone().join(incoming), exception);
    }
}

#[test]
fn suppress_drops_warning_only_on_success() {
    let warning = Some(Failure::warning("unchanged"));

    assert_eq!(combine_with_policy(None, warning.clone(), WarningPolicy::Suppress), None);
    assert_eq!(
        combine_with_policy(Some(Failure::Generic), warning.clone(), WarningPolicy::Suppress),
        warning
    );
    assert_eq!(
        combine_with_policy(None, Some(Failure::not_found(1)), WarningPolicy::Suppress),
        Some(Failure::not_found(1))
    );
}

#[test]
fn policy_from_flag() {
    assert_eq!(WarningPolicy::from_flag(true), WarningPolicy::Suppress);
    assert_eq!(WarningPolicy::from_flag(false), WarningPolicy::Enforce);
    assert_eq!(WarningPolicy::default(), WarningPolicy::Enforce);
}
