use super::*;

#[test]
fn default_rule_is_unset() {
    let rule = EdgeRule::default();
    assert!(rule.is_unset());
    assert_eq!(rule.value(), RuleValue::Unset);
    assert_eq!(rule, EdgeRule::UNSET);
}

#[test]
fn writes_activate_their_representation() {
    let mut rule = EdgeRule::UNSET;
    rule.set_absolute_value(42);
    assert_eq!(rule.value(), RuleValue::Absolute(42));

    rule.set_fraction(0.5);
    assert_eq!(
        rule.value(),
        RuleValue::Fractional {
            fraction: 0.5,
            adjustment: 0
        }
    );

    rule.set_absolute_value(7);
    rule.set_adjustment(-3);
    assert_eq!(
        rule.value(),
        RuleValue::Fractional {
            fraction: 0.5,
            adjustment: -3
        }
    );
}

#[test]
fn mode_toggle_keeps_prior_absolute_value() {
    let mut rule = EdgeRule::UNSET;
    rule.set_absolute_value(10);
    rule.set_fraction(0.5);
    rule.use_absolute();
    assert_eq!(rule.mode(), EdgeMode::Absolute);
    assert_eq!(rule.absolute_value(), 10);
    assert_eq!(rule.value(), RuleValue::Absolute(10));
}

#[test]
fn mode_toggle_keeps_prior_fraction_and_adjustment() {
    let mut rule = EdgeRule::fractional_with_adjustment(0.25, 4);
    rule.set_absolute_value(99);
    rule.use_fractional();
    assert_eq!(
        rule.value(),
        RuleValue::Fractional {
            fraction: 0.25,
            adjustment: 4
        }
    );
}

#[test]
fn clear_keeps_stored_values() {
    let mut rule = EdgeRule::absolute(12);
    rule.clear();
    assert!(rule.is_unset());
    assert_eq!(rule.absolute_value(), 12);
    rule.use_absolute();
    assert_eq!(rule.value(), RuleValue::Absolute(12));
}

#[test]
fn from_rule_value_round_trips_active_representation() {
    for v in [
        RuleValue::Unset,
        RuleValue::Absolute(-5),
        RuleValue::Fractional {
            fraction: 1.5,
            adjustment: 2,
        },
    ] {
        assert_eq!(EdgeRule::from(v).value(), v);
    }
}

#[test]
fn serde_keeps_inactive_values() {
    let mut rule = EdgeRule::absolute(10);
    rule.set_fraction(0.75);
    let json = serde_json::to_string(&rule).unwrap();
    let back: EdgeRule = serde_json::from_str(&json).unwrap();
    assert_eq!(back, rule);
    assert_eq!(back.absolute_value(), 10);

    let sparse: EdgeRule = serde_json::from_str(r#"{"mode":"absolute","absolute":3}"#).unwrap();
    assert_eq!(sparse.value(), RuleValue::Absolute(3));
    assert_eq!(sparse.fraction(), 0.0);
}
