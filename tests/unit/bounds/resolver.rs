use super::*;

fn parent() -> Rect {
    Rect::new(0, 0, 100, 200)
}

#[test]
fn unset_rules_reproduce_parent() {
    for p in [
        parent(),
        Rect::new(-30, 15, 45, 15),
        Rect::new(50, 60, 10, 20),
        Rect::ZERO,
    ] {
        assert_eq!(resolve(p, &BoundsRuleSet::new()), p);
    }
}

#[test]
fn absolute_edge_is_verbatim() {
    let rules = BoundsRuleSet::new().with(Edge::Top, EdgeRule::absolute(37));
    for p in [parent(), Rect::new(500, 500, 900, 900), Rect::new(5, 90, 5, -90)] {
        let r = resolve(p, &rules);
        assert_eq!(r.top, 37);
        assert_eq!(r.left, p.left);
        assert_eq!(r.right, p.right);
        assert_eq!(r.bottom, p.bottom);
    }
}

#[test]
fn fractional_edges_scale_along_their_axis() {
    let p = Rect::new(20, 40, 120, 440);
    let rules = BoundsRuleSet::new()
        .with(Edge::Left, EdgeRule::fractional(0.3))
        .with(Edge::Top, EdgeRule::fractional(0.3));
    let r = resolve(p, &rules);
    assert_eq!(r.left, 20 + 30);
    assert_eq!(r.top, 40 + 120);
}

#[test]
fn reference_example_resolves() {
    let rules = BoundsRuleSet {
        top: EdgeRule::fractional(0.25),
        bottom: EdgeRule::fractional(0.75),
        left: EdgeRule::absolute(10),
        right: EdgeRule::UNSET,
    };
    assert_eq!(resolve(parent(), &rules), Rect::new(10, 50, 100, 150));
}

#[test]
fn adjustment_is_added_after_rounding() {
    let rules = BoundsRuleSet::new().with(Edge::Right, EdgeRule::fractional_with_adjustment(0.5, -8));
    let r = resolve(Rect::new(0, 0, 3, 3), &rules);
    assert_eq!(r.right, 2 - 8);
}

#[test]
fn zero_size_parent_collapses_fractions_to_origin() {
    let p = Rect::new(7, 9, 7, 9);
    let rules = BoundsRuleSet {
        top: EdgeRule::fractional(0.5),
        bottom: EdgeRule::fractional(1.0),
        left: EdgeRule::fractional_with_adjustment(0.9, 2),
        right: EdgeRule::fractional(0.1),
    };
    assert_eq!(resolve(p, &rules), Rect::new(9, 9, 7, 9));
}

#[test]
fn out_of_range_fractions_are_not_clamped() {
    let rules = BoundsRuleSet {
        top: EdgeRule::fractional(-0.5),
        bottom: EdgeRule::fractional(1.5),
        left: EdgeRule::fractional(-1.0),
        right: EdgeRule::fractional(2.0),
    };
    assert_eq!(resolve(parent(), &rules), Rect::new(-100, -100, 200, 300));
}

#[test]
fn inverted_parent_uses_negative_span() {
    let p = Rect::new(100, 0, 0, 10);
    let rules = BoundsRuleSet::new().with(Edge::Left, EdgeRule::fractional(0.25));
    assert_eq!(resolve(p, &rules).left, 75);
}

#[test]
fn resolve_is_pure_and_idempotent() {
    let p = Rect::new(3, 5, 333, 777);
    let rules = BoundsRuleSet {
        top: EdgeRule::fractional_with_adjustment(0.33, 1),
        bottom: EdgeRule::absolute(600),
        left: EdgeRule::UNSET,
        right: EdgeRule::fractional(0.9),
    };
    let snapshot = rules;
    let a = resolve(p, &rules);
    let b = resolve(p, &rules);
    assert_eq!(a, b);
    assert_eq!(rules, snapshot);
    assert_eq!(rules.resolve(p), a);
}

#[test]
fn extreme_values_saturate() {
    let p = Rect::new(i32::MAX - 10, 0, i32::MAX, 10);
    let rules = BoundsRuleSet::new().with(Edge::Left, EdgeRule::fractional_with_adjustment(1.0, 100));
    assert_eq!(resolve(p, &rules).left, i32::MAX);
}
