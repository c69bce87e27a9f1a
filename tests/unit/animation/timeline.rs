use super::*;
use crate::{bounds::rule_set::BoundsRuleSet, foundation::core::Rect};

fn track(property: EdgeProperty, keys: &[(u64, f64)]) -> PropertyTrack {
    PropertyTrack {
        child: 0,
        property,
        keys: keys.iter().map(|&(t, v)| Keyframe::new(t, v)).collect(),
    }
}

#[test]
fn sample_holds_outside_keyed_range() {
    let t = track(EdgeProperty::FractionTop, &[(100, 0.0), (300, 1.0)]);
    assert_eq!(t.sample(0).unwrap(), 0.0);
    assert_eq!(t.sample(100).unwrap(), 0.0);
    assert_eq!(t.sample(300).unwrap(), 1.0);
    assert_eq!(t.sample(10_000).unwrap(), 1.0);
}

#[test]
fn sample_interpolates_with_segment_ease() {
    let linear = track(EdgeProperty::AbsoluteLeft, &[(0, 10.0), (100, 30.0)]);
    assert_eq!(linear.sample(50).unwrap(), 20.0);

    let mut eased = linear.clone();
    eased.keys[0] = eased.keys[0].with_ease(Ease::Accelerate);
    assert_eq!(eased.sample(50).unwrap(), 15.0);
}

#[test]
fn coincident_keys_jump_without_dividing_by_zero() {
    let t = track(EdgeProperty::AbsoluteTop, &[(0, 1.0), (50, 2.0), (50, 9.0)]);
    assert_eq!(t.sample(49).unwrap(), 1.0 + (2.0 - 1.0) * 0.98);
    assert_eq!(t.sample(50).unwrap(), 9.0);
}

#[test]
fn validate_rejects_empty_and_unsorted_tracks() {
    let empty = track(EdgeProperty::AbsoluteTop, &[]);
    assert!(matches!(empty.validate(), Err(BoundsError::Animation(_))));
    assert!(empty.sample(0).is_err());

    let unsorted = track(EdgeProperty::AbsoluteTop, &[(10, 0.0), (5, 1.0)]);
    assert!(matches!(unsorted.validate(), Err(BoundsError::Animation(_))));

    let tl = Timeline::new().with_track(unsorted);
    assert!(tl.validate().is_err());
}

#[test]
fn duration_is_last_key_across_tracks() {
    let tl = Timeline::new()
        .with_track(track(EdgeProperty::FractionTop, &[(0, 0.0), (250, 1.0)]))
        .with_track(track(EdgeProperty::FractionLeft, &[(400, 0.5)]));
    assert_eq!(tl.duration_ms(), 400);
    assert_eq!(Timeline::new().duration_ms(), 0);
}

#[test]
fn apply_writes_samples_and_recomputes_children() {
    let mut layer = CompositeLayer::with_bounds(Rect::new(0, 0, 200, 100));
    layer.add_child("a");
    layer.add_child_with_rules("b", BoundsRuleSet::default());

    let mut slide = track(EdgeProperty::FractionLeft, &[(0, 0.0), (1000, 0.5)]);
    slide.child = 1;
    let tl = Timeline::new()
        .with_track(slide)
        .with_track(track(EdgeProperty::AbsoluteTop, &[(0, 0.0), (1000, 40.0)]))
        .with_track(track(EdgeProperty::AdjustmentBottom, &[(0, -10.0)]));

    tl.apply(&mut layer, 500).unwrap();
    assert_eq!(layer.child(0).unwrap().bounds(), Rect::new(0, 20, 200, 90));
    assert_eq!(layer.child(1).unwrap().bounds(), Rect::new(50, 0, 200, 100));
}

#[test]
fn apply_rejects_missing_child_without_writing() {
    let mut layer = CompositeLayer::with_bounds(Rect::new(0, 0, 10, 10));
    layer.add_child(());
    let mut stray = track(EdgeProperty::AbsoluteTop, &[(0, 5.0)]);
    stray.child = 3;
    let tl = Timeline::new()
        .with_track(track(EdgeProperty::AbsoluteLeft, &[(0, 4.0)]))
        .with_track(stray);

    let before = layer.clone();
    assert!(matches!(
        tl.apply(&mut layer, 0),
        Err(BoundsError::Animation(_))
    ));
    assert_eq!(layer, before);
}
