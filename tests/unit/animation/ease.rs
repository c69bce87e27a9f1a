use super::*;

#[test]
fn curves_pin_endpoints() {
    for ease in [
        Ease::Linear,
        Ease::Accelerate,
        Ease::Decelerate,
        Ease::AccelerateDecelerate,
    ] {
        assert!(ease.apply(0.0).abs() < 1e-12, "{ease:?} at 0");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{ease:?} at 1");
    }
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::Linear.apply(-2.0), 0.0);
    assert_eq!(Ease::Accelerate.apply(3.0), 1.0);
}

#[test]
fn curves_have_expected_midpoints() {
    assert_eq!(Ease::Linear.apply(0.5), 0.5);
    assert_eq!(Ease::Accelerate.apply(0.5), 0.25);
    assert_eq!(Ease::Decelerate.apply(0.5), 0.75);
    assert!((Ease::AccelerateDecelerate.apply(0.5) - 0.5).abs() < 1e-12);
}
