use super::*;

// ============================================================================
// clamp / interpolate
// ============================================================================

#[test]
fn test_clamp_bounds() {
    assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
    assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
    assert_eq!(clamp(0.25, 0.0, 1.0), 0.25);
}

#[test]
fn test_clamp_inverted_range_does_not_panic() {
    assert_eq!(clamp(0.5, 1.0, 0.0), 0.0);
}

#[test]
fn test_interpolate_clamps_gradient() {
    assert_eq!(interpolate(2.0, 4.0, 0.5), 3.0);
    assert_eq!(interpolate(2.0, 4.0, -3.0), 2.0);
    assert_eq!(interpolate(2.0, 4.0, 7.0), 4.0);
    assert_eq!(interpolate(10.0, 0.0, 0.25), 7.5);
}

// ============================================================================
// wrap / ping_pong
// ============================================================================

#[test]
fn test_wrap_positive_and_negative() {
    assert_eq!(wrap(370.0, 360.0, 0.0), 10.0);
    assert_eq!(wrap(-10.0, 360.0, 0.0), 350.0);
    assert_eq!(wrap(5.0, 3.0, 1.0), 1.0);
    assert_eq!(wrap(0.5, 3.0, 1.0), 2.5);
}

#[test]
fn test_wrap_empty_range_returns_min() {
    assert_eq!(wrap(42.0, 1.0, 1.0), 1.0);
}

#[test]
fn test_ping_pong_bounces() {
    assert_eq!(ping_pong(0.5, 2.0), 0.5);
    assert_eq!(ping_pong(3.0, 2.0), 1.0);
    assert_eq!(ping_pong(4.5, 2.0), 0.5);
}
