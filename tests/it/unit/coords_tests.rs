//! Unit tests for coordinate conversion.

use omegaboard::input::coords::CoordinateConverter;
use omegaboard::{ScreenOffset, Viewport, WorldPoint};

#[test]
fn test_screen_to_world_rounds_each_axis() {
    let viewport = Viewport::new(1.2, WorldPoint::new(100, -50));
    let world = CoordinateConverter::screen_to_world(ScreenOffset::new(50.0, -50.0), &viewport);
    // 50 / 1.2 = 41.67 -> 42
    assert_eq!(world, WorldPoint::new(142, -92));
}

#[test]
fn test_round_trip_is_lossy_but_bounded() {
    // world -> screen after screen -> world may drift by at most half a world unit in pixels
    let corner = WorldPoint::new(37, -12);
    for tenths in 2..=40 {
        let scale = tenths as f64 / 10.0;
        let viewport = Viewport::new(scale, corner);
        for sx in (-30..=30).step_by(7) {
            for sy in (0..=90).step_by(11) {
                let original = ScreenOffset::new(sx as f64, sy as f64);
                let world = CoordinateConverter::screen_to_world(original, &viewport);
                let back = CoordinateConverter::world_to_screen(world, &viewport);
                let bound = viewport.scale / 2.0 + 1e-9;
                assert!(
                    (back.x - original.x).abs() <= bound && (back.y - original.y).abs() <= bound,
                    "scale {scale}: {original:?} came back as {back:?}"
                );
            }
        }
    }
}

#[test]
fn test_round_trip_exact_at_unit_scale() {
    let viewport = Viewport::new(1.0, WorldPoint::new(1000, 1000));
    let original = ScreenOffset::new(321.0, 45.0);
    let world = CoordinateConverter::screen_to_world(original, &viewport);
    assert_eq!(CoordinateConverter::world_to_screen(world, &viewport), original);
}

#[test]
fn test_delta_conversion_ignores_corner() {
    let delta = CoordinateConverter::delta_screen_to_world(ScreenOffset::new(-21.0, 9.0), 2.0);
    // -10.5 rounds away from zero, 4.5 too
    assert_eq!(delta, WorldPoint::new(-11, 5));
}
