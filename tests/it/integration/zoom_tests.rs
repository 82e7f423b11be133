//! Wheel zoom workflows.

use crate::helpers::{
    MOUSE, TestBoardBuilder, TestShape, count_redraws, ctrl_wheel, move_to, plain_wheel, press,
};
use omegaboard::{Board, BoardSettings, Layer, ScreenOffset, SettingsError, WorldPoint};

#[test]
fn test_ctrl_wheel_zooms_around_pointer() {
    let mut board = TestBoardBuilder::new().with_corner(50, 50).build();
    board.handle_event(&move_to(MOUSE, 50.0, 50.0));
    assert_eq!(board.pointer().world, WorldPoint::new(100, 100));

    let response = board.handle_event(&ctrl_wheel(120.0));

    assert!(response.prevent_default);
    assert_eq!(board.scale(), 1.2);
    assert_eq!(board.viewport().corner, WorldPoint::new(58, 58));
    assert_eq!(board.screen_to_world(ScreenOffset::new(50.0, 50.0)), WorldPoint::new(100, 100));
}

#[test]
fn test_negative_delta_shrinks_scale() {
    let mut board = TestBoardBuilder::new().with_corner(60, 60).build();
    board.handle_event(&move_to(MOUSE, 40.0, 40.0));

    board.handle_event(&ctrl_wheel(-120.0));

    assert_eq!(board.scale(), 0.8);
    // 40 / 0.8 = 50
    assert_eq!(board.viewport().corner, WorldPoint::new(50, 50));
}

#[test]
fn test_zero_delta_zooms_in() {
    let mut board = TestBoardBuilder::new().build();
    board.handle_event(&ctrl_wheel(0.0));
    assert_eq!(board.scale(), 0.8);
}

#[test]
fn test_repeated_zoom_in_stops_at_floor() {
    let mut board = TestBoardBuilder::new().with_scale(0.3).build();

    for _ in 0..6 {
        board.handle_event(&ctrl_wheel(-1.0));
        assert!(board.scale() >= 0.2);
    }

    assert_eq!(board.scale(), 0.2);
}

#[test]
fn test_board_rejects_unusable_floor() {
    for min_scale in [0.0, -0.2, 0.04, f64::NAN] {
        let settings = BoardSettings {
            min_scale,
            ..Default::default()
        };
        let result = Board::with_settings(Layer::<TestShape>::new(), &settings);
        assert!(matches!(result, Err(SettingsError::Invalid(_))), "min_scale {min_scale} was accepted");
    }
}

#[test]
fn test_zoom_in_at_smallest_floor_keeps_pan_finite() {
    let settings = BoardSettings {
        min_scale: 0.1,
        ..Default::default()
    };
    let mut board = Board::with_settings(Layer::<TestShape>::new(), &settings).unwrap();
    board.handle_event(&move_to(MOUSE, 30.0, 30.0));

    for _ in 0..10 {
        board.handle_event(&ctrl_wheel(-1.0));
    }

    assert_eq!(board.scale(), 0.1);
    // 30 / 0.1 = 300 world units from the corner
    let corner = board.viewport().corner;
    assert_eq!(board.screen_to_world(ScreenOffset::new(30.0, 30.0)), corner + WorldPoint::new(300, 300));
}

#[test]
fn test_plain_wheel_is_left_to_host() {
    let mut board = TestBoardBuilder::new().build();
    let redraws = count_redraws(&mut board);

    let response = board.handle_event(&plain_wheel(120.0));

    assert!(!response.prevent_default);
    assert_eq!(board.scale(), 1.0);
    assert_eq!(redraws.get(), 0);
}

#[test]
fn test_zoom_without_pointer_keeps_corner() {
    let mut board = TestBoardBuilder::new().build();

    board.handle_event(&ctrl_wheel(1.0));

    assert_eq!(board.scale(), 1.2);
    assert_eq!(board.viewport().corner, WorldPoint::new(1000, 1000));
}

#[test]
fn test_zoom_redraws_once() {
    let mut board = TestBoardBuilder::new().build();
    let redraws = count_redraws(&mut board);

    board.handle_event(&ctrl_wheel(1.0));

    assert_eq!(redraws.get(), 1);
}

#[test]
fn test_zoom_mid_pan_uses_new_scale() {
    let mut board = TestBoardBuilder::new().with_corner(0, 0).build();

    board.handle_event(&press(MOUSE, 1, 0.0, 0.0));
    board.handle_event(&ctrl_wheel(1.0));
    board.handle_event(&ctrl_wheel(1.0));
    assert_eq!(board.scale(), 1.4);

    board.handle_event(&move_to(MOUSE, 28.0, 0.0));
    assert_eq!(board.viewport().corner, WorldPoint::new(-20, 0));
}
