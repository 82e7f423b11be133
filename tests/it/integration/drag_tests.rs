//! Element drag workflows.

use crate::helpers::{MOUSE, PEN, TestBoardBuilder, count_redraws, eid, move_to, position_of, press, release};
use omegaboard::{CaptureRequest, WorldPoint};

#[test]
fn test_drag_moves_hovered_element() {
    let mut board = TestBoardBuilder::new().with_shape(1, (1000, 1000), (100, 100)).build();

    board.handle_event(&move_to(MOUSE, 10.0, 10.0));
    assert_eq!(board.hover_element_id(), Some(eid(1)));

    let response = board.handle_event(&press(MOUSE, 0, 10.0, 10.0));
    assert_eq!(response.capture, Some(CaptureRequest::Capture(MOUSE)));
    assert!(board.input_state().is_dragging_element());

    board.handle_event(&move_to(MOUSE, 30.0, 25.0));
    assert_eq!(position_of(&board, 1), WorldPoint::new(1020, 1015));

    let response = board.handle_event(&release(MOUSE, 0, 30.0, 25.0));
    assert_eq!(response.capture, Some(CaptureRequest::Release(MOUSE)));
    assert!(board.input_state().is_idle());
}

#[test]
fn test_drag_is_anchored_to_session_start() {
    let mut board = TestBoardBuilder::new()
        .with_scale(2.0)
        .with_corner(0, 0)
        .with_shape(1, (0, 0), (100, 100))
        .build();

    board.handle_event(&move_to(MOUSE, 10.0, 10.0));
    board.handle_event(&press(MOUSE, 0, 10.0, 10.0));
    for x in [13.0, 17.0, 24.0, 31.0] {
        board.handle_event(&move_to(MOUSE, x, 10.0));
    }

    // 21px at scale 2 is 10.5 world units, rounded once from the start position
    assert_eq!(position_of(&board, 1), WorldPoint::new(11, 0));
}

#[test]
fn test_drag_targets_topmost_element() {
    let mut board = TestBoardBuilder::new()
        .with_shape(1, (1000, 1000), (100, 100))
        .with_shape(2, (1050, 1050), (100, 100))
        .build();

    board.handle_event(&move_to(MOUSE, 60.0, 60.0));
    board.handle_event(&press(MOUSE, 0, 60.0, 60.0));
    board.handle_event(&move_to(MOUSE, 70.0, 60.0));

    assert_eq!(position_of(&board, 1), WorldPoint::new(1000, 1000));
    assert_eq!(position_of(&board, 2), WorldPoint::new(1060, 1050));
}

#[test]
fn test_press_without_hover_starts_no_drag() {
    let mut board = TestBoardBuilder::new().with_shape(1, (1000, 1000), (100, 100)).build();

    board.handle_event(&move_to(MOUSE, 500.0, 500.0));
    assert_eq!(board.hover_element_id(), None);

    let response = board.handle_event(&press(MOUSE, 0, 500.0, 500.0));
    assert_eq!(response.capture, None);
    assert!(board.input_state().is_idle());

    board.handle_event(&move_to(MOUSE, 50.0, 50.0));
    assert_eq!(position_of(&board, 1), WorldPoint::new(1000, 1000));
}

#[test]
fn test_press_on_removed_element_starts_no_drag() {
    let mut board = TestBoardBuilder::new().with_shape(1, (1000, 1000), (100, 100)).build();

    board.handle_event(&move_to(MOUSE, 10.0, 10.0));
    board.layer_mut().remove(eid(1));
    assert_eq!(board.hover_element_id(), Some(eid(1)));

    board.handle_event(&press(MOUSE, 0, 10.0, 10.0));
    assert!(board.input_state().is_idle());
}

#[test]
fn test_moves_after_release_are_ignored() {
    let mut board = TestBoardBuilder::new().with_shape(1, (1000, 1000), (100, 100)).build();

    board.handle_event(&move_to(MOUSE, 10.0, 10.0));
    board.handle_event(&press(MOUSE, 0, 10.0, 10.0));
    board.handle_event(&move_to(MOUSE, 20.0, 10.0));
    board.handle_event(&release(MOUSE, 0, 20.0, 10.0));
    board.handle_event(&move_to(MOUSE, 80.0, 80.0));

    assert_eq!(position_of(&board, 1), WorldPoint::new(1010, 1000));
}

#[test]
fn test_other_pointer_does_not_drive_drag() {
    let mut board = TestBoardBuilder::new().with_shape(1, (1000, 1000), (100, 100)).build();

    board.handle_event(&move_to(MOUSE, 10.0, 10.0));
    board.handle_event(&press(MOUSE, 0, 10.0, 10.0));
    board.handle_event(&move_to(PEN, 60.0, 60.0));
    board.handle_event(&release(PEN, 0, 60.0, 60.0));

    assert_eq!(position_of(&board, 1), WorldPoint::new(1000, 1000));
    assert!(board.input_state().is_dragging_element());
}

#[test]
fn test_press_and_release_do_not_redraw() {
    let mut board = TestBoardBuilder::new().with_shape(1, (1000, 1000), (100, 100)).build();
    let redraws = count_redraws(&mut board);

    board.handle_event(&move_to(MOUSE, 10.0, 10.0));
    board.handle_event(&press(MOUSE, 0, 10.0, 10.0));
    board.handle_event(&move_to(MOUSE, 15.0, 10.0));
    board.handle_event(&move_to(MOUSE, 20.0, 10.0));
    board.handle_event(&release(MOUSE, 0, 20.0, 10.0));

    assert_eq!(redraws.get(), 3);
}
