use range_slider_wasm::application::{RangeSliderController, SliderConfig};
use range_slider_wasm::domain::slider::{DragState, HandleId, SliderGeometry};

const GEOMETRY: SliderGeometry = SliderGeometry { left: 100.0, width: 500.0, handle_width: 20.0 };

/// Client X that lands exactly on `value` for the default 0..10 slider.
fn pointer_for(value: i32) -> f64 {
    GEOMETRY.left + value as f64 * 50.0
}

fn controller() -> RangeSliderController {
    RangeSliderController::new(&SliderConfig::default()).expect("default config is valid")
}

#[test]
fn initial_hidden_value_orders_handles() {
    let slider = controller();
    let frame = slider.frame(&GEOMETRY);
    assert_eq!(frame.hidden_value(), "2-8");
    assert_eq!(frame.handle_values, [2, 8]);
    assert!(frame.tooltip.is_none());
}

#[test]
fn dragging_first_handle_past_second_swaps_selection() {
    let mut slider = controller();
    slider.begin_drag(HandleId::First);
    slider.record_pointer(pointer_for(9));

    let frame = slider.sample(&GEOMETRY).expect("dragging produces a frame");
    assert_eq!(slider.values(), (9, 8));
    assert_eq!(frame.hidden_value(), "8-9");
    assert!(frame.connector.width >= 0.0);
    assert_eq!(frame.connector.left, frame.left_of(HandleId::Second) + 10.0 - 1.0);
    assert!(frame.connector.left <= frame.connector.right());
}

#[test]
fn sample_without_pointer_keeps_value() {
    let mut slider = controller();
    slider.begin_drag(HandleId::Second);
    let frame = slider.sample(&GEOMETRY).expect("dragging produces a frame");
    assert_eq!(frame.handle_values, [2, 8]);
}

#[test]
fn idle_slider_ignores_ticks_and_pointer() {
    let mut slider = controller();
    slider.record_pointer(pointer_for(0));
    assert!(slider.sample(&GEOMETRY).is_none());
    assert_eq!(slider.values(), (2, 8));
}

#[test]
fn release_returns_to_idle_once() {
    let mut slider = controller();
    slider.begin_drag(HandleId::First);
    slider.record_pointer(pointer_for(4));
    slider.sample(&GEOMETRY);

    assert_eq!(slider.end_drag(), Some(HandleId::First));
    assert_eq!(slider.drag_state(), DragState::Idle);
    assert_eq!(slider.end_drag(), None);

    slider.record_pointer(pointer_for(0));
    assert!(slider.sample(&GEOMETRY).is_none());
    assert_eq!(slider.values(), (4, 8));
}

#[test]
fn second_press_replaces_open_session() {
    let mut slider = controller();
    slider.begin_drag(HandleId::First);
    slider.record_pointer(pointer_for(1));

    let start = slider.begin_drag(HandleId::Second);
    assert_eq!(start.replaced, Some(HandleId::First));
    assert_eq!(slider.drag_state(), DragState::Dragging(HandleId::Second));

    // the pointer from the replaced session is not carried over
    let frame = slider.sample(&GEOMETRY).expect("dragging produces a frame");
    assert_eq!(frame.handle_values, [2, 8]);
    assert_eq!(frame.tooltip.map(|t| t.host), Some(HandleId::Second));
}

#[test]
fn tooltip_uses_all_labels_then_offset() {
    let config = SliderConfig {
        min: 5,
        max: 10,
        value1: 5,
        value2: 10,
        all_labels: vec!["five".into(), "six".into(), "seven".into()],
        ..SliderConfig::default()
    };
    let geometry = SliderGeometry::new(0.0, 100.0, 10.0);
    let mut slider = RangeSliderController::new(&config).expect("valid config");

    slider.begin_drag(HandleId::First);
    slider.record_pointer(40.0);
    let frame = slider.sample(&geometry).expect("dragging produces a frame");
    assert_eq!(frame.handle_values[0], 7);
    assert_eq!(frame.tooltip.expect("tooltip while dragging").text, "seven");

    slider.record_pointer(80.0);
    let frame = slider.sample(&geometry).expect("dragging produces a frame");
    assert_eq!(frame.tooltip.expect("tooltip while dragging").text, "4");
}

#[test]
fn resize_moves_pixels_not_values() {
    let slider = controller();
    let before = slider.frame(&GEOMETRY);
    let after = slider.resize(&SliderGeometry::new(10.0, 1000.0, 20.0));

    assert_eq!(after.hidden_value(), before.hidden_value());
    assert_eq!(after.handle_values, before.handle_values);
    assert_eq!(before.handle_left, [90.0, 390.0]);
    assert_eq!(after.handle_left, [190.0, 790.0]);
}

#[test]
fn frames_are_idempotent() {
    let mut slider = controller();
    slider.begin_drag(HandleId::First);
    slider.record_pointer(pointer_for(6));
    let first = slider.sample(&GEOMETRY);
    let second = slider.sample(&GEOMETRY);
    assert_eq!(first, second);
    assert_eq!(slider.frame(&GEOMETRY), slider.frame(&GEOMETRY));
}
