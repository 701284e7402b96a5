#![cfg(target_arch = "wasm32")]

use range_slider_wasm::application::SliderConfig;
use range_slider_wasm::infrastructure::dom::RangeSliderWidget;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement, HtmlInputElement, MouseEvent, MouseEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn host(id: &str) -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let host = document
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    host.set_id(id);
    host.style().set_property("width", "400px").unwrap();
    document.body().unwrap().append_child(&host).unwrap();
    host
}

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn find(root: &HtmlElement, selector: &str) -> Element {
    root.query_selector(selector).unwrap().unwrap()
}

/// Client X that lands on `value` for the default 0..10 slider.
fn pointer_for(root: &HtmlElement, value: i32) -> i32 {
    let rect = find(root, ".slider").get_bounding_client_rect();
    (rect.left() + rect.width() * value as f64 / 10.0).round() as i32
}

fn fire(target: &web_sys::EventTarget, kind: &str, client_x: i32) {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_client_x(client_x);
    let event = MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

fn is_active(root: &HtmlElement, handle: &str) -> bool {
    find(root, handle).class_list().contains("active")
}

fn tooltip_host(root: &HtmlElement) -> Option<Element> {
    root.query_selector(".tooltip").unwrap().and_then(|t| t.parent_element())
}

#[wasm_bindgen_test]
fn attach_builds_tree_and_hidden_input() {
    let root = host("picker-attach");
    let widget = RangeSliderWidget::attach("#picker-attach", &SliderConfig::default()).unwrap();

    assert!(root.class_list().contains("time-picker"));
    let document = web_sys::window().unwrap().document().unwrap();
    let input = document
        .get_element_by_id("picker-attach-min-max")
        .unwrap()
        .dyn_into::<HtmlInputElement>()
        .unwrap();
    assert_eq!(input.get_attribute("value").as_deref(), Some("2-8"));
    assert_eq!(widget.hidden_value(), "2-8");

    let ticks = root.query_selector_all(".tick").unwrap();
    assert_eq!(ticks.length(), 11);

    let container = root.query_selector(".time-picker-container").unwrap().unwrap();
    assert_eq!(container.get_attribute("min").as_deref(), Some("2"));
    assert_eq!(container.get_attribute("max").as_deref(), Some("8"));

    widget.destroy();
}

#[wasm_bindgen_test]
fn refresh_keeps_selection() {
    let root = host("picker-resize");
    let widget = RangeSliderWidget::mount(root.clone(), &SliderConfig::default()).unwrap();
    root.style().set_property("width", "800px").unwrap();
    widget.refresh();
    assert_eq!(widget.hidden_value(), "2-8");
    assert_eq!(widget.values(), (2, 8));
    widget.destroy();
}

#[wasm_bindgen_test]
fn destroy_removes_generated_nodes() {
    let root = host("picker-destroy");
    let widget = RangeSliderWidget::attach("#picker-destroy", &SliderConfig::default()).unwrap();
    widget.destroy();
    widget.destroy();
    assert!(root.query_selector(".slider").unwrap().is_none());
    assert!(!root.class_list().contains("time-picker"));
}

#[wasm_bindgen_test]
fn missing_container_is_reported() {
    let result = RangeSliderWidget::attach("#does-not-exist", &SliderConfig::default());
    assert!(result.is_err());
}

#[wasm_bindgen_test]
fn drag_and_release_moves_handle_and_cleans_up() {
    let root = host("picker-drag");
    let widget = RangeSliderWidget::mount(root.clone(), &SliderConfig::default()).unwrap();
    let handle1 = find(&root, ".handle1");

    fire(&handle1, "mousedown", pointer_for(&root, 2));
    assert!(widget.is_dragging());
    assert!(is_active(&root, ".handle1"));
    assert!(!is_active(&root, ".handle2"));
    assert_eq!(tooltip_host(&root), Some(handle1.clone()));

    fire(&document(), "mousemove", pointer_for(&root, 9));
    fire(&document(), "mouseup", pointer_for(&root, 9));

    assert!(!widget.is_dragging());
    assert_eq!(widget.values(), (9, 8));
    assert_eq!(widget.hidden_value(), "8-9");
    assert!(!is_active(&root, ".handle1"));
    assert!(tooltip_host(&root).is_none());
    widget.destroy();
}

#[wasm_bindgen_test]
async fn pointer_moves_after_release_are_ignored() {
    let root = host("picker-release");
    let widget = RangeSliderWidget::mount(root.clone(), &SliderConfig::default()).unwrap();
    let handle2 = find(&root, ".handle2");

    fire(&handle2, "mousedown", pointer_for(&root, 8));
    fire(&document(), "mousemove", pointer_for(&root, 6));
    fire(&document(), "mouseup", pointer_for(&root, 6));
    assert_eq!(widget.hidden_value(), "2-6");

    fire(&document(), "mousemove", pointer_for(&root, 0));
    TimeoutFuture::new(150).await;
    fire(&document(), "mouseup", pointer_for(&root, 0));

    assert_eq!(widget.values(), (2, 6));
    assert_eq!(widget.hidden_value(), "2-6");
    widget.destroy();
}

#[wasm_bindgen_test]
fn second_press_moves_tooltip_and_active_class() {
    let root = host("picker-switch");
    let widget = RangeSliderWidget::mount(root.clone(), &SliderConfig::default()).unwrap();
    let handle1 = find(&root, ".handle1");
    let handle2 = find(&root, ".handle2");

    fire(&handle1, "mousedown", pointer_for(&root, 2));
    fire(&handle2, "mousedown", pointer_for(&root, 8));

    assert!(!is_active(&root, ".handle1"));
    assert!(is_active(&root, ".handle2"));
    assert_eq!(tooltip_host(&root), Some(handle2));
    assert_eq!(root.query_selector_all(".tooltip").unwrap().length(), 1);

    fire(&document(), "mouseup", pointer_for(&root, 8));
    assert!(tooltip_host(&root).is_none());
    widget.destroy();
}

#[wasm_bindgen_test]
async fn held_handle_follows_pointer_on_tick() {
    let root = host("picker-tick");
    let widget = RangeSliderWidget::mount(root.clone(), &SliderConfig::default()).unwrap();
    let handle2 = find(&root, ".handle2");

    fire(&handle2, "mousedown", pointer_for(&root, 8));
    fire(&document(), "mousemove", pointer_for(&root, 3));
    TimeoutFuture::new(150).await;

    assert!(widget.is_dragging());
    assert_eq!(widget.hidden_value(), "2-3");
    assert_eq!(find(&root, ".tooltip").text_content().as_deref(), Some("3"));

    fire(&document(), "mouseup", pointer_for(&root, 3));
    widget.destroy();
}

#[wasm_bindgen_test]
fn throwing_change_callback_does_not_break_drag() {
    use range_slider_wasm::presentation::wasm_api::RangeSliderApi;

    let root = host("picker-throwing");
    let api = RangeSliderApi::new("#picker-throwing".into(), wasm_bindgen::JsValue::UNDEFINED).unwrap();
    api.on_change(js_sys::Function::new_with_args("low, high", "throw new Error('rejected ' + low)"));

    fire(&find(&root, ".handle1"), "mousedown", pointer_for(&root, 2));
    fire(&document(), "mousemove", pointer_for(&root, 5));
    fire(&document(), "mouseup", pointer_for(&root, 5));

    assert_eq!(api.hidden_value(), "5-8");
    assert!(!is_active(&root, ".handle1"));
    api.destroy();
}
