use leptos::html::Div;
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;

use crate::{
    application::SliderConfig,
    domain::{logging::LogComponent, slider::Selection},
    infrastructure::dom::RangeSliderWidget,
    log_error,
    time_utils::{format_minutes_label, time_of_day_labels},
};

/// Minutes covered by one step of the demo picker.
const DEMO_STEP_MINUTES: u32 = 15;

pub const SLIDER_STYLES: &str = r#"
.time-picker {
    padding: 24px 16px 8px;
    user-select: none;
}

.time-picker-container {
    position: relative;
}

.slider {
    position: relative;
    height: 6px;
    background: rgba(255, 255, 255, 0.2);
    border-radius: 3px;
}

.handle {
    position: absolute;
    top: -7px;
    width: 20px;
    height: 20px;
    background: #72c685;
    border-radius: 50%;
    cursor: grab;
    z-index: 2;
}

.handle.active {
    cursor: grabbing;
    box-shadow: 0 0 0 6px rgba(114, 198, 133, 0.3);
}

.connector {
    position: absolute;
    top: 0;
    height: 6px;
    background: #72c685;
    z-index: 1;
}

.ticks-container {
    display: flex;
    justify-content: space-between;
    margin-top: 12px;
}

.tick {
    position: relative;
    width: 1px;
    height: 6px;
    background: rgba(255, 255, 255, 0.4);
    font-size: 11px;
    white-space: nowrap;
    text-indent: -14px;
    line-height: 28px;
}

.tooltip {
    position: absolute;
    bottom: 28px;
    left: 50%;
    transform: translateX(-50%);
    background: rgba(0, 0, 0, 0.9);
    color: white;
    padding: 4px 8px;
    border-radius: 4px;
    font-size: 12px;
    font-family: 'Courier New', monospace;
    white-space: nowrap;
    pointer-events: none;
}
"#;

/// 🎚️ Leptos wrapper around [`RangeSliderWidget`].
///
/// The widget is built after the first layout pass so handle positions see real
/// geometry, and torn down with the owning scope.
#[component]
pub fn RangeSlider(
    config: SliderConfig,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] on_change: Option<Callback<Selection>>,
) -> impl IntoView {
    let root_ref = create_node_ref::<Div>();
    let widget: Rc<RefCell<Option<RangeSliderWidget>>> = Rc::new(RefCell::new(None));

    let slot = widget.clone();
    root_ref.on_load(move |root| {
        let root: web_sys::HtmlElement = (*root).clone().unchecked_into();
        request_animation_frame(move || match RangeSliderWidget::mount(root, &config) {
            Ok(mounted) => {
                if let Some(cb) = on_change {
                    cb.call(mounted.selection());
                    mounted.set_on_change(move |selection| cb.call(selection));
                }
                *slot.borrow_mut() = Some(mounted);
            }
            Err(e) => {
                log_error!(LogComponent::Presentation("RangeSlider"), "❌ mount failed: {}", e);
            }
        });
    });

    on_cleanup(move || {
        if let Some(mounted) = widget.borrow_mut().take() {
            mounted.destroy();
        }
    });

    view! { <div id=id node_ref=root_ref></div> }
}

fn demo_config() -> SliderConfig {
    let steps = (crate::time_utils::MINUTES_PER_DAY / DEMO_STEP_MINUTES) as i32;
    SliderConfig {
        min: 0,
        max: steps,
        value1: 8 * 60 / DEMO_STEP_MINUTES as i32,
        value2: 17 * 60 / DEMO_STEP_MINUTES as i32,
        labels: time_of_day_labels(6 * 60),
        step: 1,
        all_labels: time_of_day_labels(DEMO_STEP_MINUTES),
        ..SliderConfig::default()
    }
}

/// 🕒 Demo page: a working-hours picker over one day.
#[component]
pub fn App() -> impl IntoView {
    let (selection, set_selection) = create_signal(None::<Selection>);
    let on_change = Callback::new(move |s: Selection| set_selection.set(Some(s)));

    let summary = move || match selection.get() {
        Some(s) => format!(
            "{} to {}",
            format_minutes_label(s.low as u32 * DEMO_STEP_MINUTES),
            format_minutes_label(s.high as u32 * DEMO_STEP_MINUTES)
        ),
        None => "…".to_string(),
    };

    view! {
        <style>{SLIDER_STYLES}</style>
        <div class="range-slider-demo">
            <h1>"Working hours"</h1>
            <RangeSlider config=demo_config() id="hours" on_change=on_change />
            <p class="status">{summary}</p>
        </div>
    }
}
