use wasm_bindgen::prelude::*;

use crate::application::SliderConfig;
use crate::domain::logging::{LogComponent, get_logger};
use crate::infrastructure::dom::RangeSliderWidget;
use crate::log_warn;

/// JavaScript entry point for a range slider.
///
/// ```js
/// const picker = new RangeSlider("#hours", { min: 0, max: 24, value1: 8, value2: 17 });
/// picker.hiddenValue; // "8-17"
/// ```
#[wasm_bindgen(js_name = RangeSlider)]
pub struct RangeSliderApi {
    widget: RangeSliderWidget,
}

#[wasm_bindgen(js_class = RangeSlider)]
impl RangeSliderApi {
    /// Build a slider inside the element matched by `container`.
    #[wasm_bindgen(constructor)]
    pub fn new(container: String, options: JsValue) -> Result<RangeSliderApi, JsValue> {
        let config = SliderConfig::from_js(&options).map_err(|e| {
            get_logger().error(LogComponent::Presentation("WASM"), &e.to_string());
            JsValue::from(e)
        })?;
        let widget = RangeSliderWidget::attach(&container, &config)?;
        Ok(Self { widget })
    }

    #[wasm_bindgen(getter)]
    pub fn value1(&self) -> i32 {
        self.widget.values().0
    }

    #[wasm_bindgen(getter)]
    pub fn value2(&self) -> i32 {
        self.widget.values().1
    }

    #[wasm_bindgen(getter)]
    pub fn low(&self) -> i32 {
        self.widget.selection().low
    }

    #[wasm_bindgen(getter)]
    pub fn high(&self) -> i32 {
        self.widget.selection().high
    }

    /// The `"<low>-<high>"` string mirrored in the hidden input.
    #[wasm_bindgen(getter, js_name = hiddenValue)]
    pub fn hidden_value(&self) -> String {
        self.widget.hidden_value()
    }

    /// Register `callback(low, high)` for selection changes.
    #[wasm_bindgen(js_name = onChange)]
    pub fn on_change(&self, callback: js_sys::Function) {
        self.widget.set_on_change(move |selection| {
            if let Err(err) = callback.call2(
                &JsValue::NULL,
                &JsValue::from(selection.low),
                &JsValue::from(selection.high),
            ) {
                log_warn!(LogComponent::Presentation("WASM"), "⚠️ onChange threw: {:?}", err);
            }
        });
    }

    /// Re-place handles for the current layout, as on window resize.
    pub fn refresh(&self) {
        self.widget.refresh();
    }

    /// Remove listeners, timer and generated nodes.
    pub fn destroy(&self) {
        self.widget.destroy();
    }
}
