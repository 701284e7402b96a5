use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::domain::errors::{SliderError, SliderResult};

/// Default period of the drag sampling tick.
pub const DEFAULT_SAMPLE_INTERVAL_MS: u32 = 50;

/// Most discrete positions a slider may have; each one becomes a tick node.
pub const MAX_STEP_COUNT: i64 = 10_000;

/// Construction parameters for a range slider.
///
/// Accepts camelCase keys from JavaScript; snake_case aliases are kept for
/// configs written on the Rust side.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SliderConfig {
    pub min: i32,
    /// Exclusive-style upper bound; handles can still reach this value.
    pub max: i32,
    pub value1: i32,
    pub value2: i32,
    pub labels: Vec<String>,
    pub step: i32,
    #[serde(alias = "all_labels")]
    pub all_labels: Vec<String>,
    #[serde(alias = "sample_interval_ms")]
    pub sample_interval_ms: u32,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0,
            max: 10,
            value1: 2,
            value2: 8,
            labels: Vec::new(),
            step: 1,
            all_labels: Vec::new(),
            sample_interval_ms: DEFAULT_SAMPLE_INTERVAL_MS,
        }
    }
}

impl SliderConfig {
    /// Parse an options object passed from JavaScript. `undefined`/`null` yields defaults.
    pub fn from_js(options: &JsValue) -> SliderResult<Self> {
        use gloo::utils::format::JsValueSerdeExt;

        if options.is_undefined() || options.is_null() {
            return Ok(Self::default());
        }
        let config: Self = options
            .into_serde()
            .map_err(|e| SliderError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(json: &str) -> SliderResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| SliderError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject parameters that would make the axis meaningless.
    pub fn validate(&self) -> SliderResult<()> {
        if self.step <= 0 {
            return Err(SliderError::InvalidConfig(format!(
                "step must be positive, got {}",
                self.step
            )));
        }
        if self.max <= self.min {
            return Err(SliderError::InvalidConfig(format!(
                "max ({}) must be greater than min ({})",
                self.max, self.min
            )));
        }
        let step_count = (self.max as i64 - self.min as i64) / self.step as i64;
        if step_count > MAX_STEP_COUNT {
            return Err(SliderError::InvalidConfig(format!(
                "{} positions exceed the limit of {}",
                step_count, MAX_STEP_COUNT
            )));
        }
        if self.sample_interval_ms == 0 {
            return Err(SliderError::InvalidConfig(
                "sampleIntervalMs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
