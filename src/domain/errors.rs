use wasm_bindgen::JsValue;

/// Errors surfaced while building or driving a slider.
///
/// Numeric input never fails: pointer positions and initial values are clamped,
/// missing labels fall back to blank or numeric text.
#[derive(Debug, Clone, PartialEq)]
pub enum SliderError {
    ContainerNotFound(String),
    DomUnavailable(&'static str),
    DomOperation(String),
    InvalidConfig(String),
}

impl std::fmt::Display for SliderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SliderError::ContainerNotFound(selector) => {
                write!(f, "Container Not Found: {}", selector)
            }
            SliderError::DomUnavailable(what) => write!(f, "DOM Unavailable: {}", what),
            SliderError::DomOperation(msg) => write!(f, "DOM Operation Failed: {}", msg),
            SliderError::InvalidConfig(msg) => write!(f, "Invalid Config: {}", msg),
        }
    }
}

impl std::error::Error for SliderError {}

impl SliderError {
    /// Wrap a failed `web_sys` call, keeping the JS error text when there is one.
    pub fn dom(context: &str, err: JsValue) -> Self {
        match err.as_string() {
            Some(text) => SliderError::DomOperation(format!("{}: {}", context, text)),
            None => SliderError::DomOperation(format!("{}: {:?}", context, err)),
        }
    }
}

impl From<SliderError> for JsValue {
    fn from(err: SliderError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type SliderResult<T> = Result<T, SliderError>;
