use derive_more::Display;
use strum::{AsRefStr, EnumIter};

/// Round half towards positive infinity, matching `Math.round` in the browser.
pub fn js_round(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Value Object - which of the two handles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, AsRefStr)]
pub enum HandleId {
    #[display(fmt = "handle1")]
    #[strum(serialize = "handle1")]
    First,
    #[display(fmt = "handle2")]
    #[strum(serialize = "handle2")]
    Second,
}

impl HandleId {
    pub fn index(self) -> usize {
        match self {
            HandleId::First => 0,
            HandleId::Second => 1,
        }
    }
}

/// Value Object - bounding box of the slider track plus handle size, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SliderGeometry {
    pub left: f64,
    pub width: f64,
    pub handle_width: f64,
}

impl SliderGeometry {
    pub fn new(left: f64, width: f64, handle_width: f64) -> Self {
        Self { left, width, handle_width }
    }
}

/// Value Object - discretised axis.
///
/// `max` is kept one below the bound the caller passed, so valid handle values
/// span `[min, max + 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueSpace {
    min: i32,
    max: i32,
    step: i32,
}

impl ValueSpace {
    /// `step` must be positive; callers validate configuration first.
    pub fn new(min: i32, max: i32, step: i32) -> Self {
        Self { min, max: max.saturating_sub(1), step: step.max(1) }
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    /// Internal maximum (caller's bound minus one).
    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn step(&self) -> i32 {
        self.step
    }

    /// Highest value a handle may take.
    pub fn upper_bound(&self) -> i32 {
        self.max.saturating_add(1)
    }

    /// Width of the axis (`upper_bound - min`), computed without overflow.
    pub fn span(&self) -> i64 {
        self.max as i64 - self.min as i64 + 1
    }

    pub fn step_count(&self) -> i32 {
        (self.span() / self.step as i64).clamp(0, i32::MAX as i64) as i32
    }

    pub fn clamp(&self, value: i32) -> i32 {
        value.max(self.min).min(self.upper_bound())
    }

    /// Index of `value` into the tooltip labels.
    pub fn offset(&self, value: i32) -> i64 {
        value as i64 - self.min as i64
    }

    /// Discrete value under a pointer at client X `x`.
    pub fn value_from_pointer(&self, x: f64, geometry: &SliderGeometry) -> i32 {
        let steps = self.step_count();
        if steps == 0 || geometry.width <= 0.0 || !x.is_finite() {
            return self.min;
        }
        let ratio = (x - geometry.left) / geometry.width;
        let value = js_round(ratio * steps as f64) + self.min as f64;
        value.clamp(self.min as f64, self.upper_bound() as f64) as i32
    }

    /// Left offset of a handle showing `value`, relative to the slider.
    pub fn position_from_value(&self, value: i32, geometry: &SliderGeometry) -> f64 {
        let value = self.clamp(value);
        let half_handle = geometry.handle_width / 2.0;
        let steps = self.step_count();
        if steps == 0 {
            return -half_handle;
        }
        js_round((geometry.width / steps as f64) * self.offset(value) as f64) - half_handle
    }
}

/// Value Object - numeric ordering of the two handle values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display(fmt = "{}-{}", low, high)]
pub struct Selection {
    pub low: i32,
    pub high: i32,
}

impl Selection {
    pub fn from_values(a: i32, b: i32) -> Self {
        Self { low: a.min(b), high: a.max(b) }
    }
}

/// Value Object - connector bar placement within the slider
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ConnectorLayout {
    pub left: f64,
    pub width: f64,
}

/// Pixels the connector is pulled left so it tucks under the handle edge.
const CONNECTOR_NUDGE_PX: f64 = 1.0;

impl ConnectorLayout {
    /// Span between two handle offsets, ordered visually left to right.
    pub fn between(a_left: f64, b_left: f64, handle_width: f64) -> Self {
        let a = a_left.max(0.0);
        let b = b_left.max(0.0);
        let (lo, hi) = if a > b { (b, a) } else { (a, b) };
        Self {
            left: lo + handle_width / 2.0 - CONNECTOR_NUDGE_PX,
            width: hi - lo,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}
