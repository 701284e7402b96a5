pub mod elements;
pub mod widget;

pub use elements::SliderElements;
pub use widget::{ChangeCallback, RangeSliderWidget};
