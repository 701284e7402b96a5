pub mod config;
pub mod slider_controller;

pub use config::SliderConfig;
pub use slider_controller::{DragStart, RangeSliderController, SliderFrame, TooltipView};
