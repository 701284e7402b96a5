pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::{DragState, Handle, HandlePair};
pub use services::{Tick, TickLabels, TooltipLabels};
pub use value_objects::{ConnectorLayout, HandleId, Selection, SliderGeometry, ValueSpace};
