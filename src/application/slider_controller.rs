use crate::application::config::SliderConfig;
use crate::domain::{
    errors::SliderResult,
    logging::LogComponent,
    slider::{
        ConnectorLayout, DragState, HandleId, HandlePair, Selection, SliderGeometry, Tick,
        TickLabels, TooltipLabels, ValueSpace,
    },
};
use crate::log_debug;

/// Tooltip placement for the frame being drawn
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipView {
    pub host: HandleId,
    pub text: String,
}

/// Everything the view needs to draw one state of the slider.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderFrame {
    pub handle_left: [f64; 2],
    pub handle_values: [i32; 2],
    pub connector: ConnectorLayout,
    pub selection: Selection,
    pub tooltip: Option<TooltipView>,
}

impl SliderFrame {
    /// Text mirrored into the hidden form input.
    pub fn hidden_value(&self) -> String {
        self.selection.to_string()
    }

    pub fn left_of(&self, handle: HandleId) -> f64 {
        self.handle_left[handle.index()]
    }
}

/// Outcome of a pointer-down on a handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragStart {
    pub handle: HandleId,
    /// Session that was still open and must have its tick cancelled.
    pub replaced: Option<HandleId>,
}

/// Application service driving a two-handle range slider.
///
/// Holds explicit state only; every derived quantity (positions, connector,
/// selection) is recomputed from it on demand.
#[derive(Debug, Clone)]
pub struct RangeSliderController {
    space: ValueSpace,
    handles: HandlePair,
    tick_labels: TickLabels,
    tooltip_labels: TooltipLabels,
    drag: DragState,
    pointer_x: Option<f64>,
}

impl RangeSliderController {
    pub fn new(config: &SliderConfig) -> SliderResult<Self> {
        config.validate()?;
        let space = ValueSpace::new(config.min, config.max, config.step);
        let handles = HandlePair::new(config.value1, config.value2, &space);
        log_debug!(
            LogComponent::Application("Slider"),
            "🎚️ Slider [{}..{}] step {} ({} positions), selection {}",
            space.min(),
            space.upper_bound(),
            space.step(),
            space.step_count(),
            handles.selection()
        );
        Ok(Self {
            space,
            handles,
            tick_labels: TickLabels::new(config.labels.clone()),
            tooltip_labels: TooltipLabels::new(config.all_labels.clone()),
            drag: DragState::Idle,
            pointer_x: None,
        })
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn value(&self, handle: HandleId) -> i32 {
        self.handles.get(handle).value()
    }

    pub fn values(&self) -> (i32, i32) {
        self.handles.values()
    }

    pub fn selection(&self) -> Selection {
        self.handles.selection()
    }

    pub fn ticks(&self) -> Vec<Tick> {
        self.tick_labels.ticks(self.space.step_count())
    }

    pub fn tooltip_text(&self, handle: HandleId) -> String {
        self.tooltip_labels
            .text_for(self.space.offset(self.value(handle)))
    }

    /// Pointer-down on `handle`: Idle -> Dragging(handle).
    pub fn begin_drag(&mut self, handle: HandleId) -> DragStart {
        let replaced = self.drag.begin(handle);
        self.pointer_x = None;
        log_debug!(
            LogComponent::Application("Drag"),
            "▶️ drag {} (replaced: {:?})",
            handle,
            replaced
        );
        DragStart { handle, replaced }
    }

    /// Remember the latest pointer X. Ignored while idle.
    pub fn record_pointer(&mut self, client_x: f64) {
        if self.drag.is_dragging() {
            self.pointer_x = Some(client_x);
        }
    }

    /// One sampling tick: move the dragged handle under the last pointer position.
    /// Returns `None` while idle.
    pub fn sample(&mut self, geometry: &SliderGeometry) -> Option<SliderFrame> {
        let handle = self.drag.active_handle()?;
        if let Some(x) = self.pointer_x {
            let value = self.space.value_from_pointer(x, geometry);
            if self.handles.get_mut(handle).set_value(value, &self.space) {
                log_debug!(LogComponent::Application("Drag"), "{} -> {}", handle, value);
            }
        }
        Some(self.frame(geometry))
    }

    /// Pointer-up: Dragging -> Idle. Returns the released handle, `None` if nothing was dragged.
    pub fn end_drag(&mut self) -> Option<HandleId> {
        let released = self.drag.end();
        self.pointer_x = None;
        if let Some(handle) = released {
            log_debug!(
                LogComponent::Application("Drag"),
                "⏹️ release {} at {}, selection {}",
                handle,
                self.value(handle),
                self.selection()
            );
        }
        released
    }

    /// Viewport resize: values stay, pixel placement follows the new geometry.
    pub fn resize(&self, geometry: &SliderGeometry) -> SliderFrame {
        self.frame(geometry)
    }

    /// Current visual state for `geometry`. Pure; repeated calls yield equal frames.
    pub fn frame(&self, geometry: &SliderGeometry) -> SliderFrame {
        let (v1, v2) = self.values();
        let left1 = self.space.position_from_value(v1, geometry);
        let left2 = self.space.position_from_value(v2, geometry);
        let tooltip = self.drag.active_handle().map(|host| TooltipView {
            host,
            text: self.tooltip_text(host),
        });
        SliderFrame {
            handle_left: [left1, left2],
            handle_values: [v1, v2],
            connector: ConnectorLayout::between(left1, left2, geometry.handle_width),
            selection: self.selection(),
            tooltip,
        }
    }
}
