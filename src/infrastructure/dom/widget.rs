use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Interval;
use leptos::ev;
use strum::IntoEnumIterator;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};

use super::elements::SliderElements;
use crate::application::{RangeSliderController, SliderConfig, SliderFrame};
use crate::domain::{
    errors::{SliderError, SliderResult},
    logging::LogComponent,
    slider::{HandleId, Selection},
};
use crate::event_utils::{EventListenerHandle, event_listener};
use crate::{log_debug, log_warn};

/// Called with the new selection whenever it changes.
pub type ChangeCallback = Rc<dyn Fn(Selection)>;

/// Resources living only as long as one drag.
struct DragSession {
    handle: HandleId,
    _ticker: Interval,
    _pointer: EventListenerHandle,
}

struct WidgetInner {
    controller: RangeSliderController,
    elements: SliderElements,
    document: Document,
    sample_interval_ms: u32,
    session: Option<DragSession>,
    listeners: Vec<EventListenerHandle>,
    on_change: Option<ChangeCallback>,
    last_selection: Selection,
    torn_down: bool,
}

impl WidgetInner {
    fn render(&mut self, frame: &SliderFrame) -> Option<(ChangeCallback, Selection)> {
        if let Err(e) = self.elements.apply(frame) {
            log_warn!(LogComponent::Infrastructure("Dom"), "⚠️ frame not applied: {}", e);
        }
        if frame.selection == self.last_selection {
            return None;
        }
        self.last_selection = frame.selection;
        self.on_change.clone().map(|cb| (cb, frame.selection))
    }

    fn close_session(&mut self) {
        if let Some(session) = self.session.take() {
            if let Err(e) = self.elements.set_active(session.handle, false) {
                log_warn!(LogComponent::Infrastructure("Dom"), "⚠️ {}", e);
            }
            self.elements.detach_tooltip();
        }
    }

    fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.controller.end_drag();
        self.close_session();
        self.listeners.clear();
        self.elements.detach();
        log_debug!(LogComponent::Infrastructure("Dom"), "🧹 slider torn down");
    }
}

impl Drop for WidgetInner {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn notify(change: Option<(ChangeCallback, Selection)>) {
    if let Some((cb, selection)) = change {
        cb(selection);
    }
}

/// Live range slider bound to the page.
///
/// Cloning shares the same slider. When the last clone is dropped, or
/// [`RangeSliderWidget::destroy`] is called, every listener and timer is released
/// and the generated nodes are removed.
#[derive(Clone)]
pub struct RangeSliderWidget {
    inner: Rc<RefCell<WidgetInner>>,
}

impl RangeSliderWidget {
    /// Build a slider inside the element matched by `selector`.
    pub fn attach(selector: &str, config: &SliderConfig) -> SliderResult<Self> {
        let document = document()?;
        let root = document
            .query_selector(selector)
            .map_err(|e| SliderError::dom("query selector", e))?
            .ok_or_else(|| SliderError::ContainerNotFound(selector.to_string()))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| SliderError::ContainerNotFound(selector.to_string()))?;
        let input_id = format!("{}-min-max", selector.trim_start_matches('#'));
        Self::build(document, root, &input_id, config)
    }

    /// Build a slider inside an element the caller already holds.
    pub fn mount(root: HtmlElement, config: &SliderConfig) -> SliderResult<Self> {
        let document = document()?;
        let id = root.id();
        let base = if id.is_empty() { "range-slider".to_string() } else { id };
        Self::build(document, root, &format!("{}-min-max", base), config)
    }

    fn build(
        document: Document,
        root: HtmlElement,
        input_id: &str,
        config: &SliderConfig,
    ) -> SliderResult<Self> {
        let controller = RangeSliderController::new(config)?;
        let elements = SliderElements::build(&document, root, input_id, &controller.ticks())?;
        let frame = controller.frame(&elements.geometry());
        elements.apply(&frame)?;

        let widget = Self {
            inner: Rc::new(RefCell::new(WidgetInner {
                last_selection: frame.selection,
                controller,
                elements,
                document,
                sample_interval_ms: config.sample_interval_ms,
                session: None,
                listeners: Vec::new(),
                on_change: None,
                torn_down: false,
            })),
        };
        widget.register_listeners()?;
        log_debug!(
            LogComponent::Infrastructure("Dom"),
            "✅ slider #{} mounted with {}",
            input_id,
            frame.hidden_value()
        );
        Ok(widget)
    }

    fn register_listeners(&self) -> SliderResult<()> {
        let window = web_sys::window().ok_or(SliderError::DomUnavailable("window"))?;
        let mut listeners = Vec::with_capacity(4);
        {
            let state = self.inner.borrow();
            for id in HandleId::iter() {
                let weak = Rc::downgrade(&self.inner);
                listeners.push(event_listener(
                    state.elements.handle(id),
                    ev::mousedown,
                    move |_: MouseEvent| {
                        if let Some(inner) = weak.upgrade() {
                            Self::start_drag(&inner, id);
                        }
                    },
                ));
            }

            let weak = Rc::downgrade(&self.inner);
            listeners.push(event_listener(&state.document, ev::mouseup, move |_: MouseEvent| {
                if let Some(inner) = weak.upgrade() {
                    Self::stop_drag(&inner);
                }
            }));

            let weak = Rc::downgrade(&self.inner);
            listeners.push(event_listener(&window, ev::resize, move |_| {
                if let Some(inner) = weak.upgrade() {
                    Self::relayout(&inner);
                }
            }));
        }
        self.inner.borrow_mut().listeners = listeners;
        Ok(())
    }

    /// Idle -> Dragging: mark the handle, show the tooltip, start sampling.
    fn start_drag(inner: &Rc<RefCell<WidgetInner>>, handle: HandleId) {
        let change = {
            let Ok(mut state) = inner.try_borrow_mut() else {
                return;
            };
            let start = state.controller.begin_drag(handle);
            if start.replaced.is_some() {
                log_debug!(
                    LogComponent::Infrastructure("Dom"),
                    "cancelling stale drag of {:?}",
                    start.replaced
                );
            }
            state.close_session();

            if let Err(e) = state
                .elements
                .set_active(handle, true)
                .and_then(|_| state.elements.attach_tooltip(handle))
            {
                log_warn!(LogComponent::Infrastructure("Dom"), "⚠️ {}", e);
            }

            let weak = Rc::downgrade(inner);
            let ticker = Interval::new(state.sample_interval_ms, move || Self::tick(&weak));
            let weak = Rc::downgrade(inner);
            let pointer = event_listener(&state.document, ev::mousemove, move |e: MouseEvent| {
                if let Some(inner) = weak.upgrade() {
                    if let Ok(mut state) = inner.try_borrow_mut() {
                        state.controller.record_pointer(e.client_x() as f64);
                    }
                }
            });
            state.session = Some(DragSession { handle, _ticker: ticker, _pointer: pointer });

            let frame = state.controller.frame(&state.elements.geometry());
            state.render(&frame)
        };
        notify(change);
    }

    fn tick(weak: &Weak<RefCell<WidgetInner>>) {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        let change = {
            let Ok(mut state) = inner.try_borrow_mut() else {
                return;
            };
            let geometry = state.elements.geometry();
            match state.controller.sample(&geometry) {
                Some(frame) => state.render(&frame),
                None => None,
            }
        };
        notify(change);
    }

    /// Dragging -> Idle.
    fn stop_drag(inner: &Rc<RefCell<WidgetInner>>) {
        let change = {
            let Ok(mut state) = inner.try_borrow_mut() else {
                return;
            };
            if !state.controller.drag_state().is_dragging() {
                return;
            }
            // Take the pointer's final position into account; a release between
            // ticks would otherwise leave the handle one sample behind.
            let geometry = state.elements.geometry();
            let last = state.controller.sample(&geometry);
            let change = last.and_then(|frame| state.render(&frame));
            state.controller.end_drag();
            state.close_session();
            change
        };
        notify(change);
    }

    fn relayout(inner: &Rc<RefCell<WidgetInner>>) {
        let change = {
            let Ok(mut state) = inner.try_borrow_mut() else {
                return;
            };
            let frame = state.controller.resize(&state.elements.geometry());
            state.render(&frame)
        };
        notify(change);
    }

    /// Observe selection changes.
    pub fn set_on_change(&self, callback: impl Fn(Selection) + 'static) {
        self.inner.borrow_mut().on_change = Some(Rc::new(callback));
    }

    pub fn selection(&self) -> Selection {
        self.inner.borrow().controller.selection()
    }

    pub fn values(&self) -> (i32, i32) {
        self.inner.borrow().controller.values()
    }

    pub fn hidden_value(&self) -> String {
        self.inner.borrow().elements.min_max_input.value()
    }

    pub fn is_dragging(&self) -> bool {
        self.inner.borrow().controller.drag_state().is_dragging()
    }

    /// Recompute pixel placement without touching values, as a resize would.
    pub fn refresh(&self) {
        Self::relayout(&self.inner);
    }

    /// Release listeners and timer and remove the slider's nodes. Safe to call twice.
    pub fn destroy(&self) {
        self.inner.borrow_mut().teardown();
    }
}

fn document() -> SliderResult<Document> {
    web_sys::window()
        .ok_or(SliderError::DomUnavailable("window"))?
        .document()
        .ok_or(SliderError::DomUnavailable("document"))
}
