use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement};

use crate::application::SliderFrame;
use crate::domain::{
    errors::{SliderError, SliderResult},
    slider::{HandleId, SliderGeometry, Tick},
};

pub const ROOT_CLASS: &str = "time-picker";
pub const CONTAINER_CLASS: &str = "time-picker-container";
pub const ACTIVE_CLASS: &str = "active";

/// DOM nodes owned by one slider.
pub struct SliderElements {
    pub root: HtmlElement,
    pub container: HtmlElement,
    pub slider: HtmlElement,
    pub ticks: HtmlElement,
    pub handles: [HtmlElement; 2],
    pub connector: HtmlElement,
    pub tooltip: HtmlElement,
    pub min_max_input: HtmlInputElement,
}

fn create<T: JsCast>(document: &Document, tag: &str, classes: &[&str]) -> SliderResult<T> {
    let element = document
        .create_element(tag)
        .map_err(|e| SliderError::dom(&format!("create <{}>", tag), e))?;
    for class in classes {
        element
            .class_list()
            .add_1(class)
            .map_err(|e| SliderError::dom("add class", e))?;
    }
    element
        .dyn_into::<T>()
        .map_err(|_| SliderError::DomOperation(format!("<{}> has unexpected type", tag)))
}

fn append(parent: &HtmlElement, child: &HtmlElement) -> SliderResult<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| SliderError::dom("append child", e))
}

fn set_px(element: &HtmlElement, property: &str, value: f64) -> SliderResult<()> {
    element
        .style()
        .set_property(property, &format!("{}px", value))
        .map_err(|e| SliderError::dom(property, e))
}

impl SliderElements {
    /// Build the slider tree under `root`.
    pub fn build(
        document: &Document,
        root: HtmlElement,
        input_id: &str,
        ticks: &[Tick],
    ) -> SliderResult<Self> {
        let container: HtmlElement = create(document, "div", &[CONTAINER_CLASS])?;
        append(&root, &container)?;
        root.class_list()
            .add_1(ROOT_CLASS)
            .map_err(|e| SliderError::dom("add root class", e))?;

        let tooltip: HtmlElement = create(document, "div", &["tooltip"])?;

        let slider: HtmlElement = create(document, "div", &["slider"])?;
        append(&container, &slider)?;

        let ticks_container: HtmlElement = create(document, "div", &["ticks-container"])?;
        for tick in ticks {
            let node: HtmlElement = create(document, "div", &["tick"])?;
            if let Some(label) = &tick.label {
                node.set_inner_text(label);
            }
            append(&ticks_container, &node)?;
        }
        append(&container, &ticks_container)?;

        let first: HtmlElement =
            create(document, "span", &["handle", HandleId::First.as_ref()])?;
        append(&slider, &first)?;
        let second: HtmlElement =
            create(document, "span", &["handle", HandleId::Second.as_ref()])?;
        append(&slider, &second)?;

        let connector: HtmlElement = create(document, "span", &["connector"])?;
        append(&slider, &connector)?;

        let min_max_input: HtmlInputElement = create(document, "input", &["min-max"])?;
        min_max_input.set_hidden(true);
        min_max_input.set_id(input_id);
        append(&slider, &min_max_input)?;

        Ok(Self {
            root,
            container,
            slider,
            ticks: ticks_container,
            handles: [first, second],
            connector,
            tooltip,
            min_max_input,
        })
    }

    pub fn handle(&self, id: HandleId) -> &HtmlElement {
        &self.handles[id.index()]
    }

    /// Current track box and handle width as laid out by the browser.
    pub fn geometry(&self) -> SliderGeometry {
        let rect = self.slider.get_bounding_client_rect();
        SliderGeometry::new(
            rect.left(),
            rect.width(),
            self.handles[0].offset_width() as f64,
        )
    }

    /// Write a frame into the DOM. Applying the same frame twice changes nothing.
    pub fn apply(&self, frame: &SliderFrame) -> SliderResult<()> {
        for (element, (left, value)) in self
            .handles
            .iter()
            .zip(frame.handle_left.iter().zip(frame.handle_values.iter()))
        {
            set_px(element, "left", *left)?;
            element
                .set_attribute("value", &value.to_string())
                .map_err(|e| SliderError::dom("handle value", e))?;
        }

        set_px(&self.connector, "left", frame.connector.left)?;
        set_px(&self.connector, "width", frame.connector.width)?;

        self.container
            .set_attribute("min", &frame.selection.low.to_string())
            .map_err(|e| SliderError::dom("container min", e))?;
        self.container
            .set_attribute("max", &frame.selection.high.to_string())
            .map_err(|e| SliderError::dom("container max", e))?;

        let hidden = frame.hidden_value();
        self.min_max_input
            .set_attribute("value", &hidden)
            .map_err(|e| SliderError::dom("hidden input", e))?;
        self.min_max_input.set_value(&hidden);

        if let Some(tooltip) = &frame.tooltip {
            self.tooltip.set_inner_text(&tooltip.text);
        }
        Ok(())
    }

    pub fn set_active(&self, id: HandleId, active: bool) -> SliderResult<()> {
        let classes = self.handle(id).class_list();
        let result = if active { classes.add_1(ACTIVE_CLASS) } else { classes.remove_1(ACTIVE_CLASS) };
        result.map_err(|e| SliderError::dom("toggle active", e))
    }

    pub fn attach_tooltip(&self, id: HandleId) -> SliderResult<()> {
        append(self.handle(id), &self.tooltip)
    }

    /// Take the tooltip out of whichever handle holds it.
    pub fn detach_tooltip(&self) {
        self.tooltip.remove();
    }

    /// Remove everything this slider added under its root.
    pub fn detach(&self) {
        self.tooltip.remove();
        self.container.remove();
        let _ = self.root.class_list().remove_1(ROOT_CLASS);
    }
}
