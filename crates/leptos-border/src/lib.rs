//! Leptos Border Hover Effect
//!
//! Highlights an element's border with a category color while the pointer is over it.
//! The state lives in a plain value (`BorderEffect`); the Leptos glue below only
//! applies the colors it returns to the element.

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Border width set once when the effect is attached
pub const BORDER_WIDTH: &str = "2px";

/// Hover state of a single element
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BorderEffect {
    initial: String,
    current: String,
    entered: bool,
}

impl BorderEffect {
    /// Remember the border color the element had before the effect was attached
    pub fn capture_initial(color: impl Into<String>) -> Self {
        let initial = color.into();
        Self {
            current: initial.clone(),
            initial,
            entered: false,
        }
    }

    /// Pointer entered: returns the color to apply
    pub fn on_enter(&mut self, color: impl Into<String>) -> &str {
        self.current = color.into();
        self.entered = true;
        &self.current
    }

    /// Pointer left: returns the captured initial color
    pub fn on_leave(&mut self) -> &str {
        self.current.clone_from(&self.initial);
        self.entered = false;
        &self.current
    }

    /// Color the element should show right now
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Color captured when the effect was attached
    pub fn initial(&self) -> &str {
        &self.initial
    }

    /// Whether the pointer is currently over the element
    pub fn is_entered(&self) -> bool {
        self.entered
    }
}

/// Border effect signals, one set per element
#[derive(Clone, Copy)]
pub struct BorderSignals {
    pub state_read: ReadSignal<Option<BorderEffect>>,
    pub state_write: WriteSignal<Option<BorderEffect>>,
}

pub fn create_border_signals() -> BorderSignals {
    let (state_read, state_write) = signal(None::<BorderEffect>);
    BorderSignals {
        state_read,
        state_write,
    }
}

/// Read the inline border color and fix the border width
fn capture(el: &web_sys::HtmlElement) -> BorderEffect {
    let style = el.style();
    let initial = style.get_property_value("border-color").unwrap_or_default();
    let _ = style.set_property("border-width", BORDER_WIDTH);
    BorderEffect::capture_initial(initial)
}

fn set_border_color(el: &web_sys::HtmlElement, color: &str) {
    let _ = el.style().set_property("border-color", color);
}

fn event_element(ev: &web_sys::MouseEvent) -> Option<web_sys::HtmlElement> {
    ev.current_target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlElement>().ok())
}

/// Current state, capturing from the element if the mount effect has not run yet
fn state_for(border: BorderSignals, el: &web_sys::HtmlElement) -> BorderEffect {
    border
        .state_read
        .get_untracked()
        .unwrap_or_else(|| capture(el))
}

/// Capture the initial border color once the element is mounted
pub fn bind_border_effect(border: BorderSignals, node_ref: NodeRef<html::Div>) {
    Effect::new(move |_| {
        if let Some(el) = node_ref.get() {
            if border.state_read.get_untracked().is_none() {
                border.state_write.set(Some(capture(&el)));
            }
        }
    });
}

/// Create mouseenter handler: resolve the category color and apply it
pub fn make_on_mouseenter<F>(
    border: BorderSignals,
    category: String,
    lookup: F,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    F: Fn(&str) -> String + Clone + 'static,
{
    move |ev: web_sys::MouseEvent| {
        let Some(el) = event_element(&ev) else { return };
        let mut state = state_for(border, &el);
        set_border_color(&el, state.on_enter(lookup(&category)));
        border.state_write.set(Some(state));
    }
}

/// Create mouseleave handler: restore the captured color
pub fn make_on_mouseleave(border: BorderSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        let Some(el) = event_element(&ev) else { return };
        let mut state = state_for(border, &el);
        set_border_color(&el, state.on_leave());
        border.state_write.set(Some(state));
    }
}
