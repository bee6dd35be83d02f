use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, HtmlElement, Window};

use crate::anim::props::Style;
use crate::error::StageError;

pub fn window() -> Result<Window, StageError> {
    web_sys::window().ok_or(StageError::NoWindow)
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Largest reachable scroll offset of the page.
pub fn max_scroll_y() -> Result<f64, StageError> {
    let window = window()?;
    let document = window.document().ok_or(StageError::NoDocument)?;
    let root = document.document_element().ok_or(StageError::NoDocument)?;
    let viewport = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((root.scroll_height() as f64 - viewport).max(0.0))
}

pub fn scroll_to(y: f64) {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, y);
    }
}

/// Writes a resolved style onto an element's inline style. Unset
/// properties are left to the stylesheet.
pub fn apply_style(element: &HtmlElement, style: &Style) -> Result<(), StageError> {
    let css = element.style();
    for (name, value) in style_declarations(style) {
        css.set_property(name, &value)?;
    }
    Ok(())
}

fn style_declarations(style: &Style) -> Vec<(&'static str, String)> {
    let mut declarations = vec![
        ("transform", style.transform()),
        ("opacity", format!("{:.4}", style.opacity)),
    ];
    if let Some(filter) = style.filter() {
        declarations.push(("filter", filter));
    }
    if let Some(pointer) = style.pointer_events {
        declarations.push(("pointer-events", pointer.as_str().to_string()));
    }
    declarations
}

/// A window event listener that is removed again when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, StageError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self { target: target.clone(), event, callback })
    }

    pub fn on_window<F>(event: &'static str, handler: F) -> Result<Self, StageError>
    where
        F: FnMut(Event) + 'static,
    {
        let window = window()?;
        Self::new(&window, event, handler)
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("Failed to remove '{}' listener: {:?}", self.event, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::props::PointerEvents;

    fn names(style: &Style) -> Vec<&'static str> {
        style_declarations(style).into_iter().map(|(name, _)| name).collect()
    }

    #[test]
    fn plain_style_writes_only_transform_and_opacity() {
        assert_eq!(names(&Style::default()), vec!["transform", "opacity"]);
    }

    #[test]
    fn animated_discrete_props_are_written() {
        let style = Style {
            brightness: Some(0.7),
            pointer_events: Some(PointerEvents::None),
            ..Style::default()
        };
        let declarations = style_declarations(&style);
        assert!(declarations.contains(&("filter", "brightness(0.700)".to_string())));
        assert!(declarations.contains(&("pointer-events", "none".to_string())));
    }
}
