use web_sys::HtmlElement;

use crate::config::{CircleStyle, CIRCLE_DEFAULT, CIRCLE_HIGHLIGHT};
use crate::error::Result;
use crate::events::Listener;

pub fn apply_style(element: &HtmlElement, style: CircleStyle) {
    let declaration = element.style();
    let result = declaration
        .set_property("border-color", style.border_color)
        .and_then(|_| declaration.set_property("background-color", style.background_color))
        .and_then(|_| declaration.set_property("transform", style.transform));
    if let Err(err) = result {
        log::warn!("Failed to style circle: {:?}", err);
    }
}

pub fn bind(circles: &[HtmlElement]) -> Result<Vec<Listener>> {
    let mut listeners = Vec::with_capacity(circles.len() * 2);
    for circle in circles {
        let target = circle.clone();
        listeners.push(Listener::new(circle, "mouseenter", move |_| {
            apply_style(&target, CIRCLE_HIGHLIGHT);
        })?);

        let target = circle.clone();
        listeners.push(Listener::new(circle, "mouseleave", move |_| {
            apply_style(&target, CIRCLE_DEFAULT);
        })?);
    }
    Ok(listeners)
}
