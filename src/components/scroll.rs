use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

use crate::config::{classes, PageConfig};
use crate::error::Result;
use crate::events::Listener;

/// Whether the header should carry the scrolled style at `scroll_y`.
pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

pub fn update_header(header: &Element, scroll_y: f64, threshold: f64) {
    let scrolled = is_scrolled(scroll_y, threshold);
    if let Err(err) = header
        .class_list()
        .toggle_with_force(classes::HEADER_SCROLLED, scrolled)
    {
        log::warn!("Failed to toggle header style: {:?}", err);
    }
}

pub fn bind_header(window: &Window, header: &Element, threshold: f64) -> Result<Listener> {
    let scroll_window = window.clone();
    let header = header.clone();
    Listener::new(window, "scroll", move |_| {
        let scroll_y = scroll_window.scroll_y().unwrap_or(0.0);
        update_header(&header, scroll_y, threshold);
    })
}

/// Adds the reveal class once `target` is on screen. Repeat calls are no-ops.
pub fn reveal(target: &Element, is_intersecting: bool) {
    if !is_intersecting {
        return;
    }
    if let Err(err) = target.class_list().add_1(classes::REVEAL) {
        log::warn!("Failed to reveal section: {:?}", err);
    }
}

/// Fades sections in as they scroll into view. Disconnects on drop.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub fn observe(sections: &[Element], config: &PageConfig) -> Result<Self> {
        let callback = Closure::wrap(Box::new(|entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    reveal(&entry.target(), entry.is_intersecting());
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
        options.set_root_margin(&config.reveal_root_margin);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        for section in sections {
            observer.observe(section);
        }
        log::debug!("Observing {} sections for reveal", sections.len());

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
