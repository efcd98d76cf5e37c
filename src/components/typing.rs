use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use web_sys::{Document, Element, Window};

use crate::config::PageConfig;
use crate::error::Result;
use crate::events::Listener;
use crate::tasks::{TaskHandle, TaskScope};

/// Successive prefixes of `text`, one per revealed character.
pub fn frames(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.char_indices()
        .map(move |(start, ch)| &text[..start + ch.len_utf8()])
}

/// Clears `element` and reveals `text` one character every `interval_ms`.
pub async fn type_text(element: Element, text: String, interval_ms: u32) {
    element.set_text_content(Some(""));
    for (index, frame) in frames(&text).enumerate() {
        if index > 0 {
            TimeoutFuture::new(interval_ms).await;
        }
        element.set_text_content(Some(frame));
    }
}

pub fn type_writer(scope: &TaskScope, element: Element, text: String, interval_ms: u32) -> TaskHandle {
    scope.spawn(type_text(element, text, interval_ms))
}

/// Starts the welcome animation once the page has loaded. Returns the load
/// listener when the page is still loading.
pub fn bind(
    window: &Window,
    document: &Document,
    welcome: Option<&Element>,
    config: &PageConfig,
    scope: &TaskScope,
) -> Result<Option<Listener>> {
    let Some(welcome) = welcome.cloned() else {
        log::debug!("No welcome text on this page");
        return Ok(None);
    };

    let started = Rc::new(Cell::new(false));
    let start = {
        let scope = scope.clone();
        let text = config.welcome_text.clone();
        let interval_ms = config.typing_interval_ms;
        move || {
            if started.replace(true) {
                return;
            }
            type_writer(&scope, welcome.clone(), text.clone(), interval_ms);
        }
    };

    if document.ready_state() == "complete" {
        start();
        return Ok(None);
    }
    Listener::new(window, "load", move |_| start()).map(Some)
}
