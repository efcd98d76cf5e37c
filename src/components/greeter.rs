use web_sys::{Element, Window};

use crate::config::PageConfig;

/// Blocking browser dialogs, swappable so tests never open a modal.
pub trait Dialogs {
    fn prompt(&self, message: &str) -> Option<String>;
    fn alert(&self, message: &str);
}

pub struct WindowDialogs {
    window: Window,
}

impl WindowDialogs {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Dialogs for WindowDialogs {
    fn prompt(&self, message: &str) -> Option<String> {
        self.window.prompt_with_message(message).ok().flatten()
    }

    fn alert(&self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            log::warn!("Alert failed: {:?}", err);
        }
    }
}

/// Asks for the visitor's name and puts it in the header.
///
/// The name is written as text content, unescaped markup never reaches the DOM.
pub fn greet(username: &Element, dialogs: &dyn Dialogs, config: &PageConfig) {
    match dialogs.prompt(&config.name_prompt) {
        Some(name) if !name.is_empty() => {
            log::debug!("Greeting visitor by name");
            username.set_text_content(Some(&name));
        }
        _ => dialogs.alert(&config.fallback_greeting),
    }
}
