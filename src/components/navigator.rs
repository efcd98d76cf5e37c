use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::bindings::PageBindings;
use crate::config::classes;
use crate::error::Result;
use crate::events::Listener;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Home,
    Profile,
    Portfolio,
    Contact,
}

impl NavAction {
    /// Maps a button's visible label to what it does. Matching is exact
    /// after trimming.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Home" => Some(NavAction::Home),
            "Our Profile" => Some(NavAction::Profile),
            "Portofolio" => Some(NavAction::Portfolio),
            "Message Us" => Some(NavAction::Contact),
            _ => None,
        }
    }
}

pub struct Navigator {
    buttons: Vec<Element>,
    header: Element,
    headquarter_section: Option<Element>,
    contact_section: Option<Element>,
}

impl Navigator {
    pub fn new(bindings: &PageBindings) -> Self {
        Self {
            buttons: bindings.nav_buttons.clone(),
            header: bindings.header.clone(),
            headquarter_section: bindings.headquarter_section.clone(),
            contact_section: bindings.contact_section.clone(),
        }
    }

    pub fn bind(self) -> Result<Vec<Listener>> {
        let navigator = Rc::new(self);
        navigator
            .buttons
            .iter()
            .map(|button| {
                let navigator = navigator.clone();
                Listener::new(button, "click", move |event: Event| {
                    let clicked = event
                        .current_target()
                        .and_then(|target| target.dyn_into::<Element>().ok());
                    if let Some(clicked) = clicked {
                        navigator.activate(&clicked);
                    }
                })
            })
            .collect()
    }

    /// Highlights `clicked` alone, then runs its label's action.
    pub fn activate(&self, clicked: &Element) {
        for button in &self.buttons {
            if let Err(err) = button.class_list().remove_1(classes::ACTIVE_NAV) {
                log::warn!("Failed to clear nav highlight: {:?}", err);
            }
        }
        if let Err(err) = clicked.class_list().add_1(classes::ACTIVE_NAV) {
            log::warn!("Failed to highlight nav button: {:?}", err);
        }

        let label = clicked.text_content().unwrap_or_default();
        match NavAction::from_label(&label) {
            Some(NavAction::Home) => scroll_to(Some(&self.header)),
            Some(NavAction::Profile) => scroll_to(self.headquarter_section.as_ref()),
            Some(NavAction::Portfolio) => log::info!("Portfolio section not implemented yet"),
            Some(NavAction::Contact) => scroll_to(self.contact_section.as_ref()),
            None => {}
        }
    }
}

fn scroll_to(target: Option<&Element>) {
    if let Some(target) = target {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
