//! Interactivity for the portfolio landing page: greeting, navigation,
//! contact form, hover and scroll effects, and the welcome typing effect.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;

pub mod bindings;
pub mod components;
pub mod config;
pub mod error;
pub mod events;
pub mod exports;
pub mod tasks;
pub mod validation;

pub use bindings::PageBindings;
pub use components::contact_form::{ContactForm, SubmitState};
pub use components::greeter::{Dialogs, WindowDialogs};
pub use components::typing::type_text;
pub use config::PageConfig;
pub use error::{Error, Result};
pub use events::Listener;
pub use tasks::{debounce, TaskHandle, TaskScope};
pub use validation::{is_valid_email, validate_form, FormData};

use components::{greeter, hover, navigator::Navigator, scroll, typing};

/// Everything bound to a page. Dropping it unbinds the listeners,
/// disconnects the observer and cancels pending timers.
pub struct Page {
    bindings: PageBindings,
    contact_form: Rc<ContactForm>,
    listeners: Vec<Listener>,
    reveal: Option<scroll::RevealObserver>,
    tasks: TaskScope,
}

impl Page {
    pub fn bindings(&self) -> &PageBindings {
        &self.bindings
    }

    pub fn contact_form(&self) -> &Rc<ContactForm> {
        &self.contact_form
    }

    pub fn tasks(&self) -> &TaskScope {
        &self.tasks
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Same as dropping the page.
    pub fn dispose(self) {}
}

impl Drop for Page {
    fn drop(&mut self) {
        self.tasks.cancel();
        self.reveal.take();
        self.listeners.clear();
        log::debug!("Page handlers disposed");
    }
}

/// Binds every component under `root`.
pub fn initialize(root: &Element, config: PageConfig, dialogs: &dyn Dialogs) -> Result<Page> {
    let bindings = PageBindings::resolve(root)?;
    let tasks = TaskScope::new();
    let mut listeners = Vec::new();

    greeter::greet(&bindings.username, dialogs, &config);

    listeners.extend(Navigator::new(&bindings).bind()?);

    let contact_form = ContactForm::new(&bindings, config.clone(), tasks.clone());
    listeners.extend(contact_form.bind()?);

    listeners.extend(hover::bind(&bindings.circles)?);

    listeners.push(scroll::bind_header(
        &bindings.window,
        &bindings.header,
        config.scroll_threshold_px,
    )?);
    let reveal = if bindings.sections.is_empty() {
        None
    } else {
        Some(scroll::RevealObserver::observe(&bindings.sections, &config)?)
    };

    listeners.extend(typing::bind(
        &bindings.window,
        &bindings.document,
        bindings.welcome_text.as_ref(),
        &config,
        &tasks,
    )?);

    log::info!("Page initialized with {} listeners", listeners.len());
    Ok(Page {
        bindings,
        contact_form,
        listeners,
        reveal,
        tasks,
    })
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = RefCell::new(None);
}

fn initialize_document() -> Result<()> {
    let window = web_sys::window().ok_or(Error::NoWindow)?;
    let root = window
        .document()
        .and_then(|document| document.document_element())
        .ok_or(Error::NoWindow)?;
    let page = initialize(&root, PageConfig::default(), &WindowDialogs::new(window))?;
    PAGE.with(|slot| *slot.borrow_mut() = Some(page));
    Ok(())
}

fn report(result: Result<()>) {
    if let Err(err) = result {
        log::error!("Failed to initialize page: {}", err);
        gloo_console::error!(format!("Page scripts disabled: {}", err));
    }
}

/// Initializes the current document once its markup is parsed and keeps the
/// handlers alive for the lifetime of the page.
pub fn start() -> Result<()> {
    let window = web_sys::window().ok_or(Error::NoWindow)?;
    let document = window.document().ok_or(Error::NoWindow)?;

    if document.ready_state() != "loading" {
        report(initialize_document());
        return Ok(());
    }

    let on_ready = Closure::once_into_js(move || report(initialize_document()));
    document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    Ok(())
}
