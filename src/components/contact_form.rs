use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, KeyboardEvent};

use crate::bindings::{selectors, FormBindings, FormField, PageBindings};
use crate::config::{classes, PageConfig};
use crate::error::Result;
use crate::events::Listener;
use crate::tasks::{TaskHandle, TaskScope};
use crate::validation::{self, FieldKind, FormData};

/// Where the current submission attempt is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting,
    Validating,
    Pending,
}

/// Contact form behavior: inline validation and a simulated send.
pub struct ContactForm {
    form: FormBindings,
    document: Document,
    config: PageConfig,
    tasks: TaskScope,
    state: Cell<SubmitState>,
}

impl ContactForm {
    pub fn new(bindings: &PageBindings, config: PageConfig, tasks: TaskScope) -> Rc<Self> {
        Rc::new(Self {
            form: bindings.form.clone(),
            document: bindings.document.clone(),
            config,
            tasks,
            state: Cell::new(SubmitState::Idle),
        })
    }

    pub fn bind(self: &Rc<Self>) -> Result<Vec<Listener>> {
        let mut listeners = Vec::with_capacity(2 + self.form.fields().len() * 2);

        let form = self.clone();
        listeners.push(Listener::new(&self.form.submit, "click", move |event: Event| {
            form.handle_submit(&event);
        })?);

        for field in self.form.fields() {
            let kind = field.kind;

            let form = self.clone();
            listeners.push(Listener::new(&field.element, "blur", move |_| {
                form.validate_field(kind);
            })?);

            let form = self.clone();
            listeners.push(Listener::new(&field.element, "input", move |_| {
                form.clear_field_error(form.form.field(kind));
            })?);
        }

        let form = self.clone();
        listeners.push(Listener::new(&self.document, "keydown", move |event: Event| {
            let is_escape = event
                .dyn_ref::<KeyboardEvent>()
                .map_or(false, |key| key.key() == "Escape");
            if is_escape {
                form.clear_all_errors();
            }
        })?);

        Ok(listeners)
    }

    pub fn state(&self) -> SubmitState {
        self.state.get()
    }

    /// Runs one submission attempt. Returns the pending send when the form
    /// passed validation.
    pub fn handle_submit(self: &Rc<Self>, event: &Event) -> Option<TaskHandle> {
        event.prevent_default();
        if self.state.get() != SubmitState::Idle {
            log::debug!("Submit ignored while {:?}", self.state.get());
            return None;
        }

        self.state.set(SubmitState::Submitting);
        self.set_busy(true);
        let data = self.form.read();

        self.state.set(SubmitState::Validating);
        if !self.validate(&data) {
            log::debug!("Contact form rejected");
            self.set_busy(false);
            self.state.set(SubmitState::Idle);
            return None;
        }

        self.state.set(SubmitState::Pending);
        let form = self.clone();
        Some(self.tasks.spawn_after(self.config.submit_delay_ms, move || {
            form.complete_submission(&data);
        }))
    }

    fn complete_submission(&self, data: &FormData) {
        log::info!("Contact message sent (subject: {:?})", data.subject);
        self.show_success();
        self.form.reset();
        self.clear_all_errors();
        self.set_busy(false);
        self.state.set(SubmitState::Idle);
    }

    /// Recomputes every annotation from `data`. Returns whether it is valid.
    pub fn validate(&self, data: &FormData) -> bool {
        self.clear_all_errors();
        let report = validation::validate_form(data);
        for (kind, error) in &report.errors {
            self.show_field_error(self.form.field(*kind), &error.to_string());
        }
        report.is_valid()
    }

    /// Blur check for one field.
    pub fn validate_field(&self, kind: FieldKind) -> bool {
        let field = self.form.field(kind);
        self.clear_field_error(field);

        let label = field.label();
        match validation::validate_field(field.rules(&label), &field.value()) {
            Ok(()) => true,
            Err(error) => {
                self.show_field_error(field, &error.to_string());
                false
            }
        }
    }

    pub fn show_field_error(&self, field: &FormField, message: &str) {
        if let Err(err) = self.try_show_field_error(field, message) {
            log::warn!("Failed to annotate {:?} field: {}", field.kind, err);
        }
    }

    fn try_show_field_error(&self, field: &FormField, message: &str) -> Result<()> {
        field.element.class_list().add_1(classes::FIELD_ERROR)?;

        let Some(parent) = field.element.parent_element() else {
            return Ok(());
        };
        if let Some(existing) = parent.query_selector(selectors::ERROR_MESSAGE)? {
            existing.remove();
        }

        let error = self.document.create_element("div")?;
        error.set_class_name(classes::ERROR_MESSAGE_FULL);
        error.set_text_content(Some(message));
        parent.append_child(&error)?;
        Ok(())
    }

    pub fn clear_field_error(&self, field: &FormField) {
        if let Err(err) = field.element.class_list().remove_1(classes::FIELD_ERROR) {
            log::warn!("Failed to clear {:?} field style: {:?}", field.kind, err);
        }
        let existing = field
            .element
            .parent_element()
            .and_then(|parent| parent.query_selector(selectors::ERROR_MESSAGE).ok().flatten());
        if let Some(existing) = existing {
            existing.remove();
        }
    }

    pub fn clear_all_errors(&self) {
        for field in self.form.fields() {
            self.clear_field_error(field);
        }
        // Messages left behind by markup that does not wrap each field.
        if let Ok(stray) = self.form.form.query_selector_all(selectors::ERROR_MESSAGE) {
            for index in 0..stray.length() {
                if let Some(node) = stray.item(index).and_then(|node| node.dyn_into::<Element>().ok()) {
                    node.remove();
                }
            }
        }
    }

    fn set_busy(&self, busy: bool) {
        let submit = &self.form.submit;
        let result = if busy {
            submit.set_text_content(Some(&self.config.busy_label));
            submit
                .class_list()
                .add_1(classes::SUBMIT_LOADING)
                .and_then(|_| submit.set_attribute("disabled", ""))
        } else {
            submit.set_text_content(Some(&self.config.submit_label));
            submit
                .class_list()
                .remove_1(classes::SUBMIT_LOADING)
                .and_then(|_| submit.remove_attribute("disabled"))
        };
        if let Err(err) = result {
            log::warn!("Failed to update submit button: {:?}", err);
        }
    }

    fn show_success(&self) {
        let Some(body) = self.document.body() else {
            log::warn!("No document body for the success message");
            return;
        };
        let toast = match self.document.create_element("div") {
            Ok(toast) => toast,
            Err(err) => {
                log::warn!("Failed to create success message: {:?}", err);
                return;
            }
        };
        toast.set_class_name(classes::SUCCESS_TOAST);
        toast.set_text_content(Some(&self.config.success_message));
        if let Err(err) = body.append_child(&toast) {
            log::warn!("Failed to show success message: {:?}", err);
            return;
        }

        self.tasks
            .spawn_after(self.config.success_dismiss_ms, move || toast.remove());
    }
}
