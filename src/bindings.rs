//! Typed handles to the page elements the components work on, resolved once
//! at start-up.

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, Window,
};

use crate::error::{Error, Result};
use crate::validation::{FieldKind, FieldRules, FormData};

pub mod selectors {
    pub const USERNAME: &str = "#username";
    pub const HEADER: &str = "header";
    pub const NAV_BUTTON: &str = ".nav-button";
    pub const HEADQUARTER_SECTION: &str = ".headquarter-section";
    pub const CONTACT_SECTION: &str = ".contact-section";
    pub const CIRCLE: &str = ".circle-placeholder";
    pub const SECTION: &str = "section";
    pub const CONTACT_FORM: &str = ".contact-form";
    pub const SUBMIT_BUTTON: &str = ".submit-button";
    pub const NAME_FIELD: &str = "input[type=\"text\"]";
    pub const EMAIL_FIELD: &str = "input[type=\"email\"]";
    pub const SUBJECT_FIELD: &str = "select";
    pub const MESSAGE_FIELD: &str = "textarea";
    pub const WELCOME_TEXT: &str = "section .bg-gray-100 p";
    pub const ERROR_MESSAGE: &str = ".error-message";
    pub const LABEL: &str = "label";
}

/// One of the four contact form controls.
#[derive(Debug, Clone)]
pub struct FormField {
    pub kind: FieldKind,
    pub element: HtmlElement,
}

impl FormField {
    pub fn value(&self) -> String {
        if let Some(input) = self.element.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(select) = self.element.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else if let Some(area) = self.element.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }

    pub fn clear(&self) {
        if let Some(input) = self.element.dyn_ref::<HtmlInputElement>() {
            input.set_value("");
        } else if let Some(select) = self.element.dyn_ref::<HtmlSelectElement>() {
            select.set_selected_index(0);
        } else if let Some(area) = self.element.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value("");
        }
    }

    pub fn is_email(&self) -> bool {
        self.element
            .dyn_ref::<HtmlInputElement>()
            .map_or(false, |input| input.type_() == "email")
    }

    /// Raw text of the `<label>` sharing this field's parent, or `Field`
    /// when there is no label.
    pub fn label(&self) -> String {
        self.element
            .parent_element()
            .and_then(|parent| parent.query_selector(selectors::LABEL).ok().flatten())
            .map(|label| label.text_content().unwrap_or_default())
            .unwrap_or_else(|| "Field".to_string())
    }

    pub fn rules<'a>(&self, label: &'a str) -> FieldRules<'a> {
        FieldRules {
            required: self.element.has_attribute("required"),
            email: self.is_email(),
            label,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FormBindings {
    pub form: Element,
    pub submit: HtmlElement,
    pub name: FormField,
    pub email: FormField,
    pub subject: FormField,
    pub message: FormField,
}

impl FormBindings {
    pub fn fields(&self) -> [&FormField; 4] {
        [&self.name, &self.email, &self.subject, &self.message]
    }

    pub fn field(&self, kind: FieldKind) -> &FormField {
        match kind {
            FieldKind::Name => &self.name,
            FieldKind::Email => &self.email,
            FieldKind::Subject => &self.subject,
            FieldKind::Message => &self.message,
        }
    }

    pub fn read(&self) -> FormData {
        FormData::new(
            &self.name.value(),
            &self.email.value(),
            &self.subject.value(),
            &self.message.value(),
        )
    }

    /// Clears every control, using the native reset when the container is a
    /// real `<form>`.
    pub fn reset(&self) {
        match self.form.dyn_ref::<HtmlFormElement>() {
            Some(form) => form.reset(),
            None => self.fields().iter().for_each(|field| field.clear()),
        }
    }
}

/// Everything the page components need, looked up once.
#[derive(Debug, Clone)]
pub struct PageBindings {
    pub window: Window,
    pub document: Document,
    pub username: Element,
    pub header: Element,
    pub nav_buttons: Vec<Element>,
    pub headquarter_section: Option<Element>,
    pub contact_section: Option<Element>,
    pub circles: Vec<HtmlElement>,
    pub sections: Vec<Element>,
    pub welcome_text: Option<Element>,
    pub form: FormBindings,
}

impl PageBindings {
    pub fn resolve(root: &Element) -> Result<Self> {
        let window = web_sys::window().ok_or(Error::NoWindow)?;
        let document = root
            .owner_document()
            .or_else(|| window.document())
            .ok_or(Error::NoWindow)?;

        let form = required(root, selectors::CONTACT_FORM)?;
        let form_bindings = FormBindings {
            submit: html(required(root, selectors::SUBMIT_BUTTON)?, selectors::SUBMIT_BUTTON)?,
            name: field(&form, selectors::NAME_FIELD, FieldKind::Name)?,
            email: field(&form, selectors::EMAIL_FIELD, FieldKind::Email)?,
            subject: field(&form, selectors::SUBJECT_FIELD, FieldKind::Subject)?,
            message: field(&form, selectors::MESSAGE_FIELD, FieldKind::Message)?,
            form,
        };

        let circles = all(root, selectors::CIRCLE)?
            .into_iter()
            .map(|circle| html(circle, selectors::CIRCLE))
            .collect::<Result<Vec<_>>>()?;

        let bindings = Self {
            username: required(root, selectors::USERNAME)?,
            header: required(root, selectors::HEADER)?,
            nav_buttons: all(root, selectors::NAV_BUTTON)?,
            headquarter_section: optional(root, selectors::HEADQUARTER_SECTION)?,
            contact_section: optional(root, selectors::CONTACT_SECTION)?,
            circles,
            sections: all(root, selectors::SECTION)?,
            welcome_text: optional(root, selectors::WELCOME_TEXT)?,
            form: form_bindings,
            window,
            document,
        };

        log::debug!(
            "Resolved page bindings: {} nav buttons, {} circles, {} sections",
            bindings.nav_buttons.len(),
            bindings.circles.len(),
            bindings.sections.len()
        );
        Ok(bindings)
    }
}

fn optional(root: &Element, selector: &'static str) -> Result<Option<Element>> {
    Ok(root.query_selector(selector)?)
}

fn required(root: &Element, selector: &'static str) -> Result<Element> {
    optional(root, selector)?.ok_or(Error::MissingElement(selector))
}

fn all(root: &Element, selector: &'static str) -> Result<Vec<Element>> {
    let nodes = root.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

fn html(element: Element, selector: &'static str) -> Result<HtmlElement> {
    element.dyn_into::<HtmlElement>().map_err(|_| Error::UnexpectedElement {
        selector,
        expected: "HTML element",
    })
}

fn field(form: &Element, selector: &'static str, kind: FieldKind) -> Result<FormField> {
    let element = html(required(form, selector)?, selector)?;
    Ok(FormField { kind, element })
}
