//! Functions callable from JavaScript without the page wiring.

use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::js_sys::{Array, Function};
use web_sys::Element;

use crate::components::typing;
use crate::tasks;
use crate::validation::{self, FieldKind, FormData};

#[derive(Serialize)]
struct FieldErrorView {
    field: FieldKind,
    message: String,
}

#[derive(Serialize)]
struct ValidationView {
    valid: bool,
    errors: Vec<FieldErrorView>,
}

#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email(email: &str) -> bool {
    validation::is_valid_email(email)
}

/// Takes `{ name, email, subject, message }` and returns
/// `{ valid, errors: [{ field, message }] }`.
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(data: JsValue) -> Result<JsValue, JsError> {
    let raw: FormData = serde_wasm_bindgen::from_value(data)?;
    let data = FormData::new(&raw.name, &raw.email, &raw.subject, &raw.message);
    let report = validation::validate_form(&data);

    let view = ValidationView {
        valid: report.is_valid(),
        errors: report
            .errors
            .into_iter()
            .map(|(field, error)| FieldErrorView {
                field,
                message: error.to_string(),
            })
            .collect(),
    };
    Ok(serde_wasm_bindgen::to_value(&view)?)
}

/// Resolves once the whole text is shown. Default speed is 100 ms.
#[wasm_bindgen(js_name = typeWriter)]
pub async fn type_writer(element: Element, text: String, speed: Option<u32>) {
    typing::type_text(element, text, speed.unwrap_or(100)).await;
}

#[wasm_bindgen(inline_js = "export function collect_args(f) { return function(...args) { f(args); }; }")]
extern "C" {
    /// Wraps `f` so every call hands it the full argument list as one array.
    fn collect_args(f: &Function) -> Function;
}

/// Calls `func` with the arguments of the last call in a burst.
#[wasm_bindgen(js_name = debounce)]
pub fn debounce(func: Function, wait: u32) -> Function {
    let debounced = tasks::debounce(wait, move |args: Array| {
        if let Err(err) = func.apply(&JsValue::NULL, &args) {
            log::warn!("Debounced callback threw: {:?}", err);
        }
    });
    let receiver: Function = Closure::<dyn Fn(Array)>::new(debounced)
        .into_js_value()
        .unchecked_into();
    collect_args(&receiver)
}
