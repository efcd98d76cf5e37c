use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no browser window is available")]
    NoWindow,
    #[error("required element `{0}` is missing from the page")]
    MissingElement(&'static str),
    #[error("element `{selector}` is not a {expected}")]
    UnexpectedElement {
        selector: &'static str,
        expected: &'static str,
    },
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        Error::Dom(message)
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
