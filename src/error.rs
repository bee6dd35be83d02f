use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum StageError {
    #[error("No browser window available")]
    NoWindow,
    #[error("No document attached to window")]
    NoDocument,
    #[error("Invalid value for '{key}': {value}")]
    InvalidConfig { key: String, value: String },
    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<JsValue> for StageError {
    fn from(value: JsValue) -> Self {
        StageError::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}
