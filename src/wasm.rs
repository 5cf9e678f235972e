use std::str::FromStr;
use wasm_bindgen::prelude::*;

use crate::{Direction, Translation};

#[wasm_bindgen]
pub fn encode(text: &str) -> String {
    crate::glyphs::encode(text)
}

#[wasm_bindgen]
pub fn decode(text: &str) -> String {
    crate::glyphs::decode(text)
}

/// Translate text in the named direction and return the full record
#[wasm_bindgen]
pub fn translate(direction: &str, text: &str) -> Result<JsValue, JsError> {
    let direction = Direction::from_str(direction)
        .map_err(|e| JsError::new(&e.to_string()))?;
    let translation = Translation::new(direction, text);
    Ok(serde_wasm_bindgen::to_value(&translation)?)
}

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
