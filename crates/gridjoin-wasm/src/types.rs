//! Conversions between JavaScript values and core types.

use gridjoin_core::GridOptions;
use js_sys::{Array, Uint8Array};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Copy every `Uint8Array` element of a JS array into WASM memory.
///
/// Fails on the first element that is not a `Uint8Array`.
pub(crate) fn buffers_from_array(array: &Array) -> Result<Vec<Vec<u8>>, JsValue> {
    array
        .iter()
        .enumerate()
        .map(|(index, value)| {
            value
                .dyn_into::<Uint8Array>()
                .map(|bytes| bytes.to_vec())
                .map_err(|_| JsValue::from_str(&format!("Element {} is not a Uint8Array", index)))
        })
        .collect()
}

/// Read grid options from JS, treating `undefined`/`null` as defaults.
pub(crate) fn options_from_js(value: JsValue) -> Result<GridOptions, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(GridOptions::default());
    }

    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Invalid grid options: {}", e)))
}

pub(crate) fn to_js_error<E: std::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// WASM-specific tests that require JsValue.
///
/// These can only run on wasm32 targets. Use `wasm-pack test` to run them.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_buffers_from_array() {
        let array = Array::new();
        array.push(&Uint8Array::from(&[1u8, 2, 3][..]));
        array.push(&Uint8Array::from(&[4u8][..]));

        let buffers = buffers_from_array(&array).unwrap();
        assert_eq!(buffers, vec![vec![1, 2, 3], vec![4]]);
    }

    #[wasm_bindgen_test]
    fn test_buffers_from_array_rejects_non_bytes() {
        let array = Array::new();
        array.push(&JsValue::from_str("nope"));
        assert!(buffers_from_array(&array).is_err());
    }

    #[wasm_bindgen_test]
    fn test_options_default_on_undefined() {
        assert_eq!(
            options_from_js(JsValue::UNDEFINED).unwrap(),
            GridOptions::default()
        );
        assert_eq!(options_from_js(JsValue::NULL).unwrap(), GridOptions::default());
    }

    #[wasm_bindgen_test]
    fn test_options_from_object() {
        let mut expected = GridOptions::default();
        expected.jpeg_quality = 60;

        let value = serde_wasm_bindgen::to_value(&expected).unwrap();
        assert_eq!(options_from_js(value).unwrap(), expected);
    }
}
