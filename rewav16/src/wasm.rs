#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn pack_pcm(data: &[u8]) -> Result<Vec<u8>, JsValue> {
    crate::pack_bytes(data, 0).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn unpack_pcm(data: &[u8]) -> Result<Vec<u8>, JsValue> {
    crate::unpack_bytes(data).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Payload length a packed buffer claims, without decompressing it.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn packed_payload_len(data: &[u8]) -> Result<u64, JsValue> {
    crate::parse_header(data)
        .map(|info| info.payload_len)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
