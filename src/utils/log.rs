//! Browser console logging, prefixed with the app name.
//!
//! Only the wasm32 build writes to the console; native builds compile these
//! to nothing.

#[cfg(target_arch = "wasm32")]
use crate::config::APP_NAME;

#[cfg(target_arch = "wasm32")]
pub fn warn(message: &str) {
    web_sys::console::warn_1(&format!("[{}] {}", APP_NAME, message).into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(_message: &str) {}
