//! Browser console logging.
//!
//! Only the wasm32 build writes to the console. Native builds (tests, tooling)
//! compile these to nothing.

#[cfg(target_arch = "wasm32")]
pub(crate) fn info(message: &str) {
    web_sys::console::log_1(&message.into());
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn info(_message: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn warn(_message: &str) {}
