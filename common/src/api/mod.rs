pub mod api_wrapper;
pub mod mock;
pub mod routed;
pub mod sleeper;
pub mod traits;
pub mod wasm_request;

#[cfg(test)]
pub(crate) mod stub;
