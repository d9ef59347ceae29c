//! Platform layer
//!
//! [`crate::GameDisplay`] implementations:
//! - `web`: DOM panels, alerts and the WebGPU canvas (wasm32 only)
//! - `headless`: writes everything through `log` (native runs)

pub mod headless;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use headless::LogDisplay;
#[cfg(target_arch = "wasm32")]
pub use web::WebDisplay;
