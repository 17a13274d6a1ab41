//! The viewport: owns the render surface, camera, scene furniture and the
//! single displayed mesh, and drives the per-frame redraw loop.

pub mod scene;

pub use scene::SettingsCell;

#[cfg(target_arch = "wasm32")]
mod wasm;
#[cfg(target_arch = "wasm32")]
pub use wasm::{Canvas, RenderError, Viewport};

#[cfg(not(target_arch = "wasm32"))]
mod native_stub;
#[cfg(not(target_arch = "wasm32"))]
pub use native_stub::{Canvas, RenderError, Viewport};
