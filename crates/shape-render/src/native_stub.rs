use crate::scene::SettingsCell;
use shape_core::Color;
use shape_geom::TriMesh;
use thiserror::Error;

/// Placeholder type for non-wasm targets.
pub struct Canvas;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("shape-render is only supported for wasm32")]
    Unsupported,
}

pub struct Viewport;

impl Viewport {
    pub async fn new(_canvas: Canvas, _settings: SettingsCell) -> Result<Self, RenderError> {
        Err(RenderError::Unsupported)
    }

    pub fn set_geometry(&mut self, _mesh: &TriMesh) {}

    pub fn set_material(&mut self, _color: Color) {}

    pub fn set_wireframe(&mut self, _wireframe: bool) {}

    pub fn start(&mut self) {}

    pub fn attach_resize_listener(&mut self) {}

    pub fn resize(&mut self, _width: u32, _height: u32) {}

    pub fn shutdown(&mut self) {}
}
