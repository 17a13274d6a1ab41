//! Platform-independent viewport state: camera math, per-frame spin,
//! surface sizing and the static line furniture (ground grid + axes).

use glam::{EulerRot, Mat4, Vec3};
use shape_core::DisplaySettings;
use std::cell::Cell;
use std::rc::Rc;

/// Surface size used when the host container reports zero bounds.
pub const FALLBACK_EXTENT: (u32, u32) = (800, 600);

/// Clamps a reported surface size to something drawable.
pub fn surface_extent(width: u32, height: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        FALLBACK_EXTENT
    } else {
        (width, height)
    }
}

/// Per-frame rotation increments, in radians. Frame-based on purpose: the
/// displayed spin speed tracks the achieved frame rate.
pub const SPIN_STEP_X: f32 = 0.01;
pub const SPIN_STEP_Y: f32 = 0.015;

/// Accumulated model rotation of the displayed mesh.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Spin {
    pub x: f32,
    pub y: f32,
}

impl Spin {
    pub fn advance(&mut self) {
        self.x += SPIN_STEP_X;
        self.y += SPIN_STEP_Y;
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_euler(EulerRot::XYZ, self.x, self.y, 0.0)
    }
}

/// Shared mutable cell holding the current display settings. The frame loop
/// reads it every tick so toggles take effect without re-entering the loop.
#[derive(Clone, Default)]
pub struct SettingsCell(Rc<Cell<DisplaySettings>>);

impl SettingsCell {
    pub fn new(settings: DisplaySettings) -> Self {
        Self(Rc::new(Cell::new(settings)))
    }

    pub fn get(&self) -> DisplaySettings {
        self.0.get()
    }

    pub fn set(&self, settings: DisplaySettings) {
        self.0.set(settings);
    }
}

/// Holds the single displayed geometry resource. Replacing or clearing the
/// slot hands the previous resource back for explicit release, so at most
/// one geometry is ever live.
pub struct GeometrySlot<T> {
    current: Option<T>,
}

impl<T> Default for GeometrySlot<T> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<T> GeometrySlot<T> {
    pub fn replace(&mut self, next: T) -> Option<T> {
        self.current.replace(next)
    }

    pub fn take(&mut self) -> Option<T> {
        self.current.take()
    }

    pub fn get(&self) -> Option<&T> {
        self.current.as_ref()
    }
}

/// Fixed perspective camera looking at the origin from a fixed offset.
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            eye: Vec3::new(0.0, 1.6, 4.2),
            target: Vec3::ZERO,
            fov_y: 75f32.to_radians(),
            aspect: width as f32 / height.max(1) as f32,
            near: 0.1,
            far: 1000.0,
        }
    }

    pub fn set_extent(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    pub fn view_proj(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, Vec3::Y);
        let proj = Mat4::perspective_rh(self.fov_y, self.aspect.max(0.01), self.near, self.far);
        proj * view
    }
}

pub const GRID_HALF_EXTENT: i32 = 10;
pub const GRID_SPACING: f32 = 1.0;
pub const AXIS_LEN: f32 = 3.0;

#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

fn push_line(vertices: &mut Vec<LineVertex>, a: [f32; 3], b: [f32; 3], color: [f32; 3]) {
    vertices.push(LineVertex { position: a, color });
    vertices.push(LineVertex { position: b, color });
}

/// Static scene furniture: a ground grid on the XZ plane plus RGB axes.
/// Built once at init and never mutated afterwards.
pub fn furniture_vertices() -> Vec<LineVertex> {
    let mut vertices = Vec::new();

    let grid_color = [0.2, 0.2, 0.23];
    let axis_grid_color = [0.32, 0.32, 0.36];
    let extent = GRID_HALF_EXTENT as f32 * GRID_SPACING;
    for i in -GRID_HALF_EXTENT..=GRID_HALF_EXTENT {
        let t = i as f32 * GRID_SPACING;
        let color = if i == 0 { axis_grid_color } else { grid_color };
        push_line(&mut vertices, [t, 0.0, -extent], [t, 0.0, extent], color);
        push_line(&mut vertices, [-extent, 0.0, t], [extent, 0.0, t], color);
    }

    push_line(&mut vertices, [0.0, 0.0, 0.0], [AXIS_LEN, 0.0, 0.0], [1.0, 0.1, 0.1]);
    push_line(&mut vertices, [0.0, 0.0, 0.0], [0.0, AXIS_LEN, 0.0], [0.1, 1.0, 0.1]);
    push_line(&mut vertices, [0.0, 0.0, 0.0], [0.0, 0.0, AXIS_LEN], [0.1, 0.3, 1.0]);

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spin_advances_by_fixed_deltas() {
        let mut spin = Spin::default();
        spin.advance();
        spin.advance();
        assert!((spin.x - 0.02).abs() < 1.0e-6);
        assert!((spin.y - 0.03).abs() < 1.0e-6);
    }

    #[test]
    fn spin_is_constant_without_advance() {
        let spin = Spin { x: 0.5, y: 0.25 };
        let before = spin.model_matrix();
        // A redraw without advance must not move the mesh.
        assert_eq!(before, spin.model_matrix());
    }

    #[test]
    fn zero_extent_falls_back_to_default_surface() {
        assert_eq!(surface_extent(0, 480), FALLBACK_EXTENT);
        assert_eq!(surface_extent(640, 0), FALLBACK_EXTENT);
        assert_eq!(surface_extent(0, 0), (800, 600));
        assert_eq!(surface_extent(640, 480), (640, 480));
    }

    #[test]
    fn camera_aspect_follows_resize() {
        let mut camera = Camera::new(800, 600);
        assert!((camera.aspect - 800.0 / 600.0).abs() < 1.0e-6);
        camera.set_extent(1000, 500);
        assert!((camera.aspect - 2.0).abs() < 1.0e-6);
    }

    #[test]
    fn camera_view_proj_is_finite() {
        let camera = Camera::new(800, 600);
        assert!(camera
            .view_proj()
            .to_cols_array()
            .iter()
            .all(|v| v.is_finite()));
    }

    #[test]
    fn furniture_is_a_line_list() {
        let vertices = furniture_vertices();
        assert!(!vertices.is_empty());
        assert_eq!(vertices.len() % 2, 0);
        // Grid lines in both directions plus three axes.
        let grid_lines = (2 * GRID_HALF_EXTENT as usize + 1) * 2;
        assert_eq!(vertices.len(), (grid_lines + 3) * 2);
    }

    #[test]
    fn replacing_geometry_leaves_exactly_one_live() {
        let mut slot = GeometrySlot::default();
        let mut disposed = Vec::new();
        assert!(slot.replace("box").is_none());
        if let Some(old) = slot.replace("torus") {
            disposed.push(old);
        }
        assert_eq!(disposed, vec!["box"]);
        assert_eq!(slot.get(), Some(&"torus"));
        assert!(slot.take().is_some());
        assert!(slot.get().is_none());
    }

    #[test]
    fn settings_cell_is_shared() {
        let cell = SettingsCell::new(DisplaySettings::default());
        let observer = cell.clone();
        let mut settings = cell.get();
        settings.auto_rotate = false;
        cell.set(settings);
        assert!(!observer.get().auto_rotate);
        assert!(!observer.get().wireframe);
    }
}
