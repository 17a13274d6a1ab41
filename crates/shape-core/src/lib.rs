//! Catalog data model and display settings shared by the viewer crates.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// sRGB color used for both the catalog button label and the mesh material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Components scaled to `0.0..=1.0` for shader uniforms.
    pub fn as_f32(&self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    /// CSS hex notation, e.g. `#4fc3f7`.
    pub fn css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Which primitive a catalog entry builds, with its fixed parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ShapeKind {
    Sphere {
        radius: f32,
        segments: u32,
        rings: u32,
    },
    Box {
        width: f32,
        height: f32,
        depth: f32,
    },
    Cylinder {
        radius: f32,
        height: f32,
        segments: u32,
    },
    Cone {
        radius: f32,
        height: f32,
        segments: u32,
    },
    Torus {
        major_radius: f32,
        tube_radius: f32,
        major_segments: u32,
        tube_segments: u32,
    },
    TorusKnot {
        p: u32,
        q: u32,
        radius: f32,
        tube_radius: f32,
        path_segments: u32,
        tube_segments: u32,
    },
    Tetrahedron {
        radius: f32,
    },
    Octahedron {
        radius: f32,
    },
    Icosahedron {
        radius: f32,
    },
}

/// One selectable catalog entry. Immutable, defined at startup.
#[derive(Debug, Clone, Copy)]
pub struct ShapeDescriptor {
    pub name: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub color: Color,
    pub kind: ShapeKind,
}

/// The flat, ordered catalog. The first entry is the default selection.
pub const CATALOG: &[ShapeDescriptor] = &[
    ShapeDescriptor {
        name: "Sphere",
        category: "Basic",
        description: "UV sphere, radius 1",
        color: Color::rgb(0x4f, 0xc3, 0xf7),
        kind: ShapeKind::Sphere {
            radius: 1.0,
            segments: 32,
            rings: 16,
        },
    },
    ShapeDescriptor {
        name: "Box",
        category: "Basic",
        description: "Cube, 1.5 on each side",
        color: Color::rgb(0xff, 0x8a, 0x65),
        kind: ShapeKind::Box {
            width: 1.5,
            height: 1.5,
            depth: 1.5,
        },
    },
    ShapeDescriptor {
        name: "Cylinder",
        category: "Basic",
        description: "Capped cylinder, radius 1, height 2",
        color: Color::rgb(0xae, 0xd5, 0x81),
        kind: ShapeKind::Cylinder {
            radius: 1.0,
            height: 2.0,
            segments: 32,
        },
    },
    ShapeDescriptor {
        name: "Cone",
        category: "Basic",
        description: "Cone, radius 1, height 2",
        color: Color::rgb(0xff, 0xd5, 0x4f),
        kind: ShapeKind::Cone {
            radius: 1.0,
            height: 2.0,
            segments: 32,
        },
    },
    ShapeDescriptor {
        name: "Torus",
        category: "Rings",
        description: "Torus, ring radius 1, tube radius 0.4",
        color: Color::rgb(0xba, 0x68, 0xc8),
        kind: ShapeKind::Torus {
            major_radius: 1.0,
            tube_radius: 0.4,
            major_segments: 48,
            tube_segments: 24,
        },
    },
    ShapeDescriptor {
        name: "Torus Knot",
        category: "Rings",
        description: "(2,3) torus knot",
        color: Color::rgb(0xf0, 0x62, 0x92),
        kind: ShapeKind::TorusKnot {
            p: 2,
            q: 3,
            radius: 0.8,
            tube_radius: 0.3,
            path_segments: 128,
            tube_segments: 16,
        },
    },
    ShapeDescriptor {
        name: "Tetrahedron",
        category: "Platonic",
        description: "Regular tetrahedron",
        color: Color::rgb(0x4d, 0xb6, 0xac),
        kind: ShapeKind::Tetrahedron { radius: 1.2 },
    },
    ShapeDescriptor {
        name: "Octahedron",
        category: "Platonic",
        description: "Regular octahedron",
        color: Color::rgb(0x90, 0xa4, 0xae),
        kind: ShapeKind::Octahedron { radius: 1.2 },
    },
    ShapeDescriptor {
        name: "Icosahedron",
        category: "Platonic",
        description: "Regular icosahedron",
        color: Color::rgb(0xdc, 0xe7, 0x75),
        kind: ShapeKind::Icosahedron { radius: 1.2 },
    },
];

/// Category name plus the ordered shapes it contains.
pub struct CategoryGroup {
    pub name: &'static str,
    pub shapes: Vec<&'static ShapeDescriptor>,
}

/// Catalog entries grouped by category, insertion order preserved within
/// each category and across categories. Computed once and cached.
pub fn grouped_catalog() -> &'static [CategoryGroup] {
    static GROUPS: OnceLock<Vec<CategoryGroup>> = OnceLock::new();
    GROUPS.get_or_init(|| {
        let mut groups: Vec<CategoryGroup> = Vec::new();
        for shape in CATALOG {
            match groups.iter_mut().find(|g| g.name == shape.category) {
                Some(group) => group.shapes.push(shape),
                None => groups.push(CategoryGroup {
                    name: shape.category,
                    shapes: vec![shape],
                }),
            }
        }
        groups
    })
}

pub fn find_shape(name: &str) -> Option<&'static ShapeDescriptor> {
    CATALOG.iter().find(|shape| shape.name == name)
}

/// Durable-store key for the wireframe toggle.
pub const WIREFRAME_KEY: &str = "wireframe";
/// Durable-store key for the auto-rotate toggle.
pub const AUTO_ROTATE_KEY: &str = "autoRotate";

/// The literal string persisted for a toggle value.
pub fn stored_bool(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// User-visible display toggles, persisted across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    pub wireframe: bool,
    pub auto_rotate: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            wireframe: false,
            auto_rotate: true,
        }
    }
}

impl DisplaySettings {
    /// Builds settings from raw stored strings. Wireframe is on only for the
    /// literal `"true"`; auto-rotate is off only for the literal `"false"`.
    /// Anything else, including an absent value, falls back to the default.
    pub fn from_stored(wireframe: Option<&str>, auto_rotate: Option<&str>) -> Self {
        Self {
            wireframe: wireframe == Some("true"),
            auto_rotate: auto_rotate != Some("false"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_names_are_unique() {
        let names: HashSet<&str> = CATALOG.iter().map(|s| s.name).collect();
        assert_eq!(names.len(), CATALOG.len());
    }

    #[test]
    fn catalog_starts_with_sphere() {
        assert_eq!(CATALOG[0].name, "Sphere");
    }

    #[test]
    fn grouping_preserves_flat_order() {
        let flattened: Vec<&str> = grouped_catalog()
            .iter()
            .flat_map(|g| g.shapes.iter().map(|s| s.name))
            .collect();
        let flat: Vec<&str> = CATALOG.iter().map(|s| s.name).collect();
        assert_eq!(flattened, flat);
    }

    #[test]
    fn groups_are_homogeneous() {
        for group in grouped_catalog() {
            assert!(!group.shapes.is_empty());
            assert!(group.shapes.iter().all(|s| s.category == group.name));
        }
    }

    #[test]
    fn find_shape_matches_exact_name() {
        assert_eq!(find_shape("Torus").map(|s| s.name), Some("Torus"));
        assert!(find_shape("torus").is_none());
    }

    #[test]
    fn settings_default_when_store_is_empty() {
        let settings = DisplaySettings::from_stored(None, None);
        assert!(!settings.wireframe);
        assert!(settings.auto_rotate);
    }

    #[test]
    fn settings_parse_table() {
        assert!(DisplaySettings::from_stored(Some("true"), None).wireframe);
        assert!(!DisplaySettings::from_stored(Some("false"), None).wireframe);
        assert!(!DisplaySettings::from_stored(Some("TRUE"), None).wireframe);
        assert!(!DisplaySettings::from_stored(Some("yes"), None).wireframe);

        assert!(!DisplaySettings::from_stored(None, Some("false")).auto_rotate);
        assert!(DisplaySettings::from_stored(None, Some("true")).auto_rotate);
        assert!(DisplaySettings::from_stored(None, Some("False")).auto_rotate);
        assert!(DisplaySettings::from_stored(None, Some("garbage")).auto_rotate);
    }

    #[test]
    fn settings_fields_are_independent() {
        let mut settings = DisplaySettings::default();
        let rotate = settings.auto_rotate;
        settings.wireframe = !settings.wireframe;
        assert_eq!(settings.auto_rotate, rotate);
        let wireframe = settings.wireframe;
        settings.auto_rotate = !settings.auto_rotate;
        assert_eq!(settings.wireframe, wireframe);
    }

    #[test]
    fn color_css_notation() {
        assert_eq!(Color::rgb(0x4f, 0xc3, 0xf7).css(), "#4fc3f7");
        assert_eq!(Color::rgb(0, 0, 0).css(), "#000000");
    }

    #[test]
    fn settings_json_roundtrip() {
        let settings = DisplaySettings {
            wireframe: true,
            auto_rotate: false,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: DisplaySettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, back);
    }
}
