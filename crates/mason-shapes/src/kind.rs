use std::fmt;

/// Tool names accepted in a shape task's `tool` field.
///
/// Three of these are aliases that pre-bind a parameter of another
/// rasterizer: `HollowCube` and `SingleBlock` resolve to the cube
/// rasterizer, `HollowSphere` to the sphere rasterizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Cube,
    HollowCube,
    Line,
    Sphere,
    HollowSphere,
    Cylinder,
    Pyramid,
    Circle,
    Arch,
    SingleBlock,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 10] = [
        ShapeKind::Cube,
        ShapeKind::HollowCube,
        ShapeKind::Line,
        ShapeKind::Sphere,
        ShapeKind::HollowSphere,
        ShapeKind::Cylinder,
        ShapeKind::Pyramid,
        ShapeKind::Circle,
        ShapeKind::Arch,
        ShapeKind::SingleBlock,
    ];

    /// Case-sensitive lookup of a tool name.
    pub fn from_tool(name: &str) -> Option<ShapeKind> {
        match name {
            "cube" => Some(ShapeKind::Cube),
            "hollow_cube" => Some(ShapeKind::HollowCube),
            "line" => Some(ShapeKind::Line),
            "sphere" => Some(ShapeKind::Sphere),
            "hollow_sphere" => Some(ShapeKind::HollowSphere),
            "cylinder" => Some(ShapeKind::Cylinder),
            "pyramid" => Some(ShapeKind::Pyramid),
            "circle" => Some(ShapeKind::Circle),
            "arch" => Some(ShapeKind::Arch),
            "single_block" => Some(ShapeKind::SingleBlock),
            _ => None,
        }
    }

    pub fn tool(self) -> &'static str {
        match self {
            ShapeKind::Cube => "cube",
            ShapeKind::HollowCube => "hollow_cube",
            ShapeKind::Line => "line",
            ShapeKind::Sphere => "sphere",
            ShapeKind::HollowSphere => "hollow_sphere",
            ShapeKind::Cylinder => "cylinder",
            ShapeKind::Pyramid => "pyramid",
            ShapeKind::Circle => "circle",
            ShapeKind::Arch => "arch",
            ShapeKind::SingleBlock => "single_block",
        }
    }

    /// True for tool names that pre-bind a parameter of another rasterizer.
    #[inline]
    pub fn is_alias(self) -> bool {
        matches!(
            self,
            ShapeKind::HollowCube | ShapeKind::HollowSphere | ShapeKind::SingleBlock
        )
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tool())
    }
}
