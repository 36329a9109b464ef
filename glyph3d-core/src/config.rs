/// Tuning constants for input handling, projection, shadows and style
use crate::color::{glyph, Attr};
use crate::error::{ConfigError, Result};
use crate::math::EPSILON;
use crate::scene::SceneTransform;
use crate::surface::Cell;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Renderer configuration. Missing keys fall back to [`Default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Angle units per second while a rotate action is held
    pub rotation_rate: f32,
    /// Radians per angle unit
    pub radians_per_unit: f32,
    pub scale_step: f32,
    pub scale_min: f32,
    pub scale_max: f32,
    /// `coord_z` change per frame while the depth zones are held
    pub depth_step: f32,
    pub depth_min: f32,
    pub depth_max: f32,
    /// `coord_x`/`coord_y` change per frame while panning
    pub pan_step: f32,
    /// Horizontal offset added for each subsequent mesh
    pub mesh_spacing: f32,
    /// `sx`, `sy` in `(screen_bias + s) * viewport`
    pub screen_scale: [f32; 2],
    pub screen_bias: f32,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub light: [f32; 3],
    /// Depth of the fixed view point; x and y are the viewport centre
    pub view_depth: f32,
    /// Ground line as a fraction of the viewport height
    pub shadow_ground: f32,
    pub shadow_depth_scale: f32,
    pub initial: SceneTransform,
    pub style: Style,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            rotation_rate: 8.0,
            radians_per_unit: 0.5,
            scale_step: 0.01,
            scale_min: 0.5,
            scale_max: 1.2,
            depth_step: 0.1,
            depth_min: 4.5,
            depth_max: 7.0,
            pan_step: 0.005,
            mesh_spacing: 1.0,
            screen_scale: [0.4, 0.4],
            screen_bias: 0.1,
            fov_degrees: 90.0,
            near: 1.0,
            far: 10.0,
            light: [1.0, -100.0, 1.0],
            view_depth: -100.0,
            shadow_ground: 0.95,
            shadow_depth_scale: 10.0,
            initial: SceneTransform::default(),
            style: Style::default(),
        }
    }
}

impl RenderConfig {
    pub fn light(&self) -> Vector3<f32> {
        Vector3::from(self.light)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("rotation_rate", self.rotation_rate),
            ("scale_step", self.scale_step),
            ("depth_step", self.depth_step),
            ("pan_step", self.pan_step),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidStep { name, value });
            }
        }
        for (name, min, max) in [
            ("scale", self.scale_min, self.scale_max),
            ("depth", self.depth_min, self.depth_max),
        ] {
            if min > max {
                return Err(ConfigError::InvertedBounds { name, min, max });
            }
        }
        if !(self.near > 0.0 && self.near < self.far) {
            return Err(ConfigError::ClipPlanes {
                near: self.near,
                far: self.far,
            });
        }
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(ConfigError::FieldOfView(self.fov_degrees));
        }
        if !(self.light[1].abs() > EPSILON) {
            return Err(ConfigError::LightHeight(self.light[1]));
        }
        if let Some(&color) = self.style.palette.iter().find(|&&c| c == self.style.edge) {
            return Err(ConfigError::PaletteCollision(color));
        }
        Ok(())
    }
}

/// Glyphs and colours
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// Face colours, alternated per triangle within a mesh
    pub palette: [Attr; 2],
    /// Outline colour; flood fills stop at it
    pub edge: Attr,
    pub shadow: Cell,
    pub sky: Cell,
    pub ground: Cell,
    /// Draw the grid border in the edge colour before filling faces
    pub frame_viewport: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            palette: [Attr::FG_BLUE, Attr::FG_RED],
            edge: Attr::FG_YELLOW,
            shadow: Cell::new(glyph::BLANK, Attr::BG_GREY),
            sky: Cell::new(glyph::SOLID, Attr::FG_BLACK),
            ground: Cell::new(glyph::BLANK, Attr::BG_BLUE),
            frame_viewport: true,
        }
    }
}
