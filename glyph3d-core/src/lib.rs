/// Glyph3D Core Library - software 3D rendering onto a character grid
///
/// This library provides the stateless rendering pipeline: homogeneous
/// transforms and projection, back-face selection with painter's ordering,
/// line and polygon rasterization, flood-fill shading and planar shadows.
/// Grid acquisition, input polling and frame timing belong to the caller.

pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod math;
pub mod pipeline;
pub mod projection;
pub mod raster;
pub mod render;
pub mod scene;
pub mod shadow;
pub mod surface;
pub mod transform;
pub mod visibility;

// Re-export commonly used types
pub use color::{glyph, Attr};
pub use config::{RenderConfig, Style};
pub use error::ConfigError;
pub use geometry::{Mesh, Triangle};
pub use input::{Action, ButtonState, InputState};
pub use projection::{Projection, ScreenMapping};
pub use raster::{Canvas, ScanBounds};
pub use render::{RenderPass, RenderStats, Renderer};
pub use scene::{Scene, SceneTransform, ShowcaseScene};
pub use surface::{Cell, CharGrid, Surface};
pub use transform::{RotationState, Transform};
