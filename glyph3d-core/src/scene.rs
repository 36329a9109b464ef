/// Scene state, the scene capability and the built-in showcase
use crate::config::RenderConfig;
use crate::geometry::Mesh;
use crate::input::{Action, InputState};
use crate::math::{point, Mat4, Vec4};
use crate::projection::Projection;
use crate::render::{RenderPass, RenderStats, Renderer};
use crate::surface::Surface;
use crate::transform::RotationState;
use serde::{Deserialize, Serialize};

/// Per-frame transform parameters, mutated only by [`SceneTransform::advance`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneTransform {
    pub rotation: RotationState,
    pub scale: f32,
    /// Screen-space offsets in normalized units
    pub coord_x: f32,
    pub coord_y: f32,
    /// Depth translation of the world transform
    pub coord_z: f32,
}

impl Default for SceneTransform {
    fn default() -> Self {
        Self {
            rotation: RotationState::zero(),
            scale: 1.0,
            coord_x: 0.5,
            coord_y: 0.5,
            coord_z: 4.0,
        }
    }
}

/// Step `value` towards `limit` without crossing it; no-op once at or past it
fn step_up(value: f32, step: f32, limit: f32) -> f32 {
    if value < limit {
        (value + step).min(limit)
    } else {
        value
    }
}

fn step_down(value: f32, step: f32, limit: f32) -> f32 {
    if value > limit {
        (value - step).max(limit)
    } else {
        value
    }
}

impl SceneTransform {
    /// Apply one frame of input on a `width × height` viewport
    pub fn advance(
        &mut self,
        input: &InputState,
        dt: f32,
        config: &RenderConfig,
        width: i32,
        height: i32,
    ) {
        let turn = config.rotation_rate * dt;
        let axis = |pos: Action, neg: Action| {
            let mut delta = 0.0;
            if input.held(pos) {
                delta += turn;
            }
            if input.held(neg) {
                delta -= turn;
            }
            delta
        };
        self.rotation.rotate(
            axis(Action::PitchUp, Action::PitchDown),
            axis(Action::YawLeft, Action::YawRight),
            axis(Action::RollLeft, Action::RollRight),
        );

        if input.held(Action::ZoomIn) {
            self.scale = step_up(self.scale, config.scale_step, config.scale_max);
        }
        if input.held(Action::ZoomOut) {
            self.scale = step_down(self.scale, config.scale_step, config.scale_min);
        }

        if input.focused && input.mouse_left.held {
            let (x, y) = (input.mouse_x as f32, input.mouse_y as f32);
            self.drag(x, y, config, width as f32, height as f32);
        }
    }

    /// Dragging at the viewport rim pans, dragging near the centre moves in depth
    fn drag(&mut self, x: f32, y: f32, config: &RenderConfig, w: f32, h: f32) {
        if x >= 0.9 * w {
            self.coord_x += config.pan_step;
        }
        if x <= 0.2 * w {
            self.coord_x -= config.pan_step;
        }
        if y <= 0.2 * h {
            self.coord_y -= config.pan_step;
        }
        if y >= 0.9 * h {
            self.coord_y += config.pan_step;
        }

        let centre_column = x >= 0.40 * w && x <= 0.60 * w;
        if centre_column && y >= 0.35 * h && y <= 0.49 * h {
            self.coord_z = step_up(self.coord_z, config.depth_step, config.depth_max);
        }
        if centre_column && y >= 0.51 * h && y <= 0.65 * h {
            self.coord_z = step_down(self.coord_z, config.depth_step, config.depth_min);
        }
    }
}

/// Something a render loop can drive
pub trait Scene {
    /// Called once before the first frame and again whenever the grid is resized
    fn initialize(&mut self, width: i32, height: i32);

    /// Advance by `dt` seconds and draw the frame into `surface`
    fn update(&mut self, dt: f32, input: &InputState, surface: &mut dyn Surface);

    fn title(&self) -> &str {
        "3D model"
    }
}

/// Meshes laid out side by side with shadows on a ground plane
#[derive(Debug, Clone)]
pub struct ShowcaseScene {
    config: RenderConfig,
    meshes: Vec<Mesh>,
    transform: SceneTransform,
    projection: Mat4,
    view_point: Vec4,
}

impl ShowcaseScene {
    /// The prism and the pyramid
    pub fn new(config: RenderConfig) -> Self {
        Self::with_meshes(config, vec![Mesh::prism(), Mesh::pyramid()])
    }

    pub fn with_meshes(config: RenderConfig, meshes: Vec<Mesh>) -> Self {
        if let Err(err) = config.validate() {
            tracing::warn!(%err, "scene built from an invalid configuration");
        }
        let transform = config.initial;
        Self {
            config,
            meshes,
            transform,
            projection: Mat4::zeros(),
            view_point: point(0.0, 0.0, 0.0),
        }
    }

    pub fn push_mesh(&mut self, mesh: Mesh) {
        self.meshes.push(mesh);
    }

    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    pub fn transform(&self) -> &SceneTransform {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut SceneTransform {
        &mut self.transform
    }

    /// Draw the backdrop and every mesh with the current transform
    pub fn render(&self, surface: &mut dyn Surface) -> Vec<RenderStats> {
        let renderer = Renderer::new(&self.config);
        renderer.backdrop(surface);

        self.meshes
            .iter()
            .enumerate()
            .map(|(i, mesh)| {
                let pass = RenderPass {
                    state: &self.transform,
                    projection: &self.projection,
                    light: self.config.light(),
                    view_point: self.view_point,
                    spacing: i as f32 * self.config.mesh_spacing,
                };
                renderer.render_mesh(surface, mesh, &pass)
            })
            .collect()
    }
}

impl Scene for ShowcaseScene {
    fn initialize(&mut self, width: i32, height: i32) {
        let config = &self.config;
        self.projection =
            Projection::new(width, height, config.fov_degrees, config.near, config.far).matrix();
        self.view_point = point(width as f32 / 2.0, height as f32 / 2.0, config.view_depth);
        tracing::debug!(width, height, meshes = self.meshes.len(), "scene initialized");
    }

    fn update(&mut self, dt: f32, input: &InputState, surface: &mut dyn Surface) {
        self.transform
            .advance(input, dt, &self.config, surface.width(), surface.height());
        self.render(surface);
    }
}
