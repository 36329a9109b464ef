/// Projection matrices and the normalized-to-grid screen mapping
use crate::math::Mat4;

/// Projection configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub fov_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Projection {
    /// Perspective projection for a `width × height` grid.
    ///
    /// The aspect ratio is `height / width`, which compensates for cells
    /// being taller than they are wide.
    pub fn new(width: i32, height: i32, fov_degrees: f32, near: f32, far: f32) -> Self {
        Self {
            fov_degrees,
            aspect: height as f32 / width.max(1) as f32,
            near,
            far,
        }
    }

    pub fn matrix(&self) -> Mat4 {
        perspective(self.fov_degrees, self.aspect, self.near, self.far)
    }
}

/// Perspective matrix. `m23 = 1` carries camera-space depth into `w`.
pub fn perspective(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fov_degrees.to_radians() * 0.5).tan();
    let mut m = Mat4::zeros();
    m[(0, 0)] = aspect * f;
    m[(1, 1)] = f;
    m[(2, 2)] = far / (far - near);
    m[(3, 2)] = (-far * near) / (far - near);
    m[(2, 3)] = 1.0;
    m[(3, 3)] = 0.0;
    m
}

/// Orthographic view down the `(1, 1, 1)` diagonal; `w` stays 1
pub fn isometric() -> Mat4 {
    let mut m = Mat4::zeros();
    m[(0, 0)] = (1.0f32 / 2.0).sqrt();
    m[(0, 1)] = -(1.0f32 / 6.0).sqrt();
    m[(0, 2)] = (1.0f32 / 3.0).sqrt();
    m[(1, 1)] = (2.0f32 / 3.0).sqrt();
    m[(1, 2)] = (1.0f32 / 3.0).sqrt();
    m[(2, 0)] = -(1.0f32 / 2.0).sqrt();
    m[(2, 1)] = -(1.0f32 / 6.0).sqrt();
    m[(2, 2)] = (1.0f32 / 3.0).sqrt();
    m[(3, 3)] = 1.0;
    m
}

/// How far outside the grid a mapped coordinate may fall, in multiples of
/// the grid width or height
pub const SCREEN_REACH: f32 = 16.0;

/// Maps flipped normalized coordinates onto grid cells:
/// `x' = (x + offset_x) * scale_x`, `y' = (y + offset_y) * scale_y`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenMapping {
    pub offset_x: f32,
    pub offset_y: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    /// Largest `|x'|` and `|y'|` still worth rasterizing
    pub reach_x: f32,
    pub reach_y: f32,
}

impl ScreenMapping {
    pub fn new(
        offset: (f32, f32),
        screen_scale: [f32; 2],
        screen_bias: f32,
        width: i32,
        height: i32,
    ) -> Self {
        Self {
            offset_x: offset.0,
            offset_y: offset.1,
            scale_x: (screen_bias + screen_scale[0]) * width as f32,
            scale_y: (screen_bias + screen_scale[1]) * height as f32,
            reach_x: SCREEN_REACH * width.max(1) as f32,
            reach_y: SCREEN_REACH * height.max(1) as f32,
        }
    }

    /// Whether a mapped point is close enough to the grid to rasterize
    pub fn in_reach(&self, x: f32, y: f32) -> bool {
        x.abs() <= self.reach_x && y.abs() <= self.reach_y
    }

    pub fn map(&self, x: f32, y: f32) -> (f32, f32) {
        (
            (x + self.offset_x) * self.scale_x,
            (y + self.offset_y) * self.scale_y,
        )
    }
}
