/// Homogeneous transformation matrices and rotation state
///
/// Every constructor starts from `Mat4::zeros()` and fills only the
/// coefficients it needs; matrices are meant for row vectors (`v · M`).
use crate::math::Mat4;
use crate::scene::SceneTransform;
use serde::{Deserialize, Serialize};

/// Rotation state around three axes, in angle units.
///
/// One unit is `RenderConfig::radians_per_unit` radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationState {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl RotationState {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Rotate by delta amounts (in angle units)
    pub fn rotate(&mut self, dx: f32, dy: f32, dz: f32) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::zero()
    }
}

/// Transform builder for 3D transformations
pub struct Transform;

impl Transform {
    pub fn identity() -> Mat4 {
        let mut m = Mat4::zeros();
        m[(0, 0)] = 1.0;
        m[(1, 1)] = 1.0;
        m[(2, 2)] = 1.0;
        m[(3, 3)] = 1.0;
        m
    }

    pub fn rotation_x(angle: f32) -> Mat4 {
        let (s, c) = angle.sin_cos();
        let mut m = Mat4::zeros();
        m[(0, 0)] = 1.0;
        m[(1, 1)] = c;
        m[(1, 2)] = s;
        m[(2, 1)] = -s;
        m[(2, 2)] = c;
        m[(3, 3)] = 1.0;
        m
    }

    pub fn rotation_y(angle: f32) -> Mat4 {
        let (s, c) = angle.sin_cos();
        let mut m = Mat4::zeros();
        m[(0, 0)] = c;
        m[(0, 2)] = s;
        m[(2, 0)] = -s;
        m[(1, 1)] = 1.0;
        m[(2, 2)] = c;
        m[(3, 3)] = 1.0;
        m
    }

    pub fn rotation_z(angle: f32) -> Mat4 {
        let (s, c) = angle.sin_cos();
        let mut m = Mat4::zeros();
        m[(0, 0)] = c;
        m[(0, 1)] = s;
        m[(1, 0)] = -s;
        m[(1, 1)] = c;
        m[(2, 2)] = 1.0;
        m[(3, 3)] = 1.0;
        m
    }

    pub fn scale(sx: f32, sy: f32, sz: f32) -> Mat4 {
        let mut m = Mat4::zeros();
        m[(0, 0)] = sx;
        m[(1, 1)] = sy;
        m[(2, 2)] = sz;
        m[(3, 3)] = 1.0;
        m
    }

    pub fn translation(x: f32, y: f32, z: f32) -> Mat4 {
        let mut m = Self::identity();
        m[(3, 0)] = x;
        m[(3, 1)] = y;
        m[(3, 2)] = z;
        m
    }

    /// Rotation matrix for a rotation state, applied Y, then X, then Z
    pub fn rotation_matrix(rotation: &RotationState, radians_per_unit: f32) -> Mat4 {
        let rx = Self::rotation_x(rotation.x * radians_per_unit);
        let ry = Self::rotation_y(rotation.y * radians_per_unit);
        let rz = Self::rotation_z(rotation.z * radians_per_unit);

        ry * rx * rz
    }

    /// World matrix `RotY · RotX · RotZ · Scale · Translate`.
    ///
    /// Only the depth offset is part of the world transform; `coord_x` and
    /// `coord_y` are applied in screen space by the pipeline.
    pub fn world_matrix(state: &SceneTransform, radians_per_unit: f32) -> Mat4 {
        let rotation = Self::rotation_matrix(&state.rotation, radians_per_unit);
        let scale = Self::scale(state.scale, state.scale, state.scale);
        let translation = Self::translation(0.0, 0.0, state.coord_z);

        rotation * scale * translation
    }
}
