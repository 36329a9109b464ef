/// Planar shadows cast from a point light
use crate::pipeline::ProjectedTriangle;
use crate::raster::{Canvas, ScanBounds};
use crate::surface::{Cell, Surface};
use crate::math::EPSILON;
use nalgebra::{Point2, Vector3};

/// Projects screen-space triangles onto the ground line.
///
/// Per vertex, with `t = y / light.y`:
/// `x' = x - light.x * t`, `z' = -(z * w) - light.z * t`,
/// `y' = ground + z' * depth_scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowProjector {
    light: Vector3<f32>,
    ground: f32,
    depth_scale: f32,
}

impl ShadowProjector {
    /// `None` when the light sits (almost) at `y = 0`, where every ray is parallel to the ground
    pub fn new(
        light: Vector3<f32>,
        viewport_height: i32,
        ground_fraction: f32,
        depth_scale: f32,
    ) -> Option<Self> {
        if !(light.y.abs() > EPSILON) || !light.iter().all(|c| c.is_finite()) {
            return None;
        }
        Some(Self {
            light,
            ground: ground_fraction * viewport_height as f32,
            depth_scale,
        })
    }

    pub fn project(&self, tri: &ProjectedTriangle) -> Option<[Point2<f32>; 3]> {
        let mut out = [Point2::origin(); 3];
        for (k, p) in tri.triangle.points.iter().enumerate() {
            let t = p.y / self.light.y;
            let x = p.x - self.light.x * t;
            let z = -(p.z * tri.clip_w[k]) - self.light.z * t;
            let y = self.ground + z * self.depth_scale;
            if !(x.is_finite() && y.is_finite()) {
                return None;
            }
            out[k] = Point2::new(x, y);
        }
        Some(out)
    }

    /// Scanline-fill every projected triangle with `cell`, in input order.
    /// Returns how many shadows were drawn.
    pub fn draw<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        triangles: &[ProjectedTriangle],
        cell: Cell,
    ) -> usize {
        let mut drawn = 0;
        for tri in triangles {
            if let Some(points) = self.project(tri) {
                surface.fill_scanline(&points, cell.glyph, cell.color, ScanBounds::viewport());
                drawn += 1;
            }
        }
        drawn
    }
}
