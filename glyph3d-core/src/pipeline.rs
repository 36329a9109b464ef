/// Object space to screen space
use crate::color::Attr;
use crate::geometry::{Mesh, Triangle};
use crate::math::{point, transform_point, Mat4, Vec4, EPSILON};
use crate::projection::ScreenMapping;
use nalgebra::{Point2, Vector4};

/// A triangle in screen space.
///
/// `x`, `y` are grid coordinates and `z` is the post-divide depth; `w` of
/// every point is 1. `clip_w` keeps each vertex's pre-divide `w` (the
/// camera-space depth) for the shadow projector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedTriangle {
    pub triangle: Triangle,
    pub clip_w: [f32; 3],
}

impl ProjectedTriangle {
    pub fn average_depth(&self) -> f32 {
        self.triangle.average_depth()
    }

    pub fn screen_points(&self) -> [Point2<f32>; 3] {
        self.triangle.points.map(|p| Point2::new(p.x, p.y))
    }

    /// Snap `x`, `y` to integer cells
    pub fn round_to_cells(&mut self) {
        for p in &mut self.triangle.points {
            p.x = p.x.round();
            p.y = p.y.round();
        }
    }
}

/// Screen-space triangles of one mesh plus the mean of all their vertices
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedMesh {
    pub triangles: Vec<ProjectedTriangle>,
    pub barycenter: Vec4,
}

/// World, projection, perspective divide and the device flip of `x` and `y`.
///
/// Returns the divided point and the clip-space `w`, or `None` when `w` is
/// too close to zero or the result is not finite.
pub fn project_vertex(vertex: &Vec4, world: &Mat4, projection: &Mat4) -> Option<(Vec4, f32)> {
    let camera = transform_point(world, vertex);
    let clip = transform_point(projection, &camera);
    if !(clip.w.abs() > EPSILON) {
        return None;
    }
    let divided = Vector4::new(-clip.x / clip.w, -clip.y / clip.w, clip.z / clip.w, 1.0);
    if divided.iter().all(|c| c.is_finite()) {
        Some((divided, clip.w))
    } else {
        None
    }
}

/// Project every triangle of `mesh` onto the grid.
///
/// Triangle `i` gets `palette[i % 2]` whether or not it survives
/// projection. Triangles with an unprojectable vertex, or one that maps
/// beyond [`ScreenMapping::in_reach`], are dropped.
pub fn project_mesh(
    mesh: &Mesh,
    world: &Mat4,
    projection: &Mat4,
    mapping: &ScreenMapping,
    palette: &[Attr; 2],
) -> ProjectedMesh {
    let mut triangles = Vec::with_capacity(mesh.len());
    let mut sum = point(0.0, 0.0, 0.0);

    'triangles: for (i, tri) in mesh.triangles.iter().enumerate() {
        let mut points = [Vec4::zeros(); 3];
        let mut clip_w = [0.0; 3];
        for (k, vertex) in tri.points.iter().enumerate() {
            let Some((mut p, w)) = project_vertex(vertex, world, projection) else {
                tracing::trace!(triangle = i, "dropping triangle with degenerate w");
                continue 'triangles;
            };
            (p.x, p.y) = mapping.map(p.x, p.y);
            if !mapping.in_reach(p.x, p.y) {
                tracing::trace!(
                    triangle = i,
                    x = p.x,
                    y = p.y,
                    "dropping triangle far outside the grid"
                );
                continue 'triangles;
            }
            points[k] = p;
            clip_w[k] = w;
        }
        for p in &points {
            sum += Vector4::new(p.x, p.y, p.z, 0.0);
        }
        triangles.push(ProjectedTriangle {
            triangle: Triangle {
                points,
                glyph: tri.glyph,
                color: palette[i % 2],
            },
            clip_w,
        });
    }

    let barycenter = if triangles.is_empty() {
        point(0.0, 0.0, 0.0)
    } else {
        let n = (triangles.len() * 3) as f32;
        point(sum.x / n, sum.y / n, sum.z / n)
    };

    ProjectedMesh {
        triangles,
        barycenter,
    }
}
