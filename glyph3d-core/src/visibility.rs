/// Face selection and painter's ordering
use crate::math::{cross, dot, Vec4};
use crate::pipeline::ProjectedTriangle;

/// Slopes with a run below this are treated as axis-aligned
const SLOPE_EPSILON: f32 = 0.00001;
/// Distance, in cells, under which a vertex counts as lying on the opposite edge
const SLIVER_TOLERANCE: f32 = 1.0;

/// Plane `normal · p + d = 0` through a triangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FacetPlane {
    pub normal: Vec4,
    pub d: f32,
}

impl FacetPlane {
    /// `N = (p0 - p1) × (p2 - p1)`, `d = -(N · p0)`
    pub fn from_points(points: &[Vec4; 3]) -> Self {
        let [p0, p1, p2] = points;
        let normal = cross(&(p0 - p1), &(p2 - p1));
        let d = -dot(&normal, p0);
        Self { normal, d }
    }

    pub fn signed_distance(&self, p: &Vec4) -> f32 {
        dot(&self.normal, p) + self.d
    }

    /// Flip the plane so that `barycenter` is on its non-negative side
    pub fn oriented_outward(mut self, barycenter: &Vec4) -> Self {
        if self.signed_distance(barycenter) < 0.0 {
            self.normal = -self.normal;
            self.d = -self.d;
        }
        self
    }

    /// Whether a face with this outward plane is drawn for `view_point`
    pub fn faces(&self, view_point: &Vec4) -> bool {
        self.signed_distance(view_point) < 0.0
    }
}

/// `q` lies within the axis-aligned box spanned by `p` and `r`
fn within_box(p: &Vec4, q: &Vec4, r: &Vec4) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// `p` lies within [`SLIVER_TOLERANCE`] of the screen segment `start`-`end`
fn near_segment(start: &Vec4, p: &Vec4, end: &Vec4) -> bool {
    if !within_box(start, p, end) {
        return false;
    }
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    if dx.abs() <= SLOPE_EPSILON || dy.abs() <= SLOPE_EPSILON {
        return true;
    }
    let x_on_line = start.x + dx / dy * (p.y - start.y);
    let y_on_line = start.y + dy / dx * (p.x - start.x);
    (x_on_line - p.x).abs() <= SLIVER_TOLERANCE && (y_on_line - p.y).abs() <= SLIVER_TOLERANCE
}

/// A screen-space triangle so thin that one vertex lies on the opposite edge
pub fn is_sliver(points: &[Vec4; 3]) -> bool {
    let [p0, p1, p2] = points;
    near_segment(p0, p2, p1) || near_segment(p0, p1, p2) || near_segment(p1, p0, p2)
}

/// Stable sort, farthest (largest average `z`) first
pub fn depth_sort(triangles: &mut [ProjectedTriangle]) {
    triangles.sort_by(|a, b| b.average_depth().total_cmp(&a.average_depth()));
}

/// Outcome of [`select_visible`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Visible {
    pub faces: Vec<ProjectedTriangle>,
    pub culled: usize,
    pub slivers: usize,
}

/// Keep the faces whose outward plane puts `view_point` on the negative
/// side, minus slivers. Input order is preserved.
pub fn select_visible(
    triangles: &[ProjectedTriangle],
    barycenter: &Vec4,
    view_point: &Vec4,
) -> Visible {
    let mut visible = Visible::default();
    for tri in triangles {
        let plane = FacetPlane::from_points(&tri.triangle.points).oriented_outward(barycenter);
        if !plane.faces(view_point) {
            visible.culled += 1;
        } else if is_sliver(&tri.triangle.points) {
            visible.slivers += 1;
        } else {
            visible.faces.push(*tri);
        }
    }
    visible
}
