/// Geometry primitives for 3D rendering
use crate::color::{glyph, Attr};
use crate::math::{cross, point, Vec4};

/// A triangle with a display glyph and colour.
///
/// Vertex order defines the winding, and with it the facet normal
/// `(p0 - p1) × (p2 - p1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub points: [Vec4; 3],
    pub glyph: char,
    pub color: Attr,
}

impl Triangle {
    pub fn new(p0: [f32; 3], p1: [f32; 3], p2: [f32; 3]) -> Self {
        Self::from_points([
            point(p0[0], p0[1], p0[2]),
            point(p1[0], p1[1], p1[2]),
            point(p2[0], p2[1], p2[2]),
        ])
    }

    pub fn from_points(points: [Vec4; 3]) -> Self {
        Self {
            points,
            glyph: glyph::SOLID,
            color: Attr::FG_WHITE,
        }
    }

    pub fn with_style(mut self, glyph: char, color: Attr) -> Self {
        self.glyph = glyph;
        self.color = color;
        self
    }

    /// Unnormalized facet normal from the winding
    pub fn normal(&self) -> Vec4 {
        let [p0, p1, p2] = self.points;
        cross(&(p0 - p1), &(p2 - p1))
    }

    /// Mean vertex depth, the painter's sort key
    pub fn average_depth(&self) -> f32 {
        (self.points[0].z + self.points[1].z + self.points[2].z) / 3.0
    }
}

/// A 3D mesh composed of triangles
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(capacity),
        }
    }

    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Box prism, 1 × 2 × 1, with its corner at the origin
    pub fn prism() -> Self {
        Self::from_triangles(&[
            ([0.0, 0.0, 0.0], [0.0, 2.0, 0.0], [1.0, 2.0, 0.0]),
            ([0.0, 0.0, 0.0], [1.0, 2.0, 0.0], [1.0, 0.0, 0.0]),
            ([1.0, 0.0, 0.0], [1.0, 2.0, 0.0], [1.0, 2.0, 1.0]),
            ([1.0, 0.0, 0.0], [1.0, 2.0, 1.0], [1.0, 0.0, 1.0]),
            ([0.0, 0.0, 0.0], [0.0, 2.0, 0.0], [1.0, 2.0, 1.0]),
            ([0.0, 0.0, 0.0], [1.0, 0.0, 1.0], [1.0, 2.0, 1.0]),
            ([0.0, 2.0, 0.0], [1.0, 2.0, 1.0], [1.0, 2.0, 0.0]),
            ([1.0, 0.0, 1.0], [0.0, 0.0, 0.0], [1.0, 0.0, 0.0]),
        ])
    }

    /// Four-faced pyramid with its apex at (1, 2, 1)
    pub fn pyramid() -> Self {
        Self::from_triangles(&[
            ([0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [1.0, 0.0, 2.0]),
            ([0.0, 0.0, 0.0], [1.0, 2.0, 1.0], [2.0, 0.0, 0.0]),
            ([2.0, 0.0, 0.0], [1.0, 2.0, 1.0], [1.0, 0.0, 2.0]),
            ([1.0, 0.0, 2.0], [1.0, 2.0, 1.0], [0.0, 0.0, 0.0]),
        ])
    }

    fn from_triangles(faces: &[([f32; 3], [f32; 3], [f32; 3])]) -> Self {
        let mut mesh = Self::with_capacity(faces.len());
        for &(p0, p1, p2) in faces {
            mesh.add_triangle(Triangle::new(p0, p1, p2));
        }
        mesh
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Triangle> for Mesh {
    fn from_iter<I: IntoIterator<Item = Triangle>>(iter: I) -> Self {
        Self {
            triangles: iter.into_iter().collect(),
        }
    }
}
