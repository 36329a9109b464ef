/// Homogeneous vector helpers
///
/// Points are row vectors: a transform is applied as `v' = v · M`, so
/// composing `A * B` applies `A` first.
use nalgebra::{Matrix3, Matrix4, Vector3, Vector4};

/// 3D homogeneous point `(x, y, z, w)`
pub type Vec4 = Vector4<f32>;
/// 2D homogeneous point `(x, y, w)`
pub type Vec3h = Vector3<f32>;
pub type Mat4 = Matrix4<f32>;
pub type Mat3 = Matrix3<f32>;

/// Lengths below this are treated as zero
pub const EPSILON: f32 = 1e-6;

pub fn point(x: f32, y: f32, z: f32) -> Vec4 {
    Vector4::new(x, y, z, 1.0)
}

pub fn point2(x: f32, y: f32) -> Vec3h {
    Vector3::new(x, y, 1.0)
}

/// Dot product of the `xyz` parts
pub fn dot(a: &Vec4, b: &Vec4) -> f32 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

/// Cross product of the `xyz` parts, `w = 1`
pub fn cross(a: &Vec4, b: &Vec4) -> Vec4 {
    point(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

pub fn length(v: &Vec4) -> f32 {
    dot(v, v).sqrt()
}

/// Unit-length copy of `v`. A (near) zero vector yields the zero vector.
pub fn normalise(v: &Vec4) -> Vec4 {
    let l = length(v);
    if l <= EPSILON || !l.is_finite() {
        return Vector4::new(0.0, 0.0, 0.0, v.w);
    }
    Vector4::new(v.x / l, v.y / l, v.z / l, v.w)
}

/// `v · m` for a 4D homogeneous point
pub fn transform_point(m: &Mat4, v: &Vec4) -> Vec4 {
    (v.transpose() * m).transpose()
}

/// `v · m` for a 2D homogeneous point
pub fn transform_point2(m: &Mat3, v: &Vec3h) -> Vec3h {
    (v.transpose() * m).transpose()
}

pub fn multiply(a: &Mat4, b: &Mat4) -> Mat4 {
    a * b
}

/// Mean of the `xyz` parts, `None` for an empty set
pub fn barycenter<'a>(points: impl IntoIterator<Item = &'a Vec4>) -> Option<Vec4> {
    let mut sum = Vector3::zeros();
    let mut count = 0usize;
    for p in points {
        sum += p.xyz();
        count += 1;
    }
    if count == 0 {
        return None;
    }
    let mean = sum / count as f32;
    Some(point(mean.x, mean.y, mean.z))
}
