/// STL mesh loading for binary and ASCII files
use glyph3d_core::{Mesh, Triangle};
use nalgebra::{Point3, Scale3};
use nom::{
    bytes::complete::{tag, take, take_till},
    character::complete::{multispace0, multispace1},
    multi::{count, many0},
    number::complete::{float, le_f32, le_u16, le_u32},
    sequence::{preceded, tuple},
    IResult,
};
use std::path::Path;

const HEADER_LEN: usize = 80;
const FACET_LEN: usize = 50;

#[derive(Debug, thiserror::Error)]
pub enum StlError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("file too small to be a valid STL ({0} bytes)")]
    TooSmall(usize),

    #[error("binary STL declares {declared} facets but holds {available}")]
    Truncated { declared: usize, available: usize },

    #[error("malformed ASCII STL near: {0:?}")]
    Ascii(String),
}

pub type Result<T> = std::result::Result<T, StlError>;

/// Read an STL file from disk, detecting the format
pub fn load(path: &Path) -> Result<Mesh> {
    let data = std::fs::read(path).map_err(|source| StlError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let mesh = parse_stl(&data)?;
    tracing::info!(path = %path.display(), triangles = mesh.len(), "loaded STL mesh");
    Ok(mesh)
}

/// Detect and parse STL data (binary or ASCII)
///
/// Binary files may also start with `solid`, so ASCII parsing is only
/// trusted when it consumes the whole input.
pub fn parse_stl(data: &[u8]) -> Result<Mesh> {
    if data.starts_with(b"solid") {
        if let Ok(text) = std::str::from_utf8(data) {
            if let Ok(mesh) = parse_ascii_stl(text) {
                return Ok(mesh);
            }
        }
    }
    parse_binary_stl(data)
}

/// Parse a binary STL file. Facet normals are skipped; winding defines them.
pub fn parse_binary_stl(data: &[u8]) -> Result<Mesh> {
    if data.len() < HEADER_LEN + 4 {
        return Err(StlError::TooSmall(data.len()));
    }
    let body = &data[HEADER_LEN..];
    let (body, declared) = le_u32::<_, nom::error::Error<&[u8]>>(body)
        .map_err(|_| StlError::TooSmall(data.len()))?;
    let declared = declared as usize;
    let available = body.len() / FACET_LEN;
    if available < declared {
        return Err(StlError::Truncated { declared, available });
    }

    let (_, triangles) = count(binary_facet, declared)(body).map_err(|_| StlError::Truncated {
        declared,
        available,
    })?;
    Ok(triangles.into_iter().collect())
}

fn binary_vector(input: &[u8]) -> IResult<&[u8], Point3<f32>> {
    let (input, (x, y, z)) = tuple((le_f32, le_f32, le_f32))(input)?;
    Ok((input, Point3::new(x, y, z)))
}

fn binary_facet(input: &[u8]) -> IResult<&[u8], Triangle> {
    let (input, _normal) = take(12usize)(input)?;
    let (input, (a, b, c)) = tuple((binary_vector, binary_vector, binary_vector))(input)?;
    let (input, _attributes) = le_u16(input)?;
    Ok((input, triangle(a, b, c)))
}

/// Parse an ASCII STL file
pub fn parse_ascii_stl(input: &str) -> Result<Mesh> {
    match ascii_solid(input) {
        Ok((rest, mesh)) if rest.trim().is_empty() => Ok(mesh),
        Ok((rest, _)) => Err(StlError::Ascii(snippet(rest))),
        Err(nom::Err::Error(e) | nom::Err::Failure(e)) => Err(StlError::Ascii(snippet(e.input))),
        Err(nom::Err::Incomplete(_)) => Err(StlError::Ascii(String::new())),
    }
}

fn snippet(rest: &str) -> String {
    rest.trim_start().chars().take(32).collect()
}

fn ascii_solid(input: &str) -> IResult<&str, Mesh> {
    let (input, _) = preceded(multispace0, tag("solid"))(input)?;
    let (input, _name) = take_till(|c| c == '\n')(input)?;
    let (input, triangles) = many0(ascii_facet)(input)?;
    let (input, _) = preceded(multispace0, tag("endsolid"))(input)?;
    let (input, _name) = take_till(|c| c == '\n')(input)?;
    Ok((input, triangles.into_iter().collect()))
}

fn ascii_facet(input: &str) -> IResult<&str, Triangle> {
    let (input, _) = preceded(multispace0, tag("facet"))(input)?;
    let (input, _) = preceded(multispace1, tag("normal"))(input)?;
    let (input, _normal) = ascii_vector(input)?;
    let (input, _) = preceded(multispace0, tag("outer"))(input)?;
    let (input, _) = preceded(multispace1, tag("loop"))(input)?;
    let (input, a) = ascii_vertex(input)?;
    let (input, b) = ascii_vertex(input)?;
    let (input, c) = ascii_vertex(input)?;
    let (input, _) = preceded(multispace0, tag("endloop"))(input)?;
    let (input, _) = preceded(multispace0, tag("endfacet"))(input)?;
    Ok((input, triangle(a, b, c)))
}

fn ascii_vertex(input: &str) -> IResult<&str, Point3<f32>> {
    preceded(preceded(multispace0, tag("vertex")), ascii_vector)(input)
}

fn ascii_vector(input: &str) -> IResult<&str, Point3<f32>> {
    let (input, x) = preceded(multispace0, float)(input)?;
    let (input, y) = preceded(multispace1, float)(input)?;
    let (input, z) = preceded(multispace1, float)(input)?;
    Ok((input, Point3::new(x, y, z)))
}

/// Apply a non-uniform scale to every vertex of `mesh`
pub fn scaled(mesh: &Mesh, scale: &Scale3<f32>) -> Mesh {
    mesh.triangles
        .iter()
        .map(|t| {
            let [a, b, c] = t.points.map(|p| scale.transform_point(&Point3::new(p.x, p.y, p.z)));
            triangle(a, b, c).with_style(t.glyph, t.color)
        })
        .collect()
}

fn triangle(a: Point3<f32>, b: Point3<f32>, c: Point3<f32>) -> Triangle {
    Triangle::new([a.x, a.y, a.z], [b.x, b.y, b.z], [c.x, c.y, c.z])
}
