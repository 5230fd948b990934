use std::io::BufRead;
use std::path::Path;

use vitrine_mesh::{TriMesh, Vector3};

/// Errors surfaced while loading an OBJ file.
///
/// Both variants are recoverable from the caller's point of view: a model
/// that fails to load is logged and skipped, it never takes the process
/// down.
#[derive(Debug, thiserror::Error)]
pub enum ObjError {
    #[error("failed to read OBJ data: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed geometry at line {line}: {reason}")]
    MalformedGeometry { line: usize, reason: String },
}

/// Indexed geometry as it appears in the file, before flattening.
///
/// `face_normal_indices` is a separate stream from `face_vertex_indices`
/// and is only appended to when a face token actually carries a normal
/// reference, so the two streams may differ in length.
struct RawGeometry {
    positions: Vec<Vector3>,
    normals: Vec<Vector3>,
    // One (position index, source line) pair per face-vertex occurrence.
    face_vertex_indices: Vec<(usize, usize)>,
    face_normal_indices: Vec<usize>,
}

fn malformed(line: usize, reason: impl Into<String>) -> ObjError {
    ObjError::MalformedGeometry {
        line,
        reason: reason.into(),
    }
}

fn parse_f32(token: Option<&str>, line: usize, what: &str) -> Result<f32, ObjError> {
    token
        .and_then(|t| t.parse::<f32>().ok())
        .ok_or_else(|| malformed(line, format!("expected {what} component")))
}

fn parse_vec3<'a>(
    mut tokens: impl Iterator<Item = &'a str>,
    line: usize,
    what: &str,
) -> Result<Vector3, ObjError> {
    Ok(Vector3::new(
        parse_f32(tokens.next(), line, what)?,
        parse_f32(tokens.next(), line, what)?,
        parse_f32(tokens.next(), line, what)?,
    ))
}

/// Parses one `f` vertex-reference token of the form `v[/vt[/vn]]`.
///
/// Returns the 0-based position index and, when the token carries at least
/// two slash-delimited separators, the 0-based normal index. A token with a
/// single slash (`v/vt`) contributes no normal reference.
fn parse_face_token(token: &str, line: usize) -> Result<(usize, Option<usize>), ObjError> {
    let mut fields = token.split('/');

    let position = fields
        .next()
        .and_then(|t| t.parse::<u32>().ok())
        .ok_or_else(|| malformed(line, format!("invalid face vertex index '{token}'")))?;
    if position == 0 {
        return Err(malformed(line, "face vertex indices are 1-based"));
    }

    // Texture index, ignored.
    let _ = fields.next();

    let normal = match fields.next() {
        Some(t) => {
            let index = t
                .parse::<u32>()
                .map_err(|_| malformed(line, format!("invalid face normal index '{token}'")))?;
            // A 0 index underflows out of range and falls back to the
            // default normal during flattening, same as every other
            // out-of-range normal reference.
            Some((index as usize).wrapping_sub(1))
        }
        None => None,
    };

    Ok((position as usize - 1, normal))
}

fn default_normal() -> Vector3 {
    Vector3::new(0.0, 1.0, 0.0)
}

fn flatten(raw: RawGeometry) -> Result<TriMesh, ObjError> {
    let count = raw.face_vertex_indices.len();
    let mut mesh = TriMesh {
        vertices: Vec::with_capacity(count),
        normals: Vec::with_capacity(count),
        indices: Vec::with_capacity(count),
    };

    for (i, &(vertex_index, line)) in raw.face_vertex_indices.iter().enumerate() {
        let position = raw.positions.get(vertex_index).copied().ok_or_else(|| {
            malformed(
                line,
                format!(
                    "face references vertex {} but only {} are defined",
                    vertex_index + 1,
                    raw.positions.len()
                ),
            )
        })?;
        mesh.vertices.push(position);

        // Normal stream entry i is matched to face-vertex occurrence i by
        // absolute position, not per face corner. Files that mix faces with
        // and without normal references therefore shift later normals
        // forward. Existing assets depend on this, so it stays.
        let normal = raw
            .face_normal_indices
            .get(i)
            .and_then(|&n| raw.normals.get(n))
            .copied()
            .unwrap_or_else(default_normal);
        mesh.normals.push(normal);

        mesh.indices.push(i as u32);
    }

    Ok(mesh)
}

fn read_text<R: BufRead>(reader: R) -> Result<TriMesh, ObjError> {
    let mut raw = RawGeometry {
        positions: Vec::new(),
        normals: Vec::new(),
        face_vertex_indices: Vec::new(),
        face_normal_indices: Vec::new(),
    };

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let number = number + 1;
        let mut tokens = line.split_whitespace();

        match tokens.next() {
            Some("v") => raw
                .positions
                .push(parse_vec3(tokens, number, "vertex position")?),
            Some("vn") => raw.normals.push(parse_vec3(tokens, number, "normal")?),
            Some("f") => {
                // Only the first three vertex references count; any further
                // tokens on the line are ignored, so n-gons are not fanned
                // into extra triangles.
                for _ in 0..3 {
                    let token = tokens
                        .next()
                        .ok_or_else(|| malformed(number, "face needs 3 vertex references"))?;
                    let (vertex, normal) = parse_face_token(token, number)?;
                    raw.face_vertex_indices.push((vertex, number));
                    if let Some(normal) = normal {
                        raw.face_normal_indices.push(normal);
                    }
                }
            }
            // Comments, texture coordinates, object/group/material
            // directives and blank lines.
            _ => {}
        }
    }

    flatten(raw)
}

/// Loads and flattens an OBJ file from disk.
pub fn read_obj<P: AsRef<Path>>(p: P) -> Result<TriMesh, ObjError> {
    let f = std::fs::File::open(p)?;
    read_text(std::io::BufReader::new(f))
}

/// Parses and flattens OBJ data from memory.
pub fn parse_obj(data: &[u8]) -> Result<TriMesh, ObjError> {
    read_text(std::io::Cursor::new(data))
}
