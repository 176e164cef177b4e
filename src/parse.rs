//! Line-oriented reader for the OBJ subset the engine consumes.
//!
//! Only `v`, `vt` and `f` records are read; every other line is skipped.
//! The first malformed number aborts the whole parse.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, trace};

use crate::error::{ConvertError, ParseErrorKind, Result};
use crate::idx::MeshIndex;
use crate::mesh::{MeshDocument, Uv, Vertex};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LineKind {
    Vertex,
    Uv,
    Face,
}

impl LineKind {
    pub const VERTEX_MARKER: &'static str = "v";
    pub const UV_MARKER: &'static str = "vt";
    pub const FACE_MARKER: &'static str = "f";

    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            Self::VERTEX_MARKER => Some(LineKind::Vertex),
            Self::UV_MARKER => Some(LineKind::Uv),
            Self::FACE_MARKER => Some(LineKind::Face),
            _ => None,
        }
    }

    pub fn marker(self) -> &'static str {
        match self {
            LineKind::Vertex => Self::VERTEX_MARKER,
            LineKind::Uv => Self::UV_MARKER,
            LineKind::Face => Self::FACE_MARKER,
        }
    }
}

/// Splits a line on single spaces and classifies it by its first token.
/// Returns `None` for blank lines and unrecognized records.
pub fn classify(line: &str) -> Option<(LineKind, Vec<&str>)> {
    let mut tokens = line.trim().split(' ');
    let kind = LineKind::from_marker(tokens.next()?)?;
    Some((kind, tokens.collect()))
}

fn parse_floats<const N: usize>(
    kind: LineKind,
    tokens: &[&str],
) -> std::result::Result<[f64; N], ParseErrorKind> {
    if tokens.len() < N {
        return Err(ParseErrorKind::MissingComponents {
            marker: kind.marker(),
            expected: N,
            found: tokens.len(),
        });
    }
    let mut out = [0.; N];
    for (slot, token) in out.iter_mut().zip(tokens) {
        *slot = token.parse().map_err(|_| ParseErrorKind::InvalidFloat {
            token: token.to_string(),
        })?;
    }
    Ok(out)
}

pub fn parse_vertex(tokens: &[&str]) -> std::result::Result<Vertex, ParseErrorKind> {
    let [x, y, z] = parse_floats::<3>(LineKind::Vertex, tokens)?;
    Ok(Vertex::new(x, y, z))
}

pub fn parse_uv(tokens: &[&str]) -> std::result::Result<Uv, ParseErrorKind> {
    let [u, v] = parse_floats::<2>(LineKind::Uv, tokens)?;
    Ok(Uv::new(u, v))
}

/// Face arity is not checked: every reference on the line is appended, so
/// quads come out as four consecutive indices.
pub fn parse_face(
    tokens: &[&str],
    indices: &mut Vec<MeshIndex>,
) -> std::result::Result<(), ParseErrorKind> {
    for token in tokens {
        indices.push(MeshIndex::from_face_ref(token)?);
    }
    Ok(())
}

pub fn parse_reader<R: BufRead>(reader: R, path: &Path) -> Result<MeshDocument> {
    let mut mesh = MeshDocument::new();
    let mut skipped = 0usize;

    for (number, line) in reader.lines().enumerate() {
        let line_no = number + 1;
        let line = line.map_err(|source| ConvertError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let Some((kind, tokens)) = classify(&line) else {
            skipped += 1;
            continue;
        };
        trace!(line = line_no, ?kind, "classified");
        match kind {
            LineKind::Vertex => mesh
                .vertices
                .push(parse_vertex(&tokens).map_err(|e| e.at(line_no))?),
            LineKind::Uv => mesh
                .uvs
                .push(parse_uv(&tokens).map_err(|e| e.at(line_no))?),
            LineKind::Face => {
                parse_face(&tokens, &mut mesh.indices).map_err(|e| e.at(line_no))?
            }
        }
    }

    debug!(skipped, "ignored unrecognized lines");
    Ok(mesh)
}

pub fn parse_file(path: &Path) -> Result<MeshDocument> {
    let file = File::open(path).map_err(|source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_reader(BufReader::new(file), path)
}
