use derive_more::{From, Into};
use serde::Serialize;

use crate::error::ParseErrorKind;

/// 0-based position in the vertex sequence of a [`crate::mesh::MeshDocument`].
///
/// Bounds are never checked: a `0` in the source becomes `-1`, and references
/// past the last vertex are kept as written.
#[derive(Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash, Debug, From, Into, Serialize)]
pub struct MeshIndex(i64);

impl MeshIndex {
    /// Converts a 1-based OBJ index token into a 0-based index.
    pub fn from_one_based(token: &str) -> Result<Self, ParseErrorKind> {
        let invalid = || ParseErrorKind::InvalidIndex {
            token: token.to_string(),
        };
        let one_based: i64 = token.parse().map_err(|_| invalid())?;
        one_based.checked_sub(1).map(MeshIndex).ok_or_else(invalid)
    }

    /// Reads the vertex index out of a face-vertex reference of the form
    /// `v[/vt][/vn]`. The texture and normal parts are dropped.
    pub fn from_face_ref(face_ref: &str) -> Result<Self, ParseErrorKind> {
        let vertex = face_ref.split('/').next().unwrap_or_default();
        Self::from_one_based(vertex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_to_zero_based() {
        assert_eq!(MeshIndex::from_one_based("1").unwrap(), MeshIndex::from(0));
        assert_eq!(i64::from(MeshIndex::from_one_based("42").unwrap()), 41);
    }

    #[test]
    fn face_ref_keeps_only_vertex_part() {
        assert_eq!(i64::from(MeshIndex::from_face_ref("3/7/9").unwrap()), 2);
        assert_eq!(i64::from(MeshIndex::from_face_ref("5//2").unwrap()), 4);
        assert_eq!(i64::from(MeshIndex::from_face_ref("8/1").unwrap()), 7);
    }

    #[test]
    fn bounds_are_not_checked() {
        assert_eq!(i64::from(MeshIndex::from_one_based("0").unwrap()), -1);
        assert_eq!(i64::from(MeshIndex::from_one_based("-1").unwrap()), -2);
        assert_eq!(
            i64::from(MeshIndex::from_one_based("4294967297").unwrap()),
            4294967296
        );
    }

    #[test]
    fn rejects_garbage() {
        for token in ["x", "", "1.5", "-9223372036854775808"] {
            assert_eq!(
                MeshIndex::from_face_ref(token),
                Err(ParseErrorKind::InvalidIndex {
                    token: token.to_string()
                })
            );
        }
    }

    #[test]
    fn missing_vertex_part_is_invalid() {
        assert!(matches!(
            MeshIndex::from_face_ref("/2/3"),
            Err(ParseErrorKind::InvalidIndex { .. })
        ));
    }
}
