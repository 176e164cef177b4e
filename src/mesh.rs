use nalgebra::{Vector2, Vector3};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::idx::MeshIndex;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Vertex(pub Vector3<f64>);

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Uv(pub Vector2<f64>);

/// Topology tag of the exported index list. Only triangle lists are emitted.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct PrimitiveType;

impl PrimitiveType {
    pub const TRIANGLE_LIST: u32 = 4;
}

/// Mesh resource consumed by the engine: positions, texture coordinates and a
/// flat index list, each in source file order.
#[derive(Clone, PartialEq, Default, Debug, serde::Serialize)]
pub struct MeshDocument {
    #[serde(rename = "Vertices")]
    pub vertices: Vec<Vertex>,
    #[serde(rename = "Indices")]
    pub indices: Vec<MeshIndex>,
    #[serde(rename = "UVs")]
    pub uvs: Vec<Uv>,
    #[serde(rename = "PrimitiveType")]
    pub primitive_type: PrimitiveType,
}

impl Vertex {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(Vector3::new(x, y, z))
    }
}

impl Uv {
    pub fn new(u: f64, v: f64) -> Self {
        Self(Vector2::new(u, v))
    }
}

impl MeshDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn uv_count(&self) -> usize {
        self.uvs.len()
    }
}

impl Serialize for Vertex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Vertex", 3)?;
        s.serialize_field("X", &self.0.x)?;
        s.serialize_field("Y", &self.0.y)?;
        s.serialize_field("Z", &self.0.z)?;
        s.end()
    }
}

impl Serialize for Uv {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Uv", 2)?;
        s.serialize_field("X", &self.0.x)?;
        s.serialize_field("Y", &self.0.y)?;
        s.end()
    }
}

impl Serialize for PrimitiveType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(Self::TRIANGLE_LIST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_document_shape() {
        let value = serde_json::to_value(MeshDocument::new()).unwrap();
        assert_eq!(
            value,
            json!({"Vertices": [], "Indices": [], "UVs": [], "PrimitiveType": 4})
        );
    }

    #[test]
    fn field_names_follow_engine_format() {
        let mut doc = MeshDocument::new();
        doc.vertices.push(Vertex::new(1.0, 2.0, 3.0));
        doc.uvs.push(Uv::new(0.25, 0.75));
        doc.indices.push(MeshIndex::from(7));
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["Vertices"][0], json!({"X": 1.0, "Y": 2.0, "Z": 3.0}));
        assert_eq!(value["UVs"][0], json!({"X": 0.25, "Y": 0.75}));
        assert_eq!(value["Indices"], json!([7]));
        assert_eq!(value["PrimitiveType"], json!(4));
    }

    #[test]
    fn counts() {
        let mut doc = MeshDocument::new();
        doc.vertices.push(Vertex::new(0., 0., 0.));
        doc.vertices.push(Vertex::new(1., 0., 0.));
        doc.uvs.push(Uv::new(0., 0.));
        assert_eq!(doc.vertex_count(), 2);
        assert_eq!(doc.uv_count(), 1);
        assert_eq!(doc.index_count(), 0);
    }
}
