use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::{ConvertError, Result};
use crate::mesh::MeshDocument;

/// Human-readable counts printed before the document is written.
pub fn summary(mesh: &MeshDocument) -> [String; 3] {
    [
        format!("Parsed {} vertices", mesh.vertex_count()),
        format!("Parsed {} indices", mesh.index_count()),
        format!("Parsed {} UVs", mesh.uv_count()),
    ]
}

/// Serializes `mesh` to `path`, replacing any existing file.
pub fn write_document(mesh: &MeshDocument, path: &Path) -> Result<()> {
    let io_err = |source: std::io::Error| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, mesh).map_err(|e| {
        if e.is_io() {
            io_err(e.into())
        } else {
            ConvertError::Json(e)
        }
    })?;
    writer.flush().map_err(io_err)?;
    info!(path = %path.display(), "wrote mesh document");
    Ok(())
}
