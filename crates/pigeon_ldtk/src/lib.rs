//! LDtk project import for pigeon_mode
//!
//! Converts an LDtk export (`.ldtk` JSON) into the engine's [`World`] model.
//! The conversion runs once, synchronously, and fails as a whole if any tile's
//! custom data cannot be decoded.
//!
//! # Example
//!
//! ```rust,ignore
//! use pigeon_ldtk::load_world_from_path;
//!
//! let world = load_world_from_path("assets/project.ldtk")?;
//! for (id, level) in &world.levels {
//!     println!("{id}: {} layers", level.layers.len());
//! }
//! ```

mod assemble;
mod index;
mod layers;
mod project;
mod tiles;

pub use assemble::build_world;
pub use index::DefinitionIndex;
pub use layers::{resolve_layer, resolve_level};
pub use project::{
    LdtkDefs, LdtkEntityDef, LdtkGridTile, LdtkLayerDef, LdtkLayerInstance, LdtkLevel,
    LdtkProject, LdtkTileCustomData, LdtkTilesetDef,
};
pub use tiles::{unpack_tile, unpack_tiles, TileCustomData};

use pigeon_world::World;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while importing an LDtk project
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Malformed custom data for tile {tile_id} in tileset '{tileset}': {source}")]
    MalformedTileProperty {
        tileset: String,
        tile_id: u32,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to parse LDtk project: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to read LDtk project: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse an LDtk project from a JSON string
pub fn load_project_from_str(json: &str) -> Result<LdtkProject, BuildError> {
    Ok(serde_json::from_str(json)?)
}

/// Parse an LDtk project from bytes
pub fn load_project_from_bytes(bytes: &[u8]) -> Result<LdtkProject, BuildError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Read and parse an LDtk project file
pub fn load_project_from_path(path: impl AsRef<Path>) -> Result<LdtkProject, BuildError> {
    let bytes = std::fs::read(path)?;
    load_project_from_bytes(&bytes)
}

/// Parse an LDtk project from a JSON string and build its world
pub fn load_world_from_str(json: &str) -> Result<World, BuildError> {
    build_world(&load_project_from_str(json)?)
}

/// Parse an LDtk project from bytes and build its world
pub fn load_world_from_bytes(bytes: &[u8]) -> Result<World, BuildError> {
    build_world(&load_project_from_bytes(bytes)?)
}

/// Read an LDtk project file and build its world
pub fn load_world_from_path(path: impl AsRef<Path>) -> Result<World, BuildError> {
    build_world(&load_project_from_path(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{ "defs": { "entities": [], "layers": [], "tilesets": [] }, "levels": [] }"#;

    #[test]
    fn test_load_minimal_world() {
        let world = load_world_from_str(MINIMAL).unwrap();
        assert!(world.entities.is_empty());
        assert!(world.levels.is_empty());
        assert!(world.tilesets.is_empty());
    }

    #[test]
    fn test_invalid_document_is_json_error() {
        let result = load_world_from_bytes(b"{ \"defs\": ");
        assert!(matches!(result, Err(BuildError::Json(_))));
    }

    #[test]
    fn test_load_from_path() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("project.ldtk");
        std::fs::write(&path, MINIMAL).unwrap();

        assert!(load_world_from_path(&path).is_ok());
        assert!(matches!(
            load_world_from_path(tmp.path().join("missing.ldtk")),
            Err(BuildError::Io(_))
        ));
    }
}
