//! Engine-ready world model for pigeon_mode
//!
//! This crate provides the normalized types every runtime system reads from:
//! - `World` - Identifier-keyed entities, levels and tilesets
//! - `WorldLevel` / `WorldLayer` / `WorldTile` - Painted tile layers, back-to-front
//! - `WorldTileset` / `WorldTilesetTile` - Tileset geometry and per-tile flags
//! - `WorldEntity` - Entity definition data
//!
//! The model is built once from an editor export (see `pigeon_ldtk`) and is
//! read-only afterwards.

mod entity;
mod level;
mod tileset;
mod world;

pub use entity::{WorldEntity, WorldEntityInstance};
pub use level::{WorldLayer, WorldLevel, WorldTile};
pub use tileset::{image_source_id, WorldTileset, WorldTilesetTile};
pub use world::World;

/// Ordered identifier-keyed mapping used throughout the model.
///
/// Iterates in first-insertion order. Re-inserting an existing key replaces the
/// value and keeps the key's original position.
pub type IdMap<V> = indexmap::IndexMap<String, V>;
