//! LDtk export document
//!
//! Only the parts of the `.ldtk` format the world builder reads are modelled.
//! Every other field in the file is ignored.

use serde::{Deserialize, Serialize};

/// Root of an LDtk project file
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LdtkProject {
    pub defs: LdtkDefs,
    #[serde(default)]
    pub levels: Vec<LdtkLevel>,
}

/// Definition tables, cross-referenced by UID from level data
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LdtkDefs {
    #[serde(default)]
    pub entities: Vec<LdtkEntityDef>,
    #[serde(default)]
    pub layers: Vec<LdtkLayerDef>,
    #[serde(default)]
    pub tilesets: Vec<LdtkTilesetDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LdtkEntityDef {
    pub identifier: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LdtkLayerDef {
    pub uid: i64,
    /// UID of the tileset painted by this layer, if any
    #[serde(default)]
    pub tileset_def_uid: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LdtkTilesetDef {
    pub uid: i64,
    pub identifier: String,
    pub px_wid: u32,
    pub px_hei: u32,
    pub tile_grid_size: u32,
    /// Image path relative to the project file
    pub rel_path: String,
    #[serde(default)]
    pub custom_data: Vec<LdtkTileCustomData>,
}

/// Designer-authored data attached to a single tile
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LdtkTileCustomData {
    pub tile_id: u32,
    /// JSON object encoded as a string
    pub data: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LdtkLevel {
    pub identifier: String,
    /// Layer instances, front-most first
    #[serde(default)]
    pub layer_instances: Vec<LdtkLayerInstance>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LdtkLayerInstance {
    #[serde(rename = "__identifier")]
    pub identifier: String,
    #[serde(rename = "__gridSize")]
    pub grid_size: u32,
    pub layer_def_uid: i64,
    #[serde(default)]
    pub grid_tiles: Vec<LdtkGridTile>,
}

/// A tile painted in a tile layer
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LdtkGridTile {
    /// Tile index within the layer's tileset
    pub t: u32,
    /// Pixel position within the level
    pub px: [i32; 2],
}
