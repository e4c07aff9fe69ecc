//! Levels, painted layers and placed tiles

use crate::WorldEntityInstance;
use serde::{Deserialize, Serialize};

/// A tile painted on a layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldTile {
    /// Tile index within the layer's tileset
    pub id: u32,
    /// Pixel x within the level
    pub x: i32,
    /// Pixel y within the level
    pub y: i32,
}

impl WorldTile {
    /// Grid cell of this tile for a given cell size
    pub fn cell(&self, tile_size: u32) -> (i32, i32) {
        let size = tile_size.max(1) as i32;
        (self.x.div_euclid(size), self.y.div_euclid(size))
    }
}

/// A single tile layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldLayer {
    pub id: String,
    /// Pixels per grid cell
    pub tile_size: u32,
    /// Identifier of the tileset this layer paints with, if it resolved
    #[serde(rename = "tilesetID")]
    pub tileset_id: Option<String>,
    /// Tiles in paint order
    pub tiles: Vec<WorldTile>,
    #[serde(default)]
    pub entity_instances: Vec<WorldEntityInstance>,
}

impl WorldLayer {
    /// Find the tile whose cell contains the pixel `(x, y)`.
    ///
    /// If several tiles share the cell the last painted one wins.
    pub fn tile_at(&self, x: i32, y: i32) -> Option<&WorldTile> {
        let probe = WorldTile { id: 0, x, y };
        let cell = probe.cell(self.tile_size);
        self.tiles
            .iter()
            .rev()
            .find(|t| t.cell(self.tile_size) == cell)
    }
}

/// A level: its layers ordered back-to-front
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct WorldLevel {
    pub layers: Vec<WorldLayer>,
}

impl WorldLevel {
    /// Get a layer by identifier
    pub fn layer(&self, id: &str) -> Option<&WorldLayer> {
        self.layers.iter().find(|l| l.id == id)
    }
}
