//! Tileset geometry and per-tile flags

use serde::{Deserialize, Serialize};

/// UTF-16 units stripped from the front of a tileset image path (the
/// `images/` directory).
const IMAGE_DIR_PREFIX_LEN: usize = 7;
/// UTF-16 units stripped from the back (the `.png` extension).
const IMAGE_EXTENSION_LEN: usize = 4;

/// Derive the image source ID for a tileset image path.
///
/// Drops the trailing 4 units, then the leading 7 units of what is left:
/// `images/terrain.png` becomes `terrain`. Lengths count UTF-16 code units,
/// the way the editor's JavaScript tooling measures strings, so a character
/// outside the Basic Multilingual Plane counts twice. A surrogate pair split
/// by either cut becomes U+FFFD. Inputs too short for either step collapse to
/// an empty string.
pub fn image_source_id(rel_path: &str) -> String {
    let units: Vec<u16> = rel_path.encode_utf16().collect();
    let end = units.len().saturating_sub(IMAGE_EXTENSION_LEN);
    let start = IMAGE_DIR_PREFIX_LEN.min(end);
    String::from_utf16_lossy(&units[start..end])
}

/// Per-tile metadata unpacked from the tileset's custom data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldTilesetTile {
    /// Tile index within the tileset
    pub id: u32,
    /// Whether this tile blocks movement
    #[serde(default)]
    pub is_collidable: bool,
}

/// A tileset image sliced into a square grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldTileset {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Pixels per grid cell
    pub tile_size: u32,
    /// ID of the image source holding the sheet, see [`image_source_id`]
    #[serde(rename = "imageSourceID")]
    pub image_source_id: String,
    /// Tiles that carry custom data, in authoring order
    pub tiles: Vec<WorldTilesetTile>,
}

impl WorldTileset {
    /// Number of tile columns in the sheet
    pub fn columns(&self) -> u32 {
        if self.tile_size == 0 {
            0
        } else {
            self.width / self.tile_size
        }
    }

    /// Number of tile rows in the sheet
    pub fn rows(&self) -> u32 {
        if self.tile_size == 0 {
            0
        } else {
            self.height / self.tile_size
        }
    }

    /// Total number of cells in the sheet
    pub fn tile_count(&self) -> u32 {
        self.columns() * self.rows()
    }

    /// Get the metadata for a tile, if it has any.
    ///
    /// When the same tile index appears more than once, the first record wins.
    pub fn tile(&self, tile_id: u32) -> Option<&WorldTilesetTile> {
        self.tiles.iter().find(|t| t.id == tile_id)
    }

    /// Check if a tile has collision. Tiles without metadata never collide.
    pub fn is_tile_collidable(&self, tile_id: u32) -> bool {
        self.tile(tile_id).is_some_and(|t| t.is_collidable)
    }

    /// Pixel origin of a tile index inside the sheet, as `(x, y)`.
    ///
    /// Returns `None` if the index is outside the sheet.
    pub fn tile_source_position(&self, tile_id: u32) -> Option<(u32, u32)> {
        let columns = self.columns();
        if columns == 0 || tile_id >= self.tile_count() {
            return None;
        }
        let col = tile_id % columns;
        let row = tile_id / columns;
        Some((col * self.tile_size, row * self.tile_size))
    }
}
