//! The assembled world

use crate::{IdMap, WorldEntity, WorldLayer, WorldLevel, WorldTileset};
use serde::{Deserialize, Serialize};

/// Everything the runtime knows about the game's content.
///
/// Built once at startup and never mutated. All three maps are keyed by the
/// editor's identifiers and iterate in authoring order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "bevy", derive(bevy::asset::Asset, bevy::reflect::TypePath))]
pub struct World {
    pub entities: IdMap<WorldEntity>,
    pub levels: IdMap<WorldLevel>,
    pub tilesets: IdMap<WorldTileset>,
}

impl World {
    /// Get an entity definition by identifier
    pub fn entity(&self, id: &str) -> Option<&WorldEntity> {
        self.entities.get(id)
    }

    /// Get a level by identifier
    pub fn level(&self, id: &str) -> Option<&WorldLevel> {
        self.levels.get(id)
    }

    /// Get a tileset by identifier
    pub fn tileset(&self, id: &str) -> Option<&WorldTileset> {
        self.tilesets.get(id)
    }

    /// Get the tileset a layer paints with
    pub fn layer_tileset(&self, layer: &WorldLayer) -> Option<&WorldTileset> {
        layer
            .tileset_id
            .as_deref()
            .and_then(|id| self.tilesets.get(id))
    }

    /// Check whether any layer of a level has a collidable tile covering the
    /// pixel `(x, y)`.
    ///
    /// Unknown levels and layers without a tileset never collide.
    pub fn is_collidable_at(&self, level_id: &str, x: i32, y: i32) -> bool {
        let Some(level) = self.levels.get(level_id) else {
            return false;
        };
        level.layers.iter().any(|layer| {
            let Some(tileset) = self.layer_tileset(layer) else {
                return false;
            };
            layer
                .tile_at(x, y)
                .is_some_and(|tile| tileset.is_tile_collidable(tile.id))
        })
    }

    /// Image source IDs referenced by tilesets, without duplicates, in
    /// tileset order.
    pub fn image_source_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = Vec::new();
        for tileset in self.tilesets.values() {
            if !ids.contains(&tileset.image_source_id.as_str()) {
                ids.push(&tileset.image_source_id);
            }
        }
        ids
    }
}
