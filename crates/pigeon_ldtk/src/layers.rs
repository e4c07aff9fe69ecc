//! Level layer resolution
//!
//! Turns authored layer instances into runtime layers. LDtk lists layers
//! front-most first; the runtime paints back-to-front, so levels come out with
//! their layers reversed. Tiles inside a layer keep their authored order.

use crate::index::DefinitionIndex;
use crate::project::{LdtkGridTile, LdtkLayerInstance, LdtkLevel};
use pigeon_world::{WorldLayer, WorldLevel, WorldTile};
use tracing::debug;

/// Resolve every layer instance of a level, back-most layer first.
pub fn resolve_level(index: &DefinitionIndex<'_>, level: &LdtkLevel) -> WorldLevel {
    WorldLevel {
        layers: level
            .layer_instances
            .iter()
            .rev()
            .map(|instance| resolve_layer(index, &level.identifier, instance))
            .collect(),
    }
}

/// Resolve a single layer instance.
///
/// A layer whose definition or tileset cannot be found still resolves, with
/// no tileset.
pub fn resolve_layer(
    index: &DefinitionIndex<'_>,
    level_identifier: &str,
    instance: &LdtkLayerInstance,
) -> WorldLayer {
    let tileset_id = index.tileset_identifier_for_layer(instance.layer_def_uid);
    if tileset_id.is_none() && !instance.grid_tiles.is_empty() {
        debug!(
            "Layer '{}' in level '{}' has tiles but no tileset (layer def uid {})",
            instance.identifier, level_identifier, instance.layer_def_uid
        );
    }

    WorldLayer {
        id: instance.identifier.clone(),
        tile_size: instance.grid_size,
        tileset_id: tileset_id.map(str::to_string),
        tiles: instance.grid_tiles.iter().map(grid_tile).collect(),
        entity_instances: Vec::new(),
    }
}

fn grid_tile(tile: &LdtkGridTile) -> WorldTile {
    WorldTile {
        id: tile.t,
        x: tile.px[0],
        y: tile.px[1],
    }
}
