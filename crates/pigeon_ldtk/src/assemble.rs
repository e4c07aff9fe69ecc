//! World assembly

use crate::index::DefinitionIndex;
use crate::layers::resolve_level;
use crate::project::{LdtkProject, LdtkTilesetDef};
use crate::tiles::unpack_tiles;
use crate::BuildError;
use pigeon_world::{image_source_id, IdMap, World, WorldEntity, WorldTileset};
use tracing::info;

/// Build the runtime world from an LDtk project.
///
/// Either every map is built or the whole call fails; no partial `World` is
/// ever returned. Duplicate identifiers overwrite earlier entries in place.
pub fn build_world(project: &LdtkProject) -> Result<World, BuildError> {
    let index = DefinitionIndex::new(&project.defs);

    let mut entities = IdMap::with_capacity(project.defs.entities.len());
    for def in &project.defs.entities {
        entities.insert(def.identifier.clone(), WorldEntity::new(def.color.clone()));
    }

    let mut levels = IdMap::with_capacity(project.levels.len());
    for level in &project.levels {
        levels.insert(level.identifier.clone(), resolve_level(&index, level));
    }

    let mut tilesets = IdMap::with_capacity(project.defs.tilesets.len());
    for def in &project.defs.tilesets {
        tilesets.insert(def.identifier.clone(), build_tileset(def)?);
    }

    info!(
        "Built world: {} entities, {} levels, {} tilesets",
        entities.len(),
        levels.len(),
        tilesets.len()
    );

    Ok(World {
        entities,
        levels,
        tilesets,
    })
}

fn build_tileset(def: &LdtkTilesetDef) -> Result<WorldTileset, BuildError> {
    Ok(WorldTileset {
        width: def.px_wid,
        height: def.px_hei,
        tile_size: def.tile_grid_size,
        image_source_id: image_source_id(&def.rel_path),
        tiles: unpack_tiles(def)?,
    })
}
