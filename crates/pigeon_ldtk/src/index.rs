//! Lookup tables over the definition arrays

use crate::project::{LdtkDefs, LdtkLayerDef, LdtkTilesetDef};
use std::collections::HashMap;

/// Borrowed UID index over an LDtk project's layer and tileset definitions.
///
/// Lookups return the first definition declared with a UID, the same as a
/// linear first-match scan. Identifier-keyed lookup lives on the built
/// [`World`](pigeon_world::World), whose maps keep the last definition.
#[derive(Debug)]
pub struct DefinitionIndex<'a> {
    layers_by_uid: HashMap<i64, &'a LdtkLayerDef>,
    tilesets_by_uid: HashMap<i64, &'a LdtkTilesetDef>,
}

impl<'a> DefinitionIndex<'a> {
    pub fn new(defs: &'a LdtkDefs) -> Self {
        let mut layers_by_uid = HashMap::with_capacity(defs.layers.len());
        for layer in &defs.layers {
            layers_by_uid.entry(layer.uid).or_insert(layer);
        }

        let mut tilesets_by_uid = HashMap::with_capacity(defs.tilesets.len());
        for tileset in &defs.tilesets {
            tilesets_by_uid.entry(tileset.uid).or_insert(tileset);
        }

        Self {
            layers_by_uid,
            tilesets_by_uid,
        }
    }

    pub fn layer_def(&self, uid: i64) -> Option<&'a LdtkLayerDef> {
        self.layers_by_uid.get(&uid).copied()
    }

    pub fn tileset_def(&self, uid: i64) -> Option<&'a LdtkTilesetDef> {
        self.tilesets_by_uid.get(&uid).copied()
    }

    /// Resolve layer def UID -> tileset def UID -> tileset identifier.
    ///
    /// `None` if any hop misses or the layer def has no tileset.
    pub fn tileset_identifier_for_layer(&self, layer_def_uid: i64) -> Option<&'a str> {
        let layer_def = self.layer_def(layer_def_uid)?;
        let tileset_uid = layer_def.tileset_def_uid?;
        self.tileset_def(tileset_uid)
            .map(|tileset| tileset.identifier.as_str())
    }
}
