//! Per-tile custom data unpacking

use crate::project::{LdtkTileCustomData, LdtkTilesetDef};
use crate::BuildError;
use pigeon_world::WorldTilesetTile;
use serde::de::{Error as _, Unexpected};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Properties the framework reads from a tile's custom data.
///
/// Custom data is free text in the editor; pigeon_mode reads it as a JSON
/// object. Keys other than the ones below are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TileCustomData {
    #[serde(rename = "pmglCollision", default)]
    pub collision: Option<bool>,
}

impl TileCustomData {
    /// Decode the JSON string stored in a custom data record.
    ///
    /// Arrays and non-null scalars carry no properties and decode to the
    /// defaults. Invalid JSON, a bare `null` and a non-boolean
    /// `pmglCollision` are errors.
    pub fn parse(data: &str) -> Result<Self, serde_json::Error> {
        match serde_json::from_str::<Value>(data)? {
            value @ Value::Object(_) => serde_json::from_value(value),
            Value::Null => Err(serde_json::Error::invalid_type(
                Unexpected::Unit,
                &"a JSON object",
            )),
            _ => Ok(Self::default()),
        }
    }
}

/// Unpack one custom data record of a tileset
pub fn unpack_tile(
    tileset_identifier: &str,
    record: &LdtkTileCustomData,
) -> Result<WorldTilesetTile, BuildError> {
    let properties =
        TileCustomData::parse(&record.data).map_err(|source| BuildError::MalformedTileProperty {
            tileset: tileset_identifier.to_string(),
            tile_id: record.tile_id,
            source,
        })?;

    Ok(WorldTilesetTile {
        id: record.tile_id,
        is_collidable: properties.collision.unwrap_or(false),
    })
}

/// Unpack every custom data record of a tileset, in authoring order.
///
/// Stops at the first record that fails to decode.
pub fn unpack_tiles(tileset: &LdtkTilesetDef) -> Result<Vec<WorldTilesetTile>, BuildError> {
    tileset
        .custom_data
        .iter()
        .map(|record| unpack_tile(&tileset.identifier, record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(tile_id: u32, data: &str) -> LdtkTileCustomData {
        LdtkTileCustomData {
            tile_id,
            data: data.to_string(),
        }
    }

    #[test]
    fn test_collision_flag() {
        let tile = unpack_tile("Ground", &record(4, r#"{"pmglCollision":true}"#)).unwrap();
        assert_eq!(tile.id, 4);
        assert!(tile.is_collidable);

        let tile = unpack_tile("Ground", &record(4, r#"{"pmglCollision":false}"#)).unwrap();
        assert!(!tile.is_collidable);
    }

    #[test]
    fn test_missing_flag_defaults_to_false() {
        let tile = unpack_tile("Ground", &record(0, r#"{"footstep":"grass"}"#)).unwrap();
        assert!(!tile.is_collidable);

        let tile = unpack_tile("Ground", &record(0, "{}")).unwrap();
        assert!(!tile.is_collidable);

        let tile = unpack_tile("Ground", &record(0, r#"{"pmglCollision":null}"#)).unwrap();
        assert!(!tile.is_collidable);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = unpack_tile("Ground", &record(9, "{pmglCollision: true")).unwrap_err();
        match err {
            BuildError::MalformedTileProperty {
                tileset, tile_id, ..
            } => {
                assert_eq!(tileset, "Ground");
                assert_eq!(tile_id, 9);
            }
            other => panic!("Expected MalformedTileProperty, got {other:?}"),
        }
    }

    #[test]
    fn test_wrong_flag_type_is_an_error() {
        assert!(unpack_tile("Ground", &record(1, r#"{"pmglCollision":"yes"}"#)).is_err());
        assert!(unpack_tile("Ground", &record(1, r#"{"pmglCollision":1}"#)).is_err());
    }

    #[test]
    fn test_bare_null_is_an_error() {
        let err = unpack_tile("Ground", &record(5, "null")).unwrap_err();
        assert!(matches!(
            err,
            BuildError::MalformedTileProperty { tile_id: 5, .. }
        ));
    }

    #[test]
    fn test_arrays_and_scalars_carry_no_flag() {
        for data in ["[true]", "[]", "3", r#""abc""#, "true", "false"] {
            let tile = unpack_tile("Ground", &record(2, data)).unwrap();
            assert!(!tile.is_collidable, "{data} should not be collidable");
        }
    }

    #[test]
    fn test_unpack_tiles_keeps_order_and_fails_fast() {
        let mut tileset = LdtkTilesetDef {
            uid: 1,
            identifier: "Ground".to_string(),
            px_wid: 32,
            px_hei: 32,
            tile_grid_size: 16,
            rel_path: "images/ground.png".to_string(),
            custom_data: vec![
                record(3, r#"{"pmglCollision":true}"#),
                record(1, "{}"),
            ],
        };

        let tiles = unpack_tiles(&tileset).unwrap();
        let ids: Vec<u32> = tiles.iter().map(|t| t.id).collect();
        assert_eq!(ids, [3, 1]);

        tileset.custom_data.push(record(2, "not json"));
        assert!(unpack_tiles(&tileset).is_err());
    }
}
