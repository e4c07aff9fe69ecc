//! Entity definition data

use serde::{Deserialize, Serialize};

/// An entity definition as seen by the runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldEntity {
    /// Editor color, as authored (e.g. `#ffcc00`)
    pub color: String,
}

impl WorldEntity {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
        }
    }

}

/// An entity placed on a layer.
///
/// The world builder never emits these; gameplay code that places entities
/// at runtime owns them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldEntityInstance {
    /// Identifier of the entity definition
    #[serde(rename = "entityID")]
    pub entity_id: String,
    pub x: i32,
    pub y: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_uses_entity_id_key() {
        let instance = WorldEntityInstance {
            entity_id: "Player".to_string(),
            x: 8,
            y: 16,
        };
        let json = serde_json::to_value(&instance).unwrap();
        assert_eq!(json["entityID"], "Player");
        assert_eq!(json["x"], 8);
    }
}
