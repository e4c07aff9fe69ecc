//! Image manifest (`images.json`)
//!
//! Lists every image the game ships. Each path is registered under the same
//! short ID tilesets use for their `image_source_id`, so renderers can go from
//! a tileset to its image without touching paths.

use indexmap::IndexMap;
use pigeon_world::{image_source_id, World};
use serde::Deserialize;

/// Image paths keyed by image source ID, in manifest order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageManifest {
    sources: IndexMap<String, String>,
}

impl ImageManifest {
    /// Build from a list of image paths
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut sources = IndexMap::new();
        for path in paths {
            let path = path.into();
            sources.insert(image_source_id(&path), path);
        }
        Self { sources }
    }

    /// Parse the JSON array stored in `images.json`
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        #[derive(Deserialize)]
        #[serde(transparent)]
        struct Paths(Vec<String>);

        let Paths(paths) = serde_json::from_str(json)?;
        Ok(Self::from_paths(paths))
    }

    /// Get the image path for an image source ID
    pub fn path(&self, id: &str) -> Option<&str> {
        self.sources.get(id).map(String::as_str)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.sources.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Iterate `(image source ID, path)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.sources.iter().map(|(id, path)| (id.as_str(), path.as_str()))
    }

    /// Image source IDs used by the world's tilesets that the manifest lacks
    pub fn missing_for<'w>(&self, world: &'w World) -> Vec<&'w str> {
        world
            .image_source_ids()
            .into_iter()
            .filter(|id| !self.contains(id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pigeon_world::WorldTileset;

    #[test]
    fn test_paths_are_keyed_by_source_id() {
        let manifest =
            ImageManifest::from_json(r#"["images/ground.png", "images/player.png"]"#).unwrap();
        assert_eq!(manifest.len(), 2);
        assert_eq!(manifest.path("ground"), Some("images/ground.png"));
        assert_eq!(manifest.path("player"), Some("images/player.png"));
        assert!(manifest.path("images/ground.png").is_none());

        let ids: Vec<&str> = manifest.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, ["ground", "player"]);
    }

    #[test]
    fn test_manifest_must_be_an_array() {
        assert!(ImageManifest::from_json(r#"{ "ground": "images/ground.png" }"#).is_err());
    }

    #[test]
    fn test_missing_for_world() {
        let mut world = World::default();
        for (name, source) in [("Ground", "ground"), ("Sky", "sky")] {
            world.tilesets.insert(
                name.to_string(),
                WorldTileset {
                    width: 16,
                    height: 16,
                    tile_size: 16,
                    image_source_id: source.to_string(),
                    tiles: Vec::new(),
                },
            );
        }

        let manifest = ImageManifest::from_paths(["images/ground.png"]);
        assert_eq!(manifest.missing_for(&world), ["sky"]);
    }
}
