//! Asset loader for LDtk project files
//!
//! Lets Bevy load a `.ldtk` file straight into a [`World`] asset. The world
//! built this way is independent of the bootstrapped [`GameState`](crate::GameState);
//! it is meant for tools and previews that want extra worlds through the
//! asset server.
//!
//! # Example
//!
//! ```rust,ignore
//! use bevy::prelude::*;
//! use pigeon_world::World;
//!
//! fn setup(asset_server: Res<AssetServer>) {
//!     let handle: Handle<World> = asset_server.load("project.ldtk");
//! }
//! ```

use bevy::asset::io::Reader;
use bevy::asset::{AssetLoader, LoadContext};
use bevy::reflect::TypePath;
use pigeon_ldtk::BuildError;
use pigeon_world::World;
use thiserror::Error;

/// Error type for world loading failures
#[derive(Debug, Error)]
pub enum WorldLoadError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Build(#[from] BuildError),
}

/// Asset loader for LDtk project files
#[derive(Default, TypePath)]
pub struct WorldAssetLoader;

impl AssetLoader for WorldAssetLoader {
    type Asset = World;
    type Settings = ();
    type Error = WorldLoadError;

    async fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &Self::Settings,
        _load_context: &mut LoadContext<'_>,
    ) -> Result<Self::Asset, Self::Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).await?;

        Ok(pigeon_ldtk::load_world_from_bytes(&bytes)?)
    }

    fn extensions(&self) -> &[&str] {
        &["ldtk"]
    }
}
