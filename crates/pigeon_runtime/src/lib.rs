//! Runtime support for pigeon_mode games
//!
//! - [`init`] runs the one-time startup sequence and returns the [`GameState`]
//! - [`PigeonRuntimePlugin`] hands that state to Bevy and registers the
//!   `.ldtk` asset loader
//!
//! # Example
//!
//! ```rust,ignore
//! use bevy::prelude::*;
//! use pigeon_runtime::{init, PigeonRuntimePlugin};
//!
//! fn main() {
//!     let state = match init("assets") {
//!         Ok(state) => state,
//!         Err(e) => {
//!             eprintln!("Failed to start: {e}");
//!             std::process::exit(1);
//!         }
//!     };
//!
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(PigeonRuntimePlugin::new(state))
//!         .run();
//! }
//! ```

pub mod bootstrap;
pub mod config;
pub mod images;
pub mod loader;
pub mod state;

pub use bootstrap::{bootstrap, init};
pub use config::{BootstrapSettings, GameConfig};
pub use images::ImageManifest;
pub use loader::{WorldAssetLoader, WorldLoadError};
pub use state::{GameState, InitGuard};

use bevy::prelude::*;
use pigeon_ldtk::BuildError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop the game from starting
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Initialization was attempted more than once.")]
    AlreadyInitialized,
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid game config {path:?}: {source}")]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid bootstrap settings {path:?}: {source}")]
    Settings {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Invalid image manifest {path:?}: {source}")]
    ImageManifest {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Failed to build world: {0}")]
    World(#[from] BuildError),
}

/// Inserts the bootstrapped [`GameState`] and registers the world asset.
pub struct PigeonRuntimePlugin {
    state: GameState,
}

impl PigeonRuntimePlugin {
    pub fn new(state: GameState) -> Self {
        Self { state }
    }
}

impl Plugin for PigeonRuntimePlugin {
    fn build(&self, app: &mut App) {
        if app.world().contains_resource::<AssetServer>() {
            app.init_asset::<pigeon_world::World>()
                .register_asset_loader(WorldAssetLoader);
        } else {
            warn!("AssetPlugin not found - .ldtk files cannot be loaded as assets");
        }

        app.insert_resource(*self.state.config())
            .insert_resource(self.state.clone())
            .add_systems(Startup, log_startup_summary);
    }
}

/// Log what bootstrap produced, and any tileset image the manifest lacks
fn log_startup_summary(state: Res<GameState>) {
    info!("Pigeon Mode Game Framework initialized.");

    let world = state.world();
    info!(
        "World: {} entities, {} levels, {} tilesets; {} images",
        world.entities.len(),
        world.levels.len(),
        world.tilesets.len(),
        state.images().len()
    );

    for id in state.images().missing_for(world) {
        warn!("Tileset image source '{}' is not listed in the image manifest", id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pigeon_world::World;

    fn state() -> GameState {
        let mut world = World::default();
        world
            .entities
            .insert("Player".to_string(), pigeon_world::WorldEntity::new("#fff"));
        GameState::new(
            GameConfig {
                width: 256,
                height: 144,
            },
            ImageManifest::default(),
            world,
        )
    }

    #[test]
    fn test_plugin_inserts_state_and_config() {
        let mut app = App::new();
        app.add_plugins(PigeonRuntimePlugin::new(state()));

        let config = app.world().resource::<GameConfig>();
        assert_eq!((config.width, config.height), (256, 144));

        let state = app.world().resource::<GameState>();
        assert!(state.world().entity("Player").is_some());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            BootstrapError::AlreadyInitialized.to_string(),
            "Initialization was attempted more than once."
        );
    }
}
