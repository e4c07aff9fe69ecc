//! Startup sequence
//!
//! Reads the game config, image manifest and LDtk project from an asset root
//! and builds the world, in that order. Any failure is fatal: no state is
//! produced and the game must not start.

use crate::config::{BootstrapSettings, GameConfig};
use crate::images::ImageManifest;
use crate::state::{GameState, InitGuard};
use crate::BootstrapError;
use std::path::Path;

static INIT_GUARD: InitGuard = InitGuard::new();

/// Initialize the game from an asset root. Only the first call in a process
/// may succeed.
pub fn init(root: impl AsRef<Path>) -> Result<GameState, BootstrapError> {
    bootstrap(&INIT_GUARD, root.as_ref())
}

/// Run the startup sequence under a specific guard
pub fn bootstrap(guard: &InitGuard, root: &Path) -> Result<GameState, BootstrapError> {
    guard.claim()?;

    let settings = BootstrapSettings::load_or_default(root)?;

    let config_path = root.join(&settings.config_file);
    let config = GameConfig::from_json(&read_to_string(&config_path)?)
        .map_err(|source| BootstrapError::Config {
            path: config_path,
            source,
        })?;

    let images_path = root.join(&settings.images_file);
    let images = ImageManifest::from_json(&read_to_string(&images_path)?).map_err(|source| {
        BootstrapError::ImageManifest {
            path: images_path,
            source,
        }
    })?;

    let project_path = root.join(&settings.project_file);
    let bytes = std::fs::read(&project_path).map_err(|source| BootstrapError::Io {
        path: project_path,
        source,
    })?;
    let world = pigeon_ldtk::load_world_from_bytes(&bytes)?;

    Ok(GameState::new(config, images, world))
}

fn read_to_string(path: &Path) -> Result<String, BootstrapError> {
    std::fs::read_to_string(path).map_err(|source| BootstrapError::Io {
        path: path.to_path_buf(),
        source,
    })
}
