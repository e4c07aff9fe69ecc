//! Process-wide game state
//!
//! The world, config and image manifest are assembled exactly once at startup
//! and handed to Bevy as a read-only [`GameState`] resource.

use crate::config::GameConfig;
use crate::images::ImageManifest;
use crate::BootstrapError;
use bevy::prelude::Resource;
use pigeon_world::World;
use std::sync::OnceLock;

/// Everything bootstrap produced. Never reassigned after insertion.
#[derive(Debug, Clone, Resource)]
pub struct GameState {
    config: GameConfig,
    images: ImageManifest,
    world: World,
}

impl GameState {
    pub(crate) fn new(config: GameConfig, images: ImageManifest, world: World) -> Self {
        Self {
            config,
            images,
            world,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn images(&self) -> &ImageManifest {
        &self.images
    }

    pub fn world(&self) -> &World {
        &self.world
    }
}

/// One-shot initialization flag.
///
/// The first [`InitGuard::claim`] succeeds; every later one fails with
/// [`BootstrapError::AlreadyInitialized`]. A claim is spent even if the
/// initialization that follows fails.
#[derive(Debug, Default)]
pub struct InitGuard {
    claimed: OnceLock<()>,
}

impl InitGuard {
    pub const fn new() -> Self {
        Self {
            claimed: OnceLock::new(),
        }
    }

    pub fn claim(&self) -> Result<(), BootstrapError> {
        self.claimed
            .set(())
            .map_err(|_| BootstrapError::AlreadyInitialized)
    }

    pub fn is_claimed(&self) -> bool {
        self.claimed.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_claims_once() {
        let guard = InitGuard::new();
        assert!(!guard.is_claimed());
        assert!(guard.claim().is_ok());
        assert!(guard.is_claimed());
        assert!(matches!(
            guard.claim(),
            Err(BootstrapError::AlreadyInitialized)
        ));
    }

    #[test]
    fn test_state_accessors() {
        let state = GameState::new(
            GameConfig {
                width: 320,
                height: 180,
            },
            ImageManifest::from_paths(["images/ground.png"]),
            World::default(),
        );
        assert_eq!(state.config().width, 320);
        assert!(state.images().contains("ground"));
        assert!(state.world().levels.is_empty());
    }
}
