//! Standalone game launcher
//!
//! Run with: pigeon_mode [asset root]
//! The asset root defaults to `assets`.

use bevy::image::{ImageFilterMode, ImageSamplerDescriptor};
use bevy::prelude::*;
use bevy::window::WindowResolution;
use pigeon_runtime::{init, PigeonRuntimePlugin};
use std::path::PathBuf;

fn main() {
    let root = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("assets"));

    // The world must be complete before the app exists; nothing is rendered
    // from a failed bootstrap.
    let state = match init(&root) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Failed to start from {}: {}", root.display(), e);
            std::process::exit(1);
        }
    };
    let config = *state.config();

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Pigeon Mode".to_string(),
                        resolution: WindowResolution::new(config.width, config.height),
                        ..default()
                    }),
                    ..default()
                })
                .set(ImagePlugin {
                    // Pixel art: point sampling everywhere
                    default_sampler: ImageSamplerDescriptor {
                        mag_filter: ImageFilterMode::Nearest,
                        min_filter: ImageFilterMode::Nearest,
                        mipmap_filter: ImageFilterMode::Nearest,
                        ..default()
                    },
                })
                .set(AssetPlugin {
                    file_path: root.to_string_lossy().into_owned(),
                    ..default()
                }),
        )
        .add_plugins(PigeonRuntimePlugin::new(state))
        .run();
}
