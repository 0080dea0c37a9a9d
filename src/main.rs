// Disable console on Windows for non-dev builds.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use bevy::{app::App, asset::AssetMetaCheck, log, prelude::*};

pub mod asset_loading;
#[cfg(feature = "audio")]
pub mod audio;
pub mod game;
pub mod leaderboard;
pub mod levels;
pub mod models;
pub mod projectile;
pub mod scene;
pub mod screens;
pub mod structure;
pub mod ui;

use asset_loading::*;
use models::*;
use ui::*;

fn main() {
    let mut app = App::new();

    let window = WindowPlugin {
        primary_window: Some(Window {
            title: "Tumblox".to_string(),
            fit_canvas_to_parent: true,
            ..default()
        }),
        ..default()
    };
    let assets = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };
    let filter = "info,wgpu=warn,naga=off,symphonia=off,calloop=off".to_string();
    let log_level = log::LogPlugin {
        level: log::Level::DEBUG,
        filter,
        ..Default::default()
    };

    app.add_plugins(DefaultPlugins.set(window).set(assets).set(log_level));

    // custom plugins. the order is important
    // be sure you use resources/types AFTER you add plugins that insert them
    app.add_plugins((
        #[cfg(feature = "audio")]
        audio::plugin,
        asset_loading::plugin,
        ui::plugin,
        game::plugin,
    ));

    app.run();
}
