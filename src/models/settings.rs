use super::*;
use serde::Deserialize;
use std::{error::Error, fs};

#[cfg(feature = "audio")]
use bevy_seedling::prelude::Volume;

/// Stand-in so call sites don't have to cfg-gate on the audio feature.
#[cfg(not(feature = "audio"))]
#[derive(Debug, Clone, Copy)]
pub struct Volume;

#[cfg(not(feature = "audio"))]
impl Volume {
    pub const SILENT: Volume = Volume;
}

pub const SETTINGS_PATH: &str = "assets/settings.ron";

pub fn plugin(app: &mut App) {
    let launch = LaunchOptions::from_env();
    debug!("launch options: {launch:?}");
    app.insert_resource(launch);
    app.init_resource::<Settings>();
    app.add_systems(OnEnter(Screen::Title), load_settings.run_if(run_once));
}

#[derive(Resource, Reflect, Deserialize, Serialize, Debug, Clone)]
#[reflect(Resource)]
pub struct Settings {
    pub sound: SoundPreset,
    /// Name used for leaderboard submissions; validated on submit.
    pub player_name: String,
    /// Optional wallet address attached to submissions. Left out entirely
    /// when no wallet is configured; scores still submit by name alone.
    pub wallet_address: Option<String>,
}

#[derive(Reflect, Deserialize, Serialize, Debug, Clone)]
pub struct SoundPreset {
    pub general: f32,
    pub music: f32,
    pub sfx: f32,
}

impl Default for SoundPreset {
    fn default() -> Self {
        Self {
            general: 0.7,
            music: 0.5,
            sfx: 1.0,
        }
    }
}

impl Settings {
    pub fn music(&self) -> Volume {
        #[cfg(feature = "audio")]
        return Volume::Linear(self.sound.general * self.sound.music);
        #[cfg(not(feature = "audio"))]
        return Volume::SILENT;
    }

    pub fn sfx(&self) -> Volume {
        #[cfg(feature = "audio")]
        return Volume::Linear(self.sound.general * self.sound.sfx);
        #[cfg(not(feature = "audio"))]
        return Volume::SILENT;
    }

    pub fn read() -> Result<Self, Box<dyn Error>> {
        let content = fs::read_to_string(SETTINGS_PATH)?;
        let settings = ron::from_str(&content).unwrap_or_default();
        Ok(settings)
    }

    pub fn save(&self) -> Result<(), Box<dyn Error>> {
        let content = ron::ser::to_string_pretty(self, Default::default())?;
        fs::write(SETTINGS_PATH, content)?;
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound: SoundPreset::default(),
            player_name: String::new(),
            wallet_address: None,
        }
    }
}

fn load_settings(mut commands: Commands) {
    let settings = match Settings::read() {
        Ok(settings) => {
            info!("loaded settings from '{SETTINGS_PATH}'");
            settings
        }
        Err(e) => {
            info!("unable to load settings from '{SETTINGS_PATH}', switching to defaults: {e}");
            Default::default()
        }
    };

    commands.insert_resource(settings);
}

/// Campaign parameters supplied at process launch.
///
/// `--level N` (or `TUMBLOX_LEVEL=N`) starts the campaign at level N;
/// out-of-range values are ignored in favor of level 1. `--test-level PATH`
/// points at a RON [`crate::levels::LevelDefinition`] which then takes
/// precedence over the catalog for every load, mirroring the level-editor
/// hand-off of the original game.
#[derive(Resource, Debug, Clone, Default)]
pub struct LaunchOptions {
    pub starting_level: Option<usize>,
    pub test_level_path: Option<String>,
}

impl LaunchOptions {
    pub fn from_env() -> Self {
        let args: Vec<String> = std::env::args().collect();
        let mut opts = Self::default();

        if let Ok(level) = std::env::var("TUMBLOX_LEVEL") {
            opts.starting_level = level.parse().ok();
        }
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--level" => opts.starting_level = iter.next().and_then(|v| v.parse().ok()),
                "--test-level" => opts.test_level_path = iter.next().cloned(),
                _ => {}
            }
        }

        opts
    }

    /// 1-indexed starting level, already validated against the catalog.
    pub fn starting_level(&self) -> usize {
        match self.starting_level {
            Some(n) if (1..=crate::levels::LEVEL_COUNT).contains(&n) => n,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_start_level_falls_back_to_one() {
        let mut opts = LaunchOptions::default();
        assert_eq!(opts.starting_level(), 1);
        opts.starting_level = Some(0);
        assert_eq!(opts.starting_level(), 1);
        opts.starting_level = Some(crate::levels::LEVEL_COUNT + 1);
        assert_eq!(opts.starting_level(), 1);
        opts.starting_level = Some(5);
        assert_eq!(opts.starting_level(), 5);
    }
}
