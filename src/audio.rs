//! Simple audio setup: master bus volume plus the gameplay soundtrack.
//!
//! Sound effect cues live with their triggers (projectile feedback, UI
//! interaction); this module only owns the buses and the music loop.

use crate::*;
use bevy_seedling::prelude::*;

/// Utility for converting a simple `[0.0, 1.0]` range to [`Volume`].
pub const CONVERTER: PerceptualVolume = PerceptualVolume::new();

pub fn plugin(app: &mut App) {
    app.add_plugins(bevy_seedling::SeedlingPlugin::default());

    app.add_systems(Startup, setup)
        .add_systems(OnEnter(Screen::Gameplay), start_soundtrack)
        .add_systems(OnExit(Screen::Gameplay), stop_soundtrack);
}

fn setup(mut master: Single<&mut VolumeNode, With<MainBus>>) {
    master.volume = CONVERTER.perceptual_to_volume(0.7);
}

fn start_soundtrack(
    settings: Res<Settings>,
    sources: Res<AudioSources>,
    mut commands: Commands,
) {
    commands.spawn((
        Name::new("Soundtrack"),
        DespawnOnExit(Screen::Gameplay),
        MusicPool,
        SamplePlayer::new(sources.soundtrack.clone())
            .with_volume(settings.music())
            .looping(),
    ));
}

fn stop_soundtrack(mut music: Query<&mut PlaybackSettings, With<MusicPool>>) {
    for mut playback in music.iter_mut() {
        playback.pause();
    }
}
