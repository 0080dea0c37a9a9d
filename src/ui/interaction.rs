use super::*;

#[cfg(feature = "audio")]
use crate::{AudioSources, Settings};
#[cfg(feature = "audio")]
use bevy_seedling::prelude::*;

pub(super) fn plugin(app: &mut App) {
    app.add_observer(on_hover)
        .add_observer(on_out)
        .add_observer(on_click);
}

/// Background colors for the interaction states of a UI node.
#[derive(Component, Debug, Clone)]
pub struct InteractionPalette {
    pub none: Color,
    pub hovered: Color,
    pub pressed: Color,
}

fn on_hover(
    hover: On<Pointer<Over>>,
    #[cfg(feature = "audio")] settings: Res<Settings>,
    #[cfg(feature = "audio")] sources: Option<Res<AudioSources>>,
    #[cfg(feature = "audio")] mut commands: Commands,
    mut palette_q: Query<(&InteractionPalette, &mut BackgroundColor)>,
) {
    let Ok((palette, mut background)) = palette_q.get_mut(hover.event_target()) else {
        return;
    };
    background.0 = palette.hovered;

    #[cfg(feature = "audio")]
    if let Some(sources) = sources {
        commands.spawn(SamplePlayer::new(sources.hover.clone()).with_volume(settings.sfx()));
    }
}

fn on_out(
    out: On<Pointer<Out>>,
    mut palette_q: Query<(&InteractionPalette, &mut BackgroundColor)>,
) {
    let Ok((palette, mut background)) = palette_q.get_mut(out.event_target()) else {
        return;
    };
    background.0 = palette.none;
}

fn on_click(
    click: On<Pointer<Click>>,
    #[cfg(feature = "audio")] settings: Res<Settings>,
    #[cfg(feature = "audio")] sources: Option<Res<AudioSources>>,
    #[cfg(feature = "audio")] mut commands: Commands,
    mut palette_q: Query<(&InteractionPalette, &mut BackgroundColor)>,
) {
    let Ok((palette, mut background)) = palette_q.get_mut(click.event_target()) else {
        return;
    };
    background.0 = palette.pressed;

    #[cfg(feature = "audio")]
    if let Some(sources) = sources {
        commands.spawn(SamplePlayer::new(sources.press.clone()).with_volume(settings.sfx()));
    }
}
