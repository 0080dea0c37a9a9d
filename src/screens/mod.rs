//! The game's main screen states and transitions between them.

use crate::{models::*, *};
use bevy::ui::Val::*;

mod gameplay;
mod loading;
mod title;

pub fn plugin(app: &mut App) {
    app.add_plugins((title::plugin, loading::plugin, gameplay::plugin));
}

pub mod to {
    use super::*;

    pub fn title(_: On<Pointer<Click>>, mut next_screen: ResMut<NextState<Screen>>) {
        next_screen.set(Screen::Title);
    }

    pub fn gameplay_or_loading(
        _: On<Pointer<Click>>,
        resource_handles: Res<ResourceHandles>,
        mut next_screen: ResMut<NextState<Screen>>,
    ) {
        if resource_handles.is_all_done() {
            next_screen.set(Screen::Gameplay);
        } else {
            next_screen.set(Screen::Loading);
        }
    }
}
