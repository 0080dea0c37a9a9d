use bevy::prelude::*;

pub mod colors;
mod interaction;
mod widget;

pub use colors::*;
pub use interaction::*;
pub use widget::*;

pub fn plugin(app: &mut App) {
    app.add_plugins(interaction::plugin);
}
