use bevy::prelude::*;
use serde::{Deserialize, Serialize};

mod event_dispatch;
mod input;
mod primitives;
mod settings;
mod states;

pub use event_dispatch::*;
pub use input::*;
pub use primitives::*;
pub use settings::*;
pub use states::*;

pub fn plugin(app: &mut App) {
    app.configure_sets(
        Update,
        (
            AppSystems::TickTimers,
            AppSystems::RecordInput,
            AppSystems::Update,
        )
            .chain(),
    );

    app.add_plugins((settings::plugin, states::plugin, input::plugin));
}

/// High-level groupings of systems for the app in the [`Update`] schedule.
/// When adding a new variant, make sure to order it in the `configure_sets`
/// call above.
#[derive(SystemSet, Debug, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum AppSystems {
    /// Tick timers.
    TickTimers,
    /// Record player input.
    RecordInput,
    /// Do everything else (consider splitting this into further variants).
    Update,
}
