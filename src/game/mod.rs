use crate::*;

pub mod controller;
pub mod scoring;

pub fn plugin(app: &mut App) {
    app.add_plugins((
        models::plugin,
        scene::plugin,
        structure::plugin,
        projectile::plugin,
        controller::plugin,
        scoring::plugin,
        leaderboard::plugin,
        screens::plugin,
    ));
}
