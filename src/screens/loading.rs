use super::*;

/// Shown while tracked assets resolve; flips to gameplay when done.
pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(Screen::Loading), spawn_loading_screen)
        .add_systems(
            Update,
            enter_gameplay
                .run_if(in_state(Screen::Loading).and(all_assets_loaded)),
        );
}

fn spawn_loading_screen(mut commands: Commands) {
    commands.spawn((
        DespawnOnExit(Screen::Loading),
        ui_root("Loading UI"),
        BackgroundColor(TRANSLUCENT),
        children![label("Loading...", 30.0, TEXT)],
    ));
}

fn all_assets_loaded(resource_handles: Res<ResourceHandles>) -> bool {
    resource_handles.is_all_done()
}

fn enter_gameplay(mut next_screen: ResMut<NextState<Screen>>) {
    next_screen.set(Screen::Gameplay);
}
