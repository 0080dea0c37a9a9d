use super::*;

/// This plugin is responsible for the main menu.
/// The menu is only drawn during the State [`Screen::Title`] and is removed
/// when that state is exited.
pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(Screen::Title), setup_menu);
}

fn setup_menu(mut commands: Commands) {
    commands.spawn((
        DespawnOnExit(Screen::Title),
        ui_root("Title UI"),
        BackgroundColor(TRANSLUCENT),
        children![
            header("TUMBLOX"),
            label(
                "Flick to throw. Topple every target before the throws run out.",
                22.0,
                TEXT_DIM
            ),
            (
                Node {
                    flex_direction: FlexDirection::Column,
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    row_gap: Vh(1.0),
                    margin: UiRect::top(Vh(3.0)),
                    ..default()
                },
                children![
                    btn("Play", to::gameplay_or_loading),
                    btn("Exit", exit_app)
                ],
            ),
        ],
    ));
}

fn exit_app(_: On<Pointer<Click>>, mut app_exit: MessageWriter<AppExit>) {
    app_exit.write(AppExit::Success);
}
