//! The screen state for the main gameplay: HUD, crosshair, and the
//! level-complete / game-over / victory overlays.

use super::*;
use crate::leaderboard::{Leaderboard, SubmitStatus, share_text, shorten_address};

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(Screen::Gameplay), spawn_gameplay_ui)
        .add_systems(OnEnter(GamePhase::InLevel), reset_status)
        .add_systems(OnEnter(GamePhase::LevelComplete), spawn_level_complete)
        .add_systems(OnEnter(GamePhase::GameOver), spawn_game_over)
        .add_systems(OnEnter(GamePhase::Victory), spawn_victory)
        .add_systems(
            Update,
            (
                update_hud.run_if(resource_changed::<GameSession>),
                refresh_board.run_if(resource_changed::<Leaderboard>),
                update_crosshair,
                back_to_title_on_esc,
            )
                .run_if(in_state(Screen::Gameplay)),
        )
        .add_observer(on_thrown)
        .add_observer(on_target_felled)
        .add_observer(on_level_cleared);
}

fn spawn_gameplay_ui(mut commands: Commands) {
    // Stats, top left.
    commands.spawn((
        DespawnOnExit(Screen::Gameplay),
        GameplayUi,
        Name::new("Gameplay Ui"),
        Node {
            position_type: PositionType::Absolute,
            top: Px(12.0),
            left: Px(12.0),
            flex_direction: FlexDirection::Column,
            row_gap: Px(4.0),
            ..default()
        },
        Pickable::IGNORE,
        children![
            (label("Level 1", 28.0, TEXT), LevelLabel),
            (label("", 18.0, TEXT_DIM), LevelDescLabel),
            (label("Score: 0", 24.0, SCORE_RED), ScoreLabel),
            (label("Throws: 0", 18.0, TEXT_DIM), ThrowsTakenLabel),
            (label("Throws left: 10", 22.0, GOOD_GREEN), ThrowsLeftLabel),
        ],
    ));

    // Status line, bottom center.
    commands.spawn((
        DespawnOnExit(Screen::Gameplay),
        Name::new("Status"),
        Node {
            position_type: PositionType::Absolute,
            bottom: Vh(6.0),
            width: Percent(100.0),
            justify_content: JustifyContent::Center,
            ..default()
        },
        Pickable::IGNORE,
        children![(label("Flick or click to throw!", 24.0, GOOD_GREEN), StatusLabel)],
    ));

    // Crosshair following the aim position.
    commands.spawn((
        DespawnOnExit(Screen::Gameplay),
        Name::new("Crosshair"),
        Crosshair,
        Node {
            position_type: PositionType::Absolute,
            width: Px(14.0),
            height: Px(14.0),
            ..default()
        },
        BackgroundColor(Color::srgba(1.0, 1.0, 1.0, 0.7)),
        BorderRadius::all(Percent(50.0)),
        Pickable::IGNORE,
    ));

    // Fullscreen flash overlay, tinted by impact feedback.
    commands.spawn((
        DespawnOnExit(Screen::Gameplay),
        Name::new("Flash Overlay"),
        FlashOverlay,
        Node {
            position_type: PositionType::Absolute,
            width: Percent(100.0),
            height: Percent(100.0),
            ..default()
        },
        BackgroundColor(Color::NONE),
        GlobalZIndex(10),
        Pickable::IGNORE,
    ));
}

fn update_hud(
    session: Res<GameSession>,
    mut labels: ParamSet<(
        Query<&mut Text, With<LevelLabel>>,
        Query<&mut Text, With<LevelDescLabel>>,
        Query<&mut Text, With<ScoreLabel>>,
        Query<&mut Text, With<ThrowsTakenLabel>>,
        Query<(&mut Text, &mut TextColor), With<ThrowsLeftLabel>>,
    )>,
) {
    let def = levels::get_level(session.current_level);
    if let Ok(mut text) = labels.p0().single_mut() {
        text.0 = format!("Level {} — {}", session.current_level, def.name);
    }
    if let Ok(mut text) = labels.p1().single_mut() {
        text.0 = def.description.clone();
    }
    if let Ok(mut text) = labels.p2().single_mut() {
        text.0 = format!("Score: {}", session.score);
    }
    if let Ok(mut text) = labels.p3().single_mut() {
        text.0 = format!("Throws: {}", session.throws_taken);
    }
    if let Ok((mut text, mut color)) = labels.p4().single_mut() {
        text.0 = format!("Throws left: {}", session.throws_remaining);
        color.0 = match session.throws_remaining {
            0..=2 => SCORE_RED,
            3..=4 => WARN_YELLOW,
            _ => GOOD_GREEN,
        };
    }
}

fn update_crosshair(aim: Res<AimState>, mut crosshair: Query<&mut Node, With<Crosshair>>) {
    if let Ok(mut node) = crosshair.single_mut() {
        node.left = Percent(aim.position.x * 100.0);
        node.top = Percent(aim.position.y * 100.0);
    }
}

fn back_to_title_on_esc(
    keys: Res<ButtonInput<KeyCode>>,
    mut next_screen: ResMut<NextState<Screen>>,
) {
    if keys.just_pressed(KeyCode::Escape) {
        next_screen.set(Screen::Title);
    }
}

// ============================ status line ============================

fn set_status(status: &mut Query<&mut Text, With<StatusLabel>>, message: &str) {
    if let Ok(mut text) = status.single_mut() {
        text.0 = message.into();
    }
}

fn reset_status(mut status: Query<&mut Text, With<StatusLabel>>) {
    set_status(&mut status, "Flick or click to throw!");
}

fn on_thrown(_: On<LaunchProjectile>, mut status: Query<&mut Text, With<StatusLabel>>) {
    set_status(&mut status, "THROWN!");
}

fn on_target_felled(on: On<TargetFelled>, mut status: Query<&mut Text, With<StatusLabel>>) {
    let message = format!("TARGET DOWN! {}/{} (+1000)", on.felled, on.total);
    set_status(&mut status, &message);
}

fn on_level_cleared(_: On<LevelCleared>, mut status: Query<&mut Text, With<StatusLabel>>) {
    set_status(&mut status, "ALL TARGETS DOWN!");
}

// ============================ overlays ============================

fn spawn_level_complete(session: Res<GameSession>, mut commands: Commands) {
    let def = levels::get_level(session.current_level);
    commands.spawn((
        DespawnOnExit(GamePhase::LevelComplete),
        ui_root("Level Complete UI"),
        BackgroundColor(TRANSLUCENT),
        children![(
            panel(),
            children![
                header("Level Complete!"),
                label(def.name.clone(), 24.0, TEXT_DIM),
                label(
                    format!("Throws saved: {}", session.throws_remaining),
                    22.0,
                    GOOD_GREEN
                ),
                label(format!("Score: {}", session.score), 22.0, SCORE_RED),
                btn("Next Level", advance_clicked),
            ]
        )],
    ));
}

fn spawn_game_over(session: Res<GameSession>, mut commands: Commands) {
    let share = share_text(
        session.score,
        session.throws_taken,
        session.current_level as u32,
        false,
    );
    commands.spawn((
        DespawnOnExit(GamePhase::GameOver),
        ui_root("Game Over UI"),
        BackgroundColor(TRANSLUCENT),
        children![(
            panel(),
            children![
                header("Game Over"),
                label(
                    format!("You reached level {}", session.current_level),
                    22.0,
                    TEXT_DIM
                ),
                label(format!("Final score: {}", session.score), 22.0, SCORE_RED),
                label(share, 16.0, TEXT_DIM),
                (label("", 18.0, TEXT_DIM), SubmitStatusLabel),
                btn("Submit Score", submit_clicked),
                board_list(),
                btn("Play Again", restart_clicked),
                btn("Menu", to::title),
            ]
        )],
    ));
}

fn spawn_victory(session: Res<GameSession>, mut commands: Commands) {
    let share = share_text(
        session.score,
        session.throws_taken,
        levels::LEVEL_COUNT as u32,
        true,
    );
    commands.spawn((
        DespawnOnExit(GamePhase::Victory),
        ui_root("Victory UI"),
        BackgroundColor(TRANSLUCENT),
        children![(
            panel(),
            children![
                header("YOU WIN!"),
                label(
                    format!("All {} levels complete!", levels::LEVEL_COUNT),
                    24.0,
                    GOOD_GREEN
                ),
                label(format!("Final score: {}", session.score), 22.0, SCORE_RED),
                label(share, 16.0, TEXT_DIM),
                (label("", 18.0, TEXT_DIM), SubmitStatusLabel),
                btn("Submit Score", submit_clicked),
                board_list(),
                btn("Play Again", restart_clicked),
                btn("Menu", to::title),
            ]
        )],
    ));
}

fn panel() -> impl Bundle {
    (
        Node {
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            row_gap: Vh(1.2),
            padding: UiRect::all(Vw(2.0)),
            ..default()
        },
        BackgroundColor(PANEL_BG),
        BorderRadius::all(Px(12.0)),
    )
}

fn board_list() -> impl Bundle {
    (
        Name::new("Leaderboard"),
        LeaderboardList,
        Node {
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Start,
            row_gap: Px(2.0),
            min_height: Vh(10.0),
            ..default()
        },
        Pickable::IGNORE,
        children![label("Loading...", 16.0, TEXT_DIM)],
    )
}

/// Rebuilds the leaderboard rows and the submission status whenever the
/// client state changes.
fn refresh_board(
    board: Res<Leaderboard>,
    list: Query<Entity, With<LeaderboardList>>,
    mut status: Query<&mut Text, With<SubmitStatusLabel>>,
    mut commands: Commands,
) {
    if let Ok(mut text) = status.single_mut() {
        text.0 = match &board.status {
            SubmitStatus::Idle => String::new(),
            SubmitStatus::Pending => "Submitting...".into(),
            SubmitStatus::Accepted { rank: Some(rank) } => {
                format!("Score submitted! You're rank #{rank}")
            }
            SubmitStatus::Accepted { rank: None } => "Score submitted!".into(),
            SubmitStatus::Rejected(error) => error.clone(),
        };
    }

    let Ok(list) = list.single() else {
        return;
    };
    commands.entity(list).despawn_related::<Children>();
    commands.entity(list).with_children(|parent| {
        if board.fetching {
            parent.spawn(label("Loading...", 16.0, TEXT_DIM));
            return;
        }
        if board.entries.is_empty() {
            parent.spawn(label("No scores yet. Be the first!", 16.0, TEXT_DIM));
            return;
        }
        for (index, entry) in board.entries.iter().take(10).enumerate() {
            let rank = index + 1;
            let wallet = entry
                .address
                .as_deref()
                .map(|a| format!(" ({})", shorten_address(a)))
                .unwrap_or_default();
            let color = if rank <= 3 { WARN_YELLOW } else { TEXT };
            parent.spawn(label(
                format!(
                    "#{rank} {}{wallet} — Lvl {} · {} throws",
                    entry.name, entry.level, entry.throws
                ),
                16.0,
                color,
            ));
        }
    });
}

// ============================ button actions ============================

fn advance_clicked(_: On<Pointer<Click>>, mut commands: Commands) {
    commands.trigger(AdvanceLevel);
}

fn restart_clicked(_: On<Pointer<Click>>, mut commands: Commands) {
    commands.trigger(RestartGame);
}

fn submit_clicked(_: On<Pointer<Click>>, mut commands: Commands) {
    commands.trigger(SubmitScore);
}
