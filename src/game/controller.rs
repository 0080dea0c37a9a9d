//! Level/game controller: throw admission, budgets, and the transitions
//! between [`GamePhase`] states.

use crate::*;
use avian3d::prelude::*;

/// Spawn distance of a projectile in front of the camera.
const SPAWN_DISTANCE: f32 = 3.0;
/// Vertical drop of the spawn point so the chain starts below eye level.
const SPAWN_DROP: f32 = 0.5;

pub fn plugin(app: &mut App) {
    app.insert_resource(ThrowCooldown(Timer::from_seconds(
        THROW_COOLDOWN_SECS,
        TimerMode::Once,
    )))
    .init_resource::<GraceDelay>()
    .add_observer(on_throw_request)
    .add_observer(on_level_cleared)
    .add_observer(on_advance)
    .add_observer(on_restart)
    .add_observer(on_reset_level)
    .add_systems(OnEnter(Screen::Gameplay), start_session)
    .add_systems(OnExit(Screen::Gameplay), end_session)
    .add_systems(OnEnter(GamePhase::InLevel), resume_physics)
    .add_systems(OnEnter(GamePhase::LevelComplete), pause_physics)
    .add_systems(OnEnter(GamePhase::GameOver), request_leaderboard)
    .add_systems(OnEnter(GamePhase::Victory), request_leaderboard)
    .add_systems(
        Update,
        (tick_cooldown, tick_grace)
            .in_set(AppSystems::TickTimers)
            .run_if(in_state(GamePhase::InLevel)),
    );
}

/// Grace window armed when the budget runs dry, giving the last throw a
/// moment to topple something before the game-over call.
#[derive(Resource, Default, Debug)]
struct GraceDelay(Option<Timer>);

fn start_session(
    launch: Res<LaunchOptions>,
    mut session: ResMut<GameSession>,
    mut next_phase: ResMut<NextState<GamePhase>>,
    mut commands: Commands,
) {
    session.restart(launch.starting_level());
    session.started = true;
    next_phase.set(GamePhase::InLevel);
    commands.trigger(RebuildLevel);
    info!("session started at level {}", session.current_level);
}

fn end_session(
    mut session: ResMut<GameSession>,
    mut next_phase: ResMut<NextState<GamePhase>>,
    mut time: ResMut<Time<Physics>>,
) {
    session.started = false;
    next_phase.set(GamePhase::NotStarted);
    time.pause();
}

fn resume_physics(mut time: ResMut<Time<Physics>>) {
    time.unpause();
}

fn pause_physics(mut time: ResMut<Time<Physics>>) {
    time.pause();
}

fn request_leaderboard(mut commands: Commands) {
    commands.trigger(FetchLeaderboard { limit: 20 });
}

/// Throw admission. A request that arrives while the gate is closed is
/// silently dropped: no projectile, no budget change, no queueing.
fn on_throw_request(
    on: On<ThrowRequest>,
    phase: Res<State<GamePhase>>,
    aim: Res<AimState>,
    windows: Query<&Window>,
    camera: Query<(&Camera, &GlobalTransform), With<SceneCamera>>,
    mut session: ResMut<GameSession>,
    mut cooldown: ResMut<ThrowCooldown>,
    mut commands: Commands,
) {
    if *phase.get() != GamePhase::InLevel {
        return;
    }

    // Resolve the aim ray first so a missing camera can't burn budget.
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera.single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_transform, aim.position * window.size()) else {
        return;
    };

    if !session.try_throw() {
        return;
    }
    cooldown.reset();

    let forward = camera_transform.forward();
    let origin = camera_transform.translation() + forward * SPAWN_DISTANCE - Vec3::Y * SPAWN_DROP;

    commands.trigger(LaunchProjectile {
        origin,
        direction: *ray.direction,
        gesture_velocity: on.velocity,
    });
}

fn tick_cooldown(
    time: Res<Time>,
    mut session: ResMut<GameSession>,
    mut cooldown: ResMut<ThrowCooldown>,
    mut grace: ResMut<GraceDelay>,
) {
    if session.can_throw {
        return;
    }
    cooldown.tick(time.delta());
    if !cooldown.just_finished() {
        return;
    }

    session.finish_cooldown();
    if session.out_of_throws() && session.targets_standing() {
        // Budget check point: anything that falls from here on is a
        // last-second save.
        session.fell_since_last_check = false;
        grace.0 = Some(Timer::from_seconds(GAME_OVER_GRACE_SECS, TimerMode::Once));
        debug!("out of throws, arming game-over grace delay");
    }
}

fn tick_grace(
    time: Res<Time>,
    session: Res<GameSession>,
    mut grace: ResMut<GraceDelay>,
    mut next_phase: ResMut<NextState<GamePhase>>,
) {
    let Some(timer) = grace.0.as_mut() else {
        return;
    };
    timer.tick(time.delta());
    if !timer.finished() {
        return;
    }

    grace.0 = None;
    if session.out_of_throws() && session.targets_standing() {
        info!(
            "game over at level {} with score {}",
            session.current_level, session.score
        );
        next_phase.set(GamePhase::GameOver);
    }
}

fn on_level_cleared(
    _: On<LevelCleared>,
    session: Res<GameSession>,
    mut grace: ResMut<GraceDelay>,
    mut next_phase: ResMut<NextState<GamePhase>>,
) {
    grace.0 = None;
    info!(
        "level {} cleared, {} throws saved",
        session.current_level, session.throws_remaining
    );
    next_phase.set(GamePhase::LevelComplete);
}

fn on_advance(
    _: On<AdvanceLevel>,
    mut session: ResMut<GameSession>,
    mut next_phase: ResMut<NextState<GamePhase>>,
    mut commands: Commands,
) {
    commands.trigger(ClearProjectiles);
    if session.advance_level() {
        commands.trigger(RebuildLevel);
        next_phase.set(GamePhase::InLevel);
    } else {
        info!("campaign complete with score {}", session.score);
        next_phase.set(GamePhase::Victory);
    }
}

fn on_restart(
    _: On<RestartGame>,
    launch: Res<LaunchOptions>,
    mut session: ResMut<GameSession>,
    mut grace: ResMut<GraceDelay>,
    mut next_phase: ResMut<NextState<GamePhase>>,
    mut commands: Commands,
) {
    commands.trigger(ClearProjectiles);
    grace.0 = None;
    session.restart(launch.starting_level());
    commands.trigger(RebuildLevel);
    next_phase.set(GamePhase::InLevel);
}

/// Resets score and budget on the current level (the `R` key fallback).
fn on_reset_level(
    _: On<ResetLevel>,
    phase: Res<State<GamePhase>>,
    mut session: ResMut<GameSession>,
    mut grace: ResMut<GraceDelay>,
    mut commands: Commands,
) {
    if *phase.get() != GamePhase::InLevel {
        return;
    }
    commands.trigger(ClearProjectiles);
    grace.0 = None;
    session.reset_level();
    commands.trigger(RebuildLevel);
}
