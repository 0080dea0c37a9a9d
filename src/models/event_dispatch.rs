use super::*;

/// Observer events wiring the game's components together. All of these are
/// fired with `commands.trigger(..)` and handled by `add_observer` systems
/// in the owning modules.
///
/// Player intent, from UI buttons or keyboard fallbacks.
#[derive(Event, Debug)]
pub struct RestartGame;
/// Resets score and budget but keeps the current level (the `R` key).
#[derive(Event, Debug)]
pub struct ResetLevel;
#[derive(Event, Debug)]
pub struct AdvanceLevel;

/// Input adapter output: a recognized throw gesture carrying the 3D
/// velocity sample of the pointer at trigger time (arbitrary small units).
#[derive(Event, Debug, Clone, Copy)]
pub struct ThrowRequest {
    pub velocity: Vec3,
}

/// Controller-approved throw, resolved to a world-space launch ray.
#[derive(Event, Debug, Clone, Copy)]
pub struct LaunchProjectile {
    pub origin: Vec3,
    pub direction: Vec3,
    pub gesture_velocity: Vec3,
}

/// Teardown sweep for all thrown projectiles. Fired on every level
/// transition and restart, never mid-level.
#[derive(Event, Debug)]
pub struct ClearProjectiles;

/// Asks the structure builder to tear down and rebuild for the session's
/// current level.
#[derive(Event, Debug)]
pub struct RebuildLevel;

/// A target dropped below the near-ground threshold; carries the running
/// felled count for the HUD.
#[derive(Event, Debug, Clone, Copy)]
pub struct TargetFelled {
    pub felled: u32,
    pub total: u32,
}

/// All targets in the level are down.
#[derive(Event, Debug)]
pub struct LevelCleared;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactKind {
    /// Projectile vs structure block: one-shot per projectile, subtle cue.
    Block,
    /// Projectile vs target proxy: every contact, stronger cue.
    Target,
}

/// A rate-limited projectile impact worth audiovisual feedback.
#[derive(Event, Debug, Clone, Copy)]
pub struct Impact {
    pub kind: ImpactKind,
    pub position: Vec3,
}

/// Emitted by the structure builder after a rebuild so the camera rig can
/// frame the whole level.
#[derive(Event, Debug, Clone, Copy)]
pub struct FitCamera {
    pub center: Vec3,
    pub radius: f32,
}

/// Leaderboard requests, handled by the client module.
#[derive(Event, Debug, Clone, Copy)]
pub struct FetchLeaderboard {
    pub limit: u32,
}
#[derive(Event, Debug)]
pub struct SubmitScore;
