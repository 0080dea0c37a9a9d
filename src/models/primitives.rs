use super::*;

/// Macro to hide the derive trait boilerplate
macro_rules! markers {
  ( $( $name:ident ),* ) => {
        $(
            #[derive(Component, Reflect, Clone, Default)]
            #[reflect(Component)]
            pub struct $name;
        )*
    };
}

markers!(
    SceneCamera,
    // scene
    Ground,
    // UI: nodes or labels that change visibility or content at some point
    GameplayUi,
    ScoreLabel,
    ThrowsTakenLabel,
    ThrowsLeftLabel,
    LevelLabel,
    LevelDescLabel,
    StatusLabel,
    FlashOverlay,
    LeaderboardList,
    SubmitStatusLabel,
    Crosshair
);

macro_rules! timers {
  ( $( $name:ident ),* ) => {
        $(
            #[derive(Resource, Reflect, Deref, DerefMut, Debug)]
            #[reflect(Resource)]
            pub struct $name(pub Timer);
        )*
    };
}

timers!(ThrowCooldown);
