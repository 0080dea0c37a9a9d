use super::*;

/// Pointer-gesture input adapter.
///
/// The contract mirrors a hand-tracking front end: every frame produces a
/// normalized aim position in `[0,1]x[0,1]` plus a small 3D velocity sample,
/// and a quick flick of the pointer (or an explicit press) produces a
/// discrete throw trigger carrying that sample. The depth axis of a 2D
/// pointer is always zero.
const VELOCITY_HISTORY_SIZE: usize = 5;
/// Smoothed velocity magnitude that counts as a throw flick.
const THROW_THRESHOLD: f32 = 0.05;

pub fn plugin(app: &mut App) {
    app.init_resource::<AimState>().add_systems(
        Update,
        (track_pointer, trigger_throws)
            .chain()
            .in_set(AppSystems::RecordInput)
            .run_if(in_state(Screen::Gameplay)),
    );
}

/// Latest aim sample from the pointer.
#[derive(Resource, Reflect, Debug, Clone)]
#[reflect(Resource)]
pub struct AimState {
    /// Normalized `[0,1]x[0,1]`, origin top-left like viewport coordinates.
    pub position: Vec2,
    /// Per-frame velocity sample in normalized units.
    pub velocity: Vec3,
    history: Vec<f32>,
}

impl Default for AimState {
    fn default() -> Self {
        Self {
            position: Vec2::splat(0.5),
            velocity: Vec3::ZERO,
            history: Vec::with_capacity(VELOCITY_HISTORY_SIZE),
        }
    }
}

impl AimState {
    /// Feeds one frame's worth of pointer motion, returns the smoothed
    /// (max-of-recent) velocity magnitude used for flick detection.
    pub fn push_sample(&mut self, position: Vec2, velocity: Vec3) -> f32 {
        self.position = position;
        self.velocity = velocity;
        if self.history.len() == VELOCITY_HISTORY_SIZE {
            self.history.remove(0);
        }
        self.history.push(velocity.length());
        self.history.iter().copied().fold(0.0, f32::max)
    }

    /// A flick that triggered a throw consumes the history, so one gesture
    /// can't fire twice.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn flicked(&self) -> bool {
        self.history.iter().copied().fold(0.0, f32::max) > THROW_THRESHOLD
    }
}

fn track_pointer(windows: Query<&Window>, mut aim: ResMut<AimState>) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };

    let size = window.size().max(Vec2::ONE);
    let position = (cursor / size).clamp(Vec2::ZERO, Vec2::ONE);
    let delta = position - aim.position;
    aim.push_sample(position, delta.extend(0.0));
}

fn trigger_throws(
    keys: Res<ButtonInput<KeyCode>>,
    buttons: Res<ButtonInput<MouseButton>>,
    mut aim: ResMut<AimState>,
    mut commands: Commands,
) {
    let pressed = keys.just_pressed(KeyCode::Space) || buttons.just_pressed(MouseButton::Left);

    if pressed || aim.flicked() {
        let velocity = aim.velocity;
        aim.clear_history();
        commands.trigger(ThrowRequest { velocity });
    }

    if keys.just_pressed(KeyCode::KeyR) {
        commands.trigger(ResetLevel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slow_drift_does_not_flick() {
        let mut aim = AimState::default();
        for _ in 0..20 {
            let next = aim.position + Vec2::splat(0.001);
            aim.push_sample(next, Vec3::new(0.001, 0.0, 0.0));
        }
        assert!(!aim.flicked());
    }

    #[test]
    fn fast_flick_triggers_once_then_clears() {
        let mut aim = AimState::default();
        aim.push_sample(Vec2::splat(0.5), Vec3::new(0.08, 0.02, 0.0));
        assert!(aim.flicked());
        aim.clear_history();
        assert!(!aim.flicked());
    }

    #[test]
    fn history_window_is_bounded() {
        let mut aim = AimState::default();
        for _ in 0..3 {
            aim.push_sample(Vec2::splat(0.5), Vec3::new(0.2, 0.0, 0.0));
        }
        // A burst ages out of the window after enough quiet frames.
        for _ in 0..VELOCITY_HISTORY_SIZE {
            aim.push_sample(Vec2::splat(0.5), Vec3::ZERO);
        }
        assert!(!aim.flicked());
    }
}
