//! Orbit camera rig with per-level auto-fit and trauma-based screen shake.

use crate::*;
use crate::levels::LevelDefinition;
use bevy::transform::TransformSystems;

/// Camera elevation above the horizontal, radians.
const PITCH: f32 = 0.35;
/// How fast focus/radius chase their goals, 1/s.
const FIT_SPEED: f32 = 6.0;
/// Headroom added above the tallest block so a target on top stays framed.
const TARGET_HEADROOM: f32 = 3.0;
const MIN_RADIUS: f32 = 25.0;
const FIT_MARGIN: f32 = 1.2;

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<CameraRig>()
        .init_resource::<ScreenShake>()
        .add_systems(Startup, spawn_camera)
        .add_systems(Update, follow_rig.in_set(AppSystems::Update))
        .add_systems(PreUpdate, reset_camera_shake)
        .add_systems(
            PostUpdate,
            apply_camera_shake.before(TransformSystems::Propagate),
        )
        .add_observer(on_fit_camera)
        .add_observer(on_impact_shake);
}

/// Where the camera wants to be. The auto-fit writes goals, `follow_rig`
/// eases the actual values toward them every frame.
#[derive(Resource, Reflect, Debug, Clone)]
#[reflect(Resource)]
pub struct CameraRig {
    pub focus: Vec3,
    pub radius: f32,
    pub goal_focus: Vec3,
    pub goal_radius: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            focus: Vec3::new(0.0, 3.0, 0.0),
            radius: 30.0,
            goal_focus: Vec3::new(0.0, 3.0, 0.0),
            goal_radius: 30.0,
        }
    }
}

impl CameraRig {
    /// Camera translation for the current focus/radius.
    pub fn eye(&self) -> Vec3 {
        self.focus + Vec3::new(0.0, self.radius * PITCH.sin(), self.radius * PITCH.cos())
    }
}

fn spawn_camera(mut commands: Commands, rig: Res<CameraRig>) {
    commands.spawn((
        Name::new("Scene Camera"),
        SceneCamera,
        Camera3d::default(),
        Transform::from_translation(rig.eye()).looking_at(rig.focus, Vec3::Y),
    ));
}

fn follow_rig(
    time: Res<Time>,
    mut rig: ResMut<CameraRig>,
    mut camera: Query<&mut Transform, With<SceneCamera>>,
) {
    let t = (FIT_SPEED * time.delta_secs()).min(1.0);
    let goal_focus = rig.goal_focus;
    let goal_radius = rig.goal_radius;
    rig.focus = rig.focus.lerp(goal_focus, t);
    rig.radius = rig.radius + (goal_radius - rig.radius) * t;

    if let Ok(mut transform) = camera.single_mut() {
        *transform = Transform::from_translation(rig.eye()).looking_at(rig.focus, Vec3::Y);
    }
}

fn on_fit_camera(on: On<FitCamera>, mut rig: ResMut<CameraRig>) {
    rig.goal_focus = on.center;
    rig.goal_radius = on.radius;
    debug!(
        "camera fit: center({:.1}, {:.1}, {:.1}), radius {:.1}",
        on.center.x, on.center.y, on.center.z, on.radius
    );
}

/// Computes the framing for a level: a center point and an orbit radius
/// bounding every block (plus headroom for targets on top) and every
/// declared target position.
pub fn fit_view(def: &LevelDefinition) -> (Vec3, f32) {
    let mut min = Vec3::new(f32::INFINITY, 0.0, f32::INFINITY);
    let mut max = Vec3::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY);

    for spec in &def.blocks {
        let template = spec.kind.template();
        let pos = spec.position();
        min.x = min.x.min(pos.x - template.width / 2.0);
        max.x = max.x.max(pos.x + template.width / 2.0);
        max.y = max.y.max(pos.y + template.height / 2.0 + TARGET_HEADROOM);
        min.z = min.z.min(pos.z - template.depth / 2.0);
        max.z = max.z.max(pos.z + template.depth / 2.0);
    }
    for target in &def.targets {
        min.x = min.x.min(target.x - 2.0);
        max.x = max.x.max(target.x + 2.0);
        min.z = min.z.min(target.z - 2.0);
        max.z = max.z.max(target.z + 2.0);
    }
    max.y = max.y.max(TARGET_HEADROOM);

    let center = Vec3::new((min.x + max.x) / 2.0, max.y / 2.0, (min.z + max.z) / 2.0);
    let size = max - min;
    let radius = (size.x.max(size.y).max(size.z) * FIT_MARGIN).max(MIN_RADIUS);
    (center, radius)
}

// ============================================================================
// SCREEN SHAKE
// Bevy's recommended pattern: restore the camera in PreUpdate, apply the
// shake offset in PostUpdate just before transform propagation.
// ============================================================================

#[derive(Resource, Default)]
pub struct ScreenShake {
    pub trauma: f32,
    /// Camera transform from before the shake was applied; `Some` only
    /// while a shake offset is active.
    stored_transform: Option<Transform>,
}

impl ScreenShake {
    pub const DECAY: f32 = 2.5;
    pub const MAX_TRANSLATION: f32 = 0.25;
    pub const NOISE_SPEED: f32 = 25.0;
    pub const EXPONENT: f32 = 2.0;

    pub fn add_trauma(&mut self, amount: f32) {
        self.trauma = (self.trauma + amount).min(1.0);
    }
}

fn on_impact_shake(on: On<Impact>, mut shake: ResMut<ScreenShake>) {
    let intensity = match on.kind {
        ImpactKind::Block => 0.2,
        ImpactKind::Target => 0.5,
    };
    shake.add_trauma(intensity);
}

fn reset_camera_shake(
    mut shake: ResMut<ScreenShake>,
    mut camera: Query<&mut Transform, With<SceneCamera>>,
) {
    if let Some(original) = shake.stored_transform.take() {
        if let Ok(mut transform) = camera.single_mut() {
            *transform = original;
        }
    }
}

fn apply_camera_shake(
    time: Res<Time>,
    mut shake: ResMut<ScreenShake>,
    mut camera: Query<&mut Transform, With<SceneCamera>>,
) {
    shake.trauma = (shake.trauma - ScreenShake::DECAY * time.delta_secs()).max(0.0);
    if shake.trauma <= 0.0 {
        return;
    }

    let Ok(mut transform) = camera.single_mut() else {
        return;
    };

    // Store the original BEFORE applying the offset.
    shake.stored_transform = Some(*transform);

    let amount = shake.trauma.powf(ScreenShake::EXPONENT);
    let t = time.elapsed_secs() * ScreenShake::NOISE_SPEED;

    let x_noise = (t * 1.0).sin() * 0.5 + (t * 2.3).cos() * 0.3 + (t * 4.1).sin() * 0.2;
    let y_noise = (t * 1.7).cos() * 0.5 + (t * 3.1).sin() * 0.3 + (t * 5.3).cos() * 0.2;

    transform.translation.x += x_noise * amount * ScreenShake::MAX_TRANSLATION;
    transform.translation.y += y_noise * amount * ScreenShake::MAX_TRANSLATION;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels;

    #[test]
    fn fit_covers_blocks_and_targets_with_floor_radius() {
        // A single small structure still gets the minimum orbit radius.
        let def = levels::get_level(1);
        let (center, radius) = fit_view(def);
        assert!(radius >= MIN_RADIUS);
        // Structures live around z = -8; the center should too.
        assert!(center.z < 0.0);
        assert!(center.y > 0.0);
    }

    #[test]
    fn wider_levels_need_larger_radius() {
        let small = fit_view(levels::get_level(1)).1;
        // Final level spans x in [-10, 10] and z down to -16.
        let big = fit_view(levels::get_level(levels::LEVEL_COUNT)).1;
        assert!(big >= small);
    }

    #[test]
    fn trauma_saturates_at_one() {
        let mut shake = ScreenShake::default();
        shake.add_trauma(0.8);
        shake.add_trauma(0.8);
        assert_eq!(shake.trauma, 1.0);
    }
}
