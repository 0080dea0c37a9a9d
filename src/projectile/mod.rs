//! Articulated projectile factory.
//!
//! Each throw builds a chain of capsule segments linked by joints that
//! allow no linear slack but a bounded angular deflection, which is what
//! makes the projectile trail and flop convincingly instead of flying like
//! a rigid rod. Spent projectiles stay in the world as debris; the only
//! cleanup is the explicit sweep on level transitions and restarts, and the
//! per-level throw budget bounds how much debris can accumulate.

use crate::*;
use avian3d::prelude::*;
use bevy::gltf::Gltf;
use rand::Rng;
use std::f32::consts::{FRAC_PI_4, FRAC_PI_6};

mod feedback;
pub use feedback::*;

pub const SEGMENT_COUNT: usize = 6;
pub const SEGMENT_LENGTH: f32 = 0.4;
pub const SEGMENT_RADIUS: f32 = 0.35;
/// Linear radius falloff from base to tip.
const TAPER: f32 = 0.3;
/// Consecutive segments overlap slightly so the capsules stay in contact.
const SEGMENT_SPACING: f32 = SEGMENT_LENGTH * 0.9;
const JOINT_ANCHOR: f32 = SEGMENT_LENGTH * 0.45;

const BASE_SEGMENT_MASS: f32 = 3.0;
const SEGMENT_MASS: f32 = 1.5;
const SEGMENT_FRICTION: f32 = 0.7;
const SEGMENT_RESTITUTION: f32 = 0.1;

const THROW_FORCE: f32 = 250.0;
/// Random per-throw force multiplier range.
const FORCE_JITTER: std::ops::Range<f32> = 0.7..1.3;
/// Aim scatter in radians; vertical scatter is halved.
const ANGLE_JITTER: f32 = 0.08;
/// How strongly gesture speed boosts the throw, and its cap.
const VELOCITY_BOOST: f32 = 10.0;
const VELOCITY_BOOST_MAX: f32 = 0.5;

const BASE_SPIN_JITTER: f32 = 15.0;
/// Cross-axis gesture-to-spin coupling.
const SPIN_INFLUENCE: f32 = 400.0;
const SPIN_BOOST: f32 = 15.0;
const SPIN_BOOST_MAX: f32 = 2.0;

/// Cosmetic skin scale relative to the authored model.
const SKIN_SCALE: f32 = 0.3;

pub fn plugin(app: &mut App) {
    app.add_plugins(feedback::plugin)
        .add_observer(spawn_projectile)
        .add_observer(clear_projectiles)
        .add_systems(
            Update,
            follow_skins
                .in_set(AppSystems::Update)
                .run_if(in_state(Screen::Gameplay)),
        );
}

/// Root bookkeeping entity for one thrown projectile.
#[derive(Component, Debug)]
pub struct ProjectileChain {
    pub segments: Vec<Entity>,
    pub joints: Vec<Entity>,
    pub skin: Option<Entity>,
    /// One-shot latch for the wood-impact cue.
    pub hit_block: bool,
}

/// One physics segment of a chain, pointing back at its root.
#[derive(Component, Debug, Clone, Copy)]
pub struct ProjectileSegment {
    pub chain: Entity,
}

/// Marker for the cosmetic skin that follows the chain each tick.
#[derive(Component, Debug, Clone, Copy)]
pub struct ProjectileSkin {
    pub chain: Entity,
}

/// Radius of segment `index`, tapering toward the tip.
pub fn segment_radius(index: usize) -> f32 {
    SEGMENT_RADIUS * (1.0 - (index as f32 / SEGMENT_COUNT as f32) * TAPER)
}

/// Launch velocity for the base segment: throw force scaled by random
/// jitter and a clamped gesture-speed boost, applied through the base mass,
/// along the aim direction perturbed by a small random scatter.
pub fn launch_velocity(direction: Vec3, gesture: Vec3, rng: &mut impl Rng) -> Vec3 {
    let magnitude = gesture.length();
    let jitter = rng.random_range(FORCE_JITTER);
    let boost = 1.0 + (magnitude * VELOCITY_BOOST).min(VELOCITY_BOOST_MAX);
    let force = THROW_FORCE * jitter * boost;

    let mut dir = direction;
    dir.x += (rng.random_range(-0.5..0.5)) * ANGLE_JITTER;
    dir.y += (rng.random_range(-0.5..0.5)) * ANGLE_JITTER * 0.5;
    let dir = dir.normalize_or_zero();

    dir * (force / BASE_SEGMENT_MASS)
}

/// Launch spin for the base segment. Gesture axes map across: vertical hand
/// motion pitches, depth motion yaws (softer), horizontal motion rolls, all
/// amplified by gesture speed and salted with random tumble.
pub fn launch_spin(gesture: Vec3, rng: &mut impl Rng) -> Vec3 {
    let magnitude = gesture.length();
    let boost = 1.0 + (magnitude * SPIN_BOOST).min(SPIN_BOOST_MAX);

    let spin = Vec3::new(
        gesture.y * SPIN_INFLUENCE + rng.random_range(-0.5..0.5) * BASE_SPIN_JITTER,
        gesture.z * SPIN_INFLUENCE * 0.7 + rng.random_range(-0.5..0.5) * BASE_SPIN_JITTER,
        -gesture.x * SPIN_INFLUENCE + rng.random_range(-0.5..0.5) * BASE_SPIN_JITTER,
    );

    spin * boost
}

/// Orientation pointing the skin's local up axis from `base` toward `tip`.
/// `None` when the two coincide and no direction exists.
pub fn skin_rotation(base: Vec3, tip: Vec3) -> Option<Quat> {
    let direction = (tip - base).try_normalize()?;
    let axis = Vec3::Y.cross(direction);
    if axis.length() < 1e-3 {
        // Parallel or anti-parallel; keep the previous orientation.
        return None;
    }
    let angle = Vec3::Y.dot(direction).clamp(-1.0, 1.0).acos();
    Some(Quat::from_axis_angle(axis.normalize(), angle))
}

/// A joint binding `tip` of the previous segment to `tail` of the next:
/// zero linear separation, bounded swing and twist.
fn chain_joint(prev: Entity, next: Entity) -> Option<SphericalJoint> {
    if prev == next {
        return None;
    }
    Some(
        SphericalJoint::new(prev, next)
            .with_local_anchor_1(Vec3::Y * JOINT_ANCHOR)
            .with_local_anchor_2(Vec3::NEG_Y * JOINT_ANCHOR)
            .with_swing_limits(-FRAC_PI_4, FRAC_PI_4)
            .with_twist_limits(-FRAC_PI_6, FRAC_PI_6),
    )
}

fn spawn_projectile(
    on: On<LaunchProjectile>,
    models: Res<Models>,
    gltf_assets: Res<Assets<Gltf>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut commands: Commands,
) {
    let LaunchProjectile {
        origin,
        direction,
        gesture_velocity,
    } = *on.event();

    let mut rng = rand::rng();
    let direction = direction.normalize_or_zero();
    if direction == Vec3::ZERO {
        warn!("ignoring throw with degenerate aim direction");
        return;
    }

    let skin_scene = gltf_assets
        .get(&models.projectile)
        .filter(|gltf| !gltf.scenes.is_empty())
        .map(|gltf| gltf.scenes[0].clone());

    let chain = commands.spawn_empty().id();
    // Segments point their local Y along the aim so the joint anchors line
    // up tip-to-tail.
    let orientation = Quat::from_rotation_arc(Vec3::Y, direction);

    let mut segments = Vec::with_capacity(SEGMENT_COUNT);
    for index in 0..SEGMENT_COUNT {
        let position = origin + direction * (index as f32 * SEGMENT_SPACING);
        let radius = segment_radius(index);
        let mass = if index == 0 { BASE_SEGMENT_MASS } else { SEGMENT_MASS };

        let mut segment = commands.spawn((
            Name::new(format!("Projectile Segment {index}")),
            DespawnOnExit(Screen::Gameplay),
            ProjectileSegment { chain },
            Transform::from_translation(position).with_rotation(orientation),
            RigidBody::Dynamic,
            Collider::capsule(radius, SEGMENT_LENGTH),
            Mass(mass),
            Friction::new(SEGMENT_FRICTION),
            Restitution::new(SEGMENT_RESTITUTION),
            // Moderate damping: still floppy, settles instead of thrashing.
            LinearDamping(0.2),
            AngularDamping(0.3),
        ));

        if index == 0 {
            segment.insert((
                LinearVelocity(launch_velocity(direction, gesture_velocity, &mut rng)),
                AngularVelocity(launch_spin(gesture_velocity, &mut rng)),
            ));
        }

        // Without a skin the segments themselves are the visual, shaded
        // base-to-tip.
        if skin_scene.is_none() {
            let t = index as f32 / (SEGMENT_COUNT - 1) as f32;
            let color = Color::srgb(0.95 - 0.1 * t, 0.6 - 0.2 * t, 0.7 - 0.2 * t);
            segment.insert((
                Mesh3d(meshes.add(Capsule3d::new(radius, SEGMENT_LENGTH))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: color,
                    ..default()
                })),
            ));
        }

        segments.push(segment.id());
    }

    let mut joints = Vec::with_capacity(SEGMENT_COUNT - 1);
    for pair in segments.windows(2) {
        match chain_joint(pair[0], pair[1]) {
            Some(joint) => joints.push(commands.spawn(joint).id()),
            None => warn!("joint creation failed, chain continues without it"),
        }
    }

    let skin = skin_scene.map(|scene| {
        commands
            .spawn((
                Name::new("Projectile Skin"),
                DespawnOnExit(Screen::Gameplay),
                ProjectileSkin { chain },
                SceneRoot(scene),
                Transform::from_translation(origin).with_scale(Vec3::splat(SKIN_SCALE)),
            ))
            .id()
    });

    commands.entity(chain).insert((
        Name::new("Projectile"),
        DespawnOnExit(Screen::Gameplay),
        ProjectileChain {
            segments,
            joints,
            skin,
            hit_block: false,
        },
    ));

    debug!(
        "spawned projectile chain: {} segments, gesture |v| {:.3}",
        SEGMENT_COUNT,
        gesture_velocity.length()
    );
}

/// Repositions each cosmetic skin onto its chain: translation at the base
/// segment, orientation pointing from base toward tip.
fn follow_skins(
    chains: Query<&ProjectileChain>,
    transforms: Query<&GlobalTransform, With<ProjectileSegment>>,
    mut skins: Query<&mut Transform, With<ProjectileSkin>>,
) {
    for chain in &chains {
        let Some(skin) = chain.skin else {
            continue;
        };
        let Ok(mut skin_transform) = skins.get_mut(skin) else {
            continue;
        };
        let (Some(first), Some(last)) = (chain.segments.first(), chain.segments.last()) else {
            continue;
        };
        let (Ok(base), Ok(tip)) = (transforms.get(*first), transforms.get(*last)) else {
            continue;
        };

        skin_transform.translation = base.translation();
        if let Some(rotation) = skin_rotation(base.translation(), tip.translation()) {
            skin_transform.rotation = rotation;
        }
    }
}

/// Teardown sweep: disposes every tracked projectile's segments, joints
/// and skin. Fired on level transitions and restarts only.
fn clear_projectiles(
    _: On<ClearProjectiles>,
    chains: Query<(Entity, &ProjectileChain)>,
    mut commands: Commands,
) {
    let mut count = 0;
    for (entity, chain) in &chains {
        for segment in chain.segments.iter().chain(chain.joints.iter()) {
            commands.entity(*segment).despawn();
        }
        if let Some(skin) = chain.skin {
            commands.entity(skin).despawn();
        }
        commands.entity(entity).despawn();
        count += 1;
    }
    if count > 0 {
        debug!("cleared {count} thrown projectiles");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn radii_taper_toward_the_tip() {
        let radii: Vec<f32> = (0..SEGMENT_COUNT).map(segment_radius).collect();
        assert_eq!(radii[0], SEGMENT_RADIUS);
        for pair in radii.windows(2) {
            assert!(pair[1] < pair[0]);
        }
        // 30% taper across the full chain.
        let last = segment_radius(SEGMENT_COUNT - 1);
        assert!(last > SEGMENT_RADIUS * (1.0 - TAPER));
    }

    #[test]
    fn launch_velocity_is_bounded_by_jitter_and_boost() {
        let mut rng = StdRng::seed_from_u64(7);
        let dir = Vec3::NEG_Z;
        for _ in 0..200 {
            // A fast gesture saturates the boost at 1.5x.
            let v = launch_velocity(dir, Vec3::new(0.3, 0.3, 0.3), &mut rng);
            let speed = v.length();
            let min = THROW_FORCE * 0.7 / BASE_SEGMENT_MASS;
            let max = THROW_FORCE * 1.3 * 1.5 / BASE_SEGMENT_MASS;
            assert!(speed >= min * 0.99 && speed <= max * 1.01, "speed {speed}");
            // Scatter is small: still mostly along the aim.
            assert!(v.normalize().dot(dir) > 0.98);
        }
    }

    #[test]
    fn still_gesture_gets_no_boost() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let v = launch_velocity(Vec3::NEG_Z, Vec3::ZERO, &mut rng);
            let max = THROW_FORCE * 1.3 / BASE_SEGMENT_MASS;
            assert!(v.length() <= max * 1.01);
        }
    }

    #[test]
    fn spin_maps_axes_across() {
        let mut rng = StdRng::seed_from_u64(42);
        // Pure vertical gesture motion: dominant pitch spin.
        let spin = launch_spin(Vec3::new(0.0, 0.1, 0.0), &mut rng);
        assert!(spin.x.abs() > spin.y.abs());
        assert!(spin.x.abs() > spin.z.abs());

        // Pure horizontal gesture motion: dominant roll, opposite sign.
        let spin = launch_spin(Vec3::new(0.1, 0.0, 0.0), &mut rng);
        assert!(spin.z < 0.0);
        assert!(spin.z.abs() > spin.x.abs());
    }

    #[test]
    fn skin_rotation_skips_degenerate_chains() {
        assert!(skin_rotation(Vec3::ZERO, Vec3::ZERO).is_none());
        // Tip straight up is parallel to the reference axis.
        assert!(skin_rotation(Vec3::ZERO, Vec3::Y).is_none());

        let rotation = skin_rotation(Vec3::ZERO, Vec3::new(0.0, 0.0, -2.0)).unwrap();
        let pointed = rotation * Vec3::Y;
        assert!(pointed.dot(Vec3::NEG_Z) > 0.99);
    }

    #[test]
    fn chain_joint_rejects_self_link() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();
        assert!(chain_joint(a, a).is_none());
        assert!(chain_joint(a, b).is_some());
    }
}
