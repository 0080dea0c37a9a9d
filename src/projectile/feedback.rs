//! Impact reactions: contact detection with per-category rate limiting,
//! screen flash, impact bursts, and the projectile/impact sound cues.

use super::{ProjectileChain, ProjectileSegment};
use crate::*;
use crate::structure::{Block, TargetProxy};
use avian3d::prelude::Collisions;

#[cfg(feature = "audio")]
use bevy_seedling::prelude::*;

/// Minimum seconds between wood-impact cues.
const WOOD_COOLDOWN: f32 = 0.1;
/// Minimum seconds between target-impact cues.
const TARGET_COOLDOWN: f32 = 0.15;

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<ImpactCooldowns>()
        .init_resource::<ScreenFlash>()
        .add_systems(Startup, setup_burst_assets)
        .add_systems(
            Update,
            (
                detect_impacts.run_if(in_state(GamePhase::InLevel)),
                tick_flash,
                tick_bursts,
            )
                .in_set(AppSystems::Update),
        )
        .add_observer(on_impact);

    #[cfg(feature = "audio")]
    app.add_observer(throw_sound).add_observer(impact_sound);
}

/// Per-category cue timestamps. Wood and target cues rate-limit
/// independently so one fast-colliding body can't spam either channel.
#[derive(Resource, Default, Debug)]
pub struct ImpactCooldowns {
    wood_ready_at: f32,
    target_ready_at: f32,
}

impl ImpactCooldowns {
    /// Consumes the cooldown window for `kind` if it has elapsed.
    pub fn try_fire(&mut self, kind: ImpactKind, now: f32) -> bool {
        let (ready_at, cooldown) = match kind {
            ImpactKind::Block => (&mut self.wood_ready_at, WOOD_COOLDOWN),
            ImpactKind::Target => (&mut self.target_ready_at, TARGET_COOLDOWN),
        };
        if now < *ready_at {
            return false;
        }
        *ready_at = now + cooldown;
        true
    }
}

/// Polls contact state between projectile segments and the structure.
///
/// Block contact is a one-shot per projectile (latched on the chain);
/// target contact fires on every contact, each category behind its own
/// cooldown window.
fn detect_impacts(
    time: Res<Time>,
    collisions: Collisions,
    segments: Query<(Entity, &ProjectileSegment, &GlobalTransform)>,
    blocks: Query<Entity, With<Block>>,
    targets: Query<Entity, With<TargetProxy>>,
    mut chains: Query<&mut ProjectileChain>,
    mut cooldowns: ResMut<ImpactCooldowns>,
    mut commands: Commands,
) {
    let now = time.elapsed_secs();

    for (entity, segment, transform) in &segments {
        let position = transform.translation();

        for target in &targets {
            if collisions.contains(entity, target) {
                if cooldowns.try_fire(ImpactKind::Target, now) {
                    commands.trigger(Impact {
                        kind: ImpactKind::Target,
                        position,
                    });
                }
            }
        }

        let Ok(mut chain) = chains.get_mut(segment.chain) else {
            continue;
        };
        if chain.hit_block {
            continue;
        }
        for block in &blocks {
            if collisions.contains(entity, block) {
                chain.hit_block = true;
                if cooldowns.try_fire(ImpactKind::Block, now) {
                    commands.trigger(Impact {
                        kind: ImpactKind::Block,
                        position,
                    });
                }
                break;
            }
        }
    }
}

// ============================================================================
// SCREEN FLASH
// ============================================================================

/// A fading fullscreen tint; re-triggering simply restarts the decay.
#[derive(Resource, Default, Debug)]
pub struct ScreenFlash {
    remaining: f32,
    duration: f32,
    color: Color,
    intensity: f32,
}

impl ScreenFlash {
    pub fn trigger(&mut self, color: Color, intensity: f32, duration: f32) {
        self.color = color;
        self.intensity = intensity;
        self.duration = duration;
        self.remaining = duration;
    }
}

fn tick_flash(
    time: Res<Time>,
    mut flash: ResMut<ScreenFlash>,
    mut overlay: Query<&mut BackgroundColor, With<FlashOverlay>>,
) {
    let Ok(mut background) = overlay.single_mut() else {
        return;
    };
    if flash.remaining <= 0.0 {
        background.0 = Color::NONE;
        return;
    }
    flash.remaining = (flash.remaining - time.delta_secs()).max(0.0);
    let alpha = flash.intensity * (flash.remaining / flash.duration);
    background.0 = flash.color.with_alpha(alpha);
}

// ============================================================================
// IMPACT BURST
// Expanding emissive sphere at the contact point, despawned when spent.
// ============================================================================

/// Pre-created burst assets so impacts don't allocate meshes per hit.
#[derive(Resource)]
struct ImpactBurstAssets {
    mesh: Handle<Mesh>,
    wood: Handle<StandardMaterial>,
    target: Handle<StandardMaterial>,
}

#[derive(Component)]
struct ImpactBurst {
    timer: f32,
    duration: f32,
    size: f32,
}

fn setup_burst_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mesh = meshes.add(Sphere::new(0.25));
    let wood = materials.add(StandardMaterial {
        base_color: Color::srgba(1.0, 0.9, 0.7, 0.8),
        emissive: LinearRgba::new(4.0, 3.2, 1.8, 1.0),
        alpha_mode: AlphaMode::Add,
        unlit: true,
        ..default()
    });
    let target = materials.add(StandardMaterial {
        base_color: Color::srgba(1.0, 0.3, 0.3, 0.8),
        emissive: LinearRgba::new(5.0, 1.0, 1.0, 1.0),
        alpha_mode: AlphaMode::Add,
        unlit: true,
        ..default()
    });
    commands.insert_resource(ImpactBurstAssets { mesh, wood, target });
}

fn on_impact(
    on: On<Impact>,
    assets: Option<Res<ImpactBurstAssets>>,
    mut flash: ResMut<ScreenFlash>,
    mut commands: Commands,
) {
    let (size, color, intensity, duration) = match on.kind {
        ImpactKind::Block => (0.8, Color::WHITE, 0.15, 0.08),
        ImpactKind::Target => (2.0, Color::srgb(1.0, 0.2, 0.2), 0.35, 0.12),
    };

    flash.trigger(color, intensity, duration);

    let Some(assets) = assets else {
        return;
    };
    let material = match on.kind {
        ImpactKind::Block => assets.wood.clone(),
        ImpactKind::Target => assets.target.clone(),
    };
    commands.spawn((
        Name::new("Impact Burst"),
        DespawnOnExit(Screen::Gameplay),
        ImpactBurst {
            timer: 0.0,
            duration: 0.15 * size,
            size,
        },
        Mesh3d(assets.mesh.clone()),
        MeshMaterial3d(material),
        Transform::from_translation(on.position),
    ));
}

fn tick_bursts(
    time: Res<Time>,
    mut bursts: Query<(Entity, &mut ImpactBurst, &mut Transform)>,
    mut commands: Commands,
) {
    for (entity, mut burst, mut transform) in bursts.iter_mut() {
        burst.timer += time.delta_secs();
        let t = burst.timer / burst.duration;
        if t >= 1.0 {
            commands.entity(entity).despawn();
            continue;
        }
        let scale = 1.0 + t * 2.0 * burst.size;
        transform.scale = Vec3::splat(scale);
    }
}

// ============================================================================
// SOUND CUES
// ============================================================================

#[cfg(feature = "audio")]
fn throw_sound(
    _: On<LaunchProjectile>,
    settings: Res<Settings>,
    mut sources: ResMut<AudioSources>,
    mut commands: Commands,
) {
    let mut rng = rand::rng();
    let handle = sources.throws.pick(&mut rng);
    commands.spawn((
        SamplePlayer::new(handle.clone()).with_volume(settings.sfx()),
        RandomPitch::new(0.08),
    ));
}

#[cfg(feature = "audio")]
fn impact_sound(
    on: On<Impact>,
    settings: Res<Settings>,
    mut sources: ResMut<AudioSources>,
    mut commands: Commands,
) {
    use rand::Rng;

    let mut rng = rand::rng();
    let handle = match on.kind {
        ImpactKind::Block => sources.wood_hits.pick(&mut rng),
        ImpactKind::Target => sources.target_hits.pick(&mut rng),
    };

    let Volume::Linear(base) = settings.sfx() else {
        return;
    };
    let volume = Volume::Linear(base * rng.random_range(0.85..1.15));

    commands.spawn((
        SamplePlayer::new(handle.clone()).with_volume(volume),
        RandomPitch::new(0.08),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_rate_limit_independently() {
        let mut cooldowns = ImpactCooldowns::default();
        assert!(cooldowns.try_fire(ImpactKind::Block, 0.0));
        // Wood gated, target still free.
        assert!(!cooldowns.try_fire(ImpactKind::Block, 0.05));
        assert!(cooldowns.try_fire(ImpactKind::Target, 0.05));
        // Both reopen after their own windows.
        assert!(cooldowns.try_fire(ImpactKind::Block, 0.11));
        assert!(!cooldowns.try_fire(ImpactKind::Target, 0.19));
        assert!(cooldowns.try_fire(ImpactKind::Target, 0.21));
    }

    #[test]
    fn retrigger_restarts_flash_decay() {
        let mut flash = ScreenFlash::default();
        flash.trigger(Color::WHITE, 0.15, 0.08);
        flash.remaining = 0.01;
        flash.trigger(Color::WHITE, 0.15, 0.08);
        assert_eq!(flash.remaining, 0.08);
    }
}
