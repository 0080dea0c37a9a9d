//! Structure builder: instantiates a level definition into the physics
//! world and tears the previous one down.
//!
//! Owns every [`Block`] and [`TargetProxy`] entity. Scoring metadata lives
//! on the entities and is only ever flipped by the fall/score detector.

use crate::*;
use avian3d::prelude::*;
use crate::levels::{BlockSpec, LevelDefinition, TargetPosition};
use bevy::gltf::Gltf;
use rand::Rng;

/// Horizontal catchment (both axes) when resolving the supporting surface
/// beneath a target's declared x/z.
pub const CATCHMENT: f32 = 4.0;
/// World height the target visual is scaled to.
pub const TARGET_HEIGHT: f32 = 3.0;
/// Native height of the target model, used to derive the visual scale.
const TARGET_MODEL_HEIGHT: f32 = 1.8;

const PROXY_WIDTH: f32 = 1.2;
const PROXY_HEIGHT: f32 = 2.5;
const PROXY_MASS: f32 = 3.0;

const BLOCK_FRICTION: f32 = 0.95;
const PROXY_FRICTION: f32 = 0.98;

pub fn plugin(app: &mut App) {
    app.add_observer(rebuild_level);
}

/// Marker for structure blocks.
#[derive(Component, Reflect, Clone, Default)]
#[reflect(Component)]
pub struct Block;

/// Scoring metadata tagged onto every block at build time.
#[derive(Component, Reflect, Debug, Clone)]
#[reflect(Component)]
pub struct BlockScore {
    pub initial_y: f32,
    pub initial_xz: Vec2,
    pub scored: bool,
    pub is_static: bool,
    /// World-space top of the block, recorded unless the spec opted out of
    /// the target-height calculation.
    pub top_y: Option<f32>,
}

/// Invisible physics proxy standing in for a target; the visual skin is a
/// child transform.
#[derive(Component, Reflect, Debug, Clone)]
#[reflect(Component)]
pub struct TargetProxy {
    pub initial_y: f32,
    pub initial_xz: Vec2,
    pub fallen: bool,
}

/// Highest block top within the catchment square around a target's
/// declared x/z; ground level when nothing supports it.
pub fn support_height(blocks: &[BlockSpec], target: &TargetPosition) -> f32 {
    blocks
        .iter()
        .filter(|spec| !spec.skip_for_target_height)
        .filter(|spec| {
            (spec.position[0] - target.x).abs() < CATCHMENT
                && (spec.position[2] - target.z).abs() < CATCHMENT
        })
        .map(|spec| spec.position[1] + spec.kind.template().height / 2.0)
        .fold(0.0, f32::max)
}

/// The definition for the session's current level, preferring an
/// editor-supplied override when one was passed at launch.
fn resolve_definition(launch: &LaunchOptions, session: &GameSession) -> LevelDefinition {
    if let Some(path) = &launch.test_level_path {
        match levels::load_override(path) {
            Ok(def) => {
                info!("loading override level '{}' from {path}", def.name);
                return def;
            }
            Err(e) => warn!("ignoring override level at {path}: {e}"),
        }
    }
    levels::get_level(session.current_level).clone()
}

fn rebuild_level(
    _: On<RebuildLevel>,
    launch: Res<LaunchOptions>,
    models: Res<Models>,
    gltf_assets: Res<Assets<Gltf>>,
    previous: Query<Entity, Or<(With<Block>, With<TargetProxy>)>>,
    mut session: ResMut<GameSession>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut commands: Commands,
) {
    // Idempotent teardown: safe with nothing active.
    for entity in &previous {
        commands.entity(entity).despawn();
    }

    let def = resolve_definition(&launch, &session);
    info!("building level {}: {}", session.current_level, def.name);

    let mut rng = rand::rng();
    for (index, spec) in def.blocks.iter().enumerate() {
        spawn_block(index, spec, &mut rng, &mut meshes, &mut materials, &mut commands);
    }

    for target in &def.targets {
        let surface = support_height(&def.blocks, target);
        spawn_target(
            target,
            surface,
            &models,
            &gltf_assets,
            &mut meshes,
            &mut materials,
            &mut commands,
        );
    }

    session.begin_level(def.targets.len() as u32);

    let (center, radius) = scene::fit_view(&def);
    commands.trigger(FitCamera { center, radius });
}

fn spawn_block(
    index: usize,
    spec: &BlockSpec,
    rng: &mut impl Rng,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    commands: &mut Commands,
) {
    let template = spec.kind.template();
    let position = spec.position();

    let mut transform = Transform::from_translation(position);
    if let Some(degrees) = spec.rotation {
        transform.rotation = Quat::from_rotation_y(degrees.to_radians());
    }

    // Random warm tint per block, in place of the original's random
    // crate-art textures.
    let hue = rng.random_range(20.0..50.0);
    let lightness = rng.random_range(0.45..0.65);
    let material = materials.add(StandardMaterial {
        base_color: Color::hsl(hue, 0.55, lightness),
        perceptual_roughness: 0.8,
        ..default()
    });

    let mut entity = commands.spawn((
        Name::new(format!("Block {index}")),
        DespawnOnExit(Screen::Gameplay),
        Block,
        BlockScore {
            initial_y: position.y,
            initial_xz: Vec2::new(position.x, position.z),
            scored: false,
            is_static: template.is_static,
            top_y: (!spec.skip_for_target_height)
                .then_some(position.y + template.height / 2.0),
        },
        Mesh3d(meshes.add(Cuboid::new(template.width, template.height, template.depth))),
        MeshMaterial3d(material),
        transform,
        Collider::cuboid(template.width, template.height, template.depth),
        Friction::new(BLOCK_FRICTION),
        Restitution::new(0.0),
    ));

    if template.is_static {
        entity.insert(RigidBody::Static);
    } else {
        entity.insert((
            RigidBody::Dynamic,
            Mass(template.mass),
            // Settle fast instead of sliding around like ice.
            LinearDamping(0.9),
            AngularDamping(0.95),
        ));
    }
}

fn spawn_target(
    target: &TargetPosition,
    surface_y: f32,
    models: &Models,
    gltf_assets: &Assets<Gltf>,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    commands: &mut Commands,
) {
    // Proxy bottom face flush with the supporting surface.
    let initial_y = surface_y + PROXY_HEIGHT / 2.0;
    let position = Vec3::new(target.x, initial_y, target.z);

    let mut proxy = commands.spawn((
        Name::new("Target"),
        DespawnOnExit(Screen::Gameplay),
        TargetProxy {
            initial_y,
            initial_xz: Vec2::new(target.x, target.z),
            fallen: false,
        },
        Transform::from_translation(position),
        Visibility::default(),
        RigidBody::Dynamic,
        Collider::cuboid(PROXY_WIDTH, PROXY_HEIGHT, PROXY_WIDTH),
        Mass(PROXY_MASS),
        // Grips blocks and stands like a statue until hit.
        Friction::new(PROXY_FRICTION),
        Restitution::new(0.0),
        LinearDamping(0.92),
        AngularDamping(0.99),
    ));

    proxy.with_children(|parent| {
        match gltf_assets.get(&models.target) {
            Some(gltf) if !gltf.scenes.is_empty() => {
                // Model origin is at the feet; align them with the proxy's
                // bottom face.
                parent.spawn((
                    SceneRoot(gltf.scenes[0].clone()),
                    Transform::from_xyz(0.0, -PROXY_HEIGHT / 2.0, 0.0)
                        .with_scale(Vec3::splat(TARGET_HEIGHT / TARGET_MODEL_HEIGHT)),
                ));
            }
            _ => {
                // Asset missing or not loaded yet: primitive placeholder,
                // gameplay unaffected.
                warn!("target model unavailable, using placeholder");
                parent.spawn((
                    Mesh3d(meshes.add(Capsule3d::new(0.5, TARGET_HEIGHT - 1.0))),
                    MeshMaterial3d(materials.add(StandardMaterial {
                        base_color: Color::srgb(1.0, 0.8, 0.6),
                        ..default()
                    })),
                    Transform::from_xyz(0.0, 0.25, 0.0),
                ));
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels::BlockKind;

    fn spec(kind: BlockKind, x: f32, y: f32, z: f32) -> BlockSpec {
        BlockSpec {
            kind,
            position: [x, y, z],
            rotation: None,
            skip_for_target_height: false,
        }
    }

    #[test]
    fn support_height_picks_tallest_block_in_catchment() {
        let blocks = vec![
            spec(BlockKind::LargeCube, 0.0, 2.0, -8.0), // top at 4.0
            spec(BlockKind::PlatformDynamic, 0.0, 4.5, -8.0), // top at 5.0
            spec(BlockKind::LargeCube, 20.0, 10.0, -8.0), // far away
        ];
        let target = TargetPosition { x: 0.0, z: -8.0 };
        assert_eq!(support_height(&blocks, &target), 5.0);
    }

    #[test]
    fn support_height_defaults_to_ground() {
        let target = TargetPosition { x: 0.0, z: -8.0 };
        assert_eq!(support_height(&[], &target), 0.0);

        // Blocks just outside the catchment don't count.
        let blocks = vec![spec(BlockKind::LargeCube, 4.1, 2.0, -8.0)];
        assert_eq!(support_height(&blocks, &target), 0.0);
    }

    #[test]
    fn bars_are_excluded_from_support() {
        let mut bar = spec(BlockKind::PillarTall, 0.0, 4.0, -8.0);
        bar.skip_for_target_height = true;
        let blocks = vec![bar, spec(BlockKind::Heavy, 0.0, 1.0, -8.0)];
        let target = TargetPosition { x: 0.0, z: -8.0 };
        // The tall bar (top 8.0) is skipped; the heavy base (top 2.0) wins.
        assert_eq!(support_height(&blocks, &target), 2.0);
    }

    #[test]
    fn level_one_target_sits_on_the_platform() {
        let def = levels::get_level(1);
        let surface = support_height(&def.blocks, &def.targets[0]);
        // Dynamic platform centered at 4.5, height 1.0.
        assert_eq!(surface, 5.0);
    }
}
