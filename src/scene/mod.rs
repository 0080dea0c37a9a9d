//! Physics world setup and the static scene: ground plane, lights.
//!
//! Gravity is softer than earth (-7.0 on Y) so toppling structures read
//! clearly instead of collapsing in a blur. The physics clock starts paused
//! and the game controller unpauses it when play begins, so nothing drifts
//! while the player is still on the menu.

use crate::*;
use avian3d::prelude::*;

mod camera;
pub use camera::*;

const GROUND_SIZE: f32 = 50.0;
const GROUND_THICKNESS: f32 = 0.1;

pub fn plugin(app: &mut App) {
    app.add_plugins((PhysicsPlugins::default(), camera::plugin))
        .insert_resource(Gravity(Vec3::NEG_Y * 7.0))
        .add_systems(Startup, (setup, pause_physics));
}

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Ground: mesh top face sits at y = 0.
    commands.spawn((
        Name::new("Ground"),
        Ground,
        Mesh3d(meshes.add(Cuboid::new(GROUND_SIZE, GROUND_THICKNESS, GROUND_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.15, 0.15, 0.2),
            perceptual_roughness: 0.9,
            ..default()
        })),
        Transform::from_xyz(0.0, -GROUND_THICKNESS / 2.0, 0.0),
        RigidBody::Static,
        Collider::cuboid(GROUND_SIZE, GROUND_THICKNESS, GROUND_SIZE),
        Friction::new(0.8),
        Restitution::new(0.1),
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 400.0,
        ..Default::default()
    });

    commands.spawn((
        Name::new("Main Light"),
        DirectionalLight {
            illuminance: 6_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 20.0, -10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn pause_physics(mut time: ResMut<Time<Physics>>) {
    time.pause();
}
