//! Decorative 3D backdrop: ground plane, light rig, and slowly spinning
//! building slabs.
//!
//! Purely visual. Nothing here reads or writes session state; the spin
//! animation owns its state through the `Spinner` component.

use bevy::prelude::*;
use rand::Rng;

/// Component for props that rotate about the Y axis.
#[derive(Component)]
pub struct Spinner {
    /// Rotation speed in radians per second.
    pub rate: f32,
}

/// Spawn the camera, lights, ground, and placeholder city layout.
pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Camera looking down at the little plaza
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: 50.0_f32.to_radians(),
            ..default()
        }),
        Transform::from_xyz(0.0, 3.0, 6.0).looking_at(Vec3::new(0.0, 0.5, 0.0), Vec3::Y),
    ));

    // Light rig: soft ambient plus one directional
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 200.0,
    });
    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(5.0, 10.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Ground plane
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(50.0, 50.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.06, 0.09, 0.14),
            metallic: 0.1,
            perceptual_roughness: 1.0,
            ..default()
        })),
        Transform::from_xyz(0.0, -0.4, 0.0),
    ));

    // Three building slabs, each with a blank label plaque floating above
    let slab_mesh = meshes.add(Cuboid::new(1.6, 0.8, 0.2));
    let plaque_mesh = meshes.add(Plane3d::new(Vec3::Z, Vec2::new(0.9, 0.225)));
    let slab_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.35, 0.42, 0.55),
        metallic: 0.2,
        perceptual_roughness: 0.7,
        ..default()
    });
    let plaque_material = materials.add(StandardMaterial {
        base_color: Color::srgba(1.0, 1.0, 1.0, 0.95),
        unlit: true,
        alpha_mode: AlphaMode::Blend,
        ..default()
    });

    let mut rng = rand::thread_rng();
    for x in [-2.0, 0.0, 2.0] {
        commands
            .spawn((Transform::from_xyz(x, 1.0, -1.5), Visibility::default()))
            .with_children(|parent| {
                parent.spawn((
                    Mesh3d(slab_mesh.clone()),
                    MeshMaterial3d(slab_material.clone()),
                    Transform::default(),
                    Spinner {
                        rate: rng.gen_range(0.18..0.24),
                    },
                ));
                parent.spawn((
                    Mesh3d(plaque_mesh.clone()),
                    MeshMaterial3d(plaque_material.clone()),
                    Transform::from_xyz(0.0, 0.6, 0.0),
                ));
            });
    }

    // Small lobby prop near the origin
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(0.8, 0.5, 0.4))),
        MeshMaterial3d(materials.add(StandardMaterial::default())),
        Transform::from_xyz(0.8, 0.2, -0.5),
    ));
}

/// System to spin the building slabs.
pub fn spin_slabs(time: Res<Time>, mut query: Query<(&Spinner, &mut Transform)>) {
    for (spinner, mut transform) in query.iter_mut() {
        transform.rotate_y(spinner.rate * time.delta_secs());
    }
}
