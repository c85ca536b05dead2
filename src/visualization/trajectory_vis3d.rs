use bevy::prelude::*;
use bevy::math::primitives::{Sphere, Cuboid};
use tracing::info;

use crate::reporting::report::plot_bounds;
use crate::simulation::runner::TrajectoryHistory;

/// Component tagging each sphere with its body index into the history
#[derive(Component)]
struct BodyIndex3(pub usize);

/// Half-width of the scene in screen units; the recorded paths are scaled
/// so the largest absolute coordinate lands here
const SCENE_HALF: f32 = 500.0;

/// Distance of the camera from the origin along +Z
const CAMERA_DISTANCE: f32 = 1500.0;

/// Samples advanced per rendered frame
const SAMPLES_PER_FRAME: usize = 1;

/// Legend text size in logical pixels
const LEGEND_FONT_SIZE: f32 = 18.0;

// One colour per body for the usual Sun + 9 bodies, recycled beyond that
const PALETTE: [(f32, f32, f32); 10] = [
    (1.0, 1.0, 1.0),
    (1.0, 0.2, 0.2),
    (0.3, 0.5, 1.0),
    (0.2, 0.9, 0.3),
    (1.0, 0.9, 0.2),
    (0.9, 0.3, 0.9),
    (0.2, 0.9, 0.9),
    (1.0, 0.55, 0.1),
    (0.6, 0.4, 0.2),
    (0.6, 0.6, 0.6),
];

/// Recorded run plus replay cursor
#[derive(Resource)]
struct Replay {
    history: TrajectoryHistory,
    scale: f32, // sim metres -> screen units
    cursor: usize,
}

impl Replay {
    fn len(&self) -> usize {
        self.history.first().map_or(0, |t| t.samples.len())
    }

    fn to_screen(&self, p: &crate::simulation::states::NVec3) -> Vec3 {
        Vec3::new(p.x as f32, p.y as f32, p.z as f32) * self.scale
    }
}

fn body_color(i: usize) -> Color {
    let (r, g, b) = PALETTE[i % PALETTE.len()];
    Color::srgb(r, g, b)
}

/// Legend rows: body name with the colour its path and markers are drawn in
fn legend_entries(history: &TrajectoryHistory) -> Vec<(String, Color)> {
    history
        .iter()
        .enumerate()
        .map(|(i, t)| (t.name.clone(), body_color(i)))
        .collect()
}

fn announce_replay(history: &TrajectoryHistory) {
    info!(
        bodies = history.len(),
        samples = history.first().map_or(0, |t| t.samples.len()),
        "run_3d: replaying trajectories"
    );
}

/// Open a window replaying `history`: one sphere per body walking its
/// samples, the path drawn behind it, and a marker on the final sample
pub fn run_3d(history: TrajectoryHistory) {
    announce_replay(&history);

    let bound = plot_bounds(&history);
    let scale = if bound > 0.0 { SCENE_HALF / bound as f32 } else { 1.0 };

    App::new()
        .insert_resource(Replay { history, scale, cursor: 0 })
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_3d)
        .add_systems(Update, (advance_replay, sync_transforms_3d, draw_paths).chain())
        .run();
}

/// Startup system: spawn camera, light, axes, one sphere per body and a
/// cube on each body's final sample
fn setup_3d(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    replay: Res<Replay>,
) {
    commands.spawn(Camera3dBundle {
        camera: Camera {
            clear_color: ClearColorConfig::Custom(Color::srgb(0.0, 0.0, 0.0)),
            ..Default::default()
        },
        transform: Transform::from_xyz(200.0, 150.0, CAMERA_DISTANCE)
            .looking_at(Vec3::ZERO, Vec3::Y),
        ..Default::default()
    });

    commands.spawn(PointLightBundle {
        point_light: PointLight {
            intensity: 1500.0,
            range: 1000.0,
            ..Default::default()
        },
        transform: Transform::from_xyz(100.0, 100.0, CAMERA_DISTANCE),
        ..Default::default()
    });

    spawn_axes(&mut commands, &mut meshes, &mut materials);
    spawn_legend(&mut commands, &replay.history);

    for (i, traj) in replay.history.iter().enumerate() {
        let start = traj.samples.first().map_or(Vec3::ZERO, |p| replay.to_screen(p));

        commands.spawn((
            PbrBundle {
                mesh: meshes.add(Sphere::new(6.0).mesh()),
                material: materials.add(StandardMaterial {
                    base_color: body_color(i),
                    unlit: true,
                    ..Default::default()
                }),
                transform: Transform::from_translation(start),
                ..Default::default()
            },
            BodyIndex3(i),
        ));

        // final sampled point
        if let Some(last) = traj.samples.last() {
            commands.spawn(PbrBundle {
                mesh: meshes.add(Cuboid::new(8.0, 8.0, 8.0).mesh()),
                material: materials.add(StandardMaterial {
                    base_color: body_color(i),
                    unlit: true,
                    ..Default::default()
                }),
                transform: Transform::from_translation(replay.to_screen(last)),
                ..Default::default()
            });
        }
    }
}

/// Step the cursor forward, looping back to the start at the end
fn advance_replay(mut replay: ResMut<Replay>) {
    let len = replay.len();
    if len == 0 {
        return;
    }
    replay.cursor = (replay.cursor + SAMPLES_PER_FRAME) % len;
}

fn sync_transforms_3d(replay: Res<Replay>, mut query: Query<(&BodyIndex3, &mut Transform)>) {
    for (BodyIndex3(i), mut transform) in &mut query {
        if let Some(p) = replay.history.get(*i).and_then(|t| t.samples.get(replay.cursor)) {
            transform.translation = replay.to_screen(p);
        }
    }
}

/// Path travelled so far, every other segment skipped for a dotted look
fn draw_paths(replay: Res<Replay>, mut gizmos: Gizmos) {
    for (i, traj) in replay.history.iter().enumerate() {
        let end = (replay.cursor + 1).min(traj.samples.len());
        let pts: Vec<Vec3> = traj.samples[..end].iter().map(|p| replay.to_screen(p)).collect();
        for seg in pts.windows(2).step_by(2) {
            gizmos.line(seg[0], seg[1], body_color(i));
        }
    }
}

/// Name legend in the top-left corner, one coloured line per body
fn spawn_legend(commands: &mut Commands, history: &TrajectoryHistory) {
    commands
        .spawn(NodeBundle {
            style: Style {
                position_type: PositionType::Absolute,
                top: Val::Px(10.0),
                left: Val::Px(10.0),
                flex_direction: FlexDirection::Column,
                ..Default::default()
            },
            ..Default::default()
        })
        .with_children(|parent| {
            for (name, color) in legend_entries(history) {
                parent.spawn(TextBundle::from_section(
                    name,
                    TextStyle {
                        font_size: LEGEND_FONT_SIZE,
                        color,
                        ..Default::default()
                    },
                ));
            }
        });
}

// =========================================================================================
// Draw 3D axes for visual reference
// =========================================================================================

fn spawn_axes(commands: &mut Commands, meshes: &mut Assets<Mesh>, materials: &mut Assets<StandardMaterial>) {
    // Axes span the symmetric plot bounds
    let axis_len = 2.0 * SCENE_HALF;
    let axis_thickness = 0.5;

    let axes = [
        (Vec3::new(axis_len, axis_thickness, axis_thickness), Color::srgb(1.0, 0.0, 0.0)),
        (Vec3::new(axis_thickness, axis_len, axis_thickness), Color::srgb(0.0, 1.0, 0.0)),
        (Vec3::new(axis_thickness, axis_thickness, axis_len), Color::srgb(0.0, 0.0, 1.0)),
    ];

    for (size, color) in axes {
        commands.spawn(PbrBundle {
            mesh: meshes.add(Cuboid::new(size.x, size.y, size.z).mesh()),
            material: materials.add(StandardMaterial {
                base_color: color,
                unlit: true,
                ..Default::default()
            }),
            transform: Transform::from_xyz(0.0, 0.0, 0.0),
            ..Default::default()
        });
    }
}
