/// Declarative scene composition
///
/// `compose` is a pure function of (pairs, cursor, ready flag, layout) and
/// is re-run after every state change; nothing mutates a previous scene.
/// Asset declarations are always emitted so the engine starts loading
/// textures, but visible geometry appears only once the ready flag is set.

use cgmath::Vector3;

use crate::state::data::{EyeTag, Side, StereoPair};

use super::node::{
    CameraRig, ImageAsset, Plane, RigAnimation, Scene, SceneNode, GROUND_ID, PLANE_HEIGHT,
    PLANE_WIDTH, SKY_COLOR,
};

/// Entity ids the in-VR click dispatcher matches on
pub const PREV_BUTTON_ID: &str = "prevButton";
pub const NEXT_BUTTON_ID: &str = "nextButton";

/// Minimum duration of the fan layout's camera pan
const MIN_PAN_MS: u64 = 30_000;
/// Additional pan time per pair, so longer sequences pan proportionally slower
const PAN_MS_PER_PAIR: u64 = 7_500;

/// How the composed planes are arranged in space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// One frontal pair straight ahead
    Single,
    /// All pairs fanned out radially along the camera's pan path
    Fan,
    /// Four fixed walls around the viewer
    Room,
}

impl Layout {
    pub const ALL: [Layout; 3] = [Layout::Single, Layout::Fan, Layout::Room];
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Layout::Single => "Single frame",
            Layout::Fan => "Radial fan",
            Layout::Room => "Four-wall room",
        })
    }
}

/// Duration of the camera rig's looping pan for `pair_count` pairs
pub fn pan_duration_ms(pair_count: usize) -> u64 {
    MIN_PAN_MS.max(pair_count as u64 * PAN_MS_PER_PAIR)
}

/// Build the scene tree for the current state
pub fn compose(pairs: &[StereoPair], current: usize, ready: bool, layout: Layout) -> Scene {
    let mut scene = Scene::default();

    for (index, pair) in pairs.iter().enumerate() {
        if let Some(src) = &pair.left {
            scene.assets.push(ImageAsset {
                id: asset_id(Side::Left, index),
                src: src.clone(),
            });
        }
        if let Some(src) = &pair.right {
            scene.assets.push(ImageAsset {
                id: asset_id(Side::Right, index),
                src: src.clone(),
            });
        }
    }

    scene.nodes.push(SceneNode::CameraRig(camera_rig(layout, pairs.len())));

    if pairs.is_empty() {
        placeholder_tableau(&mut scene);
        return scene;
    }

    if !ready {
        // Assets alone: the engine decodes in the background and the load
        // confirmation flips the ready flag.
        return scene;
    }

    match layout {
        Layout::Single => compose_single(&mut scene, pairs, current),
        Layout::Fan => compose_fan(&mut scene, pairs),
        Layout::Room => compose_room(&mut scene, pairs, current),
    }

    scene.nodes.push(SceneNode::Sky {
        color: SKY_COLOR.to_string(),
    });
    push_nav_buttons(&mut scene);

    scene
}

fn asset_id(side: Side, index: usize) -> String {
    match side {
        Side::Left => format!("leftEyeImg{index}"),
        Side::Right => format!("rightEyeImg{index}"),
    }
}

fn plane_id(side: Side, index: usize) -> String {
    match side {
        Side::Left => format!("leftPlane{index}"),
        Side::Right => format!("rightPlane{index}"),
    }
}

fn camera_rig(layout: Layout, pair_count: usize) -> CameraRig {
    match layout {
        Layout::Fan => {
            let start_z = if pair_count > 0 {
                5.0 + pair_count as f32 * 10.0 + 10.0
            } else {
                40.0
            };
            CameraRig {
                position: Vector3::new(0.0, 0.0, start_z),
                camera_position: Vector3::new(0.0, 2.5, 0.0),
                animation: Some(RigAnimation {
                    to: Vector3::new(0.0, 1.0, -10.0),
                    duration_ms: pan_duration_ms(pair_count),
                }),
            }
        }
        Layout::Single | Layout::Room => CameraRig {
            position: Vector3::new(0.0, 0.0, 0.0),
            camera_position: Vector3::new(0.0, 2.5, 0.0),
            animation: None,
        },
    }
}

/// Push both planes of one pair at a shared transform, tagged per eye
fn push_pair(
    scene: &mut Scene,
    index: usize,
    pair: &StereoPair,
    position: Vector3<f32>,
    rotation: Vector3<f32>,
) {
    for side in [Side::Left, Side::Right] {
        if pair.side(side).is_some() {
            scene.nodes.push(SceneNode::Plane(Plane {
                id: plane_id(side, index),
                width: PLANE_WIDTH,
                height: PLANE_HEIGHT,
                src: Some(format!("#{}", asset_id(side, index))),
                color: None,
                transparent: true,
                position,
                rotation,
                eye: EyeTag::from(side),
            }));
        }
    }
}

fn compose_single(scene: &mut Scene, pairs: &[StereoPair], current: usize) {
    if let Some(pair) = pairs.get(current) {
        push_pair(
            scene,
            current,
            pair,
            Vector3::new(0.0, 2.5, -10.0),
            Vector3::new(0.0, 0.0, 0.0),
        );
    }
}

/// Every pair fanned out along the pan path, alternating sides with
/// increasing yaw so the camera sweeps past each one
fn compose_fan(scene: &mut Scene, pairs: &[StereoPair]) {
    for (index, pair) in pairs.iter().enumerate() {
        let z = 5.0 + index as f32 * 10.0;
        let spread = 10.0 + index as f32 * 2.0;
        let yaw = 45.0 + index as f32 * 5.0;
        let (x, rotation_y) = if index % 2 == 0 {
            (spread, -yaw)
        } else {
            (-spread, yaw)
        };
        push_pair(
            scene,
            index,
            pair,
            Vector3::new(x, 2.5, z),
            Vector3::new(0.0, rotation_y, 0.0),
        );
    }
}

/// Wall transforms: front, right, back, left, each facing the viewer
const WALLS: [([f32; 3], f32); 4] = [
    ([0.0, 2.5, -6.0], 0.0),
    ([6.0, 2.5, 0.0], -90.0),
    ([0.0, 2.5, 6.0], 180.0),
    ([-6.0, 2.5, 0.0], 90.0),
];

/// Four fixed wall slots filled from the cursor forward, wrapping.
/// Fewer than four pairs leaves the remaining walls empty; more than four
/// shows the four consecutive pairs starting at the cursor.
fn compose_room(scene: &mut Scene, pairs: &[StereoPair], current: usize) {
    let count = pairs.len().min(WALLS.len());
    for (wall, (position, yaw)) in WALLS.iter().take(count).enumerate() {
        let index = (current + wall) % pairs.len();
        push_pair(
            scene,
            index,
            &pairs[index],
            Vector3::from(*position),
            Vector3::new(0.0, *yaw, 0.0),
        );
    }
}

/// Untextured click targets reachable from inside an immersive session,
/// where the native window buttons are not
fn push_nav_buttons(scene: &mut Scene) {
    for (id, x) in [(PREV_BUTTON_ID, -2.0), (NEXT_BUTTON_ID, 2.0)] {
        scene.nodes.push(SceneNode::Plane(Plane {
            id: id.to_string(),
            width: 1.5,
            height: 0.75,
            src: None,
            color: Some("#4CC3D9".to_string()),
            transparent: false,
            position: Vector3::new(x, 0.5, -4.0),
            rotation: Vector3::new(0.0, 0.0, 0.0),
            eye: EyeTag::Both,
        }));
    }
}

/// Instructional tableau shown while no pairs exist
fn placeholder_tableau(scene: &mut Scene) {
    scene.nodes.push(SceneNode::Text {
        value: "Upload separate left and right eye images to view in 3D".to_string(),
        position: Vector3::new(0.0, 2.0, -3.0),
        color: "#FFF".to_string(),
    });
    scene.nodes.push(SceneNode::Box {
        position: Vector3::new(-1.0, 0.5, -3.0),
        rotation: Vector3::new(0.0, 45.0, 0.0),
        color: "#4CC3D9".to_string(),
    });
    scene.nodes.push(SceneNode::Sphere {
        position: Vector3::new(0.0, 1.25, -5.0),
        radius: 1.25,
        color: "#EF2D5E".to_string(),
    });
    scene.nodes.push(SceneNode::Cylinder {
        position: Vector3::new(1.0, 0.75, -3.0),
        radius: 0.5,
        height: 1.5,
        color: "#FFC65D".to_string(),
    });
    scene.nodes.push(SceneNode::Plane(Plane {
        id: GROUND_ID.to_string(),
        width: 4.0,
        height: 4.0,
        src: None,
        color: Some("#7BC8A4".to_string()),
        transparent: false,
        position: Vector3::new(0.0, 0.0, -4.0),
        rotation: Vector3::new(-90.0, 0.0, 0.0),
        eye: EyeTag::Both,
    }));
}
