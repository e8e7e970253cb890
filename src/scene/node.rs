/// Typed scene-graph nodes
///
/// The composed scene is a plain tree of these nodes. The external 3D
/// engine consumes it either as JSON or as declarative markup with
/// space-separated numeric triples for position/rotation; nothing in this
/// module draws anything itself.

use cgmath::Vector3;
use serde::Serialize;

use crate::state::data::EyeTag;

/// Background color of the sky dome once images are showing
pub const SKY_COLOR: &str = "#232d31";

/// Image plane dimensions, engine units
pub const PLANE_WIDTH: f32 = 12.0;
pub const PLANE_HEIGHT: f32 = 8.0;

/// Entity id of the placeholder ground plane
pub const GROUND_ID: &str = "ground";

/// An image declared up front so the engine starts loading it before any
/// plane references it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageAsset {
    pub id: String,
    pub src: String,
}

/// A flat rectangle, textured (image planes) or colored (buttons, ground)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plane {
    pub id: String,
    pub width: f32,
    pub height: f32,
    /// Asset reference, e.g. "#leftEyeImg0". None for untextured planes.
    pub src: Option<String>,
    pub color: Option<String>,
    pub transparent: bool,
    pub position: Vector3<f32>,
    /// Euler rotation in degrees
    pub rotation: Vector3<f32>,
    pub eye: EyeTag,
}

impl Plane {
    pub fn is_textured(&self) -> bool {
        self.src.is_some()
    }
}

/// Looping pan applied to the camera rig in the fan layout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RigAnimation {
    pub to: Vector3<f32>,
    pub duration_ms: u64,
}

/// Rig entity with the camera mounted as a child
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CameraRig {
    pub position: Vector3<f32>,
    pub camera_position: Vector3<f32>,
    pub animation: Option<RigAnimation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SceneNode {
    Plane(Plane),
    Sky {
        color: String,
    },
    Text {
        value: String,
        position: Vector3<f32>,
        color: String,
    },
    Box {
        position: Vector3<f32>,
        rotation: Vector3<f32>,
        color: String,
    },
    Sphere {
        position: Vector3<f32>,
        radius: f32,
        color: String,
    },
    Cylinder {
        position: Vector3<f32>,
        radius: f32,
        height: f32,
        color: String,
    },
    CameraRig(CameraRig),
}

/// The full composed tree handed to the engine
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Scene {
    pub assets: Vec<ImageAsset>,
    pub nodes: Vec<SceneNode>,
}

impl Scene {
    pub fn planes(&self) -> impl Iterator<Item = &Plane> {
        self.nodes.iter().filter_map(|node| match node {
            SceneNode::Plane(plane) => Some(plane),
            _ => None,
        })
    }

    pub fn textured_planes(&self) -> impl Iterator<Item = &Plane> {
        self.planes().filter(|p| p.is_textured())
    }

    pub fn find_plane(&self, id: &str) -> Option<&Plane> {
        self.planes().find(|p| p.id == id)
    }

    pub fn has_sky(&self) -> bool {
        self.nodes
            .iter()
            .any(|node| matches!(node, SceneNode::Sky { .. }))
    }

    /// Number of placeholder tableau primitives (shapes shown only while
    /// the store is empty)
    pub fn placeholder_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| match node {
                SceneNode::Text { .. }
                | SceneNode::Box { .. }
                | SceneNode::Sphere { .. }
                | SceneNode::Cylinder { .. } => true,
                SceneNode::Plane(plane) => plane.id == GROUND_ID,
                _ => false,
            })
            .count()
    }

    /// JSON form of the tree, for engine bridges that prefer data over tags
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Declarative markup form: each node rendered as a tag whose attributes
    /// use the engine's string conventions (triples, `key: value` pairs)
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        out.push_str("<a-scene background=\"color: #000\" vr-mode-ui=\"enabled: true\">\n");

        out.push_str("  <a-assets>\n");
        for asset in &self.assets {
            out.push_str(&format!(
                "    <img id=\"{}\" src=\"{}\">\n",
                asset.id, asset.src
            ));
        }
        out.push_str("  </a-assets>\n");

        for node in &self.nodes {
            out.push_str(&node.to_markup());
        }

        out.push_str("</a-scene>\n");
        out
    }
}

/// Format a vector as the engine's space-separated triple, e.g. "0 2.5 -10"
pub fn triple(v: Vector3<f32>) -> String {
    format!("{} {} {}", v.x, v.y, v.z)
}

impl SceneNode {
    fn to_markup(&self) -> String {
        match self {
            SceneNode::Plane(plane) => {
                let material = match (&plane.src, &plane.color) {
                    (Some(src), _) => format!(
                        " material=\"src: {}; transparent: {}\"",
                        src, plane.transparent
                    ),
                    (None, Some(color)) => format!(" color=\"{}\"", color),
                    (None, None) => String::new(),
                };
                format!(
                    "  <a-plane id=\"{}\" geometry=\"width: {}; height: {}\"{} position=\"{}\" rotation=\"{}\" eye-filter=\"eye: {}\"></a-plane>\n",
                    plane.id,
                    plane.width,
                    plane.height,
                    material,
                    triple(plane.position),
                    triple(plane.rotation),
                    plane.eye.as_str(),
                )
            }
            SceneNode::Sky { color } => format!("  <a-sky color=\"{}\"></a-sky>\n", color),
            SceneNode::Text {
                value,
                position,
                color,
            } => format!(
                "  <a-text value=\"{}\" position=\"{}\" align=\"center\" color=\"{}\"></a-text>\n",
                value,
                triple(*position),
                color
            ),
            SceneNode::Box {
                position,
                rotation,
                color,
            } => format!(
                "  <a-box position=\"{}\" rotation=\"{}\" color=\"{}\"></a-box>\n",
                triple(*position),
                triple(*rotation),
                color
            ),
            SceneNode::Sphere {
                position,
                radius,
                color,
            } => format!(
                "  <a-sphere position=\"{}\" radius=\"{}\" color=\"{}\"></a-sphere>\n",
                triple(*position),
                radius,
                color
            ),
            SceneNode::Cylinder {
                position,
                radius,
                height,
                color,
            } => format!(
                "  <a-cylinder position=\"{}\" radius=\"{}\" height=\"{}\" color=\"{}\"></a-cylinder>\n",
                triple(*position),
                radius,
                height,
                color
            ),
            SceneNode::CameraRig(rig) => {
                let animation = rig.animation.as_ref().map_or(String::new(), |anim| {
                    format!(
                        " animation=\"property: position; to: {}; dur: {}; easing: linear; loop: true; autoplay: true\"",
                        triple(anim.to),
                        anim.duration_ms
                    )
                });
                format!(
                    "  <a-entity id=\"cameraRig\" position=\"{}\"{}>\n    <a-camera position=\"{}\"></a-camera>\n  </a-entity>\n",
                    triple(rig.position),
                    animation,
                    triple(rig.camera_position),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triple_formatting() {
        assert_eq!(triple(Vector3::new(0.0, 2.5, -10.0)), "0 2.5 -10");
        assert_eq!(triple(Vector3::new(12.0, 0.0, 5.0)), "12 0 5");
    }

    #[test]
    fn test_plane_markup_has_engine_attributes() {
        let plane = Plane {
            id: "leftPlane0".to_string(),
            width: PLANE_WIDTH,
            height: PLANE_HEIGHT,
            src: Some("#leftEyeImg0".to_string()),
            color: None,
            transparent: true,
            position: Vector3::new(10.0, 2.5, 5.0),
            rotation: Vector3::new(0.0, -45.0, 0.0),
            eye: EyeTag::Left,
        };
        let markup = SceneNode::Plane(plane).to_markup();

        assert!(markup.contains("geometry=\"width: 12; height: 8\""));
        assert!(markup.contains("material=\"src: #leftEyeImg0; transparent: true\""));
        assert!(markup.contains("position=\"10 2.5 5\""));
        assert!(markup.contains("rotation=\"0 -45 0\""));
        assert!(markup.contains("eye-filter=\"eye: left\""));
    }

    #[test]
    fn test_rig_markup_includes_animation() {
        let rig = CameraRig {
            position: Vector3::new(0.0, 0.0, 40.0),
            camera_position: Vector3::new(0.0, 2.5, 0.0),
            animation: Some(RigAnimation {
                to: Vector3::new(0.0, 1.0, -10.0),
                duration_ms: 30000,
            }),
        };
        let markup = SceneNode::CameraRig(rig).to_markup();

        assert!(markup.contains("position=\"0 0 40\""));
        assert!(markup.contains("to: 0 1 -10; dur: 30000; easing: linear; loop: true"));
        assert!(markup.contains("<a-camera position=\"0 2.5 0\">"));
    }

    #[test]
    fn test_scene_json_round_trips_through_serde() {
        let scene = Scene {
            assets: vec![ImageAsset {
                id: "leftEyeImg0".to_string(),
                src: "a.jpg".to_string(),
            }],
            nodes: vec![SceneNode::Sky {
                color: SKY_COLOR.to_string(),
            }],
        };
        let json = scene.to_json().unwrap();
        assert!(json.contains("leftEyeImg0"));
        assert!(json.contains(SKY_COLOR));
    }
}
