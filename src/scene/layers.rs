/// Per-eye render-layer selection
///
/// The stereo illusion for the two-full-images layout works by moving each
/// plane's mesh onto a render layer only one of the stereo cameras can see.
/// Layer 0 is visible to both eyes, layer 1 to the left eye and layer 2 to
/// the right eye. Outside VR-mode everything sits on layer 0 so a flat
/// screen shows every plane instead of only one eye's half.

use serde::Serialize;

use crate::state::data::EyeTag;

/// Engine-level layer tag controlling which stereo camera sees a mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenderLayer(pub u8);

/// Visible to both stereo cameras (and the flat-screen camera)
pub const LAYER_BOTH_EYES: RenderLayer = RenderLayer(0);
/// Visible to the left-eye camera only
pub const LAYER_LEFT_EYE: RenderLayer = RenderLayer(1);
/// Visible to the right-eye camera only
pub const LAYER_RIGHT_EYE: RenderLayer = RenderLayer(2);

/// The layer a mesh belongs on, given the VR-mode flag and its eye tag.
///
/// Exiting VR-mode maps every tag back to layer 0.
pub fn layer_for(vr_active: bool, eye: EyeTag) -> RenderLayer {
    if vr_active {
        match eye {
            EyeTag::Left => LAYER_LEFT_EYE,
            EyeTag::Right => LAYER_RIGHT_EYE,
            EyeTag::Both => LAYER_BOTH_EYES,
        }
    } else {
        LAYER_BOTH_EYES
    }
}

/// The eye-filter behavior attached to each image plane.
///
/// Re-evaluated on mesh (re)creation and on every VR-mode transition. If
/// the mesh does not exist yet the update is skipped; the same evaluation
/// runs again on the next mesh-creation event, so skipping is harmless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EyeFilter {
    eye: EyeTag,
}

impl EyeFilter {
    pub fn new(eye: EyeTag) -> Self {
        EyeFilter { eye }
    }

    /// Apply the layer rule to the plane's mesh, if it has one
    pub fn apply(&self, vr_active: bool, mesh: Option<&mut Mesh>) {
        if let Some(mesh) = mesh {
            mesh.set_layer(layer_for(vr_active, self.eye));
        }
    }
}

/// The renderable object the engine creates for a plane once its texture
/// is available. Only the layer assignment matters to this application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mesh {
    layer: RenderLayer,
}

impl Default for Mesh {
    fn default() -> Self {
        Mesh {
            layer: LAYER_BOTH_EYES,
        }
    }
}

impl Mesh {
    pub fn layer(&self) -> RenderLayer {
        self.layer
    }

    pub fn set_layer(&mut self, layer: RenderLayer) {
        self.layer = layer;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vr_mode_splits_eyes_onto_layers() {
        assert_eq!(layer_for(true, EyeTag::Left), LAYER_LEFT_EYE);
        assert_eq!(layer_for(true, EyeTag::Right), LAYER_RIGHT_EYE);
        assert_eq!(layer_for(true, EyeTag::Both), LAYER_BOTH_EYES);
    }

    #[test]
    fn test_flat_screen_sees_everything() {
        assert_eq!(layer_for(false, EyeTag::Left), LAYER_BOTH_EYES);
        assert_eq!(layer_for(false, EyeTag::Right), LAYER_BOTH_EYES);
        assert_eq!(layer_for(false, EyeTag::Both), LAYER_BOTH_EYES);
    }

    #[test]
    fn test_exit_vr_resets_regardless_of_tag() {
        let filter = EyeFilter::new(EyeTag::Left);
        let mut mesh = Mesh::default();

        filter.apply(true, Some(&mut mesh));
        assert_eq!(mesh.layer(), LAYER_LEFT_EYE);

        filter.apply(false, Some(&mut mesh));
        assert_eq!(mesh.layer(), LAYER_BOTH_EYES);
    }

    #[test]
    fn test_missing_mesh_is_silently_skipped() {
        let filter = EyeFilter::new(EyeTag::Right);
        // No mesh yet: nothing to update, nothing to panic about.
        filter.apply(true, None);

        // The next mesh-creation event re-runs the evaluation.
        let mut mesh = Mesh::default();
        filter.apply(true, Some(&mut mesh));
        assert_eq!(mesh.layer(), LAYER_RIGHT_EYE);
    }
}
