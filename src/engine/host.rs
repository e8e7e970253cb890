/// Host-side model of the external 3D engine
///
/// The engine owns rasterization, stereo cameras and texture decoding; this
/// application only drives it. `SceneHost` tracks the parts of engine state
/// the application logic depends on: which behaviors are registered, whether
/// an immersive session is active, and the mesh (with its render layer) the
/// engine created for each plane entity.

use std::collections::{HashMap, HashSet};

use crate::scene::composer::{NEXT_BUTTON_ID, PREV_BUTTON_ID};
use crate::scene::layers::{EyeFilter, Mesh, RenderLayer};
use crate::scene::node::Scene;

/// Name under which the eye-filter behavior is registered
pub const EYE_FILTER_COMPONENT: &str = "eye-filter";

/// Navigation command decoded from an in-VR click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Previous,
    Next,
}

/// A plane entity as the engine sees it: the attached eye-filter plus the
/// mesh, which exists only after the entity's texture became renderable
#[derive(Debug, Clone)]
struct HostedEntity {
    filter: EyeFilter,
    mesh: Option<Mesh>,
}

/// Engine-state facade the application synchronizes against
#[derive(Debug, Clone, Default)]
pub struct SceneHost {
    components: HashSet<String>,
    vr_active: bool,
    entities: HashMap<String, HostedEntity>,
}

impl SceneHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a behavior by name, exactly once.
    ///
    /// Called explicitly during application start-up rather than as an
    /// import side effect. Returns false when the name was already taken,
    /// which makes repeated start-up paths harmless.
    pub fn register_component(&mut self, name: &str) -> bool {
        self.components.insert(name.to_string())
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.components.contains(name)
    }

    /// Whether an immersive head-mounted session is active
    pub fn is_vr_active(&self) -> bool {
        self.vr_active
    }

    /// Enter the immersive session and re-evaluate every mesh's layer
    pub fn enter_vr(&mut self) {
        self.vr_active = true;
        self.refresh_layers();
    }

    /// Leave the immersive session; every mesh returns to layer 0
    pub fn exit_vr(&mut self) {
        self.vr_active = false;
        self.refresh_layers();
    }

    /// Mirror a freshly composed scene into the engine.
    ///
    /// Planes present in the scene get an entity with an attached
    /// eye-filter and a mesh; each (re)created mesh fires the filter
    /// evaluation, which is where a plane first lands on its per-eye
    /// layer if a session is already running. Entities whose plane
    /// disappeared from the scene are dropped.
    pub fn sync_scene(&mut self, scene: &Scene) {
        let filtering = self.is_registered(EYE_FILTER_COMPONENT);
        let mut entities = HashMap::new();

        for plane in scene.planes() {
            let filter = EyeFilter::new(plane.eye);
            let mut mesh = Mesh::default();
            if filtering {
                filter.apply(self.vr_active, Some(&mut mesh));
            }
            entities.insert(
                plane.id.clone(),
                HostedEntity {
                    filter,
                    mesh: Some(mesh),
                },
            );
        }

        self.entities = entities;
    }

    /// Render layer currently assigned to an entity's mesh
    pub fn layer_of(&self, id: &str) -> Option<RenderLayer> {
        self.entities
            .get(id)
            .and_then(|entity| entity.mesh.as_ref())
            .map(Mesh::layer)
    }

    /// Dispatch a click by element id, the only way navigation input can
    /// reach the application from inside an immersive session
    pub fn click(&self, id: &str) -> Option<NavCommand> {
        match id {
            PREV_BUTTON_ID => Some(NavCommand::Previous),
            NEXT_BUTTON_ID => Some(NavCommand::Next),
            _ => None,
        }
    }

    fn refresh_layers(&mut self) {
        if !self.is_registered(EYE_FILTER_COMPONENT) {
            return;
        }
        for entity in self.entities.values_mut() {
            entity.filter.apply(self.vr_active, entity.mesh.as_mut());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::composer::{compose, Layout};
    use crate::scene::layers::{LAYER_BOTH_EYES, LAYER_LEFT_EYE, LAYER_RIGHT_EYE};
    use crate::state::data::StereoPair;

    fn one_pair_scene() -> Scene {
        let pairs = [StereoPair {
            left: Some("a.jpg".to_string()),
            right: Some("b.jpg".to_string()),
        }];
        compose(&pairs, 0, true, Layout::Fan)
    }

    fn host_with_filter() -> SceneHost {
        let mut host = SceneHost::new();
        host.register_component(EYE_FILTER_COMPONENT);
        host
    }

    #[test]
    fn test_registration_is_idempotent() {
        let mut host = SceneHost::new();
        assert!(host.register_component(EYE_FILTER_COMPONENT));
        assert!(!host.register_component(EYE_FILTER_COMPONENT));
        assert!(host.is_registered(EYE_FILTER_COMPONENT));
    }

    #[test]
    fn test_flat_screen_meshes_sit_on_layer_zero() {
        let mut host = host_with_filter();
        host.sync_scene(&one_pair_scene());

        assert_eq!(host.layer_of("leftPlane0"), Some(LAYER_BOTH_EYES));
        assert_eq!(host.layer_of("rightPlane0"), Some(LAYER_BOTH_EYES));
    }

    #[test]
    fn test_entering_vr_splits_layers_per_eye() {
        let mut host = host_with_filter();
        host.sync_scene(&one_pair_scene());
        host.enter_vr();

        assert!(host.is_vr_active());
        assert_eq!(host.layer_of("leftPlane0"), Some(LAYER_LEFT_EYE));
        assert_eq!(host.layer_of("rightPlane0"), Some(LAYER_RIGHT_EYE));
        // Untextured navigation buttons stay visible to both eyes
        assert_eq!(host.layer_of(PREV_BUTTON_ID), Some(LAYER_BOTH_EYES));
    }

    #[test]
    fn test_exiting_vr_resets_every_mesh() {
        let mut host = host_with_filter();
        host.sync_scene(&one_pair_scene());
        host.enter_vr();
        host.exit_vr();

        assert_eq!(host.layer_of("leftPlane0"), Some(LAYER_BOTH_EYES));
        assert_eq!(host.layer_of("rightPlane0"), Some(LAYER_BOTH_EYES));
    }

    #[test]
    fn test_mesh_created_mid_session_gets_its_layer() {
        let mut host = host_with_filter();
        host.enter_vr();

        // No entities yet: the transition had nothing to update, and that
        // must be fine. The next sync (mesh creation) re-applies the rule.
        host.sync_scene(&one_pair_scene());
        assert_eq!(host.layer_of("leftPlane0"), Some(LAYER_LEFT_EYE));
    }

    #[test]
    fn test_sync_drops_entities_no_longer_composed() {
        let mut host = host_with_filter();
        host.sync_scene(&one_pair_scene());
        assert!(host.layer_of("leftPlane0").is_some());

        host.sync_scene(&compose(&[], 0, false, Layout::Fan));
        assert!(host.layer_of("leftPlane0").is_none());
    }

    #[test]
    fn test_click_dispatch_matches_on_element_id() {
        let host = SceneHost::new();
        assert_eq!(host.click(PREV_BUTTON_ID), Some(NavCommand::Previous));
        assert_eq!(host.click(NEXT_BUTTON_ID), Some(NavCommand::Next));
        assert_eq!(host.click("leftPlane0"), None);
        assert_eq!(host.click("sky"), None);
    }

    #[test]
    fn test_unregistered_filter_leaves_layers_alone() {
        let mut host = SceneHost::new();
        host.sync_scene(&one_pair_scene());
        host.enter_vr();

        // Without the behavior registered everything stays on layer 0.
        assert_eq!(host.layer_of("leftPlane0"), Some(LAYER_BOTH_EYES));
    }
}
