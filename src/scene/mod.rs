/// Declarative scene-graph module
///
/// This module maps application state to the tree of nodes the external
/// 3D engine renders:
/// - `node.rs` - typed scene nodes plus the engine-facing markup/JSON forms
/// - `composer.rs` - the pure (state -> scene) mapping and layout policies
/// - `layers.rs` - per-eye render-layer selection (the eye-filter behavior)

pub mod composer;
pub mod layers;
pub mod node;

pub use composer::{compose, Layout};
pub use node::Scene;
