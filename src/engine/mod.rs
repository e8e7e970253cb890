/// External 3D engine boundary
///
/// Rendering, stereo camera rigs and texture decode all belong to the
/// engine; `host.rs` models the slice of its state this application
/// observes and drives (behavior registry, VR-mode flag, mesh layers,
/// in-VR click dispatch).

pub mod host;

pub use host::{NavCommand, SceneHost, EYE_FILTER_COMPONENT};
