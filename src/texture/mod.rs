/// Texture loading module
///
/// Confirms uploaded images actually decode before the scene shows
/// geometry for them, mirroring the engine's asset-load events.

pub mod loader;
