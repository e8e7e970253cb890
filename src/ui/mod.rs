/// UI building blocks for the viewer window
///
/// - `controls.rs` - sidebar: uploads, layout picker, VR toggle, navigation
/// - `viewer.rs` - flat preview of the current pair and the thumbnail strip
/// - `placeholder.rs` - canvas tableau shown while the store is empty

pub mod controls;
pub mod placeholder;
pub mod viewer;
