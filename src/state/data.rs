/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the pair store and the scene composition layer.

use serde::Serialize;

/// Opaque locator for an uploaded image (a filesystem path in this app)
pub type ImageRef = String;

/// Which eye an image or plane belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Human-readable label used in status lines and the upload panel
    pub fn label(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Per-plane eye assignment consumed by the eye-layer filter.
///
/// Static after creation: a plane never changes which eye it serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EyeTag {
    Left,
    Right,
    Both,
}

impl EyeTag {
    /// Attribute value the engine's eye-filter schema expects
    pub fn as_str(&self) -> &'static str {
        match self {
            EyeTag::Left => "left",
            EyeTag::Right => "right",
            EyeTag::Both => "both",
        }
    }
}

impl From<Side> for EyeTag {
    fn from(side: Side) -> Self {
        match side {
            Side::Left => EyeTag::Left,
            Side::Right => EyeTag::Right,
        }
    }
}

/// A left-eye/right-eye image pair shown one per eye in VR.
///
/// Either side may be absent while the matching upload is pending;
/// an absent side simply does not render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StereoPair {
    pub left: Option<ImageRef>,
    pub right: Option<ImageRef>,
}

impl StereoPair {
    /// Build a pair with only one side populated
    pub fn single(side: Side, image: ImageRef) -> Self {
        match side {
            Side::Left => StereoPair {
                left: Some(image),
                right: None,
            },
            Side::Right => StereoPair {
                left: None,
                right: Some(image),
            },
        }
    }

    /// Overwrite one side in place
    pub fn set(&mut self, side: Side, image: ImageRef) {
        match side {
            Side::Left => self.left = Some(image),
            Side::Right => self.right = Some(image),
        }
    }

    pub fn side(&self, side: Side) -> Option<&ImageRef> {
        match side {
            Side::Left => self.left.as_ref(),
            Side::Right => self.right.as_ref(),
        }
    }

    /// True when at least one side has an image to load
    pub fn has_any(&self) -> bool {
        self.left.is_some() || self.right.is_some()
    }
}
