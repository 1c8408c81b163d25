/// Shared data structures for the gallery
///
/// These structs are the authored shape of the photo gallery. They are
/// flattened once by the catalog and never mutated afterwards.

/// A single photo as authored in the gallery
///
/// Two refs with the same source and caption are the same photo.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhotoRef {
    /// Image path relative to the photo root (e.g., "/g1.jpg")
    pub source: String,
    /// Caption shown under the thumbnail and in the lightbox
    pub caption: String,
}

impl PhotoRef {
    pub fn new(source: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            caption: caption.into(),
        }
    }
}

/// A titled run of photos inside a group
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoSection {
    pub title: String,
    pub description: String,
    pub photos: Vec<PhotoRef>,
}

/// A named collection of sections (e.g., "Interiores")
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoGroup {
    pub name: String,
    pub sections: Vec<PhotoSection>,
}
