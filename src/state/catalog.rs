use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use super::data::{PhotoGroup, PhotoRef};

/// The PhotoCatalog is the flat, de-duplicated list of photos that backs
/// lightbox navigation, plus a grouped projection of it for the gallery.
#[derive(Debug, Clone, Default)]
pub struct PhotoCatalog {
    /// Unique photos in first-encounter order
    all_photos: Vec<PhotoRef>,
    /// Identity -> position in `all_photos`
    positions: HashMap<PhotoRef, usize>,
    /// Gallery layout in authored order
    sections: Vec<SectionView>,
}

/// Read-only view of one authored section, pointing into the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct SectionView {
    /// Index of the owning group in the authored input
    pub group: usize,
    pub group_name: String,
    pub title: String,
    pub description: String,
    /// Authored photos; resolve with [`PhotoCatalog::position_of`]
    pub photos: Vec<PhotoRef>,
}

impl PhotoCatalog {
    /// Flatten groups -> sections -> photos in document order.
    ///
    /// A photo is appended the first time its (source, caption) pair is
    /// seen; later occurrences resolve to that first slot.
    pub fn build(groups: &[PhotoGroup]) -> Self {
        let mut catalog = Self::default();

        for (group_idx, group) in groups.iter().enumerate() {
            for section in &group.sections {
                for photo in &section.photos {
                    catalog.insert(photo);
                }

                catalog.sections.push(SectionView {
                    group: group_idx,
                    group_name: group.name.clone(),
                    title: section.title.clone(),
                    description: section.description.clone(),
                    photos: section.photos.clone(),
                });
            }
        }

        catalog
    }

    /// Append `photo` unless its identity is already present
    fn insert(&mut self, photo: &PhotoRef) {
        if self.positions.contains_key(photo) {
            return;
        }

        self.positions.insert(photo.clone(), self.all_photos.len());
        self.all_photos.push(photo.clone());
    }

    #[cfg(test)]
    pub fn all_photos(&self) -> &[PhotoRef] {
        &self.all_photos
    }

    pub fn len(&self) -> usize {
        self.all_photos.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.all_photos.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&PhotoRef> {
        self.all_photos.get(position)
    }

    /// Position of a photo by identity
    pub fn position_of(&self, photo: &PhotoRef) -> Option<usize> {
        self.positions.get(photo).copied()
    }

    pub fn sections(&self) -> &[SectionView] {
        &self.sections
    }
}

/// The catalog of the authored gallery, built on first use and shared for
/// the rest of the process.
pub fn shared() -> Arc<PhotoCatalog> {
    static CATALOG: OnceLock<Arc<PhotoCatalog>> = OnceLock::new();

    CATALOG
        .get_or_init(|| Arc::new(PhotoCatalog::build(&super::content::gallery())))
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::PhotoSection;

    fn section(title: &str, photos: &[(&str, &str)]) -> PhotoSection {
        PhotoSection {
            title: title.to_string(),
            description: String::new(),
            photos: photos.iter().map(|(s, c)| PhotoRef::new(*s, *c)).collect(),
        }
    }

    fn group(name: &str, sections: Vec<PhotoSection>) -> PhotoGroup {
        PhotoGroup {
            name: name.to_string(),
            sections,
        }
    }

    #[test]
    fn test_empty_groups_give_empty_catalog() {
        let catalog = PhotoCatalog::build(&[]);
        assert!(catalog.is_empty());
        assert!(catalog.sections().is_empty());

        let catalog = PhotoCatalog::build(&[group("Vacío", vec![section("Nada", &[])])]);
        assert!(catalog.is_empty());
        assert_eq!(catalog.sections().len(), 1);
    }

    #[test]
    fn test_duplicates_collapse_to_first_slot() {
        let groups = vec![
            group("Interiores", vec![section("Sala", &[("/g2.jpg", "Sala y cocina")])]),
            group(
                "Destacadas",
                vec![section("Favoritas", &[("/g4.jpg", "Balcón"), ("/g2.jpg", "Sala y cocina")])],
            ),
        ];

        let catalog = PhotoCatalog::build(&groups);

        assert_eq!(catalog.len(), 2);
        let shared = PhotoRef::new("/g2.jpg", "Sala y cocina");
        assert_eq!(catalog.all_photos().iter().filter(|p| **p == shared).count(), 1);
        let positions = |section: &SectionView| -> Vec<Option<usize>> {
            section.photos.iter().map(|p| catalog.position_of(p)).collect()
        };
        assert_eq!(positions(&catalog.sections()[0]), vec![Some(0)]);
        assert_eq!(positions(&catalog.sections()[1]), vec![Some(1), Some(0)]);
        assert_eq!(catalog.position_of(&shared), Some(0));
    }

    #[test]
    fn test_same_source_different_caption_is_distinct() {
        let groups = vec![group(
            "Detalles",
            vec![section("Decoración", &[("/g6.jpg", "Detalle"), ("/g6.jpg", "Otro detalle")])],
        )];

        let catalog = PhotoCatalog::build(&groups);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_order_is_depth_first_first_encounter() {
        let groups = vec![
            group(
                "A",
                vec![
                    section("a1", &[("/1.jpg", "uno"), ("/2.jpg", "dos")]),
                    section("a2", &[("/3.jpg", "tres"), ("/1.jpg", "uno")]),
                ],
            ),
            group("B", vec![section("b1", &[("/4.jpg", "cuatro"), ("/2.jpg", "dos")])]),
        ];

        let catalog = PhotoCatalog::build(&groups);
        let sources: Vec<&str> = catalog.all_photos().iter().map(|p| p.source.as_str()).collect();

        assert_eq!(sources, vec!["/1.jpg", "/2.jpg", "/3.jpg", "/4.jpg"]);
        assert_eq!(catalog.sections()[2].group, 1);
        assert_eq!(catalog.sections()[2].group_name, "B");
    }

    #[test]
    fn test_every_section_photo_resolves() {
        let catalog = PhotoCatalog::build(&crate::state::content::gallery());

        for group in crate::state::content::gallery() {
            for section in group.sections {
                for photo in section.photos {
                    let position = catalog.position_of(&photo).unwrap();
                    assert_eq!(catalog.get(position), Some(&photo));
                }
            }
        }
    }

    #[test]
    fn test_build_is_deterministic() {
        let a = PhotoCatalog::build(&crate::state::content::gallery());
        let b = PhotoCatalog::build(&crate::state::content::gallery());

        assert_eq!(a.all_photos(), b.all_photos());
        assert_eq!(a.sections(), b.sections());
    }
}
