/// State management module
///
/// This module holds all application state, independent of iced:
/// - Gallery data structures (data.rs) and authored content (content.rs)
/// - The flattened photo catalog (catalog.rs)
/// - Zoom/pan transform and gesture handling (transform.rs, gesture.rs)
/// - The modal lightbox and background scroll lock (lightbox.rs)
/// - The clipboard confirmation indicator (contact.rs)

pub mod catalog;
pub mod contact;
pub mod content;
pub mod data;
pub mod gesture;
pub mod lightbox;
pub mod transform;
