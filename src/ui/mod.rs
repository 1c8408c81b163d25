/// View helpers
///
/// - `canvas.rs` - lightbox photo canvas with gesture input
/// - `page.rs` - landing page sections
/// - `overlay.rs` - lightbox overlay and its chrome

pub mod canvas;
pub mod overlay;
pub mod page;
