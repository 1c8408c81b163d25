use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use super::catalog::PhotoCatalog;
use super::data::PhotoRef;
use super::gesture::{GestureEngine, Input, Intent};
use super::transform::GestureTransform;

/// Switch controlling whether the page behind the lightbox may scroll
#[derive(Debug, Clone)]
pub struct BackgroundScroll(Arc<AtomicBool>);

impl BackgroundScroll {
    pub fn new(enabled: bool) -> Self {
        Self(Arc::new(AtomicBool::new(enabled)))
    }

    /// The process-wide switch used by the application
    pub fn global() -> Self {
        static GLOBAL: OnceLock<BackgroundScroll> = OnceLock::new();
        GLOBAL.get_or_init(|| BackgroundScroll::new(true)).clone()
    }

    pub fn is_enabled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.0.store(enabled, Ordering::Relaxed);
    }

    /// Disable scrolling until the returned guard is dropped, then put back
    /// whatever setting was in place right now.
    pub fn suspend(&self) -> ScrollGuard {
        let previous = self.0.swap(false, Ordering::Relaxed);
        ScrollGuard {
            scroll: self.clone(),
            previous,
        }
    }
}

/// Restores the background scroll setting on drop
#[derive(Debug)]
pub struct ScrollGuard {
    scroll: BackgroundScroll,
    previous: bool,
}

impl Drop for ScrollGuard {
    fn drop(&mut self) {
        self.scroll.set_enabled(self.previous);
    }
}

/// Where a click inside the lightbox overlay landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed area around the photo
    Backdrop,
    Image,
    /// Navigation buttons, counter and caption
    Chrome,
}

/// Modal photo viewer over the shared catalog.
///
/// Holds the only selection index and the gesture engine of the photo on
/// screen. Every operation is total: bad input leaves the state untouched.
#[derive(Debug)]
pub struct Lightbox {
    catalog: Arc<PhotoCatalog>,
    selected: Option<usize>,
    engine: GestureEngine,
    scroll: BackgroundScroll,
    /// Held exactly while the lightbox is open
    scroll_guard: Option<ScrollGuard>,
}

impl Lightbox {
    pub fn new(catalog: Arc<PhotoCatalog>, scroll: BackgroundScroll) -> Self {
        Self {
            catalog,
            selected: None,
            engine: GestureEngine::new(),
            scroll,
            scroll_guard: None,
        }
    }

    pub fn catalog(&self) -> &PhotoCatalog {
        &self.catalog
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Photo on screen, if open
    pub fn current(&self) -> Option<&PhotoRef> {
        self.selected.and_then(|index| self.catalog.get(index))
    }

    pub fn transform(&self) -> &GestureTransform {
        self.engine.transform()
    }

    /// Open at `index`; ignored when the index is outside the catalog.
    pub fn open_at(&mut self, index: usize) {
        if index >= self.catalog.len() {
            tracing::debug!(index, len = self.catalog.len(), "Ignoring lightbox open outside catalog");
            return;
        }

        if self.scroll_guard.is_none() {
            self.scroll_guard = Some(self.scroll.suspend());
        }
        self.show(index);
    }

    pub fn close(&mut self) {
        if self.selected.take().is_some() {
            tracing::debug!("Lightbox closed");
        }
        self.engine = GestureEngine::new();
        // Dropping the guard restores the previous scroll setting
        self.scroll_guard = None;
    }

    pub fn next(&mut self) {
        if let Some(index) = self.selected {
            self.show((index + 1) % self.catalog.len());
        }
    }

    pub fn previous(&mut self) {
        if let Some(index) = self.selected {
            let len = self.catalog.len();
            self.show((index + len - 1) % len);
        }
    }

    /// Route a click on the overlay. Only the backdrop closes.
    pub fn click(&mut self, target: ClickTarget) {
        if target == ClickTarget::Backdrop {
            self.close();
        }
    }

    /// Feed input to the engine of the displayed photo and act on the
    /// resulting intent. Ignored while closed.
    pub fn handle_input(&mut self, input: Input) {
        if !self.is_open() {
            return;
        }

        match self.engine.handle(input) {
            Some(Intent::Next) => self.next(),
            Some(Intent::Previous) => self.previous(),
            Some(Intent::Close) => self.close(),
            None => {}
        }
    }

    fn show(&mut self, index: usize) {
        self.selected = Some(index);
        self.engine = GestureEngine::new();
        tracing::debug!(index, "Lightbox showing photo");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::{PhotoGroup, PhotoSection};
    use crate::state::gesture::{NavKey, PointerId};
    use cgmath::Point2;

    fn photo(n: usize) -> PhotoRef {
        PhotoRef::new(format!("/p{n}.jpg"), format!("Foto {n}"))
    }

    /// Four authored entries, P1 twice, three unique photos
    fn catalog() -> Arc<PhotoCatalog> {
        let groups = vec![
            PhotoGroup {
                name: "Interiores".to_string(),
                sections: vec![PhotoSection {
                    title: "Sala".to_string(),
                    description: String::new(),
                    photos: vec![photo(0), photo(1)],
                }],
            },
            PhotoGroup {
                name: "Exteriores".to_string(),
                sections: vec![PhotoSection {
                    title: "Balcón".to_string(),
                    description: String::new(),
                    photos: vec![photo(1), photo(2)],
                }],
            },
        ];
        Arc::new(PhotoCatalog::build(&groups))
    }

    fn lightbox() -> (Lightbox, BackgroundScroll) {
        let scroll = BackgroundScroll::new(true);
        (Lightbox::new(catalog(), scroll.clone()), scroll)
    }

    #[test]
    fn test_end_to_end_navigation() {
        let (mut lightbox, scroll) = lightbox();
        assert_eq!(lightbox.catalog().len(), 3);

        lightbox.open_at(1);
        assert_eq!(lightbox.selected_index(), Some(1));
        assert_eq!(lightbox.current(), Some(&photo(1)));
        assert!(!scroll.is_enabled());

        lightbox.next();
        assert_eq!(lightbox.current(), Some(&photo(2)));

        lightbox.next();
        assert_eq!(lightbox.selected_index(), Some(0));
        assert_eq!(lightbox.current(), Some(&photo(0)));

        lightbox.close();
        assert_eq!(lightbox.selected_index(), None);
        assert!(scroll.is_enabled());
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let (mut lightbox, _scroll) = lightbox();
        lightbox.open_at(0);
        lightbox.previous();
        assert_eq!(lightbox.selected_index(), Some(2));
    }

    #[test]
    fn test_navigation_while_closed_is_noop() {
        let (mut lightbox, scroll) = lightbox();
        lightbox.next();
        lightbox.previous();
        lightbox.handle_input(Input::Key(NavKey::ArrowRight));

        assert_eq!(lightbox.selected_index(), None);
        assert!(scroll.is_enabled());
    }

    #[test]
    fn test_out_of_range_open_is_noop() {
        let (mut lightbox, scroll) = lightbox();
        lightbox.open_at(3);
        assert_eq!(lightbox.selected_index(), None);
        assert!(scroll.is_enabled());

        lightbox.open_at(2);
        lightbox.open_at(99);
        assert_eq!(lightbox.selected_index(), Some(2));
    }

    #[test]
    fn test_empty_catalog_never_opens() {
        let scroll = BackgroundScroll::new(true);
        let mut lightbox = Lightbox::new(Arc::new(PhotoCatalog::build(&[])), scroll.clone());

        lightbox.open_at(0);
        lightbox.next();

        assert_eq!(lightbox.selected_index(), None);
        assert!(scroll.is_enabled());
    }

    #[test]
    fn test_close_restores_prior_scroll_setting() {
        let scroll = BackgroundScroll::new(false);
        let mut lightbox = Lightbox::new(catalog(), scroll.clone());

        lightbox.open_at(0);
        lightbox.close();
        assert!(!scroll.is_enabled());
    }

    #[test]
    fn test_reopen_while_open_keeps_original_scroll_setting() {
        let (mut lightbox, scroll) = lightbox();
        lightbox.open_at(0);
        lightbox.open_at(2);
        lightbox.close();
        assert!(scroll.is_enabled());

        // A second close is harmless
        lightbox.close();
        assert!(scroll.is_enabled());
    }

    #[test]
    fn test_drop_while_open_releases_scroll_lock() {
        let (mut lightbox, scroll) = lightbox();
        lightbox.open_at(1);
        assert!(!scroll.is_enabled());

        drop(lightbox);
        assert!(scroll.is_enabled());
    }

    #[test]
    fn test_backdrop_click_closes_but_image_click_does_not() {
        let (mut lightbox, _scroll) = lightbox();
        lightbox.open_at(1);

        lightbox.click(ClickTarget::Image);
        lightbox.click(ClickTarget::Chrome);
        assert_eq!(lightbox.selected_index(), Some(1));

        lightbox.click(ClickTarget::Backdrop);
        assert_eq!(lightbox.selected_index(), None);
    }

    #[test]
    fn test_keyboard_intents_drive_controller() {
        let (mut lightbox, scroll) = lightbox();
        lightbox.open_at(0);

        lightbox.handle_input(Input::Key(NavKey::ArrowLeft));
        assert_eq!(lightbox.selected_index(), Some(2));
        lightbox.handle_input(Input::Key(NavKey::ArrowRight));
        assert_eq!(lightbox.selected_index(), Some(0));
        lightbox.handle_input(Input::Key(NavKey::Escape));
        assert_eq!(lightbox.selected_index(), None);
        assert!(scroll.is_enabled());
    }

    #[test]
    fn test_navigation_resets_transform() {
        let (mut lightbox, _scroll) = lightbox();
        lightbox.open_at(0);
        lightbox.handle_input(Input::Wheel { delta_y: -400.0 });
        assert!(lightbox.transform().is_zoomed());

        lightbox.next();
        assert!(lightbox.transform().is_identity());
    }

    #[test]
    fn test_swipe_navigates() {
        let (mut lightbox, _scroll) = lightbox();
        lightbox.open_at(0);

        let id = PointerId::Finger(7);
        lightbox.handle_input(Input::Pressed { id, position: Point2::new(200.0, 50.0) });
        lightbox.handle_input(Input::Moved { id, position: Point2::new(140.0, 50.0) });
        lightbox.handle_input(Input::Released { id, position: Point2::new(140.0, 50.0) });

        assert_eq!(lightbox.selected_index(), Some(1));
    }
}
