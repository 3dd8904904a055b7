use tracing::debug;

use crate::features::pages::page::{KeyListener, Page, ScrollLock};

/// Thumbnails shown next to the main image in the grid.
pub const GRID_THUMBNAILS: usize = 6;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CloseReason {
    Button,
    Backdrop,
    Escape,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

/// Everything an open modal holds on the page. Dropping it releases both.
#[derive(Debug)]
struct ModalSession {
    _scroll: ScrollLock,
    _keys: KeyListener,
}

#[derive(Debug)]
pub struct Gallery {
    page: Page,
    images: Vec<String>,
    current: usize,
    modal: Option<ModalSession>,
}

impl Gallery {
    pub fn new(page: Page, images: Vec<String>) -> Self {
        Self {
            page,
            images,
            current: 0,
            modal: None,
        }
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_image(&self) -> Option<&str> {
        self.images.get(self.current).map(String::as_str)
    }

    pub fn next(&mut self) {
        if self.images.len() < 2 {
            return;
        }
        self.current = (self.current + 1) % self.images.len();
    }

    pub fn prev(&mut self) {
        if self.images.len() < 2 {
            return;
        }
        self.current = (self.current + self.images.len() - 1) % self.images.len();
    }

    /// Out of range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.images.len() {
            self.current = index;
        }
    }

    /// Replaces the image set, closing the modal and starting over at the
    /// first image.
    pub fn set_images(&mut self, images: Vec<String>) {
        self.modal = None;
        self.images = images;
        self.current = 0;
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal.is_some()
    }

    /// Opens the viewer on `index`. A gallery without images has nothing to
    /// show and stays closed.
    pub fn open_modal(&mut self, index: usize) -> bool {
        if self.images.is_empty() {
            return false;
        }
        self.select(index);

        if self.modal.is_none() {
            self.modal = Some(ModalSession {
                _scroll: self.page.lock_scroll(),
                _keys: self.page.listen_keys(),
            });
        }
        true
    }

    pub fn close_modal(&mut self, reason: CloseReason) -> bool {
        match self.modal.take() {
            Some(_session) => {
                debug!("gallery modal closed: {reason:?}");
                true
            }
            None => false,
        }
    }

    /// Keys only reach the gallery while the modal listens for them.
    pub fn handle_key(&mut self, key: Key) {
        if !self.is_modal_open() {
            return;
        }

        match key {
            Key::Escape => {
                self.close_modal(CloseReason::Escape);
            }
            Key::ArrowLeft => self.prev(),
            Key::ArrowRight => self.next(),
            Key::Other => {}
        }
    }

    /// Images hidden behind the "+N" overlay on the last grid thumbnail.
    pub fn overflow_count(&self) -> usize {
        self.images.len().saturating_sub(GRID_THUMBNAILS + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("/uploads/{i}.jpg")).collect()
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let mut gallery = Gallery::new(Page::new(), images(4));
        gallery.select(2);

        for _ in 0..4 {
            gallery.next();
        }
        assert_eq!(gallery.current_index(), 2);

        for _ in 0..4 {
            gallery.prev();
        }
        assert_eq!(gallery.current_index(), 2);
    }

    #[test]
    fn navigation_wraps() {
        let mut gallery = Gallery::new(Page::new(), images(3));
        gallery.prev();
        assert_eq!(gallery.current_index(), 2);
        gallery.next();
        assert_eq!(gallery.current_index(), 0);
    }

    #[test]
    fn navigation_is_a_no_op_below_two_images() {
        let mut empty = Gallery::new(Page::new(), Vec::new());
        empty.next();
        empty.prev();
        assert_eq!(empty.current_index(), 0);
        assert_eq!(empty.current_image(), None);

        let mut single = Gallery::new(Page::new(), images(1));
        single.next();
        single.prev();
        assert_eq!(single.current_index(), 0);
    }

    #[test]
    fn every_close_path_restores_the_page() {
        for reason in [CloseReason::Button, CloseReason::Backdrop, CloseReason::Escape] {
            let page = Page::new();
            page.set_body_overflow(Some("auto"));
            let mut gallery = Gallery::new(page.clone(), images(2));

            assert!(gallery.open_modal(1));
            assert_eq!(page.body_overflow().as_deref(), Some("hidden"));
            assert_eq!(page.key_listener_count(), 1);

            if reason == CloseReason::Escape {
                gallery.handle_key(Key::Escape);
            } else {
                assert!(gallery.close_modal(reason));
            }

            assert!(!gallery.is_modal_open());
            assert_eq!(page.body_overflow().as_deref(), Some("auto"));
            assert_eq!(page.key_listener_count(), 0);
        }
    }

    #[test]
    fn dropping_an_open_gallery_restores_the_page() {
        let page = Page::new();
        let mut gallery = Gallery::new(page.clone(), images(3));
        gallery.open_modal(0);
        drop(gallery);

        assert_eq!(page.body_overflow(), None);
        assert_eq!(page.key_listener_count(), 0);
    }

    #[test]
    fn reopening_does_not_stack_locks() {
        let page = Page::new();
        let mut gallery = Gallery::new(page.clone(), images(3));
        gallery.open_modal(0);
        gallery.open_modal(2);
        assert_eq!(gallery.current_index(), 2);
        assert_eq!(page.key_listener_count(), 1);

        gallery.close_modal(CloseReason::Button);
        assert_eq!(page.body_overflow(), None);
        assert!(!gallery.close_modal(CloseReason::Button));
    }

    #[test]
    fn arrows_only_navigate_while_open() {
        let mut gallery = Gallery::new(Page::new(), images(3));
        gallery.handle_key(Key::ArrowRight);
        assert_eq!(gallery.current_index(), 0);

        gallery.open_modal(0);
        gallery.handle_key(Key::ArrowRight);
        gallery.handle_key(Key::ArrowRight);
        assert_eq!(gallery.current_index(), 2);
        gallery.handle_key(Key::ArrowLeft);
        assert_eq!(gallery.current_index(), 1);
    }

    #[test]
    fn empty_gallery_never_opens() {
        let page = Page::new();
        let mut gallery = Gallery::new(page.clone(), Vec::new());
        assert!(!gallery.open_modal(0));
        assert_eq!(page.body_overflow(), None);
    }

    #[test]
    fn overflow_beyond_the_grid() {
        assert_eq!(Gallery::new(Page::new(), images(7)).overflow_count(), 0);
        assert_eq!(Gallery::new(Page::new(), images(10)).overflow_count(), 3);
    }
}
