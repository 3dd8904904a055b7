use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

#[derive(Debug, Default)]
struct Document {
    body_overflow: Option<String>,
    key_listeners: usize,
}

/// The document a detail view is mounted in: the body's overflow style and
/// the number of keyboard listeners currently registered on it.
#[derive(Clone, Debug, Default)]
pub struct Page {
    document: Arc<Mutex<Document>>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    fn document(&self) -> MutexGuard<'_, Document> {
        self.document.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn body_overflow(&self) -> Option<String> {
        self.document().body_overflow.clone()
    }

    pub fn set_body_overflow(&self, overflow: Option<&str>) {
        self.document().body_overflow = overflow.map(str::to_string);
    }

    pub fn key_listener_count(&self) -> usize {
        self.document().key_listeners
    }

    /// Hides body overflow until the returned guard is dropped.
    pub fn lock_scroll(&self) -> ScrollLock {
        let mut document = self.document();
        let previous = document.body_overflow.replace("hidden".to_string());
        debug!("scroll locked, previous overflow {previous:?}");

        ScrollLock {
            page: self.clone(),
            previous,
        }
    }

    pub fn listen_keys(&self) -> KeyListener {
        self.document().key_listeners += 1;

        KeyListener { page: self.clone() }
    }
}

/// Restores the overflow style that was in place when it was acquired.
#[derive(Debug)]
#[must_use = "the scroll lock is released as soon as the guard is dropped"]
pub struct ScrollLock {
    page: Page,
    previous: Option<String>,
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.page.document().body_overflow = self.previous.take();
        debug!("scroll lock released");
    }
}

#[derive(Debug)]
#[must_use = "the listener is removed as soon as the guard is dropped"]
pub struct KeyListener {
    page: Page,
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        let mut document = self.page.document();
        document.key_listeners = document.key_listeners.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_lock_restores_previous_overflow() {
        let page = Page::new();
        page.set_body_overflow(Some("scroll"));

        let lock = page.lock_scroll();
        assert_eq!(page.body_overflow().as_deref(), Some("hidden"));

        drop(lock);
        assert_eq!(page.body_overflow().as_deref(), Some("scroll"));
    }

    #[test]
    fn scroll_lock_restores_unset_overflow() {
        let page = Page::new();
        {
            let _lock = page.lock_scroll();
            assert_eq!(page.body_overflow().as_deref(), Some("hidden"));
        }
        assert_eq!(page.body_overflow(), None);
    }

    #[test]
    fn key_listeners_deregister_on_drop() {
        let page = Page::new();
        let first = page.listen_keys();
        let second = page.listen_keys();
        assert_eq!(page.key_listener_count(), 2);

        drop(first);
        drop(second);
        assert_eq!(page.key_listener_count(), 0);
    }
}
