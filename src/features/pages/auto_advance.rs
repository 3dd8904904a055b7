use std::{sync::Arc, time::Duration};

use tokio::{
    sync::Mutex,
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};
use tracing::debug;

use crate::features::pages::{gallery::Gallery, page::Page};

pub type SharedGallery = Arc<Mutex<Gallery>>;

/// Periodically moves a gallery to its next image. The task is aborted when
/// this handle is dropped or stopped.
#[derive(Debug)]
pub struct AutoAdvance {
    handle: Option<JoinHandle<()>>,
}

impl AutoAdvance {
    pub fn start(gallery: SharedGallery, period: Duration) -> Self {
        if period.is_zero() {
            return Self { handle: None };
        }

        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;

                let mut gallery = gallery.lock().await;
                // The modal viewer is navigated by hand only.
                if gallery.len() > 1 && !gallery.is_modal_open() {
                    gallery.next();
                }
            }
        });

        Self {
            handle: Some(handle),
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            debug!("gallery auto advance stopped");
        }
    }
}

impl Drop for AutoAdvance {
    fn drop(&mut self) {
        self.stop();
    }
}

/// A gallery paired with its auto advance timer. Replacing the images
/// cancels the running timer before a fresh one starts.
#[derive(Debug)]
pub struct Carousel {
    gallery: SharedGallery,
    timer: AutoAdvance,
    period: Duration,
}

impl Carousel {
    pub fn new(page: Page, images: Vec<String>, period: Duration) -> Self {
        let gallery = Arc::new(Mutex::new(Gallery::new(page, images)));
        let timer = AutoAdvance::start(Arc::clone(&gallery), period);

        Self {
            gallery,
            timer,
            period,
        }
    }

    pub fn gallery(&self) -> SharedGallery {
        Arc::clone(&self.gallery)
    }

    pub fn is_advancing(&self) -> bool {
        self.timer.is_running()
    }

    pub async fn set_images(&mut self, images: Vec<String>) {
        self.timer.stop();
        self.gallery.lock().await.set_images(images);
        self.timer = AutoAdvance::start(Arc::clone(&self.gallery), self.period);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_secs(5);

    fn images(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("/uploads/{i}.jpg")).collect()
    }

    async fn current(carousel: &Carousel) -> usize {
        carousel.gallery().lock().await.current_index()
    }

    #[tokio::test(start_paused = true)]
    async fn advances_once_per_period() {
        let carousel = Carousel::new(Page::new(), images(3), PERIOD);
        assert_eq!(current(&carousel).await, 0);

        time::sleep(Duration::from_millis(5_500)).await;
        assert_eq!(current(&carousel).await, 1);

        time::sleep(PERIOD).await;
        assert_eq!(current(&carousel).await, 2);

        time::sleep(PERIOD).await;
        assert_eq!(current(&carousel).await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn single_image_never_moves() {
        let carousel = Carousel::new(Page::new(), images(1), PERIOD);
        time::sleep(Duration::from_secs(30)).await;
        assert_eq!(current(&carousel).await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn paused_while_the_modal_is_open() {
        let carousel = Carousel::new(Page::new(), images(3), PERIOD);
        carousel.gallery().lock().await.open_modal(0);

        time::sleep(Duration::from_secs(16)).await;
        assert_eq!(current(&carousel).await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn stopped_timer_never_fires() {
        let gallery = Arc::new(Mutex::new(Gallery::new(Page::new(), images(3))));
        let mut timer = AutoAdvance::start(Arc::clone(&gallery), PERIOD);
        assert!(timer.is_running());

        timer.stop();
        time::sleep(Duration::from_secs(16)).await;

        assert!(!timer.is_running());
        assert_eq!(gallery.lock().await.current_index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn replacing_images_restarts_from_the_first() {
        let mut carousel = Carousel::new(Page::new(), images(3), PERIOD);
        time::sleep(Duration::from_millis(5_500)).await;
        assert_eq!(current(&carousel).await, 1);

        carousel.set_images(images(2)).await;
        assert_eq!(current(&carousel).await, 0);
        assert!(carousel.is_advancing());

        // The old timer would have fired at 10s; the new one fires at 10.5s.
        time::sleep(Duration::from_millis(4_700)).await;
        assert_eq!(current(&carousel).await, 0);

        time::sleep(Duration::from_millis(500)).await;
        assert_eq!(current(&carousel).await, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_period_disables_the_timer() {
        let carousel = Carousel::new(Page::new(), images(3), Duration::ZERO);
        assert!(!carousel.is_advancing());
    }
}
