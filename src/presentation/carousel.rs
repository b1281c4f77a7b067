// src/presentation/carousel.rs
// DOCUMENTATION: Hero carousel state machine
// PURPOSE: Slide rotation with autoplay that yields to video playback

use std::time::Duration;

/// Autoplay delay between image slides
pub const AUTOPLAY_DELAY: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideKind {
    Image,
    Video,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub kind: SlideKind,
    pub src: String,
}

impl Slide {
    pub fn image(src: impl Into<String>) -> Self {
        Self {
            kind: SlideKind::Image,
            src: src.into(),
        }
    }

    pub fn video(src: impl Into<String>) -> Self {
        Self {
            kind: SlideKind::Video,
            src: src.into(),
        }
    }
}

/// Side effect the renderer must carry out after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEffect {
    None,
    /// Rewind the video at this index to 0 and start it
    PlayVideo(usize),
}

/// Looping carousel
/// DOCUMENTATION: Autoplay advances on `tick`. Landing on a video slide
/// pauses autoplay until `video_ended` resumes it and moves on.
#[derive(Debug, Clone)]
pub struct Carousel {
    slides: Vec<Slide>,
    index: usize,
    autoplay: bool,
    delay: Duration,
    elapsed: Duration,
}

impl Carousel {
    /// Build a carousel and select the first slide
    /// Returns the effect for the initial selection
    pub fn new(slides: Vec<Slide>, delay: Duration) -> (Self, CarouselEffect) {
        let mut carousel = Self {
            slides,
            index: 0,
            autoplay: true,
            delay,
            elapsed: Duration::ZERO,
        };
        let effect = carousel.select(0);
        (carousel, effect)
    }

    /// The landing page hero: photo, hotel tour video, photo
    pub fn hero() -> (Self, CarouselEffect) {
        Self::new(
            vec![
                Slide::image("https://images.unsplash.com/photo-1758039205082-256c2fde63bb?q=80&w=1110&auto=format&fit=crop"),
                Slide::video("/hotel-tour.mp4"),
                Slide::image("https://images.unsplash.com/photo-1600585154340-be6161a56a0c?w=1200"),
            ],
            AUTOPLAY_DELAY,
        )
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&Slide> {
        self.slides.get(self.index)
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay
    }

    /// Jump to a slide; indices wrap around
    pub fn select(&mut self, index: usize) -> CarouselEffect {
        if self.slides.is_empty() {
            return CarouselEffect::None;
        }

        self.index = index % self.slides.len();
        self.elapsed = Duration::ZERO;

        match self.slides[self.index].kind {
            SlideKind::Video => {
                self.autoplay = false;
                log::debug!("Carousel paused on video slide {}", self.index);
                CarouselEffect::PlayVideo(self.index)
            }
            SlideKind::Image => CarouselEffect::None,
        }
    }

    pub fn next(&mut self) -> CarouselEffect {
        self.select(self.index + 1)
    }

    pub fn prev(&mut self) -> CarouselEffect {
        if self.slides.is_empty() {
            return CarouselEffect::None;
        }
        let len = self.slides.len();
        self.select((self.index + len - 1) % len)
    }

    /// Advance the autoplay clock; does nothing while paused
    pub fn tick(&mut self, dt: Duration) -> CarouselEffect {
        if !self.autoplay || self.slides.is_empty() {
            return CarouselEffect::None;
        }

        self.elapsed += dt;
        if self.elapsed >= self.delay {
            self.next()
        } else {
            CarouselEffect::None
        }
    }

    /// The current video finished: resume autoplay and move on
    pub fn video_ended(&mut self) -> CarouselEffect {
        self.autoplay = true;
        self.next()
    }
}
