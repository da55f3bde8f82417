use std::time::Duration;

use ratatui::style::Color;

use super::error::{PacError, Result};

/// A still image, drawn in the terminal as a short coloured glyph.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Sprite {
    pub glyph: String,
    pub color: Color,
}

impl Sprite {
    pub fn new(glyph: &str, color: Color) -> Self {
        Self {
            glyph: glyph.to_string(),
            color,
        }
    }
}

/// A sequence of frames played back at a fixed delay.
#[derive(Debug, Clone)]
pub struct AnimatedSprite {
    frames: Vec<Sprite>,
    frame_delay: Duration,
    looping: bool,
    animating: bool,
    current: usize,
    // time accumulated towards the next frame
    pending: Duration,
}

impl AnimatedSprite {
    pub fn new(frames: Vec<Sprite>, frame_delay: Duration, looping: bool) -> Result<Self> {
        if frames.is_empty() {
            return Err(PacError::EmptyAnimation);
        }
        if frame_delay.is_zero() {
            return Err(PacError::ZeroFrameDelay);
        }

        Ok(Self {
            frames,
            frame_delay,
            looping,
            animating: true,
            current: 0,
            pending: Duration::ZERO,
        })
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn set_animating(&mut self, animating: bool) {
        self.animating = animating;
    }

    /// Jumps back to the first frame and starts playing.
    pub fn restart(&mut self) {
        self.current = 0;
        self.pending = Duration::ZERO;
        self.animating = true;
    }

    pub fn frame_index(&self) -> usize {
        self.current
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn current_frame(&self) -> &Sprite {
        &self.frames[self.current]
    }

    // A non-looping animation holds its last frame and stops once it gets there.
    pub fn update(&mut self, elapsed: Duration) {
        if !self.animating {
            return;
        }

        self.pending += elapsed;
        while self.pending >= self.frame_delay {
            self.pending -= self.frame_delay;

            if self.current + 1 < self.frames.len() {
                self.current += 1;
            } else if self.looping {
                self.current = 0;
            } else {
                self.animating = false;
                self.pending = Duration::ZERO;
                break;
            }
        }
    }
}

/// Whatever a unit should currently be drawn as.
#[derive(Debug, Clone, Copy)]
pub enum Visual<'a> {
    Still(&'a Sprite),
    Animated(&'a AnimatedSprite),
}

impl<'a> Visual<'a> {
    pub fn current_frame(&self) -> &'a Sprite {
        match *self {
            Visual::Still(sprite) => sprite,
            Visual::Animated(animation) => animation.current_frame(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames(glyphs: &[&str]) -> Vec<Sprite> {
        glyphs.iter().map(|g| Sprite::new(g, Color::Yellow)).collect()
    }

    #[test]
    fn test_empty_animation_is_rejected() {
        assert!(matches!(
            AnimatedSprite::new(Vec::new(), Duration::from_millis(100), false),
            Err(PacError::EmptyAnimation)
        ));
    }

    #[test]
    fn test_zero_frame_delay_is_rejected() {
        assert!(matches!(
            AnimatedSprite::new(frames(&["a", "b"]), Duration::ZERO, true),
            Err(PacError::ZeroFrameDelay)
        ));
    }

    #[test]
    fn test_update_advances_whole_frames() {
        let mut animation =
            AnimatedSprite::new(frames(&["a", "b", "c"]), Duration::from_millis(100), true)
                .unwrap();

        animation.update(Duration::from_millis(50));
        assert_eq!(animation.frame_index(), 0);

        animation.update(Duration::from_millis(60));
        assert_eq!(animation.frame_index(), 1);

        animation.update(Duration::from_millis(200));
        assert_eq!(animation.current_frame(), &Sprite::new("a", Color::Yellow));
        assert!(animation.is_animating());
    }

    #[test]
    fn test_non_looping_animation_stops_on_last_frame() {
        let mut animation =
            AnimatedSprite::new(frames(&["a", "b"]), Duration::from_millis(10), false).unwrap();

        animation.update(Duration::from_millis(1000));
        assert_eq!(animation.frame_index(), 1);
        assert!(!animation.is_animating());
    }

    #[test]
    fn test_stopped_animation_holds_its_frame() {
        let mut animation =
            AnimatedSprite::new(frames(&["a", "b", "c"]), Duration::from_millis(10), true)
                .unwrap();

        animation.update(Duration::from_millis(10));
        animation.set_animating(false);
        animation.update(Duration::from_millis(100));
        assert_eq!(animation.frame_index(), 1);
    }

    #[test]
    fn test_restart() {
        let mut animation =
            AnimatedSprite::new(frames(&["a", "b", "c"]), Duration::from_millis(10), false)
                .unwrap();

        animation.update(Duration::from_millis(1000));
        assert!(!animation.is_animating());

        animation.restart();
        assert_eq!(animation.frame_index(), 0);
        assert!(animation.is_animating());
    }
}
