//! Viewport rectangle

use glow::HasContext;

/// Viewport information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// A viewport covering a `width` x `height` framebuffer from the origin.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    /// Get the aspect ratio. Zero-height viewports report 1.0.
    pub fn aspect(&self) -> f32 {
        if self.height == 0 {
            return 1.0;
        }
        self.width as f32 / self.height as f32
    }

    /// Whether the framebuffer has no area (minimized window).
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Point `target` at this rectangle. Empty viewports are skipped.
    ///
    /// Returns whether the viewport was applied.
    pub fn apply<T: ViewportTarget + ?Sized>(&self, target: &T) -> bool {
        if self.is_empty() {
            return false;
        }
        target.set_viewport(*self);
        true
    }
}

/// Something that renders into a viewport rectangle.
pub trait ViewportTarget {
    fn set_viewport(&self, viewport: Viewport);
}

impl ViewportTarget for glow::Context {
    fn set_viewport(&self, viewport: Viewport) {
        unsafe {
            self.viewport(
                viewport.x as i32,
                viewport.y as i32,
                viewport.width as i32,
                viewport.height as i32,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingTarget {
        applied: RefCell<Vec<Viewport>>,
    }

    impl ViewportTarget for RecordingTarget {
        fn set_viewport(&self, viewport: Viewport) {
            self.applied.borrow_mut().push(viewport);
        }
    }

    #[test]
    fn test_aspect() {
        assert_eq!(Viewport::new(800, 600).aspect(), 800.0 / 600.0);
        assert_eq!(Viewport::new(800, 0).aspect(), 1.0);
    }

    #[test]
    fn test_apply_sets_full_framebuffer() {
        let target = RecordingTarget::default();
        assert!(Viewport::new(1024, 768).apply(&target));
        assert_eq!(
            *target.applied.borrow(),
            vec![Viewport {
                x: 0,
                y: 0,
                width: 1024,
                height: 768
            }]
        );
    }

    #[test]
    fn test_apply_skips_empty() {
        let target = RecordingTarget::default();
        assert!(!Viewport::new(0, 600).apply(&target));
        assert!(!Viewport::new(800, 0).apply(&target));
        assert!(target.applied.borrow().is_empty());
    }
}
