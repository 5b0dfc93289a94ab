/// Elements that switch the cursor to its hover variant.
pub const INTERACTIVE_SELECTOR: &str = "a, button, [role=\"button\"], input, textarea, select";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorVariant {
    #[default]
    Default,
    Hover,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Geometry of the ring overlay for a given pointer position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingStyle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

const RING_SIZE: f64 = 24.0;
const RING_HOVER_SIZE: f64 = 40.0;
const DOT_SIZE: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorState {
    position: Point,
    variant: CursorVariant,
    touch: bool,
}

impl Default for CursorState {
    /// Starts as touch so nothing is drawn before the environment is known.
    fn default() -> Self {
        Self {
            position: Point::default(),
            variant: CursorVariant::Default,
            touch: true,
        }
    }
}

impl CursorState {
    pub fn set_touch(&mut self, touch: bool) {
        self.touch = touch;
    }

    pub fn is_enabled(&self) -> bool {
        !self.touch
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.position = Point { x, y };
    }

    /// Pointer entered (`true`) or left (`false`) an interactive element.
    pub fn hover(&mut self, over_interactive: bool) {
        self.variant = if over_interactive {
            CursorVariant::Hover
        } else {
            CursorVariant::Default
        };
    }

    pub fn variant(&self) -> CursorVariant {
        self.variant
    }


    /// Ring overlay, or `None` when the cursor is disabled.
    pub fn ring(&self) -> Option<RingStyle> {
        if !self.is_enabled() {
            return None;
        }
        let size = match self.variant {
            CursorVariant::Default => RING_SIZE,
            CursorVariant::Hover => RING_HOVER_SIZE,
        };
        Some(RingStyle {
            x: self.position.x - size / 2.0,
            y: self.position.y - size / 2.0,
            size,
        })
    }

    /// Top-left corner of the center dot, or `None` when disabled.
    pub fn dot(&self) -> Option<Point> {
        if !self.is_enabled() {
            return None;
        }
        Some(Point {
            x: self.position.x - DOT_SIZE / 2.0,
            y: self.position.y - DOT_SIZE / 2.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_environment_renders_nothing() {
        let mut cursor = CursorState::default();
        cursor.set_touch(true);
        for (x, y) in [(10.0, 10.0), (300.0, 120.0)] {
            cursor.move_to(x, y);
            cursor.hover(true);
            assert!(cursor.ring().is_none());
            assert!(cursor.dot().is_none());
        }
    }

    #[test]
    fn test_nothing_rendered_before_detection() {
        assert!(!CursorState::default().is_enabled());
    }

    #[test]
    fn test_ring_follows_pointer_and_variant() {
        let mut cursor = CursorState::default();
        cursor.set_touch(false);
        cursor.move_to(100.0, 50.0);
        assert_eq!(
            cursor.ring(),
            Some(RingStyle {
                x: 88.0,
                y: 38.0,
                size: 24.0
            })
        );
        assert_eq!(cursor.dot(), Some(Point { x: 96.0, y: 46.0 }));

        cursor.hover(true);
        assert_eq!(cursor.variant(), CursorVariant::Hover);
        assert_eq!(
            cursor.ring(),
            Some(RingStyle {
                x: 80.0,
                y: 30.0,
                size: 40.0
            })
        );

        cursor.hover(false);
        assert_eq!(cursor.variant(), CursorVariant::Default);
    }

    #[test]
    fn test_resize_can_disable_cursor() {
        let mut cursor = CursorState::default();
        cursor.set_touch(false);
        cursor.move_to(5.0, 5.0);
        assert!(cursor.ring().is_some());
        cursor.set_touch(true);
        assert!(cursor.ring().is_none());
        cursor.set_touch(false);
        assert_eq!(cursor.dot(), Some(Point { x: 1.0, y: 1.0 }));
    }
}
