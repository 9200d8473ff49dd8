use crate::config::DRAG_THRESHOLD_PX;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Keeps a `size` box whose top-left is `candidate` inside `viewport`.
/// When the box is larger than the viewport the top-left edge wins.
pub fn clamp_to_viewport(candidate: Point, size: Size, viewport: Size) -> Point {
    let max_x = viewport.width - size.width;
    let max_y = viewport.height - size.height;
    Point {
        x: candidate.x.min(max_x).max(0.0),
        y: candidate.y.min(max_y).max(0.0),
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gesture {
    pub start: Point,
    pub origin: Point,
    pub moved: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(Gesture),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GestureEnd {
    pub moved: bool,
}

/// Idle/Dragging state machine for the floating widget.
///
/// The machine only does the arithmetic; reading rects and writing styles is
/// left to whoever feeds it events.
#[derive(Clone, Debug)]
pub struct DragMachine {
    state: DragState,
    threshold: f64,
    suppress_click: bool,
}

impl Default for DragMachine {
    fn default() -> Self {
        Self::new(DRAG_THRESHOLD_PX)
    }
}

impl DragMachine {
    pub fn new(threshold: f64) -> Self {
        Self {
            state: DragState::Idle,
            threshold,
            suppress_click: false,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Starts a gesture. A gesture left dangling by a lost up event is simply
    /// replaced.
    pub fn begin(&mut self, pointer: Point, origin: Point) {
        self.suppress_click = false;
        self.state = DragState::Dragging(Gesture {
            start: pointer,
            origin,
            moved: false,
        });
    }

    /// Returns the clamped top-left to apply, or `None` when idle.
    pub fn update(&mut self, pointer: Point, size: Size, viewport: Size) -> Option<Point> {
        let DragState::Dragging(gesture) = &mut self.state else {
            return None;
        };
        let dx = pointer.x - gesture.start.x;
        let dy = pointer.y - gesture.start.y;
        if dx.abs() > self.threshold || dy.abs() > self.threshold {
            gesture.moved = true;
        }
        let candidate = Point::new(gesture.origin.x + dx, gesture.origin.y + dy);
        Some(clamp_to_viewport(candidate, size, viewport))
    }

    pub fn end(&mut self) -> Option<GestureEnd> {
        let DragState::Dragging(gesture) = std::mem::take(&mut self.state) else {
            return None;
        };
        self.suppress_click = gesture.moved;
        Some(GestureEnd {
            moved: gesture.moved,
        })
    }

    /// Consumed by the click that follows a release.
    pub fn take_click_suppression(&mut self) -> bool {
        std::mem::take(&mut self.suppress_click)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Size = Size {
        width: 800.0,
        height: 600.0,
    };
    const WIDGET: Size = Size {
        width: 80.0,
        height: 40.0,
    };

    #[test]
    fn idle_ignores_move_and_end() {
        let mut machine = DragMachine::default();
        assert_eq!(machine.update(Point::new(5.0, 5.0), WIDGET, VIEWPORT), None);
        assert_eq!(machine.end(), None);
        assert!(!machine.take_click_suppression());
    }

    #[test]
    fn moved_flag_is_sticky_within_gesture() {
        let mut machine = DragMachine::default();
        machine.begin(Point::new(100.0, 100.0), Point::new(10.0, 10.0));
        machine.update(Point::new(120.0, 100.0), WIDGET, VIEWPORT);
        machine.update(Point::new(100.0, 100.0), WIDGET, VIEWPORT);
        assert_eq!(machine.end(), Some(GestureEnd { moved: true }));
    }

    #[test]
    fn oversized_widget_pins_to_origin() {
        let big = Size::new(1000.0, 700.0);
        let clamped = clamp_to_viewport(Point::new(50.0, 50.0), big, VIEWPORT);
        assert_eq!(clamped, Point::new(0.0, 0.0));
    }

    #[test]
    fn negative_delta_clamps_to_zero() {
        let mut machine = DragMachine::default();
        machine.begin(Point::new(50.0, 50.0), Point::new(20.0, 30.0));
        let next = machine.update(Point::new(-500.0, -500.0), WIDGET, VIEWPORT);
        assert_eq!(next, Some(Point::new(0.0, 0.0)));
    }

    #[test]
    fn suppression_is_consumed_once() {
        let mut machine = DragMachine::default();
        machine.begin(Point::new(0.0, 0.0), Point::new(0.0, 0.0));
        machine.update(Point::new(30.0, 0.0), WIDGET, VIEWPORT);
        machine.end();
        assert!(machine.take_click_suppression());
        assert!(!machine.take_click_suppression());
    }

    #[test]
    fn new_gesture_resets_pending_suppression() {
        let mut machine = DragMachine::default();
        machine.begin(Point::new(0.0, 0.0), Point::new(0.0, 0.0));
        machine.update(Point::new(30.0, 0.0), WIDGET, VIEWPORT);
        machine.end();
        machine.begin(Point::new(0.0, 0.0), Point::new(30.0, 0.0));
        assert!(!machine.take_click_suppression());
    }
}
