//! # Swipe Gesture Recognizer
//!
//! Turns single-finger touch sequences into discrete left/right swipes.
//! [`SwipeRecognizer`] is the pure state machine; [`SwipeGesture`] binds it to
//! callbacks for a UI surface.
//!
//! A gesture becomes horizontal once `|dx| > |dy|` and `|dx|` passes the
//! noise floor. On release, a horizontal gesture whose final `|dx|` reaches
//! the threshold yields exactly one swipe in the sign of `dx`.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
}

impl TouchPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeConfig {
    /// Minimum horizontal travel for a swipe, in pixels
    pub threshold: f64,
    /// Horizontal travel below which a move is not classified
    pub noise_floor: f64,
    /// Ask the platform to suppress scrolling once a gesture is horizontal
    pub prevent_scroll: bool,
    /// When set, rightward swipes must start within this many pixels of the
    /// surface's left edge. Leftward swipes may start anywhere.
    pub edge_band: Option<f64>,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            threshold: 50.0,
            noise_floor: 10.0,
            prevent_scroll: false,
            edge_band: None,
        }
    }
}

impl SwipeConfig {
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_prevent_scroll(mut self, prevent_scroll: bool) -> Self {
        self.prevent_scroll = prevent_scroll;
        self
    }

    pub fn with_edge_band(mut self, edge_band: Option<f64>) -> Self {
        self.edge_band = edge_band;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

/// What the caller should do with the platform event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveResponse {
    pub prevent_default: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Tracking {
    Idle,
    Tracking { origin: TouchPoint, horizontal: bool },
}

#[derive(Debug, Clone)]
pub struct SwipeRecognizer {
    config: SwipeConfig,
    state: Tracking,
}

impl SwipeRecognizer {
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            state: Tracking::Idle,
        }
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// A gesture is in flight
    pub fn is_tracking(&self) -> bool {
        matches!(self.state, Tracking::Tracking { .. })
    }

    /// The in-flight gesture has been classified horizontal
    pub fn is_swiping(&self) -> bool {
        matches!(
            self.state,
            Tracking::Tracking {
                horizontal: true,
                ..
            }
        )
    }

    /// Begin a new gesture, abandoning any stale one. Multi-touch leaves the
    /// recognizer idle.
    pub fn touch_start(&mut self, touches: &[TouchPoint]) {
        self.state = match touches {
            [origin] => Tracking::Tracking {
                origin: *origin,
                horizontal: false,
            },
            _ => Tracking::Idle,
        };
    }

    pub fn touch_move(&mut self, touches: &[TouchPoint]) -> MoveResponse {
        let [current] = touches else {
            self.state = Tracking::Idle;
            return MoveResponse::default();
        };
        let Tracking::Tracking { origin, horizontal } = &mut self.state else {
            return MoveResponse::default();
        };

        let dx = current.x - origin.x;
        let dy = current.y - origin.y;
        if dx.abs() > dy.abs() && dx.abs() > self.config.noise_floor {
            *horizontal = true;
        }

        MoveResponse {
            prevent_default: *horizontal && self.config.prevent_scroll,
        }
    }

    /// Finish the gesture with the lifted contact points
    pub fn touch_end(&mut self, changed: &[TouchPoint]) -> Option<SwipeDirection> {
        let state = std::mem::replace(&mut self.state, Tracking::Idle);
        let Tracking::Tracking {
            origin,
            horizontal: true,
        } = state
        else {
            return None;
        };
        let [end] = changed else {
            return None;
        };

        let dx = end.x - origin.x;
        if dx.abs() < self.config.threshold {
            return None;
        }
        if dx > 0.0 {
            match self.config.edge_band {
                Some(band) if origin.x > band => None,
                _ => Some(SwipeDirection::Right),
            }
        } else if dx < 0.0 {
            Some(SwipeDirection::Left)
        } else {
            None
        }
    }

    /// Drop the in-flight gesture without reporting it
    pub fn cancel(&mut self) {
        self.state = Tracking::Idle;
    }
}

type Callback = Box<dyn FnMut()>;

/// A recognizer attached to a surface, dispatching to swipe callbacks until
/// [`detach`](Self::detach) is called.
pub struct SwipeGesture {
    recognizer: SwipeRecognizer,
    on_swipe_left: Option<Callback>,
    on_swipe_right: Option<Callback>,
    attached: bool,
}

impl SwipeGesture {
    pub fn attach(config: SwipeConfig) -> Self {
        Self {
            recognizer: SwipeRecognizer::new(config),
            on_swipe_left: None,
            on_swipe_right: None,
            attached: true,
        }
    }

    pub fn on_swipe_left(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_swipe_left = Some(Box::new(callback));
        self
    }

    pub fn on_swipe_right(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_swipe_right = Some(Box::new(callback));
        self
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn touch_start(&mut self, touches: &[TouchPoint]) {
        if self.attached {
            self.recognizer.touch_start(touches);
        }
    }

    pub fn touch_move(&mut self, touches: &[TouchPoint]) -> MoveResponse {
        if self.attached {
            self.recognizer.touch_move(touches)
        } else {
            MoveResponse::default()
        }
    }

    /// Complete the gesture and fire the matching callback
    pub fn touch_end(&mut self, changed: &[TouchPoint]) -> Option<SwipeDirection> {
        if !self.attached {
            return None;
        }
        let direction = self.recognizer.touch_end(changed)?;
        let callback = match direction {
            SwipeDirection::Left => self.on_swipe_left.as_mut(),
            SwipeDirection::Right => self.on_swipe_right.as_mut(),
        };
        if let Some(callback) = callback {
            log::debug!("Swipe {direction:?}");
            callback();
        }
        Some(direction)
    }

    /// Abandon the gesture in flight, e.g. on `touchcancel`
    pub fn cancel(&mut self) {
        self.recognizer.cancel();
    }

    /// Stop listening and release the callbacks. Idempotent.
    pub fn detach(&mut self) {
        self.attached = false;
        self.recognizer.cancel();
        self.on_swipe_left = None;
        self.on_swipe_right = None;
    }
}

impl fmt::Debug for SwipeGesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeGesture")
            .field("recognizer", &self.recognizer)
            .field("attached", &self.attached)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn pt(x: f64, y: f64) -> TouchPoint {
        TouchPoint::new(x, y)
    }

    fn swipe(recognizer: &mut SwipeRecognizer, from: TouchPoint, to: TouchPoint) -> Option<SwipeDirection> {
        recognizer.touch_start(&[from]);
        recognizer.touch_move(&[to]);
        recognizer.touch_end(&[to])
    }

    #[rstest]
    #[case(pt(100.0, 100.0), pt(180.0, 110.0), Some(SwipeDirection::Right))]
    #[case(pt(200.0, 100.0), pt(120.0, 90.0), Some(SwipeDirection::Left))]
    #[case(pt(100.0, 100.0), pt(130.0, 100.0), None)]
    #[case(pt(100.0, 100.0), pt(150.0, 100.0), Some(SwipeDirection::Right))]
    #[case(pt(100.0, 100.0), pt(170.0, 190.0), None)]
    fn test_swipe_classification(
        #[case] from: TouchPoint,
        #[case] to: TouchPoint,
        #[case] expected: Option<SwipeDirection>,
    ) {
        let mut recognizer = SwipeRecognizer::new(SwipeConfig::default());
        assert_eq!(swipe(&mut recognizer, from, to), expected);
        assert!(!recognizer.is_tracking());
    }

    #[test]
    fn test_release_without_move_is_not_a_swipe() {
        let mut recognizer = SwipeRecognizer::new(SwipeConfig::default());
        recognizer.touch_start(&[pt(0.0, 0.0)]);
        assert_eq!(recognizer.touch_end(&[pt(200.0, 0.0)]), None);
    }

    #[test]
    fn test_noise_floor() {
        let mut recognizer = SwipeRecognizer::new(SwipeConfig::default());
        recognizer.touch_start(&[pt(0.0, 0.0)]);
        recognizer.touch_move(&[pt(8.0, 0.0)]);
        assert!(!recognizer.is_swiping());
        recognizer.touch_move(&[pt(12.0, 0.0)]);
        assert!(recognizer.is_swiping());
    }

    #[test]
    fn test_prevent_scroll_only_once_horizontal() {
        let config = SwipeConfig::default().with_prevent_scroll(true);
        let mut recognizer = SwipeRecognizer::new(config);
        recognizer.touch_start(&[pt(0.0, 0.0)]);
        assert!(!recognizer.touch_move(&[pt(0.0, 30.0)]).prevent_default);
        assert!(recognizer.touch_move(&[pt(60.0, 30.0)]).prevent_default);
        // Stays horizontal for the rest of the gesture
        assert!(recognizer.touch_move(&[pt(10.0, 80.0)]).prevent_default);
    }

    #[test]
    fn test_prevent_scroll_disabled() {
        let mut recognizer = SwipeRecognizer::new(SwipeConfig::default());
        recognizer.touch_start(&[pt(0.0, 0.0)]);
        assert_eq!(recognizer.touch_move(&[pt(60.0, 0.0)]), MoveResponse::default());
    }

    #[test]
    fn test_multi_touch_is_ignored() {
        let mut recognizer = SwipeRecognizer::new(SwipeConfig::default());
        recognizer.touch_start(&[pt(0.0, 0.0), pt(50.0, 0.0)]);
        assert!(!recognizer.is_tracking());
        recognizer.touch_move(&[pt(100.0, 0.0)]);
        assert_eq!(recognizer.touch_end(&[pt(100.0, 0.0)]), None);

        recognizer.touch_start(&[pt(0.0, 0.0)]);
        recognizer.touch_move(&[pt(80.0, 0.0), pt(90.0, 0.0)]);
        assert_eq!(recognizer.touch_end(&[pt(80.0, 0.0)]), None);
    }

    #[test]
    fn test_new_start_abandons_stale_gesture() {
        let mut recognizer = SwipeRecognizer::new(SwipeConfig::default());
        recognizer.touch_start(&[pt(0.0, 0.0)]);
        recognizer.touch_move(&[pt(90.0, 0.0)]);
        recognizer.touch_start(&[pt(300.0, 0.0)]);
        assert!(!recognizer.is_swiping());
        assert_eq!(recognizer.touch_end(&[pt(390.0, 0.0)]), None);
    }

    #[test]
    fn test_edge_band_limits_rightward_swipes_only() {
        let config = SwipeConfig::default().with_edge_band(Some(20.0));
        let mut recognizer = SwipeRecognizer::new(config);
        assert_eq!(swipe(&mut recognizer, pt(200.0, 0.0), pt(300.0, 0.0)), None);
        assert_eq!(
            swipe(&mut recognizer, pt(10.0, 0.0), pt(110.0, 0.0)),
            Some(SwipeDirection::Right)
        );
        assert_eq!(
            swipe(&mut recognizer, pt(300.0, 0.0), pt(200.0, 0.0)),
            Some(SwipeDirection::Left)
        );
    }

    #[test]
    fn test_gesture_fires_callback_once() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let left = log.clone();
        let right = log.clone();
        let mut gesture = SwipeGesture::attach(SwipeConfig::default())
            .on_swipe_left(move || left.borrow_mut().push("left"))
            .on_swipe_right(move || right.borrow_mut().push("right"));

        gesture.touch_start(&[pt(0.0, 0.0)]);
        gesture.touch_move(&[pt(70.0, 5.0)]);
        assert_eq!(gesture.touch_end(&[pt(70.0, 5.0)]), Some(SwipeDirection::Right));
        assert_eq!(gesture.touch_end(&[pt(70.0, 5.0)]), None);

        assert_eq!(*log.borrow(), vec!["right"]);
    }

    #[test]
    fn test_detach_stops_dispatch() {
        let count = Rc::new(RefCell::new(0));
        let counter = count.clone();
        let mut gesture = SwipeGesture::attach(SwipeConfig::default())
            .on_swipe_left(move || *counter.borrow_mut() += 1);

        gesture.touch_start(&[pt(100.0, 0.0)]);
        gesture.touch_move(&[pt(20.0, 0.0)]);
        gesture.detach();
        gesture.detach();
        assert_eq!(gesture.touch_end(&[pt(20.0, 0.0)]), None);
        assert!(!gesture.is_attached());
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn test_cancel_drops_gesture_but_stays_attached() {
        let count = Rc::new(RefCell::new(0));
        let counter = count.clone();
        let mut gesture = SwipeGesture::attach(SwipeConfig::default())
            .on_swipe_right(move || *counter.borrow_mut() += 1);

        gesture.touch_start(&[pt(0.0, 0.0)]);
        gesture.touch_move(&[pt(80.0, 0.0)]);
        gesture.cancel();
        assert_eq!(gesture.touch_end(&[pt(80.0, 0.0)]), None);

        gesture.touch_start(&[pt(0.0, 0.0)]);
        gesture.touch_move(&[pt(80.0, 0.0)]);
        assert_eq!(gesture.touch_end(&[pt(80.0, 0.0)]), Some(SwipeDirection::Right));
        assert!(gesture.is_attached());
        assert_eq!(*count.borrow(), 1);
    }
}
