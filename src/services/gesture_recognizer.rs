// Gesture Recognizer
// Buffers pointer samples while the trigger button is held and classifies the
// path into a direction sequence on release.

use tracing::{debug, trace};

use crate::types::errors::GestureError;
use crate::types::gesture::{
    describe, Direction, GestureAction, GesturePattern, MouseButton, PointerEvent,
};

/// Default minimum stroke length in pixels.
pub const DEFAULT_MIN_MOVEMENT: u32 = 20;

/// Trait defining the gesture recognizer interface.
pub trait GestureRecognizerTrait {
    fn add_pattern(&mut self, pattern: GesturePattern) -> Result<(), GestureError>;
    fn clear_patterns(&mut self);
    fn patterns(&self) -> &[GesturePattern];
    fn press(&mut self, event: PointerEvent) -> bool;
    fn motion(&mut self, event: PointerEvent);
    fn release(&mut self, event: PointerEvent) -> Option<GestureAction>;
    fn is_recording(&self) -> bool;
}

/// Recognizer state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognizerState {
    Idle,
    Recording { points: Vec<(i32, i32)> },
}

/// One merged stroke of a recorded path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Segment {
    direction: Direction,
    length: u64,
}

pub struct GestureRecognizer {
    trigger: MouseButton,
    min_movement: u32,
    patterns: Vec<GesturePattern>,
    state: RecognizerState,
}

impl GestureRecognizer {
    pub fn new(trigger: MouseButton, min_movement: u32) -> Self {
        Self {
            trigger,
            min_movement,
            patterns: Vec::new(),
            state: RecognizerState::Idle,
        }
    }

    /// A recognizer with the built-in navigation gestures registered.
    pub fn with_default_patterns(trigger: MouseButton, min_movement: u32) -> Self {
        let mut recognizer = Self::new(trigger, min_movement);
        recognizer.patterns = GesturePattern::defaults();
        recognizer
    }

    pub fn state(&self) -> &RecognizerState {
        &self.state
    }

    pub fn trigger(&self) -> MouseButton {
        self.trigger
    }

    pub fn set_trigger(&mut self, trigger: MouseButton) {
        self.trigger = trigger;
        self.state = RecognizerState::Idle;
    }

    pub fn set_min_movement(&mut self, min_movement: u32) {
        self.min_movement = min_movement;
    }

    /// Quantizes a recorded path into a direction sequence.
    pub fn classify(&self, points: &[(i32, i32)]) -> Vec<Direction> {
        let steps = points.windows(2).filter_map(|w| {
            let dx = i64::from(w[1].0) - i64::from(w[0].0);
            let dy = i64::from(w[1].1) - i64::from(w[0].1);
            Direction::from_delta(dx, dy).map(|direction| Segment {
                direction,
                length: match direction {
                    Direction::Left | Direction::Right => dx.unsigned_abs(),
                    Direction::Up | Direction::Down => dy.unsigned_abs(),
                },
            })
        });

        let strokes = merge(steps);
        let long = strokes.into_iter().filter(|s| s.length >= u64::from(self.min_movement));
        merge(long).into_iter().map(|s| s.direction).collect()
    }

    /// Action registered for an exact direction sequence.
    pub fn match_pattern(&self, directions: &[Direction]) -> Option<GestureAction> {
        self.patterns
            .iter()
            .find(|p| p.directions == directions)
            .map(|p| p.action)
    }
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::with_default_patterns(MouseButton::Middle, DEFAULT_MIN_MOVEMENT)
    }
}

/// Joins consecutive segments that share a direction.
fn merge(segments: impl IntoIterator<Item = Segment>) -> Vec<Segment> {
    let mut merged: Vec<Segment> = Vec::new();
    for segment in segments {
        match merged.last_mut() {
            Some(last) if last.direction == segment.direction => {
                last.length = last.length.saturating_add(segment.length)
            }
            _ => merged.push(segment),
        }
    }
    merged
}

impl GestureRecognizerTrait for GestureRecognizer {
    fn add_pattern(&mut self, pattern: GesturePattern) -> Result<(), GestureError> {
        if pattern.directions.is_empty() {
            return Err(GestureError::EmptyPattern);
        }
        if self
            .patterns
            .iter()
            .any(|p| p.directions == pattern.directions)
        {
            return Err(GestureError::DuplicatePattern(describe(&pattern.directions)));
        }
        self.patterns.push(pattern);
        Ok(())
    }

    fn clear_patterns(&mut self) {
        self.patterns.clear();
    }

    fn patterns(&self) -> &[GesturePattern] {
        &self.patterns
    }

    /// Starts recording on a trigger-button press. Returns whether recording began.
    fn press(&mut self, event: PointerEvent) -> bool {
        if event.button != self.trigger {
            return false;
        }
        self.state = RecognizerState::Recording {
            points: vec![(event.x, event.y)],
        };
        true
    }

    fn motion(&mut self, event: PointerEvent) {
        if let RecognizerState::Recording { points } = &mut self.state {
            trace!(x = event.x, y = event.y, "gesture sample");
            points.push((event.x, event.y));
        }
    }

    /// Ends recording and returns the matched action, if any.
    fn release(&mut self, event: PointerEvent) -> Option<GestureAction> {
        if event.button != self.trigger {
            return None;
        }
        let RecognizerState::Recording { mut points } =
            std::mem::replace(&mut self.state, RecognizerState::Idle)
        else {
            return None;
        };
        points.push((event.x, event.y));

        let directions = self.classify(&points);
        if directions.is_empty() {
            return None;
        }
        let action = self.match_pattern(&directions);
        debug!(gesture = %describe(&directions), ?action, "gesture finished");
        action
    }

    fn is_recording(&self) -> bool {
        matches!(self.state, RecognizerState::Recording { .. })
    }
}
