use std::fmt;

use serde::{Deserialize, Serialize};

/// Compass direction of one gesture stroke. Screen y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Dominant direction of a motion step, or `None` for no motion.
    ///
    /// Deltas are `i64` so that any pair of `i32` coordinates can be subtracted.
    pub fn from_delta(dx: i64, dy: i64) -> Option<Self> {
        if dx == 0 && dy == 0 {
            return None;
        }
        if dx.abs() > dy.abs() {
            Some(if dx > 0 { Direction::Right } else { Direction::Left })
        } else {
            Some(if dy > 0 { Direction::Down } else { Direction::Up })
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        };
        f.write_str(name)
    }
}

/// Navigation command triggered by a recognized gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GestureAction {
    Stop,
    NewTab,
    Back,
    Forward,
    CloseTab,
    Home,
    Reload,
}

/// An ordered direction sequence mapped to one action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GesturePattern {
    pub directions: Vec<Direction>,
    pub action: GestureAction,
}

impl GesturePattern {
    pub fn new(directions: &[Direction], action: GestureAction) -> Self {
        Self {
            directions: directions.to_vec(),
            action,
        }
    }

    /// Built-in mouse gestures.
    pub fn defaults() -> Vec<GesturePattern> {
        use Direction::*;
        vec![
            GesturePattern::new(&[Up], GestureAction::Stop),
            GesturePattern::new(&[Down], GestureAction::NewTab),
            GesturePattern::new(&[Left], GestureAction::Back),
            GesturePattern::new(&[Right], GestureAction::Forward),
            GesturePattern::new(&[Down, Right], GestureAction::CloseTab),
            GesturePattern::new(&[Down, Left], GestureAction::Home),
            GesturePattern::new(&[Up, Down], GestureAction::Reload),
        ]
    }
}

/// Joins a direction sequence as `Down+Right`.
pub fn describe(directions: &[Direction]) -> String {
    directions
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join("+")
}

/// Mouse buttons the recognizer can be triggered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// A pointer sample in view coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub x: i32,
    pub y: i32,
    pub button: MouseButton,
}

impl PointerEvent {
    pub fn new(x: i32, y: i32, button: MouseButton) -> Self {
        Self { x, y, button }
    }
}
