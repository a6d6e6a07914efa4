// Services
// Services provide supporting functionality: settings, gesture recognition and the mouse gestures plugin.

pub mod gesture_recognizer;
pub mod mouse_gestures;
pub mod settings_engine;
