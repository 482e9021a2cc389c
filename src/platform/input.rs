//! Raw input translation
//!
//! Keyboard keys and touch taps become intents here. The state machine
//! still decides whether an intent is honoured.

use crate::sim::Intent;

/// Taps left of this fraction of the screen width move left
pub const TOUCH_LEFT_ZONE: f32 = 0.3;
/// Taps right of this fraction of the screen width move right
pub const TOUCH_RIGHT_ZONE: f32 = 0.7;

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Space,
    P,
    R,
    Other,
}

impl Key {
    /// Parse a DOM-style key name (`"ArrowLeft"`, `" "`, `"p"`, ...)
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowLeft" | "Left" => Key::Left,
            "ArrowRight" | "Right" => Key::Right,
            " " | "Space" | "Spacebar" => Key::Space,
            "p" | "P" | "KeyP" => Key::P,
            "r" | "R" | "KeyR" => Key::R,
            _ => Key::Other,
        }
    }
}

pub fn key_intent(key: Key) -> Intent {
    match key {
        Key::Left => Intent::MoveLeft,
        Key::Right => Intent::MoveRight,
        Key::Space => Intent::Jump,
        Key::P => Intent::TogglePause,
        Key::R => Intent::RequestReset,
        Key::Other => Intent::None,
    }
}

/// Map a tap at `tap_x` pixels on a screen `width` pixels wide
pub fn touch_intent(tap_x: f32, width: f32) -> Intent {
    if !width.is_finite() || width <= 0.0 || !tap_x.is_finite() {
        log::warn!("Ignoring tap at {} on a {} px wide screen", tap_x, width);
        return Intent::None;
    }
    let fraction = tap_x / width;
    if fraction < TOUCH_LEFT_ZONE {
        Intent::MoveLeft
    } else if fraction > TOUCH_RIGHT_ZONE {
        Intent::MoveRight
    } else {
        Intent::Jump
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys() {
        assert_eq!(key_intent(Key::from_name("ArrowLeft")), Intent::MoveLeft);
        assert_eq!(key_intent(Key::from_name("ArrowRight")), Intent::MoveRight);
        assert_eq!(key_intent(Key::from_name(" ")), Intent::Jump);
        assert_eq!(key_intent(Key::from_name("P")), Intent::TogglePause);
        assert_eq!(key_intent(Key::from_name("r")), Intent::RequestReset);
        assert_eq!(key_intent(Key::from_name("Escape")), Intent::None);
    }

    #[test]
    fn test_touch_zones() {
        assert_eq!(touch_intent(10.0, 800.0), Intent::MoveLeft);
        assert_eq!(touch_intent(239.0, 800.0), Intent::MoveLeft);
        assert_eq!(touch_intent(240.0, 800.0), Intent::Jump);
        assert_eq!(touch_intent(400.0, 800.0), Intent::Jump);
        assert_eq!(touch_intent(560.0, 800.0), Intent::Jump);
        assert_eq!(touch_intent(561.0, 800.0), Intent::MoveRight);
    }

    #[test]
    fn test_touch_on_invalid_screen_is_ignored() {
        assert_eq!(touch_intent(10.0, 0.0), Intent::None);
        assert_eq!(touch_intent(f32::NAN, 800.0), Intent::None);
    }
}
