//! A single six-sided die with a lock flag.
//!
//! A locked die is exempt from rolling. Equality is structural: two dice are
//! equal when both face value and lock flag match.

use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};

use crate::types::{MAX_FACE, MIN_FACE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Dice {
    value: u8,
    locked: bool,
}

impl Dice {
    /// A fresh, unlocked die showing a random face.
    pub fn new() -> Self {
        let mut dice = Self::with_value(MIN_FACE);
        dice.roll();
        dice
    }

    /// An unlocked die showing `value` (clamped into 1..=6).
    pub fn with_value(value: u8) -> Self {
        Self {
            value: clamp_face(value),
            locked: false,
        }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    /// Set the face directly. Ignores the lock; clamps into 1..=6.
    pub fn set_value(&mut self, value: u8) {
        self.value = clamp_face(value);
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn lock(&mut self, locked: bool) {
        self.locked = locked;
    }

    pub fn toggle_lock(&mut self) {
        self.locked = !self.locked;
    }

    /// Roll using process randomness. No-op while locked.
    pub fn roll(&mut self) {
        self.roll_with(&mut rand::rng());
    }

    /// Roll using the given generator. No-op while locked.
    pub fn roll_with<R: Rng>(&mut self, rng: &mut R) {
        if self.locked {
            return;
        }
        self.value = rng.random_range(MIN_FACE..=MAX_FACE);
    }

    /// Decode from a `{value, locked}` mapping.
    ///
    /// Never fails: anything missing, mistyped or out of range falls back to
    /// the default (`value = 1`, `locked = false`).
    pub fn from_json(data: &Value) -> Self {
        let mut dice = Self::default();
        let Some(map) = data.as_object() else {
            return dice;
        };

        if let Some(value) = map
            .get("value")
            .and_then(Value::as_u64)
            .filter(|v| (MIN_FACE as u64..=MAX_FACE as u64).contains(v))
        {
            dice.value = value as u8;
        }
        if let Some(locked) = map.get("locked").and_then(Value::as_bool) {
            dice.locked = locked;
        }
        dice
    }

    pub fn to_json(&self) -> Value {
        json!({
            "value": self.value,
            "locked": self.locked,
        })
    }
}

impl Default for Dice {
    fn default() -> Self {
        Self {
            value: MIN_FACE,
            locked: false,
        }
    }
}

impl<'de> Deserialize<'de> for Dice {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Ok(Self::from_json(&raw))
    }
}

fn clamp_face(value: u8) -> u8 {
    value.clamp(MIN_FACE, MAX_FACE)
}
