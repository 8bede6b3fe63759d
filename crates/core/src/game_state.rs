//! Game state - everything needed to restore an interrupted game
//!
//! The persisted shape is a JSON mapping:
//!
//! ```text
//! {
//!   "active_player": 0,
//!   "roll_count": 1,
//!   "game_kind": 0,
//!   "points": [[{"value": 0, "used": false}, ...], ...],
//!   "dice": [{"value": 3, "locked": false}, ...]
//! }
//! ```
//!
//! Decoding is total: a non-mapping yields [`GameState::default`], and every
//! key that is missing or has the wrong shape keeps its default. Encoding is
//! strict and canonical (`game_kind` always as its integer tag).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{json, Value};

use crate::dice::Dice;

/// Who the game is played against.
///
/// Persisted as an integer tag. Decoding also accepts the snake-case name;
/// anything unknown decodes to [`GameKind::AgainstHuman`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameKind {
    #[default]
    AgainstHuman,
    AgainstComputer,
}

impl GameKind {
    pub fn tag(&self) -> u8 {
        match self {
            GameKind::AgainstHuman => 0,
            GameKind::AgainstComputer => 1,
        }
    }

    pub fn from_tag(tag: u64) -> Option<Self> {
        match tag {
            0 => Some(GameKind::AgainstHuman),
            1 => Some(GameKind::AgainstComputer),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameKind::AgainstHuman => "against_human",
            GameKind::AgainstComputer => "against_computer",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "against_human" => Some(GameKind::AgainstHuman),
            "against_computer" => Some(GameKind::AgainstComputer),
            _ => None,
        }
    }

    /// Tolerant decode of a persisted tag.
    pub fn from_json(data: &Value) -> Self {
        let kind = match data {
            Value::Number(n) => n.as_u64().and_then(Self::from_tag),
            Value::String(s) => Self::from_str(s),
            _ => None,
        };
        kind.unwrap_or_default()
    }
}

impl Serialize for GameKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.tag())
    }
}

impl<'de> Deserialize<'de> for GameKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Ok(Self::from_json(&raw))
    }
}

/// One scorecard cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Point {
    pub value: u32,
    /// Whether the cell has been written this game.
    pub used: bool,
}

impl Point {
    pub fn new(value: u32, used: bool) -> Self {
        Self { value, used }
    }

    pub fn from_json(data: &Value) -> Self {
        let mut point = Self::default();
        let Some(map) = data.as_object() else {
            return point;
        };
        if let Some(value) = map
            .get("value")
            .and_then(Value::as_u64)
            .and_then(|v| u32::try_from(v).ok())
        {
            point.value = value;
        }
        if let Some(used) = map.get("used").and_then(Value::as_bool) {
            point.used = used;
        }
        point
    }

    pub fn to_json(&self) -> Value {
        json!({
            "value": self.value,
            "used": self.used,
        })
    }
}

impl<'de> Deserialize<'de> for Point {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Ok(Self::from_json(&raw))
    }
}

/// Full game snapshot.
///
/// `points` holds one column per player. `dice` is decoupled from any live
/// dice set; callers project into and out of it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct GameState {
    pub active_player: u32,
    pub roll_count: u32,
    pub game_kind: GameKind,
    pub points: Vec<Vec<Point>>,
    pub dice: Vec<Dice>,
}

impl GameState {
    pub fn new(game_kind: GameKind) -> Self {
        Self {
            game_kind,
            ..Self::default()
        }
    }

    pub fn from_json(data: &Value) -> Self {
        let mut state = Self::default();
        let Some(map) = data.as_object() else {
            return state;
        };

        if let Some(kind) = map.get("game_kind") {
            state.game_kind = GameKind::from_json(kind);
        }
        if let Some(player) = map.get("active_player").and_then(as_u32) {
            state.active_player = player;
        }
        if let Some(count) = map.get("roll_count").and_then(as_u32) {
            state.roll_count = count;
        }
        if let Some(dice) = map.get("dice").and_then(Value::as_array) {
            state.dice = dice.iter().map(Dice::from_json).collect();
        }
        if let Some(columns) = map.get("points").and_then(Value::as_array) {
            state.points = columns
                .iter()
                .map(|column| {
                    column
                        .as_array()
                        .map(|cells| cells.iter().map(Point::from_json).collect())
                        .unwrap_or_default()
                })
                .collect();
        }
        state
    }

    pub fn to_json(&self) -> Value {
        let points: Vec<Value> = self
            .points
            .iter()
            .map(|column| Value::Array(column.iter().map(Point::to_json).collect()))
            .collect();
        let dice: Vec<Value> = self.dice.iter().map(Dice::to_json).collect();

        json!({
            "active_player": self.active_player,
            "roll_count": self.roll_count,
            "game_kind": self.game_kind.tag(),
            "points": points,
            "dice": dice,
        })
    }
}

impl<'de> Deserialize<'de> for GameState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Ok(Self::from_json(&raw))
    }
}

fn as_u32(value: &Value) -> Option<u32> {
    value.as_u64().and_then(|v| u32::try_from(v).ok())
}
