//! Game session: the outer loop's state between terminal events.
//!
//! Owns the dice set and the persisted game state, and turns key presses into
//! dice events or loop commands. Kept free of terminal I/O so a whole session
//! can be driven from tests.

use std::path::PathBuf;

use crossterm::event::KeyEvent;
use tracing::{info, warn};

use crate::config::Config;
use crate::core::{Entropy, GameState};
use crate::input::{command, dice_event, should_quit, Command};
use crate::store::{self, StoreError};
use crate::term::{DiceSet, StatusLine};
use crate::types::MAX_ROLLS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Game {
    dice: DiceSet,
    state: GameState,
    seed: Option<u64>,
    rolls_made: u64,
    save_path: Option<PathBuf>,
    message: Option<String>,
}

impl Game {
    /// A fresh game with the first throw already made.
    pub fn new(config: &Config) -> Self {
        let mut game = Self {
            dice: DiceSet::with_entropy(config.entropy()),
            state: GameState::default(),
            seed: config.seed,
            rolls_made: 0,
            save_path: config.save_path.clone(),
            message: None,
        };
        game.state.roll_count = 1;
        game
    }

    /// Resume from a saved state.
    pub fn from_state(state: GameState, config: &Config) -> Self {
        let mut game = Self::new(config);
        game.dice.restore(&state.dice);
        game.state = state;
        game
    }

    /// Resume from the configured save file if it loads, else start fresh.
    pub fn start(config: &Config) -> Self {
        let Some(path) = config.save_path.as_deref().filter(|p| p.exists()) else {
            return Self::new(config);
        };
        match store::load(path) {
            Ok(state) => {
                info!(path = %path.display(), "resuming saved game");
                Self::from_state(state, config)
            }
            Err(err) => {
                warn!(error = %err, "ignoring unreadable save file");
                Self::new(config)
            }
        }
    }

    pub fn dice(&self) -> &DiceSet {
        &self.dice
    }

    pub fn roll_count(&self) -> u32 {
        self.state.roll_count
    }

    pub fn status(&self) -> StatusLine {
        StatusLine {
            roll_count: self.state.roll_count,
            max_rolls: MAX_ROLLS,
            message: self.message.clone(),
        }
    }

    /// Current game state with the live dice projected into it.
    pub fn snapshot(&self) -> GameState {
        GameState {
            dice: self.dice.dice_snapshot(),
            ..self.state.clone()
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if should_quit(key) {
            if self.save_path.is_some() {
                self.save_or_report();
            }
            return Flow::Quit;
        }

        self.message = None;
        match command(key) {
            Some(Command::Roll) => {
                self.roll();
            }
            Some(Command::NewTurn) => self.new_turn(),
            Some(Command::Save) => self.save_or_report(),
            None => self.dice.handle_input(dice_event(key)),
        }
        Flow::Continue
    }

    /// Roll the unlocked dice. Returns `false` once the turn is out of rolls.
    pub fn roll(&mut self) -> bool {
        if self.state.roll_count >= MAX_ROLLS {
            self.message = Some("no rolls left, n for new turn".to_string());
            return false;
        }
        let entropy = self.next_entropy();
        self.dice.roll(entropy);
        self.state.roll_count += 1;
        true
    }

    /// Unlock everything and make the first throw of a new turn.
    pub fn new_turn(&mut self) {
        self.dice.unlock_all();
        self.state.roll_count = 0;
        self.roll();
    }

    pub fn save(&self) -> Result<(), StoreError> {
        match &self.save_path {
            Some(path) => store::save(path, &self.snapshot()),
            None => Ok(()),
        }
    }

    fn save_or_report(&mut self) {
        if self.save_path.is_none() {
            self.message = Some("no save path (KNIFFEL_SAVE_PATH)".to_string());
            return;
        }
        self.message = Some(match self.save() {
            Ok(()) => "saved".to_string(),
            Err(err) => {
                warn!(error = %err, "save failed");
                "save failed".to_string()
            }
        });
    }

    fn next_entropy(&mut self) -> Entropy {
        self.rolls_made += 1;
        match self.seed {
            Some(seed) => Entropy::Seed(seed.wrapping_add(self.rolls_made)),
            None => Entropy::Process,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent};

    fn seeded() -> Config {
        Config {
            seed: Some(8),
            ..Config::default()
        }
    }

    fn press(game: &mut Game, code: KeyCode) -> Flow {
        game.handle_key(KeyEvent::from(code))
    }

    #[test]
    fn fresh_game_has_made_its_first_throw() {
        let game = Game::new(&seeded());
        assert_eq!(game.roll_count(), 1);
        assert_eq!(game.status().rolls_text(), "Roll 1/3");
    }

    #[test]
    fn rolls_stop_at_the_limit() {
        let mut game = Game::new(&seeded());
        assert!(game.roll());
        assert!(game.roll());
        assert!(!game.roll());
        assert_eq!(game.roll_count(), MAX_ROLLS);
        assert!(game.status().message.is_some());
    }

    #[test]
    fn new_turn_unlocks_and_resets() {
        let mut game = Game::new(&seeded());
        press(&mut game, KeyCode::Enter);
        assert!(game.dice().is_locked(0));
        game.roll();

        press(&mut game, KeyCode::Char('n'));
        assert_eq!(game.roll_count(), 1);
        assert!(!game.dice().is_locked(0));
    }

    #[test]
    fn arrow_keys_reach_the_dice_set() {
        let mut game = Game::new(&seeded());
        press(&mut game, KeyCode::Down);
        press(&mut game, KeyCode::Down);
        assert_eq!(game.dice().selected(), 2);
        press(&mut game, KeyCode::Up);
        assert_eq!(game.dice().selected(), 1);
    }

    #[test]
    fn locked_dice_survive_roll_key() {
        let mut game = Game::new(&seeded());
        press(&mut game, KeyCode::Enter);
        let before = game.dice().get_dice()[0];
        press(&mut game, KeyCode::Char('r'));
        press(&mut game, KeyCode::Char('r'));
        assert_eq!(game.dice().get_dice()[0], before);
    }

    #[test]
    fn snapshot_projects_live_dice() {
        let mut game = Game::new(&seeded());
        press(&mut game, KeyCode::Enter);
        let snap = game.snapshot();
        assert_eq!(snap.dice.len(), 5);
        assert!(snap.dice[0].is_locked());
        assert_eq!(snap.roll_count, 1);
    }

    #[test]
    fn quit_saves_and_start_resumes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            seed: Some(8),
            save_path: Some(dir.path().join("save.json")),
            log_path: None,
        };

        let mut game = Game::new(&config);
        press(&mut game, KeyCode::Enter);
        game.roll();
        let expected = game.snapshot();
        assert_eq!(press(&mut game, KeyCode::Char('q')), Flow::Quit);

        let resumed = Game::start(&config);
        assert_eq!(resumed.snapshot(), expected);
        assert!(resumed.dice().is_locked(0));
    }

    #[test]
    fn unreadable_save_starts_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.json");
        std::fs::write(&path, "{broken").unwrap();
        let config = Config {
            seed: Some(8),
            save_path: Some(path),
            log_path: None,
        };

        let game = Game::start(&config);
        assert_eq!(game.roll_count(), 1);
    }

    #[test]
    fn save_without_path_reports_message() {
        let mut game = Game::new(&seeded());
        press(&mut game, KeyCode::Char('s'));
        assert!(game.status().message.unwrap().contains("KNIFFEL_SAVE_PATH"));
        assert!(game.save().is_ok());
    }
}
