//! DiceSet: the five dice, the selection cursor, and their painted surface.
//!
//! The set owns its surface and repaints it after every state change, so the
//! caller only ever needs to blit [`DiceSet::surface`] onto the screen.
//!
//! | Event | Effect |
//! |-------|--------|
//! | `MovePrevious` | `selected = (selected - 1) mod 5` |
//! | `MoveNext` | `selected = (selected + 1) mod 5` |
//! | `Confirm` | toggle the lock on the selected die |
//! | `Redraw` / `Char` | repaint only |
//!
//! Dice are stacked top to bottom in index order.

use thiserror::Error;
use tracing::debug;

use crate::core::{Dice, Entropy};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::pips::{outline_glyph, pip_offsets, PIP};
use crate::types::{InputEvent, DICE_COUNT, DIE_HEIGHT, DIE_WIDTH};

/// Foreground used for locked dice.
pub const LOCKED_FG: Rgb = Rgb::new(255, 176, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DiceSetError {
    #[error("dice index {0} out of range")]
    IndexOutOfRange(usize),
}

pub struct DiceSet {
    dice: [Dice; DICE_COUNT],
    selected: usize,
    surface: FrameBuffer,
}

impl DiceSet {
    /// A set of freshly rolled dice with the cursor on the first die.
    pub fn new() -> Self {
        Self::with_entropy(Entropy::Process)
    }

    /// Like [`DiceSet::new`], with the initial faces drawn from `entropy`.
    pub fn with_entropy(entropy: Entropy) -> Self {
        let mut rng = entropy.rng();
        let dice = std::array::from_fn(|_| {
            let mut die = Dice::default();
            die.roll_with(&mut rng);
            die
        });
        let (height, width) = Self::get_required_size();
        let mut set = Self {
            dice,
            selected: 0,
            surface: FrameBuffer::new(width, height),
        };
        set.render();
        set
    }

    /// `(height, width)` of the surface needed to draw all five dice.
    pub const fn get_required_size() -> (u16, u16) {
        (DIE_HEIGHT * DICE_COUNT as u16, DIE_WIDTH)
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn surface(&self) -> &FrameBuffer {
        &self.surface
    }

    pub fn dice(&self) -> &[Dice; DICE_COUNT] {
        &self.dice
    }

    /// Set all five faces directly, ignoring locks.
    pub fn set_dice(&mut self, values: [u8; DICE_COUNT]) {
        for (die, value) in self.dice.iter_mut().zip(values) {
            die.set_value(value);
        }
        self.render();
    }

    pub fn get_dice(&self) -> [u8; DICE_COUNT] {
        self.dice.map(|die| die.value())
    }

    /// Roll every unlocked die.
    pub fn roll(&mut self, entropy: Entropy) {
        let mut rng = entropy.rng();
        for die in self.dice.iter_mut() {
            die.roll_with(&mut rng);
        }
        debug!(dice = ?self.get_dice(), seeded = entropy.is_seeded(), "rolled");
        self.render();
    }

    pub fn lock_dice(&mut self, index: usize, locked: bool) -> Result<(), DiceSetError> {
        let Some(die) = self.dice.get_mut(index) else {
            debug!(index, "rejected lock on missing die");
            return Err(DiceSetError::IndexOutOfRange(index));
        };
        die.lock(locked);
        self.render();
        Ok(())
    }

    /// Lock flag of die `index`; `false` when there is no such die.
    pub fn is_locked(&self, index: usize) -> bool {
        self.dice.get(index).is_some_and(Dice::is_locked)
    }

    pub fn unlock_all(&mut self) {
        for die in self.dice.iter_mut() {
            die.lock(false);
        }
        self.render();
    }

    /// Copy of the dice for a persisted game state.
    pub fn dice_snapshot(&self) -> Vec<Dice> {
        self.dice.to_vec()
    }

    /// Take dice from a persisted game state.
    ///
    /// Only the first five entries are used; missing entries leave the
    /// current die in place.
    pub fn restore(&mut self, dice: &[Dice]) {
        for (slot, die) in self.dice.iter_mut().zip(dice) {
            *slot = *die;
        }
        self.render();
    }

    /// Apply one input event and repaint.
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::MovePrevious => {
                self.selected = (self.selected + DICE_COUNT - 1) % DICE_COUNT;
            }
            InputEvent::MoveNext => {
                self.selected = (self.selected + 1) % DICE_COUNT;
            }
            InputEvent::Confirm => {
                self.dice[self.selected].toggle_lock();
            }
            InputEvent::Redraw | InputEvent::Char(_) => {}
        }
        self.render();
    }

    /// Paint every die onto the surface from scratch.
    pub fn render(&mut self) {
        self.surface.clear(CellStyle::default().into_cell(' '));

        for (i, die) in self.dice.iter().enumerate() {
            let style = self.die_style(i, die);
            let y0 = DIE_HEIGHT * i as u16;

            for dy in 0..DIE_HEIGHT {
                for dx in 0..DIE_WIDTH {
                    self.surface.put_char(dx, y0 + dy, outline_glyph(dx, dy), style);
                }
            }
            for &(dx, dy) in pip_offsets(die.value()) {
                self.surface.put_char(dx, y0 + dy, PIP, style);
            }
        }
    }

    fn die_style(&self, index: usize, die: &Dice) -> CellStyle {
        let mut style = if die.is_locked() {
            CellStyle::fg(LOCKED_FG)
        } else {
            CellStyle::default()
        };
        if index == self.selected {
            style = style.bolded().inverted();
        }
        style
    }
}

impl Default for DiceSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn die_rows(set: &DiceSet, index: u16) -> Vec<String> {
        (0..DIE_HEIGHT)
            .map(|dy| set.surface().row_text(index * DIE_HEIGHT + dy))
            .collect()
    }

    #[test]
    fn surface_matches_required_size() {
        let set = DiceSet::with_entropy(Entropy::Seed(1));
        let (h, w) = DiceSet::get_required_size();
        assert_eq!((h, w), (25, 9));
        assert_eq!(set.surface().height(), h);
        assert_eq!(set.surface().width(), w);
    }

    #[test]
    fn faces_follow_the_pip_table() {
        let mut set = DiceSet::with_entropy(Entropy::Seed(1));
        set.set_dice([2, 3, 4, 5, 6]);

        assert_eq!(
            die_rows(&set, 0),
            ["---------", "! ¤     !", "!       !", "!     ¤ !", "---------"]
        );
        assert_eq!(
            die_rows(&set, 1),
            ["---------", "! ¤     !", "!   ¤   !", "!     ¤ !", "---------"]
        );
        assert_eq!(
            die_rows(&set, 2),
            ["---------", "! ¤   ¤ !", "!       !", "! ¤   ¤ !", "---------"]
        );
        assert_eq!(
            die_rows(&set, 3),
            ["---------", "! ¤   ¤ !", "!   ¤   !", "! ¤   ¤ !", "---------"]
        );
        assert_eq!(
            die_rows(&set, 4),
            ["---------", "! ¤   ¤ !", "! ¤   ¤ !", "! ¤   ¤ !", "---------"]
        );
    }

    #[test]
    fn selected_die_is_bold_and_inverted() {
        let mut set = DiceSet::with_entropy(Entropy::Seed(1));
        set.handle_input(InputEvent::MoveNext);

        let selected = set.surface().get(0, DIE_HEIGHT).unwrap().style;
        let other = set.surface().get(0, 0).unwrap().style;
        assert!(selected.bold);
        assert_eq!(selected, CellStyle::default().bolded().inverted());
        assert_eq!(other, CellStyle::default());
    }

    #[test]
    fn locked_die_uses_lock_color_regardless_of_selection() {
        let mut set = DiceSet::with_entropy(Entropy::Seed(1));
        set.lock_dice(0, true).unwrap();
        set.lock_dice(2, true).unwrap();

        let selected_locked = set.surface().get(0, 0).unwrap().style;
        assert_eq!(selected_locked, CellStyle::fg(LOCKED_FG).bolded().inverted());

        let locked = set.surface().get(0, 2 * DIE_HEIGHT).unwrap().style;
        assert_eq!(locked.fg, LOCKED_FG);
        assert!(!locked.bold);
    }

    #[test]
    fn lock_out_of_range_is_rejected_without_change() {
        let mut set = DiceSet::with_entropy(Entropy::Seed(1));
        let before = set.surface().clone();

        assert_eq!(
            set.lock_dice(5, true),
            Err(DiceSetError::IndexOutOfRange(5))
        );
        assert!(!set.is_locked(5));
        assert!((0..DICE_COUNT).all(|i| !set.is_locked(i)));
        assert_eq!(set.surface(), &before);
    }

    #[test]
    fn restore_takes_at_most_five_dice() {
        let mut set = DiceSet::with_entropy(Entropy::Seed(1));
        set.set_dice([6, 6, 6, 6, 6]);

        let mut locked = Dice::with_value(2);
        locked.lock(true);
        set.restore(&[Dice::with_value(1), locked]);

        assert_eq!(set.get_dice(), [1, 2, 6, 6, 6]);
        assert!(set.is_locked(1));
        assert_eq!(set.dice_snapshot()[1], locked);
        assert_eq!(set.dice_snapshot().len(), DICE_COUNT);
    }

    #[test]
    fn unlock_all_clears_every_lock() {
        let mut set = DiceSet::with_entropy(Entropy::Seed(1));
        for i in 0..DICE_COUNT {
            set.lock_dice(i, true).unwrap();
        }
        set.unlock_all();
        assert!((0..DICE_COUNT).all(|i| !set.is_locked(i)));
    }
}
