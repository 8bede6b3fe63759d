//! Screen composition: the dice column plus a side panel.
//!
//! Pure (no I/O), so layout can be unit-tested without a terminal.

use crate::dice_set::DiceSet;
use crate::fb::{CellStyle, FrameBuffer, Rgb};

const PANEL_GAP: u16 = 3;

const HINTS: [&str; 6] = [
    "up/down  select",
    "enter    lock",
    "r        roll",
    "n        new turn",
    "s        save",
    "q        quit",
];

/// What the side panel shows next to the dice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub roll_count: u32,
    pub max_rolls: u32,
    pub message: Option<String>,
}

impl StatusLine {
    pub fn new(roll_count: u32, max_rolls: u32) -> Self {
        Self {
            roll_count,
            max_rolls,
            message: None,
        }
    }

    pub fn rolls_text(&self) -> String {
        format!("Roll {}/{}", self.roll_count, self.max_rolls)
    }
}

/// Compose the full screen into `fb`, resized to `width` x `height`.
///
/// The dice column and panel are centred as a block; anything that does not
/// fit is clipped.
pub fn compose_screen(
    dice: &DiceSet,
    status: &StatusLine,
    width: u16,
    height: u16,
    fb: &mut FrameBuffer,
) {
    fb.resize(width, height);
    fb.clear(CellStyle::default().into_cell(' '));

    let surface = dice.surface();
    let panel_w = HINTS.iter().map(|h| h.len() as u16).max().unwrap_or(0);
    let block_w = surface.width() + PANEL_GAP + panel_w;

    let start_x = width.saturating_sub(block_w) / 2;
    let start_y = height.saturating_sub(surface.height()) / 2;

    fb.blit(surface, start_x, start_y);

    let title = CellStyle::fg(Rgb::new(240, 220, 80)).bolded();
    let text = CellStyle::default();
    let hint = CellStyle {
        dim: true,
        ..CellStyle::default()
    };

    let px = start_x + surface.width() + PANEL_GAP;
    fb.put_str(px, start_y, "KNIFFEL", title);
    fb.put_str(px, start_y + 2, &status.rolls_text(), text);
    for (i, line) in HINTS.iter().enumerate() {
        fb.put_str(px, start_y + 4 + i as u16, line, hint);
    }
    if let Some(message) = &status.message {
        let y = start_y + 5 + HINTS.len() as u16;
        fb.put_str(px, y, message, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Entropy;

    fn screen_text(fb: &FrameBuffer) -> String {
        let mut all = String::new();
        for y in 0..fb.height() {
            all.push_str(&fb.row_text(y));
            all.push('\n');
        }
        all
    }

    #[test]
    fn dice_column_is_blitted_at_block_origin() {
        let mut set = DiceSet::with_entropy(Entropy::Seed(3));
        set.set_dice([1, 1, 1, 1, 1]);
        let mut fb = FrameBuffer::new(1, 1);

        compose_screen(&set, &StatusLine::new(1, 3), 40, 25, &mut fb);

        assert_eq!((fb.width(), fb.height()), (40, 25));
        let panel_w = HINTS.iter().map(|h| h.len() as u16).max().unwrap();
        let x0 = (40 - (9 + PANEL_GAP + panel_w)) / 2;
        assert_eq!(fb.get(x0, 0).unwrap().ch, '-');
        assert_eq!(fb.get(x0 + 4, 2).unwrap().ch, '¤');
    }

    #[test]
    fn panel_shows_roll_count_and_message() {
        let set = DiceSet::with_entropy(Entropy::Seed(3));
        let mut status = StatusLine::new(2, 3);
        status.message = Some("saved".to_string());
        let mut fb = FrameBuffer::new(1, 1);

        compose_screen(&set, &status, 60, 30, &mut fb);

        let all = screen_text(&fb);
        assert!(all.contains("KNIFFEL"));
        assert!(all.contains("Roll 2/3"));
        assert!(all.contains("saved"));
    }

    #[test]
    fn tiny_viewport_clips_without_panicking() {
        let set = DiceSet::with_entropy(Entropy::Seed(3));
        let mut fb = FrameBuffer::new(1, 1);
        compose_screen(&set, &StatusLine::new(0, 3), 5, 3, &mut fb);
        assert_eq!(fb.row_text(0), "-----");
    }
}
