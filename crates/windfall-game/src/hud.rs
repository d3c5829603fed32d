//! Console HUD: currency display and a compact status line.

use tracing::info;
use windfall_sim::{SimulationState, UiDisplay};

/// A [`UiDisplay`] that narrates UI changes to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleDisplay;

impl UiDisplay for ConsoleDisplay {
    fn set_uncollected(&mut self, amount: f64) {
        info!("jackpot now ${amount:.0}");
    }

    fn set_collected(&mut self, amount: u64) {
        info!("bank now ${}", format_with_commas(amount));
    }

    fn show_prompt(&mut self) {
        info!("[F] pull the lever");
    }

    fn hide_prompt(&mut self) {
        info!("prompt hidden");
    }
}

/// Formats a compact status line for periodic logging.
///
/// Example: `POS: (0.0, 1.6, -1.4) | SPD: 3.2 | FLOOR | JACKPOT: $50 | BANK: $100`
pub fn format_hud(state: &SimulationState) -> String {
    let pos = state.player.eye_position();
    let speed = state.player.velocity.length();
    let floor = if state.player.on_floor { "FLOOR" } else { "AIR" };
    format!(
        "POS: ({:.1}, {:.1}, {:.1}) | SPD: {:.1} | {} | JACKPOT: ${:.0} | BANK: ${}",
        pos.x,
        pos.y,
        pos.z,
        speed,
        floor,
        state.ledger.uncollected(),
        format_with_commas(state.ledger.collected()),
    )
}

/// Format an integer with comma thousands separators.
fn format_with_commas(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}
