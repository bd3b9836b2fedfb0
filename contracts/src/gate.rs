//! Condition gate deciding whether a draw may start.

use crate::types::{RaffleState, Round, UpkeepStatus};

/// Evaluates the draw conditions without touching storage.
///
/// A draw is due only when the round is open, `interval` seconds have
/// elapsed since the last resolution, at least one ticket is registered and
/// the pot holds funds. Every condition is reported so a keeper can tell
/// which one failed.
pub fn evaluate(round: &Round, interval: u64, now: u64, player_count: u32, pot: i128) -> UpkeepStatus {
    let is_open = round.state == RaffleState::Open;
    let time_passed = now.saturating_sub(round.last_timestamp) >= interval;
    let has_players = player_count > 0;
    let has_balance = pot > 0;

    UpkeepStatus {
        upkeep_needed: is_open && time_passed && has_players && has_balance,
        is_open,
        time_passed,
        has_players,
        has_balance,
    }
}
