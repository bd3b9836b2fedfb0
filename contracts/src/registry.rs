//! Participant registry for the current round.
//!
//! An ordered list of tickets in entry order. The same address may hold
//! several tickets; each one is an independent chance to win.
//!
//! The list is a single persistent entry, so its serialized size is bounded
//! by the ledger-entry size limit (64 KiB). `MAX_PLAYERS` keeps it well under
//! that: an address serializes to at most 44 bytes.

use soroban_sdk::{Address, Env, Vec};

use crate::errors::RaffleError;
use crate::storage::bump_persistent;
use crate::types::DataKey;

/// Tickets accepted per round.
pub const MAX_PLAYERS: u32 = 1_000;

pub fn players(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Players)
        .unwrap_or(Vec::new(env))
}

pub fn count(env: &Env) -> u32 {
    players(env).len()
}

pub fn get(env: &Env, index: u32) -> Option<Address> {
    players(env).get(index)
}

pub fn append(env: &Env, player: &Address) -> Result<(), RaffleError> {
    let mut players = players(env);
    if players.len() >= MAX_PLAYERS {
        return Err(RaffleError::RoundFull);
    }
    players.push_back(player.clone());
    env.storage().persistent().set(&DataKey::Players, &players);
    bump_persistent(env, &DataKey::Players);
    Ok(())
}

pub fn clear(env: &Env) {
    env.storage().persistent().remove(&DataKey::Players);
}
