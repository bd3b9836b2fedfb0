//! Storage accessors for the raffle singleton.
//!
//! Config lives in instance storage: small, written once at deployment.
//! Round data lives in persistent storage. Every mutating call extends the
//! TTL of the round entries through `bump_round_state`, so a round that keeps
//! taking entries between draws never expires.

use soroban_sdk::{panic_with_error, Address, Env};

use crate::errors::RaffleError;
use crate::types::{DataKey, RaffleConfig, Round};

/// Instance TTL in ledgers (~30 days at 5s/ledger).
pub const INSTANCE_BUMP_LEDGERS: u32 = 518_400;
/// Extend once fewer than this many ledgers remain (~7 days).
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = 120_960;

pub const PERSISTENT_BUMP_LEDGERS: u32 = 518_400;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = 120_960;

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_LEDGERS);
}

pub fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage().persistent().extend_ttl(
        key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_LEDGERS,
    );
}

/// Extends the instance and every round-wide persistent entry that exists.
pub fn bump_round_state(env: &Env) {
    bump_instance(env);
    for key in [
        DataKey::Round,
        DataKey::Players,
        DataKey::RecentWinner,
        DataKey::ReservedPayouts,
    ] {
        if env.storage().persistent().has(&key) {
            bump_persistent(env, &key);
        }
    }
}

pub fn read_config(env: &Env) -> RaffleConfig {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_else(|| panic_with_error!(env, RaffleError::NotInitialized))
}

pub fn write_config(env: &Env, config: &RaffleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn read_round(env: &Env) -> Round {
    env.storage()
        .persistent()
        .get(&DataKey::Round)
        .unwrap_or_else(|| panic_with_error!(env, RaffleError::NotInitialized))
}

pub fn write_round(env: &Env, round: &Round) {
    env.storage().persistent().set(&DataKey::Round, round);
    bump_persistent(env, &DataKey::Round);
}

pub fn read_recent_winner(env: &Env) -> Option<Address> {
    env.storage().persistent().get(&DataKey::RecentWinner)
}

pub fn write_recent_winner(env: &Env, winner: &Address) {
    env.storage().persistent().set(&DataKey::RecentWinner, winner);
    bump_persistent(env, &DataKey::RecentWinner);
}
