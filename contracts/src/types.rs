//! Type definitions for the raffle.

use soroban_sdk::{contracttype, Address, BytesN};

/// Storage keys for contract data
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    Round,
    Players,
    RecentWinner,
    UnclaimedPayout(Address),
    ReservedPayouts,
}

/// Whether the current round accepts entries
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum RaffleState {
    Open = 0,
    Calculating = 1,
}

/// Deployment parameters, fixed for the lifetime of the contract
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct RaffleConfig {
    pub entrance_fee: i128,      // Minimum payment per ticket, in token units
    pub interval: u64,           // Minimum seconds between draws
    pub token: Address,          // Token the fee is paid in and the pot is held in
    pub coordinator: Address,    // VRF coordinator allowed to call back
    pub key_hash: BytesN<32>,    // VRF gas lane
    pub subscription_id: u64,
    pub callback_gas_limit: u32,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Round {
    pub state: RaffleState,
    pub last_timestamp: u64,            // Ledger timestamp of the last resolution
    pub pending_request_id: Option<u64>,
    pub number: u32,                    // 1-based index of the current round
}

/// Result of the upkeep check, with each condition reported separately
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpkeepStatus {
    pub upkeep_needed: bool,
    pub is_open: bool,
    pub time_passed: bool,
    pub has_players: bool,
    pub has_balance: bool,
}
