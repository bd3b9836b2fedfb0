//! Interfaces for the verifiable randomness oracle and the keeper network.
//!
//! A draw is a two-phase exchange with the coordinator: the raffle calls
//! `request_random_words` and gets back a correlation id, then at some later
//! ledger the coordinator calls the raffle's `fulfill_random_words` with that
//! id and the random words. Nothing is held in memory between the two calls;
//! the pending id in storage is the only link.

use soroban_sdk::{contractclient, Address, Bytes, BytesN, Env, Vec};

use crate::errors::RaffleError;
use crate::types::UpkeepStatus;

/// Random words requested per draw.
pub const NUM_WORDS: u32 = 1;
/// Confirmations the coordinator waits before answering.
pub const REQUEST_CONFIRMATIONS: u32 = 3;

/// Oracle side of the exchange.
#[contractclient(name = "VrfCoordinatorClient")]
pub trait VrfCoordinatorInterface {
    /// Registers a request on behalf of `consumer` and returns its id.
    /// The coordinator answers later through `fulfill_random_words`.
    fn request_random_words(
        env: Env,
        consumer: Address,
        key_hash: BytesN<32>,
        subscription_id: u64,
        minimum_request_confirmations: u32,
        callback_gas_limit: u32,
        num_words: u32,
    ) -> u64;
}

/// Callback a randomness consumer exposes to the coordinator.
#[contractclient(name = "VrfConsumerClient")]
pub trait VrfConsumerInterface {
    fn fulfill_random_words(
        env: Env,
        request_id: u64,
        random_words: Vec<u64>,
    ) -> Result<(), RaffleError>;
}

/// Check/perform pair polled by an automation network.
#[contractclient(name = "AutomationClient")]
pub trait AutomationCompatibleInterface {
    fn check_upkeep(env: Env, check_data: Bytes) -> UpkeepStatus;

    fn perform_upkeep(env: Env, perform_data: Bytes) -> Result<(), RaffleError>;
}
