#![no_std]
//! # Autonomous Raffle
//!
//! Soroban raffle drawn by an automation network and settled with
//! verifiable randomness. Players buy fixed-price tickets; when the draw is
//! due a keeper triggers a randomness request, and the coordinator's callback
//! picks the winner and pays out the whole pot.
//!
//! ## Key Features
//! - Two-phase draw correlated by the coordinator's request id
//! - Entry blocked while a draw is in flight
//! - Callback accepted only from the configured coordinator
//! - Rejected payouts held for the winner instead of lost

mod contract;
mod errors;
mod events;
mod gate;
mod payout;
mod registry;
mod storage;
mod types;
mod vrf;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

#[cfg(test)]
mod tests;

pub use contract::{RaffleContract, RaffleContractArgs, RaffleContractClient};
pub use errors::RaffleError;
pub use events::{PayoutDeferred, PayoutWithdrawn, RaffleEntered, RequestedRaffleWinner, WinnerPicked};
pub use types::{DataKey, RaffleConfig, RaffleState, Round, UpkeepStatus};
pub use vrf::{
    AutomationClient, AutomationCompatibleInterface, VrfConsumerClient, VrfConsumerInterface,
    VrfCoordinatorClient, VrfCoordinatorInterface, NUM_WORDS, REQUEST_CONFIRMATIONS,
};
