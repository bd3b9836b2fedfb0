//! Contract error types for the raffle.

use soroban_sdk::contracterror;

/// Contract error types
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RaffleError {
    /// Payment is below the entrance fee
    InsufficientPayment = 1,
    /// Entry is closed while a draw is in flight
    RoundNotOpen = 2,
    /// Draw conditions are not met
    UpkeepNotNeeded = 3,
    /// Callback does not match the outstanding randomness request
    UnknownRequest = 4,
    /// Token transfer to the winner was rejected
    TransferFailed = 5,
    /// Entrance fee must be greater than zero
    InvalidEntranceFee = 6,
    /// Interval must be greater than zero
    InvalidInterval = 7,
    /// Fulfillment carried no random words
    NoRandomWords = 8,
    /// Registry is empty at resolution time
    NoPlayers = 9,
    /// Arithmetic overflow occurred
    Overflow = 10,
    /// Config or round missing from storage
    NotInitialized = 11,
    /// Ticket list is at capacity for this round
    RoundFull = 12,
}
