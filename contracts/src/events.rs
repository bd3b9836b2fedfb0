//! Events published on every round transition.

use soroban_sdk::{contractevent, Address};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RaffleEntered {
    #[topic]
    pub player: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RequestedRaffleWinner {
    #[topic]
    pub request_id: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WinnerPicked {
    #[topic]
    pub winner: Address,
    pub amount: i128,
}

/// The payout transfer was rejected and the pot is held for the winner.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PayoutDeferred {
    #[topic]
    pub winner: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PayoutWithdrawn {
    #[topic]
    pub winner: Address,
    pub amount: i128,
}
