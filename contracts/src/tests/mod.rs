//! Test modules for the raffle contract.

mod common;
mod upkeep;
