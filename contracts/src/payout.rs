//! Pot accounting and winner payouts.
//!
//! The pot is the contract's token balance minus payouts that are being held
//! for past winners whose transfer was rejected. Held payouts never count
//! toward the next round's pot.

use soroban_sdk::{log, token::TokenClient, Address, Env};

use crate::errors::RaffleError;
use crate::events::{PayoutDeferred, PayoutWithdrawn};
use crate::storage::bump_persistent;
use crate::types::DataKey;

/// Outcome of paying a winner.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Payout {
    Delivered,
    Deferred,
}

pub fn reserved(env: &Env) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::ReservedPayouts)
        .unwrap_or(0)
}

fn write_reserved(env: &Env, amount: i128) {
    if amount == 0 {
        env.storage().persistent().remove(&DataKey::ReservedPayouts);
    } else {
        env.storage().persistent().set(&DataKey::ReservedPayouts, &amount);
        bump_persistent(env, &DataKey::ReservedPayouts);
    }
}

pub fn unclaimed(env: &Env, winner: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::UnclaimedPayout(winner.clone()))
        .unwrap_or(0)
}

/// Current pot held for the open round.
pub fn pot(env: &Env, token: &Address) -> Result<i128, RaffleError> {
    let balance = TokenClient::new(env, token).balance(&env.current_contract_address());
    balance
        .checked_sub(reserved(env))
        .ok_or(RaffleError::Overflow)
}

/// Sends `amount` to the winner. A rejected transfer is booked as an
/// unclaimed payout instead of failing the round.
pub fn pay_winner(
    env: &Env,
    token: &Address,
    winner: &Address,
    amount: i128,
) -> Result<Payout, RaffleError> {
    if amount <= 0 {
        return Ok(Payout::Delivered);
    }

    let client = TokenClient::new(env, token);
    let result = client.try_transfer(&env.current_contract_address(), winner, &amount);
    if matches!(result, Ok(Ok(()))) {
        return Ok(Payout::Delivered);
    }

    let key = DataKey::UnclaimedPayout(winner.clone());
    let owed = unclaimed(env, winner)
        .checked_add(amount)
        .ok_or(RaffleError::Overflow)?;
    env.storage().persistent().set(&key, &owed);
    bump_persistent(env, &key);

    let total = reserved(env)
        .checked_add(amount)
        .ok_or(RaffleError::Overflow)?;
    write_reserved(env, total);

    log!(env, "payout deferred", winner.clone(), amount);
    PayoutDeferred {
        winner: winner.clone(),
        amount,
    }
    .publish(env);

    Ok(Payout::Deferred)
}

/// Retries a deferred payout. Returns the amount sent, or 0 when nothing is owed.
pub fn withdraw(env: &Env, token: &Address, winner: &Address) -> Result<i128, RaffleError> {
    let amount = unclaimed(env, winner);
    if amount == 0 {
        return Ok(0);
    }

    env.storage()
        .persistent()
        .remove(&DataKey::UnclaimedPayout(winner.clone()));
    let total = reserved(env)
        .checked_sub(amount)
        .ok_or(RaffleError::Overflow)?;
    write_reserved(env, total);

    let client = TokenClient::new(env, token);
    match client.try_transfer(&env.current_contract_address(), winner, &amount) {
        Ok(Ok(())) => {}
        _ => return Err(RaffleError::TransferFailed),
    }

    log!(env, "payout withdrawn", winner.clone(), amount);
    PayoutWithdrawn {
        winner: winner.clone(),
        amount,
    }
    .publish(env);

    Ok(amount)
}
