//! Core contract implementation for the raffle.

use soroban_sdk::{
    contract, contractimpl, log, panic_with_error, token::TokenClient, Address, Bytes, Env, Vec,
};

use crate::errors::RaffleError;
use crate::events::{RaffleEntered, RequestedRaffleWinner, WinnerPicked};
use crate::gate;
use crate::payout::{self, Payout};
use crate::registry;
use crate::storage;
use crate::types::{RaffleConfig, RaffleState, Round, UpkeepStatus};
use crate::vrf::{
    AutomationCompatibleInterface, VrfConsumerInterface, VrfCoordinatorClient, NUM_WORDS,
    REQUEST_CONFIRMATIONS,
};

#[contract]
pub struct RaffleContract;

#[contractimpl]
impl RaffleContract {
    /// Deploys the raffle with its fixed parameters and opens the first round.
    pub fn __constructor(env: Env, config: RaffleConfig) {
        if config.entrance_fee <= 0 {
            panic_with_error!(&env, RaffleError::InvalidEntranceFee);
        }
        if config.interval == 0 {
            panic_with_error!(&env, RaffleError::InvalidInterval);
        }

        storage::write_config(&env, &config);
        storage::write_round(
            &env,
            &Round {
                state: RaffleState::Open,
                last_timestamp: env.ledger().timestamp(),
                pending_request_id: None,
                number: 1,
            },
        );
        storage::bump_round_state(&env);
    }

    /// Buys one ticket for the current round.
    ///
    /// Anything paid above the entrance fee stays in the pot. Once the round
    /// holds `MAX_PLAYERS` tickets further entries fail with `RoundFull`.
    pub fn enter_raffle(env: Env, player: Address, payment: i128) -> Result<(), RaffleError> {
        player.require_auth();

        let config = storage::read_config(&env);
        if payment < config.entrance_fee {
            return Err(RaffleError::InsufficientPayment);
        }

        let round = storage::read_round(&env);
        if round.state != RaffleState::Open {
            return Err(RaffleError::RoundNotOpen);
        }

        TokenClient::new(&env, &config.token).transfer(
            &player,
            &env.current_contract_address(),
            &payment,
        );
        registry::append(&env, &player)?;
        storage::bump_round_state(&env);

        log!(&env, "raffle entered", player.clone(), payment);
        RaffleEntered { player }.publish(&env);

        Ok(())
    }

    /// Pays out a payout that was held because its transfer was rejected.
    pub fn withdraw_payout(env: Env, winner: Address) -> Result<i128, RaffleError> {
        winner.require_auth();

        let config = storage::read_config(&env);
        let amount = payout::withdraw(&env, &config.token, &winner)?;
        storage::bump_round_state(&env);

        Ok(amount)
    }

    pub fn get_entrance_fee(env: Env) -> i128 {
        storage::read_config(&env).entrance_fee
    }

    pub fn get_interval(env: Env) -> u64 {
        storage::read_config(&env).interval
    }

    pub fn get_config(env: Env) -> RaffleConfig {
        storage::read_config(&env)
    }

    pub fn get_raffle_state(env: Env) -> RaffleState {
        storage::read_round(&env).state
    }

    pub fn get_number_of_players(env: Env) -> u32 {
        registry::count(&env)
    }

    /// Returns the ticket holder at `index` in entry order.
    pub fn get_player(env: Env, index: u32) -> Option<Address> {
        registry::get(&env, index)
    }

    /// Returns the winner of the most recently resolved round.
    pub fn get_recent_winner(env: Env) -> Option<Address> {
        storage::read_recent_winner(&env)
    }

    pub fn get_last_timestamp(env: Env) -> u64 {
        storage::read_round(&env).last_timestamp
    }

    pub fn get_pending_request_id(env: Env) -> Option<u64> {
        storage::read_round(&env).pending_request_id
    }

    pub fn get_round_number(env: Env) -> u32 {
        storage::read_round(&env).number
    }

    /// Returns the amount the next winner would receive.
    pub fn get_pot(env: Env) -> Result<i128, RaffleError> {
        let config = storage::read_config(&env);
        payout::pot(&env, &config.token)
    }

    /// Returns the payout held for `winner`, if any.
    pub fn get_unclaimed_payout(env: Env, winner: Address) -> i128 {
        payout::unclaimed(&env, &winner)
    }

    pub fn get_num_words(_env: Env) -> u32 {
        NUM_WORDS
    }

    pub fn get_request_confirmations(_env: Env) -> u32 {
        REQUEST_CONFIRMATIONS
    }

    pub fn get_max_players(_env: Env) -> u32 {
        registry::MAX_PLAYERS
    }

    fn upkeep_status(env: &Env, config: &RaffleConfig, round: &Round) -> UpkeepStatus {
        // A pot that cannot be computed counts as empty.
        let pot = payout::pot(env, &config.token).unwrap_or(0);
        gate::evaluate(
            round,
            config.interval,
            env.ledger().timestamp(),
            registry::count(env),
            pot,
        )
    }
}

#[contractimpl]
impl AutomationCompatibleInterface for RaffleContract {
    /// Reports whether a draw is due. Read-only.
    fn check_upkeep(env: Env, _check_data: Bytes) -> UpkeepStatus {
        let config = storage::read_config(&env);
        let round = storage::read_round(&env);
        Self::upkeep_status(&env, &config, &round)
    }

    /// Closes entry and asks the coordinator for randomness.
    ///
    /// Open to any caller; the draw conditions are re-checked here, so an
    /// early or repeated trigger fails with `UpkeepNotNeeded`.
    fn perform_upkeep(env: Env, _perform_data: Bytes) -> Result<(), RaffleError> {
        let config = storage::read_config(&env);
        let mut round = storage::read_round(&env);

        if !Self::upkeep_status(&env, &config, &round).upkeep_needed {
            return Err(RaffleError::UpkeepNotNeeded);
        }

        let request_id = VrfCoordinatorClient::new(&env, &config.coordinator).request_random_words(
            &env.current_contract_address(),
            &config.key_hash,
            &config.subscription_id,
            &REQUEST_CONFIRMATIONS,
            &config.callback_gas_limit,
            &NUM_WORDS,
        );

        round.state = RaffleState::Calculating;
        round.pending_request_id = Some(request_id);
        storage::write_round(&env, &round);
        storage::bump_round_state(&env);

        log!(&env, "draw requested", request_id);
        RequestedRaffleWinner { request_id }.publish(&env);

        Ok(())
    }
}

#[contractimpl]
impl VrfConsumerInterface for RaffleContract {
    /// Resolves the round for the outstanding request.
    ///
    /// Only the configured coordinator may call this, and only with the id
    /// it returned from the pending request. The round is reset before the
    /// pot leaves the contract.
    fn fulfill_random_words(
        env: Env,
        request_id: u64,
        random_words: Vec<u64>,
    ) -> Result<(), RaffleError> {
        let config = storage::read_config(&env);
        config.coordinator.require_auth();

        let mut round = storage::read_round(&env);
        if round.pending_request_id != Some(request_id) {
            return Err(RaffleError::UnknownRequest);
        }

        let word = random_words.get(0).ok_or(RaffleError::NoRandomWords)?;
        let players = registry::players(&env);
        if players.is_empty() {
            return Err(RaffleError::NoPlayers);
        }
        let winner_index = (word % u64::from(players.len())) as u32;
        let winner = players.get(winner_index).ok_or(RaffleError::NoPlayers)?;

        registry::clear(&env);
        round.state = RaffleState::Open;
        round.pending_request_id = None;
        round.last_timestamp = env.ledger().timestamp();
        round.number = round.number.checked_add(1).ok_or(RaffleError::Overflow)?;
        storage::write_round(&env, &round);
        storage::write_recent_winner(&env, &winner);
        storage::bump_round_state(&env);

        let amount = payout::pot(&env, &config.token)?;
        if payout::pay_winner(&env, &config.token, &winner, amount)? == Payout::Delivered {
            log!(&env, "winner paid", winner.clone(), amount);
        }

        WinnerPicked { winner, amount }.publish(&env);

        Ok(())
    }
}
