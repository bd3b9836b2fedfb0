//! Tests for the draw gate and the keeper trigger.

use super::common::{setup, ENTRANCE_FEE, INTERVAL};
use crate::errors::RaffleError;
use crate::events::RequestedRaffleWinner;
use crate::types::RaffleState;
use crate::vrf::AutomationClient;
use soroban_sdk::{testutils::Events as _, Event};

#[test]
fn test_check_upkeep_false_without_players_or_balance() {
    let t = setup();
    t.advance(INTERVAL + 1);

    let status = t.raffle.check_upkeep(&t.no_data());
    assert!(!status.upkeep_needed);
    assert!(status.is_open);
    assert!(status.time_passed);
    assert!(!status.has_players);
    assert!(!status.has_balance);
}

#[test]
fn test_check_upkeep_false_before_interval() {
    let t = setup();
    let player = t.player();
    t.raffle.enter_raffle(&player, &ENTRANCE_FEE);

    t.advance(INTERVAL - 5);

    let status = t.raffle.check_upkeep(&t.no_data());
    assert!(!status.upkeep_needed);
    assert!(!status.time_passed);
    assert!(status.has_players && status.has_balance);
}

#[test]
fn test_check_upkeep_true_exactly_at_interval() {
    let t = setup();
    let player = t.player();
    t.raffle.enter_raffle(&player, &ENTRANCE_FEE);

    t.advance(INTERVAL);

    assert!(t.raffle.check_upkeep(&t.no_data()).upkeep_needed);
}

#[test]
fn test_check_upkeep_false_while_calculating() {
    let t = setup();
    let player = t.player();
    t.start_draw(&[&player]);

    let status = t.raffle.check_upkeep(&t.no_data());
    assert_eq!(t.raffle.get_raffle_state(), RaffleState::Calculating);
    assert!(!status.upkeep_needed);
    assert!(!status.is_open);
}

#[test]
fn test_check_upkeep_false_with_balance_but_no_players() {
    let t = setup();

    // Funds sent straight to the contract do not make a draw due.
    t.minter.mint(&t.raffle_id, &ENTRANCE_FEE);
    t.advance(INTERVAL + 1);

    let status = t.raffle.check_upkeep(&t.no_data());
    assert!(!status.upkeep_needed);
    assert!(status.has_balance);
    assert!(!status.has_players);
}

#[test]
fn test_perform_upkeep_fails_when_not_needed() {
    let t = setup();

    let result = t.raffle.try_perform_upkeep(&t.no_data());
    assert_eq!(result, Err(Ok(RaffleError::UpkeepNotNeeded)));

    let player = t.player();
    t.raffle.enter_raffle(&player, &ENTRANCE_FEE);
    let result = t.raffle.try_perform_upkeep(&t.no_data());
    assert_eq!(result, Err(Ok(RaffleError::UpkeepNotNeeded)));

    assert_eq!(t.raffle.get_raffle_state(), RaffleState::Open);
    assert_eq!(t.raffle.get_pending_request_id(), None);
}

#[test]
fn test_perform_upkeep_requests_randomness() {
    let t = setup();
    let player = t.player();
    t.raffle.enter_raffle(&player, &ENTRANCE_FEE);
    t.advance(INTERVAL + 1);

    t.raffle.perform_upkeep(&t.no_data());

    let events = t.env.events().all().filter_by_contract(&t.raffle_id);
    assert_eq!(
        events,
        [RequestedRaffleWinner { request_id: 1 }.to_xdr(&t.env, &t.raffle_id)]
    );

    assert_eq!(t.raffle.get_raffle_state(), RaffleState::Calculating);
    assert_eq!(t.raffle.get_pending_request_id(), Some(1));

    let request = t.coordinator.get_request(&1).expect("request should be recorded");
    assert_eq!(request.consumer, t.raffle_id);
    assert_eq!(request.num_words, 1);
}

#[test]
fn test_perform_upkeep_rejects_second_trigger() {
    let t = setup();
    let player = t.player();
    t.start_draw(&[&player]);

    t.advance(INTERVAL * 10);

    let result = t.raffle.try_perform_upkeep(&t.no_data());
    assert_eq!(result, Err(Ok(RaffleError::UpkeepNotNeeded)));
    assert_eq!(t.raffle.get_pending_request_id(), Some(1));
    assert_eq!(t.coordinator.get_request(&2), None);
}

#[test]
fn test_keeper_interface_client() {
    let t = setup();
    let player = t.player();
    t.raffle.enter_raffle(&player, &ENTRANCE_FEE);
    t.advance(INTERVAL + 1);

    // A keeper only knows the automation interface, not the raffle itself.
    let keeper = AutomationClient::new(&t.env, &t.raffle_id);
    if keeper.check_upkeep(&t.no_data()).upkeep_needed {
        keeper.perform_upkeep(&t.no_data());
    }

    assert_eq!(t.raffle.get_raffle_state(), RaffleState::Calculating);
}
