//! Shared fixtures: a raffle wired to a Stellar asset and the mock coordinator.

use crate::contract::{RaffleContract, RaffleContractArgs, RaffleContractClient};
use crate::testutils::{MockVrfCoordinator, MockVrfCoordinatorClient};
use crate::types::RaffleConfig;
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::{StellarAssetClient, TokenClient},
    Address, Bytes, BytesN, Env,
};

/// 0.01 of a 7-decimal asset.
pub const ENTRANCE_FEE: i128 = 100_000;
pub const INTERVAL: u64 = 30;
pub const KEY_HASH: [u8; 32] = [0x79; 32];
pub const SUBSCRIPTION_ID: u64 = 1448;
pub const CALLBACK_GAS_LIMIT: u32 = 500_000;

pub struct RaffleTest<'a> {
    pub env: Env,
    pub raffle_id: Address,
    pub raffle: RaffleContractClient<'a>,
    pub coordinator: MockVrfCoordinatorClient<'a>,
    pub token: TokenClient<'a>,
    pub minter: StellarAssetClient<'a>,
}

pub fn config(env: &Env, token: &Address, coordinator: &Address) -> RaffleConfig {
    RaffleConfig {
        entrance_fee: ENTRANCE_FEE,
        interval: INTERVAL,
        token: token.clone(),
        coordinator: coordinator.clone(),
        key_hash: BytesN::from_array(env, &KEY_HASH),
        subscription_id: SUBSCRIPTION_ID,
        callback_gas_limit: CALLBACK_GAS_LIMIT,
    }
}

/// Registers the token, the coordinator and the raffle, with all auths mocked.
pub fn setup<'a>() -> RaffleTest<'a> {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(1_000);

    let issuer = Address::generate(&env);
    let asset = env.register_stellar_asset_contract_v2(issuer);
    let token_id = asset.address();

    let coordinator_id = env.register(MockVrfCoordinator, ());
    let config = config(&env, &token_id, &coordinator_id);
    let raffle_id = env.register(RaffleContract, RaffleContractArgs::__constructor(&config));

    RaffleTest {
        raffle: RaffleContractClient::new(&env, &raffle_id),
        coordinator: MockVrfCoordinatorClient::new(&env, &coordinator_id),
        token: TokenClient::new(&env, &token_id),
        minter: StellarAssetClient::new(&env, &token_id),
        raffle_id,
        env,
    }
}

impl RaffleTest<'_> {
    /// A fresh address holding ten entrance fees.
    pub fn player(&self) -> Address {
        let player = Address::generate(&self.env);
        self.minter.mint(&player, &(ENTRANCE_FEE * 10));
        player
    }

    pub fn advance(&self, seconds: u64) {
        self.env.ledger().with_mut(|li| {
            li.timestamp += seconds;
        });
    }

    pub fn no_data(&self) -> Bytes {
        Bytes::new(&self.env)
    }

    /// Enters `players` once each, waits out the interval and triggers the
    /// draw. Returns the pending request id.
    pub fn start_draw(&self, players: &[&Address]) -> u64 {
        for player in players {
            self.raffle.enter_raffle(player, &ENTRANCE_FEE);
        }
        self.advance(INTERVAL + 1);
        self.raffle.perform_upkeep(&self.no_data());
        self.raffle
            .get_pending_request_id()
            .expect("draw should be pending")
    }
}
