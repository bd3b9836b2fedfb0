//! Local VRF coordinator for native tests.
//!
//! Issues sequential request ids starting at 1 and answers only when told to,
//! which lets a test drive the asynchronous half of a draw by hand.
//!
//! Not for wasm builds: it shares the crate with `RaffleContract`, so both
//! would export `fulfill_random_words`. Enable the `testutils` feature only
//! from native test harnesses.

use soroban_sdk::{
    contract, contracterror, contractevent, contractimpl, contracttype, Address, Bytes, BytesN,
    Env, Vec,
};

use crate::vrf::{VrfConsumerClient, VrfCoordinatorInterface};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MockVrfError {
    /// No such request, or it belongs to another consumer
    NonexistentRequest = 1,
    /// Override word count does not match the request
    InvalidWordCount = 2,
}

#[contracttype]
#[derive(Clone)]
pub enum MockKey {
    NextRequestId,
    Request(u64),
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct MockRequest {
    pub consumer: Address,
    pub num_words: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RandomWordsRequested {
    #[topic]
    pub request_id: u64,
    #[topic]
    pub consumer: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RandomWordsFulfilled {
    #[topic]
    pub request_id: u64,
}

#[contract]
pub struct MockVrfCoordinator;

#[contractimpl]
impl VrfCoordinatorInterface for MockVrfCoordinator {
    fn request_random_words(
        env: Env,
        consumer: Address,
        _key_hash: BytesN<32>,
        _subscription_id: u64,
        _minimum_request_confirmations: u32,
        _callback_gas_limit: u32,
        num_words: u32,
    ) -> u64 {
        consumer.require_auth();

        let request_id: u64 = env
            .storage()
            .instance()
            .get(&MockKey::NextRequestId)
            .unwrap_or(1);
        env.storage()
            .instance()
            .set(&MockKey::NextRequestId, &(request_id + 1));
        env.storage().instance().set(
            &MockKey::Request(request_id),
            &MockRequest {
                consumer: consumer.clone(),
                num_words,
            },
        );

        RandomWordsRequested {
            request_id,
            consumer,
        }
        .publish(&env);

        request_id
    }
}

#[contractimpl]
impl MockVrfCoordinator {
    /// Answers a request with words derived from `sha256(request_id || i)`.
    pub fn fulfill_random_words(
        env: Env,
        request_id: u64,
        consumer: Address,
    ) -> Result<(), MockVrfError> {
        let request = Self::take_request(&env, request_id, &consumer)?;

        let mut words = Vec::new(&env);
        for i in 0..request.num_words {
            let mut seed = Bytes::new(&env);
            seed.extend_from_array(&request_id.to_be_bytes());
            seed.extend_from_array(&i.to_be_bytes());
            let digest = env.crypto().sha256(&seed).to_array();
            let mut word = [0u8; 8];
            word.copy_from_slice(&digest[..8]);
            words.push_back(u64::from_be_bytes(word));
        }

        Self::deliver(&env, request_id, &consumer, &words);
        Ok(())
    }

    /// Answers a request with caller-chosen words.
    pub fn fulfill_with_override(
        env: Env,
        request_id: u64,
        consumer: Address,
        words: Vec<u64>,
    ) -> Result<(), MockVrfError> {
        let request = Self::take_request(&env, request_id, &consumer)?;
        if words.len() != request.num_words {
            return Err(MockVrfError::InvalidWordCount);
        }

        Self::deliver(&env, request_id, &consumer, &words);
        Ok(())
    }

    pub fn get_request(env: Env, request_id: u64) -> Option<MockRequest> {
        env.storage().instance().get(&MockKey::Request(request_id))
    }

    fn take_request(
        env: &Env,
        request_id: u64,
        consumer: &Address,
    ) -> Result<MockRequest, MockVrfError> {
        let key = MockKey::Request(request_id);
        let request: MockRequest = env
            .storage()
            .instance()
            .get(&key)
            .ok_or(MockVrfError::NonexistentRequest)?;
        if request.consumer != *consumer {
            return Err(MockVrfError::NonexistentRequest);
        }
        env.storage().instance().remove(&key);
        Ok(request)
    }

    fn deliver(env: &Env, request_id: u64, consumer: &Address, words: &Vec<u64>) {
        VrfConsumerClient::new(env, consumer).fulfill_random_words(&request_id, words);
        RandomWordsFulfilled { request_id }.publish(env);
    }
}
