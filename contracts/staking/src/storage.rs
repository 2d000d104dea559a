use soroban_sdk::{ contracttype, Address, Env };
use yieldstake::{
    constants::{ PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD },
    error::{ ErrorCode, YieldResult },
};

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Config = 1,
    Wiring = 2,
    Epoch = 3,
    Pause = 4,
    Withdrawals = 5,
    StagedRewards = 6,
}

fn save<V: soroban_sdk::IntoVal<Env, soroban_sdk::Val>>(env: &Env, key: &DataKey, value: &V) {
    env.storage().persistent().set(key, value);
    env.storage().persistent().extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

fn load<V: soroban_sdk::TryFromVal<Env, soroban_sdk::Val>>(env: &Env, key: &DataKey) -> Option<V> {
    let value = env.storage().persistent().get(key);
    if value.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    }
    value
}

// ################################################################
//                             Config
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub base_asset: Address,
    pub yield_pool: Address,
    /// Epochs a fresh stake spends in the warmup escrow.
    pub warmup_epochs: u64,
    /// Ledgers before the end of a pool cycle in which withdrawal requests
    /// may be batched. Zero allows batching at any point of the cycle.
    pub request_window: u32,
}

pub fn save_config(env: &Env, config: &Config) {
    save(env, &DataKey::Config, config);
}

pub fn get_config(env: &Env) -> YieldResult<Config> {
    load(env, &DataKey::Config).ok_or(ErrorCode::NotWired)
}

/// Addresses of the collaborating contracts, set once after deployment.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Wiring {
    pub receipt_token: Address,
    pub warmup: Address,
    pub cooldown: Address,
    pub reserve: Address,
}

pub fn is_wired(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Wiring)
}

pub fn save_wiring(env: &Env, wiring: &Wiring) {
    save(env, &DataKey::Wiring, wiring);
}

pub fn get_wiring(env: &Env) -> YieldResult<Wiring> {
    load(env, &DataKey::Wiring).ok_or(ErrorCode::NotWired)
}

// ################################################################
//                              Epoch
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Epoch {
    pub number: u64,
    /// Profit handed to the receipt token when this epoch ends.
    pub distribute: i128,
    pub length: u32,
    pub end_ledger: u32,
}

pub fn save_epoch(env: &Env, epoch: &Epoch) {
    save(env, &DataKey::Epoch, epoch);
}

pub fn get_epoch(env: &Env) -> YieldResult<Epoch> {
    load(env, &DataKey::Epoch).ok_or(ErrorCode::NotWired)
}

/// Rewards funded during the running epoch, distributed one epoch later.
pub fn get_staged_rewards(env: &Env) -> i128 {
    load(env, &DataKey::StagedRewards).unwrap_or(0)
}

pub fn save_staged_rewards(env: &Env, amount: i128) {
    save(env, &DataKey::StagedRewards, &amount);
}

// ################################################################
//                          Pause overrides
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PauseFlags {
    pub staking: bool,
    pub unstaking: bool,
    pub withdrawals: bool,
}

pub fn get_pause(env: &Env) -> PauseFlags {
    load(env, &DataKey::Pause).unwrap_or_default()
}

pub fn save_pause(env: &Env, flags: &PauseFlags) {
    save(env, &DataKey::Pause, flags);
}

// ################################################################
//                      External withdrawals
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct WithdrawalState {
    /// Cooldown amounts not yet requested from the pool.
    pub pending_amount: i128,
    /// Outstanding request at the pool.
    pub requested_amount: i128,
    /// Claimed from the pool and not yet paid to cooldown beneficiaries.
    pub withdrawn_amount: i128,
    /// Pool cycle in which the last batched request was sent.
    pub last_cycle_index: Option<u64>,
}

pub fn get_withdrawal_state(env: &Env) -> WithdrawalState {
    load(env, &DataKey::Withdrawals).unwrap_or_default()
}

pub fn save_withdrawal_state(env: &Env, state: &WithdrawalState) {
    save(env, &DataKey::Withdrawals, state);
}
