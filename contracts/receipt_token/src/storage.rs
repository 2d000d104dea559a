use soroban_sdk::{ contracttype, Address, Env };
use yieldstake::{
    constants::{ PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD, SHARE_SCALE },
    error::{ ErrorCode, YieldResult },
};

#[derive(Clone)]
#[contracttype]
pub struct AllowanceDataKey {
    pub from: Address,
    pub spender: Address,
}

#[contracttype]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Allowance(AllowanceDataKey),
    Shares(Address),
    Rebase(u64),
    Elastic,
    Minter,
}

// ################################################################
//                          Elastic supply
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ElasticState {
    pub total_supply: i128,
    pub total_shares: u128,
    /// Shares backing one unit of balance. Only ever shrinks.
    pub shares_per_unit: u128,
    pub last_rebase_epoch: u64,
}

impl Default for ElasticState {
    fn default() -> Self {
        ElasticState {
            total_supply: 0,
            total_shares: 0,
            shares_per_unit: SHARE_SCALE,
            last_rebase_epoch: 0,
        }
    }
}

pub fn get_elastic_state(env: &Env) -> ElasticState {
    env.storage().instance().get(&DataKey::Elastic).unwrap_or_default()
}

pub fn save_elastic_state(env: &Env, state: &ElasticState) {
    env.storage().instance().set(&DataKey::Elastic, state);
}

/// Snapshot taken every time the staking engine rebases.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RebaseRecord {
    pub epoch: u64,
    pub profit: i128,
    pub total_supply_before: i128,
    pub total_supply_after: i128,
    pub index: u128,
    pub ledger: u32,
}

pub fn save_rebase_record(env: &Env, record: &RebaseRecord) {
    let key = DataKey::Rebase(record.epoch);
    env.storage().persistent().set(&key, record);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn get_rebase_record(env: &Env, epoch: u64) -> Option<RebaseRecord> {
    let key = DataKey::Rebase(epoch);
    let record = env.storage().persistent().get(&key);
    if record.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    }
    record
}

// ################################################################
//                             Minter
// ################################################################

pub fn has_minter(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Minter)
}

pub fn save_minter(env: &Env, minter: &Address) {
    env.storage().instance().set(&DataKey::Minter, minter);
}

pub fn get_minter(env: &Env) -> YieldResult<Address> {
    env.storage().instance().get(&DataKey::Minter).ok_or(ErrorCode::NotWired)
}
