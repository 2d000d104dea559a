use soroban_sdk::{ contracttype, Address, Env };
use yieldstake::{
    constants::{
        BALANCE_BUMP_AMOUNT,
        BALANCE_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
        PERSISTENT_LIFETIME_THRESHOLD,
    },
    error::{ ErrorCode, YieldResult },
};

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Config,
    TotalShares,
    Shares(Address),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub base_asset: Address,
    pub receipt_token: Address,
    pub staking: Address,
    pub fee_bps: i128,
}

pub fn save_config(env: &Env, config: &Config) {
    let key = DataKey::Config;
    env.storage().persistent().set(&key, config);
    env.storage().persistent().extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn get_config(env: &Env) -> YieldResult<Config> {
    let key = DataKey::Config;
    let config: Config = env.storage().persistent().get(&key).ok_or(ErrorCode::NotWired)?;
    env.storage().persistent().extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    Ok(config)
}

// ################################################################
//                             Shares
// ################################################################

pub fn read_total_shares(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::TotalShares).unwrap_or(0)
}

pub fn write_total_shares(env: &Env, total: i128) {
    env.storage().instance().set(&DataKey::TotalShares, &total);
}

pub fn read_shares(env: &Env, provider: &Address) -> i128 {
    let key = DataKey::Shares(provider.clone());
    if let Some(shares) = env.storage().persistent().get::<DataKey, i128>(&key) {
        env.storage()
            .persistent()
            .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
        shares
    } else {
        0
    }
}

pub fn write_shares(env: &Env, provider: &Address, shares: i128) {
    let key = DataKey::Shares(provider.clone());
    if shares == 0 {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, &shares);
    env.storage().persistent().extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}
