use soroban_sdk::{ contracttype, Address, Env };
use yieldstake::{
    constants::{ PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD },
    error::{ ErrorCode, YieldResult },
    types::Claim,
    validate,
};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    Claim(Address),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Only the owner (the staking engine) can move funds in or out.
    pub owner: Address,
    pub receipt_token: Address,
}

pub fn save_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_config(env: &Env) -> YieldResult<Config> {
    env.storage().instance().get(&DataKey::Config).ok_or(ErrorCode::NotWired)
}

pub fn require_owner(env: &Env, sender: &Address) -> YieldResult<Config> {
    let config = get_config(env)?;
    validate!(env, config.owner == *sender, ErrorCode::NotAuthorized, "You are not authorized!")?;
    sender.require_auth();
    Ok(config)
}

pub fn get_claim(env: &Env, beneficiary: &Address) -> Claim {
    let key = DataKey::Claim(beneficiary.clone());
    let claim = env.storage().persistent().get(&key);
    if claim.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    }
    claim.unwrap_or_default()
}

/// Stores the record, or drops it once nothing backs it anymore.
pub fn save_claim(env: &Env, beneficiary: &Address, claim: &Claim) {
    let key = DataKey::Claim(beneficiary.clone());
    if claim.is_empty() {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, claim);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}
