use soroban_sdk::{ Address, Env, Vec };
use yieldstake::{
    error::{ ErrorCode, YieldResult },
    interfaces::{ ElasticLedgerClient, EscrowClient, YieldPoolClient },
    math::safe_math::SafeMath,
    types::StakeState,
    validate,
};

use crate::{
    controller::withdrawal::matured_request,
    storage::{ get_epoch, get_withdrawal_state, Config, Wiring },
};

/// Receipt balance taken out of a user's position, split by origin.
pub struct Collected {
    pub from_wallet: i128,
    pub from_warmup: i128,
}

/// Moves `amount` of the owner's receipt balance to `destination`, taking
/// the wallet balance first and the rest from the warming record.
///
/// The wallet part is pulled with `transfer_from`, so the owner must have
/// approved the engine for it.
pub fn collect(
    env: &Env,
    wiring: &Wiring,
    owner: &Address,
    amount: i128,
    destination: &Address
) -> YieldResult<Collected> {
    let engine = env.current_contract_address();
    let ledger = ElasticLedgerClient::new(env, &wiring.receipt_token);
    let warmup = EscrowClient::new(env, &wiring.warmup);

    let wallet = ledger.balance(owner);
    let warming = warmup.claim_value(owner);
    let available = wallet.safe_add(warming, env)?;

    validate!(
        env,
        amount <= available,
        ErrorCode::InsufficientBalance,
        "not enough receipt balance: {} > {}",
        amount,
        available
    )?;

    let from_wallet = wallet.min(amount);
    let from_warmup = amount.safe_sub(from_wallet, env)?;

    if from_wallet > 0 {
        ledger.transfer_from(&engine, owner, destination, &from_wallet);
    }
    if from_warmup > 0 {
        warmup.release_to(&engine, owner, &from_warmup, destination);
    }

    Ok(Collected { from_wallet, from_warmup })
}

/// Lists every state that currently applies to `user`.
pub fn stake_states(
    env: &Env,
    config: &Config,
    wiring: &Wiring,
    user: &Address
) -> YieldResult<Vec<StakeState>> {
    let mut states = Vec::new(env);

    let warmup = EscrowClient::new(env, &wiring.warmup);
    let warming = warmup.query_claim(user);
    if !warming.is_empty() {
        let epoch = get_epoch(env)?;
        let value = warmup.claim_value(user);
        if epoch.number < warming.release_at {
            states.push_back(StakeState::Warming(value, warming.release_at));
        } else {
            // vested warmup is claimable, which counts as active balance
            states.push_back(StakeState::Active(value));
        }
    }

    let balance = ElasticLedgerClient::new(env, &wiring.receipt_token).balance(user);
    if balance > 0 {
        states.push_back(StakeState::Active(balance));
    }

    let cooling = EscrowClient::new(env, &wiring.cooldown).query_claim(user);
    if !cooling.is_empty() {
        let pool = YieldPoolClient::new(env, &config.yield_pool);
        let cycle = pool.get_current_cycle_index();
        let available = get_withdrawal_state(env).withdrawn_amount.safe_add(
            matured_request(env, &pool, cycle),
            env
        )?;

        if cycle >= cooling.release_at && available >= cooling.amount {
            states.push_back(StakeState::Withdrawable(cooling.amount));
        } else {
            states.push_back(StakeState::Cooling(cooling.amount, cooling.release_at));
        }
    }

    if states.is_empty() {
        states.push_back(StakeState::Idle);
    }

    Ok(states)
}
