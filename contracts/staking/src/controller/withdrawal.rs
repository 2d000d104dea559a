use soroban_sdk::Env;
use yieldstake::{
    error::YieldResult,
    interfaces::YieldPoolClient,
    math::safe_math::SafeMath,
};

use crate::{
    events::StakingEvents,
    storage::{ get_withdrawal_state, save_withdrawal_state, Config, WithdrawalState },
};

/// Amount of the engine's pool request that can be claimed in `cycle`.
pub fn matured_request(env: &Env, pool: &YieldPoolClient, cycle: u64) -> i128 {
    let request = pool.requested_withdrawal(&env.current_contract_address());
    if request.amount > 0 && request.min_cycle <= cycle {
        request.amount
    } else {
        0
    }
}

/// Claims a matured pool request into `withdrawn_amount`.
pub fn claim_matured(
    env: &Env,
    pool: &YieldPoolClient,
    state: &mut WithdrawalState,
    cycle: u64
) -> YieldResult<i128> {
    if matured_request(env, pool, cycle) == 0 {
        return Ok(0);
    }

    let received = pool.claim_withdrawal(&env.current_contract_address());
    state.withdrawn_amount = state.withdrawn_amount.safe_add(received, env)?;
    state.requested_amount = state.requested_amount.safe_sub(received, env)?.max(0);

    Ok(received)
}

/// Whether a batched request may be sent now: one per pool cycle, and only
/// inside the request window before the cycle ends.
pub fn can_batch(env: &Env, config: &Config, state: &WithdrawalState) -> bool {
    let pool = YieldPoolClient::new(env, &config.yield_pool);
    let cycle = pool.get_current_cycle_index();

    if state.last_cycle_index == Some(cycle) {
        return false;
    }
    if config.request_window == 0 {
        return true;
    }

    let cycle_end = pool.get_current_cycle_start().saturating_add(pool.get_cycle_duration());
    env.ledger().sequence() >= cycle_end.saturating_sub(config.request_window)
}

pub fn send_requests(env: &Env, config: &Config) -> YieldResult<bool> {
    let mut state = get_withdrawal_state(env);
    if !can_batch(env, config, &state) {
        return Ok(false);
    }

    let pool = YieldPoolClient::new(env, &config.yield_pool);
    let cycle = pool.get_current_cycle_index();
    let claimed = claim_matured(env, &pool, &mut state, cycle)?;

    // the pool overwrites requests, so anything still outstanding rides along
    let amount = state.pending_amount.safe_add(state.requested_amount, env)?;
    if amount == 0 {
        save_withdrawal_state(env, &state);
        return Ok(false);
    }

    state.pending_amount = 0;
    state.requested_amount = amount;
    state.last_cycle_index = Some(cycle);
    save_withdrawal_state(env, &state);

    pool.request_withdrawal(&env.current_contract_address(), &amount);

    StakingEvents::withdrawal_request(env, cycle, amount, claimed);

    Ok(true)
}
