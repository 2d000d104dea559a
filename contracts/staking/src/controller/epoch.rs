use soroban_sdk::Env;
use yieldstake::{
    error::YieldResult,
    interfaces::ElasticLedgerClient,
    math::safe_math::SafeMath,
};

use crate::{
    events::StakingEvents,
    storage::{ get_epoch, get_staged_rewards, save_epoch, save_staged_rewards, Wiring },
};

/// Closes the running epoch once its end ledger is reached. The receipt
/// token distributes what the closing epoch carried, and rewards staged
/// during it become the next epoch's distribution.
pub fn process_rebase(env: &Env, wiring: &Wiring) -> YieldResult<bool> {
    let mut epoch = get_epoch(env)?;
    if env.ledger().sequence() < epoch.end_ledger {
        return Ok(false);
    }

    let closing = epoch.number;
    let distributed = epoch.distribute;

    epoch.end_ledger = epoch.end_ledger.safe_add(epoch.length, env)?;
    epoch.number = epoch.number.safe_add(1, env)?;
    epoch.distribute = get_staged_rewards(env);
    save_epoch(env, &epoch);
    save_staged_rewards(env, 0);

    ElasticLedgerClient::new(env, &wiring.receipt_token).rebase(&distributed, &closing);

    StakingEvents::rebase(env, closing, distributed, epoch.distribute, epoch.end_ledger);

    Ok(true)
}

/// Adds funded rewards to the amount waiting for the next epoch boundary.
pub fn stage_rewards(env: &Env, amount: i128) -> YieldResult<i128> {
    let staged = get_staged_rewards(env).safe_add(amount, env)?;
    save_staged_rewards(env, staged);
    Ok(staged)
}
