use soroban_sdk::{ symbol_short, Env, Symbol };

use crate::{ error::{ ErrorCode, YieldResult }, validate };

const LOCKED: Symbol = symbol_short!("LOCKED");

/// Runs `operation` with the contract marked busy. A nested call into any
/// guarded entry point of the same contract fails with `Reentrancy`.
pub fn non_reentrant<T>(env: &Env, operation: impl FnOnce() -> YieldResult<T>) -> YieldResult<T> {
    validate!(
        env,
        !env.storage().instance().has(&LOCKED),
        ErrorCode::Reentrancy,
        "re-entrant call rejected"
    )?;
    env.storage().instance().set(&LOCKED, &true);

    let result = operation();

    env.storage().instance().remove(&LOCKED);
    result
}
