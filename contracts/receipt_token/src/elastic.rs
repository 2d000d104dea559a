use soroban_sdk::Env;
use yieldstake::{
    constants::{ INDEX_BASE, SHARE_SCALE },
    error::{ ErrorCode, YieldResult },
    math::{ casting::Cast, safe_math::SafeMath },
    validate,
};

use crate::storage::ElasticState;

pub fn amount_to_shares(env: &Env, amount: i128, shares_per_unit: u128) -> YieldResult<u128> {
    validate!(env, amount >= 0, ErrorCode::OutOfRange, "negative amount is not allowed: {}", amount)?;
    amount.cast::<u128>(env)?.safe_mul(shares_per_unit, env)
}

pub fn shares_to_amount(env: &Env, shares: u128, shares_per_unit: u128) -> YieldResult<i128> {
    shares.safe_div(shares_per_unit, env)?.cast::<i128>(env)
}

/// Growth of one unit since deployment, scaled by `INDEX_BASE`.
pub fn index(env: &Env, shares_per_unit: u128) -> YieldResult<u128> {
    INDEX_BASE.safe_mul(SHARE_SCALE, env)?.safe_div(shares_per_unit, env)
}

/// Adds `profit` to the supply and recomputes the divisor.
///
/// Rounding the divisor up keeps `shares_per_unit * total_supply >=
/// total_shares`, so the floored balances never add up to more than the
/// supply. Returns `false` when there is nothing to distribute to.
pub fn apply_profit(env: &Env, state: &mut ElasticState, profit: i128) -> YieldResult<bool> {
    validate!(env, profit >= 0, ErrorCode::OutOfRange, "rebase profit cannot be negative")?;

    if state.total_supply == 0 || profit == 0 {
        return Ok(false);
    }

    state.total_supply = state.total_supply.safe_add(profit, env)?;
    state.shares_per_unit = state.total_shares.safe_div_ceil(
        state.total_supply.cast::<u128>(env)?,
        env
    )?;

    Ok(true)
}

#[cfg(test)]
mod test {
    use super::*;
    use soroban_sdk::Env;

    #[test]
    fn profit_is_shared_pro_rata() {
        let env = Env::default();
        let mut state = ElasticState::default();
        let first = amount_to_shares(&env, 10_000, state.shares_per_unit).unwrap();
        let second = amount_to_shares(&env, 1_000, state.shares_per_unit).unwrap();
        state.total_supply = 11_000;
        state.total_shares = first + second;

        assert!(apply_profit(&env, &mut state, 1_000).unwrap());

        assert_eq!(state.total_supply, 12_000);
        assert_eq!(shares_to_amount(&env, first, state.shares_per_unit), Ok(10_909));
        assert_eq!(shares_to_amount(&env, second, state.shares_per_unit), Ok(1_090));
        assert!(index(&env, state.shares_per_unit).unwrap() > INDEX_BASE);
    }

    #[test]
    fn empty_supply_ignores_profit() {
        let env = Env::default();
        let mut state = ElasticState::default();

        assert_eq!(apply_profit(&env, &mut state, 500), Ok(false));
        assert_eq!(state, ElasticState::default());
        assert_eq!(index(&env, state.shares_per_unit), Ok(INDEX_BASE));
    }

    #[test]
    fn negative_values_are_rejected() {
        let env = Env::default();
        let mut state = ElasticState::default();

        assert_eq!(apply_profit(&env, &mut state, -1), Err(ErrorCode::OutOfRange));
        assert_eq!(amount_to_shares(&env, -5, SHARE_SCALE), Err(ErrorCode::OutOfRange));
    }
}
