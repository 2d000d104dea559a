use soroban_sdk::{
    contract,
    contractimpl,
    contractmeta,
    panic_with_error,
    token::{ self, Interface as _ },
    Address,
    Env,
    String,
};
use soroban_token_sdk::{ metadata::TokenMetadata, TokenUtils };
use yieldstake::{
    constants::{ INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD },
    error::{ ErrorCode, YieldResult },
    math::safe_math::SafeMath,
    ownership::{ get_admin, initialize_once, require_admin, save_admin },
    validate,
    validate_amount,
};

use crate::{
    allowance::{ read_allowance, spend_allowance, write_allowance },
    balance::{ read_balance, read_shares, receive_balance, spend_balance },
    elastic::{ amount_to_shares, apply_profit, index as growth_index, shares_to_amount },
    events::ReceiptTokenEvents,
    storage::{
        get_elastic_state,
        get_minter,
        get_rebase_record,
        has_minter,
        save_elastic_state,
        save_minter,
        save_rebase_record,
        ElasticState,
        RebaseRecord,
    },
};

contractmeta!(key = "Description", val = "Rebasing receipt token issued against staked base asset");

fn bump_instance(env: &Env) {
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn check_nonnegative_amount(env: &Env, amount: i128) {
    if amount < 0 {
        panic_with_error!(env, ErrorCode::OutOfRange);
    }
}

fn or_abort<T>(env: &Env, result: YieldResult<T>) -> T {
    result.unwrap_or_else(|error| panic_with_error!(env, error))
}

fn move_balance(env: &Env, from: Address, to: Address, amount: i128) -> YieldResult {
    let state = get_elastic_state(env);
    spend_balance(env, from, amount, state.shares_per_unit)?;
    receive_balance(env, to, amount, state.shares_per_unit)?;
    Ok(())
}

fn burn_balance(env: &Env, from: Address, amount: i128) -> YieldResult {
    let mut state = get_elastic_state(env);
    let shares = spend_balance(env, from, amount, state.shares_per_unit)?;
    state.total_supply = state.total_supply.safe_sub(amount, env)?;
    state.total_shares = state.total_shares.safe_sub(shares, env)?;
    save_elastic_state(env, &state);
    Ok(())
}

#[contract]
pub struct ReceiptToken;

#[contractimpl]
impl ReceiptToken {
    pub fn initialize(env: Env, admin: Address, decimal: u32, name: String, symbol: String) {
        initialize_once(&env, "Receipt Token");

        if decimal > 18 {
            panic_with_error!(&env, ErrorCode::OutOfRange);
        }

        save_admin(&env, &admin);
        save_elastic_state(&env, &ElasticState::default());
        TokenUtils::new(&env).metadata().set_metadata(
            &(TokenMetadata {
                decimal,
                name,
                symbol,
            })
        );
        bump_instance(&env);
    }

    /// Registers the only account allowed to mint and rebase. Can be set once.
    pub fn set_minter(env: Env, sender: Address, minter: Address) -> Result<(), ErrorCode> {
        require_admin(&env, &sender)?;
        validate!(&env, !has_minter(&env), ErrorCode::AlreadyWired, "minter is already set")?;
        validate!(
            &env,
            minter != env.current_contract_address(),
            ErrorCode::ZeroAddress,
            "the token cannot mint to itself"
        )?;

        bump_instance(&env);
        save_minter(&env, &minter);
        ReceiptTokenEvents::set_minter(&env, sender, minter);
        Ok(())
    }

    pub fn mint(env: Env, to: Address, amount: i128) -> Result<(), ErrorCode> {
        validate_amount!(&env, amount)?;
        validate!(
            &env,
            to != env.current_contract_address(),
            ErrorCode::ZeroAddress,
            "cannot mint to the token contract"
        )?;
        let minter = get_minter(&env)?;
        minter.require_auth();

        bump_instance(&env);

        let mut state = get_elastic_state(&env);
        let shares = receive_balance(&env, to.clone(), amount, state.shares_per_unit)?;
        state.total_supply = state.total_supply.safe_add(amount, &env)?;
        state.total_shares = state.total_shares.safe_add(shares, &env)?;
        save_elastic_state(&env, &state);

        TokenUtils::new(&env).events().mint(minter, to, amount);
        Ok(())
    }

    /// Distributes `profit` over every holder and returns the new supply.
    pub fn rebase(env: Env, profit: i128, epoch: u64) -> Result<i128, ErrorCode> {
        let minter = get_minter(&env)?;
        minter.require_auth();

        bump_instance(&env);

        let mut state = get_elastic_state(&env);
        let total_supply_before = state.total_supply;
        let applied = apply_profit(&env, &mut state, profit)?;
        state.last_rebase_epoch = epoch;
        save_elastic_state(&env, &state);

        let current_index = growth_index(&env, state.shares_per_unit)?;
        let distributed = if applied { profit } else { 0 };
        save_rebase_record(
            &env,
            &(RebaseRecord {
                epoch,
                profit: distributed,
                total_supply_before,
                total_supply_after: state.total_supply,
                index: current_index,
                ledger: env.ledger().sequence(),
            })
        );
        ReceiptTokenEvents::rebase(&env, epoch, distributed, state.total_supply, current_index);

        Ok(state.total_supply)
    }

    // ################################################################
    //                             Queries
    // ################################################################

    pub fn total_supply(env: Env) -> i128 {
        get_elastic_state(&env).total_supply
    }

    pub fn shares_of(env: Env, id: Address) -> u128 {
        read_shares(&env, id)
    }

    pub fn balance_for_shares(env: Env, shares: u128) -> i128 {
        let state = get_elastic_state(&env);
        or_abort(&env, shares_to_amount(&env, shares, state.shares_per_unit))
    }

    pub fn shares_for_balance(env: Env, amount: i128) -> u128 {
        let state = get_elastic_state(&env);
        or_abort(&env, amount_to_shares(&env, amount, state.shares_per_unit))
    }

    pub fn shares_per_unit(env: Env) -> u128 {
        get_elastic_state(&env).shares_per_unit
    }

    pub fn index(env: Env) -> u128 {
        let state = get_elastic_state(&env);
        or_abort(&env, growth_index(&env, state.shares_per_unit))
    }

    pub fn query_elastic_state(env: Env) -> ElasticState {
        get_elastic_state(&env)
    }

    pub fn query_rebase(env: Env, epoch: u64) -> Option<RebaseRecord> {
        get_rebase_record(&env, epoch)
    }

    pub fn query_minter(env: Env) -> Option<Address> {
        get_minter(&env).ok()
    }

    pub fn query_admin(env: Env) -> Address {
        or_abort(&env, get_admin(&env))
    }
}

#[contractimpl]
impl token::Interface for ReceiptToken {
    fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        bump_instance(&env);
        read_allowance(&env, from, spender).amount
    }

    fn approve(env: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
        check_nonnegative_amount(&env, amount);
        from.require_auth();

        bump_instance(&env);

        or_abort(
            &env,
            write_allowance(&env, from.clone(), spender.clone(), amount, expiration_ledger)
        );
        TokenUtils::new(&env).events().approve(from, spender, amount, expiration_ledger);
    }

    fn balance(env: Env, id: Address) -> i128 {
        bump_instance(&env);
        let state = get_elastic_state(&env);
        or_abort(&env, read_balance(&env, id, state.shares_per_unit))
    }

    fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        check_nonnegative_amount(&env, amount);
        from.require_auth();

        bump_instance(&env);

        or_abort(&env, move_balance(&env, from.clone(), to.clone(), amount));
        TokenUtils::new(&env).events().transfer(from, to, amount);
    }

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128) {
        check_nonnegative_amount(&env, amount);
        spender.require_auth();

        bump_instance(&env);

        or_abort(&env, spend_allowance(&env, from.clone(), spender, amount));
        or_abort(&env, move_balance(&env, from.clone(), to.clone(), amount));
        TokenUtils::new(&env).events().transfer(from, to, amount);
    }

    fn burn(env: Env, from: Address, amount: i128) {
        check_nonnegative_amount(&env, amount);
        from.require_auth();

        bump_instance(&env);

        or_abort(&env, burn_balance(&env, from.clone(), amount));
        TokenUtils::new(&env).events().burn(from, amount);
    }

    fn burn_from(env: Env, spender: Address, from: Address, amount: i128) {
        check_nonnegative_amount(&env, amount);
        spender.require_auth();

        bump_instance(&env);

        or_abort(&env, spend_allowance(&env, from.clone(), spender, amount));
        or_abort(&env, burn_balance(&env, from.clone(), amount));
        TokenUtils::new(&env).events().burn(from, amount);
    }

    fn decimals(env: Env) -> u32 {
        TokenUtils::new(&env).metadata().get_metadata().decimal
    }

    fn name(env: Env) -> String {
        TokenUtils::new(&env).metadata().get_metadata().name
    }

    fn symbol(env: Env) -> String {
        TokenUtils::new(&env).metadata().get_metadata().symbol
    }
}
