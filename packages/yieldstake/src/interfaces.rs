//! Client interfaces for calls between the contracts of the protocol and
//! into the external yield pool.

use soroban_sdk::{ contractclient, Address, Env };

use crate::types::{ Claim, RequestedWithdrawal };

/// Elastic-supply receipt token: SEP-41 plus minter-only supply management.
#[contractclient(name = "ElasticLedgerClient")]
pub trait ElasticLedgerInterface {
    fn mint(env: Env, to: Address, amount: i128);

    fn rebase(env: Env, profit: i128, epoch: u64) -> i128;

    fn balance(env: Env, id: Address) -> i128;

    fn total_supply(env: Env) -> i128;

    fn approve(env: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32);

    fn transfer(env: Env, from: Address, to: Address, amount: i128);

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128);

    fn burn(env: Env, from: Address, amount: i128);

    fn balance_for_shares(env: Env, shares: u128) -> i128;

    fn shares_for_balance(env: Env, amount: i128) -> u128;
}

/// Vesting escrow owned by the staking engine.
#[contractclient(name = "EscrowClient")]
pub trait EscrowInterface {
    fn deposit(env: Env, sender: Address, beneficiary: Address, amount: i128, release_at: u64);

    fn retrieve(env: Env, sender: Address, beneficiary: Address, amount: i128, now: u64) -> i128;

    fn release_to(
        env: Env,
        sender: Address,
        beneficiary: Address,
        amount: i128,
        recipient: Address
    ) -> i128;

    fn query_claim(env: Env, beneficiary: Address) -> Claim;

    fn claim_value(env: Env, beneficiary: Address) -> i128;
}

/// Entry points of the staking engine used by the liquidity reserve.
#[contractclient(name = "StakingEngineClient")]
pub trait StakingEngineInterface {
    fn unstake(env: Env, sender: Address, amount: i128, trigger_rebase: bool);

    fn claim_withdraw(env: Env, recipient: Address) -> i128;

    fn query_cooldown_info(env: Env, user: Address) -> Claim;
}

/// Entry point of the liquidity reserve reserved for the staking engine.
#[contractclient(name = "ReserveClient")]
pub trait ReserveInterface {
    fn instant_unstake(env: Env, sender: Address, amount: i128, recipient: Address) -> i128;
}

/// External pool that earns yield on deposited base asset and releases
/// withdrawals once per cycle.
#[contractclient(name = "YieldPoolClient")]
pub trait YieldPoolInterface {
    /// Pulls `amount` of base asset from `from` using an allowance.
    fn deposit(env: Env, from: Address, amount: i128);

    /// Replaces any earlier request of `from` with one for the next cycle.
    fn request_withdrawal(env: Env, from: Address, amount: i128);

    fn requested_withdrawal(env: Env, account: Address) -> RequestedWithdrawal;

    /// Pays a matured request to `account` and returns the amount.
    fn claim_withdrawal(env: Env, account: Address) -> i128;

    fn get_current_cycle_index(env: Env) -> u64;

    fn get_cycle_duration(env: Env) -> u32;

    fn get_current_cycle_start(env: Env) -> u32;
}
