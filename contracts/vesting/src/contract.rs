use soroban_sdk::{ contract, contractimpl, contractmeta, Address, Env };
use yieldstake::{
    constants::{ INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD },
    error::{ ErrorCode, YieldResult },
    interfaces::ElasticLedgerClient,
    math::safe_math::SafeMath,
    ownership::initialize_once,
    types::Claim,
    validate,
    validate_amount,
};

use crate::{
    events::EscrowEvents,
    storage::{ get_claim, get_config, require_owner, save_claim, save_config, Config },
};

contractmeta!(
    key = "Description",
    val = "Holds receipt balances in custody until a release epoch or cycle is reached"
);

#[contract]
pub struct VestingEscrow;

pub trait VestingEscrowTrait {
    fn initialize(env: Env, owner: Address, receipt_token: Address);

    fn deposit(
        env: Env,
        sender: Address,
        beneficiary: Address,
        amount: i128,
        release_at: u64
    ) -> Result<(), ErrorCode>;

    fn retrieve(
        env: Env,
        sender: Address,
        beneficiary: Address,
        amount: i128,
        now: u64
    ) -> Result<i128, ErrorCode>;

    fn release_to(
        env: Env,
        sender: Address,
        beneficiary: Address,
        amount: i128,
        recipient: Address
    ) -> Result<i128, ErrorCode>;

    fn query_claim(env: Env, beneficiary: Address) -> Claim;

    fn claim_value(env: Env, beneficiary: Address) -> i128;

    fn query_owner(env: Env) -> Result<Address, ErrorCode>;

    fn query_config(env: Env) -> Result<Config, ErrorCode>;
}

/// Releases `amount` of the beneficiary's record to `recipient`.
fn release(
    env: &Env,
    config: &Config,
    beneficiary: &Address,
    amount: i128,
    recipient: &Address
) -> YieldResult<i128> {
    let ledger = ElasticLedgerClient::new(env, &config.receipt_token);
    let mut claim = get_claim(env, beneficiary);
    let value = ledger.balance_for_shares(&claim.shares);

    validate!(
        env,
        amount <= value,
        ErrorCode::InsufficientBalance,
        "not enough receipt balance in escrow: {} > {}",
        amount,
        value
    )?;

    let shares = if amount == value {
        claim.shares
    } else {
        ledger.shares_for_balance(&amount).min(claim.shares)
    };
    claim.shares = claim.shares.safe_sub(shares, env)?;
    claim.amount = claim.amount.safe_sub(amount, env)?.max(0);
    save_claim(env, beneficiary, &claim);

    ledger.transfer(&env.current_contract_address(), recipient, &amount);

    EscrowEvents::release(env, beneficiary.clone(), recipient.clone(), amount, claim.shares);
    Ok(amount)
}

#[contractimpl]
impl VestingEscrowTrait for VestingEscrow {
    fn initialize(env: Env, owner: Address, receipt_token: Address) {
        initialize_once(&env, "Vesting Escrow");

        save_config(&env, &(Config {
            owner: owner.clone(),
            receipt_token: receipt_token.clone(),
        }));
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        EscrowEvents::initialize(&env, owner, receipt_token);
    }

    fn deposit(
        env: Env,
        sender: Address,
        beneficiary: Address,
        amount: i128,
        release_at: u64
    ) -> Result<(), ErrorCode> {
        let config = require_owner(&env, &sender)?;
        validate_amount!(&env, amount)?;
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let ledger = ElasticLedgerClient::new(&env, &config.receipt_token);
        let shares = ledger.shares_for_balance(&amount);

        let mut claim = get_claim(&env, &beneficiary);
        claim.amount = claim.amount.safe_add(amount, &env)?;
        claim.shares = claim.shares.safe_add(shares, &env)?;
        claim.release_at = claim.release_at.max(release_at);
        save_claim(&env, &beneficiary, &claim);

        EscrowEvents::deposit(&env, beneficiary, amount, claim.release_at);
        Ok(())
    }

    fn retrieve(
        env: Env,
        sender: Address,
        beneficiary: Address,
        amount: i128,
        now: u64
    ) -> Result<i128, ErrorCode> {
        let config = require_owner(&env, &sender)?;
        validate_amount!(&env, amount)?;
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let claim = get_claim(&env, &beneficiary);
        validate!(
            &env,
            now >= claim.release_at,
            ErrorCode::NotYetVested,
            "escrow releases at {}, now is {}",
            claim.release_at,
            now
        )?;

        release(&env, &config, &beneficiary, amount, &beneficiary)
    }

    fn release_to(
        env: Env,
        sender: Address,
        beneficiary: Address,
        amount: i128,
        recipient: Address
    ) -> Result<i128, ErrorCode> {
        let config = require_owner(&env, &sender)?;
        validate_amount!(&env, amount)?;
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        release(&env, &config, &beneficiary, amount, &recipient)
    }

    fn query_claim(env: Env, beneficiary: Address) -> Claim {
        get_claim(&env, &beneficiary)
    }

    fn claim_value(env: Env, beneficiary: Address) -> i128 {
        let claim = get_claim(&env, &beneficiary);
        if claim.is_empty() {
            return 0;
        }
        match get_config(&env) {
            Ok(config) =>
                ElasticLedgerClient::new(&env, &config.receipt_token).balance_for_shares(
                    &claim.shares
                ),
            Err(_) => 0,
        }
    }

    fn query_owner(env: Env) -> Result<Address, ErrorCode> {
        Ok(get_config(&env)?.owner)
    }

    fn query_config(env: Env) -> Result<Config, ErrorCode> {
        get_config(&env)
    }
}
