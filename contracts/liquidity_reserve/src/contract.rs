use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::{ contract, contractimpl, contractmeta, token, Address, Env };
use yieldstake::{
    constants::{
        ALLOWANCE_LEDGERS,
        INSTANCE_BUMP_AMOUNT,
        INSTANCE_LIFETIME_THRESHOLD,
        MAX_BPS,
        MAX_FEE_BPS,
    },
    error::{ ErrorCode, YieldResult },
    guard::non_reentrant,
    interfaces::{ ElasticLedgerClient, StakingEngineClient },
    math::safe_math::SafeMath,
    ownership::{ self, get_admin, initialize_once, require_admin, save_admin },
    validate,
    validate_amount,
};

use crate::{
    events::ReserveEvents,
    storage::{
        get_config,
        read_shares,
        read_total_shares,
        save_config,
        write_shares,
        write_total_shares,
        Config,
    },
};

contractmeta!(
    key = "Description",
    val = "Liquidity reserve paying out instant unstakes for a fee"
);

#[contract]
pub struct LiquidityReserve;

pub trait ReserveTrait {
    fn initialize(
        env: Env,
        admin: Address,
        base_asset: Address,
        receipt_token: Address,
        staking: Address,
        fee_bps: i128,
        seed_amount: i128
    ) -> Result<(), ErrorCode>;

    fn add_liquidity(env: Env, sender: Address, amount: i128) -> Result<i128, ErrorCode>;

    fn remove_liquidity(env: Env, sender: Address, shares: i128) -> Result<i128, ErrorCode>;

    /// Pays `recipient` for receipt balance the staking engine already moved
    /// into the reserve.
    fn instant_unstake(
        env: Env,
        sender: Address,
        amount: i128,
        recipient: Address
    ) -> Result<i128, ErrorCode>;

    fn unstake_all_reward_tokens(env: Env, sender: Address) -> Result<i128, ErrorCode>;

    fn claim_withdraw(env: Env) -> Result<i128, ErrorCode>;

    fn set_fee(env: Env, sender: Address, fee_bps: i128) -> Result<(), ErrorCode>;

    fn propose_admin(env: Env, sender: Address, candidate: Address) -> Result<(), ErrorCode>;

    fn accept_admin(env: Env, sender: Address) -> Result<(), ErrorCode>;

    fn balance(env: Env, id: Address) -> i128;

    fn total_shares(env: Env) -> i128;

    fn query_fee(env: Env) -> Result<i128, ErrorCode>;

    fn query_config(env: Env) -> Result<Config, ErrorCode>;

    fn reserve_value(env: Env) -> Result<i128, ErrorCode>;

    fn query_admin(env: Env) -> Result<Address, ErrorCode>;
}

fn bump_instance(env: &Env) {
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn validate_fee(env: &Env, fee_bps: i128) -> YieldResult {
    validate!(
        env,
        (0..=MAX_FEE_BPS).contains(&fee_bps),
        ErrorCode::OutOfRange,
        "fee must be within 0..={} bps, got {}",
        MAX_FEE_BPS,
        fee_bps
    )
}

fn mul_div_floor(env: &Env, x: i128, y: i128, denominator: i128) -> YieldResult<i128> {
    let result = x.fixed_mul_floor(y, denominator);
    validate!(env, result.is_some(), ErrorCode::MathError, "share pricing overflowed")?;
    result.ok_or(ErrorCode::MathError)
}

fn liquid_float(env: &Env, config: &Config) -> i128 {
    token::Client::new(env, &config.base_asset).balance(&env.current_contract_address())
}

/// Base float plus held receipt balance plus the reserve's own cooldown.
fn value_of_reserve(env: &Env, config: &Config) -> YieldResult<i128> {
    let reserve = env.current_contract_address();
    let held = ElasticLedgerClient::new(env, &config.receipt_token).balance(&reserve);
    let cooling = StakingEngineClient::new(env, &config.staking).query_cooldown_info(&reserve);

    liquid_float(env, config).safe_add(held, env)?.safe_add(cooling.amount, env)
}

#[contractimpl]
impl ReserveTrait for LiquidityReserve {
    fn initialize(
        env: Env,
        admin: Address,
        base_asset: Address,
        receipt_token: Address,
        staking: Address,
        fee_bps: i128,
        seed_amount: i128
    ) -> Result<(), ErrorCode> {
        initialize_once(&env, "Liquidity Reserve");

        validate_fee(&env, fee_bps)?;
        validate_amount!(&env, seed_amount)?;
        validate!(
            &env,
            base_asset != receipt_token && staking != base_asset && staking != receipt_token,
            ErrorCode::ZeroAddress,
            "reserve collaborators must be distinct"
        )?;

        admin.require_auth();

        let reserve = env.current_contract_address();
        save_admin(&env, &admin);
        save_config(&env, &Config {
            base_asset: base_asset.clone(),
            receipt_token,
            staking: staking.clone(),
            fee_bps,
        });
        write_shares(&env, &reserve, seed_amount);
        write_total_shares(&env, seed_amount);
        bump_instance(&env);

        token::Client::new(&env, &base_asset).transfer(&admin, &reserve, &seed_amount);

        ReserveEvents::initialize(&env, admin, staking, fee_bps, seed_amount);
        Ok(())
    }

    fn add_liquidity(env: Env, sender: Address, amount: i128) -> Result<i128, ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        non_reentrant(&env, || {
            validate_amount!(&env, amount)?;

            let config = get_config(&env)?;
            let value = value_of_reserve(&env, &config)?;
            let total_shares = read_total_shares(&env);

            let shares = if total_shares == 0 || value == 0 {
                amount
            } else {
                mul_div_floor(&env, amount, total_shares, value)?
            };
            validate!(&env, shares > 0, ErrorCode::ZeroAmount, "deposit too small for a share")?;

            write_shares(&env, &sender, read_shares(&env, &sender).safe_add(shares, &env)?);
            write_total_shares(&env, total_shares.safe_add(shares, &env)?);

            token::Client::new(&env, &config.base_asset).transfer(
                &sender,
                &env.current_contract_address(),
                &amount
            );

            ReserveEvents::add_liquidity(&env, sender.clone(), amount, shares);
            Ok(shares)
        })
    }

    fn remove_liquidity(env: Env, sender: Address, shares: i128) -> Result<i128, ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        non_reentrant(&env, || {
            validate_amount!(&env, shares)?;

            let owned = read_shares(&env, &sender);
            validate!(
                &env,
                shares <= owned,
                ErrorCode::InsufficientBalance,
                "not enough reserve shares: {} > {}",
                shares,
                owned
            )?;

            let config = get_config(&env)?;
            let total_shares = read_total_shares(&env);
            let payout = mul_div_floor(&env, shares, value_of_reserve(&env, &config)?, total_shares)?;

            let float = liquid_float(&env, &config);
            validate!(
                &env,
                payout <= float,
                ErrorCode::InsufficientReserveFunds,
                "not enough funds: {} > {}",
                payout,
                float
            )?;

            write_shares(&env, &sender, owned.safe_sub(shares, &env)?);
            write_total_shares(&env, total_shares.safe_sub(shares, &env)?);

            token::Client::new(&env, &config.base_asset).transfer(
                &env.current_contract_address(),
                &sender,
                &payout
            );

            ReserveEvents::remove_liquidity(&env, sender.clone(), shares, payout);
            Ok(payout)
        })
    }

    fn instant_unstake(
        env: Env,
        sender: Address,
        amount: i128,
        recipient: Address
    ) -> Result<i128, ErrorCode> {
        let config = get_config(&env)?;
        validate!(
            &env,
            sender == config.staking,
            ErrorCode::NotStakingContract,
            "only the staking engine may request instant unstakes"
        )?;
        sender.require_auth();
        bump_instance(&env);

        non_reentrant(&env, || {
            validate_amount!(&env, amount)?;

            let fee = mul_div_floor(&env, amount, config.fee_bps, MAX_BPS)?;
            let payout = amount.safe_sub(fee, &env)?;

            let float = liquid_float(&env, &config);
            validate!(
                &env,
                payout <= float,
                ErrorCode::InsufficientReserveFunds,
                "not enough funds: {} > {}",
                payout,
                float
            )?;

            token::Client::new(&env, &config.base_asset).transfer(
                &env.current_contract_address(),
                &recipient,
                &payout
            );

            ReserveEvents::instant_unstake(&env, recipient.clone(), amount, fee, payout);
            Ok(payout)
        })
    }

    fn unstake_all_reward_tokens(env: Env, sender: Address) -> Result<i128, ErrorCode> {
        require_admin(&env, &sender)?;
        bump_instance(&env);

        non_reentrant(&env, || {
            let config = get_config(&env)?;
            let reserve = env.current_contract_address();
            let ledger = ElasticLedgerClient::new(&env, &config.receipt_token);

            let held = ledger.balance(&reserve);
            if held == 0 {
                return Ok(0);
            }

            let expiration = env.ledger().sequence().saturating_add(ALLOWANCE_LEDGERS);
            ledger.approve(&reserve, &config.staking, &held, &expiration);
            StakingEngineClient::new(&env, &config.staking).unstake(&reserve, &held, &false);

            ReserveEvents::unstake_all(&env, sender.clone(), held);
            Ok(held)
        })
    }

    fn claim_withdraw(env: Env) -> Result<i128, ErrorCode> {
        bump_instance(&env);

        non_reentrant(&env, || {
            let config = get_config(&env)?;
            let received = StakingEngineClient::new(&env, &config.staking).claim_withdraw(
                &env.current_contract_address()
            );

            ReserveEvents::claim_withdraw(&env, received);
            Ok(received)
        })
    }

    fn set_fee(env: Env, sender: Address, fee_bps: i128) -> Result<(), ErrorCode> {
        require_admin(&env, &sender)?;
        validate_fee(&env, fee_bps)?;

        let mut config = get_config(&env)?;
        config.fee_bps = fee_bps;
        save_config(&env, &config);

        ReserveEvents::set_fee(&env, sender, fee_bps);
        Ok(())
    }

    fn propose_admin(env: Env, sender: Address, candidate: Address) -> Result<(), ErrorCode> {
        ownership::propose_admin(&env, &sender, &candidate)
    }

    fn accept_admin(env: Env, sender: Address) -> Result<(), ErrorCode> {
        let handover = ownership::accept_admin(&env, &sender)?;
        ReserveEvents::admin_handover(&env, handover.previous, handover.current);
        Ok(())
    }

    fn balance(env: Env, id: Address) -> i128 {
        read_shares(&env, &id)
    }

    fn total_shares(env: Env) -> i128 {
        read_total_shares(&env)
    }

    fn query_fee(env: Env) -> Result<i128, ErrorCode> {
        Ok(get_config(&env)?.fee_bps)
    }

    fn query_config(env: Env) -> Result<Config, ErrorCode> {
        get_config(&env)
    }

    fn reserve_value(env: Env) -> Result<i128, ErrorCode> {
        value_of_reserve(&env, &get_config(&env)?)
    }

    fn query_admin(env: Env) -> Result<Address, ErrorCode> {
        get_admin(&env)
    }
}
