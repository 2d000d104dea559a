use soroban_sdk::{ contract, contractimpl, contractmeta, token, vec, Address, Env, Vec };
use yieldstake::{
    constants::{ ALLOWANCE_LEDGERS, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD },
    error::{ ErrorCode, YieldResult },
    guard::non_reentrant,
    interfaces::{ ElasticLedgerClient, EscrowClient, ReserveClient, YieldPoolClient },
    math::safe_math::SafeMath,
    ownership::{ self, get_admin, initialize_once, require_admin, save_admin },
    types::{ Claim, StakeState },
    validate,
    validate_amount,
};

use crate::{
    controller::{ epoch, position, withdrawal },
    events::StakingEvents,
    staking::StakingTrait,
    storage::{
        get_config,
        get_epoch,
        get_pause,
        get_staged_rewards,
        get_wiring,
        get_withdrawal_state,
        is_wired,
        save_config,
        save_epoch,
        save_pause,
        save_wiring,
        save_withdrawal_state,
        Config,
        Epoch,
        PauseFlags,
        WithdrawalState,
        Wiring,
    },
};

contractmeta!(
    key = "Description",
    val = "Staking engine issuing elastic receipt tokens backed by an external yield pool"
);

#[contract]
pub struct Staking;

fn bump_instance(env: &Env) {
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Approves the pool for `amount` and deposits it.
fn deposit_to_pool(env: &Env, config: &Config, amount: i128) {
    let engine = env.current_contract_address();
    let expiration = env.ledger().sequence().saturating_add(ALLOWANCE_LEDGERS);

    token::Client::new(env, &config.base_asset).approve(&engine, &config.yield_pool, &amount, &expiration);
    YieldPoolClient::new(env, &config.yield_pool).deposit(&engine, &amount);
}

fn update_pause(
    env: &Env,
    sender: &Address,
    update: impl FnOnce(&mut PauseFlags)
) -> YieldResult {
    require_admin(env, sender)?;

    let mut flags = get_pause(env);
    update(&mut flags);
    save_pause(env, &flags);

    StakingEvents::pause(env, sender.clone(), flags);
    Ok(())
}

#[contractimpl]
impl StakingTrait for Staking {
    // ################################################################
    //                             Setup
    // ################################################################

    fn initialize(
        env: Env,
        admin: Address,
        base_asset: Address,
        yield_pool: Address,
        epoch_length: u32,
        first_epoch_number: u64,
        first_epoch_ledger: u32,
        warmup_epochs: u64,
        request_window: u32
    ) -> Result<(), ErrorCode> {
        initialize_once(&env, "Staking");

        validate!(
            &env,
            epoch_length > 0,
            ErrorCode::OutOfRange,
            "epoch length must be positive"
        )?;
        validate!(
            &env,
            base_asset != yield_pool,
            ErrorCode::ZeroAddress,
            "base asset and yield pool must differ"
        )?;

        save_admin(&env, &admin);
        save_config(&env, &Config {
            base_asset: base_asset.clone(),
            yield_pool: yield_pool.clone(),
            warmup_epochs,
            request_window,
        });
        save_epoch(&env, &Epoch {
            number: first_epoch_number,
            distribute: 0,
            length: epoch_length,
            end_ledger: first_epoch_ledger,
        });
        bump_instance(&env);

        StakingEvents::initialize(&env, admin, base_asset, yield_pool, first_epoch_number);
        Ok(())
    }

    fn wire(
        env: Env,
        sender: Address,
        receipt_token: Address,
        warmup: Address,
        cooldown: Address,
        reserve: Address
    ) -> Result<(), ErrorCode> {
        require_admin(&env, &sender)?;
        validate!(&env, !is_wired(&env), ErrorCode::AlreadyWired, "staking is already wired")?;

        let config = get_config(&env)?;
        let addresses: Vec<Address> = vec![
            &env,
            receipt_token.clone(),
            warmup.clone(),
            cooldown.clone(),
            reserve.clone(),
            env.current_contract_address(),
            config.base_asset,
            config.yield_pool
        ];
        for (i, address) in addresses.iter().enumerate() {
            let duplicated = addresses
                .iter()
                .skip(i + 1)
                .any(|other| other == address);
            validate!(
                &env,
                !duplicated,
                ErrorCode::ZeroAddress,
                "collaborator addresses must be distinct"
            )?;
        }

        let wiring = Wiring { receipt_token, warmup, cooldown, reserve };
        save_wiring(&env, &wiring);
        bump_instance(&env);

        StakingEvents::wire(&env, sender, wiring);
        Ok(())
    }

    // ################################################################
    //                              User
    // ################################################################

    fn stake(env: Env, sender: Address, amount: i128) -> Result<(), ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        non_reentrant(&env, || {
            validate_amount!(&env, amount)?;
            validate!(&env, !get_pause(&env).staking, ErrorCode::Paused, "staking is paused")?;

            let config = get_config(&env)?;
            let wiring = get_wiring(&env)?;
            epoch::process_rebase(&env, &wiring)?;

            let release_epoch = get_epoch(&env)?.number.safe_add(config.warmup_epochs, &env)?;
            let engine = env.current_contract_address();

            ElasticLedgerClient::new(&env, &wiring.receipt_token).mint(&wiring.warmup, &amount);
            EscrowClient::new(&env, &wiring.warmup).deposit(
                &engine,
                &sender,
                &amount,
                &release_epoch
            );

            token::Client::new(&env, &config.base_asset).transfer(&sender, &engine, &amount);
            deposit_to_pool(&env, &config, amount);

            StakingEvents::stake(&env, sender.clone(), amount, release_epoch);
            Ok(())
        })
    }

    fn claim(env: Env, recipient: Address) -> Result<i128, ErrorCode> {
        bump_instance(&env);

        non_reentrant(&env, || {
            let wiring = get_wiring(&env)?;
            let now = get_epoch(&env)?.number;
            let warmup = EscrowClient::new(&env, &wiring.warmup);

            let record = warmup.query_claim(&recipient);
            if record.is_empty() || now < record.release_at {
                return Ok(0);
            }

            let value = warmup.claim_value(&recipient);
            if value == 0 {
                return Ok(0);
            }

            let released = warmup.retrieve(
                &env.current_contract_address(),
                &recipient,
                &value,
                &now
            );

            StakingEvents::claim(&env, recipient.clone(), released);
            Ok(released)
        })
    }

    fn unstake(
        env: Env,
        sender: Address,
        amount: i128,
        trigger_rebase: bool
    ) -> Result<(), ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        non_reentrant(&env, || {
            validate_amount!(&env, amount)?;
            validate!(&env, !get_pause(&env).unstaking, ErrorCode::Paused, "unstaking is paused")?;

            let config = get_config(&env)?;
            let wiring = get_wiring(&env)?;
            if trigger_rebase {
                epoch::process_rebase(&env, &wiring)?;
            }

            let release_cycle = YieldPoolClient::new(&env, &config.yield_pool)
                .get_current_cycle_index()
                .safe_add(1, &env)?;

            let mut state = get_withdrawal_state(&env);
            state.pending_amount = state.pending_amount.safe_add(amount, &env)?;
            save_withdrawal_state(&env, &state);

            let collected = position::collect(&env, &wiring, &sender, amount, &wiring.cooldown)?;
            EscrowClient::new(&env, &wiring.cooldown).deposit(
                &env.current_contract_address(),
                &sender,
                &amount,
                &release_cycle
            );

            StakingEvents::unstake(
                &env,
                sender.clone(),
                collected.from_wallet,
                collected.from_warmup,
                release_cycle
            );
            Ok(())
        })
    }

    fn send_withdrawal_requests(env: Env) -> Result<bool, ErrorCode> {
        bump_instance(&env);

        non_reentrant(&env, || {
            validate!(
                &env,
                !get_pause(&env).withdrawals,
                ErrorCode::Paused,
                "withdrawals are paused"
            )?;

            withdrawal::send_requests(&env, &get_config(&env)?)
        })
    }

    fn claim_withdraw(env: Env, recipient: Address) -> Result<i128, ErrorCode> {
        bump_instance(&env);

        non_reentrant(&env, || {
            let config = get_config(&env)?;
            let wiring = get_wiring(&env)?;
            let cooldown = EscrowClient::new(&env, &wiring.cooldown);

            let record = cooldown.query_claim(&recipient);
            if record.is_empty() {
                return Ok(0);
            }

            let pool = YieldPoolClient::new(&env, &config.yield_pool);
            let cycle = pool.get_current_cycle_index();
            if cycle < record.release_at {
                return Ok(0);
            }

            let mut state = get_withdrawal_state(&env);
            if state.withdrawn_amount < record.amount {
                withdrawal::claim_matured(&env, &pool, &mut state, cycle)?;
            }
            if state.withdrawn_amount < record.amount {
                save_withdrawal_state(&env, &state);
                return Ok(0);
            }

            state.withdrawn_amount = state.withdrawn_amount.safe_sub(record.amount, &env)?;
            save_withdrawal_state(&env, &state);

            let engine = env.current_contract_address();
            let value = cooldown.claim_value(&recipient);
            if value > 0 {
                cooldown.release_to(&engine, &recipient, &value, &engine);
                ElasticLedgerClient::new(&env, &wiring.receipt_token).burn(&engine, &value);
            }
            token::Client::new(&env, &config.base_asset).transfer(
                &engine,
                &recipient,
                &record.amount
            );

            StakingEvents::claim_withdraw(&env, recipient.clone(), record.amount, value);
            Ok(record.amount)
        })
    }

    fn instant_unstake(
        env: Env,
        sender: Address,
        amount: i128,
        trigger_rebase: bool
    ) -> Result<i128, ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        non_reentrant(&env, || {
            validate_amount!(&env, amount)?;
            validate!(&env, !get_pause(&env).unstaking, ErrorCode::Paused, "unstaking is paused")?;

            let wiring = get_wiring(&env)?;
            if trigger_rebase {
                epoch::process_rebase(&env, &wiring)?;
            }

            position::collect(&env, &wiring, &sender, amount, &wiring.reserve)?;
            let paid = ReserveClient::new(&env, &wiring.reserve).instant_unstake(
                &env.current_contract_address(),
                &amount,
                &sender
            );

            StakingEvents::instant_unstake(&env, sender.clone(), amount, paid);
            Ok(paid)
        })
    }

    fn rebase(env: Env) -> Result<bool, ErrorCode> {
        bump_instance(&env);

        non_reentrant(&env, || epoch::process_rebase(&env, &get_wiring(&env)?))
    }

    // ################################################################
    //                              Admin
    // ################################################################

    fn add_rewards_for_stakers(
        env: Env,
        sender: Address,
        amount: i128,
        trigger_rebase: bool
    ) -> Result<(), ErrorCode> {
        require_admin(&env, &sender)?;
        bump_instance(&env);

        non_reentrant(&env, || {
            validate_amount!(&env, amount)?;

            let config = get_config(&env)?;
            let staged = epoch::stage_rewards(&env, amount)?;

            token::Client::new(&env, &config.base_asset).transfer(
                &sender,
                &env.current_contract_address(),
                &amount
            );
            deposit_to_pool(&env, &config, amount);

            StakingEvents::add_rewards(&env, sender.clone(), amount, staged);

            if trigger_rebase {
                epoch::process_rebase(&env, &get_wiring(&env)?)?;
            }
            Ok(())
        })
    }

    fn override_staking(env: Env, sender: Address, paused: bool) -> Result<(), ErrorCode> {
        update_pause(&env, &sender, |flags| {
            flags.staking = paused;
        })
    }

    fn override_unstaking(env: Env, sender: Address, paused: bool) -> Result<(), ErrorCode> {
        update_pause(&env, &sender, |flags| {
            flags.unstaking = paused;
        })
    }

    fn override_withdrawals(env: Env, sender: Address, paused: bool) -> Result<(), ErrorCode> {
        update_pause(&env, &sender, |flags| {
            flags.withdrawals = paused;
        })
    }

    fn set_warmup_period(env: Env, sender: Address, epochs: u64) -> Result<(), ErrorCode> {
        require_admin(&env, &sender)?;

        let mut config = get_config(&env)?;
        config.warmup_epochs = epochs;
        save_config(&env, &config);

        StakingEvents::config(&env, sender, config.warmup_epochs, config.request_window);
        Ok(())
    }

    fn set_request_window(env: Env, sender: Address, ledgers: u32) -> Result<(), ErrorCode> {
        require_admin(&env, &sender)?;

        let mut config = get_config(&env)?;
        config.request_window = ledgers;
        save_config(&env, &config);

        StakingEvents::config(&env, sender, config.warmup_epochs, config.request_window);
        Ok(())
    }

    fn propose_admin(env: Env, sender: Address, candidate: Address) -> Result<(), ErrorCode> {
        ownership::propose_admin(&env, &sender, &candidate)
    }

    fn accept_admin(env: Env, sender: Address) -> Result<(), ErrorCode> {
        let handover = ownership::accept_admin(&env, &sender)?;
        StakingEvents::admin_handover(&env, handover.previous, handover.current);
        Ok(())
    }

    // ################################################################
    //                             Queries
    // ################################################################

    fn query_epoch(env: Env) -> Result<Epoch, ErrorCode> {
        get_epoch(&env)
    }

    fn query_config(env: Env) -> Result<Config, ErrorCode> {
        get_config(&env)
    }

    fn query_wiring(env: Env) -> Result<Wiring, ErrorCode> {
        get_wiring(&env)
    }

    fn query_pause(env: Env) -> PauseFlags {
        get_pause(&env)
    }

    fn query_withdrawal_state(env: Env) -> WithdrawalState {
        get_withdrawal_state(&env)
    }

    fn query_warmup_info(env: Env, user: Address) -> Result<Claim, ErrorCode> {
        let wiring = get_wiring(&env)?;
        Ok(EscrowClient::new(&env, &wiring.warmup).query_claim(&user))
    }

    fn query_cooldown_info(env: Env, user: Address) -> Result<Claim, ErrorCode> {
        let wiring = get_wiring(&env)?;
        Ok(EscrowClient::new(&env, &wiring.cooldown).query_claim(&user))
    }

    fn query_stake_states(env: Env, user: Address) -> Result<Vec<StakeState>, ErrorCode> {
        position::stake_states(&env, &get_config(&env)?, &get_wiring(&env)?, &user)
    }

    fn query_staged_rewards(env: Env) -> i128 {
        get_staged_rewards(&env)
    }

    fn query_admin(env: Env) -> Result<Address, ErrorCode> {
        get_admin(&env)
    }

    fn can_batch_transactions(env: Env) -> Result<bool, ErrorCode> {
        let config = get_config(&env)?;
        Ok(withdrawal::can_batch(&env, &config, &get_withdrawal_state(&env)))
    }
}
