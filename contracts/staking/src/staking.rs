use soroban_sdk::{ Address, Env, Vec };
use yieldstake::{ error::ErrorCode, types::{ Claim, StakeState } };

use crate::storage::{ Config, Epoch, PauseFlags, WithdrawalState, Wiring };

pub trait StakingTrait {
    // ################################################################
    //                             Setup
    // ################################################################

    #[allow(clippy::too_many_arguments)]
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
    ) -> Result<(), ErrorCode>;

    /// Connects the receipt token, both escrows and the liquidity reserve.
    /// Allowed once.
    fn wire(
        env: Env,
        sender: Address,
        receipt_token: Address,
        warmup: Address,
        cooldown: Address,
        reserve: Address
    ) -> Result<(), ErrorCode>;

    // ################################################################
    //                              User
    // ################################################################

    /// Deposits base asset into the yield pool and places the same receipt
    /// amount in warmup.
    fn stake(env: Env, sender: Address, amount: i128) -> Result<(), ErrorCode>;

    /// Releases the recipient's warmup record once vested. Returns 0 when
    /// nothing is vested.
    fn claim(env: Env, recipient: Address) -> Result<i128, ErrorCode>;

    fn unstake(
        env: Env,
        sender: Address,
        amount: i128,
        trigger_rebase: bool
    ) -> Result<(), ErrorCode>;

    /// Sends one batched withdrawal request to the pool per cycle.
    fn send_withdrawal_requests(env: Env) -> Result<bool, ErrorCode>;

    fn claim_withdraw(env: Env, recipient: Address) -> Result<i128, ErrorCode>;

    /// Swaps receipt balance for base asset at the liquidity reserve, minus
    /// the reserve fee.
    fn instant_unstake(
        env: Env,
        sender: Address,
        amount: i128,
        trigger_rebase: bool
    ) -> Result<i128, ErrorCode>;

    fn rebase(env: Env) -> Result<bool, ErrorCode>;

    // ################################################################
    //                              Admin
    // ################################################################

    fn add_rewards_for_stakers(
        env: Env,
        sender: Address,
        amount: i128,
        trigger_rebase: bool
    ) -> Result<(), ErrorCode>;

    fn override_staking(env: Env, sender: Address, paused: bool) -> Result<(), ErrorCode>;

    fn override_unstaking(env: Env, sender: Address, paused: bool) -> Result<(), ErrorCode>;

    fn override_withdrawals(env: Env, sender: Address, paused: bool) -> Result<(), ErrorCode>;

    fn set_warmup_period(env: Env, sender: Address, epochs: u64) -> Result<(), ErrorCode>;

    fn set_request_window(env: Env, sender: Address, ledgers: u32) -> Result<(), ErrorCode>;

    fn propose_admin(env: Env, sender: Address, candidate: Address) -> Result<(), ErrorCode>;

    fn accept_admin(env: Env, sender: Address) -> Result<(), ErrorCode>;

    // ################################################################
    //                             Queries
    // ################################################################

    fn query_epoch(env: Env) -> Result<Epoch, ErrorCode>;

    fn query_config(env: Env) -> Result<Config, ErrorCode>;

    fn query_wiring(env: Env) -> Result<Wiring, ErrorCode>;

    fn query_pause(env: Env) -> PauseFlags;

    fn query_withdrawal_state(env: Env) -> WithdrawalState;

    fn query_warmup_info(env: Env, user: Address) -> Result<Claim, ErrorCode>;

    fn query_cooldown_info(env: Env, user: Address) -> Result<Claim, ErrorCode>;

    fn query_stake_states(env: Env, user: Address) -> Result<Vec<StakeState>, ErrorCode>;

    fn query_staged_rewards(env: Env) -> i128;

    fn query_admin(env: Env) -> Result<Address, ErrorCode>;

    fn can_batch_transactions(env: Env) -> Result<bool, ErrorCode>;
}
