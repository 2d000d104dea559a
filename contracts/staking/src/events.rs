use soroban_sdk::{ Address, Env, Symbol };

use crate::storage::{ PauseFlags, Wiring };

pub struct StakingEvents {}

impl StakingEvents {
    // Setup Events

    /// Emitted when the engine is set up
    ///
    /// - topics - `["initialize", admin: Address]`
    /// - data - `[base_asset: Address, yield_pool: Address, first_epoch: u64]`
    pub fn initialize(
        env: &Env,
        admin: Address,
        base_asset: Address,
        yield_pool: Address,
        first_epoch: u64
    ) {
        let topics = (Symbol::new(env, "initialize"), admin);
        env.events().publish(topics, (base_asset, yield_pool, first_epoch));
    }

    /// Emitted once the collaborating contracts are connected
    ///
    /// - topics - `["wire", admin: Address]`
    /// - data - `Wiring`
    pub fn wire(env: &Env, admin: Address, wiring: Wiring) {
        let topics = (Symbol::new(env, "wire"), admin);
        env.events().publish(topics, wiring);
    }

    // Position Events

    /// - topics - `["stake", user: Address]`
    /// - data - `[amount: i128, release_epoch: u64]`
    pub fn stake(env: &Env, user: Address, amount: i128, release_epoch: u64) {
        let topics = (Symbol::new(env, "stake"), user);
        env.events().publish(topics, (amount, release_epoch));
    }

    /// - topics - `["claim", recipient: Address]`
    /// - data - `[amount: i128]`
    pub fn claim(env: &Env, recipient: Address, amount: i128) {
        let topics = (Symbol::new(env, "claim"), recipient);
        env.events().publish(topics, amount);
    }

    /// Emitted when receipt balance enters the cooldown escrow
    ///
    /// - topics - `["unstake", user: Address]`
    /// - data - `[from_wallet: i128, from_warmup: i128, release_cycle: u64]`
    pub fn unstake(
        env: &Env,
        user: Address,
        from_wallet: i128,
        from_warmup: i128,
        release_cycle: u64
    ) {
        let topics = (Symbol::new(env, "unstake"), user);
        env.events().publish(topics, (from_wallet, from_warmup, release_cycle));
    }

    /// - topics - `["instant_unstake", user: Address]`
    /// - data - `[amount: i128, paid: i128]`
    pub fn instant_unstake(env: &Env, user: Address, amount: i128, paid: i128) {
        let topics = (Symbol::new(env, "instant_unstake"), user);
        env.events().publish(topics, (amount, paid));
    }

    /// - topics - `["claim_withdraw", recipient: Address]`
    /// - data - `[amount: i128, burned: i128]`
    pub fn claim_withdraw(env: &Env, recipient: Address, amount: i128, burned: i128) {
        let topics = (Symbol::new(env, "claim_withdraw"), recipient);
        env.events().publish(topics, (amount, burned));
    }

    // Epoch Events

    /// Emitted for every processed epoch boundary
    ///
    /// - topics - `["rebase", epoch: u64]`
    /// - data - `[distributed: i128, next_distribute: i128, next_end_ledger: u32]`
    pub fn rebase(
        env: &Env,
        epoch: u64,
        distributed: i128,
        next_distribute: i128,
        next_end_ledger: u32
    ) {
        let topics = (Symbol::new(env, "rebase"), epoch);
        env.events().publish(topics, (distributed, next_distribute, next_end_ledger));
    }

    /// - topics - `["add_rewards", sender: Address]`
    /// - data - `[amount: i128, staged: i128]`
    pub fn add_rewards(env: &Env, sender: Address, amount: i128, staged: i128) {
        let topics = (Symbol::new(env, "add_rewards"), sender);
        env.events().publish(topics, (amount, staged));
    }

    // Pool Events

    /// Emitted when the batched withdrawal request is sent to the pool
    ///
    /// - topics - `["withdrawal_request", cycle: u64]`
    /// - data - `[amount: i128, claimed: i128]`
    pub fn withdrawal_request(env: &Env, cycle: u64, amount: i128, claimed: i128) {
        let topics = (Symbol::new(env, "withdrawal_request"), cycle);
        env.events().publish(topics, (amount, claimed));
    }

    // Admin Events

    /// - topics - `["pause", admin: Address]`
    /// - data - `PauseFlags`
    pub fn pause(env: &Env, admin: Address, flags: PauseFlags) {
        let topics = (Symbol::new(env, "pause"), admin);
        env.events().publish(topics, flags);
    }

    /// - topics - `["config", admin: Address]`
    /// - data - `[warmup_epochs: u64, request_window: u32]`
    pub fn config(env: &Env, admin: Address, warmup_epochs: u64, request_window: u32) {
        let topics = (Symbol::new(env, "config"), admin);
        env.events().publish(topics, (warmup_epochs, request_window));
    }

    /// - topics - `["admin_handover", previous: Address]`
    /// - data - `[current: Address]`
    pub fn admin_handover(env: &Env, previous: Address, current: Address) {
        let topics = (Symbol::new(env, "admin_handover"), previous);
        env.events().publish(topics, current);
    }
}
