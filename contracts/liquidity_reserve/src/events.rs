use soroban_sdk::{ Address, Env, Symbol };

pub struct ReserveEvents {}

impl ReserveEvents {
    /// Emitted when the reserve is seeded
    ///
    /// - topics - `["initialize", admin: Address]`
    /// - data - `[staking: Address, fee_bps: i128, seed: i128]`
    pub fn initialize(env: &Env, admin: Address, staking: Address, fee_bps: i128, seed: i128) {
        let topics = (Symbol::new(env, "initialize"), admin);
        env.events().publish(topics, (staking, fee_bps, seed));
    }

    /// - topics - `["add_liquidity", provider: Address]`
    /// - data - `[amount: i128, shares: i128]`
    pub fn add_liquidity(env: &Env, provider: Address, amount: i128, shares: i128) {
        let topics = (Symbol::new(env, "add_liquidity"), provider);
        env.events().publish(topics, (amount, shares));
    }

    /// - topics - `["remove_liquidity", provider: Address]`
    /// - data - `[shares: i128, payout: i128]`
    pub fn remove_liquidity(env: &Env, provider: Address, shares: i128, payout: i128) {
        let topics = (Symbol::new(env, "remove_liquidity"), provider);
        env.events().publish(topics, (shares, payout));
    }

    /// - topics - `["instant_unstake", recipient: Address]`
    /// - data - `[amount: i128, fee: i128, payout: i128]`
    pub fn instant_unstake(env: &Env, recipient: Address, amount: i128, fee: i128, payout: i128) {
        let topics = (Symbol::new(env, "instant_unstake"), recipient);
        env.events().publish(topics, (amount, fee, payout));
    }

    /// Emitted when the held receipt balance is sent into cooldown
    ///
    /// - topics - `["unstake_all", admin: Address]`
    /// - data - `[amount: i128]`
    pub fn unstake_all(env: &Env, admin: Address, amount: i128) {
        let topics = (Symbol::new(env, "unstake_all"), admin);
        env.events().publish(topics, amount);
    }

    /// - topics - `["claim_withdraw"]`
    /// - data - `[amount: i128]`
    pub fn claim_withdraw(env: &Env, amount: i128) {
        let topics = (Symbol::new(env, "claim_withdraw"),);
        env.events().publish(topics, amount);
    }

    /// - topics - `["set_fee", admin: Address]`
    /// - data - `[fee_bps: i128]`
    pub fn set_fee(env: &Env, admin: Address, fee_bps: i128) {
        let topics = (Symbol::new(env, "set_fee"), admin);
        env.events().publish(topics, fee_bps);
    }

    /// - topics - `["admin_handover", previous: Address]`
    /// - data - `[current: Address]`
    pub fn admin_handover(env: &Env, previous: Address, current: Address) {
        let topics = (Symbol::new(env, "admin_handover"), previous);
        env.events().publish(topics, current);
    }
}
