use soroban_sdk::{ Address, Env, Symbol };

pub struct EscrowEvents {}

impl EscrowEvents {
    /// Emitted when the escrow is set up
    ///
    /// - topics - `["initialize", owner: Address]`
    /// - data - `[receipt_token: Address]`
    pub fn initialize(env: &Env, owner: Address, receipt_token: Address) {
        let topics = (Symbol::new(env, "initialize"), owner);
        env.events().publish(topics, receipt_token);
    }

    /// Emitted when receipt balance is placed in custody
    ///
    /// - topics - `["deposit", beneficiary: Address]`
    /// - data - `[amount: i128, release_at: u64]`
    pub fn deposit(env: &Env, beneficiary: Address, amount: i128, release_at: u64) {
        let topics = (Symbol::new(env, "deposit"), beneficiary);
        env.events().publish(topics, (amount, release_at));
    }

    /// Emitted when custody ends for part or all of a record
    ///
    /// - topics - `["release", beneficiary: Address, recipient: Address]`
    /// - data - `[amount: i128, remaining_shares: u128]`
    pub fn release(
        env: &Env,
        beneficiary: Address,
        recipient: Address,
        amount: i128,
        remaining_shares: u128
    ) {
        let topics = (Symbol::new(env, "release"), beneficiary, recipient);
        env.events().publish(topics, (amount, remaining_shares));
    }
}
