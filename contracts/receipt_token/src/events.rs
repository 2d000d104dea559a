use soroban_sdk::{ Address, Env, Symbol };

pub struct ReceiptTokenEvents {}

impl ReceiptTokenEvents {
    /// Emitted when the staking engine is registered as minter
    ///
    /// - topics - `["set_minter", admin: Address]`
    /// - data - `[minter: Address]`
    pub fn set_minter(env: &Env, admin: Address, minter: Address) {
        let topics = (Symbol::new(env, "set_minter"), admin);
        env.events().publish(topics, minter);
    }

    /// Emitted on every rebase, including the ones with nothing to distribute
    ///
    /// - topics - `["rebase", epoch: u64]`
    /// - data - `[profit: i128, total_supply: i128, index: u128]`
    pub fn rebase(env: &Env, epoch: u64, profit: i128, total_supply: i128, index: u128) {
        let topics = (Symbol::new(env, "rebase"), epoch);
        env.events().publish(topics, (profit, total_supply, index));
    }
}
