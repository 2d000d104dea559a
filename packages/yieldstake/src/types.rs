use soroban_sdk::contracttype;

/// Escrow record held for one beneficiary.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Claim {
    /// Nominal receipt amount deposited, summed over merged deposits.
    pub amount: i128,
    /// Elastic shares backing the record; their value grows with rebases.
    pub shares: u128,
    /// Epoch (warmup) or pool cycle (cooldown) at which the record vests.
    pub release_at: u64,
}

impl Claim {
    pub fn is_empty(&self) -> bool {
        self.shares == 0
    }
}

/// Withdrawal request as tracked by the external yield pool.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RequestedWithdrawal {
    pub min_cycle: u64,
    pub amount: i128,
}

/// Where a user's stake currently sits. Several can apply at once.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StakeState {
    Idle,
    /// (receipt value, release epoch)
    Warming(i128, u64),
    /// Transferable receipt balance.
    Active(i128),
    /// (nominal amount, release cycle)
    Cooling(i128, u64),
    /// Cooldown amount that `claim_withdraw` would pay now.
    Withdrawable(i128),
}
