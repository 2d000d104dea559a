// Ledger lifetimes

pub const DAY_IN_LEDGERS: u32 = 17280;

pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const BALANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const BALANCE_LIFETIME_THRESHOLD: u32 = BALANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

// Fees

pub const MAX_BPS: i128 = 10_000;
/// Ceiling for the instant unstake discount (25%).
pub const MAX_FEE_BPS: i128 = 2_500;

// Elastic supply

/// Shares backing one unit of receipt balance before any rebase. Keeps
/// `u128` shares good for supplies up to ~3.4e29 raw units.
pub const SHARE_SCALE: u128 = 1_000_000_000;
/// Growth index reported before any rebase.
pub const INDEX_BASE: u128 = 1_000_000_000;

// Allowances handed to the yield pool and the staking engine live this long.
pub const ALLOWANCE_LEDGERS: u32 = DAY_IN_LEDGERS;
