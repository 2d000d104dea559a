use soroban_sdk::{ testutils::{ Address as _, Ledger }, token, Address, Env, String };
use yieldstake_liquidity_reserve::{ LiquidityReserve, LiquidityReserveClient };
use yieldstake_receipt_token::{ ReceiptToken, ReceiptTokenClient };
use yieldstake_vesting::{ VestingEscrow, VestingEscrowClient };

use super::pool::{ MockYieldPool, MockYieldPoolClient };
use crate::contract::{ Staking, StakingClient };

pub const START_LEDGER: u32 = 1_000;
pub const EPOCH_LENGTH: u32 = 100;
pub const CYCLE_LENGTH: u32 = 200;

pub struct Options {
    pub warmup_epochs: u64,
    pub request_window: u32,
    pub fee_bps: i128,
    pub seed: i128,
}

impl Default for Options {
    fn default() -> Self {
        Options { warmup_epochs: 0, request_window: 0, fee_bps: 1_000, seed: 100_000 }
    }
}

pub struct Protocol<'a> {
    pub env: Env,
    pub admin: Address,
    pub base: token::Client<'a>,
    pub base_admin: token::StellarAssetClient<'a>,
    pub receipt: ReceiptTokenClient<'a>,
    pub warmup: VestingEscrowClient<'a>,
    pub cooldown: VestingEscrowClient<'a>,
    pub reserve: LiquidityReserveClient<'a>,
    pub pool: MockYieldPoolClient<'a>,
    pub staking: StakingClient<'a>,
}

/// Deploys and wires every contract of the protocol. Epoch 1 ends
/// `EPOCH_LENGTH` ledgers after `START_LEDGER`, pool cycle 0 starts at it.
pub fn setup_protocol<'a>(options: Options) -> Protocol<'a> {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().with_mut(|li| {
        li.sequence_number = START_LEDGER;
    });

    let admin = Address::generate(&env);

    let asset = env.register_stellar_asset_contract_v2(admin.clone());
    let base = token::Client::new(&env, &asset.address());
    let base_admin = token::StellarAssetClient::new(&env, &asset.address());

    let pool = MockYieldPoolClient::new(&env, &env.register(MockYieldPool, ()));
    pool.initialize(&base.address, &CYCLE_LENGTH);

    let staking = StakingClient::new(&env, &env.register(Staking, ()));
    staking.initialize(
        &admin,
        &base.address,
        &pool.address,
        &EPOCH_LENGTH,
        &1,
        &(START_LEDGER + EPOCH_LENGTH),
        &options.warmup_epochs,
        &options.request_window
    );

    let receipt = ReceiptTokenClient::new(&env, &env.register(ReceiptToken, ()));
    receipt.initialize(
        &admin,
        &7u32,
        &String::from_str(&env, "Staked Yield"),
        &String::from_str(&env, "stYLD")
    );
    receipt.set_minter(&admin, &staking.address);

    let warmup = VestingEscrowClient::new(&env, &env.register(VestingEscrow, ()));
    warmup.initialize(&staking.address, &receipt.address);
    let cooldown = VestingEscrowClient::new(&env, &env.register(VestingEscrow, ()));
    cooldown.initialize(&staking.address, &receipt.address);

    base_admin.mint(&admin, &options.seed);
    let reserve = LiquidityReserveClient::new(&env, &env.register(LiquidityReserve, ()));
    reserve.initialize(
        &admin,
        &base.address,
        &receipt.address,
        &staking.address,
        &options.fee_bps,
        &options.seed
    );

    staking.wire(&admin, &receipt.address, &warmup.address, &cooldown.address, &reserve.address);

    Protocol { env, admin, base, base_admin, receipt, warmup, cooldown, reserve, pool, staking }
}

impl Protocol<'_> {
    pub fn user(&self, funds: i128) -> Address {
        let user = Address::generate(&self.env);
        self.base_admin.mint(&user, &funds);
        user
    }

    /// Lets the engine pull `amount` of the user's wallet balance.
    pub fn approve(&self, user: &Address, amount: i128) {
        let expiration = self.env.ledger().sequence() + 10_000;
        self.receipt.approve(user, &self.staking.address, &amount, &expiration);
    }

    pub fn stake_and_claim(&self, user: &Address, amount: i128) {
        self.staking.stake(user, &amount);
        self.staking.claim(user);
    }

    pub fn advance(&self, ledgers: u32) {
        self.env.ledger().with_mut(|li| {
            li.sequence_number += ledgers;
        });
    }

    /// Moves to the end of the running epoch and processes it.
    pub fn next_epoch(&self) {
        let end = self.staking.query_epoch().end_ledger;
        self.env.ledger().with_mut(|li| {
            li.sequence_number = end;
        });
        assert!(self.staking.rebase());
    }

    /// Sum of every receipt balance the protocol knows about.
    pub fn tracked_supply(&self, users: &[Address]) -> i128 {
        let contracts = [
            &self.warmup.address,
            &self.cooldown.address,
            &self.reserve.address,
            &self.staking.address,
        ];
        users
            .iter()
            .chain(contracts)
            .map(|holder| self.receipt.balance(holder))
            .sum()
    }
}
