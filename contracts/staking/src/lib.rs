#![no_std]

mod contract;
mod controller;
mod events;
mod staking;
mod storage;


pub use crate::contract::{ Staking, StakingClient };
pub use crate::storage::{ Config, Epoch, PauseFlags, WithdrawalState, Wiring };
