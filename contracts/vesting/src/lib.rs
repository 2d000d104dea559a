#![no_std]

mod contract;
mod events;
mod storage;


pub use crate::contract::{ VestingEscrow, VestingEscrowClient };
pub use crate::storage::Config;
