#![no_std]

mod contract;
mod events;
mod storage;


pub use crate::contract::{ LiquidityReserve, LiquidityReserveClient };
pub use crate::storage::Config;
