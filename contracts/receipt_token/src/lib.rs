#![no_std]

mod allowance;
mod balance;
mod contract;
mod elastic;
mod events;
mod storage;

#[cfg(test)]
mod tests;

pub use crate::contract::{ ReceiptToken, ReceiptTokenClient };
pub use crate::storage::{ ElasticState, RebaseRecord };
