#![no_std]

pub mod constants;
pub mod error;
pub mod guard;
pub mod interfaces;
pub mod macros;
pub mod math;
pub mod ownership;
pub mod types;
