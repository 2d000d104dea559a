pub mod epoch;
pub mod position;
pub mod withdrawal;
