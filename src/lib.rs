//! # Raffle ticket sheet tool
#![warn(missing_docs)]

pub mod cli;
