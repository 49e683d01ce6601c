#![cfg_attr(not(test), no_std)]

pub mod button;
pub mod compass;
pub mod config;
pub mod engine;
pub mod errors;
pub mod lights;
pub mod logging;
pub mod patterns;

#[cfg(test)]
mod mock;

#[cfg(not(any(feature = "log", feature = "defmt")))]
compile_error!("enable the `log` feature or the `defmt` feature");
