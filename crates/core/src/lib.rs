#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod notes;
pub mod search;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
