//! Observability for CoreRank.
//! `tracing` crate with `EnvFilter`, filter read from `CORERANK_LOG`.

pub mod setup;

pub use setup::init_tracing;
