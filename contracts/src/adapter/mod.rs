//! Adapters moving hub funds in and out of external yield sources.
pub mod abi;
pub mod erc4626;
pub mod hub;
