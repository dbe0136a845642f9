//! Solidity interfaces of the contracts an adapter talks to.
//!
//! Defined with [`stylus_sdk::prelude::sol_interface`], which enables invoking
//! functions directly on the deployed hub, vault and asset contracts.

pub use callable::*;

mod callable {
    #![allow(missing_docs)]
    #![cfg_attr(coverage_nightly, coverage(off))]

    use alloc::vec;

    use stylus_sdk::prelude::sol_interface;

    sol_interface! {
        /// Authorization registry of the lending hub.
        interface HubInterface {
            function hasTag(address account, bytes32 tag) external view returns (bool);
        }
    }

    sol_interface! {
        /// Subset of the ERC-4626 vault interface used by the adapter.
        interface Erc4626Interface {
            function asset() external view returns (address asset);
            function deposit(uint256 assets, address receiver) external returns (uint256 shares);
            function withdraw(uint256 assets, address receiver, address owner) external returns (uint256 shares);
        }
    }

    sol_interface! {
        /// Subset of the ERC-20 interface used by the adapter.
        interface Erc20Interface {
            function approve(address spender, uint256 value) external returns (bool);
        }
    }
}
