#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]
extern crate alloc;

use alloc::vec::Vec;

use alloy_primitives::{Address, U256};
use stylus_hub_adapters::adapter::erc4626::{
    self, Erc4626Adapter, IVaultAdapter,
};
use stylus_sdk::prelude::*;

#[entrypoint]
#[storage]
struct VaultAdapterExample {
    adapter: Erc4626Adapter,
}

#[public]
#[implements(IVaultAdapter<Error = erc4626::Error>)]
impl VaultAdapterExample {
    #[constructor]
    fn constructor(&mut self, hub: Address) -> Result<(), erc4626::Error> {
        self.adapter.constructor(hub)
    }
}

#[public]
impl IVaultAdapter for VaultAdapterExample {
    type Error = erc4626::Error;

    fn hub(&self) -> Address {
        self.adapter.hub()
    }

    fn supply(
        &mut self,
        pool: Address,
        owner: Address,
        asset: Address,
        amount: U256,
    ) -> Result<U256, Self::Error> {
        self.adapter.supply(pool, owner, asset, amount)
    }

    fn withdraw(
        &mut self,
        pool: Address,
        owner: Address,
        asset: Address,
        amount: U256,
    ) -> Result<U256, Self::Error> {
        self.adapter.withdraw(pool, owner, asset, amount)
    }
}

#[cfg(test)]
mod tests {
    use motsu::prelude::*;

    use super::*;

    #[motsu::test]
    fn constructs(
        contract: Contract<VaultAdapterExample>,
        alice: Address,
        hub: Address,
    ) {
        contract.sender(alice).constructor(hub).motsu_unwrap();

        assert_eq!(contract.sender(alice).hub(), hub);
    }

    #[motsu::test]
    fn forwards_validation_errors(
        contract: Contract<VaultAdapterExample>,
        alice: Address,
        hub: Address,
        bob: Address,
    ) {
        contract.sender(alice).constructor(hub).motsu_unwrap();

        let err = contract
            .sender(alice)
            .supply(Address::ZERO, bob, bob, U256::from(1))
            .motsu_expect_err("should revert");

        assert!(matches!(err, erc4626::Error::PoolZeroAddress(_)));
    }
}
