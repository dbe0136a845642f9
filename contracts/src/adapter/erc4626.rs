//! Adapter between the lending hub and an ERC-4626 vault.
//!
//! The hub supplies liquidity by calling [`IVaultAdapter::supply`]: the
//! adapter approves the vault to pull `amount` of the asset and deposits it
//! on behalf of `owner`. Funds come back through [`IVaultAdapter::withdraw`],
//! which only accounts tagged with [`ACTIVE_LOAN_TAG`] in the hub may call.
//!
//! Both operations check that the vault's underlying asset is the expected
//! one before touching any funds.
//!
//! NOTE: [`IVaultAdapter::withdraw`] passes `owner` as both the receiver and
//! the owner of the underlying [ERC-4626] withdrawal.
//!
//! [ERC-4626]: https://eips.ethereum.org/EIPS/eip-4626
use alloc::{vec, vec::Vec};

use alloy_primitives::{Address, B256, U256};
pub use sol::*;
use stylus_sdk::{
    call::{Call, MethodError},
    evm, msg,
    prelude::*,
    storage::StorageAddress,
};

use crate::{
    adapter::{
        abi::{Erc20Interface, Erc4626Interface, HubInterface},
        hub::ACTIVE_LOAN_TAG,
    },
    utils::validator::{
        self, AmountZero, AssetZeroAddress, OwnerZeroAddress, PoolZeroAddress,
    },
};

#[cfg_attr(coverage_nightly, coverage(off))]
mod sol {
    use alloy_sol_macro::sol;

    sol! {
        /// Emitted when `amount` of `asset` is deposited into `pool` for
        /// `owner`.
        ///
        /// * `pool` - Address of the vault.
        /// * `owner` - Account receiving the vault shares.
        /// * `asset` - Underlying asset of the vault.
        /// * `amount` - Amount of `asset` deposited.
        /// * `shares` - Value returned by the vault.
        #[derive(Debug)]
        #[allow(missing_docs)]
        event Supplied(
            address indexed pool,
            address indexed owner,
            address indexed asset,
            uint256 amount,
            uint256 shares
        );

        /// Emitted when `amount` of `asset` is withdrawn from `pool` to
        /// `owner`.
        ///
        /// * `pool` - Address of the vault.
        /// * `owner` - Account owning the shares and receiving the assets.
        /// * `asset` - Underlying asset of the vault.
        /// * `amount` - Amount of `asset` withdrawn.
        /// * `shares` - Value returned by the vault.
        #[derive(Debug)]
        #[allow(missing_docs)]
        event Withdrawn(
            address indexed pool,
            address indexed owner,
            address indexed asset,
            uint256 amount,
            uint256 shares
        );
    }

    sol! {
        /// The hub is [`Address::ZERO`].
        #[derive(Debug)]
        #[allow(missing_docs)]
        error HubZeroAddress();
        /// The `account` is missing a hub tag.
        ///
        /// * `account` - Account that was found to not be authorized.
        /// * `tag` - The missing tag.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error AddressMissingHubTag(address account, bytes32 tag);
        /// The vault manages a different asset than the expected one.
        ///
        /// * `actual` - Asset reported by the vault.
        /// * `expected` - Asset passed by the caller.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error InvalidVaultAsset(address actual, address expected);
        /// A call to an external contract failed.
        ///
        /// * `target` - Address of the called contract.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error VaultAdapterFailedOperation(address target);
    }
}

/// An [`Erc4626Adapter`] error.
#[derive(SolidityError, Debug)]
pub enum Error {
    /// The pool (vault) is [`Address::ZERO`].
    PoolZeroAddress(PoolZeroAddress),
    /// The owner is [`Address::ZERO`].
    OwnerZeroAddress(OwnerZeroAddress),
    /// The asset is [`Address::ZERO`].
    AssetZeroAddress(AssetZeroAddress),
    /// The amount is zero.
    AmountZero(AmountZero),
    /// The hub is [`Address::ZERO`].
    HubZeroAddress(HubZeroAddress),
    /// The caller is missing a hub tag.
    MissingHubTag(AddressMissingHubTag),
    /// The vault manages a different asset than the expected one.
    InvalidVaultAsset(InvalidVaultAsset),
    /// A call to the hub, the vault or the asset failed.
    FailedOperation(VaultAdapterFailedOperation),
}

#[cfg_attr(coverage_nightly, coverage(off))]
impl From<validator::Error> for Error {
    fn from(value: validator::Error) -> Self {
        match value {
            validator::Error::PoolZeroAddress(e) => Error::PoolZeroAddress(e),
            validator::Error::OwnerZeroAddress(e) => Error::OwnerZeroAddress(e),
            validator::Error::AssetZeroAddress(e) => Error::AssetZeroAddress(e),
            validator::Error::AmountZero(e) => Error::AmountZero(e),
        }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
impl MethodError for Error {
    fn encode(self) -> Vec<u8> {
        self.into()
    }
}

impl Error {
    fn failed_operation(target: Address) -> Self {
        Error::FailedOperation(VaultAdapterFailedOperation { target })
    }
}

/// State of an [`Erc4626Adapter`].
#[storage]
pub struct Erc4626Adapter {
    /// Address of the hub authorizing withdrawals.
    hub: StorageAddress,
}

/// NOTE: Implementation of [`TopLevelStorage`] to be able use `&mut self` when
/// calling other contracts and not `&mut (impl TopLevelStorage +
/// BorrowMut<Self>)`. Should be fixed in the future by the Stylus team.
unsafe impl TopLevelStorage for Erc4626Adapter {}

/// Interface of an adapter moving hub funds in and out of a vault.
pub trait IVaultAdapter {
    /// The error type associated to the trait implementation.
    type Error: Into<Vec<u8>>;

    /// Returns the address of the hub authorizing withdrawals.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    #[must_use]
    fn hub(&self) -> Address;

    /// Deposits `amount` of `asset` held by the adapter into `pool` on behalf
    /// of `owner`. Returns the value returned by the vault's `deposit`.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `pool` - Address of the vault.
    /// * `owner` - Account receiving the vault shares.
    /// * `asset` - Expected underlying asset of `pool`.
    /// * `amount` - Amount of `asset` to deposit.
    ///
    /// # Errors
    ///
    /// * [`Error::PoolZeroAddress`] - If `pool` is [`Address::ZERO`].
    /// * [`Error::OwnerZeroAddress`] - If `owner` is [`Address::ZERO`].
    /// * [`Error::AssetZeroAddress`] - If `asset` is [`Address::ZERO`].
    /// * [`Error::AmountZero`] - If `amount` is zero.
    /// * [`Error::InvalidVaultAsset`] - If `pool` manages another asset.
    /// * [`Error::FailedOperation`] - If the approval or the deposit fails.
    ///
    /// # Events
    ///
    /// * [`Supplied`].
    fn supply(
        &mut self,
        pool: Address,
        owner: Address,
        asset: Address,
        amount: U256,
    ) -> Result<U256, Self::Error>;

    /// Withdraws `amount` of `asset` from `pool` to `owner`. Returns the value
    /// returned by the vault's `withdraw`.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `pool` - Address of the vault.
    /// * `owner` - Account owning the shares and receiving the assets.
    /// * `asset` - Expected underlying asset of `pool`.
    /// * `amount` - Amount of `asset` to withdraw.
    ///
    /// # Errors
    ///
    /// * [`Error::PoolZeroAddress`] - If `pool` is [`Address::ZERO`].
    /// * [`Error::OwnerZeroAddress`] - If `owner` is [`Address::ZERO`].
    /// * [`Error::AssetZeroAddress`] - If `asset` is [`Address::ZERO`].
    /// * [`Error::AmountZero`] - If `amount` is zero.
    /// * [`Error::MissingHubTag`] - If [`msg::sender`] is not tagged with
    ///   [`ACTIVE_LOAN_TAG`].
    /// * [`Error::InvalidVaultAsset`] - If `pool` manages another asset.
    /// * [`Error::FailedOperation`] - If the hub or the vault call fails.
    ///
    /// # Events
    ///
    /// * [`Withdrawn`].
    fn withdraw(
        &mut self,
        pool: Address,
        owner: Address,
        asset: Address,
        amount: U256,
    ) -> Result<U256, Self::Error>;
}

#[public]
#[implements(IVaultAdapter<Error = Error>)]
impl Erc4626Adapter {
    /// Constructor.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `hub` - Address of the hub authorizing withdrawals.
    ///
    /// # Errors
    ///
    /// * [`Error::HubZeroAddress`] - If `hub` is [`Address::ZERO`].
    #[constructor]
    pub fn constructor(&mut self, hub: Address) -> Result<(), Error> {
        if hub.is_zero() {
            return Err(Error::HubZeroAddress(HubZeroAddress {}));
        }
        self.hub.set(hub);
        Ok(())
    }
}

#[public]
impl IVaultAdapter for Erc4626Adapter {
    type Error = Error;

    fn hub(&self) -> Address {
        self.hub()
    }

    fn supply(
        &mut self,
        pool: Address,
        owner: Address,
        asset: Address,
        amount: U256,
    ) -> Result<U256, Self::Error> {
        self.supply(pool, owner, asset, amount)
    }

    fn withdraw(
        &mut self,
        pool: Address,
        owner: Address,
        asset: Address,
        amount: U256,
    ) -> Result<U256, Self::Error> {
        self.withdraw(pool, owner, asset, amount)
    }
}

impl Erc4626Adapter {
    /// Check [`IVaultAdapter::hub()`] for more information.
    #[must_use]
    pub fn hub(&self) -> Address {
        self.hub.get()
    }

    /// Check [`IVaultAdapter::supply()`] for more information.
    #[allow(clippy::missing_errors_doc)]
    pub fn supply(
        &mut self,
        pool: Address,
        owner: Address,
        asset: Address,
        amount: U256,
    ) -> Result<U256, Error> {
        validator::check_all(pool, owner, asset, amount)?;
        self._check_vault_asset(pool, asset)?;

        let approved = Erc20Interface::new(asset)
            .approve(Call::new_in(self), pool, amount)
            .map_err(|_| Error::failed_operation(asset))?;
        if !approved {
            return Err(Error::failed_operation(asset));
        }

        let shares = Erc4626Interface::new(pool)
            .deposit(Call::new_in(self), amount, owner)
            .map_err(|_| Error::failed_operation(pool))?;

        evm::log(Supplied { pool, owner, asset, amount, shares });
        Ok(shares)
    }

    /// Check [`IVaultAdapter::withdraw()`] for more information.
    #[allow(clippy::missing_errors_doc)]
    pub fn withdraw(
        &mut self,
        pool: Address,
        owner: Address,
        asset: Address,
        amount: U256,
    ) -> Result<U256, Error> {
        validator::check_all(pool, owner, asset, amount)?;
        self.only_tagged(msg::sender(), ACTIVE_LOAN_TAG.into())?;
        self._check_vault_asset(pool, asset)?;

        let shares = Erc4626Interface::new(pool)
            .withdraw(Call::new_in(self), amount, owner, owner)
            .map_err(|_| Error::failed_operation(pool))?;

        evm::log(Withdrawn { pool, owner, asset, amount, shares });
        Ok(shares)
    }

    /// Checks that `account` carries `tag` in the hub.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `account` - Account to check.
    /// * `tag` - Tag identifier.
    ///
    /// # Errors
    ///
    /// * [`Error::MissingHubTag`] - If `account` is not tagged with `tag`.
    /// * [`Error::FailedOperation`] - If the call to the hub fails.
    pub fn only_tagged(
        &mut self,
        account: Address,
        tag: B256,
    ) -> Result<(), Error> {
        let hub = self.hub();
        let tagged = HubInterface::new(hub)
            .has_tag(Call::new_in(self), account, tag)
            .map_err(|_| Error::failed_operation(hub))?;
        if !tagged {
            return Err(Error::MissingHubTag(AddressMissingHubTag {
                account,
                tag,
            }));
        }
        Ok(())
    }

    /// Checks that `pool` manages `asset`.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidVaultAsset`] - If `pool` reports another asset.
    /// * [`Error::FailedOperation`] - If the call to `pool` fails.
    fn _check_vault_asset(
        &mut self,
        pool: Address,
        asset: Address,
    ) -> Result<(), Error> {
        let actual = Erc4626Interface::new(pool)
            .asset(Call::new_in(self))
            .map_err(|_| Error::failed_operation(pool))?;
        if actual != asset {
            return Err(Error::InvalidVaultAsset(InvalidVaultAsset {
                actual,
                expected: asset,
            }));
        }
        Ok(())
    }
}
