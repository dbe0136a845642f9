//! Input validation shared by the adapter operations.
//!
//! Every check fails fast with its own error, so callers can tell exactly
//! which argument was rejected. [`check_all`] runs the checks in the order
//! pool, owner, asset, amount.
use alloy_primitives::{Address, U256};
pub use sol::*;
use stylus_sdk::prelude::*;

#[cfg_attr(coverage_nightly, coverage(off))]
mod sol {
    use alloy_sol_macro::sol;

    sol! {
        /// The pool (vault) is [`Address::ZERO`].
        #[derive(Debug)]
        #[allow(missing_docs)]
        error PoolZeroAddress();
        /// The owner is [`Address::ZERO`].
        #[derive(Debug)]
        #[allow(missing_docs)]
        error OwnerZeroAddress();
        /// The asset is [`Address::ZERO`].
        #[derive(Debug)]
        #[allow(missing_docs)]
        error AssetZeroAddress();
        /// The amount is zero.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error AmountZero();
    }
}

/// An error returned by one of the validator checks.
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
}

/// Checks that `pool` is not [`Address::ZERO`].
///
/// # Errors
///
/// * [`Error::PoolZeroAddress`] - If `pool` is [`Address::ZERO`].
pub fn check_pool(pool: Address) -> Result<(), Error> {
    if pool.is_zero() {
        return Err(Error::PoolZeroAddress(PoolZeroAddress {}));
    }
    Ok(())
}

/// Checks that `owner` is not [`Address::ZERO`].
///
/// # Errors
///
/// * [`Error::OwnerZeroAddress`] - If `owner` is [`Address::ZERO`].
pub fn check_owner(owner: Address) -> Result<(), Error> {
    if owner.is_zero() {
        return Err(Error::OwnerZeroAddress(OwnerZeroAddress {}));
    }
    Ok(())
}

/// Checks that `asset` is not [`Address::ZERO`].
///
/// # Errors
///
/// * [`Error::AssetZeroAddress`] - If `asset` is [`Address::ZERO`].
pub fn check_asset(asset: Address) -> Result<(), Error> {
    if asset.is_zero() {
        return Err(Error::AssetZeroAddress(AssetZeroAddress {}));
    }
    Ok(())
}

/// Checks that `amount` is strictly positive.
///
/// # Errors
///
/// * [`Error::AmountZero`] - If `amount` is zero.
pub fn check_amount(amount: U256) -> Result<(), Error> {
    if amount.is_zero() {
        return Err(Error::AmountZero(AmountZero {}));
    }
    Ok(())
}

/// Runs [`check_pool`], [`check_owner`], [`check_asset`] and
/// [`check_amount`], in that order.
///
/// # Arguments
///
/// * `pool` - Address of the vault.
/// * `owner` - Beneficiary of the operation.
/// * `asset` - Underlying asset of the operation.
/// * `amount` - Amount of `asset` moved.
///
/// # Errors
///
/// * The error of the first failing check.
pub fn check_all(
    pool: Address,
    owner: Address,
    asset: Address,
    amount: U256,
) -> Result<(), Error> {
    check_pool(pool)?;
    check_owner(owner)?;
    check_asset(asset)?;
    check_amount(amount)
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{address, uint};
    use proptest::prelude::*;

    use super::*;

    const POOL: Address = address!("A11CEacF9aa32246d767FCCD72e02d6bCbcC375d");
    const OWNER: Address = address!("B0B0cB49ec2e96DF5F5fFB081acaE66A2cBBc2e2");
    const ASSET: Address = address!("DEADBEEFDEADBEEFDEADBEEFDEADBEEFDEADBEEF");

    #[test]
    fn check_pool_reverts_when_zero() {
        let err = check_pool(Address::ZERO).expect_err("should revert");
        assert!(matches!(err, Error::PoolZeroAddress(_)));
    }

    #[test]
    fn check_owner_reverts_when_zero() {
        let err = check_owner(Address::ZERO).expect_err("should revert");
        assert!(matches!(err, Error::OwnerZeroAddress(_)));
    }

    #[test]
    fn check_asset_reverts_when_zero() {
        let err = check_asset(Address::ZERO).expect_err("should revert");
        assert!(matches!(err, Error::AssetZeroAddress(_)));
    }

    #[test]
    fn check_amount_reverts_when_zero() {
        let err = check_amount(U256::ZERO).expect_err("should revert");
        assert!(matches!(err, Error::AmountZero(_)));
    }

    #[test]
    fn check_all_accepts_valid_input() {
        assert!(check_all(POOL, OWNER, ASSET, uint!(1_U256)).is_ok());
    }

    #[test]
    fn check_all_reports_pool_first() {
        let err =
            check_all(Address::ZERO, Address::ZERO, Address::ZERO, U256::ZERO)
                .expect_err("should revert");
        assert!(matches!(err, Error::PoolZeroAddress(_)));
    }

    #[test]
    fn check_all_reports_owner_before_asset() {
        let err = check_all(POOL, Address::ZERO, Address::ZERO, U256::ZERO)
            .expect_err("should revert");
        assert!(matches!(err, Error::OwnerZeroAddress(_)));
    }

    #[test]
    fn check_all_reports_asset_before_amount() {
        let err = check_all(POOL, OWNER, Address::ZERO, U256::ZERO)
            .expect_err("should revert");
        assert!(matches!(err, Error::AssetZeroAddress(_)));
    }

    #[test]
    fn check_all_reports_amount_last() {
        let err =
            check_all(POOL, OWNER, ASSET, U256::ZERO).expect_err("should revert");
        assert!(matches!(err, Error::AmountZero(_)));
    }

    #[test]
    fn errors_encode_as_solidity_errors() {
        use alloy_sol_types::SolError;

        let encoded: Vec<u8> = Error::AmountZero(AmountZero {}).into();
        assert_eq!(encoded, AmountZero {}.abi_encode());
        assert_eq!(encoded.len(), 4);
    }

    fn non_zero_address() -> impl Strategy<Value = Address> {
        any::<[u8; 20]>()
            .prop_filter("non-zero address", |bytes| bytes != &[0u8; 20])
            .prop_map(Address::from)
    }

    proptest! {
        #[test]
        fn check_all_accepts_any_non_zero_input(
            pool in non_zero_address(),
            owner in non_zero_address(),
            asset in non_zero_address(),
            amount in 1u128..,
        ) {
            prop_assert!(check_all(pool, owner, asset, U256::from(amount)).is_ok());
        }

        #[test]
        fn check_all_rejects_zero_amount_for_any_addresses(
            pool in non_zero_address(),
            owner in non_zero_address(),
            asset in non_zero_address(),
        ) {
            let err = check_all(pool, owner, asset, U256::ZERO).unwrap_err();
            prop_assert!(matches!(err, Error::AmountZero(_)));
        }
    }
}
