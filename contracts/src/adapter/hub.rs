//! Tags the lending hub attaches to accounts.
//!
//! Tags are `bytes32` identifiers derived from their name:
//!
//! ```no_run
//! pub const MY_TAG: [u8; 32] =
//!     keccak_const::Keccak256::new().update(b"MY_TAG").finalize();
//! ```

/// Carried by accounts with an open loan in the hub. Required to withdraw
/// through an adapter.
pub const ACTIVE_LOAN_TAG: [u8; 32] =
    keccak_const::Keccak256::new().update(b"ACTIVE_LOAN_TAG").finalize();

#[cfg(test)]
mod tests {
    use alloy_primitives::{keccak256, B256};

    use super::ACTIVE_LOAN_TAG;

    #[motsu::test]
    fn active_loan_tag_is_keccak_of_its_name() {
        assert_eq!(B256::from(ACTIVE_LOAN_TAG), keccak256(b"ACTIVE_LOAN_TAG"));
    }
}
