/*!
# Hub Adapters for Stylus

Adapters connecting a lending-protocol hub to external yield sources, written
in Rust for
[Arbitrum Stylus](https://docs.arbitrum.io/stylus/stylus-gentle-introduction).

The hub moves funds through an adapter: on `supply` the adapter approves the
vault and deposits on behalf of an owner, on `withdraw` it checks that the
caller is authorized by the hub and pulls funds back to the owner.

> This project has never been audited nor thoroughly reviewed for security
> vulnerabilities. Do not use in production.

## Usage

Add `stylus-hub-adapters` to your `Cargo.toml`:

```toml
[dependencies]
stylus-hub-adapters = "x.x.x"
```

Then embed an adapter into your own contract:

```rust,ignore
use stylus_hub_adapters::adapter::erc4626::{self, Erc4626Adapter, IVaultAdapter};

#[entrypoint]
#[storage]
struct MyAdapter {
    adapter: Erc4626Adapter,
}

#[public]
#[implements(IVaultAdapter<Error = erc4626::Error>)]
impl MyAdapter {
    #[constructor]
    fn constructor(&mut self, hub: Address) -> Result<(), erc4626::Error> {
        self.adapter.constructor(hub)
    }
}
```

See `demos/vault-adapter` for a complete contract.
*/

#![allow(
    clippy::module_name_repetitions,
    clippy::used_underscore_items,
    clippy::unreadable_literal
)]
#![cfg_attr(not(any(test, feature = "std", feature = "export-abi")), no_std)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![deny(rustdoc::broken_intra_doc_links)]
extern crate alloc;

pub mod adapter;
pub mod utils;
