//! Integration tests for R4C.
//!
//! The tests in `tests/` drive a running admin server over HTTP and are
//! `#[ignore]`d by default. Start the server first:
//!
//! ```bash
//! cargo run -p r4c-admin
//! ```
//!
//! then run them with:
//!
//! ```bash
//! cargo test -p r4c-integration-tests -- --ignored
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]
