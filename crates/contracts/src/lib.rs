//! Shared domain contracts for the storefront admin.
//!
//! Framework-free: these types are consumed both by the WASM frontend and by
//! whatever backend serves the admin API, so nothing in here may depend on
//! web or server crates.

pub mod domain;
