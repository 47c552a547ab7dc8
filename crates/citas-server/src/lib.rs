//! Citas Server Library
//!
//! Exposes the bootstrap sequence so the binary and the integration
//! tests share the same initialization code.

pub mod bootstrap;
