//! Browser adapters.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only modules that call `web_sys`. Each function compiles to a no-op
//! outside the `csr` build so state and component code stays testable
//! natively.

pub mod browser;
pub mod dark_mode;
pub mod persistence;
