//! Page modules.
//!
//! The portfolio is a single page; it composes the section components and
//! owns no state of its own.

pub mod home;
