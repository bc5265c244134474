//! Client-side state models.
//!
//! DESIGN
//! ======
//! Every module here is plain data plus pure transitions. Components hold the
//! structs in `RwSignal`s and call these functions from event handlers, so
//! the filtering, validation and persistence rules are testable natively.

pub mod contact;
pub mod gallery;
pub mod projects;
pub mod scroll;
pub mod theme;
pub mod ui;
