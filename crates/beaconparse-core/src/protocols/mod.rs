//! Protocol decoding modules.
//!
//! Each protocol follows a layered structure:
//! - `layout`: byte offsets and wire constants (source of truth)
//! - `reader`: safe byte access over one payload
//! - `parser`: domain-level decoding (no direct byte indexing)
//!
//! Decoders are pure and contain no I/O; the top-level parser routes
//! sections to them and owns the error propagation policy.

pub mod eddystone;
pub mod ibeacon;
pub mod kontakt;
