//! Register layout of the BCM2835 GPIO block.
//!
//! This crate only describes *where* things live: register offsets,
//! how a pin number maps onto a register word and bit field, and the
//! codes written into those fields. [header] maps board header
//! positions to line numbers. Actually touching the registers is left
//! to `bcm2835-hal`.
#![cfg_attr(not(test), no_std)]

pub mod header;
pub mod map;

mod decode;
pub use decode::*;

mod codes;
pub use codes::*;
