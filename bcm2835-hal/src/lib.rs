//! Direct register GPIO access for the BCM2835, from Linux userspace.
//!
//! The GPIO register block is mapped into the process through
//! `/dev/mem` (or `/dev/gpiomem`), and pin levels, functions, and pull
//! resistors are driven by writing those registers directly.
//!
//! ```no_run
//! use std::os::fd::AsFd;
//! use bcm2835_hal::{config::Config, controller::Controller, pac::Pull};
//!
//! let mem = std::fs::File::options()
//!     .read(true)
//!     .write(true)
//!     .open("/dev/gpiomem")?;
//! let gpio = Controller::map(mem.as_fd(), &Config::gpiomem())?;
//!
//! gpio.configure_pull(17, Pull::Up);
//! gpio.set_level(22);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Register layout of the GPIO block.
pub use bcm2835 as pac;

pub mod config;
pub mod controller;
pub mod delay;
pub mod error;
pub mod global;
pub mod gpio;
pub mod regs;
