//! Ports: seams the stores depend on instead of ambient globals.

pub mod clock;

pub use self::clock::{Clock, FixedClock, SystemClock};
