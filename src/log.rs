//! `debug!`/`warn!` for the navigation core.
//!
//! Events: `warn!` when a latitude, longitude or bearing rejects a value,
//! `debug!` when a negative polar radius is flipped, when a converter is
//! installed and on every polyline render.
//!
//! Without the `tracing` feature the macros expand to nothing.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};
