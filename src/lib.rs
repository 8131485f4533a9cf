//! statcode
//!
//! Like man pages, but for HTTP status codes and headers.
//!
//! The library follows a Pure Core / Impure Shell split: `model`, `source`
//! and `view_state` never touch the terminal, `view` owns the terminal
//! session and the event loop.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod view;
pub mod view_state;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
