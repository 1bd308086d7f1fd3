//! Client-side flows for the device-maintainer application portal.
//!
//! Two flows share one remote host and nothing else: the application form
//! (validated draft, company autocomplete, submission) and the status
//! lookup. Each flow owns its state in an explicit object so it can be
//! driven by any front end; the CLI in `services/cli` is one such driver.

pub mod client;
pub mod config;
pub mod error;
pub mod flows;
pub mod telemetry;
