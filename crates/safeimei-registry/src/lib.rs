//! Registry boundary for the SafeIMEI front end
//!
//! The UI talks to the registry only through [`RegistryService`]. The
//! in-memory [`MockRegistry`] answers with fixture data after a configurable
//! delay; a networked client can be dropped in behind the same trait.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

mod delay;
pub mod error;
pub mod mock;
pub mod service;

pub use error::{RegistryError, RegistryResult};
pub use mock::{MockRegistry, RegistryStats};
pub use service::{AuthSession, RegistryService};
