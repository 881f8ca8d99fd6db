//! Domain error handling for Privlens.
//!
//! All fallible operations return [`Result<T, PrivlensError>`]:
//!
//! ```rust,no_run
//! use privlens::domain::{PrivlensError, Result};
//!
//! fn example() -> Result<()> {
//!     // Errors are automatically converted using the ? operator
//!     let config = privlens::config::load_config("privlens.toml")?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod result;

pub use errors::PrivlensError;
pub use result::Result;
