//! Configuration management for volt-vue
//!
//! The tool works without any configuration: every setting defaults to the
//! upstream PrimeVue Volt layout. A config file only needs the keys it wants
//! to change.
//!
//! ## Architecture
//!
//! - `schema` - Configuration data structures and validation
//! - `io` - Reading the config file
//! - `paths` - Directory path management
//!
//! ## Usage
//!
//! ```rust
//! use volt_vue::config;
//!
//! # fn example() -> anyhow::Result<()> {
//! // Load config (returns default if file doesn't exist)
//! let config = config::load_config()?;
//! println!("components come from {}", config.repository);
//! # Ok(())
//! # }
//! ```

pub mod io;
pub mod paths;
pub mod schema;

pub use io::{load_config, load_config_from};
pub use paths::{CONFIG_ENV, default_snapshot_root, get_config_path, get_volt_dir};
pub use schema::VoltConfig;
