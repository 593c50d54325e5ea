//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it re-exports the domain and owns configuration loading.
//!
//! ## Config loading
//! ```rust,no_run
//! use basket_kernel::config::load_basket_config;
//!
//! let cfg = load_basket_config(None::<&str>).unwrap();
//! assert!(cfg.pricing.vat_rate >= 0.0);
//! ```
pub mod config;

pub use basket_domain as domain;
