//! Source discovery: find files to count.
//!
//! This module handles the first stage of the pipeline - discovering what
//! files to count, with include/exclude glob patterns.
//!
//! ## Example
//!
//! ```rust,ignore
//! use textstatlib::source::{discover_files, FilterConfig};
//!
//! let filter = FilterConfig::new()
//!     .include("**/*.md")?
//!     .exclude("**/drafts/**")?;
//! let files = discover_files("docs", &filter)?;
//! ```

pub mod filter;

pub use filter::{discover_files, discover_paths, FilterConfig};
