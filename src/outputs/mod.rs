//! Consumers of the fetched article list.
//!
//! # Submodules
//!
//! - [`text`]: renders articles as a plain-text listing for the terminal
//! - [`json`]: writes a [`crate::models::Headlines`] export to disk
//!
//! # Output Structure
//!
//! ```text
//! json_output_dir/
//! └── 2025-05-06/
//!     ├── 08-00-00.json
//!     └── 19-30-12.json
//! ```

pub mod json;
pub mod text;
