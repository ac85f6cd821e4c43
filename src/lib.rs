//! # irblocks
//!
//! A library for extracting `inactive_block:` annotations from LLVM IR
//! text and rendering them as a human-readable report. The annotations
//! are emitted by an instrumentation pass as `c"..."` string constants
//! describing preprocessor-skipped code regions.
//!
//! ## Example
//!
//! ```rust,no_run
//! use irblocks::{extractor, output};
//! use std::path::Path;
//!
//! let scan = extractor::extract_file(Path::new("demo.ll")).unwrap();
//! print!("{}", output::format_report(&scan));
//! ```

pub mod annotation;
pub mod error;
pub mod extractor;
pub mod output;

pub use annotation::{decode_code, InactiveBlock, IrScan};
pub use error::{Error, Result};
pub use extractor::{extract_content, extract_file};
pub use output::format_report;
