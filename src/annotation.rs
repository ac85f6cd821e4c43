//! Data structures for inactive-block annotations found in LLVM IR.

use std::path::PathBuf;

/// A single `inactive_block:` annotation decomposed into its fields.
///
/// Fields are carried verbatim from the annotation body except for
/// `code`, whose underscore encoding is reversed on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InactiveBlock {
    /// 1-based position in discovery order within the scanned file.
    pub index: usize,
    /// The full annotation body as matched (between the IR quotes).
    pub raw: String,
    /// Source range descriptor, e.g. `/path/file.c:36:1-42:7`. Not
    /// parsed or validated further.
    pub location: String,
    /// Preprocessor condition guarding the block, when recorded.
    pub condition: Option<String>,
    /// The inactive code itself, with the producer's underscore
    /// substitution already decoded back to spaces.
    pub code: Option<String>,
}

/// Result of scanning one IR file for inactive-block annotations.
#[derive(Debug, Clone, Default)]
pub struct IrScan {
    pub path: PathBuf,
    pub blocks: Vec<InactiveBlock>,
    /// One entry per annotation that matched the pattern but could not
    /// be decomposed (missing location token). Skipped, not fatal.
    pub warnings: Vec<String>,
}

impl IrScan {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            ..Default::default()
        }
    }

    /// Check whether the scan found any well-formed annotations.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Reverse the producer's token-safe encoding of the `code=` payload.
///
/// The IR producer replaces spaces and newlines with underscores so the
/// snippet stays a single whitespace-delimited token; both come back as
/// plain spaces.
pub fn decode_code(encoded: &str) -> String {
    encoded.replace('_', " ")
}
