//! Locate annotation literals in IR text and decompose them into records.

use crate::annotation::{decode_code, InactiveBlock, IrScan};
use crate::error::{Error, Result};
use regex::Regex;
use std::path::Path;

/// Scan an LLVM IR file for inactive-block annotations.
///
/// Reads the whole file into memory, then performs a single
/// left-to-right pass. A read failure is fatal (no partial report); a
/// malformed annotation is skipped with a warning on the scan result.
pub fn extract_file(path: &Path) -> Result<IrScan> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(extract_content(&content, path))
}

/// Scan already-loaded IR text. Pure; the path is only carried into
/// the result for reporting.
pub fn extract_content(content: &str, path: &Path) -> IrScan {
    // The IR producer emits each annotation as a `c"..."` string
    // constant, so the body never contains a double quote.
    let re = Regex::new(r#"c"(inactive_block:[^"]*)""#).expect("Invalid regex");

    let mut scan = IrScan::new(path.to_path_buf());

    for captures in re.captures_iter(content) {
        let raw = captures.get(1).map(|m| m.as_str()).unwrap_or_default();
        let index = scan.blocks.len() + 1;

        match parse_block(index, raw) {
            Some(block) => scan.blocks.push(block),
            None => scan.warnings.push(format!(
                "skipping malformed annotation (no location token): {:?}",
                raw
            )),
        }
    }

    scan
}

/// Decompose one matched annotation body into an [`InactiveBlock`].
///
/// Token 0 is the `inactive_block:` marker and token 1 the location;
/// `condition=` and `code=` may appear anywhere after it, located by
/// prefix scan with the first occurrence winning. Returns `None` when
/// the location token is missing.
fn parse_block(index: usize, raw: &str) -> Option<InactiveBlock> {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    let location = tokens.get(1)?;

    let condition = tokens
        .iter()
        .find_map(|t| t.strip_prefix("condition="))
        .map(str::to_string);

    let code = tokens
        .iter()
        .find_map(|t| t.strip_prefix("code="))
        .map(decode_code);

    Some(InactiveBlock {
        index,
        raw: raw.to_string(),
        location: location.to_string(),
        condition,
        code,
    })
}
