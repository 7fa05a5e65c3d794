// src/cli/parsers.rs
use std::path::PathBuf;

/// Parse an input file operand. Anything starting with `-` is an unknown
/// option, including a bare `-`.
pub fn parse_input_file(s: &str) -> Result<PathBuf, String> {
    if s.starts_with('-') {
        return Err(format!("unknown option '{s}'"));
    }
    Ok(PathBuf::from(s))
}
