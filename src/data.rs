//! Loading extracted document data
//!
//! Extraction output is expected to be bare JSON, but language models often
//! wrap it in a markdown code fence anyway. The fence is stripped before
//! parsing.

use crate::error::FillResult;
use crate::types::ExtractedData;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Strip a surrounding ```` ```json ```` / ```` ``` ```` fence, if present
pub fn strip_code_fence(text: &str) -> &str {
    let mut content = text.trim();
    if let Some(rest) = content.strip_prefix("```json") {
        content = rest;
    }
    if let Some(rest) = content.strip_prefix("```") {
        content = rest;
    }
    if let Some(rest) = content.strip_suffix("```") {
        content = rest;
    }
    content.trim()
}

/// Parse extraction output into [`ExtractedData`]
pub fn parse_extracted(text: &str) -> FillResult<ExtractedData> {
    let value: serde_json::Value = serde_json::from_str(strip_code_fence(text))?;
    let data = ExtractedData::from_json(value)?;
    debug!(keys = data.len(), systems = data.systems().len(), "parsed extracted data");
    Ok(data)
}

/// Read and parse an extraction output file
pub fn load_extracted(path: &Path) -> FillResult<ExtractedData> {
    let content = fs::read_to_string(path)?;
    parse_extracted(&content)
}
