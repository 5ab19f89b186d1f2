//! Fill configuration

use crate::error::FillResult;
use crate::matcher::{FieldMatcher, SynonymTable};
use std::path::Path;
use tracing::info;

/// Environment variable naming a synonym table file
pub const SYNONYMS_ENV: &str = "ENQUIRY_FILL_SYNONYMS";

/// Settings for one fill run
#[derive(Debug, Clone, Default)]
pub struct FillConfig {
    pub synonyms: SynonymTable,
}

impl FillConfig {
    /// Built-in synonym table, or the YAML table at `synonyms` when given
    pub fn load(synonyms: Option<&Path>) -> FillResult<Self> {
        let synonyms = match synonyms {
            Some(path) => {
                let table = SynonymTable::load(path)?;
                info!(path = %path.display(), entries = table.len(), "loaded synonym table");
                table
            }
            None => SynonymTable::default(),
        };
        Ok(Self { synonyms })
    }

    pub fn matcher(&self) -> FieldMatcher {
        FieldMatcher::new(self.synonyms.clone())
    }
}
