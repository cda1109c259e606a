use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{CouncilError, ElectionResults, ElectionStatus, ElectionView, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CouncilConfig {
    #[serde(default)]
    pub results: ResultsConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultsConfig {
    /// Trim candidate identifiers when results are loaded.
    pub normalize_identifiers: bool,
    /// Fail instead of rendering nothing when a completed election has no results.
    pub strict: bool,
}

impl Default for ResultsConfig {
    fn default() -> Self {
        Self {
            normalize_identifiers: true,
            strict: false,
        }
    }
}

/// Widest separator rule the terminal renderer will draw.
pub const MAX_RULE_WIDTH: usize = 200;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub show_trophy: bool,
    /// Requested separator width; read through [`DisplayConfig::rule_width`].
    pub rule_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_trophy: true,
            rule_width: 60,
        }
    }
}

impl DisplayConfig {
    /// Separator width, capped at [`MAX_RULE_WIDTH`].
    pub fn rule_width(&self) -> usize {
        self.rule_width.min(MAX_RULE_WIDTH)
    }
}

impl CouncilConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CouncilError::Config(format!("Cannot read {}: {}", path.display(), e))
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply the boundary rules to results as they come in.
    pub fn prepare_results(&self, results: ElectionResults) -> ElectionResults {
        if self.results.normalize_identifiers {
            results.normalized()
        } else {
            results
        }
    }

    /// Build the view, honoring strict mode.
    pub fn build_view(
        &self,
        status: ElectionStatus,
        results: Option<ElectionResults>,
    ) -> Result<ElectionView> {
        let results = results.map(|r| self.prepare_results(r));
        if self.results.strict {
            ElectionView::try_from_parts(status, results)
        } else {
            Ok(ElectionView::from_parts(status, results))
        }
    }
}
