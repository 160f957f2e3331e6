use balance_probe_core::CheckpointTable;
use derive_builder::Builder;
use std::path::PathBuf;

use crate::error::EngineError;

/// File scanned when no path is given: the admin page component the
/// built-in checkpoint table describes.
pub const DEFAULT_SOURCE: &str = "src/app/admin/page.tsx";

#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default = "PathBuf::from(DEFAULT_SOURCE)")]
    pub path: PathBuf,
    #[builder(default = "CheckpointTable::admin_page()")]
    pub checkpoints: CheckpointTable,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_SOURCE),
            checkpoints: CheckpointTable::admin_page(),
        }
    }
}

impl From<ConfigBuilderError> for EngineError {
    fn from(e: ConfigBuilderError) -> Self {
        Self::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_match_default() {
        let built = ConfigBuilder::default().build().unwrap();
        assert_eq!(built, Config::default());
        assert_eq!(built.path, PathBuf::from(DEFAULT_SOURCE));
        assert_eq!(built.checkpoints.len(), 12);
    }

    #[test]
    fn builder_overrides() {
        let table = CheckpointTable::from_entries([(1, "top")]).unwrap();
        let config = ConfigBuilder::default()
            .path("other.tsx")
            .checkpoints(table.clone())
            .build()
            .unwrap();
        assert_eq!(config.path, PathBuf::from("other.tsx"));
        assert_eq!(config.checkpoints, table);
    }
}
