// crates/cli/src/config.rs
use crate::args::Args;
use balance_probe_core::CheckpointTable;
pub use balance_probe_engine::config::{Config, ConfigBuilder};
use balance_probe_engine::error::EngineError;

impl TryFrom<Args> for Config {
    type Error = EngineError;

    /// Without `--checkpoint` flags the built-in admin page table applies.
    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let checkpoints = if args.checkpoints.is_empty() {
            CheckpointTable::admin_page()
        } else {
            CheckpointTable::from_entries(args.checkpoints.into_iter().map(|c| (c.line, c.label)))?
        };

        Ok(ConfigBuilder::default()
            .path(args.path)
            .checkpoints(checkpoints)
            .build()?)
    }
}
