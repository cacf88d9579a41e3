//! salesviz entry point

use anyhow::Result;
use std::path::Path;

fn main() -> Result<()> {
    salesviz_common::logging::init_default_logging()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    // Outputs always go to the working directory; there are no flags.
    salesviz::pipeline::run(Path::new("."))?;
    Ok(())
}
