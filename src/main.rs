//! override-yaml: override deployment YAML templates at container start
//!
//! Prints the storage, main and client configurations as one `---`-separated
//! stream, or rewrites the templates in place with `--save`.

use anyhow::Result;

fn main() -> Result<()> {
    override_yaml::cli::run()
}
