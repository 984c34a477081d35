//! Paths command.

use std::path::Path;

use crate::cli::output;
use crate::core::options::ProviderOptions;
use crate::core::paths::secret_paths;
use crate::error::Result;

/// Print the remote paths the provider would query, in merge order.
pub fn execute(options_path: &Path) -> Result<()> {
    let options = ProviderOptions::load(options_path)?;
    let paths = secret_paths(&options)?;

    output::header(&format!("Secret paths (mount: {})", options.mount_point));
    for path in &paths {
        output::list_item(path);
    }
    Ok(())
}
