use anyhow::Result;
use camino::{Utf8Path, Utf8PathBuf};

use crate::templates;

pub const README_FILE: &str = "README.md";
const README_TEMPLATE: &str = "README.md";

/// Write the structure guide into `root`, overwriting any previous copy.
pub fn write(root: &Utf8Path) -> Result<Utf8PathBuf> {
    let destination = root.join(README_FILE);
    let body = templates::get_string(README_TEMPLATE)?;
    templates::write_to(&destination, &body)?;
    tracing::info!(path = %destination, "wrote structure guide");
    Ok(destination)
}
