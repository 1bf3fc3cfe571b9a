use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::types::Facility;

/// Load a facility registry snapshot from a JSON file.
///
/// The engine does not care how the snapshot was produced (database export,
/// cache dump, static seed file); it only requires the shape to match
/// [`Facility`]. The caller owns consistency of the snapshot for the
/// duration of any ranking call made against it.
pub fn load_registry(path: &Path) -> Result<Vec<Facility>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read facility registry at {}", path.display()))?;

    let facilities: Vec<Facility> = serde_json::from_str(&content)
        .with_context(|| format!("Invalid facility registry JSON in {}", path.display()))?;

    Ok(facilities)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_registry_file_errors() {
        let err = load_registry(Path::new("/nonexistent/registry.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read facility registry"));
    }
}
