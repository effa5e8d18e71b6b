//! Loads `EvaluationOptions` from an optional TOML file, grounded on the
//! teacher's `config::NodeConfig::load` (file-if-present, defaults
//! otherwise).

use anyhow::{Context, Result};
use foldrunner_sandbox::EvaluationOptions;
use std::path::Path;

pub fn load_options(path: Option<&Path>) -> Result<EvaluationOptions> {
    let Some(path) = path else {
        return Ok(EvaluationOptions::default());
    };
    let content = std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("failed to parse {} as EvaluationOptions", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_yields_defaults() {
        let opts = load_options(None).unwrap();
        assert!(opts.ignore_exceptions);
    }

    #[test]
    fn partial_toml_fills_in_remaining_defaults() {
        let dir = std::env::temp_dir().join(format!("foldrunner-cli-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("options.toml");
        std::fs::write(&path, "internal_writes = true\n").unwrap();

        let opts = load_options(Some(&path)).unwrap();
        assert!(opts.internal_writes);
        assert!(opts.ignore_exceptions);

        std::fs::remove_file(&path).unwrap();
    }
}
