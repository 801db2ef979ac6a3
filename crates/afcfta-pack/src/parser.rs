//! Shared YAML loading with file-path context on every failure.

use std::path::Path;

use crate::error::{PackError, PackResult};

/// Load a YAML file into a strongly-typed struct.
pub fn load_yaml_typed<T: serde::de::DeserializeOwned>(path: &Path) -> PackResult<T> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PackError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PackError::Io(e)
        }
    })?;
    serde_yaml::from_str(&content).map_err(|e| PackError::YamlParse {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn missing_file_is_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");
        let err = load_yaml_typed::<BTreeMap<String, u32>>(&path).unwrap_err();
        assert!(matches!(err, PackError::FileNotFound { .. }));
    }

    #[test]
    fn malformed_yaml_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        std::fs::write(&path, "a: [1, 2\n").unwrap();
        let err = load_yaml_typed::<BTreeMap<String, Vec<u32>>>(&path).unwrap_err();
        assert!(matches!(err, PackError::YamlParse { .. }));
        assert!(err.to_string().contains("bad.yaml"));
    }

    #[test]
    fn typed_load_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ok.yaml");
        std::fs::write(&path, "a: 1\nb: 2\n").unwrap();
        let map: BTreeMap<String, u32> = load_yaml_typed(&path).unwrap();
        assert_eq!(map.get("b"), Some(&2));
    }
}
