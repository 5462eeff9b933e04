use std::path::{Path, PathBuf};

use crate::error::ArthurError;

/// The directory a new project is scaffolded into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTarget {
    pub name: String,
    pub path: PathBuf,
    /// The directory `arthur` was invoked from.
    pub origin: PathBuf,
}

impl ProjectTarget {
    /// Resolve `name` under `parent`. The name is used verbatim; only the
    /// empty name is refused, since it would resolve to `parent` itself.
    pub fn new(parent: &Path, name: &str) -> Result<Self, ArthurError> {
        if name.is_empty() {
            return Err(ArthurError::InvalidProjectName(name.to_string()));
        }
        Ok(Self {
            name: name.to_string(),
            path: parent.join(name),
            origin: parent.to_path_buf(),
        })
    }

    /// Create the project directory unless it already exists.
    ///
    /// Existing contents are left untouched. Returns `true` if the
    /// directory was created by this call.
    pub fn prepare(&self) -> Result<bool, ArthurError> {
        if self.path.is_dir() {
            tracing::debug!(path = %self.path.display(), "project directory already exists");
            return Ok(false);
        }
        if self.path.exists() {
            return Err(ArthurError::NotADirectory(self.path.clone()));
        }
        std::fs::create_dir_all(&self.path).map_err(|source| ArthurError::CreateDir {
            path: self.path.clone(),
            source,
        })?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let target = ProjectTarget::new(tmp.path(), "demo").unwrap();

        assert!(target.prepare().unwrap());
        assert!(tmp.path().join("demo").is_dir());
        assert_eq!(target.path, tmp.path().join("demo"));
    }

    #[test]
    fn existing_directory_is_kept() {
        let tmp = tempfile::tempdir().unwrap();
        let existing = tmp.path().join("demo");
        std::fs::create_dir(&existing).unwrap();
        std::fs::write(existing.join("package.json"), "{}").unwrap();

        let target = ProjectTarget::new(tmp.path(), "demo").unwrap();
        assert!(!target.prepare().unwrap());
        assert_eq!(
            std::fs::read_to_string(existing.join("package.json")).unwrap(),
            "{}"
        );
    }

    #[test]
    fn file_in_the_way_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("demo"), "").unwrap();

        let target = ProjectTarget::new(tmp.path(), "demo").unwrap();
        assert!(matches!(
            target.prepare(),
            Err(ArthurError::NotADirectory(_))
        ));
    }

    #[test]
    fn empty_name_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(matches!(
            ProjectTarget::new(tmp.path(), ""),
            Err(ArthurError::InvalidProjectName(_))
        ));
    }

    #[test]
    fn whitespace_name_is_used_verbatim() {
        let tmp = tempfile::tempdir().unwrap();
        let target = ProjectTarget::new(tmp.path(), "  ").unwrap();

        assert!(target.prepare().unwrap());
        assert_eq!(target.path, tmp.path().join("  "));
        assert!(tmp.path().join("  ").is_dir());
    }

    #[test]
    fn nested_name_creates_parents() {
        let tmp = tempfile::tempdir().unwrap();
        let target = ProjectTarget::new(tmp.path(), "apps/api").unwrap();

        assert!(target.prepare().unwrap());
        assert!(tmp.path().join("apps").join("api").is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn unwritable_parent_propagates_create_error() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().unwrap();
        let locked = tmp.path().join("locked");
        std::fs::create_dir(&locked).unwrap();
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o555)).unwrap();

        let target = ProjectTarget::new(&locked, "demo").unwrap();
        let result = target.prepare();
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();

        // root ignores directory permissions
        if locked.join("demo").exists() {
            return;
        }
        assert!(matches!(result, Err(ArthurError::CreateDir { .. })));
    }
}
