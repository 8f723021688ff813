//! Shared test utilities for the epigen test suite.
//!
//! Builds throwaway project trees: a host page with a container region and
//! a seed episode, plus per-episode asset folders.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A host page in the shape the generator expects: one container div whose
/// interior it owns, a seed episode inside it, and the toggle script after.
pub fn host_page() -> String {
    r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Episodes</title>
    <style>
        .episode { display: flex; }
        .read-more-link { border: none; }
    </style>
</head>
<body>
    <div class="container">
        <div class="episode">
            <div class="episode-content"><h2 class="episode-title">seed episode</h2></div>
        </div>
    </div>
    <script>
        function toggleDescription(btn) { /* expand/collapse */ }
    </script>
</body>
</html>
"#
    .to_string()
}

/// Create a project root holding the host page and an empty asset dir.
pub fn setup_site() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("index.html"), host_page()).unwrap();
    fs::create_dir_all(tmp.path().join("asset")).unwrap();
    tmp
}

/// Create `asset/<name>/description.txt` under `root` with the given content.
pub fn write_episode(root: &Path, name: &str, description: &str) {
    let dir = root.join("asset").join(name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("description.txt"), description).unwrap();
}
