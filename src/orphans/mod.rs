//! Orphan source file detection.
//!
//! A candidate file is reported when its stem (`Button` for `Button.tsx`)
//! does not appear anywhere in the contents of the other searched files.
//! This is plain substring matching: a file mentioned only in a comment
//! counts as referenced, and an import through a barrel file under a
//! different name does not.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::OrphanSettings;
use crate::error::{DeployCheckError, Result};

/// A source file collected during the scan.
#[derive(Debug)]
struct SourceFile {
    path: PathBuf,
    stem: String,
    candidate: bool,
    content: Option<String>,
}

/// Find source files that no other file appears to reference.
///
/// `src_dir` is resolved against `project_root`. Returned paths are relative
/// to `project_root` and sorted.
pub fn find_orphans(
    project_root: &Path,
    src_dir: &Path,
    settings: &OrphanSettings,
) -> Result<Vec<PathBuf>> {
    let root = project_root.join(src_dir);
    if !root.is_dir() {
        return Err(DeployCheckError::SourceDirNotFound { path: root });
    }

    let mut files = Vec::new();
    collect_files(&root, settings, &mut files)?;
    debug!(
        "Scanned {} files under {}",
        files.len(),
        root.display()
    );

    let mut orphans: Vec<PathBuf> = files
        .iter()
        .enumerate()
        .filter(|(_, file)| file.candidate)
        .filter(|(index, file)| !is_referenced(&file.stem, *index, &files))
        .map(|(_, file)| {
            file.path
                .strip_prefix(project_root)
                .unwrap_or(&file.path)
                .to_path_buf()
        })
        .collect();

    orphans.sort();
    Ok(orphans)
}

/// A file's own content is excluded from the search. A search over every
/// file, the candidate included, would never report a component that names
/// itself.
fn is_referenced(stem: &str, own_index: usize, files: &[SourceFile]) -> bool {
    files
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != own_index)
        .filter_map(|(_, file)| file.content.as_deref())
        .any(|content| content.contains(stem))
}

fn collect_files(dir: &Path, settings: &OrphanSettings, files: &mut Vec<SourceFile>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let file_type = entry.file_type()?;

        if file_type.is_dir() {
            collect_files(&path, settings, files)?;
            continue;
        }
        if !path.is_file() {
            continue;
        }

        let Some(extension) = path.extension().and_then(|e| e.to_str()) else {
            continue;
        };
        let file_name = entry.file_name().to_string_lossy().into_owned();
        let candidate = has_extension(&settings.extensions, extension)
            && !settings.ignore.iter().any(|name| *name == file_name);
        let searched = has_extension(&settings.search_extensions, extension);
        if !candidate && !searched {
            continue;
        }

        let content = if searched {
            // Non-UTF-8 bytes are replaced rather than failing the scan.
            Some(String::from_utf8_lossy(&fs::read(&path)?).into_owned())
        } else {
            None
        };
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        files.push(SourceFile {
            path,
            stem,
            candidate,
            content,
        });
    }

    Ok(())
}

fn has_extension(extensions: &[String], extension: &str) -> bool {
    extensions
        .iter()
        .any(|e| e.trim_start_matches('.') == extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn scan(root: &Path) -> Result<Vec<PathBuf>> {
        find_orphans(root, Path::new("src"), &OrphanSettings::default())
    }

    #[test]
    fn referenced_component_is_not_an_orphan() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "src/App.tsx", "import Button from './Button';");
        write(temp.path(), "src/Button.tsx", "export default function B() {}");

        assert!(scan(temp.path()).unwrap().is_empty());
    }

    #[test]
    fn unreferenced_component_is_reported() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "src/App.tsx", "export default function App() {}");
        write(temp.path(), "src/components/Legacy.tsx", "export const Legacy = 1;");

        let orphans = scan(temp.path()).unwrap();
        assert_eq!(orphans, vec![PathBuf::from("src/components/Legacy.tsx")]);
    }

    #[test]
    fn own_content_does_not_count_as_reference() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "src/main.tsx", "render()");
        write(temp.path(), "src/Widget.tsx", "export function Widget() {}");

        assert_eq!(
            scan(temp.path()).unwrap(),
            vec![PathBuf::from("src/Widget.tsx")]
        );
    }

    #[test]
    fn entry_points_are_ignored() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "src/main.tsx", "");
        write(temp.path(), "src/App.tsx", "");
        write(temp.path(), "src/vite-env.d.ts", "");

        assert!(scan(temp.path()).unwrap().is_empty());
    }

    #[test]
    fn css_counts_as_reference() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "src/theme.css", ".Banner { color: red; }");
        write(temp.path(), "src/Banner.tsx", "export {}");

        assert!(scan(temp.path()).unwrap().is_empty());
    }

    #[test]
    fn other_extensions_are_neither_candidates_nor_references() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "src/notes.md", "Chart");
        write(temp.path(), "src/Chart.tsx", "export {}");

        assert_eq!(
            scan(temp.path()).unwrap(),
            vec![PathBuf::from("src/Chart.tsx")]
        );
    }

    #[test]
    fn results_are_sorted() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "src/zeta.ts", "");
        write(temp.path(), "src/alpha.ts", "");
        write(temp.path(), "src/lib/mid.ts", "");

        assert_eq!(
            scan(temp.path()).unwrap(),
            vec![
                PathBuf::from("src/alpha.ts"),
                PathBuf::from("src/lib/mid.ts"),
                PathBuf::from("src/zeta.ts"),
            ]
        );
    }

    #[test]
    fn non_utf8_content_is_searched_lossily() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("src/index.ts");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, b"\xff\xfe import Card from './Card';").unwrap();
        write(temp.path(), "src/Card.tsx", "");

        let orphans = scan(temp.path()).unwrap();
        assert_eq!(orphans, vec![PathBuf::from("src/index.ts")]);
    }

    #[test]
    fn missing_source_dir_is_an_error() {
        let temp = TempDir::new().unwrap();

        let err = scan(temp.path()).unwrap_err();
        assert!(matches!(err, DeployCheckError::SourceDirNotFound { .. }));
    }

    #[test]
    fn custom_source_dir() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "app/Orphan.ts", "");

        let orphans =
            find_orphans(temp.path(), Path::new("app"), &OrphanSettings::default()).unwrap();
        assert_eq!(orphans, vec![PathBuf::from("app/Orphan.ts")]);
    }
}
