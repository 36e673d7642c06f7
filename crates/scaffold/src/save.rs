use scaffold_codegen::ScaffoldedModel;
use scaffold_core::{Error, Result};

use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};

/// Absolute paths of the files written by a save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedModelFiles {
    pub context_file: PathBuf,
    pub additional_files: Vec<PathBuf>,
}

impl SavedModelFiles {
    pub fn files(&self) -> impl Iterator<Item = &Path> + '_ {
        std::iter::once(self.context_file.as_path())
            .chain(self.additional_files.iter().map(PathBuf::as_path))
    }
}

/// Writes every scaffolded file under `output_dir`.
///
/// All targets are checked before anything is written. Existing files fail
/// the save unless `overwrite` is set, and read-only files always do. Either
/// failure names every conflicting file.
pub(crate) fn save(
    scaffolded: &ScaffoldedModel,
    output_dir: &Path,
    overwrite: bool,
) -> Result<SavedModelFiles> {
    let base = absolute(output_dir)?;

    let targets: Vec<(&Path, PathBuf, &str)> = scaffolded
        .files()
        .map(|file| {
            (
                file.path.as_path(),
                normalize(&base.join(&file.path)),
                file.code.as_str(),
            )
        })
        .collect();

    let existing: Vec<_> = targets
        .iter()
        .filter(|(_, target, _)| target.exists())
        .collect();

    if !existing.is_empty() && !overwrite {
        let paths = existing.iter().map(|(path, ..)| path.to_path_buf());
        return Err(Error::existing_files(output_dir, paths.collect()));
    }

    let read_only: Vec<PathBuf> = existing
        .iter()
        .filter(|(_, target, _)| is_read_only(target))
        .map(|(path, ..)| path.to_path_buf())
        .collect();

    if !read_only.is_empty() {
        return Err(Error::read_only_files(output_dir, read_only));
    }

    for (_, target, code) in &targets {
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|err| Error::io(parent, err))?;
        }

        fs::write(target, code).map_err(|err| Error::io(target, err))?;
        info!(path = %target.display(), "wrote file");
    }

    let mut paths = targets.into_iter().map(|(_, target, _)| target);
    let context_file = paths
        .next()
        .ok_or_else(|| scaffold_core::err!("scaffolded model has no context file"))?;

    debug!(dir = %base.display(), overwrite, "saved scaffolded model");

    Ok(SavedModelFiles {
        context_file,
        additional_files: paths.collect(),
    })
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(normalize(path));
    }

    let cwd = std::env::current_dir().map_err(|err| Error::io(path, err))?;
    Ok(normalize(&cwd.join(path)))
}

/// Resolves `.` and `..` without touching the file system.
fn normalize(path: &Path) -> PathBuf {
    let mut ret = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                ret.pop();
            }
            component => ret.push(component.as_os_str()),
        }
    }

    ret
}

fn is_read_only(path: &Path) -> bool {
    fs::metadata(path)
        .map(|metadata| metadata.permissions().readonly())
        .unwrap_or(false)
}
