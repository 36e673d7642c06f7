use scaffold_core::{Error, Result};

use std::path::{Path, PathBuf};

/// A generated source file. The path is relative to the output directory and
/// may leave it through `..` segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldedFile {
    pub path: PathBuf,
    pub code: String,
}

/// Everything a generator produced for one model.
///
/// No two files share a path. Paths are compared ignoring case so the files
/// can be written to case-insensitive file systems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldedModel {
    pub context_file: ScaffoldedFile,
    additional_files: Vec<ScaffoldedFile>,
}

impl ScaffoldedFile {
    pub fn new(path: impl Into<PathBuf>, code: impl Into<String>) -> ScaffoldedFile {
        ScaffoldedFile {
            path: path.into(),
            code: code.into(),
        }
    }
}

impl ScaffoldedModel {
    pub fn new(context_file: ScaffoldedFile) -> ScaffoldedModel {
        ScaffoldedModel {
            context_file,
            additional_files: vec![],
        }
    }

    /// Adds a file, rejecting a path that is already taken.
    pub fn push(&mut self, file: ScaffoldedFile) -> Result<()> {
        if self.file(&file.path).is_some() {
            return Err(Error::duplicate_output_path(file.path));
        }

        self.additional_files.push(file);
        Ok(())
    }

    pub fn additional_files(&self) -> &[ScaffoldedFile] {
        &self.additional_files
    }

    /// The context file followed by every additional file.
    pub fn files(&self) -> impl Iterator<Item = &ScaffoldedFile> + '_ {
        std::iter::once(&self.context_file).chain(&self.additional_files)
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<&ScaffoldedFile> {
        self.files()
            .find(|file| same_path(&file.path, path.as_ref()))
    }
}

fn same_path(a: &Path, b: &Path) -> bool {
    a.to_string_lossy().to_lowercase() == b.to_string_lossy().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_paths_are_rejected() {
        let mut model = ScaffoldedModel::new(ScaffoldedFile::new("BloggingContext.cs", ""));
        model.push(ScaffoldedFile::new("Blog.cs", "")).unwrap();

        let err = model.push(ScaffoldedFile::new("blog.cs", "")).unwrap_err();
        assert!(err.is_duplicate_output_path());

        let err = model
            .push(ScaffoldedFile::new("BloggingContext.cs", ""))
            .unwrap_err();
        assert!(err.is_duplicate_output_path());

        assert_eq!(model.additional_files().len(), 1);
    }

    #[test]
    fn files_start_with_the_context() {
        let mut model = ScaffoldedModel::new(ScaffoldedFile::new("../Data/Context.cs", ""));
        model.push(ScaffoldedFile::new("Blog.cs", "")).unwrap();

        let paths: Vec<_> = model.files().map(|f| f.path.clone()).collect();
        let expected = ["../Data/Context.cs", "Blog.cs"].map(PathBuf::from);
        assert_eq!(paths, expected);
        assert!(model.file("BLOG.cs").is_some());
    }
}
