use scaffold::{
    JsonDatabaseModelFactory, ReverseEngineerScaffolder, ScaffoldedFile, ScaffoldedModel,
};

use std::fs;
use std::path::{Path, PathBuf};

fn scaffolded() -> ScaffoldedModel {
    let mut model = ScaffoldedModel::new(ScaffoldedFile::new("BloggingContext.cs", "// context"));
    for (path, code) in [("Blog.cs", "// blog"), ("Post.cs", "// post")] {
        model.push(ScaffoldedFile::new(path, code)).unwrap();
    }
    model
}

fn scaffolder() -> ReverseEngineerScaffolder {
    ReverseEngineerScaffolder::new(JsonDatabaseModelFactory)
}

#[test]
fn writes_every_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("Models");

    let saved = scaffolder().save(&scaffolded(), &out, false).unwrap();

    assert_eq!(saved.context_file, out.join("BloggingContext.cs"));
    assert_eq!(
        saved.additional_files,
        [out.join("Blog.cs"), out.join("Post.cs")]
    );
    assert!(saved.files().all(Path::is_absolute));

    assert_eq!(fs::read_to_string(out.join("Blog.cs")).unwrap(), "// blog");
    assert_eq!(
        fs::read_to_string(out.join("BloggingContext.cs")).unwrap(),
        "// context"
    );
}

#[test]
fn existing_files_fail_together() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Blog.cs"), "mine").unwrap();
    fs::write(dir.path().join("Post.cs"), "mine").unwrap();

    let err = scaffolder()
        .save(&scaffolded(), dir.path(), false)
        .unwrap_err();

    assert!(err.is_existing_files());
    assert_eq!(
        err.conflicting_files().unwrap(),
        [PathBuf::from("Blog.cs"), PathBuf::from("Post.cs")]
    );
    assert_eq!(
        err.to_string(),
        format!(
            "The following file(s) already exist in directory '{}': Blog.cs, Post.cs. \
             Use the force flag to overwrite these files.",
            dir.path().display()
        )
    );

    // Nothing was written, not even the file without a conflict.
    assert!(!dir.path().join("BloggingContext.cs").exists());
    assert_eq!(
        fs::read_to_string(dir.path().join("Blog.cs")).unwrap(),
        "mine"
    );
}

#[test]
fn overwrite_replaces_existing_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Blog.cs"), "mine").unwrap();

    scaffolder().save(&scaffolded(), dir.path(), true).unwrap();

    assert_eq!(
        fs::read_to_string(dir.path().join("Blog.cs")).unwrap(),
        "// blog"
    );
}

#[test]
fn read_only_files_fail_together() {
    let dir = tempfile::tempdir().unwrap();

    for name in ["Blog.cs", "Post.cs"] {
        let path = dir.path().join(name);
        fs::write(&path, "mine").unwrap();
        let mut permissions = fs::metadata(&path).unwrap().permissions();
        permissions.set_readonly(true);
        fs::set_permissions(&path, permissions).unwrap();
    }

    let err = scaffolder()
        .save(&scaffolded(), dir.path(), true)
        .unwrap_err();

    assert!(err.is_read_only_files());
    assert_eq!(
        err.conflicting_files().unwrap(),
        [PathBuf::from("Blog.cs"), PathBuf::from("Post.cs")]
    );
    assert!(!dir.path().join("BloggingContext.cs").exists());

    // Without overwrite the existing files are reported first.
    let err = scaffolder()
        .save(&scaffolded(), dir.path(), false)
        .unwrap_err();
    assert!(err.is_existing_files());
}

#[test]
fn context_outside_the_output_directory() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("Models");

    let context = ScaffoldedFile::new("../Data/BloggingContext.cs", "// context");
    let mut model = ScaffoldedModel::new(context);
    model.push(ScaffoldedFile::new("Blog.cs", "")).unwrap();

    let saved = scaffolder().save(&model, &out, false).unwrap();

    let expected = dir.path().join("Data").join("BloggingContext.cs");
    assert_eq!(saved.context_file, expected);
    assert!(!saved.context_file.to_string_lossy().contains(".."));
    assert_eq!(fs::read_to_string(expected).unwrap(), "// context");
}
