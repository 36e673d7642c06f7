use pretty_assertions::assert_eq;
use scaffold_codegen::{CSharpModelGenerator, ModelCodeGenerator};
use scaffold_core::db::{Column, DatabaseModel, PrimaryKey, Table};
use scaffold_core::{ModelCodeGenerationOptions, ModelFactory, ModelReverseEngineerOptions};

use std::path::Path;

fn database() -> DatabaseModel {
    let mut blogs = Table::new("Blogs");
    blogs.columns = vec![
        Column::new("BlogId", "int"),
        Column::new("Title", "nvarchar(100)"),
    ];
    blogs.primary_key = Some(PrimaryKey::new(["BlogId"]));

    let mut tags = Table::new("Tags");
    tags.columns = vec![Column::new("Id", "uniqueidentifier")];
    tags.primary_key = Some(PrimaryKey::new(["Id"]));

    DatabaseModel {
        tables: vec![blogs, tags],
        ..DatabaseModel::default()
    }
    .linked()
}

#[test]
fn one_configuration_file_per_entity() {
    let model = ModelFactory::default()
        .create(&database(), &ModelReverseEngineerOptions::default())
        .unwrap();

    let options = ModelCodeGenerationOptions::new()
        .model_namespace("Blogging.Models")
        .context_namespace("Blogging.Data")
        .context_name("BloggingContext")
        .context_dir("Data")
        .suppress_on_configuring(true)
        .generate_entity_type_configuration_files(true)
        .entity_type_configuration_suffix("Config");

    let scaffolded = CSharpModelGenerator::default()
        .generate_model(&model, &options)
        .unwrap();

    let paths: Vec<_> = scaffolded.files().map(|file| file.path.as_path()).collect();
    assert_eq!(
        paths,
        [
            Path::new("Data/BloggingContext.cs"),
            Path::new("Blog.cs"),
            Path::new("Tag.cs"),
            Path::new("Data/BlogConfig.cs"),
            Path::new("Data/TagConfig.cs"),
        ]
    );

    let context = &scaffolded.context_file.code;
    assert!(context.contains(
        "        modelBuilder.ApplyConfiguration(new BlogConfig());\n        modelBuilder.ApplyConfiguration(new TagConfig());\n\n        OnModelCreatingPartial(modelBuilder);\n"
    ));
    assert!(!context.contains("modelBuilder.Entity<"));

    assert_eq!(
        scaffolded.file("Data/BlogConfig.cs").unwrap().code,
        r#"using System;
using System.Collections.Generic;
using Microsoft.EntityFrameworkCore;
using Microsoft.EntityFrameworkCore.Metadata.Builders;
using Blogging.Models;

#nullable disable

namespace Blogging.Data;

public partial class BlogConfig : IEntityTypeConfiguration<Blog>
{
    public void Configure(EntityTypeBuilder<Blog> entity)
    {
        entity.Property(e => e.BlogId).ValueGeneratedNever();

        entity.Property(e => e.Title)
            .IsRequired()
            .HasMaxLength(100);

        OnConfigurePartial(entity);
    }

    partial void OnConfigurePartial(EntityTypeBuilder<Blog> entity);
}
"#
    );

    let tag = &scaffolded.file("Data/TagConfig.cs").unwrap().code;
    assert!(tag.contains(
        "    public void Configure(EntityTypeBuilder<Tag> entity)\n    {\n        OnConfigurePartial(entity);\n    }\n"
    ));
}
