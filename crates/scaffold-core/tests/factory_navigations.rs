use pretty_assertions::assert_eq;
use scaffold_core::db::{Column, DatabaseModel, ForeignKey, PrimaryKey, ReferentialAction, Table};
use scaffold_core::model::{DeleteBehavior, Entity, Model, Note};
use scaffold_core::{ModelFactory, ModelReverseEngineerOptions};

fn table(name: &str, columns: Vec<Column>) -> Table {
    let mut table = Table::new(name);
    table.primary_key = Some(PrimaryKey::new([columns[0].name.clone()]));
    table.columns = columns;
    table
}

fn fk(columns: &[&str], principal: &str, principal_columns: &[&str]) -> ForeignKey {
    ForeignKey::new(
        columns.iter().copied(),
        principal,
        principal_columns.iter().copied(),
    )
}

fn create(tables: Vec<Table>) -> Model {
    let database = DatabaseModel {
        tables,
        ..DatabaseModel::default()
    }
    .linked();

    ModelFactory::default()
        .create(&database, &ModelReverseEngineerOptions::default())
        .unwrap()
}

fn entity<'a>(model: &'a Model, name: &str) -> &'a Entity {
    model.entities().find(|e| e.name == name).unwrap()
}

fn navigation_names(entity: &Entity) -> Vec<&str> {
    entity.navigations.iter().map(|n| n.name.as_str()).collect()
}

/// Every navigation's inverse names it back, and each foreign key lists
/// exactly its two ends.
fn assert_symmetric(model: &Model) {
    for entity in model.entities() {
        for navigation in &entity.navigations {
            let inverse = model.navigation(navigation.inverse.unwrap());
            assert_eq!(inverse.inverse, Some(navigation.id));
            assert_eq!(inverse.foreign_key, navigation.foreign_key);
            assert_ne!(inverse.on_dependent, navigation.on_dependent);
        }

        for fk in &entity.foreign_keys {
            let dependent = model.navigation(fk.dependent_to_principal.unwrap());
            let principal = model.navigation(fk.principal_to_dependent.unwrap());
            assert_eq!(dependent.inverse, Some(principal.id));
            assert_eq!(principal.inverse, Some(dependent.id));
            assert!(dependent.on_dependent);
            assert_eq!(dependent.target, fk.principal);
            assert_eq!(principal.target, entity.id);
        }
    }
}

fn blogging() -> Vec<Table> {
    let blogs = table(
        "Blogs",
        vec![
            Column::new("Id", "int"),
            Column::new("Url", "nvarchar(max)"),
        ],
    );

    let mut posts = table(
        "Posts",
        vec![
            Column::new("PostId", "int"),
            Column::new("BlogId", "int"),
            Column::new("Title", "nvarchar(200)"),
        ],
    );
    let mut blog_fk = fk(&["BlogId"], "Blogs", &["Id"]);
    blog_fk.on_delete = ReferentialAction::Cascade;
    posts.foreign_keys.push(blog_fk);

    vec![blogs, posts]
}

#[test]
fn one_to_many() {
    let model = create(blogging());
    assert_symmetric(&model);

    let blog = entity(&model, "Blog");
    let post = entity(&model, "Post");

    assert_eq!(navigation_names(post), ["Blog"]);
    assert_eq!(navigation_names(blog), ["Posts"]);
    assert!(blog.navigations[0].collection);
    assert!(!post.navigations[0].collection);

    let fk = &post.foreign_keys[0];
    assert!(fk.required);
    assert!(!fk.unique);
    assert!(fk.principal_key_is_primary);
    assert_eq!(fk.on_delete, DeleteBehavior::Cascade);
    assert_eq!(fk.on_delete, fk.conventional_on_delete());
    assert_eq!(fk.name, None);
}

#[test]
fn navigation_collides_with_property() {
    let mut tables = blogging();
    tables[1].columns.push(Column::new("Blog", "nvarchar(max)"));

    let model = create(tables);
    assert_symmetric(&model);

    assert_eq!(navigation_names(entity(&model, "Post")), ["BlogNavigation"]);
}

#[test]
fn one_to_one() {
    let blogs = table("Blogs", vec![Column::new("Id", "int")]);
    let mut images = table(
        "BlogImages",
        vec![
            Column::new("BlogId", "int"),
            Column::new("Caption", "nvarchar(max)"),
        ],
    );
    images.foreign_keys.push(fk(&["BlogId"], "Blogs", &["Id"]));

    let model = create(vec![blogs, images]);
    assert_symmetric(&model);

    let image = entity(&model, "BlogImage");
    assert!(image.foreign_keys[0].unique);
    assert_eq!(navigation_names(image), ["Blog"]);

    let blog = entity(&model, "Blog");
    assert_eq!(navigation_names(blog), ["BlogImage"]);
    assert!(!blog.navigations[0].collection);
}

#[test]
fn self_reference() {
    let mut categories = table(
        "Categories",
        vec![
            Column::new("Id", "int"),
            Column::new("ParentId", "int").nullable(),
        ],
    );
    categories
        .foreign_keys
        .push(fk(&["ParentId"], "Categories", &["Id"]));

    let model = create(vec![categories]);
    assert_symmetric(&model);

    let category = entity(&model, "Category");
    assert_eq!(navigation_names(category), ["Parent", "InverseParent"]);
    assert!(category.navigations[1].collection);

    let fk = &category.foreign_keys[0];
    assert!(!fk.required);
    assert_eq!(fk.on_delete, DeleteBehavior::ClientSetNull);
}

#[test]
fn parallel_foreign_keys() {
    let users = table("Users", vec![Column::new("Id", "int")]);
    let mut messages = table(
        "Messages",
        vec![
            Column::new("Id", "int"),
            Column::new("SenderId", "int"),
            Column::new("RecipientId", "int"),
        ],
    );
    let sender_fk = fk(&["SenderId"], "Users", &["Id"]);
    let recipient_fk = fk(&["RecipientId"], "Users", &["Id"]);
    messages.foreign_keys.extend([sender_fk, recipient_fk]);

    let model = create(vec![users, messages]);
    assert_symmetric(&model);

    assert_eq!(
        navigation_names(entity(&model, "Message")),
        ["Sender", "Recipient"]
    );
    assert_eq!(
        navigation_names(entity(&model, "User")),
        ["SenderMessages", "RecipientMessages"]
    );
}

#[test]
fn composite_foreign_key_uses_common_prefix() {
    let mut orders = table(
        "Orders",
        vec![Column::new("Region", "int"), Column::new("Number", "int")],
    );
    orders.primary_key = Some(PrimaryKey::new(["Region", "Number"]));

    let mut lines = table(
        "OrderLines",
        vec![
            Column::new("Id", "int"),
            Column::new("OrderRegion", "int"),
            Column::new("OrderNumber", "int"),
        ],
    );
    let order_fk = fk(
        &["OrderRegion", "OrderNumber"],
        "Orders",
        &["Region", "Number"],
    );
    lines.foreign_keys.push(order_fk);

    let model = create(vec![orders, lines]);
    assert_symmetric(&model);

    assert_eq!(navigation_names(entity(&model, "OrderLine")), ["Order"]);
    assert_eq!(navigation_names(entity(&model, "Order")), ["OrderLines"]);
}

#[test]
fn alternate_principal_key_and_constraint_name() {
    let mut blogs = table(
        "Blogs",
        vec![
            Column::new("Id", "int"),
            Column::new("Slug", "nvarchar(100)"),
        ],
    );
    blogs.unique_constraints.push(scaffold_core::db::UniqueConstraint {
        columns: vec!["Slug".to_string()],
        ..Default::default()
    });

    let mut posts = table(
        "Posts",
        vec![
            Column::new("Id", "int"),
            Column::new("BlogSlug", "nvarchar(100)"),
        ],
    );
    let mut slug_fk = fk(&["BlogSlug"], "Blogs", &["Slug"]);
    slug_fk.name = Some("FK_Posts_Blogs_Slug".to_string());
    posts.foreign_keys.push(slug_fk);

    let model = create(vec![blogs, posts]);
    let fk = &entity(&model, "Post").foreign_keys[0];

    assert!(!fk.principal_key_is_primary);
    assert_eq!(fk.name.as_deref(), Some("FK_Posts_Blogs_Slug"));
    // Without an `Id` suffix the candidate is the property's own name
    assert_eq!(
        navigation_names(entity(&model, "Post")),
        ["BlogSlugNavigation"]
    );
}

#[test]
fn unresolvable_foreign_keys_are_noted() {
    let mut posts = table(
        "Posts",
        vec![Column::new("Id", "int"), Column::new("AuthorId", "int")],
    );
    let mut author_fk = fk(&["AuthorId"], "Authors", &["Id"]);
    author_fk.name = Some("FK_Posts_Authors".to_string());
    posts.foreign_keys.push(author_fk);

    let model = create(vec![posts]);
    let post = entity(&model, "Post");

    assert!(post.foreign_keys.is_empty());
    assert!(post.navigations.is_empty());
    assert_eq!(
        post.notes,
        [Note::SkippedForeignKey {
            table: "Posts".to_string(),
            name: Some("FK_Posts_Authors".to_string()),
            reason: "the principal table 'Authors' was not found".to_string(),
        }]
    );
}
