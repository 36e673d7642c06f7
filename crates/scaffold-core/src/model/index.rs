use super::PropertyId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Index {
    pub name: Option<String>,

    pub properties: Vec<PropertyId>,

    pub unique: bool,

    pub filter: Option<String>,
}
