use crate::type_map::TargetType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    pub name: String,
    pub schema: Option<String>,
    pub ty: TargetType,
    pub start_value: Option<i64>,
    pub increment_by: Option<i32>,
    pub min_value: Option<i64>,
    pub max_value: Option<i64>,
    pub cyclic: bool,
}
