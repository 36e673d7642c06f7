/// The target language type a column maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetType {
    Bool,
    Byte,
    Int16,
    Int32,
    Int64,
    Decimal,
    Double,
    Single,
    String,
    DateTime,
    DateTimeOffset,
    DateOnly,
    TimeOnly,
    TimeSpan,
    Guid,
    ByteArray,
}

impl TargetType {
    pub fn is_integer(self) -> bool {
        matches!(
            self,
            TargetType::Byte | TargetType::Int16 | TargetType::Int32 | TargetType::Int64
        )
    }

    /// Reference types are nullable without a `?` annotation when nullable
    /// reference types are disabled.
    pub fn is_reference(self) -> bool {
        matches!(self, TargetType::String | TargetType::ByteArray)
    }

    /// Types whose store type carries a precision facet.
    pub fn has_precision(self) -> bool {
        matches!(
            self,
            TargetType::Decimal
                | TargetType::DateTime
                | TargetType::DateTimeOffset
                | TargetType::TimeOnly
                | TargetType::TimeSpan
        )
    }
}
