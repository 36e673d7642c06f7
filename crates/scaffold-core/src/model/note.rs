use std::fmt;

/// A recoverable problem found while scaffolding.
///
/// Notes never abort a run. Generators render them as comments next to the
/// affected code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Note {
    /// A column's store type has no target type; the column was skipped.
    UnmappedColumn {
        table: String,
        column: String,
        store_type: Option<String>,
    },

    /// The table has no primary key, or a key column was skipped.
    MissingPrimaryKey { table: String },

    /// No column of the table could be mapped; the table was skipped.
    NoUsableColumns { table: String },

    /// A foreign key could not be scaffolded.
    SkippedForeignKey {
        table: String,
        name: Option<String>,
        reason: String,
    },

    /// An index could not be scaffolded.
    SkippedIndex {
        table: String,
        name: Option<String>,
        reason: String,
    },

    /// A sequence's store type has no target type.
    UnmappedSequence {
        name: String,
        store_type: String,
    },
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Note::UnmappedColumn {
                table,
                column,
                store_type: Some(store_type),
            } => write!(
                f,
                "Could not find type mapping for column '{table}.{column}' with data type '{store_type}'. Skipping column."
            ),
            Note::UnmappedColumn {
                table,
                column,
                store_type: None,
            } => write!(
                f,
                "Could not scaffold column '{table}.{column}' because its data type is unknown. Skipping column."
            ),
            Note::MissingPrimaryKey { table } => write!(
                f,
                "The entity type for '{table}' has no usable primary key and was scaffolded as keyless."
            ),
            Note::NoUsableColumns { table } => write!(
                f,
                "Unable to generate entity type for table '{table}' because none of its columns could be mapped. Skipping table."
            ),
            Note::SkippedForeignKey {
                table,
                name,
                reason,
            } => match name {
                Some(name) => write!(
                    f,
                    "Could not scaffold the foreign key '{name}' on table '{table}': {reason}."
                ),
                None => write!(
                    f,
                    "Could not scaffold a foreign key on table '{table}': {reason}."
                ),
            },
            Note::SkippedIndex {
                table,
                name,
                reason,
            } => match name {
                Some(name) => write!(
                    f,
                    "Could not scaffold the index '{name}' on table '{table}': {reason}."
                ),
                None => write!(
                    f,
                    "Could not scaffold an index on table '{table}': {reason}."
                ),
            },
            Note::UnmappedSequence { name, store_type } => write!(
                f,
                "Could not find type mapping for sequence '{name}' with data type '{store_type}'. Skipping sequence."
            ),
        }
    }
}
