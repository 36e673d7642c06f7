//! Identifier generation for scaffolded code.
//!
//! Raw database names go through two stages. [`candidate_identifier`] folds a
//! name into PascalCase words, then a [`Namer`] or [`UniqueNamer`] sanitizes
//! the candidate into a legal identifier, optionally inflects it, and
//! memoizes the result per source object.

mod candidate;
pub use candidate::{candidate_identifier, common_prefix, strip_id};

mod identifier;
pub use identifier::{is_keyword, is_valid_identifier, sanitize_identifier};

mod member;
pub use member::uniquify_navigation;

mod namer;
pub use namer::{Namer, UniqueNamer};

mod pluralizer;
pub use pluralizer::{EnglishPluralizer, NullPluralizer, Pluralizer};

mod registry;
pub use registry::{NameComparer, NameRegistry};
