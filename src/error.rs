// ─── Error ──────────────────────────────────────────────────────────────────
use crate::types::TypeName;
use thiserror::Error;

/// Rejected at [`FieldSet::insert`]; the cache itself never fails.
///
/// [`FieldSet::insert`]: crate::fieldset::FieldSet::insert
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldSetError {
    #[error("resource type name is empty")]
    EmptyTypeName,
    #[error("field list for `{type_name}` has no fields")]
    EmptyFieldList { type_name: TypeName },
}
