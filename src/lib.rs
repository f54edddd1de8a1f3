pub mod coverage;
pub mod error;
pub mod fieldset;
pub mod policy;
pub mod query;
pub mod types;

pub use coverage::CoverageCache;
pub use error::FieldSetError;
pub use fieldset::{FieldList, FieldSet};
pub use policy::FetchPolicy;
pub use query::Query;
pub use types::{CoverageConfig, RecordIdentity, TypeName};
