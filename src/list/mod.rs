//! Shared engine behind every list page: dedupe, sort, paginate and the
//! controller that ties them to remote fetches.

pub(crate) mod controller;
pub(crate) mod debounce;
pub(crate) mod dedupe;
pub(crate) mod paginate;
pub(crate) mod query;
pub(crate) mod record;
pub(crate) mod sort;
pub(crate) mod source;

pub(crate) use controller::{ListConfig, ListViewController};
pub(crate) use paginate::Page;
pub(crate) use record::{FieldValue, Record};
pub(crate) use sort::SortDirection;
pub(crate) use source::ListSource;
