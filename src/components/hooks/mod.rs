pub mod use_list_view;

pub(crate) use use_list_view::{use_list_view, ListRow, ListView};
