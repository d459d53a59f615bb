//! High-level IR: the element list a file parse produces
//!
//! - [`Element`], [`ParentElement`] - source constructs and their scope data
//! - [`Topic`] - the documentable unit an element may own
//! - [`KindRegistry`], [`KeywordTable`] - keyword → documentable kind lookups

mod element;
mod registry;

pub use element::{Element, ParentElement, Topic, add_using_rule, children_of, innermost_open_parent};
pub use registry::{KeywordTable, KindId, KindRegistry};
