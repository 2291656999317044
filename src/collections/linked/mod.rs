//! Linked collection types. Primarily revolves around [`LinkedList`] and the [`Node`] chains it
//! owns.

pub mod list;

#[doc(inline)]
pub use list::{LinkedList, Node};
