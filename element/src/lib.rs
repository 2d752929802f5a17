//! Element wrappers over [`markup5ever_rcdom`] nodes.
//!
//! An [`ObjectElement`] exclusively holds one element node. The [`native`]
//! module provides the attribute primitives that the wrapper and its
//! extensions delegate to.

extern crate alloc;

mod config;
mod error;
mod fragment;
pub mod native;
mod object_element;

pub use self::{
    config::ParseConfig,
    error::{AttributeError, ElementError},
    fragment::parse_fragment,
    object_element::ObjectElement,
};
pub use markup5ever_rcdom::Handle;
