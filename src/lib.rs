#![doc = include_str!("../README.md")]

mod attribute;

pub use self::attribute::ElementAttribute;
pub use object_element::{AttributeError, ElementError, ObjectElement, ParseConfig};
