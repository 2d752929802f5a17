//! Native attribute operations on DOM nodes.
//!
//! Names are matched against qualified attribute names. Names given to
//! elements in the HTML namespace are ASCII-lowercased first. Nodes other than
//! elements have no attributes.

use crate::AttributeError;
use alloc::borrow::Cow;
use core::cell::RefCell;
use html5ever::{Attribute, LocalName, QualName, ns, tendril::StrTendril};
use log::trace;
use markup5ever_rcdom::{Node, NodeData};

const INVALID_NAME_CHARACTERS: &[char] = &['"', '\'', '/', '<', '=', '>'];

/// Returns `true` if a node is an element.
pub const fn is_element(node: &Node) -> bool {
    matches!(node.data, NodeData::Element { .. })
}

/// Returns `true` if a node has an attribute of a name.
pub fn has_attribute(node: &Node, name: &str) -> bool {
    get_attribute(node, name).is_some()
}

/// Returns `true` if a node has any attributes.
pub fn has_attributes(node: &Node) -> bool {
    element(node).is_some_and(|(_, attributes)| !attributes.borrow().is_empty())
}

/// Returns an attribute value, or `None` if it is absent.
pub fn get_attribute(node: &Node, name: &str) -> Option<String> {
    let (element_name, attributes) = element(node)?;
    let name = normalize_name(element_name, name);

    attributes
        .borrow()
        .iter()
        .find(|attribute| matches_name(attribute, &name))
        .map(|attribute| attribute.value.to_string())
}

/// Sets an attribute value, overwriting an existing one if any.
///
/// # Errors
///
/// Fails if a name is not a valid HTML attribute name or a node is not an
/// element.
pub fn set_attribute(node: &Node, name: &str, value: &str) -> Result<(), AttributeError> {
    validate_name(name)?;

    let (element_name, attributes) = element(node).ok_or(AttributeError::NotElement)?;
    let name = normalize_name(element_name, name);
    let mut attributes = attributes.borrow_mut();

    if let Some(attribute) = attributes
        .iter_mut()
        .find(|attribute| matches_name(attribute, &name))
    {
        trace!("overwriting attribute {name}");
        attribute.value = StrTendril::from_slice(value);
    } else {
        trace!("adding attribute {name}");
        attributes.push(Attribute {
            name: QualName::new(None, ns!(), LocalName::from(&*name)),
            value: StrTendril::from_slice(value),
        });
    }

    Ok(())
}

/// Removes an attribute. Does nothing if it is absent.
pub fn remove_attribute(node: &Node, name: &str) {
    let Some((element_name, attributes)) = element(node) else {
        return;
    };
    let name = normalize_name(element_name, name);
    let mut attributes = attributes.borrow_mut();

    if let Some(index) = attributes
        .iter()
        .position(|attribute| matches_name(attribute, &name))
    {
        trace!("removing attribute {name}");
        attributes.remove(index);
    }
}

/// Validates an attribute name.
///
/// # Errors
///
/// Fails if a name is empty or contains whitespace, control characters, or
/// characters reserved by the HTML syntax.
pub fn validate_name(name: &str) -> Result<(), AttributeError> {
    if name.is_empty()
        || name.chars().any(|character| {
            character.is_ascii_whitespace()
                || character.is_control()
                || INVALID_NAME_CHARACTERS.contains(&character)
        })
    {
        Err(AttributeError::InvalidName(name.into()))
    } else {
        Ok(())
    }
}

fn element(node: &Node) -> Option<(&QualName, &RefCell<Vec<Attribute>>)> {
    match &node.data {
        NodeData::Element { name, attrs, .. } => Some((name, attrs)),
        _ => None,
    }
}

fn normalize_name<'a>(element_name: &QualName, name: &'a str) -> Cow<'a, str> {
    if element_name.ns == ns!(html) {
        Cow::Owned(name.to_ascii_lowercase())
    } else {
        Cow::Borrowed(name)
    }
}

fn matches_name(attribute: &Attribute, name: &str) -> bool {
    match &attribute.name.prefix {
        Some(prefix) => name.split_once(':') == Some((&**prefix, &*attribute.name.local)),
        None => &*attribute.name.local == name,
    }
}
