use crate::{AttributeError, ElementError, ParseConfig, fragment::parse_fragment, native};
use alloc::rc::Rc;
use core::cell::RefCell;
use html5ever::{
    LocalName, QualName, ns,
    serialize::{SerializeOpts, TraversalScope, serialize},
    tendril::StrTendril,
};
use markup5ever_rcdom::{Handle, Node, NodeData, SerializableHandle};

const INVALID_NAME_CHARACTERS: &[char] = &['/', '<', '>'];

/// An element wrapper.
///
/// It holds exactly one element node for its lifetime.
#[derive(Debug)]
pub struct ObjectElement {
    element: Handle,
}

impl ObjectElement {
    /// Wraps an element node.
    ///
    /// # Errors
    ///
    /// Fails if a node is not an element.
    pub fn new(element: Handle) -> Result<Self, ElementError> {
        if native::is_element(&element) {
            Ok(Self { element })
        } else {
            Err(ElementError::NotElement)
        }
    }

    /// Creates a detached HTML element.
    ///
    /// # Errors
    ///
    /// Fails if a name does not start with an ASCII letter or contains
    /// whitespace, control characters, `/`, `<` or `>`.
    pub fn create(name: &str) -> Result<Self, ElementError> {
        if !name.starts_with(|character: char| character.is_ascii_alphabetic())
            || name.chars().any(|character| {
                character.is_ascii_whitespace()
                    || character.is_control()
                    || INVALID_NAME_CHARACTERS.contains(&character)
            })
        {
            return Err(ElementError::InvalidName(name.into()));
        }

        Ok(Self {
            element: Node::new(NodeData::Element {
                name: QualName::new(
                    None,
                    ns!(html),
                    LocalName::from(name.to_ascii_lowercase().as_str()),
                ),
                attrs: RefCell::default(),
                template_contents: RefCell::default(),
                mathml_annotation_xml_integration_point: false,
            }),
        })
    }

    /// Parses an HTML fragment with exactly one top-level element.
    ///
    /// # Errors
    ///
    /// Fails if a fragment does not have exactly one top-level element.
    pub fn parse(html: &str, config: &ParseConfig) -> Result<Self, ElementError> {
        let elements = parse_fragment(html, config)
            .into_iter()
            .filter(|node| native::is_element(node))
            .collect::<Vec<_>>();

        match <[_; 1]>::try_from(elements) {
            Ok([element]) => Self::new(element),
            Err(elements) => Err(ElementError::ElementCount(elements.len())),
        }
    }

    /// Returns an element node.
    pub const fn element(&self) -> &Handle {
        &self.element
    }

    /// Returns a local name.
    pub fn name(&self) -> &str {
        match &self.element.data {
            NodeData::Element { name, .. } => &*name.local,
            _ => "",
        }
    }

    /// Returns an `id` attribute, or an empty string if it is absent.
    pub fn id(&self) -> String {
        native::get_attribute(&self.element, "id").unwrap_or_default()
    }

    /// Sets an `id` attribute.
    ///
    /// # Errors
    ///
    /// Fails if the attribute cannot be set on the element.
    pub fn set_id(&self, id: &str) -> Result<(), AttributeError> {
        native::set_attribute(&self.element, "id", id)
    }

    /// Returns text content.
    pub fn text(&self) -> String {
        let mut text = String::new();
        collect_text(&self.element, &mut text);
        text
    }

    /// Replaces children with a text node.
    pub fn set_text(&self, text: &str) {
        self.replace_children(if text.is_empty() {
            vec![]
        } else {
            vec![Node::new(NodeData::Text {
                contents: RefCell::new(StrTendril::from_slice(text)),
            })]
        });
    }

    /// Returns inner HTML.
    ///
    /// # Errors
    ///
    /// Fails if serialization fails.
    pub fn html(&self) -> Result<String, ElementError> {
        let mut bytes = vec![];

        serialize(
            &mut bytes,
            &SerializableHandle::from(self.element.clone()),
            SerializeOpts {
                traversal_scope: TraversalScope::ChildrenOnly(None),
                ..Default::default()
            },
        )?;

        Ok(String::from_utf8(bytes)?)
    }

    /// Replaces children with nodes parsed from an HTML fragment.
    pub fn set_html(&self, html: &str, config: &ParseConfig) {
        self.replace_children(parse_fragment(html, config));
    }

    /// Calls a function with an element node.
    pub fn tie<T>(&self, callback: impl FnOnce(&Handle) -> T) -> T {
        callback(&self.element)
    }

    fn replace_children(&self, children: Vec<Handle>) {
        for child in self.element.children.take() {
            child.parent.set(None);
        }

        for child in &children {
            child.parent.set(Some(Rc::downgrade(&self.element)));
        }

        *self.element.children.borrow_mut() = children;
    }
}

fn collect_text(node: &Node, text: &mut String) {
    for child in node.children.borrow().iter() {
        match &child.data {
            NodeData::Text { contents } => text.push_str(&contents.borrow()),
            NodeData::Element { .. } => collect_text(child, text),
            _ => {}
        }
    }
}
