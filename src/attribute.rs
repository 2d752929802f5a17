use object_element::{AttributeError, ObjectElement, native};

/// Attribute access on elements.
///
/// Every method delegates to the native attribute operation of the same name
/// on an underlying element node and returns its result as is.
pub trait ElementAttribute {
    /// Returns `true` if an element has an attribute of a name.
    fn has_attribute(&self, name: &str) -> bool;

    /// Returns `true` if an element has any attributes.
    fn has_attributes(&self) -> bool;

    /// Returns an attribute value, or `None` if it is absent.
    fn get_attribute(&self, name: &str) -> Option<String>;

    /// Sets an attribute value.
    ///
    /// # Errors
    ///
    /// Fails if the native operation fails, for example on an invalid
    /// attribute name.
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), AttributeError>;

    /// Removes an attribute. Does nothing if it is absent.
    fn remove_attribute(&self, name: &str);
}

impl ElementAttribute for ObjectElement {
    fn has_attribute(&self, name: &str) -> bool {
        native::has_attribute(self.element(), name)
    }

    fn has_attributes(&self) -> bool {
        native::has_attributes(self.element())
    }

    fn get_attribute(&self, name: &str) -> Option<String> {
        native::get_attribute(self.element(), name)
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), AttributeError> {
        native::set_attribute(self.element(), name, value)
    }

    fn remove_attribute(&self, name: &str) {
        native::remove_attribute(self.element(), name)
    }
}
