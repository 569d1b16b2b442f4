//! Read access to the attributes page authors put on their markup.
//!
//! Descriptors are parsed through [`AttributeSource`] so the parsing rules can be
//! exercised without a live document.

use std::collections::HashMap;

pub trait AttributeSource {
    fn attribute(&self, name: &str) -> Option<String>;

    /// First non-empty value among the given attribute spellings.
    fn first_attribute(&self, names: &[&str]) -> Option<String> {
        names
            .iter()
            .filter_map(|name| self.attribute(name))
            .find(|value| !value.is_empty())
    }
}

impl AttributeSource for web_sys::Element {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }
}

impl AttributeSource for HashMap<String, String> {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_attribute_skips_empty_values() {
        let attrs: HashMap<String, String> = [
            ("sw-init-js".to_string(), String::new()),
            ("sw-initjs".to_string(), "openMenu".to_string()),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            attrs.first_attribute(&["sw-init-js", "sw-initjs"]),
            Some("openMenu".to_string())
        );
        assert_eq!(attrs.first_attribute(&["missing"]), None);
    }
}
