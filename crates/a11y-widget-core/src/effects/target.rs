//! Presentation surfaces the applier writes to.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;

use serde::Serialize;

/// Root presentation state of a page: a class list plus custom properties.
///
/// Browser bindings implement this over `document.documentElement`; tests and
/// the CLI use [`InMemoryTarget`].
pub trait PresentationTarget {
    fn add_class(&mut self, class: &str);
    fn remove_class(&mut self, class: &str);
    fn set_property(&mut self, name: &str, value: &str);
    fn remove_property(&mut self, name: &str);
}

impl<T: PresentationTarget + ?Sized> PresentationTarget for &mut T {
    fn add_class(&mut self, class: &str) {
        (**self).add_class(class);
    }

    fn remove_class(&mut self, class: &str) {
        (**self).remove_class(class);
    }

    fn set_property(&mut self, name: &str, value: &str) {
        (**self).set_property(name, value);
    }

    fn remove_property(&mut self, name: &str) {
        (**self).remove_property(name);
    }
}

impl<T: PresentationTarget + ?Sized> PresentationTarget for Box<T> {
    fn add_class(&mut self, class: &str) {
        (**self).add_class(class);
    }

    fn remove_class(&mut self, class: &str) {
        (**self).remove_class(class);
    }

    fn set_property(&mut self, name: &str, value: &str) {
        (**self).set_property(name, value);
    }

    fn remove_property(&mut self, name: &str) {
        (**self).remove_property(name);
    }
}

/// In-memory presentation state with deterministic ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InMemoryTarget {
    classes: BTreeSet<String>,
    properties: BTreeMap<String, String>,
}

impl InMemoryTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn properties(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.properties.is_empty()
    }

    /// Render as a `:root` rule: the class list as a comment, then the
    /// custom properties as declarations.
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        let classes = self.classes.iter().map(String::as_str).collect::<Vec<_>>();
        if !classes.is_empty() {
            let _ = writeln!(css, "/* class=\"{}\" */", classes.join(" "));
        }
        css.push_str(":root {\n");
        for (name, value) in &self.properties {
            let _ = writeln!(css, "  {name}: {value};");
        }
        css.push('}');
        css
    }
}

impl PresentationTarget for InMemoryTarget {
    fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
    }

    fn remove_property(&mut self, name: &str) {
        self.properties.remove(name);
    }
}
