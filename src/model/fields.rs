//! Binding between [`Tree`] nodes and typed records.
//!
//! Decoding is strict: a [`FieldReader`] hands out fields one key at a time
//! and [`FieldReader::finish`] fails if any key was never consumed, so no
//! input is silently dropped. Keys whose value is an empty element are
//! removed up front and behave exactly like absent keys.

use crate::base::NameRegistry;
use crate::interchange::{Node, Tree};

use super::ModelError;
use super::scalar::Scalar;

/// A typed record bound to one tree node.
pub trait Record: Sized {
    /// Record name used in error messages.
    const RECORD: &'static str;

    /// Build the record from its node, registering names in `names`.
    fn decode(tree: Tree, names: &mut NameRegistry) -> Result<Self, ModelError>;

    /// Render the record back to its canonical string-valued node.
    fn encode(&self) -> Tree;
}

/// Consumes the fields of one tree node.
pub struct FieldReader {
    record: &'static str,
    entries: Tree,
}

impl FieldReader {
    pub fn new(record: &'static str, tree: Tree) -> Self {
        Self {
            record,
            entries: tree.without_nulls(),
        }
    }

    /// A mandatory scalar field.
    pub fn required<T: Scalar>(&mut self, key: &str) -> Result<T, ModelError> {
        let node = self
            .entries
            .remove(key)
            .ok_or_else(|| ModelError::missing_field(self.record, key))?;
        self.scalar(key, node)
    }

    /// An optional scalar field.
    pub fn optional<T: Scalar>(&mut self, key: &str) -> Result<Option<T>, ModelError> {
        self.entries
            .remove(key)
            .map(|node| self.scalar(key, node))
            .transpose()
    }

    /// A scalar field falling back to `default` when absent.
    pub fn or_default<T: Scalar>(&mut self, key: &str, default: T) -> Result<T, ModelError> {
        Ok(self.optional(key)?.unwrap_or(default))
    }

    /// A mandatory nested record.
    pub fn record<T: Record>(
        &mut self,
        key: &str,
        names: &mut NameRegistry,
    ) -> Result<T, ModelError> {
        let node = self
            .entries
            .remove(key)
            .ok_or_else(|| ModelError::missing_field(self.record, key))?;
        self.nested(key, node, names)
    }

    /// A nested record falling back to its default when absent.
    pub fn record_or_default<T: Record + Default>(
        &mut self,
        key: &str,
        names: &mut NameRegistry,
    ) -> Result<T, ModelError> {
        match self.entries.remove(key) {
            Some(node) => self.nested(key, node, names),
            None => Ok(T::default()),
        }
    }

    /// Every occurrence of a repeated element.
    ///
    /// A single occurrence (a bare node) and several occurrences (a list) both
    /// yield an ordered `Vec`; an absent key yields an empty one. An empty
    /// member decodes like an element with no children, so it still has to
    /// satisfy the record's required fields.
    pub fn records<T: Record>(
        &mut self,
        key: &str,
        names: &mut NameRegistry,
    ) -> Result<Vec<T>, ModelError> {
        match self.entries.remove(key) {
            None => Ok(Vec::new()),
            Some(Node::List(items)) => items
                .into_iter()
                .map(|item| self.nested(key, item, names))
                .collect(),
            Some(node) => Ok(vec![self.nested(key, node, names)?]),
        }
    }

    /// A field kept as an uninterpreted node.
    pub fn opaque(&mut self, key: &str) -> Option<Node> {
        self.entries.remove(key)
    }

    /// Fail if any key was left unconsumed.
    pub fn finish(self) -> Result<(), ModelError> {
        if self.entries.is_empty() {
            return Ok(());
        }
        Err(ModelError::UnexpectedField {
            record: self.record,
            fields: self.entries.keys().map(str::to_string).collect(),
        })
    }

    fn scalar<T: Scalar>(&self, key: &str, node: Node) -> Result<T, ModelError> {
        match node {
            Node::Text(text) => T::parse_text(&text)
                .map_err(|reason| ModelError::invalid_value(self.record, key, text, reason)),
            other => Err(ModelError::invalid_value(
                self.record,
                key,
                other.kind(),
                format!("expected {} text", T::KIND),
            )),
        }
    }

    fn nested<T: Record>(
        &self,
        key: &str,
        node: Node,
        names: &mut NameRegistry,
    ) -> Result<T, ModelError> {
        match node {
            Node::Map(tree) => T::decode(tree, names),
            Node::Null => T::decode(Tree::new(), names),
            Node::Text(text) if text.is_empty() => T::decode(Tree::new(), names),
            other => Err(ModelError::invalid_value(
                self.record,
                key,
                other.kind(),
                format!("expected a {} element", T::RECORD),
            )),
        }
    }
}

/// Builds the canonical node of a record, field by field.
#[derive(Default)]
pub struct TreeBuilder {
    tree: Tree,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scalar<T: Scalar>(mut self, key: &str, value: &T) -> Self {
        self.tree.insert(key, value.render_text());
        self
    }

    /// Omitted when `None`.
    pub fn optional<T: Scalar>(self, key: &str, value: Option<&T>) -> Self {
        match value {
            Some(value) => self.scalar(key, value),
            None => self,
        }
    }

    pub fn record<T: Record>(mut self, key: &str, value: &T) -> Self {
        self.tree.insert(key, value.encode());
        self
    }

    /// Always a list, even for zero or one member.
    pub fn records<T: Record>(mut self, key: &str, items: &[T]) -> Self {
        let nodes = items.iter().map(|item| Node::Map(item.encode())).collect();
        self.tree.insert(key, Node::List(nodes));
        self
    }

    /// Omitted when `None`.
    pub fn opaque(mut self, key: &str, node: Option<&Node>) -> Self {
        if let Some(node) = node {
            self.tree.insert(key, node.clone());
        }
        self
    }

    pub fn build(self) -> Tree {
        self.tree
    }
}
