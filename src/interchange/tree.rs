//! Generic ordered key/value tree produced by the XML codec.
//!
//! ```text
//! <CaveFile>                      Tree { "CaveFile": Map {
//!   <unit>m</unit>          =>        "unit": Text("m"),
//!   <SRVD>..</SRVD>                   "SRVD": List [Map{..}, Map{..}],
//!   <SRVD>..</SRVD>                   "Comment": Null,
//!   <Comment/>                    } }
//! </CaveFile>
//! ```
//!
//! Every leaf is a string. Typing happens later, in [`crate::model`].

use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// Key prefix for XML attributes.
pub const ATTRIBUTE_PREFIX: char = '@';

/// Key for the text content of an element that also has attributes or children.
pub const TEXT_KEY: &str = "#text";

/// A value in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Empty element (`<a/>`).
    Null,
    /// Text-only element.
    Text(String),
    /// Element with children or attributes.
    Map(Tree),
    /// Sibling elements sharing one name.
    List(Vec<Node>),
}

impl Node {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Tree> {
        match self {
            Self::Map(tree) => Some(tree),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Node]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Short label of the variant, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "empty element",
            Self::Text(_) => "text",
            Self::Map(_) => "element",
            Self::List(_) => "list",
        }
    }
}

impl From<Tree> for Node {
    fn from(tree: Tree) -> Self {
        Self::Map(tree)
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Ordered mapping from element name to [`Node`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree(IndexMap<String, Node>);

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a key, keeping its original position when replaced.
    pub fn insert(&mut self, key: impl Into<String>, node: impl Into<Node>) -> Option<Node> {
        self.0.insert(key.into(), node.into())
    }

    /// Builder-style [`Tree::insert`].
    pub fn with(mut self, key: impl Into<String>, node: impl Into<Node>) -> Self {
        self.insert(key, node);
        self
    }

    /// Add a sibling occurrence of `key`.
    ///
    /// The first occurrence is stored as is; a second one turns the entry into
    /// a [`Node::List`], and later ones extend that list.
    pub fn append(&mut self, key: impl Into<String>, node: Node) {
        match self.0.entry(key.into()) {
            Entry::Vacant(slot) => {
                slot.insert(node);
            }
            Entry::Occupied(mut slot) => match slot.get_mut() {
                Node::List(items) => items.push(node),
                existing => {
                    let first = std::mem::replace(existing, Node::Null);
                    *existing = Node::List(vec![first, node]);
                }
            },
        }
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.0.get(key)
    }

    /// Text value of `key`, if it is a text leaf.
    pub fn get_text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Node::as_text)
    }

    /// Remove a key, keeping the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Node> {
        self.0.shift_remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Drop every entry whose value is [`Node::Null`].
    pub fn without_nulls(mut self) -> Self {
        self.0.retain(|_, node| !node.is_null());
        self
    }
}

impl IntoIterator for Tree {
    type Item = (String, Node);
    type IntoIter = indexmap::map::IntoIter<String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, Node)> for Tree {
    fn from_iter<I: IntoIterator<Item = (String, Node)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_none(),
            Self::Text(s) => serializer.serialize_str(s),
            Self::Map(tree) => tree.serialize(serializer),
            Self::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

impl Serialize for Tree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, node) in self.iter() {
            map.serialize_entry(key, node)?;
        }
        map.end()
    }
}
