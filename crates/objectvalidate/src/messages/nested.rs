use std::fmt;
use std::sync::OnceLock;

use objectvalidate_types::Arguments;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::violation::{Violation, path_keys};

type Formatter = dyn Fn(&str, &Arguments) -> String + Send + Sync;

/// Entry holding the messages of a node that also has children.
const MESSAGES_ENTRY: &str = "_messages";

/// One node of the nested message tree.
///
/// Children keep their insertion order; bracket tokens such as `0` or
/// `_all` are kept as literal text keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageNode {
    messages: Vec<String>,
    children: Vec<(String, MessageNode)>,
}

impl MessageNode {
    /// Returns the messages attached to exactly this path, in finding order.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Returns the child at `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&MessageNode> {
        self.children
            .iter()
            .find_map(|(k, child)| (k == key).then_some(child))
    }

    /// Returns the child keys, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.children.iter().map(|(k, _)| k.as_str())
    }

    /// Returns true when the node has neither messages nor children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.children.is_empty()
    }

    fn child_mut(&mut self, key: &str) -> &mut MessageNode {
        let idx = match self.children.iter().position(|(k, _)| k == key) {
            Some(idx) => idx,
            None => {
                self.children.push((key.to_string(), MessageNode::default()));
                self.children.len() - 1
            }
        };
        &mut self.children[idx].1
    }

    fn insert(&mut self, keys: &[String], message: String) {
        let node = keys.iter().fold(self, |node, key| node.child_mut(key));
        node.messages.push(message);
    }
}

impl Serialize for MessageNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.children.is_empty() && !self.messages.is_empty() {
            return self.messages.serialize(serializer);
        }

        let extra = usize::from(!self.messages.is_empty());
        let mut map = serializer.serialize_map(Some(self.children.len() + extra))?;
        for (key, child) in &self.children {
            map.serialize_entry(key, child)?;
        }
        if !self.messages.is_empty() {
            map.serialize_entry(MESSAGES_ENTRY, &self.messages)?;
        }
        map.end()
    }
}

/// Renders findings as a tree keyed by path segments.
///
/// `collection[0].field1` lands at `collection -> 0 -> field1`; several
/// findings on the same path share one leaf. The tree is built once and
/// cached.
pub struct NestedMessages {
    violations: Vec<Violation>,
    formatter: Box<Formatter>,
    tree: OnceLock<MessageNode>,
}

impl NestedMessages {
    /// Wrap `violations`, rendering each one with `formatter(key, arguments)`.
    pub fn new<F>(violations: Vec<Violation>, formatter: F) -> Self
    where
        F: Fn(&str, &Arguments) -> String + Send + Sync + 'static,
    {
        Self {
            violations,
            formatter: Box::new(formatter),
            tree: OnceLock::new(),
        }
    }

    /// Returns the root of the message tree.
    pub fn messages(&self) -> &MessageNode {
        self.tree.get_or_init(|| {
            let mut root = MessageNode::default();
            for violation in &self.violations {
                let message = (self.formatter)(violation.key(), violation.arguments());
                root.insert(&path_keys(violation.path()), message);
            }
            root
        })
    }
}

impl fmt::Debug for NestedMessages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NestedMessages")
            .field("violations", &self.violations)
            .finish_non_exhaustive()
    }
}
