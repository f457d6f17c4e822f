use typeahead_core::types::RecordId;

pub(crate) type NodeId = usize;

pub(crate) const ROOT: NodeId = 0;

#[derive(Debug, Default)]
struct Node {
    /// Children in the order their branch character was first inserted.
    children: Vec<(char, NodeId)>,
    terminal_key: Option<String>,
    bucket: Vec<RecordId>,
}

impl Node {
    fn child(&self, ch: char) -> Option<NodeId> {
        self.children
            .iter()
            .find(|(c, _)| *c == ch)
            .map(|&(_, id)| id)
    }
}

/// Character trie over normalized keys.
///
/// Nodes are stored in an arena and address their children by index. The
/// root at index 0 stands for the empty key. Records are only ever appended
/// to buckets; nothing is removed.
#[derive(Debug)]
pub(crate) struct Trie {
    nodes: Vec<Node>,
}

impl Trie {
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
        }
    }

    /// Walks `key` from the root, creating missing nodes, and appends
    /// `records` to the bucket at its end.
    pub(crate) fn insert(&mut self, key: &str, records: impl IntoIterator<Item = RecordId>) {
        let mut current = ROOT;

        for ch in key.chars() {
            current = match self.nodes[current].child(ch) {
                Some(next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[current].children.push((ch, next));
                    next
                }
            };
        }

        let node = &mut self.nodes[current];
        node.terminal_key.get_or_insert_with(|| key.to_string());
        node.bucket.extend(records);
    }

    /// Returns the node reached by walking `key`, if the whole path exists.
    pub(crate) fn find(&self, key: &str) -> Option<NodeId> {
        key.chars().try_fold(ROOT, |node, ch| self.nodes[node].child(ch))
    }

    pub(crate) fn terminal_key(&self, node: NodeId) -> Option<&str> {
        self.nodes[node].terminal_key.as_deref()
    }

    pub(crate) fn bucket(&self, node: NodeId) -> &[RecordId] {
        &self.nodes[node].bucket
    }

    pub(crate) fn children(&self, node: NodeId) -> impl DoubleEndedIterator<Item = NodeId> + '_ {
        self.nodes[node].children.iter().map(|&(_, id)| id)
    }

    pub(crate) fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
