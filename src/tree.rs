use crate::compare::common_length;

use std::mem;

/// A node in the compressed trie.
///
/// `segment` is the label of the edge leading into this node. The root's
/// segment is empty. A node is an endpoint iff it holds a value, the
/// concatenation of segments from the root to an endpoint being a registered
/// pattern.
#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    pub(crate) segment: Vec<u8>,
    pub(crate) value: Option<T>,
    pub(crate) children: Vec<Node<T>>,
}

// The result of searching a subtree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Search {
    // An endpoint matched the whole address.
    Found,
    // This node's segment did not match, the caller should try the next sibling.
    Miss,
    // This node's segment matched but nothing below it did. The search is
    // committed to this branch and fails without trying further siblings.
    Stop,
}

/// A single node as seen by [`PathTree::dump`](crate::PathTree::dump).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DumpEntry {
    /// The node's segment. Bytes that are not valid UTF-8 on their own are
    /// replaced with `U+FFFD`.
    pub segment: String,
    /// Whether the node is a registered endpoint.
    pub is_endpoint: bool,
    /// Distance from the root, the root's children being at depth 1.
    pub depth: usize,
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Node {
            segment: Vec::new(),
            value: None,
            children: Vec::new(),
        }
    }
}

impl<T> Node<T> {
    pub fn new() -> Self {
        Self::default()
    }

    fn leaf(segment: &[u8], value: T) -> Self {
        Node {
            segment: segment.to_owned(),
            value: Some(value),
            children: Vec::new(),
        }
    }

    /// Inserts a literal pattern, with its leading `/` already stripped.
    ///
    /// Returns the value previously stored at the endpoint the pattern landed
    /// on, if any.
    pub fn insert(&mut self, path: &[u8], value: T) -> Option<T> {
        debug_assert!(!path.is_empty(), "the root cannot be an endpoint");

        let mut current = self;
        let mut path = path;

        loop {
            // find the first child sharing a prefix with the remaining path
            let found = current.children.iter().enumerate().find_map(|(i, child)| {
                let limit = child.segment.len().min(path.len());
                match common_length(&child.segment, path, limit) {
                    0 => None,
                    common => Some((i, common)),
                }
            });

            let Some((i, common)) = found else {
                trace!("new leaf {:?}", String::from_utf8_lossy(path));
                current.children.insert(0, Node::leaf(path, value));
                return None;
            };

            let child = &mut current.children[i];

            match (common == path.len(), common == child.segment.len()) {
                // exact match, the child becomes (or stays) an endpoint
                (true, true) => return child.value.replace(value),
                // the pattern ends inside the child's segment
                (true, false) => {
                    child.split(common);
                    child.value = Some(value);
                    return None;
                }
                // the pattern diverges inside the child's segment
                (false, false) => {
                    child.split(common);
                    trace!("new leaf {:?}", String::from_utf8_lossy(&path[common..]));
                    child.children.insert(0, Node::leaf(&path[common..], value));
                    return None;
                }
                // the child's segment is consumed, continue below it
                (false, true) => {
                    path = &path[common..];
                    current = child;
                }
            }
        }
    }

    // Shortens the segment to `at` bytes, moving the remainder along with the
    // value and children into a new, single child.
    fn split(&mut self, at: usize) {
        trace!(
            "splitting {:?} at {}",
            String::from_utf8_lossy(&self.segment),
            at
        );

        let suffix = Node {
            segment: self.segment.split_off(at),
            value: self.value.take(),
            children: mem::take(&mut self.children),
        };

        self.children.push(suffix);
    }

    /// Searches for an endpoint matching `path`, with its leading `/` already
    /// stripped. Wildcards on either side match any single byte.
    ///
    /// On success, returns the child indices leading from the root to the
    /// matching endpoint.
    pub fn find(&self, path: &[u8]) -> Option<Vec<usize>> {
        let mut trail = Vec::new();

        match self.search_children(path, &mut trail) {
            Search::Found => Some(trail),
            Search::Miss | Search::Stop => None,
        }
    }

    fn search_children(&self, path: &[u8], trail: &mut Vec<usize>) -> Search {
        for (i, child) in self.children.iter().enumerate() {
            trail.push(i);

            match child.search(path, trail) {
                Search::Miss => {
                    trail.pop();
                }
                result => return result,
            }
        }

        Search::Miss
    }

    fn search(&self, path: &[u8], trail: &mut Vec<usize>) -> Search {
        let len = self.segment.len();

        if common_length(&self.segment, path, len.min(path.len())) < len {
            return Search::Miss;
        }

        let rest = &path[len..];

        if rest.is_empty() {
            return match self.value {
                Some(_) => Search::Found,
                None => Search::Stop,
            };
        }

        match self.search_children(rest, trail) {
            Search::Found => Search::Found,
            Search::Miss | Search::Stop => Search::Stop,
        }
    }

    /// Follows a trail returned by [`find`](Node::find).
    pub fn walk(&self, trail: &[usize]) -> &Node<T> {
        trail.iter().fold(self, |node, &i| &node.children[i])
    }

    pub fn walk_mut(&mut self, trail: &[usize]) -> &mut Node<T> {
        trail.iter().fold(self, |node, &i| &mut node.children[i])
    }

    /// Concatenates the segments along a trail, without the leading `/`.
    pub fn pattern(&self, trail: &[usize]) -> Vec<u8> {
        let mut pattern = Vec::new();
        let mut node = self;

        for &i in trail {
            node = &node.children[i];
            pattern.extend_from_slice(&node.segment);
        }

        pattern
    }

    /// Removes the endpoint `path` leads to, with its leading `/` already
    /// stripped.
    ///
    /// The descent picks children the same way [`insert`](Node::insert) does,
    /// so every inserted pattern can be removed again and wildcards compare
    /// equal to any byte. Dead leaves left behind are pruned, and interior
    /// nodes left with a single child are merged with it. A failed removal
    /// never modifies the tree.
    pub fn remove(&mut self, path: &[u8]) -> Option<T> {
        if path.is_empty() {
            return self.value.take();
        }

        let (i, common) = self.children.iter().enumerate().find_map(|(i, child)| {
            let limit = child.segment.len().min(path.len());
            match common_length(&child.segment, path, limit) {
                0 => None,
                common => Some((i, common)),
            }
        })?;

        let child = &mut self.children[i];

        // the path ends or diverges inside the child's segment
        if common < child.segment.len() {
            return None;
        }

        let value = child.remove(&path[common..])?;
        self.compact(i);
        Some(value)
    }

    // Restores compression for the child at `i` after a removal below it.
    fn compact(&mut self, i: usize) {
        let child = &mut self.children[i];

        if child.value.is_some() {
            return;
        }

        match child.children.len() {
            0 => {
                trace!("pruning {:?}", String::from_utf8_lossy(&child.segment));
                self.children.remove(i);
            }
            1 => child.absorb_only_child(),
            _ => {}
        }
    }

    // Merges the single child into this node.
    fn absorb_only_child(&mut self) {
        if let Some(only) = self.children.pop() {
            trace!(
                "merging {:?} into {:?}",
                String::from_utf8_lossy(&only.segment),
                String::from_utf8_lossy(&self.segment)
            );

            self.segment.extend_from_slice(&only.segment);
            self.value = only.value;
            self.children = only.children;
        }
    }

    /// Number of endpoints in this subtree.
    pub fn count(&self) -> usize {
        let own = usize::from(self.value.is_some());
        own + self.children.iter().map(Node::count).sum::<usize>()
    }

    /// Pre-order traversal of the subtree below this node.
    pub fn dump(&self) -> Vec<DumpEntry> {
        fn visit<T>(node: &Node<T>, depth: usize, out: &mut Vec<DumpEntry>) {
            for child in &node.children {
                out.push(DumpEntry {
                    segment: String::from_utf8_lossy(&child.segment).into_owned(),
                    is_endpoint: child.value.is_some(),
                    depth,
                });
                visit(child, depth + 1, out);
            }
        }

        let mut out = Vec::new();
        visit(self, 1, &mut out);
        out
    }

    /// Every endpoint below this node along with its full pattern, without the
    /// leading `/`.
    pub fn endpoints(&self) -> Vec<(Vec<u8>, &T)> {
        fn visit<'a, T>(
            node: &'a Node<T>,
            prefix: &mut Vec<u8>,
            out: &mut Vec<(Vec<u8>, &'a T)>,
        ) {
            for child in &node.children {
                let len = prefix.len();
                prefix.extend_from_slice(&child.segment);

                if let Some(value) = &child.value {
                    out.push((prefix.clone(), value));
                }

                visit(child, prefix, out);
                prefix.truncate(len);
            }
        }

        let mut out = Vec::new();
        visit(self, &mut Vec::new(), &mut out);
        out
    }

    /// Consumes the subtree below this node, returning every endpoint with its
    /// full pattern.
    pub fn into_endpoints(self) -> Vec<(Vec<u8>, T)> {
        fn visit<T>(children: Vec<Node<T>>, prefix: &mut Vec<u8>, out: &mut Vec<(Vec<u8>, T)>) {
            for child in children {
                let len = prefix.len();
                prefix.extend_from_slice(&child.segment);

                if let Some(value) = child.value {
                    out.push((prefix.clone(), value));
                }

                visit(child.children, prefix, out);
                prefix.truncate(len);
            }
        }

        let mut out = Vec::new();
        visit(self.children, &mut Vec::new(), &mut out);
        out
    }

    /// Checks the structural invariants of the subtree below this node.
    pub fn check_invariants(&self) -> Result<(), String> {
        for (i, child) in self.children.iter().enumerate() {
            let segment = String::from_utf8_lossy(&child.segment);

            if child.segment.is_empty() {
                return Err("empty segment below the root".to_owned());
            }

            if child.value.is_none() && child.children.len() < 2 {
                return Err(format!(
                    "non-endpoint {:?} has {} children",
                    segment,
                    child.children.len()
                ));
            }

            for sibling in &self.children[i + 1..] {
                if common_length(&child.segment, &sibling.segment, 1) > 0 {
                    return Err(format!(
                        "siblings {:?} and {:?} share a leading character",
                        segment,
                        String::from_utf8_lossy(&sibling.segment)
                    ));
                }
            }

            child.check_invariants()?;
        }

        Ok(())
    }
}
