use crate::error::{InsertError, MatchError};
use crate::expand::expand;
use crate::tree::{DumpEntry, Node};
use crate::validate::validate;

use std::fmt;

/// A set of Open Sound Control address patterns stored in a compressed trie.
///
/// Each registered pattern carries a value of type `T`. Lookups may use the
/// `?` wildcard, as may the registered patterns themselves; either side
/// matches the other.
///
/// ```rust
/// use osc_path_tree::PathTree;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut tree = PathTree::new();
/// tree.insert("/mixer/{1,2}/gain", "gain")?;
/// tree.insert("/synth/freq", "freq")?;
///
/// let matched = tree.at("/mixer/2/gain")?;
/// assert_eq!(*matched.value, "gain");
/// assert_eq!(matched.pattern, "/mixer/2/gain");
///
/// assert!(tree.is_match("/synth/fre?"));
/// assert!(!tree.is_match("/mixer/3/gain"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct PathTree<T> {
    root: Node<T>,
}

/// A successful match, as returned by [`PathTree::at`].
#[derive(Debug)]
pub struct Match<'t, V> {
    /// The value stored with the matching pattern.
    pub value: &'t V,
    /// The registered pattern that matched, including the leading `/`.
    pub pattern: String,
}

/// A successful match, as returned by [`PathTree::at_mut`].
#[derive(Debug)]
pub struct MatchMut<'t, V> {
    /// The value stored with the matching pattern.
    pub value: &'t mut V,
    /// The registered pattern that matched, including the leading `/`.
    pub pattern: String,
}

impl<T> Default for PathTree<T> {
    fn default() -> Self {
        Self { root: Node::new() }
    }
}

impl<T> PathTree<T> {
    /// Construct a new, empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a pattern with the given value.
    ///
    /// The pattern must begin with `/`. It may contain `?` wildcards, and a
    /// single `{alt1,alt2,...}` group, in which case every alternative is
    /// registered separately with its own copy of the value. Registering the
    /// same pattern again replaces its value.
    ///
    /// ```rust
    /// use osc_path_tree::{InsertError, PathTree};
    ///
    /// let mut tree = PathTree::new();
    /// assert!(tree.insert("/{alpha,beta}/x", 1).is_ok());
    /// assert_eq!(tree.len(), 2);
    ///
    /// assert_eq!(
    ///     tree.insert("/bad address", 2),
    ///     Err(InsertError::IllegalChar { ch: ' ', at: 4 })
    /// );
    /// ```
    pub fn insert(&mut self, pattern: impl Into<String>, value: T) -> Result<(), InsertError>
    where
        T: Clone,
    {
        let pattern = pattern.into();

        if let Err(err) = validate(&pattern) {
            debug!("rejected {:?}: {}", pattern, err);
            return Err(err);
        }

        let mut literals = expand(&pattern);

        // the last alternative takes the value itself
        let last = literals.pop();
        for literal in &literals {
            self.insert_literal(literal, value.clone());
        }
        if let Some(literal) = last {
            self.insert_literal(&literal, value);
        }

        debug!("registered {:?}", pattern);
        Ok(())
    }

    fn insert_literal(&mut self, literal: &str, value: T) {
        // validation guarantees the leading slash and at least one more byte
        let path = &literal.as_bytes()[1..];

        if self.root.insert(path, value).is_some() {
            trace!("replaced value for {:?}", literal);
        }
    }

    /// Find the value for the first pattern matching the address.
    ///
    /// Wildcards in either the address or a registered pattern match any single
    /// character. Sibling branches are tried in order until one of them matches
    /// its full segment; the search then commits to that branch.
    pub fn at(&self, address: &str) -> Result<Match<'_, T>, MatchError> {
        let path = address.strip_prefix('/').ok_or(MatchError::NotFound)?;
        let trail = self.root.find(path.as_bytes()).ok_or(MatchError::NotFound)?;

        let pattern = self.pattern(&trail);
        match &self.root.walk(&trail).value {
            Some(value) => Ok(Match { value, pattern }),
            None => Err(MatchError::NotFound),
        }
    }

    /// Find a mutable reference to the value for the first pattern matching
    /// the address.
    ///
    /// See [`at`](PathTree::at) for details.
    pub fn at_mut(&mut self, address: &str) -> Result<MatchMut<'_, T>, MatchError> {
        let path = address.strip_prefix('/').ok_or(MatchError::NotFound)?;
        let trail = self.root.find(path.as_bytes()).ok_or(MatchError::NotFound)?;

        let pattern = self.pattern(&trail);
        match &mut self.root.walk_mut(&trail).value {
            Some(value) => Ok(MatchMut { value, pattern }),
            None => Err(MatchError::NotFound),
        }
    }

    /// Returns `true` if the address matches any registered pattern.
    pub fn is_match(&self, address: &str) -> bool {
        self.at(address).is_ok()
    }

    /// Remove a registered pattern, returning its value.
    ///
    /// The address is compared the same way patterns are compared while
    /// inserting, so removing any pattern passed to [`insert`](PathTree::insert)
    /// removes the endpoint it was stored at. Alternation groups are not
    /// expanded. Returns `None` and leaves the tree untouched if the address
    /// leads to no endpoint.
    ///
    /// ```rust
    /// use osc_path_tree::PathTree;
    ///
    /// let mut tree = PathTree::new();
    /// tree.insert("/foo", 1).unwrap();
    /// tree.insert("/food", 2).unwrap();
    ///
    /// assert_eq!(tree.remove("/foo"), Some(1));
    /// assert_eq!(tree.remove("/foo"), None);
    /// assert!(tree.is_match("/food"));
    /// ```
    pub fn remove(&mut self, address: &str) -> Option<T> {
        let path = address.strip_prefix('/')?;
        let removed = self.root.remove(path.as_bytes());

        match removed {
            Some(_) => debug!("removed {:?}", address),
            None => debug!("{:?} is not registered", address),
        }

        removed
    }

    /// The number of registered patterns.
    ///
    /// A pattern with an alternation group counts once per alternative.
    pub fn len(&self) -> usize {
        self.root.count()
    }

    /// Returns `true` if no pattern is registered.
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    /// Every registered pattern with its value, in tree order.
    pub fn patterns(&self) -> Vec<(String, &T)> {
        self.root
            .endpoints()
            .into_iter()
            .map(|(path, value)| (render(&path), value))
            .collect()
    }

    /// Register every pattern of another tree.
    ///
    /// Patterns already present keep their position and take the value from
    /// `other`.
    pub fn merge(&mut self, other: PathTree<T>) {
        for (path, value) in other.root.into_endpoints() {
            trace!("merging {:?}", render(&path));
            self.root.insert(&path, value);
        }
    }

    /// A pre-order listing of every node below the root, for diagnostics.
    ///
    /// ```rust
    /// use osc_path_tree::PathTree;
    ///
    /// let mut tree = PathTree::new();
    /// tree.insert("/barbie", ()).unwrap();
    /// tree.insert("/barby", ()).unwrap();
    ///
    /// let dump = tree.dump();
    /// assert_eq!(dump[0].segment, "barb");
    /// assert!(!dump[0].is_endpoint);
    /// assert_eq!(dump.len(), 3);
    /// ```
    pub fn dump(&self) -> Vec<DumpEntry> {
        self.root.dump()
    }

    #[doc(hidden)]
    pub fn check_invariants(&self) -> Result<(), String> {
        if self.root.value.is_some() {
            return Err("the root is an endpoint".to_owned());
        }

        self.root.check_invariants()
    }

    fn pattern(&self, trail: &[usize]) -> String {
        render(&self.root.pattern(trail))
    }
}

impl PathTree<()> {
    /// Register a pattern without a value, returning `false` if the pattern is
    /// malformed.
    pub fn add(&mut self, pattern: &str) -> bool {
        self.insert(pattern, ()).is_ok()
    }
}

impl<T> fmt::Display for PathTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.dump() {
            let mark = if entry.is_endpoint { '•' } else { '¬' };
            let indent = entry.depth - 1;
            writeln!(f, "{:indent$}{} {}", "", entry.segment, mark)?;
        }

        Ok(())
    }
}

// Prefixes a stripped path with its slash.
fn render(path: &[u8]) -> String {
    let mut pattern = String::with_capacity(path.len() + 1);
    pattern.push('/');
    pattern.push_str(&String::from_utf8_lossy(path));
    pattern
}
