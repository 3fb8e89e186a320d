use thiserror::Error;

/// Represents errors that can occur when registering a pattern.
///
/// Every variant describes a malformed address; a rejected pattern leaves the
/// tree untouched. Offsets are byte positions into the pattern.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Hash, PartialEq, Error)]
pub enum InsertError {
    /// Addresses must begin with `/`.
    #[error("address must begin with '/'")]
    MissingLeadingSlash,
    /// The root address `/` cannot itself be registered.
    #[error("address must name at least one character after '/'")]
    EmptyAddress,
    /// Spaces and `#` are not allowed anywhere in an address.
    #[error("illegal character {ch:?} at offset {at}")]
    IllegalChar {
        /// The offending character.
        ch: char,
        /// Where it was found.
        at: usize,
    },
    /// A `[` without a closing `]`, an empty `[]`, a nested `[` or a stray `]`.
    #[error("unbalanced character class at offset {at}")]
    UnbalancedBracket {
        /// Where the problem was found.
        at: usize,
    },
    /// A `{` without a closing `}`, a nested `{` or a stray `}`.
    #[error("unbalanced alternation group at offset {at}")]
    UnbalancedBrace {
        /// Where the problem was found.
        at: usize,
    },
    /// An alternation group needs at least two alternatives.
    #[error("alternation group at offset {at} has a single alternative")]
    SingleAlternative {
        /// Offset of the opening `{`.
        at: usize,
    },
    /// Alternatives may not be empty, as in `{a,,b}` or `{,a}`.
    #[error("empty alternative at offset {at}")]
    EmptyAlternative {
        /// Offset of the delimiter that closes the empty alternative.
        at: usize,
    },
    /// Commas are only allowed inside an alternation group.
    #[error("comma outside of an alternation group at offset {at}")]
    StrayComma {
        /// Where the comma was found.
        at: usize,
    },
}

/// A failed match attempt.
///
/// ```
/// use osc_path_tree::{MatchError, PathTree};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut tree = PathTree::new();
/// tree.insert("/synth/freq", 1)?;
///
/// // no pattern matches
/// assert_eq!(tree.at("/synth/gain").unwrap_err(), MatchError::NotFound);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy, Error)]
pub enum MatchError {
    /// No registered pattern matched the address.
    #[error("matching pattern not found")]
    NotFound,
}
