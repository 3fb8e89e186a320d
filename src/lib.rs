//! A compressed trie of [Open Sound Control](https://opensoundcontrol.stanford.edu/)
//! address patterns.
//!
//! ```rust
//! use osc_path_tree::PathTree;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut tree = PathTree::new();
//! tree.insert("/synth/{osc1,osc2}/freq", "oscillator frequency")?;
//! tree.insert("/mixer/ch?/gain", "channel gain")?;
//!
//! assert_eq!(*tree.at("/synth/osc2/freq")?.value, "oscillator frequency");
//! assert_eq!(*tree.at("/mixer/ch3/gain")?.value, "channel gain");
//! # Ok(())
//! # }
//! ```
//!
//! # Patterns
//!
//! Every address begins with `/`. Two pieces of pattern syntax are understood:
//!
//! ```text
//!  Syntax         Meaning
//!  ?              matches any single character
//!  {alt1,alt2}    registers one pattern per alternative
//! ```
//!
//! The wildcard works in both directions: a registered `/a?` matches the
//! address `/ab`, and a registered `/ab` matches the address `/a?`.
//!
//! Alternation groups are expanded when a pattern is registered, so
//! `/{alpha,beta}/x` behaves exactly like registering `/alpha/x` and `/beta/x`.
//! Only the first group of a pattern is expanded; any later group is kept as
//! literal text.
//!
//! Character classes such as `[abc]` or `[!a-z]` pass validation but have no
//! matching semantics and are compared as literal text, as is `*`.
//!
//! # Structure
//!
//! Patterns are stored in a radix tree where each node's segment is the label
//! of the edge leading into it. Siblings never share a leading character,
//! interior nodes that are not endpoints always branch, and removing a pattern
//! prunes and merges nodes to keep the tree maximally compressed. The relative
//! order of siblings is unspecified.
//!
//! ```text
//! /barbie, /barby, /bbq
//!
//! b ¬
//!  bq •
//!  arb ¬
//!   y •
//!   ie •
//! ```
#![deny(clippy::all)]
#![forbid(unsafe_code)]

#[macro_use]
extern crate log;

mod compare;
mod error;
mod expand;
mod router;
mod tree;
mod validate;

pub use compare::{common_length, WILDCARD};
pub use error::{InsertError, MatchError};
pub use expand::expand;
pub use router::{Match, MatchMut, PathTree};
pub use tree::DumpEntry;
pub use validate::validate;
