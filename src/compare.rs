/// The single-character wildcard. Matches any one byte on either side of a
/// comparison, including another wildcard.
pub const WILDCARD: u8 = b'?';

/// Returns the length of the common prefix of `a` and `b`, looking at no more
/// than `limit` bytes.
///
/// A byte position counts as common if the bytes are equal or if either of them
/// is the wildcard `?`. The comparison is symmetric, so a stored pattern
/// containing `?` matches a concrete address and vice versa.
///
/// ```
/// use osc_path_tree::common_length;
///
/// assert_eq!(common_length(b"barbie", b"barby", 5), 4);
/// assert_eq!(common_length(b"a?c", b"abd", 3), 2);
/// assert_eq!(common_length(b"abc", b"abc", 2), 2);
/// assert_eq!(common_length(b"", b"abc", 3), 0);
/// ```
pub fn common_length(a: &[u8], b: &[u8], limit: usize) -> usize {
    a.iter()
        .zip(b)
        .take(limit)
        .take_while(|&(&x, &y)| x == y || x == WILDCARD || y == WILDCARD)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_prefix() {
        assert_eq!(common_length(b"foo", b"food", 4), 3);
        assert_eq!(common_length(b"food", b"foo", 4), 3);
        assert_eq!(common_length(b"bbq", b"barbie", 3), 1);
        assert_eq!(common_length(b"xyz", b"abc", 3), 0);
    }

    #[test]
    fn limit_bounds_result() {
        assert_eq!(common_length(b"abcdef", b"abcdef", 0), 0);
        assert_eq!(common_length(b"abcdef", b"abcdef", 3), 3);
        assert_eq!(common_length(b"abcdef", b"abcdef", 100), 6);
    }

    #[test]
    fn wildcard_on_either_side() {
        assert_eq!(common_length(b"a?", b"ab", 2), 2);
        assert_eq!(common_length(b"ab", b"a?", 2), 2);
        assert_eq!(common_length(b"??", b"??", 2), 2);
        assert_eq!(common_length(b"?x", b"ay", 2), 1);
    }

    #[test]
    fn empty_input() {
        assert_eq!(common_length(b"", b"", 0), 0);
        assert_eq!(common_length(b"abc", b"", 3), 0);
    }

    #[test]
    fn brackets_are_literal() {
        assert_eq!(common_length(b"[ab]", b"a", 1), 0);
        assert_eq!(common_length(b"[ab]", b"[ab]", 4), 4);
        assert_eq!(common_length(b"*", b"x", 1), 0);
    }
}
