/// Expands the first `{alt1,alt2,...}` group of a pattern.
///
/// Returns one literal pattern per alternative, in order, each made of the text
/// before the group, the alternative and the text after the group. A pattern
/// without a group expands to itself.
///
/// Only the first group is special. Anything after its closing `}`, including
/// another `{...}` group, is appended to every alternative verbatim.
///
/// The pattern is expected to have passed [`validate`](crate::validate); an
/// unterminated group is returned unexpanded.
///
/// ```
/// use osc_path_tree::expand;
///
/// assert_eq!(expand("/{alpha,beta}/x"), ["/alpha/x", "/beta/x"]);
/// assert_eq!(expand("/mixer/gain"), ["/mixer/gain"]);
/// ```
pub fn expand(pattern: &str) -> Vec<String> {
    let Some(open) = pattern.find('{') else {
        return vec![pattern.to_owned()];
    };

    let Some(close) = pattern[open..].find('}').map(|i| open + i) else {
        return vec![pattern.to_owned()];
    };

    let (prefix, suffix) = (&pattern[..open], &pattern[close + 1..]);

    pattern[open + 1..close]
        .split(',')
        .map(|alternative| {
            let mut literal =
                String::with_capacity(prefix.len() + alternative.len() + suffix.len());
            literal.push_str(prefix);
            literal.push_str(alternative);
            literal.push_str(suffix);
            literal
        })
        .collect()
}
