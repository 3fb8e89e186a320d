use crate::error::InsertError;

// An open `{...}` group.
struct Group {
    // offset of the `{`
    open: usize,
    // offset of the last `{` or `,` delimiter
    last: usize,
    commas: usize,
}

/// Checks that `pattern` is a well-formed address pattern.
///
/// A valid pattern is `/` followed by at least one character. It contains no
/// space or `#`, its `[...]` and `{...}` groups are balanced and not nested, and
/// every `{...}` group lists at least two non-empty, comma separated
/// alternatives. Commas are rejected outside of alternation groups.
///
/// Character classes are accepted here but carry no matching semantics: the
/// tree compares them as literal text.
pub fn validate(pattern: &str) -> Result<(), InsertError> {
    let bytes = pattern.as_bytes();

    if bytes.first() != Some(&b'/') {
        return Err(InsertError::MissingLeadingSlash);
    }

    if bytes.len() == 1 {
        return Err(InsertError::EmptyAddress);
    }

    let mut bracket: Option<usize> = None;
    let mut brace: Option<Group> = None;

    for (i, &c) in bytes.iter().enumerate().skip(1) {
        match c {
            b' ' | b'#' => return Err(InsertError::IllegalChar { ch: c as char, at: i }),
            b'[' => {
                if bracket.is_some() {
                    return Err(InsertError::UnbalancedBracket { at: i });
                }
                bracket = Some(i);
            }
            b']' => match bracket.take() {
                Some(open) if i > open + 1 => {}
                _ => return Err(InsertError::UnbalancedBracket { at: i }),
            },
            b'{' => {
                if brace.is_some() {
                    return Err(InsertError::UnbalancedBrace { at: i });
                }
                brace = Some(Group {
                    open: i,
                    last: i,
                    commas: 0,
                });
            }
            b',' => {
                let group = brace
                    .as_mut()
                    .ok_or(InsertError::StrayComma { at: i })?;

                if i == group.last + 1 {
                    return Err(InsertError::EmptyAlternative { at: i });
                }
                group.commas += 1;
                group.last = i;
            }
            b'}' => {
                let group = brace
                    .take()
                    .ok_or(InsertError::UnbalancedBrace { at: i })?;

                if i == group.last + 1 {
                    return Err(InsertError::EmptyAlternative { at: i });
                }
                if group.commas == 0 {
                    return Err(InsertError::SingleAlternative { at: group.open });
                }
            }
            _ => {}
        }
    }

    if let Some(open) = bracket {
        return Err(InsertError::UnbalancedBracket { at: open });
    }

    if let Some(group) = brace {
        return Err(InsertError::UnbalancedBrace { at: group.open });
    }

    Ok(())
}
