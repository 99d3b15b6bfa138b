//! Parsing utilities.
pub(crate) mod fields;

/// Split a line into the first matching prefix and the remainder.
///
/// Prefixes are tried in the given order, so more specific prefixes must be
/// listed before less specific ones when both could match.
pub fn split_prefix<'a, P>(line: &'a str, prefixes: &[P]) -> Option<(&'a str, &'a str)>
where
    P: AsRef<str>,
{
    prefixes.iter().find_map(|prefix| {
        let prefix = prefix.as_ref();

        line.strip_prefix(prefix)
            .map(|remainder| (&line[..prefix.len()], remainder))
    })
}

/// Split a header line on the first `:` into a name and a value.
///
/// Trailing spaces and tabs are removed from the name and leading whitespace
/// is removed from the value. Returns `None` if there is no colon.
pub fn split_field_line(line: &str) -> Option<(&str, &str)> {
    match fields::field_line(line) {
        Ok((_input, (name, value))) => Some((
            name.trim_end_matches([' ', '\t']),
            value.trim_start(),
        )),
        Err(_) => None,
    }
}

/// Returns whether the line continues the value of the previous header.
pub fn is_continuation_line(line: &str) -> bool {
    line.starts_with([' ', '\t'])
}

/// Remove the line terminator and any other trailing whitespace.
pub fn trim_line_ending(line: &str) -> &str {
    line.trim_end()
}
