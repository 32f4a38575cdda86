/// Cut a captured id fragment at its first trailing delimiter.
///
/// Delimiters are checked in a fixed order (`?`, then `/`, then `&`), not by
/// position: `"a/b?c"` yields `"a/b"`.
pub fn strip_parameters(fragment: &str) -> &str {
    for delimiter in ['?', '/', '&'] {
        if let Some((head, _)) = fragment.split_once(delimiter) {
            return head;
        }
    }
    fragment
}
