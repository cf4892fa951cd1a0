//! Console rendering of converted users.

/// Number of users shown per file with `--preview`.
pub const PREVIEW_RECORDS: usize = 10;

/// Wrap indented `<user>` fragments in a `<users>` element for display.
pub fn preview_document(users: &[String]) -> String {
    let mut out = String::from("<users>\n");
    for line in users.iter().flat_map(|user| user.lines()) {
        out.push_str("  ");
        out.push_str(line);
        out.push('\n');
    }
    out.push_str("</users>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_preview_is_bare_wrapper() {
        assert_eq!(preview_document(&[]), "<users>\n</users>");
    }
}
