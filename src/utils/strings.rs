//! Line splitting and joining for configuration files
//!
//! Lines are byte slices: configuration files may carry text in any
//! encoding, and lines that are not touched must be written back unchanged.

/// Split file content into lines, keeping trailing blank lines.
///
/// A single final `\n` terminates the last line and does not produce an
/// extra empty entry; every further `\n` is a real blank line that must
/// survive a rewrite.
///
/// ```text
/// "a\nb"    -> ["a", "b"]
/// "a\n"     -> ["a"]
/// "a\n\n"   -> ["a", ""]
/// ""        -> []
/// ```
pub fn split_lines_preserve_trailing(s: &[u8]) -> Vec<&[u8]> {
    if s.is_empty() {
        return Vec::new();
    }
    s.strip_suffix(b"\n").unwrap_or(s).split(|&b| b == b'\n').collect()
}

/// Join lines back into file content, terminating each with `\n`.
pub fn join_lines<S: AsRef<[u8]>>(lines: &[S]) -> Vec<u8> {
    let mut out = Vec::with_capacity(lines.iter().map(|l| l.as_ref().len() + 1).sum());
    for line in lines {
        out.extend_from_slice(line.as_ref());
        out.push(b'\n');
    }
    out
}
