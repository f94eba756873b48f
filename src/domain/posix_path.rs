//! Windows → Cygwin path translation.
//!
//! Drive-letter paths are mapped under the `/cygdrive` mount namespace and
//! shell-escaped, because mintty receives the result as part of a command line.
//! Anything else only has its separators normalized.

/// Mount point under which Cygwin exposes native drives.
pub const CYGDRIVE_PREFIX: &str = "/cygdrive";

/// Convert a host-native path into the form Cygwin's shell understands.
///
/// `C:\Users\Test User\proj` becomes `/cygdrive/c/Users/Test\ User/proj`.
/// Inputs without a leading `<letter>:` are returned with `\` replaced by `/`.
pub fn translate(host_path: &str) -> String {
    let normalized = host_path.replace('\\', "/");

    let Some(drive) = drive_letter(&normalized) else {
        return normalized;
    };

    // Both prefix characters are ASCII, so byte offset 2 is a char boundary.
    let remainder = collapse_slashes(normalized[2..].trim_matches('/'));

    format!("{}/{}/{}", CYGDRIVE_PREFIX, drive.to_ascii_lowercase(), escape_for_shell(&remainder))
}

/// Returns the drive letter when `path` starts with `<ascii letter>:`.
fn drive_letter(path: &str) -> Option<char> {
    let mut chars = path.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), Some(':')) if letter.is_ascii_alphabetic() => Some(letter),
        _ => None,
    }
}

fn collapse_slashes(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut previous_slash = false;
    for c in path.chars() {
        if c == '/' {
            if previous_slash {
                continue;
            }
            previous_slash = true;
        } else {
            previous_slash = false;
        }
        out.push(c);
    }
    out
}

/// Characters that would split or quote a shell word. Whitespace follows the
/// ECMAScript `\s` class: Unicode White_Space plus U+FEFF, minus U+0085.
fn needs_escape(c: char) -> bool {
    (c.is_whitespace() && c != '\u{0085}') || c == '\u{FEFF}' || c == '\'' || c == '"'
}

fn escape_for_shell(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    for c in path.chars() {
        if needs_escape(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
