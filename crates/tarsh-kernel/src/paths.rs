//! Path normalization.
//!
//! Every lookup in the namespace goes through a *key*: a slash-separated path
//! with no leading or trailing separator. The root directory is the empty key.
//!
//! | User path | cwd key | Key |
//! |-----------|---------|-----|
//! | `/`       | `a/b`   | `` |
//! | `c`       | `a/b`   | `a/b/c` |
//! | `../c`    | `a/b`   | `a/c` |
//! | `/x/./y/` | `a`     | `x/y` |
//! | `../../..`| `a`     | `` |

/// Key of the root directory.
pub const ROOT: &str = "";

/// Resolve `input` against the directory `cwd` (itself a key) into a key.
///
/// Absolute input ignores `cwd`. `.` and empty segments are dropped, `..`
/// removes the previous segment and stays at root when there is none. `\` is
/// treated like `/`. Never fails.
pub fn resolve(cwd: &str, input: &str) -> String {
    if input == "/" {
        return ROOT.to_string();
    }

    let input = input.replace('\\', "/");
    let base = if input.starts_with('/') { ROOT } else { cwd };

    let mut segments: Vec<&str> = Vec::new();
    for segment in base.split('/').chain(input.split('/')) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            name => segments.push(name),
        }
    }
    segments.join("/")
}

/// Render a key the way the prompt shows it: `/` or `/a/b`.
pub fn display(key: &str) -> String {
    format!("/{key}")
}

/// Parent directory of a key: everything before the final separator, or root.
pub fn parent(key: &str) -> &str {
    key.rsplit_once('/').map_or(ROOT, |(parent, _)| parent)
}

/// Final segment of a key.
pub fn base_name(key: &str) -> &str {
    key.rsplit_once('/').map_or(key, |(_, name)| name)
}
