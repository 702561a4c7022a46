//! Path normalization primitives.

/// Ensure the path starts with `/`. An empty input becomes `/`.
pub fn validate_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

/// A global prefix only applies when it is something other than `` or `/`.
pub fn is_usable_global_prefix(prefix: &str) -> bool {
    !prefix.is_empty() && prefix != "/"
}

/// Collapse every run of repeated slashes into a single `/`.
pub fn normalize_rel_path(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut prev_slash = false;
    for c in path.chars() {
        if c == '/' {
            if !prev_slash {
                out.push(c);
            }
            prev_slash = true;
        } else {
            out.push(c);
            prev_slash = false;
        }
    }
    out
}
