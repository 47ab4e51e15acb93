use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap()
});

/// Masks email addresses: first character of the local part, then `***`,
/// then the full domain. `alice@example.com` becomes `a***@example.com`.
pub fn redact(input: &str) -> String {
    EMAIL_REGEX
        .replace_all(input, |caps: &regex::Captures| {
            let full = &caps[0];
            match full.find('@') {
                Some(at) if at > 0 => {
                    let first = full[..at].chars().next().unwrap_or('*');
                    format!("{first}***{}", &full[at..])
                }
                _ => "***".to_string(),
            }
        })
        .into_owned()
}

/// Display wrapper that redacts on format, for use in tracing fields.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}
