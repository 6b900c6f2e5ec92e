//! Environment variable validation
//!
//! Invalid override values are ignored with a warning that names the valid
//! choices and, for near misses, the closest one.

/// Validator for one environment variable's values
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// Parse `value`, logging a warning and returning `None` when it is invalid.
    pub fn parse<T, F>(&self, value: &str, parser: F) -> Option<T>
    where
        F: Fn(&str) -> Option<T>,
    {
        let parsed = parser(value.trim());
        if parsed.is_none() {
            tracing::warn!("{}", self.invalid_message(value));
        }
        parsed
    }

    /// Human-readable warning for an invalid value.
    pub fn invalid_message(&self, value: &str) -> String {
        let mut msg = format!(
            "ignoring invalid {} value '{}'{}",
            self.var_name,
            value,
            self.suggest(value)
        );
        if !self.valid_values.is_empty() {
            msg.push_str(&format!(" (valid values: {})", self.valid_values.join(", ")));
        }
        msg
    }

    fn suggest(&self, value: &str) -> String {
        let input = value.trim().to_lowercase();
        match closest(&input, self.valid_values) {
            Some((suggested, dist)) if dist > 0 => format!(". Did you mean '{}'?", suggested),
            _ => String::new(),
        }
    }
}

/// The candidate within two edits of `input`, if any.
pub(crate) fn closest<'c>(input: &str, candidates: &[&'c str]) -> Option<(&'c str, usize)> {
    candidates
        .iter()
        .map(|&c| (c, levenshtein(input, c)))
        .min_by_key(|&(_, dist)| dist)
        .filter(|&(_, dist)| dist <= 2)
}

/// Byte-wise Levenshtein distance for typo detection
pub(crate) fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();
    if a_bytes.is_empty() {
        return b_bytes.len();
    }
    if b_bytes.is_empty() {
        return a_bytes.len();
    }

    let mut prev_row: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr_row: Vec<usize> = vec![0; b_bytes.len() + 1];

    for (i, a_char) in a_bytes.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, b_char) in b_bytes.iter().enumerate() {
            let cost = usize::from(a_char != b_char);
            curr_row[j + 1] = (prev_row[j + 1] + 1)
                .min(curr_row[j] + 1)
                .min(prev_row[j] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b_bytes.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levenshtein_counts_edits() {
        assert_eq!(levenshtein("json", "json"), 0);
        assert_eq!(levenshtein("jsno", "json"), 2);
        assert_eq!(levenshtein("sqlit", "sqlite"), 1);
        assert_eq!(levenshtein("", "abc"), 3);
    }

    #[test]
    fn valid_value_parses() {
        let validator = EnvVarValidator::new("RACKETBOOK_BACKEND", &["json", "sqlite"]);
        let parsed = validator.parse(" sqlite ", |s| (s == "sqlite").then_some(2));
        assert_eq!(parsed, Some(2));
    }

    #[test]
    fn invalid_value_message_suggests_closest() {
        let validator = EnvVarValidator::new("RACKETBOOK_BACKEND", &["json", "sqlite"]);

        let msg = validator.invalid_message("sqlte");

        assert!(msg.contains("RACKETBOOK_BACKEND"));
        assert!(msg.contains("'sqlte'"));
        assert!(msg.contains("Did you mean 'sqlite'?"));
        assert!(msg.contains("valid values: json, sqlite"));
    }

    #[test]
    fn distant_value_gets_no_suggestion() {
        let validator = EnvVarValidator::new("RACKETBOOK_BACKEND", &["json", "sqlite"]);
        assert!(!validator.invalid_message("postgres").contains("Did you mean"));
        assert_eq!(validator.parse("postgres", |_| None::<()>), None);
    }
}
