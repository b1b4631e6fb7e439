//! Small text helpers for display fallbacks.

/// Turn a slug into a human-readable title: `"full-stack-ft"` becomes
/// `"Full Stack Ft"`. Used when a plan record carries no explicit title.
pub fn unslugify_capitalize(slug: &str) -> String {
    slug.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_each_word() {
        assert_eq!(unslugify_capitalize("full-stack-ft"), "Full Stack Ft");
    }

    #[test]
    fn handles_underscores_and_empty_segments() {
        assert_eq!(unslugify_capitalize("coding_intro--basic"), "Coding Intro Basic");
        assert_eq!(unslugify_capitalize(""), "");
    }
}
