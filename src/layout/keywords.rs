use std::collections::HashSet;

/// Maximum number of keywords kept per text.
pub const MAX_KEYWORDS: usize = 10;

const STOP_WORDS: &[&str] = &[
	"the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
];

/// Lower-cased, punctuation-free tokens longer than two characters that are
/// not stop words, in order of first appearance, at most [`MAX_KEYWORDS`].
pub fn extract_keywords(text: &str) -> Vec<String> {
	let cleaned: String = text
		.to_lowercase()
		.chars()
		.map(|c| if c.is_alphanumeric() || c == '_' { c } else { ' ' })
		.collect();

	let mut seen = HashSet::new();
	cleaned
		.split_whitespace()
		.filter(|word| word.chars().count() > 2 && !STOP_WORDS.contains(word))
		.filter(|word| seen.insert(*word))
		.take(MAX_KEYWORDS)
		.map(str::to_owned)
		.collect()
}
