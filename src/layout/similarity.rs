use std::collections::HashSet;
use std::hash::Hash;

use super::keywords::extract_keywords;
use super::types::ContentItem;

/// `|A ∩ B| / |A ∪ B|`, zero when both sets are empty.
pub fn jaccard<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
	let union = a.union(b).count();
	if union == 0 {
		return 0.0;
	}
	a.intersection(b).count() as f64 / union as f64
}

/// Keyword set used for project to blog comparison.
pub fn keyword_set(item: &ContentItem) -> HashSet<String> {
	extract_keywords(&format!("{} {}", item.title, item.descriptive_text))
		.into_iter()
		.collect()
}

/// Case-insensitive tag set used for project to project comparison.
pub fn tag_set(tags: &[String]) -> HashSet<String> {
	tags.iter().map(|tag| tag.trim().to_lowercase()).collect()
}

/// Keyword Jaccard similarity of two items' title and text.
pub fn content_similarity(a: &ContentItem, b: &ContentItem) -> f64 {
	jaccard(&keyword_set(a), &keyword_set(b))
}

/// Case-insensitive Jaccard similarity of two tag lists.
pub fn tag_similarity(a: &[String], b: &[String]) -> f64 {
	jaccard(&tag_set(a), &tag_set(b))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn tags(values: &[&str]) -> Vec<String> {
		values.iter().map(|v| v.to_string()).collect()
	}

	#[test]
	fn empty_sets_score_zero() {
		let empty: HashSet<String> = HashSet::new();
		assert_eq!(jaccard(&empty, &empty), 0.0);
		assert_eq!(tag_similarity(&[], &tags(&["Go"])), 0.0);
	}

	#[test]
	fn identical_sets_score_one() {
		let a = tags(&["Python", "PyTorch"]);
		assert_eq!(tag_similarity(&a, &a), 1.0);
	}

	#[test]
	fn symmetric() {
		let a = tags(&["Python", "PyTorch", "CUDA"]);
		let b = tags(&["cuda", "C++"]);
		assert_eq!(tag_similarity(&a, &b), tag_similarity(&b, &a));
		assert_eq!(tag_similarity(&a, &b), 0.25);
	}

	#[test]
	fn content_similarity_uses_title_and_text() {
		let blogs: Vec<crate::layout::BlogRecord> = serde_json::from_str(
			r#"[
				{ "id": 1, "title": "Neural Radiance Fields", "summary": "guide" },
				{ "id": 2, "title": "Neural Radiance Fields", "summary": "guide" },
				{ "id": 3, "title": "Sourdough baking" }
			]"#,
		)
		.unwrap();
		let items = crate::layout::adapt(&[], &blogs).unwrap();
		assert_eq!(content_similarity(&items[0], &items[1]), 1.0);
		assert_eq!(content_similarity(&items[0], &items[2]), 0.0);
		assert_eq!(
			content_similarity(&items[0], &items[2]),
			content_similarity(&items[2], &items[0])
		);
	}

	#[test]
	fn tags_compare_case_insensitively() {
		assert_eq!(tag_similarity(&tags(&["PyTorch"]), &tags(&["pytorch"])), 1.0);
	}
}
