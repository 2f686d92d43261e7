//! Normalizes API records into [`ContentItem`]s.

use std::collections::HashSet;
use std::sync::Arc;

use super::error::{LayoutError, LayoutResult};
use super::types::{BlogRecord, Category, ContentItem, ContentSource, ProjectRecord};

/// Tags of a project: `tech_stack`, else `techStack`, else nothing.
pub fn project_tags(project: &ProjectRecord) -> &[String] {
	project
		.tech_stack
		.as_deref()
		.or(project.tech_stack_camel.as_deref())
		.unwrap_or(&[])
}

fn project_item(project: &ProjectRecord, index: usize) -> LayoutResult<ContentItem> {
	Ok(ContentItem {
		key: stable_key(&project.id.to_string(), Category::Project, index)?,
		title: project.title.clone(),
		category: Category::Project,
		descriptive_text: project.description.clone().unwrap_or_default(),
		tags: project_tags(project).to_vec(),
		source: ContentSource::Project(Arc::new(project.clone())),
	})
}

fn blog_item(blog: &BlogRecord, index: usize) -> LayoutResult<ContentItem> {
	Ok(ContentItem {
		key: stable_key(&blog.id.to_string(), Category::Blog, index)?,
		title: blog.title.clone(),
		category: Category::Blog,
		descriptive_text: blog.summary.clone().unwrap_or_default(),
		tags: Vec::new(),
		source: ContentSource::Blog(Arc::new(blog.clone())),
	})
}

/// Adapt both collections, projects first, each in input order.
pub fn adapt(projects: &[ProjectRecord], blogs: &[BlogRecord]) -> LayoutResult<Vec<ContentItem>> {
	let mut items = Vec::with_capacity(projects.len() + blogs.len());
	for (index, project) in projects.iter().enumerate() {
		items.push(project_item(project, index)?);
	}
	for (index, blog) in blogs.iter().enumerate() {
		items.push(blog_item(blog, index)?);
	}

	let mut seen = HashSet::with_capacity(items.len());
	for item in &items {
		let id = item.node_id();
		if !seen.insert(id.clone()) {
			return Err(LayoutError::DuplicateId { id });
		}
	}
	Ok(items)
}

fn stable_key(id: &str, category: Category, index: usize) -> LayoutResult<String> {
	if id.is_empty() {
		return Err(LayoutError::MissingId { category, index });
	}
	Ok(id.to_owned())
}
