//! Summary statistics over an in-memory list of blogs.
//!
//! Every function here is a pure linear scan over a borrowed slice. Where
//! several candidates share the winning value, the one seen first in input
//! order is returned.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::blog::BlogEntry;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StatsError {
    #[error("Cannot pick a favorite blog from an empty list")]
    EmptyInput,
}

/// The most liked blog, reduced to the fields callers display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoriteBlog {
    #[schema(example = "Canonical string reduction")]
    pub title: String,
    #[schema(example = "Edsger W. Dijkstra")]
    pub author: String,
    #[schema(example = 12)]
    pub likes: u64,
}

/// Author with the most blogs and their blog count.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AuthorBlogCount {
    #[schema(example = "Robert C. Martin")]
    pub author: String,
    #[schema(example = 3)]
    pub blogs: u64,
}

/// Author with the most likes summed over all of their blogs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AuthorLikes {
    #[schema(example = "Edsger W. Dijkstra")]
    pub author: String,
    #[schema(example = 17)]
    pub likes: u64,
}

/// Always returns 1.
pub fn constant<B: BlogEntry>(_blogs: &[B]) -> u64 {
    1
}

/// Sum of likes over all blogs. Zero for an empty list.
pub fn total_likes<B: BlogEntry>(blogs: &[B]) -> u64 {
    blogs
        .iter()
        .fold(0u64, |sum, blog| sum.saturating_add(blog.likes()))
}

/// The blog with the most likes.
///
/// Returns [`StatsError::EmptyInput`] when `blogs` is empty.
pub fn favorite_blog<B: BlogEntry>(blogs: &[B]) -> Result<FavoriteBlog, StatsError> {
    let mut iter = blogs.iter();
    let mut best = iter.next().ok_or(StatsError::EmptyInput)?;
    for blog in iter {
        if blog.likes() > best.likes() {
            best = blog;
        }
    }

    Ok(FavoriteBlog {
        title: best.title().to_string(),
        author: best.author().to_string(),
        likes: best.likes(),
    })
}

/// The author with the most blogs. `{ author: "", blogs: 0 }` for an empty list.
pub fn most_blogs<B: BlogEntry>(blogs: &[B]) -> AuthorBlogCount {
    match top_author(blogs, |_| 1) {
        Some((author, blogs)) => AuthorBlogCount {
            author: author.to_string(),
            blogs,
        },
        None => AuthorBlogCount::default(),
    }
}

/// The author whose blogs have the most likes in total.
/// `{ author: "", likes: 0 }` for an empty list.
pub fn most_likes<B: BlogEntry>(blogs: &[B]) -> AuthorLikes {
    match top_author(blogs, |blog| blog.likes()) {
        Some((author, likes)) => AuthorLikes {
            author: author.to_string(),
            likes,
        },
        None => AuthorLikes::default(),
    }
}

/// Groups `blogs` by exact author text, sums `weight` per group, and returns
/// the group with the largest total.
///
/// Groups are kept in first-occurrence order and compared with a strict `>`,
/// so an author who only ties the leader never replaces it.
fn top_author<B, F>(blogs: &[B], weight: F) -> Option<(&str, u64)>
where
    B: BlogEntry,
    F: Fn(&B) -> u64,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<(&str, u64)> = Vec::new();

    for blog in blogs {
        let author = blog.author();
        let slot = *index.entry(author).or_insert_with(|| {
            totals.push((author, 0));
            totals.len() - 1
        });
        totals[slot].1 = totals[slot].1.saturating_add(weight(blog));
    }

    let mut groups = totals.into_iter();
    let mut best = groups.next()?;
    for group in groups {
        if group.1 > best.1 {
            best = group;
        }
    }
    Some(best)
}
