use serde::{Deserialize, Serialize};

/// Read access to the fields the statistics in [`crate::list_helper`] need.
///
/// Implemented by [`BlogRecord`] and by any persisted blog model that wants
/// to be aggregated without first being copied into a `BlogRecord`.
pub trait BlogEntry {
    fn title(&self) -> &str;
    fn author(&self) -> &str;
    fn likes(&self) -> u64;
}

/// A single blog post entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct BlogRecord {
    /// Storage-assigned identifier. `None` until the record is saved.
    pub id: Option<i32>,
    #[schema(example = "Go To Statement Considered Harmful")]
    pub title: String,
    #[schema(example = "Edsger W. Dijkstra")]
    pub author: String,
    pub url: String,
    /// Like count. Missing on input means zero.
    #[serde(default)]
    pub likes: u64,
    /// Owning user, if any.
    pub user: Option<i32>,
}

impl BlogRecord {
    pub fn new(title: impl Into<String>, author: impl Into<String>, likes: u64) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            likes,
            ..Default::default()
        }
    }
}

impl BlogEntry for BlogRecord {
    fn title(&self) -> &str {
        &self.title
    }

    fn author(&self) -> &str {
        &self.author
    }

    fn likes(&self) -> u64 {
        self.likes
    }
}

impl<T: BlogEntry + ?Sized> BlogEntry for &T {
    fn title(&self) -> &str {
        (**self).title()
    }

    fn author(&self) -> &str {
        (**self).author()
    }

    fn likes(&self) -> u64 {
        (**self).likes()
    }
}
