use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A post's author, stored as two separate name parts.
///
/// The wire representation flattens this into a single display string;
/// storage always keeps the two parts so the join is recomputed on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    /// The `"First Last"` display string exposed on the wire.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Post entity - a blog post with a two-part author name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: Author,
}

impl Post {
    /// Create a new post with a freshly assigned id.
    pub fn new(new_post: NewPost) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: new_post.title,
            content: new_post.content,
            author: new_post.author,
        }
    }

    /// Apply a partial update: fields present in the patch overwrite the
    /// stored fields, absent fields are left untouched. The nested author
    /// group merges field-by-field, not wholesale.
    pub fn apply_patch(&mut self, patch: PostPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(author) = patch.author {
            if let Some(first_name) = author.first_name {
                self.author.first_name = first_name;
            }
            if let Some(last_name) = author.last_name {
                self.author.last_name = last_name;
            }
        }
    }
}

/// Input for creating a post. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: Author,
}

/// Partial update for a post. `None` means "leave this field alone".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<AuthorPatch>,
}

/// Partial update for the nested author group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> Post {
        Post::new(NewPost {
            title: "Ten Uses for Borrowed Time".to_owned(),
            content: "All of them involve lifetimes.".to_owned(),
            author: Author {
                first_name: "Ada".to_owned(),
                last_name: "Lovelace".to_owned(),
            },
        })
    }

    #[test]
    fn display_name_is_single_space_join() {
        let author = Author {
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
        };
        assert_eq!(author.display_name(), "Ada Lovelace");
    }

    #[test]
    fn new_assigns_distinct_ids() {
        let a = sample_post();
        let b = sample_post();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn patch_overwrites_only_present_fields() {
        let mut post = sample_post();
        let original_content = post.content.clone();

        post.apply_patch(PostPatch {
            title: Some("Eleven Uses".to_owned()),
            ..PostPatch::default()
        });

        assert_eq!(post.title, "Eleven Uses");
        assert_eq!(post.content, original_content);
        assert_eq!(post.author.display_name(), "Ada Lovelace");
    }

    #[test]
    fn author_patch_merges_field_by_field() {
        let mut post = sample_post();

        post.apply_patch(PostPatch {
            author: Some(AuthorPatch {
                last_name: Some("Byron".to_owned()),
                ..AuthorPatch::default()
            }),
            ..PostPatch::default()
        });

        assert_eq!(post.author.first_name, "Ada");
        assert_eq!(post.author.last_name, "Byron");
    }

    #[test]
    fn full_patch_replaces_all_fields() {
        let mut post = sample_post();
        let id = post.id;

        post.apply_patch(PostPatch {
            title: Some("Updated Title".to_owned()),
            content: Some("Updated Content".to_owned()),
            author: Some(AuthorPatch {
                first_name: Some("Updated".to_owned()),
                last_name: Some("Author".to_owned()),
            }),
        });

        assert_eq!(post.id, id);
        assert_eq!(post.title, "Updated Title");
        assert_eq!(post.content, "Updated Content");
        assert_eq!(post.author.display_name(), "Updated Author");
    }
}
