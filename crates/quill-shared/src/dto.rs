//! Data Transfer Objects - request/response types for the posts API.
//!
//! Request bodies carry the author as a `{firstName, lastName}` composite;
//! responses collapse it into the `"First Last"` display string. That
//! asymmetry is the wire contract, locked in by the integration suite.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use quill_core::domain::{Author, AuthorPatch, NewPost, Post, PostPatch};

/// Author composite as it appears in request bodies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorPayload {
    pub first_name: String,
    pub last_name: String,
}

/// Request to create a post. All fields are required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub author: AuthorPayload,
}

/// Partial author update; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorPatchPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// Request to update a post. Only the fields sent are replaced.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorPatchPayload>,
}

/// A post as serialized on the wire: the author composite is flattened
/// into a single display string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            author: post.author.display_name(),
        }
    }
}

impl From<CreatePostRequest> for NewPost {
    fn from(req: CreatePostRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
            author: Author {
                first_name: req.author.first_name,
                last_name: req.author.last_name,
            },
        }
    }
}

impl From<UpdatePostRequest> for PostPatch {
    fn from(req: UpdatePostRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
            author: req.author.map(|author| AuthorPatch {
                first_name: author.first_name,
                last_name: author.last_name,
            }),
        }
    }
}
