//! Mapping from stored posts to their API representation.

use blogger_core::domain::{Author, NewPost, Post, PostUpdate};
use blogger_shared::{AuthorPayload, CreatePostRequest, PostResponse, UpdatePostRequest};

/// API representation of a stored post: hyphenated string id and flattened author.
pub fn api_repr(post: &Post) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        author: post.author.display_name(),
        title: post.title.clone(),
        content: post.content.clone(),
        created: post.created,
    }
}

fn author_from(payload: AuthorPayload) -> Author {
    Author::new(payload.first_name, payload.last_name)
}

pub fn new_post_from(req: CreatePostRequest) -> NewPost {
    NewPost::new(author_from(req.author), req.title, req.content)
}

pub fn update_from(req: UpdatePostRequest) -> PostUpdate {
    PostUpdate {
        author: author_from(req.author),
        title: req.title,
        content: req.content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_repr_flattens_author() {
        let post = Post::from_new(NewPost::new(Author::new("Ana", "Lee"), "T", "C"));

        let repr = api_repr(&post);

        assert_eq!(repr.id, post.id.to_string());
        assert_eq!(repr.author, "Ana Lee");
        assert_eq!(repr.title, "T");
        assert_eq!(repr.content, "C");
        assert_eq!(repr.created, post.created);
    }

    #[test]
    fn test_api_repr_has_exactly_the_public_fields() {
        let post = Post::from_new(NewPost::new(Author::new("Ana", "Lee"), "T", "C"));

        let json = serde_json::to_value(api_repr(&post)).unwrap();
        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();

        assert_eq!(keys, ["author", "content", "created", "id", "title"]);
    }
}
