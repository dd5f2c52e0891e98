//! Fixture generator - synthetic posts with random author, title and body text.
//!
//! Nothing here touches a store. Every call draws fresh values from the rng.

use rand::Rng;
use rand::seq::SliceRandom;

use blogger_core::domain::{Author, NewPost};
use blogger_shared::{AuthorPayload, CreatePostRequest};

/// Number of posts seeded before each scenario.
pub const DEFAULT_SEED_SIZE: usize = 10;

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Amara", "Ana", "Bjorn", "Carmen", "Chidi", "Dana", "Elif", "Farah", "Grace",
    "Hiro", "Ines", "Jonas", "Kofi", "Lena", "Luis", "Mara", "Nadia", "Omar", "Priya", "Quinn",
    "Rosa", "Sami", "Tariq", "Uma", "Viktor", "Wen", "Yara", "Zoe",
];

const LAST_NAMES: &[&str] = &[
    "Abe", "Bauer", "Castillo", "Diallo", "Eriksen", "Fischer", "Garcia", "Hopper", "Ibrahim",
    "Jensen", "Kowalski", "Lee", "Moreau", "Nakamura", "Okafor", "Petrov", "Quispe", "Rossi",
    "Silva", "Tanaka", "Ueda", "Varga", "Weber", "Xu", "Yilmaz", "Zhang",
];

const LOREM: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in",
    "reprehenderit", "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur",
    "excepteur", "sint", "occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui",
    "officia", "deserunt", "mollit", "anim", "id", "est", "laborum",
];

fn pick<R: Rng + ?Sized>(rng: &mut R, words: &[&'static str]) -> &'static str {
    // Word lists are non-empty constants.
    words.choose(rng).copied().unwrap_or("lorem")
}

/// A random name pair.
pub fn author_with<R: Rng + ?Sized>(rng: &mut R) -> Author {
    Author::new(pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES))
}

/// A short capitalized sentence of 4 to 8 words ending in a period.
pub fn sentence_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let len = rng.gen_range(4..=8);
    let words: Vec<&str> = (0..len).map(|_| pick(rng, LOREM)).collect();
    let joined = words.join(" ");

    let mut chars = joined.chars();
    match chars.next() {
        Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}

/// Three to six sentences separated by spaces.
pub fn text_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let count = rng.gen_range(3..=6);
    (0..count)
        .map(|_| sentence_with(rng))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Generate one post with fresh random author, title and content.
pub fn generate_post_with<R: Rng + ?Sized>(rng: &mut R) -> NewPost {
    let author = author_with(rng);
    let title = sentence_with(rng);
    let content = text_with(rng);
    NewPost::new(author, title, content)
}

/// Generate `n` independent posts.
pub fn generate_seed_batch_with<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<NewPost> {
    (0..n).map(|_| generate_post_with(rng)).collect()
}

pub fn generate_post() -> NewPost {
    generate_post_with(&mut rand::thread_rng())
}

pub fn generate_seed_batch(n: usize) -> Vec<NewPost> {
    generate_seed_batch_with(&mut rand::thread_rng(), n)
}

/// The `POST /posts` body carrying `post`.
pub fn create_request(post: &NewPost) -> CreatePostRequest {
    CreatePostRequest {
        author: author_payload(&post.author),
        title: post.title.clone(),
        content: post.content.clone(),
    }
}

pub fn author_payload(author: &Author) -> AuthorPayload {
    AuthorPayload {
        first_name: author.first_name.clone(),
        last_name: author.last_name.clone(),
    }
}
