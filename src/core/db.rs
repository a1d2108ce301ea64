use chrono::{DateTime, Duration, Utc};

use crate::models::models::{Author, KnownUser, Post};

const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.";

fn known_user(id: &str, email: &str, username: &str, password: &str) -> KnownUser {
    KnownUser {
        id: id.to_string(),
        email: email.to_string(),
        username: username.to_string(),
        password: password.to_string(),
    }
}

/// Demo accounts accepted by sign-in.
pub fn seed_known_users() -> Vec<KnownUser> {
    vec![
        known_user("1", "demo@example.com", "demo", "password123"),
        known_user("2", "test@user.com", "testuser", "testpass"),
    ]
}

fn seed_post(id: &str, name: &str, username: &str, background: &str, stamp: &str, emoji: &str, counts: (u32, u32, u32)) -> Post {
    let (likes, comments, shares) = counts;
    Post {
        id: id.to_string(),
        author: Author {
            name: name.to_string(),
            username: username.to_string(),
            avatar: format!(
                "https://ui-avatars.com/api/?name={}&background={}&color=fff&size=150",
                name.replace(' ', "+"),
                background
            ),
        },
        content: LOREM.to_string(),
        timestamp: stamp.to_string(),
        emoji: Some(emoji.to_string()),
        likes,
        comments,
        shares,
    }
}

/// Initial feed, newest first, all stamped five minutes before `now`.
pub fn seed_posts(now: DateTime<Utc>) -> Vec<Post> {
    let stamp = (now - Duration::minutes(5)).to_rfc3339();
    vec![
        seed_post("1", "Theresa Webb", "theresa_webb", "3b82f6", &stamp, "😊", (12, 3, 1)),
        seed_post("2", "John Doe", "john_doe", "10b981", &stamp, "👍", (8, 2, 0)),
        seed_post("3", "Jane Doe", "jane_doe", "f59e0b", &stamp, "😀", (15, 5, 2)),
    ]
}
