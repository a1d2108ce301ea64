use tracing::{debug, info};

use crate::auth::SessionStore;
use crate::config::AvatarStyle;
use crate::core::errors::ApiError;
use crate::core::helpers::{avatar_url, now_iso, IdGenerator};
use crate::models::models::{Author, Post, User};

/// Ordered post sequence, newest first by insertion.
#[derive(Debug)]
pub struct FeedStore {
    posts: Vec<Post>,
    ids: IdGenerator,
    avatars: AvatarStyle,
}

impl FeedStore {
    pub fn new(seed: Vec<Post>, avatars: AvatarStyle) -> Self {
        let mut ids = IdGenerator::new();
        ids.reserve(seed.iter().map(|p| p.id.as_str()));
        Self {
            posts: seed,
            ids,
            avatars,
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    fn author_for(&self, user: &User) -> Author {
        Author {
            name: user.username.clone(),
            username: user.username.clone(),
            avatar: avatar_url(&self.avatars, &user.username),
        }
    }

    /// Compose a post as the signed-in user and put it at the head of the feed.
    ///
    /// Blank content is ignored (`Ok(None)`), and a signed-out session is
    /// refused; neither touches the feed.
    pub fn create_post(
        &mut self,
        session: &SessionStore,
        content: &str,
        emoji: Option<&str>,
    ) -> Result<Option<&Post>, ApiError> {
        if content.trim().is_empty() {
            debug!("ignoring blank post");
            return Ok(None);
        }
        let user = session.current_user().ok_or(ApiError::Unauthorized)?;

        let post = Post {
            id: self.ids.next_id(),
            author: self.author_for(user),
            content: content.to_string(),
            timestamp: now_iso(),
            emoji: emoji.map(str::to_string),
            likes: 0,
            comments: 0,
            shares: 0,
        };
        info!(post_id = %post.id, username = %user.username, "post created");

        self.posts.insert(0, post); // prepend newest
        Ok(self.posts.first())
    }
}
