use chrono::Utc;
use tracing::debug;

use crate::auth::SessionStore;
use crate::config::Config;
use crate::core::db::{seed_known_users, seed_posts};
use crate::core::errors::ApiError;
use crate::core::helpers::{avatar_url, format_time_ago};
use crate::models::models::{
    KnownUser, Post, SessionState, SignInCredentials, SignUpCredentials, User,
};
use crate::posts::FeedStore;
use crate::users::KnownUsers;

/// Whether a view interaction may go ahead or should open the sign-in prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    Proceed,
    RequireSignIn,
}

/// Outcome of submitting the post editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    RequireSignIn,
    Ignored,
    Posted(String),
}

/// Both stores, passed to the view layer as one explicit context.
#[derive(Debug)]
pub struct App {
    config: Config,
    session: SessionStore,
    feed: FeedStore,
}

impl App {
    pub fn new(config: Config, known: Vec<KnownUser>, posts: Vec<Post>) -> Self {
        let feed = FeedStore::new(posts, config.post_avatar.clone());
        Self {
            session: SessionStore::new(KnownUsers::new(known)),
            feed,
            config,
        }
    }

    /// App seeded with the demo accounts and posts.
    pub fn demo() -> Self {
        Self::new(Config::default(), seed_known_users(), seed_posts(Utc::now()))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn session(&self) -> &SessionState {
        self.session.state()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.current_user()
    }

    pub fn posts(&self) -> &[Post] {
        self.feed.posts()
    }

    pub fn sign_in(&mut self, creds: &SignInCredentials) -> bool {
        self.session.sign_in(creds)
    }

    pub fn sign_up(&mut self, creds: &SignUpCredentials) -> bool {
        self.session.sign_up(creds)
    }

    pub fn sign_out(&mut self) {
        self.session.sign_out()
    }

    /// Sign in and report why it failed, for views that show a reason.
    pub fn try_sign_in(&mut self, creds: &SignInCredentials) -> Result<&User, ApiError> {
        let user = self.session.authenticate(creds)?;
        self.session.adopt(user);
        self.session.current_user().ok_or_else(|| {
            ApiError::InternalError("sign-in succeeded without a user".to_string())
        })
    }

    /// Sign up and report why it failed.
    pub fn try_sign_up(&mut self, creds: &SignUpCredentials) -> Result<&User, ApiError> {
        let user = self.session.register(creds)?;
        self.session.adopt(user);
        self.session.current_user().ok_or_else(|| {
            ApiError::InternalError("sign-up succeeded without a user".to_string())
        })
    }

    pub fn gate(&self) -> Interaction {
        if self.session.is_authenticated() {
            Interaction::Proceed
        } else {
            Interaction::RequireSignIn
        }
    }

    /// Editor submit: deflect to sign-in, ignore blank content, or post.
    pub fn submit_post(&mut self, content: &str, emoji: Option<&str>) -> Submission {
        if self.gate() == Interaction::RequireSignIn {
            debug!("post submit deflected to sign-in");
            return Submission::RequireSignIn;
        }
        match self.feed.create_post(&self.session, content, emoji) {
            Ok(Some(post)) => Submission::Posted(post.id.clone()),
            Ok(None) => Submission::Ignored,
            Err(ApiError::Unauthorized) => Submission::RequireSignIn,
            Err(e) => unreachable!("compose failed unexpectedly: {}", e),
        }
    }

    pub fn create_post(&mut self, content: &str, emoji: Option<&str>) -> Result<Option<&Post>, ApiError> {
        self.feed.create_post(&self.session, content, emoji)
    }

    pub fn time_ago(&self, post: &Post) -> Result<String, ApiError> {
        Ok(format_time_ago(&post.timestamp, Utc::now())?)
    }

    pub fn fallback_avatar(&self, post: &Post) -> String {
        avatar_url(&self.config.fallback_avatar, &post.author.name)
    }

    /// JSON snapshot of session and feed for the view layer.
    pub fn snapshot(&self) -> anyhow::Result<serde_json::Value> {
        Ok(serde_json::json!({
            "session": serde_json::to_value(self.session.state())?,
            "posts": serde_json::to_value(self.feed.posts())?,
        }))
    }
}
