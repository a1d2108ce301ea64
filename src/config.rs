use serde::{Deserialize, Serialize};

pub const DEFAULT_EMOJI: &str = "😊";
pub const EMOJI_PALETTE: [&str; 8] = ["😊", "😀", "😂", "❤️", "👍", "🎉", "🤔", "😎"];

pub const AVATAR_BASE_URL: &str = "https://ui-avatars.com/api/";
pub const AVATAR_FOREGROUND: &str = "fff";
pub const NEW_POST_AVATAR_BACKGROUND: &str = "6366f1";
pub const FALLBACK_AVATAR_BACKGROUND: &str = "6b7280";
pub const FALLBACK_AVATAR_SIZE: u32 = 150;

/// Placeholder-image parameters for a generated avatar URL.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AvatarStyle {
    pub base_url: String,
    pub background: String,
    pub foreground: String,
    #[serde(default)]
    pub size: Option<u32>,
}

impl AvatarStyle {
    /// Style used for the author avatar of freshly composed posts.
    pub fn new_post() -> Self {
        Self {
            base_url: AVATAR_BASE_URL.to_string(),
            background: NEW_POST_AVATAR_BACKGROUND.to_string(),
            foreground: AVATAR_FOREGROUND.to_string(),
            size: None,
        }
    }

    /// Style the view layer falls back to when an avatar image fails to load.
    pub fn fallback() -> Self {
        Self {
            base_url: AVATAR_BASE_URL.to_string(),
            background: FALLBACK_AVATAR_BACKGROUND.to_string(),
            foreground: AVATAR_FOREGROUND.to_string(),
            size: Some(FALLBACK_AVATAR_SIZE),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub post_avatar: AvatarStyle,
    pub fallback_avatar: AvatarStyle,
    pub emoji_palette: Vec<String>,
    pub default_emoji: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            post_avatar: AvatarStyle::new_post(),
            fallback_avatar: AvatarStyle::fallback(),
            emoji_palette: EMOJI_PALETTE.iter().map(|e| e.to_string()).collect(),
            default_emoji: DEFAULT_EMOJI.to_string(),
        }
    }
}

impl Config {
    /// Parse a config document; missing fields keep their defaults.
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let config: Config = serde_json::from_str(raw)?;
        if !config.emoji_palette.is_empty() && !config.emoji_palette.contains(&config.default_emoji) {
            anyhow::bail!("default emoji {} is not in the palette", config.default_emoji);
        }
        Ok(config)
    }
}
