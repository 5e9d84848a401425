//! Validation and normalization of GOG game URLs.
//!
//! Locale-qualified (`/en/game/...`) and unqualified (`/game/...`) URLs
//! refer to the same listing; both collapse to one canonical request path
//! and one cache key.

use regex_lite::Regex;
use std::sync::LazyLock;

const GOG_HOST: &str = "https://www.gog.com";

// Fixed host, optional locale segment, word-character slug.
static GAME_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https://www\.gog\.com(?:/en)?/game/(\w+)$").unwrap());

/// A validated GOG game URL, reduced to its slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameUrl {
    slug: String,
}

impl GameUrl {
    /// Validates an input URL against the allowed pattern.
    pub fn parse(url: &str) -> Option<Self> {
        let captures = GAME_URL.captures(url)?;
        Some(Self { slug: captures[1].to_string() })
    }

    /// Canonical locale-qualified path sent to the storefront.
    pub fn request_path(&self) -> String {
        format!("/en/game/{}", self.slug)
    }

    /// Cache key with locale variance removed.
    pub fn cache_key(&self) -> String {
        format!("price_{}/game/{}", GOG_HOST, self.slug)
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }
}
