//! Resume header — name, position, and an ordered list of social links.
//!
//! Updates consume the header and return a new one; links can only enter the
//! header through `SocialLink::new`, so every stored URL is normalized.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::errors::AppError;
use crate::resume::platforms::SocialPlatform;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    #[error("Profile URL for {platform} cannot be empty")]
    EmptyUrl { platform: &'static str },

    #[error("'{url}' is not a {platform} profile URL")]
    ForeignUrl { platform: &'static str, url: String },
}

impl From<HeaderError> for AppError {
    fn from(err: HeaderError) -> Self {
        AppError::Validation(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    platform: SocialPlatform,
    url: String,
}

impl SocialLink {
    /// Builds a link, normalizing `url` against the platform's profile prefix.
    ///
    /// Accepted inputs for GitHub, all stored as `https://github.com/octocat`:
    /// `octocat`, `@octocat`, `github.com/octocat`, `http://www.github.com/octocat`.
    pub fn new(platform: SocialPlatform, url: &str) -> Result<Self, HeaderError> {
        Ok(Self {
            platform,
            url: normalize_profile_url(platform, url)?,
        })
    }

    pub fn platform(&self) -> SocialPlatform {
        self.platform
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

fn normalize_profile_url(platform: SocialPlatform, raw: &str) -> Result<String, HeaderError> {
    let info = platform.info();
    let trimmed = raw.trim();

    let without_scheme = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"));
    let had_scheme = without_scheme.is_some();
    let rest = without_scheme.unwrap_or(trimmed);
    let rest = rest.strip_prefix("www.").unwrap_or(rest);

    // "github.com/" for "https://github.com/"
    let host_path = info.domain.trim_start_matches("https://");

    let handle = if let Some(handle) = rest.strip_prefix(host_path) {
        handle
    } else if rest == host_path.trim_end_matches('/') {
        ""
    } else if had_scheme || names_host(rest) {
        return Err(HeaderError::ForeignUrl {
            platform: info.name,
            url: trimmed.to_string(),
        });
    } else {
        rest
    };

    let handle = handle.trim_start_matches('/').trim_start_matches('@');
    if handle.is_empty() {
        return Err(HeaderError::EmptyUrl {
            platform: info.name,
        });
    }

    Ok(format!("{}{}", info.domain, handle))
}

/// `twitter.com/me` names a host; `john.smith` and `octocat` are handles.
fn names_host(rest: &str) -> bool {
    rest.split_once('/')
        .is_some_and(|(first, _)| first.contains('.'))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResumeHeader {
    name: String,
    position: String,
    links: Vec<SocialLink>,
}

impl ResumeHeader {
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }

    pub fn with_position(self, position: impl Into<String>) -> Self {
        Self {
            position: position.into(),
            ..self
        }
    }

    /// Appends `link` after any existing links.
    pub fn with_link(mut self, link: SocialLink) -> Self {
        self.links.push(link);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn links(&self) -> &[SocialLink] {
        &self.links
    }
}

/// Request body for `POST /api/resume/header`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HeaderInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub links: Vec<LinkInput>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LinkInput {
    pub platform: SocialPlatform,
    pub url: String,
}

impl TryFrom<HeaderInput> for ResumeHeader {
    type Error = HeaderError;

    fn try_from(input: HeaderInput) -> Result<Self, Self::Error> {
        let header = ResumeHeader::default()
            .with_name(input.name.trim())
            .with_position(input.position.trim());

        input.links.iter().try_fold(header, |header, link| {
            Ok::<_, HeaderError>(header.with_link(SocialLink::new(link.platform, &link.url)?))
        })
    }
}
