//! Social platform table — compile-time metadata keyed by `SocialPlatform`.
//!
//! Ids are the lowercase serde names (`"twitter"`, `"linkedin"`, ...). An unknown
//! id fails deserialization, so no code path ever holds an invalid platform.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Twitter,
    Facebook,
    Instagram,
    LinkedIn,
    GitHub,
    YouTube,
}

/// Display metadata for one platform.
#[derive(Debug, PartialEq, Eq)]
pub struct PlatformInfo {
    pub name: &'static str,
    /// Profile URL prefix; a bare handle is appended to this.
    pub domain: &'static str,
    /// Tailwind classes used by the presentation layer for the link badge.
    pub color: &'static str,
}

const TWITTER: PlatformInfo = PlatformInfo {
    name: "Twitter",
    domain: "https://twitter.com/",
    color: "bg-[#1DA1F2]/10 text-[#1DA1F2] border-[#1DA1F2]/20",
};

const FACEBOOK: PlatformInfo = PlatformInfo {
    name: "Facebook",
    domain: "https://facebook.com/",
    color: "bg-[#1877F2]/10 text-[#1877F2] border-[#1877F2]/20",
};

const INSTAGRAM: PlatformInfo = PlatformInfo {
    name: "Instagram",
    domain: "https://instagram.com/",
    color: "bg-[#E4405F]/10 text-[#E4405F] border-[#E4405F]/20",
};

const LINKEDIN: PlatformInfo = PlatformInfo {
    name: "LinkedIn",
    domain: "https://linkedin.com/in/",
    color: "bg-[#0A66C2]/10 text-[#0A66C2] border-[#0A66C2]/20",
};

const GITHUB: PlatformInfo = PlatformInfo {
    name: "GitHub",
    domain: "https://github.com/",
    color: "bg-gray-800/10 text-gray-800 dark:text-gray-200 border-gray-800/20 dark:border-gray-200/20",
};

const YOUTUBE: PlatformInfo = PlatformInfo {
    name: "YouTube",
    domain: "https://youtube.com/",
    color: "bg-[#FF0000]/10 text-[#FF0000] border-[#FF0000]/20",
};

impl SocialPlatform {
    /// Every platform, in picker order.
    pub const ALL: [SocialPlatform; 6] = [
        SocialPlatform::Twitter,
        SocialPlatform::Facebook,
        SocialPlatform::Instagram,
        SocialPlatform::LinkedIn,
        SocialPlatform::GitHub,
        SocialPlatform::YouTube,
    ];

    pub fn info(self) -> &'static PlatformInfo {
        match self {
            SocialPlatform::Twitter => &TWITTER,
            SocialPlatform::Facebook => &FACEBOOK,
            SocialPlatform::Instagram => &INSTAGRAM,
            SocialPlatform::LinkedIn => &LINKEDIN,
            SocialPlatform::GitHub => &GITHUB,
            SocialPlatform::YouTube => &YOUTUBE,
        }
    }
}

/// One row of `GET /api/resume/platforms`.
#[derive(Debug, Clone, Serialize)]
pub struct PlatformEntry {
    pub id: SocialPlatform,
    pub name: &'static str,
    pub domain: &'static str,
    pub color: &'static str,
}

impl From<SocialPlatform> for PlatformEntry {
    fn from(platform: SocialPlatform) -> Self {
        let info = platform.info();
        Self {
            id: platform,
            name: info.name,
            domain: info.domain,
            color: info.color,
        }
    }
}

pub fn platform_table() -> Vec<PlatformEntry> {
    SocialPlatform::ALL.into_iter().map(PlatformEntry::from).collect()
}
