// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The admin resources whose display order is managed by bulk reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Topics,
    HeroImages,
    HeroPhrases,
    Categories,
    Tags,
    News,
}

/// How a resource's editable text field is constrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextRule {
    /// The resource has no text field editable in bulk.
    None,
    /// Every row must carry non-empty text.
    Required,
    /// Every row must carry non-empty text, distinct across the resource.
    RequiredUnique,
}

/// Per-resource binding for the bulk reorder/publish service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourcePolicy {
    /// Constraint on the bulk-editable text field.
    pub text_rule: TextRule,
    /// Whether rows carry an `is_published` flag.
    pub has_publish_flag: bool,
    /// Whether rows carry the news edit columns (subtitle, url, interview date).
    pub has_news_fields: bool,
}

impl ResourceKind {
    /// All orderable resources, in admin menu order.
    pub const ALL: [Self; 6] = [
        Self::Topics,
        Self::HeroImages,
        Self::HeroPhrases,
        Self::Categories,
        Self::Tags,
        Self::News,
    ];

    /// Returns the URL slug used under `/admin/`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Topics => "topics",
            Self::HeroImages => "hero-images",
            Self::HeroPhrases => "hero-phrases",
            Self::Categories => "categories",
            Self::Tags => "tags",
            Self::News => "news",
        }
    }

    /// Returns the human-readable label shown in the admin console.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Topics => "トピック",
            Self::HeroImages => "ヒーロー画像",
            Self::HeroPhrases => "ヒーローフレーズ",
            Self::Categories => "カテゴリ",
            Self::Tags => "タグ",
            Self::News => "ニュース",
        }
    }

    /// Returns the bulk-edit policy for this resource.
    #[must_use]
    pub const fn policy(&self) -> ResourcePolicy {
        match self {
            Self::Topics | Self::HeroImages => ResourcePolicy {
                text_rule: TextRule::None,
                has_publish_flag: true,
                has_news_fields: false,
            },
            Self::HeroPhrases => ResourcePolicy {
                text_rule: TextRule::Required,
                has_publish_flag: true,
                has_news_fields: false,
            },
            Self::Categories | Self::Tags => ResourcePolicy {
                text_rule: TextRule::RequiredUnique,
                has_publish_flag: false,
                has_news_fields: false,
            },
            Self::News => ResourcePolicy {
                text_rule: TextRule::Required,
                has_publish_flag: false,
                has_news_fields: true,
            },
        }
    }

    /// Returns the name of the text field validated in bulk, if any.
    #[must_use]
    pub const fn text_field(&self) -> Option<&'static str> {
        match self {
            Self::Topics | Self::HeroImages => None,
            Self::HeroPhrases => Some("text"),
            Self::Categories | Self::Tags => Some("name"),
            Self::News => Some("title"),
        }
    }
}

impl FromStr for ResourceKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DomainError::UnknownResource(s.to_string()))
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
