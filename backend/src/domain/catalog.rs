//! Catalog records fetched from Cults3D and the enums that parameterise them.
//!
//! Records live for a single request: they are decoded from a GraphQL
//! response, turned into a view model, and dropped. Optional fields stay
//! optional here so view-model assembly can tell "absent" from "zero".

use std::fmt;
use std::str::FromStr;

use super::slug::slug_from_url;

/// Default page size for catalog batches.
pub const DEFAULT_PAGE_LIMIT: u32 = 60;

/// Raised when a configuration or request value names no known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'; expected one of {expected}")]
pub struct UnknownVariant {
    /// Name of the enum being parsed.
    pub kind: &'static str,
    /// Rejected input.
    pub value: String,
    /// Accepted spellings.
    pub expected: &'static str,
}

/// Locale sent to Cults3D for localised names and URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English.
    #[default]
    En,
    /// French.
    Fr,
    /// Spanish.
    Es,
    /// German.
    De,
    /// Italian.
    It,
}

impl Locale {
    /// GraphQL `LocaleEnum` value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::Fr => "FR",
            Self::Es => "ES",
            Self::De => "DE",
            Self::It => "IT",
        }
    }
}

impl FromStr for Locale {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "EN" => Ok(Self::En),
            "FR" => Ok(Self::Fr),
            "ES" => Ok(Self::Es),
            "DE" => Ok(Self::De),
            "IT" => Ok(Self::It),
            _ => Err(UnknownVariant {
                kind: "locale",
                value: value.to_owned(),
                expected: "EN|FR|ES|DE|IT",
            }),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Currency used for prices and sales amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Currency {
    /// US dollar.
    #[default]
    Usd,
    /// Euro.
    Eur,
    /// Pound sterling.
    Gbp,
}

impl Currency {
    /// GraphQL `CurrencyEnum` value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
        }
    }

    /// Symbol prefixed to formatted amounts.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Gbp => "£",
        }
    }
}

impl FromStr for Currency {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            "GBP" => Ok(Self::Gbp),
            _ => Err(UnknownVariant {
                kind: "currency",
                value: value.to_owned(),
                expected: "USD|EUR|GBP",
            }),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Offset pagination for catalog batches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Maximum number of creations returned.
    pub limit: u32,
    /// Number of creations skipped.
    pub offset: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_LIMIT,
            offset: 0,
        }
    }
}

/// Printable file attached to a creation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Blueprint {
    /// Download URL of the file.
    pub file_url: Option<String>,
    /// Rendered preview of the file.
    pub image_url: Option<String>,
}

/// One creation as listed in the seller's catalog batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Creation {
    /// Localised display name.
    pub name: String,
    /// Canonical, localised URL on Cults3D.
    pub url: String,
    /// Cover illustration.
    pub illustration_image_url: Option<String>,
    /// Lifetime download count.
    pub downloads_count: Option<u64>,
    /// Lifetime view count.
    pub views_count: Option<u64>,
    /// Lifetime sales in minor units of the requested currency.
    pub total_sales_cents: Option<i64>,
    /// Attached files.
    pub blueprints: Vec<Blueprint>,
}

impl Creation {
    /// Slug derived from the canonical URL.
    #[must_use]
    pub fn slug(&self) -> &str {
        slug_from_url(&self.url)
    }

    /// Illustration, falling back to the first blueprint preview.
    ///
    /// Empty strings count as absent.
    #[must_use]
    pub fn preview_image(&self) -> Option<&str> {
        non_empty(self.illustration_image_url.as_deref()).or_else(|| {
            self.blueprints
                .first()
                .and_then(|blueprint| non_empty(blueprint.image_url.as_deref()))
        })
    }
}

/// A page of the seller's creations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreationsBatch {
    /// Total number of creations across all pages, when reported.
    pub total: Option<u64>,
    /// Creations in this page.
    pub results: Vec<Creation>,
}

/// Author reference on a creation detail.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Creator {
    /// Public nickname.
    pub nick: Option<String>,
    /// Profile URL.
    pub short_url: Option<String>,
}

/// Full record for a single creation, fetched by slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationDetail {
    /// Localised display name.
    pub name: String,
    /// Short link to the creation page.
    pub short_url: Option<String>,
    /// Cover illustration.
    pub illustration_image_url: Option<String>,
    /// Localised license name.
    pub license_name: Option<String>,
    /// Localised category name.
    pub category_name: Option<String>,
    /// Publication timestamp as sent by the API (RFC 3339).
    pub published_at: Option<String>,
    /// Lifetime view count.
    pub views_count: Option<u64>,
    /// Lifetime like count.
    pub likes_count: Option<u64>,
    /// Lifetime download count.
    pub downloads_count: Option<u64>,
    /// Localised tags.
    pub tags: Vec<String>,
    /// Price in minor units; `None` means the creation is free.
    pub price_cents: Option<i64>,
    /// Author reference.
    pub creator: Option<Creator>,
}

/// Public profile header of the seller account.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserHeader {
    /// Profile URL.
    pub short_url: Option<String>,
    /// Biography text.
    pub bio: Option<String>,
    /// Avatar URL.
    pub image_url: Option<String>,
    /// Number of published creations.
    pub creations_count: Option<u64>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}
