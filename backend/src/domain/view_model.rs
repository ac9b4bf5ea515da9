//! View-model assembly: display-ready values derived from catalog records.
//!
//! Everything here is pure. Single-record display distinguishes an absent
//! value (rendered as [`PLACEHOLDER`]) from zero; aggregate totals count
//! absent values as zero so one incomplete record cannot blank a sum.

use chrono::DateTime;
use tracing::debug;

use super::catalog::{Creation, CreationDetail, CreationsBatch, Currency, UserHeader};

/// Rendered in place of an absent count or amount.
pub const PLACEHOLDER: &str = "—";
/// Rendered in place of an absent price.
pub const FREE_LABEL: &str = "FREE";
/// Number of creations highlighted at the top of the showcase.
pub const FEATURED_COUNT: usize = 2;
/// Maximum number of tags shown on a design view.
pub const MAX_TAGS: usize = 40;
/// Bio shown when the seller profile has none.
pub const DEFAULT_BIO: &str = "Elite EUC armor and control pads, streamed off the Cults3D grid. \
    Tune your lean vectors, harden your stance, and ride the edge with precision.";
/// Profile link used when the remote record has none.
pub const DEFAULT_PROFILE_URL: &str = "https://cults3d.com/";

const COMPACT_SUFFIXES: [(u32, &str); 4] = [(3, "K"), (6, "M"), (9, "B"), (12, "T")];

/// Format a count in English compact notation.
///
/// Values below one thousand print in full. Larger values are scaled to the
/// largest suffix not exceeding them and rounded half-up to two significant
/// digits below 100 (`1.2K`, `12K`) or to an integer above (`123K`).
///
/// # Examples
/// ```
/// use storefront::domain::format_compact;
///
/// assert_eq!(format_compact(None), "—");
/// assert_eq!(format_compact(Some(0)), "0");
/// assert_eq!(format_compact(Some(1_234)), "1.2K");
/// assert_eq!(format_compact(Some(1_500_000)), "1.5M");
/// ```
#[must_use]
pub fn format_compact(value: Option<u64>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_owned(), compact)
}

fn compact(value: u64) -> String {
    let value = u128::from(value);
    let mut tier = COMPACT_SUFFIXES
        .iter()
        .rposition(|(exponent, _)| value >= 10_u128.pow(*exponent));
    while let Some(index) = tier {
        let Some(&(exponent, suffix)) = COMPACT_SUFFIXES.get(index) else {
            break;
        };
        let scale = 10_u128.pow(exponent);
        let whole = value / scale;
        let rendered = if whole < 10 {
            let tenths = (value * 10 + scale / 2) / scale;
            if tenths % 10 == 0 {
                (tenths / 10).to_string()
            } else {
                format!("{}.{}", tenths / 10, tenths % 10)
            }
        } else {
            let rounded = (value + scale / 2) / scale;
            if rounded >= 1_000 && index + 1 < COMPACT_SUFFIXES.len() {
                tier = Some(index + 1);
                continue;
            }
            group_thousands(rounded)
        };
        return format!("{rendered}{suffix}");
    }
    value.to_string()
}

/// Comma grouping that leaves four-digit values unseparated (`1234`, `12,345`).
fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    if digits.len() < 5 {
        return digits;
    }
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Format a price in minor units, or [`FREE_LABEL`] when absent.
///
/// Zero is a real price and renders as an amount.
///
/// # Examples
/// ```
/// use storefront::domain::{Currency, format_price};
///
/// assert_eq!(format_price(Some(1250), Currency::Usd), "$12.50");
/// assert_eq!(format_price(Some(0), Currency::Eur), "€0.00");
/// assert_eq!(format_price(None, Currency::Usd), "FREE");
/// ```
#[must_use]
pub fn format_price(cents: Option<i64>, currency: Currency) -> String {
    cents.map_or_else(
        || FREE_LABEL.to_owned(),
        |amount| format!("{}{}", currency.symbol(), minor_units(amount)),
    )
}

/// Format a sales amount in minor units, or the placeholder when absent.
///
/// # Examples
/// ```
/// use storefront::domain::{Currency, format_sales};
///
/// assert_eq!(format_sales(Some(99), Currency::Gbp), "£0.99");
/// assert_eq!(format_sales(None, Currency::Usd), "$—");
/// ```
#[must_use]
pub fn format_sales(cents: Option<i64>, currency: Currency) -> String {
    let amount = cents.map_or_else(|| PLACEHOLDER.to_owned(), minor_units);
    format!("{}{amount}", currency.symbol())
}

fn minor_units(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let magnitude = cents.unsigned_abs();
    format!("{sign}{}.{:02}", magnitude / 100, magnitude % 100)
}

/// Format an RFC 3339 timestamp as `Jan 5, 2026`.
///
/// Returns `None` for absent or unparsable input.
#[must_use]
pub fn format_published(raw: Option<&str>) -> Option<String> {
    let raw = raw?;
    match DateTime::parse_from_rfc3339(raw) {
        Ok(timestamp) => Some(timestamp.format("%b %-d, %Y").to_string()),
        Err(error) => {
            debug!(value = raw, %error, "ignoring unparsable publish date");
            None
        }
    }
}

/// Sums across a catalog batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CatalogTotals {
    /// Sum of view counts.
    pub views: u64,
    /// Sum of download counts.
    pub downloads: u64,
    /// Sum of sales in minor units.
    pub revenue_cents: i64,
}

impl CatalogTotals {
    /// Sum every creation, counting absent fields as zero.
    ///
    /// # Examples
    /// ```
    /// use storefront::domain::CatalogTotals;
    ///
    /// assert_eq!(CatalogTotals::from_creations(&[]), CatalogTotals::default());
    /// ```
    #[must_use]
    pub fn from_creations(creations: &[Creation]) -> Self {
        creations.iter().fold(Self::default(), |acc, creation| Self {
            views: acc
                .views
                .saturating_add(creation.views_count.unwrap_or_default()),
            downloads: acc
                .downloads
                .saturating_add(creation.downloads_count.unwrap_or_default()),
            revenue_cents: acc
                .revenue_cents
                .saturating_add(creation.total_sales_cents.unwrap_or_default()),
        })
    }
}

/// Listing card for one creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationCard {
    /// Slug used to link to the design view; may be empty.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Canonical Cults3D URL.
    pub url: String,
    /// Illustration or first blueprint preview.
    pub image_url: Option<String>,
    /// Compact view count.
    pub views: String,
    /// Compact download count.
    pub downloads: String,
    /// Formatted sales amount.
    pub sales: String,
}

impl CreationCard {
    /// Build a card from a catalog record.
    #[must_use]
    pub fn from_creation(creation: &Creation, currency: Currency) -> Self {
        Self {
            slug: creation.slug().to_owned(),
            name: creation.name.clone(),
            url: creation.url.clone(),
            image_url: creation.preview_image().map(str::to_owned),
            views: format_compact(creation.views_count),
            downloads: format_compact(creation.downloads_count),
            sales: format_sales(creation.total_sales_cents, currency),
        }
    }
}

/// Home page view model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowcaseView {
    /// Seller biography.
    pub bio: String,
    /// Seller profile link.
    pub profile_url: String,
    /// Seller avatar, when the profile has one.
    pub avatar_url: Option<String>,
    /// Number of creations on offer.
    pub models_indexed: u64,
    /// Raw sums across the batch.
    pub totals: CatalogTotals,
    /// Compact total view count.
    pub total_views: String,
    /// Compact total download count.
    pub total_downloads: String,
    /// Formatted total sales.
    pub donations: String,
    /// Highlighted creations.
    pub featured: Vec<CreationCard>,
    /// Every creation in the batch.
    pub cards: Vec<CreationCard>,
}

impl ShowcaseView {
    /// Combine a catalog batch and the seller header into a showcase.
    ///
    /// The indexed count prefers the batch total, then the header's creation
    /// count, then the number of results received.
    #[must_use]
    pub fn assemble(batch: &CreationsBatch, header: Option<&UserHeader>, currency: Currency) -> Self {
        let totals = CatalogTotals::from_creations(&batch.results);
        let cards: Vec<CreationCard> = batch
            .results
            .iter()
            .map(|creation| CreationCard::from_creation(creation, currency))
            .collect();
        let featured = cards.iter().take(FEATURED_COUNT).cloned().collect();
        let models_indexed = batch
            .total
            .or_else(|| header.and_then(|user| user.creations_count))
            .unwrap_or_else(|| u64::try_from(batch.results.len()).unwrap_or(u64::MAX));

        Self {
            bio: header
                .and_then(|user| user.bio.clone())
                .unwrap_or_else(|| DEFAULT_BIO.to_owned()),
            profile_url: header
                .and_then(|user| user.short_url.clone())
                .unwrap_or_else(|| DEFAULT_PROFILE_URL.to_owned()),
            avatar_url: header.and_then(|user| user.image_url.clone()),
            models_indexed,
            totals,
            total_views: format_compact(Some(totals.views)),
            total_downloads: format_compact(Some(totals.downloads)),
            donations: format_sales(Some(totals.revenue_cents), currency),
            featured,
            cards,
        }
    }
}

/// Detail page view model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignView {
    /// Display name.
    pub name: String,
    /// Cover illustration.
    pub image_url: Option<String>,
    /// Link to the creation on Cults3D.
    pub cults_url: String,
    /// Localised category name.
    pub category: Option<String>,
    /// Localised license name, or the placeholder.
    pub license: String,
    /// Publication date, e.g. `Jan 5, 2026`.
    pub published: Option<String>,
    /// Compact view count.
    pub views: String,
    /// Compact like count.
    pub likes: String,
    /// Compact download count.
    pub downloads: String,
    /// Up to [`MAX_TAGS`] tags.
    pub tags: Vec<String>,
    /// Formatted price or [`FREE_LABEL`].
    pub price: String,
    /// Author nickname.
    pub creator_nick: Option<String>,
    /// Author profile link.
    pub creator_url: Option<String>,
}

impl DesignView {
    /// Build a design view from a creation detail record.
    #[must_use]
    pub fn from_detail(detail: CreationDetail, currency: Currency) -> Self {
        let CreationDetail {
            name,
            short_url,
            illustration_image_url,
            license_name,
            category_name,
            published_at,
            views_count,
            likes_count,
            downloads_count,
            mut tags,
            price_cents,
            creator,
        } = detail;
        tags.truncate(MAX_TAGS);
        let creator = creator.unwrap_or_default();

        Self {
            name,
            image_url: illustration_image_url.filter(|url| !url.is_empty()),
            cults_url: short_url.unwrap_or_else(|| DEFAULT_PROFILE_URL.to_owned()),
            category: category_name,
            license: license_name.unwrap_or_else(|| PLACEHOLDER.to_owned()),
            published: format_published(published_at.as_deref()),
            views: format_compact(views_count),
            likes: format_compact(likes_count),
            downloads: format_compact(downloads_count),
            tags,
            price: format_price(price_cents, currency),
            creator_nick: creator.nick,
            creator_url: creator.short_url,
        }
    }
}

#[cfg(test)]
mod tests;
