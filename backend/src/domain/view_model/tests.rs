//! Tests for view-model formatting and assembly.

use super::*;
use crate::domain::catalog::{Blueprint, Creator};
use rstest::{fixture, rstest};

fn creation(name: &str, views: Option<u64>, downloads: Option<u64>, sales: Option<i64>) -> Creation {
    Creation {
        name: name.to_owned(),
        url: format!("https://cults3d.com/en/3d-model/gadget/{}", name.to_lowercase()),
        illustration_image_url: None,
        downloads_count: downloads,
        views_count: views,
        total_sales_cents: sales,
        blueprints: Vec::new(),
    }
}

#[fixture]
fn batch() -> CreationsBatch {
    CreationsBatch {
        total: Some(12),
        results: vec![
            creation("handle", Some(1_200), Some(40), Some(500)),
            creation("pad", None, Some(2), None),
            creation("guard", Some(0), None, Some(250)),
        ],
    }
}

#[fixture]
fn header() -> UserHeader {
    UserHeader {
        short_url: Some("https://cults3d.com/en/users/nikkasouza".to_owned()),
        bio: Some("Prints, tests, breaks, remixes.".to_owned()),
        image_url: Some("https://images.cults3d.com/avatar.png".to_owned()),
        creations_count: Some(30),
    }
}

#[rstest]
#[case(0, "0")]
#[case(7, "7")]
#[case(999, "999")]
#[case(1_000, "1K")]
#[case(1_049, "1K")]
#[case(1_050, "1.1K")]
#[case(1_234, "1.2K")]
#[case(9_960, "10K")]
#[case(12_345, "12K")]
#[case(99_500, "100K")]
#[case(123_456, "123K")]
#[case(999_999, "1M")]
#[case(1_000_000, "1M")]
#[case(1_500_000, "1.5M")]
#[case(2_000_000_000, "2B")]
#[case(1_000_000_000_000, "1T")]
#[case(1_000_000_000_000_000, "1000T")]
#[case(1_234_000_000_000_000, "1234T")]
#[case(12_345_000_000_000_000, "12,345T")]
fn compact_formatting_matches_english_notation(#[case] value: u64, #[case] expected: &str) {
    assert_eq!(format_compact(Some(value)), expected);
}

#[rstest]
fn compact_formatting_uses_placeholder_only_for_absent_values() {
    assert_eq!(format_compact(None), PLACEHOLDER);
    assert_ne!(format_compact(Some(0)), PLACEHOLDER);
}

#[rstest]
#[case(Some(1_999), Currency::Usd, "$19.99")]
#[case(Some(5), Currency::Eur, "€0.05")]
#[case(Some(100), Currency::Gbp, "£1.00")]
#[case(Some(0), Currency::Usd, "$0.00")]
#[case(Some(-250), Currency::Usd, "$-2.50")]
#[case(None, Currency::Eur, "FREE")]
fn price_formatting(#[case] cents: Option<i64>, #[case] currency: Currency, #[case] expected: &str) {
    assert_eq!(format_price(cents, currency), expected);
}

#[rstest]
#[case(Some(1_999), "$19.99")]
#[case(Some(0), "$0.00")]
#[case(None, "$—")]
fn sales_formatting(#[case] cents: Option<i64>, #[case] expected: &str) {
    assert_eq!(format_sales(cents, Currency::Usd), expected);
}

#[rstest]
#[case(Some("2026-01-05T10:00:00Z"), Some("Jan 5, 2026"))]
#[case(Some("2025-11-23T23:10:00+01:00"), Some("Nov 23, 2025"))]
#[case(Some("yesterday"), None)]
#[case(None, None)]
fn published_formatting(#[case] raw: Option<&str>, #[case] expected: Option<&str>) {
    assert_eq!(format_published(raw).as_deref(), expected);
}

#[rstest]
fn totals_treat_missing_fields_as_zero(batch: CreationsBatch) {
    let totals = CatalogTotals::from_creations(&batch.results);
    assert_eq!(
        totals,
        CatalogTotals {
            views: 1_200,
            downloads: 42,
            revenue_cents: 750,
        }
    );
}

#[rstest]
fn totals_of_empty_sequence_are_zero() {
    assert_eq!(CatalogTotals::from_creations(&[]), CatalogTotals::default());
}

#[rstest]
fn totals_saturate_instead_of_overflowing() {
    let creations = vec![
        creation("a", Some(u64::MAX), None, Some(i64::MAX)),
        creation("b", Some(1), None, Some(1)),
    ];
    let totals = CatalogTotals::from_creations(&creations);
    assert_eq!(totals.views, u64::MAX);
    assert_eq!(totals.revenue_cents, i64::MAX);
}

#[rstest]
fn showcase_combines_batch_and_header(batch: CreationsBatch, header: UserHeader) {
    let view = ShowcaseView::assemble(&batch, Some(&header), Currency::Usd);

    assert_eq!(view.bio, "Prints, tests, breaks, remixes.");
    assert_eq!(view.profile_url, "https://cults3d.com/en/users/nikkasouza");
    assert_eq!(
        view.avatar_url.as_deref(),
        Some("https://images.cults3d.com/avatar.png")
    );
    assert_eq!(view.models_indexed, 12);
    assert_eq!(view.total_views, "1.2K");
    assert_eq!(view.total_downloads, "42");
    assert_eq!(view.donations, "$7.50");
    assert_eq!(view.cards.len(), 3);
    assert_eq!(view.featured.len(), FEATURED_COUNT);
    assert_eq!(view.featured.first().map(|card| card.slug.as_str()), Some("handle"));
}

#[rstest]
fn showcase_cards_keep_absent_counts_distinct_from_zero(batch: CreationsBatch) {
    let view = ShowcaseView::assemble(&batch, None, Currency::Usd);
    let pad = view.cards.get(1).expect("second card");
    let guard = view.cards.get(2).expect("third card");

    assert_eq!(pad.views, PLACEHOLDER);
    assert_eq!(pad.sales, "$—");
    assert_eq!(guard.views, "0");
    assert_eq!(guard.downloads, PLACEHOLDER);
}

#[rstest]
fn showcase_falls_back_to_defaults_without_header(batch: CreationsBatch) {
    let view = ShowcaseView::assemble(&batch, None, Currency::Eur);
    assert_eq!(view.bio, DEFAULT_BIO);
    assert_eq!(view.profile_url, DEFAULT_PROFILE_URL);
    assert!(view.avatar_url.is_none());
    assert_eq!(view.donations, "€7.50");
}

#[rstest]
fn models_indexed_falls_back_to_header_then_result_count(
    batch: CreationsBatch,
    header: UserHeader,
) {
    let untotalled = CreationsBatch {
        total: None,
        ..batch
    };
    assert_eq!(
        ShowcaseView::assemble(&untotalled, Some(&header), Currency::Usd).models_indexed,
        30
    );
    assert_eq!(
        ShowcaseView::assemble(&untotalled, None, Currency::Usd).models_indexed,
        3
    );
}

#[rstest]
fn empty_showcase_has_zero_totals() {
    let view = ShowcaseView::assemble(&CreationsBatch::default(), None, Currency::Usd);
    assert_eq!(view.models_indexed, 0);
    assert_eq!(view.total_views, "0");
    assert_eq!(view.donations, "$0.00");
    assert!(view.featured.is_empty());
}

#[rstest]
fn card_uses_blueprint_preview_when_illustration_missing() {
    let mut item = creation("handle", None, None, None);
    item.blueprints = vec![Blueprint {
        file_url: None,
        image_url: Some("https://images.cults3d.com/blueprint.png".to_owned()),
    }];
    let card = CreationCard::from_creation(&item, Currency::Usd);
    assert_eq!(
        card.image_url.as_deref(),
        Some("https://images.cults3d.com/blueprint.png")
    );
}

fn detail() -> CreationDetail {
    CreationDetail {
        name: "P6 3D Print Friendly Front Handle".to_owned(),
        short_url: Some("https://cults3d.com/:1234".to_owned()),
        illustration_image_url: Some("https://images.cults3d.com/p6.png".to_owned()),
        license_name: Some("CC BY".to_owned()),
        category_name: Some("Gadget".to_owned()),
        published_at: Some("2026-01-01T08:30:00Z".to_owned()),
        views_count: Some(15_300),
        likes_count: Some(0),
        downloads_count: None,
        tags: (0..50).map(|index| format!("tag-{index}")).collect(),
        price_cents: None,
        creator: Some(Creator {
            nick: Some("nikkasouza".to_owned()),
            short_url: Some("https://cults3d.com/en/users/nikkasouza".to_owned()),
        }),
    }
}

#[rstest]
fn design_view_formats_detail() {
    let view = DesignView::from_detail(detail(), Currency::Usd);

    assert_eq!(view.cults_url, "https://cults3d.com/:1234");
    assert_eq!(view.category.as_deref(), Some("Gadget"));
    assert_eq!(view.license, "CC BY");
    assert_eq!(view.published.as_deref(), Some("Jan 1, 2026"));
    assert_eq!(view.views, "15K");
    assert_eq!(view.likes, "0");
    assert_eq!(view.downloads, PLACEHOLDER);
    assert_eq!(view.tags.len(), MAX_TAGS);
    assert_eq!(view.price, FREE_LABEL);
    assert_eq!(view.creator_nick.as_deref(), Some("nikkasouza"));
}

#[rstest]
fn design_view_defaults_missing_links_and_license() {
    let sparse = CreationDetail {
        short_url: None,
        license_name: None,
        creator: None,
        price_cents: Some(0),
        ..detail()
    };
    let view = DesignView::from_detail(sparse, Currency::Gbp);

    assert_eq!(view.cults_url, DEFAULT_PROFILE_URL);
    assert_eq!(view.license, PLACEHOLDER);
    assert!(view.creator_nick.is_none());
    assert_eq!(view.price, "£0.00");
}
