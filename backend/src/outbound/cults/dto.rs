//! DTOs for decoding Cults3D GraphQL `data` payloads.
//!
//! The adapter decodes into these transport DTOs first, then maps into domain
//! records in one pass. Every field is optional on the wire; the conversion
//! decides which absences are fatal.

use serde::Deserialize;

use crate::domain::{
    Blueprint, Creation, CreationDetail, CreationsBatch, Creator, UserHeader,
};

#[derive(Debug, Deserialize)]
pub(super) struct MyCreationsData {
    pub(super) myself: Option<MyselfDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct MyselfDto {
    pub(super) creations_batch: Option<CreationsBatchDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CreationsBatchDto {
    pub(super) total: Option<u64>,
    #[serde(default)]
    pub(super) results: Vec<CreationDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CreationDto {
    pub(super) name: Option<String>,
    pub(super) url: Option<String>,
    pub(super) illustration_image_url: Option<String>,
    pub(super) downloads_count: Option<u64>,
    pub(super) views_count: Option<u64>,
    pub(super) total_sales_amount: Option<MoneyDto>,
    pub(super) blueprints: Option<Vec<BlueprintDto>>,
}

#[derive(Debug, Deserialize)]
pub(super) struct MoneyDto {
    pub(super) cents: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct BlueprintDto {
    pub(super) file_url: Option<String>,
    pub(super) image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CreationBySlugData {
    pub(super) creation: Option<CreationDetailDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CreationDetailDto {
    pub(super) name: Option<String>,
    pub(super) short_url: Option<String>,
    pub(super) illustration_image_url: Option<String>,
    pub(super) license: Option<NamedDto>,
    pub(super) category: Option<NamedDto>,
    pub(super) published_at: Option<String>,
    pub(super) views_count: Option<u64>,
    pub(super) likes_count: Option<u64>,
    pub(super) downloads_count: Option<u64>,
    pub(super) tags: Option<Vec<String>>,
    pub(super) price: Option<MoneyDto>,
    pub(super) creator: Option<CreatorDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct NamedDto {
    pub(super) name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CreatorDto {
    pub(super) nick: Option<String>,
    pub(super) short_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct UserHeaderData {
    pub(super) user: Option<UserDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct UserDto {
    pub(super) short_url: Option<String>,
    pub(super) bio: Option<String>,
    pub(super) image_url: Option<String>,
    pub(super) creations_count: Option<u64>,
}

impl CreationsBatchDto {
    pub(super) fn into_domain(self) -> Result<CreationsBatch, String> {
        let results = self
            .results
            .into_iter()
            .enumerate()
            .map(|(index, creation)| creation.into_domain(index))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(CreationsBatch {
            total: self.total,
            results,
        })
    }
}

impl CreationDto {
    fn into_domain(self, index: usize) -> Result<Creation, String> {
        let name = self
            .name
            .ok_or_else(|| format!("creation {index} missing name"))?;
        let url = self
            .url
            .ok_or_else(|| format!("creation {index} missing url"))?;
        Ok(Creation {
            name,
            url,
            illustration_image_url: self.illustration_image_url,
            downloads_count: self.downloads_count,
            views_count: self.views_count,
            total_sales_cents: self.total_sales_amount.and_then(|amount| amount.cents),
            blueprints: self
                .blueprints
                .unwrap_or_default()
                .into_iter()
                .map(|blueprint| Blueprint {
                    file_url: blueprint.file_url,
                    image_url: blueprint.image_url,
                })
                .collect(),
        })
    }
}

impl CreationDetailDto {
    pub(super) fn into_domain(self) -> Result<CreationDetail, String> {
        let name = self.name.ok_or("creation missing name")?;
        Ok(CreationDetail {
            name,
            short_url: self.short_url,
            illustration_image_url: self.illustration_image_url,
            license_name: self.license.and_then(|license| license.name),
            category_name: self.category.and_then(|category| category.name),
            published_at: self.published_at,
            views_count: self.views_count,
            likes_count: self.likes_count,
            downloads_count: self.downloads_count,
            tags: self.tags.unwrap_or_default(),
            price_cents: self.price.and_then(|price| price.cents),
            creator: self.creator.map(|creator| Creator {
                nick: creator.nick,
                short_url: creator.short_url,
            }),
        })
    }
}

impl From<UserDto> for UserHeader {
    fn from(user: UserDto) -> Self {
        Self {
            short_url: user.short_url,
            bio: user.bio,
            image_url: user.image_url,
            creations_count: user.creations_count,
        }
    }
}
