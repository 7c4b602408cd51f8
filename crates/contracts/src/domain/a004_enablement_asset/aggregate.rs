use crate::domain::a001_provider_connection::{
    ContentProvider, CredentialField, ExtField, FilterMode, ProviderKind,
};
use crate::shared::content_selection::{
    BadgeTone, CellContent, ColumnDescriptor, ColumnSet, ContentItem, FacetOption, FacetSet,
    FilterFacet, ItemBase, ItemExtension, ItemField,
};
use serde::{Deserialize, Serialize};

/// Материал для продаж (Highspot)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnablementAsset {
    /// deck | one_pager | video | case_study
    pub asset_type: String,
    /// Раздел (spot), в котором лежит материал
    pub spot: String,
    #[serde(default)]
    pub views: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnablementAssetField {
    AssetType,
    Spot,
    Views,
}

impl ItemExtension for EnablementAsset {
    type Field = EnablementAssetField;

    fn value(&self, field: EnablementAssetField) -> Option<String> {
        match field {
            EnablementAssetField::AssetType => Some(self.asset_type.clone()),
            EnablementAssetField::Spot => Some(self.spot.clone()),
            EnablementAssetField::Views => Some(self.views.to_string()),
        }
    }
}

pub type EnablementAssetItem = ContentItem<EnablementAsset>;

pub fn enablement_asset(id: &str, name: &str, asset_type: &str, spot: &str, views: u32) -> EnablementAssetItem {
    ContentItem::new(
        ItemBase::new(id, name),
        EnablementAsset {
            asset_type: asset_type.to_string(),
            spot: spot.to_string(),
            views,
        },
    )
}

fn asset_type_tone(value: &str) -> BadgeTone {
    match value {
        "deck" => BadgeTone::Brand,
        "video" => BadgeTone::Warning,
        "case_study" => BadgeTone::Success,
        _ => BadgeTone::Neutral,
    }
}

/// Просмотры с разделителем тысяч: 12 400 → "12 400"
fn views_cell(item: &EnablementAssetItem) -> CellContent {
    let digits = item.extra.views.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    CellContent::Text(grouped)
}

pub struct Highspot;

impl ContentProvider for Highspot {
    type Item = EnablementAsset;

    const KIND: ProviderKind = ProviderKind::Highspot;

    fn columns() -> ColumnSet<EnablementAsset> {
        ColumnSet::new(vec![
            ColumnDescriptor::select_checkbox("select", 1),
            ColumnDescriptor::text("name", "Материал", 5, ItemField::Name),
            ColumnDescriptor::badge(
                "asset_type",
                "Тип",
                2,
                ItemField::Ext(EnablementAssetField::AssetType),
                asset_type_tone,
            ),
            ColumnDescriptor::text("spot", "Spot", 2, ItemField::Ext(EnablementAssetField::Spot)),
            ColumnDescriptor::custom(
                "views",
                "Просмотры",
                2,
                ItemField::Ext(EnablementAssetField::Views),
                views_cell,
            )
            .not_searchable(),
        ])
    }

    fn facets() -> FacetSet<ExtField<Self>> {
        FacetSet::new(vec![
            FilterFacet::new(
                "asset_type",
                "Тип",
                ItemField::Ext(EnablementAssetField::AssetType),
                vec![
                    FacetOption::all("Все"),
                    FacetOption::new("deck", "Презентация"),
                    FacetOption::new("one_pager", "One-pager"),
                    FacetOption::new("video", "Видео"),
                    FacetOption::new("case_study", "Кейс"),
                ],
            ),
            FilterFacet::new(
                "spot",
                "Spot",
                ItemField::Ext(EnablementAssetField::Spot),
                vec![
                    FacetOption::all("Все"),
                    FacetOption::new("Onboarding", "Onboarding"),
                    FacetOption::new("Enterprise", "Enterprise"),
                    FacetOption::new("Competitive", "Competitive"),
                ],
            ),
        ])
    }

    fn credential_fields() -> Vec<CredentialField> {
        vec![
            CredentialField::required("client_id", "Client ID", ""),
            CredentialField::required("client_secret", "Client Secret", "").secret(),
            CredentialField::optional("domain", "Домен", "company.highspot.com"),
        ]
    }

    fn filter_mode() -> FilterMode {
        FilterMode::Local
    }
}
