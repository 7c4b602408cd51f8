use crate::domain::a001_provider_connection::{
    ContentProvider, CredentialField, ExtField, FilterMode, ProviderKind,
};
use crate::shared::content_selection::{
    BadgeTone, CellContent, ColumnDescriptor, ColumnSet, ContentItem, FacetOption, FacetSet,
    FilterFacet, ItemBase, ItemExtension, ItemField,
};
use serde::{Deserialize, Serialize};

// ============================================================================
// Item extension
// ============================================================================

/// Боевая карточка по конкуренту (Crayon)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Battlecard {
    pub competitor: String,
    /// published | draft | archived
    pub status: String,
    /// Доля выигранных сделок против конкурента, %
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub win_rate: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattlecardField {
    Competitor,
    Status,
    WinRate,
}

impl ItemExtension for Battlecard {
    type Field = BattlecardField;

    fn value(&self, field: BattlecardField) -> Option<String> {
        match field {
            BattlecardField::Competitor => Some(self.competitor.clone()),
            BattlecardField::Status => Some(self.status.clone()),
            BattlecardField::WinRate => self.win_rate.map(|rate| rate.to_string()),
        }
    }
}

pub type BattlecardItem = ContentItem<Battlecard>;

pub fn battlecard(
    id: &str,
    name: &str,
    competitor: &str,
    status: &str,
    win_rate: Option<u8>,
) -> BattlecardItem {
    ContentItem::new(
        ItemBase::new(id, name),
        Battlecard {
            competitor: competitor.to_string(),
            status: status.to_string(),
            win_rate,
        },
    )
}

// ============================================================================
// Provider catalog
// ============================================================================

fn status_tone(status: &str) -> BadgeTone {
    match status {
        "published" => BadgeTone::Success,
        "draft" => BadgeTone::Warning,
        "archived" => BadgeTone::Neutral,
        _ => BadgeTone::Neutral,
    }
}

fn win_rate_cell(item: &BattlecardItem) -> CellContent {
    match item.extra.win_rate {
        Some(rate) => CellContent::Badge {
            label: format!("{}%", rate),
            tone: if rate >= 50 {
                BadgeTone::Success
            } else {
                BadgeTone::Danger
            },
        },
        None => CellContent::Text("—".to_string()),
    }
}

pub struct Crayon;

impl ContentProvider for Crayon {
    type Item = Battlecard;

    const KIND: ProviderKind = ProviderKind::Crayon;

    fn columns() -> ColumnSet<Battlecard> {
        ColumnSet::new(vec![
            ColumnDescriptor::select_checkbox("select", 1),
            ColumnDescriptor::text("name", "Карточка", 4, ItemField::Name),
            ColumnDescriptor::text(
                "competitor",
                "Конкурент",
                3,
                ItemField::Ext(BattlecardField::Competitor),
            ),
            ColumnDescriptor::badge(
                "status",
                "Статус",
                2,
                ItemField::Ext(BattlecardField::Status),
                status_tone,
            ),
            ColumnDescriptor::custom(
                "win_rate",
                "Win rate",
                2,
                ItemField::Ext(BattlecardField::WinRate),
                win_rate_cell,
            )
            .not_searchable(),
        ])
    }

    fn facets() -> FacetSet<ExtField<Self>> {
        FacetSet::new(vec![
            FilterFacet::new(
                "competitor",
                "Конкурент",
                ItemField::Ext(BattlecardField::Competitor),
                vec![
                    FacetOption::all("Все"),
                    FacetOption::new("Acme", "Acme"),
                    FacetOption::new("Globex", "Globex"),
                    FacetOption::new("Initech", "Initech"),
                ],
            ),
            FilterFacet::new(
                "status",
                "Статус",
                ItemField::Ext(BattlecardField::Status),
                vec![
                    FacetOption::all("Все"),
                    FacetOption::new("published", "Опубликована"),
                    FacetOption::new("draft", "Черновик"),
                    FacetOption::new("archived", "В архиве"),
                ],
            ),
        ])
    }

    fn credential_fields() -> Vec<CredentialField> {
        vec![
            CredentialField::required("api_key", "API Key", "crayon_live_...").secret(),
            CredentialField::optional("workspace", "Workspace", "acme-sales"),
        ]
    }

    fn filter_mode() -> FilterMode {
        FilterMode::Local
    }
}
