use crate::domain::a001_provider_connection::{
    ContentProvider, CredentialField, ExtField, FilterMode, ProviderKind,
};
use crate::shared::content_selection::{
    BadgeTone, ColumnDescriptor, ColumnSet, ContentItem, FacetOption, FacetSet, FilterFacet,
    ItemBase, ItemExtension, ItemField,
};
use serde::{Deserialize, Serialize};

// ============================================================================
// Item extension
// ============================================================================

/// Карточка базы знаний (Guru)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeCard {
    pub collection: String,
    /// verified | needs_review | unverified
    pub verification: String,
    pub author: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnowledgeCardField {
    Collection,
    Verification,
    Author,
    Tags,
}

impl ItemExtension for KnowledgeCard {
    type Field = KnowledgeCardField;

    fn value(&self, field: KnowledgeCardField) -> Option<String> {
        match field {
            KnowledgeCardField::Collection => Some(self.collection.clone()),
            KnowledgeCardField::Verification => Some(self.verification.clone()),
            KnowledgeCardField::Author => Some(self.author.clone()),
            KnowledgeCardField::Tags if self.tags.is_empty() => None,
            KnowledgeCardField::Tags => Some(self.tags.join(", ")),
        }
    }
}

pub type KnowledgeCardItem = ContentItem<KnowledgeCard>;

pub fn knowledge_card(
    id: &str,
    name: &str,
    description: &str,
    collection: &str,
    verification: &str,
    author: &str,
    tags: &[&str],
) -> KnowledgeCardItem {
    ContentItem::new(
        ItemBase::new(id, name).with_description(description),
        KnowledgeCard {
            collection: collection.to_string(),
            verification: verification.to_string(),
            author: author.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        },
    )
}

// ============================================================================
// Provider catalog
// ============================================================================

fn verification_tone(value: &str) -> BadgeTone {
    match value {
        "verified" => BadgeTone::Success,
        "needs_review" => BadgeTone::Warning,
        "unverified" => BadgeTone::Danger,
        _ => BadgeTone::Neutral,
    }
}

pub struct Guru;

impl ContentProvider for Guru {
    type Item = KnowledgeCard;

    const KIND: ProviderKind = ProviderKind::Guru;

    fn columns() -> ColumnSet<KnowledgeCard> {
        ColumnSet::new(vec![
            ColumnDescriptor::select_checkbox("select", 1),
            ColumnDescriptor::text("name", "Карточка", 5, ItemField::Name),
            ColumnDescriptor::text(
                "collection",
                "Коллекция",
                2,
                ItemField::Ext(KnowledgeCardField::Collection),
            ),
            ColumnDescriptor::badge(
                "verification",
                "Проверка",
                2,
                ItemField::Ext(KnowledgeCardField::Verification),
                verification_tone,
            ),
            ColumnDescriptor::text("author", "Автор", 2, ItemField::Ext(KnowledgeCardField::Author)),
        ])
    }

    fn facets() -> FacetSet<ExtField<Self>> {
        FacetSet::new(vec![
            FilterFacet::new(
                "collection",
                "Коллекция",
                ItemField::Ext(KnowledgeCardField::Collection),
                vec![
                    FacetOption::all("Все"),
                    FacetOption::new("Sales", "Sales"),
                    FacetOption::new("Product", "Product"),
                    FacetOption::new("Support", "Support"),
                ],
            ),
            FilterFacet::new(
                "verification",
                "Проверка",
                ItemField::Ext(KnowledgeCardField::Verification),
                vec![
                    FacetOption::all("Все"),
                    FacetOption::new("verified", "Проверена"),
                    FacetOption::new("needs_review", "Нужна проверка"),
                    FacetOption::new("unverified", "Не проверена"),
                ],
            ),
        ])
    }

    fn credential_fields() -> Vec<CredentialField> {
        vec![
            CredentialField::required("username", "Email", "name@company.com"),
            CredentialField::required("api_token", "API Token", "").secret(),
        ]
    }

    fn filter_mode() -> FilterMode {
        FilterMode::Delegated
    }

    /// Поиск по названию, описанию, коллекции, тегам и автору
    fn panel_matches(item: &KnowledgeCardItem, query: &str) -> bool {
        let query = query.to_lowercase();
        let contains = |value: &str| value.to_lowercase().contains(&query);

        contains(&item.base.name)
            || item.base.description.as_deref().is_some_and(contains)
            || contains(&item.extra.collection)
            || item.extra.tags.iter().any(|tag| contains(tag))
            || contains(&item.extra.author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_provider_connection::validate_catalog;
    use crate::shared::content_selection::{evaluate, DelegatedFilter};

    fn cards() -> Vec<KnowledgeCardItem> {
        vec![
            knowledge_card(
                "g-1",
                "Pricing FAQ",
                "Answers for discount requests",
                "Sales",
                "verified",
                "Anna",
                &["pricing", "faq"],
            ),
            knowledge_card(
                "g-2",
                "Release notes 4.2",
                "What shipped this quarter",
                "Product",
                "needs_review",
                "Boris",
                &["release"],
            ),
            knowledge_card(
                "g-3",
                "Refund policy",
                "Escalation path for refunds",
                "Support",
                "unverified",
                "Anna",
                &[],
            ),
        ]
    }

    fn ids(items: &[&KnowledgeCardItem]) -> Vec<String> {
        items.iter().map(|i| i.id().to_string()).collect()
    }

    #[test]
    fn test_catalog_is_valid() {
        assert_eq!(Guru::columns().total_width(), 12);
        assert_eq!(validate_catalog::<Guru>(), Ok(()));
        assert_eq!(Guru::filter_mode(), FilterMode::Delegated);
    }

    #[test]
    fn test_panel_predicate_searches_tags_and_description() {
        let items = cards();
        assert_eq!(ids(&Guru::prefilter(&items, "FAQ")), vec!["g-1"]);
        assert_eq!(ids(&Guru::prefilter(&items, "escalation")), vec!["g-3"]);
        assert_eq!(ids(&Guru::prefilter(&items, "anna")), vec!["g-1", "g-3"]);
        assert_eq!(ids(&Guru::prefilter(&items, "  ")), vec!["g-1", "g-2", "g-3"]);
    }

    #[test]
    fn test_table_applies_facets_on_prefiltered_collection() {
        let items = cards();
        let prefiltered: Vec<KnowledgeCardItem> =
            Guru::prefilter(&items, "anna").into_iter().cloned().collect();

        let mut facets = Guru::facets();
        facets.set("verification", "verified");
        let strategy = DelegatedFilter::new(|_| {});

        let visible = evaluate(&prefiltered, &Guru::columns(), "anna", &facets, &strategy);
        assert_eq!(ids(&visible), vec!["g-1"]);
    }

    #[test]
    fn test_empty_tags_have_no_value() {
        let items = cards();
        assert_eq!(items[2].field_value(ItemField::Ext(KnowledgeCardField::Tags)), None);
        assert_eq!(
            items[0].field_value(ItemField::Ext(KnowledgeCardField::Tags)).as_deref(),
            Some("pricing, faq")
        );
    }
}
