use contracts::domain::a002_competitor_battlecard::{battlecard, BattlecardItem};

/// Загрузить карточки из Crayon (демо-данные)
pub async fn fetch_items() -> Result<Vec<BattlecardItem>, String> {
    Ok(seed_items())
}

fn seed_items() -> Vec<BattlecardItem> {
    vec![
        battlecard("bc-1", "Acme: ценовые возражения", "Acme", "published", Some(62)),
        battlecard("bc-2", "Acme: сравнение функций", "Acme", "draft", Some(48)),
        battlecard("bc-3", "Globex: интеграции", "Globex", "published", Some(55)),
        battlecard("bc-4", "Globex: enterprise-сделки", "Globex", "archived", None),
        battlecard("bc-5", "Initech: онбординг", "Initech", "published", Some(71)),
        battlecard("bc-6", "Initech: безопасность", "Initech", "draft", Some(39)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_competitor_battlecard::Crayon;
    use contracts::domain::a001_provider_connection::ContentProvider;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_unique_and_facets_cover_values() {
        let items = seed_items();
        let ids: HashSet<&str> = items.iter().map(|i| i.id()).collect();
        assert_eq!(ids.len(), items.len());

        let facets = Crayon::facets();
        for item in &items {
            assert!(facets.get("competitor").unwrap().has_option(&item.extra.competitor));
            assert!(facets.get("status").unwrap().has_option(&item.extra.status));
        }
    }
}
