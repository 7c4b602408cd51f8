use contracts::domain::a004_enablement_asset::{enablement_asset, EnablementAssetItem};

/// Загрузить материалы из Highspot (демо-данные)
pub async fn fetch_items() -> Result<Vec<EnablementAssetItem>, String> {
    Ok(seed_items())
}

fn seed_items() -> Vec<EnablementAssetItem> {
    vec![
        enablement_asset("hs-1", "Enterprise pitch deck", "deck", "Enterprise", 12400),
        enablement_asset("hs-2", "Security one-pager", "one_pager", "Enterprise", 980),
        enablement_asset("hs-3", "Product tour", "video", "Onboarding", 5310),
        enablement_asset("hs-4", "Retail case study", "case_study", "Competitive", 740),
        enablement_asset("hs-5", "Onboarding checklist", "one_pager", "Onboarding", 2150),
    ]
}
