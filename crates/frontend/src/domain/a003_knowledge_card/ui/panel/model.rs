use contracts::domain::a003_knowledge_card::{knowledge_card, KnowledgeCardItem};

/// Загрузить карточки из Guru (демо-данные)
pub async fn fetch_items() -> Result<Vec<KnowledgeCardItem>, String> {
    Ok(seed_items())
}

fn seed_items() -> Vec<KnowledgeCardItem> {
    vec![
        knowledge_card(
            "g-1",
            "Скидки и согласования",
            "Кто согласует скидку выше 15%",
            "Sales",
            "verified",
            "Анна Петрова",
            &["pricing", "discount"],
        ),
        knowledge_card(
            "g-2",
            "Ответы на вопросы по SSO",
            "SAML, SCIM и ограничения тарифов",
            "Product",
            "needs_review",
            "Борис Иванов",
            &["security", "sso"],
        ),
        knowledge_card(
            "g-3",
            "Политика возвратов",
            "Порядок эскалации возвратов",
            "Support",
            "unverified",
            "Анна Петрова",
            &["refund"],
        ),
        knowledge_card(
            "g-4",
            "Релиз 4.2: что нового",
            "Ключевые изменения квартала",
            "Product",
            "verified",
            "Олег Смирнов",
            &["release"],
        ),
        knowledge_card(
            "g-5",
            "Скрипт первого звонка",
            "Структура discovery-звонка",
            "Sales",
            "needs_review",
            "Мария Кузнецова",
            &[],
        ),
    ]
}
