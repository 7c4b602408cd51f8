pub mod a001_provider_connection;
pub mod a002_competitor_battlecard;
pub mod a003_knowledge_card;
pub mod a004_enablement_asset;
pub mod common;
