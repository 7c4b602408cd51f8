pub mod aggregate;

pub use aggregate::{knowledge_card, Guru, KnowledgeCard, KnowledgeCardField, KnowledgeCardItem};
