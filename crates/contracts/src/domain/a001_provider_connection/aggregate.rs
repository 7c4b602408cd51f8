use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Стабильный строковый идентификатор провайдера (например, "crayon")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderId(pub String);

impl ProviderId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AggregateId for ProviderId {
    fn as_string(&self) -> String {
        self.0.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Empty provider id".to_string());
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Enums
// ============================================================================

/// Категории интеграций контента
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderCategory {
    CompetitiveIntelligence,
    KnowledgeBase,
    SalesEnablement,
}

impl ProviderCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CompetitiveIntelligence => "Конкурентная разведка",
            Self::KnowledgeBase => "База знаний",
            Self::SalesEnablement => "Sales enablement",
        }
    }
}

/// Известные провайдеры
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderKind {
    Crayon,
    Guru,
    Highspot,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 3] = [Self::Crayon, Self::Guru, Self::Highspot];

    pub fn id(&self) -> ProviderId {
        ProviderId::new(self.code())
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Crayon => "crayon",
            Self::Guru => "guru",
            Self::Highspot => "highspot",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Crayon => "Crayon",
            Self::Guru => "Guru",
            Self::Highspot => "Highspot",
        }
    }

    pub fn category(&self) -> ProviderCategory {
        match self {
            Self::Crayon => ProviderCategory::CompetitiveIntelligence,
            Self::Guru => ProviderCategory::KnowledgeBase,
            Self::Highspot => ProviderCategory::SalesEnablement,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    pub fn from_id(id: &ProviderId) -> Option<Self> {
        Self::from_code(id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_codes_round_trip() {
        for kind in ProviderKind::ALL {
            assert_eq!(ProviderKind::from_code(kind.code()), Some(kind));
            assert_eq!(kind.id().as_str(), kind.code());
        }
        assert_eq!(ProviderKind::from_code("unknown"), None);
    }

    #[test]
    fn test_kind_from_parsed_id() {
        let id = ProviderId::from_string(" highspot").unwrap();
        assert_eq!(ProviderKind::from_id(&id), Some(ProviderKind::Highspot));
        assert_eq!(id.as_string(), "highspot");
        assert_eq!(ProviderKind::from_id(&ProviderId::new("dropbox")), None);
    }

    #[test]
    fn test_provider_id_from_string_trims() {
        assert_eq!(ProviderId::from_string(" guru ").unwrap(), ProviderId::new("guru"));
        assert!(ProviderId::from_string("   ").is_err());
    }
}
