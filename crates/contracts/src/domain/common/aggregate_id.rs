use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Идентификатор, который хранится и передаётся как строка:
/// код провайдера (`ProviderId`) или UUID сохранения (`CommitId`)
pub trait AggregateId:
    Clone + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    fn as_string(&self) -> String;

    /// Разобрать строку; ошибка содержит текст для пользователя
    fn from_string(s: &str) -> Result<Self, String>;
}
