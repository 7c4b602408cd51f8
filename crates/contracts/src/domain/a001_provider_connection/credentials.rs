use std::collections::BTreeMap;

/// Описание поля учётных данных провайдера
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialField {
    pub key: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub required: bool,
    /// Вводится как пароль
    pub secret: bool,
}

impl CredentialField {
    pub const fn required(key: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            key,
            label,
            placeholder,
            required: true,
            secret: false,
        }
    }

    pub const fn optional(key: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            required: false,
            ..Self::required(key, label, placeholder)
        }
    }

    pub const fn secret(mut self) -> Self {
        self.secret = true;
        self
    }
}

/// Введённые пользователем учётные данные
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CredentialForm {
    fields: Vec<CredentialField>,
    values: BTreeMap<String, String>,
}

impl CredentialForm {
    pub fn new(fields: Vec<CredentialField>) -> Self {
        Self {
            fields,
            values: BTreeMap::new(),
        }
    }

    pub fn fields(&self) -> &[CredentialField] {
        &self.fields
    }

    pub fn value(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    /// Установить значение поля; неизвестные ключи игнорируются
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> bool {
        if !self.fields.iter().any(|f| f.key == key) {
            return false;
        }
        self.values.insert(key.to_string(), value.into());
        true
    }

    /// Заполнить форму ранее сохранёнными значениями известных полей
    pub fn restore(&mut self, stored: &BTreeMap<String, String>) {
        for (key, value) in stored {
            self.set(key, value.as_str());
        }
    }

    /// Ключи обязательных полей, пустых после обрезки пробелов
    pub fn missing_required(&self) -> Vec<String> {
        self.fields
            .iter()
            .filter(|f| f.required && self.value(f.key).trim().is_empty())
            .map(|f| f.key.to_string())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_required().is_empty()
    }

    /// Заполненные значения для сохранения; `None`, если ничего не введено
    pub fn captured(&self) -> Option<BTreeMap<String, String>> {
        let captured: BTreeMap<String, String> = self
            .values
            .iter()
            .filter(|(_, v)| !v.trim().is_empty())
            .map(|(k, v)| (k.clone(), v.trim().to_string()))
            .collect();
        if captured.is_empty() {
            None
        } else {
            Some(captured)
        }
    }
}
