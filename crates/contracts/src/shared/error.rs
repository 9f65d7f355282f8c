use thiserror::Error;

/// Ошибки загрузки встроенного содержимого страницы
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("site content is not valid JSON: {0}")]
    Parse(String),

    #[error("site content has no groups")]
    NoGroups,

    #[error("group at position {position} has a blank id")]
    BlankId { position: usize },

    #[error("group id '{id}' is used more than once")]
    DuplicateId { id: String },
}

impl ContentError {
    /// Сообщение для страницы (язык страницы — португальский)
    pub fn user_message(&self) -> &'static str {
        match self {
            ContentError::Parse(_) => "Não foi possível carregar o conteúdo da página.",
            ContentError::NoGroups => "O conteúdo da página não tem nenhum grupo.",
            ContentError::BlankId { .. } | ContentError::DuplicateId { .. } => {
                "O conteúdo da página tem identificadores de grupo inválidos."
            }
        }
    }
}

impl From<serde_json::Error> for ContentError {
    fn from(err: serde_json::Error) -> Self {
        ContentError::Parse(err.to_string())
    }
}
