use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::shared::error::ContentError;

/// Один раздел страницы (одна вкладка).
///
/// `id` is both the URL fragment (`#<id>`) and the key for the DOM anchors
/// of the tab button and its panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead: Option<String>,
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

impl Group {
    /// Фрагмент URL, указывающий на этот раздел.
    pub fn fragment(&self) -> String {
        format!("#{}", self.id)
    }

    /// DOM id кнопки вкладки.
    pub fn tab_dom_id(&self) -> String {
        format!("tab-{}", self.id)
    }

    /// DOM id панели с содержимым.
    pub fn panel_dom_id(&self) -> String {
        format!("panel-{}", self.id)
    }
}

/// Блок содержимого раздела. Контроллер вкладок его не интерпретирует.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Heading { text: String },
    Paragraph { text: String },
    List { items: Vec<String> },
}

/// Non-empty, ordered sequence of groups with unique ids.
///
/// Order is display order and also the (circular) keyboard order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Groups(Vec<Group>);

impl Groups {
    pub fn new(groups: Vec<Group>) -> Result<Self, ContentError> {
        if groups.is_empty() {
            return Err(ContentError::NoGroups);
        }

        let mut seen = HashSet::with_capacity(groups.len());
        for (position, group) in groups.iter().enumerate() {
            if group.id.trim().is_empty() {
                return Err(ContentError::BlankId { position });
            }
            if !seen.insert(group.id.as_str()) {
                return Err(ContentError::DuplicateId {
                    id: group.id.clone(),
                });
            }
        }

        Ok(Self(groups))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true: `Groups::new` rejects an empty list.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Index of the last group.
    pub fn last_index(&self) -> usize {
        self.0.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&Group> {
        self.0.get(index)
    }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.0.iter().position(|group| group.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Group> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Group] {
        &self.0
    }
}
