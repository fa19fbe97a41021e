use std::fmt;

/// Identity of an item, unique within its sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemId {
    Number(i64),
    Text(String),
}

impl From<i64> for ItemId {
    fn from(id: i64) -> Self {
        ItemId::Number(id)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        ItemId::Text(id.to_owned())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        ItemId::Text(id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(id) => write!(f, "{id}"),
            ItemId::Text(id) => f.write_str(id),
        }
    }
}

/// A calendar page, news item or photo. The engine never looks inside;
/// `media` is a locator the presentation layer resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub media: String,
    pub title: Option<String>,
    pub caption: Option<String>,
}

impl Item {
    pub fn new(id: impl Into<ItemId>, media: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            media: media.into(),
            title: None,
            caption: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Best text to show under the media: caption, then title, then the locator.
    pub fn label(&self) -> &str {
        self.caption
            .as_deref()
            .or(self.title.as_deref())
            .unwrap_or(&self.media)
    }
}
