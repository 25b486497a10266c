use crate::domain::pagination::Page;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct PageDto<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_items: u64,
    pub total_pages: u64,
    pub has_next: bool,
}

impl<T> PageDto<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageDto<U> {
        PageDto {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_items: self.total_items,
            total_pages: self.total_pages,
            has_next: self.has_next,
        }
    }
}

impl<T> From<Page<T>> for PageDto<T> {
    fn from(page: Page<T>) -> Self {
        let total_pages = page.total_pages();
        let has_next = page.has_next();
        Self {
            page: page.request.page(),
            size: page.request.size(),
            total_items: page.total_items,
            total_pages,
            has_next,
            items: page.items,
        }
    }
}
