use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Raw `?page=&size=` query parameters.
#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Zero-based page index.
    pub page: Option<u32>,
    /// Page size. Zero or missing selects the default; values above the maximum are clamped.
    pub size: Option<u32>,
}

impl PageQuery {
    pub fn resolve(self, default_size: u32, max_size: u32) -> PageRequest {
        let size = match self.size {
            None | Some(0) => default_size,
            Some(s) => s,
        };
        PageRequest {
            page: self.page.unwrap_or(0),
            size: size.clamp(1, max_size.max(1)),
        }
    }
}

/// Normalized page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    pub fn offset(&self) -> usize {
        self.page as usize * self.size as usize
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_items: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total_items: u64) -> Self {
        let size = u64::from(request.size.max(1));
        Self {
            items,
            page: request.page,
            size: request.size,
            total_items,
            total_pages: total_items.div_ceil(size),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}
