use serde::{Deserialize, Serialize};

pub(crate) const DEFAULT_PAGE_SIZE: usize = 10;

/// Grid defaults shared by all list screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Rows per page when a screen first opens.
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
    /// Sizes offered by the page-size selector. Empty allows any positive size.
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<usize>,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_page_size_options() -> Vec<usize> {
    vec![5, 10, 25, 50]
}

impl GridConfig {
    /// Returns true if the selector may switch to `page_size`.
    #[must_use]
    pub fn allows_page_size(&self, page_size: usize) -> bool {
        page_size > 0
            && (self.page_size_options.is_empty() || self.page_size_options.contains(&page_size))
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            page_size_options: default_page_size_options(),
        }
    }
}
