// SPDX-License-Identifier: MPL-2.0
//! Page slicing of the manifest and the page link bar.
//!
//! Pages are 1-based. Following a link is a full navigation: the shell
//! rebuilds the gallery for the new page instead of patching the current one.

/// Default number of images per page.
pub const DEFAULT_PER_PAGE: usize = 60;

/// Splits a manifest of `total_items` into pages of `per_page`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    total_items: usize,
    per_page: usize,
    page: usize,
}

impl Pagination {
    /// Creates a pagination positioned on `page`, clamped to the valid range.
    #[must_use]
    pub fn new(total_items: usize, per_page: usize, page: usize) -> Self {
        let per_page = per_page.max(1);
        let last = total_items.div_ceil(per_page).max(1);
        Self {
            total_items,
            per_page,
            page: page.clamp(1, last),
        }
    }

    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Number of pages; zero for an empty manifest.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.per_page)
    }

    /// Items of the current page.
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = ((self.page - 1) * self.per_page).min(items.len());
        let end = (start + self.per_page).min(items.len());
        &items[start..end]
    }

    /// Link bar with the current page marked.
    #[must_use]
    pub fn links(&self) -> PaginationLinks {
        let links = (1..=self.total_pages())
            .map(|page| PageLink {
                page,
                href: page_href(page),
                current: page == self.page,
            })
            .collect();
        PaginationLinks { links }
    }
}

/// Relative target of a page link.
#[must_use]
pub fn page_href(page: usize) -> String {
    format!("?page={page}")
}

/// One entry of the page link bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub page: usize,
    pub href: String,
    pub current: bool,
}

/// Where a followed link leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub page: usize,
    pub href: String,
}

/// Page links with at most one marked current.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationLinks {
    links: Vec<PageLink>,
}

impl PaginationLinks {
    #[must_use]
    pub fn links(&self) -> &[PageLink] {
        &self.links
    }

    #[must_use]
    pub fn current(&self) -> Option<&PageLink> {
        self.links.iter().find(|link| link.current)
    }

    /// Marks the link at `index` as the only current one and returns its target.
    pub fn click(&mut self, index: usize) -> Option<Navigation> {
        if index >= self.links.len() {
            return None;
        }
        for (i, link) in self.links.iter_mut().enumerate() {
            link.current = i == index;
        }
        let link = &self.links[index];
        Some(Navigation {
            page: link.page,
            href: link.href.clone(),
        })
    }
}
