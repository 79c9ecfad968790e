// SPDX-License-Identifier: MPL-2.0
//! Endpoint paths derived from item identifiers.

use crate::domain::gallery::ItemId;

/// Endpoint prefix of the grid-sized rendition.
pub const IMAGE_PREFIX: &str = "/image/";

/// Endpoint prefix of the full-resolution file.
pub const ORIGINAL_PREFIX: &str = "/original/";

/// Which rendition a resource path points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Image,
    Original,
}

impl ResourceKind {
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            ResourceKind::Image => IMAGE_PREFIX,
            ResourceKind::Original => ORIGINAL_PREFIX,
        }
    }

    /// Path of this rendition for `id`.
    #[must_use]
    pub fn path(self, id: &ItemId) -> String {
        format!("{}{}", self.prefix(), id)
    }

    /// Splits a resource path into its kind and identifier.
    #[must_use]
    pub fn split(path: &str) -> Option<(ResourceKind, &str)> {
        [ResourceKind::Image, ResourceKind::Original]
            .into_iter()
            .find_map(|kind| {
                path.strip_prefix(kind.prefix())
                    .filter(|name| !name.is_empty())
                    .map(|name| (kind, name))
            })
    }
}

/// Path the grid box loads once it nears the viewport.
#[must_use]
pub fn placeholder_path(id: &ItemId) -> String {
    ResourceKind::Image.path(id)
}

/// Path of the full-resolution file opened by the preview.
#[must_use]
pub fn original_path(id: &ItemId) -> String {
    ResourceKind::Original.path(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_substitute_identifier() {
        let id = ItemId::new("sunset.png");
        assert_eq!(placeholder_path(&id), "/image/sunset.png");
        assert_eq!(original_path(&id), "/original/sunset.png");
    }

    #[test]
    fn split_recovers_kind_and_name() {
        assert_eq!(
            ResourceKind::split("/image/a.jpg"),
            Some((ResourceKind::Image, "a.jpg"))
        );
        assert_eq!(
            ResourceKind::split("/original/b.gif"),
            Some((ResourceKind::Original, "b.gif"))
        );
        assert_eq!(ResourceKind::split("/image/"), None);
        assert_eq!(ResourceKind::split("/thumb/a.jpg"), None);
    }
}
