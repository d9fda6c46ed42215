//! Alias groups.

use towerindex_foundation::EntityKind;

/// One canonical form with its known aliases and directory position.
///
/// Constructed once when the registry loads and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AliasGroup {
    /// Canonical form in alias normal form.
    pub canonical: String,
    /// Aliases in alias normal form, in corpus order. The first is the
    /// display name.
    pub aliases: Vec<String>,
    /// Slash-separated directory position (`towers/primary`).
    pub directory: String,
    /// Kind assigned from the directory root, if the root is a known one.
    pub kind: Option<EntityKind>,
}

impl AliasGroup {
    /// Returns the canonical followed by every alias.
    pub fn alias_set(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.canonical.as_str()).chain(self.aliases.iter().map(String::as_str))
    }

    /// Returns the display alias: the first alias, or the canonical when
    /// there are none.
    #[must_use]
    pub fn display_alias(&self) -> &str {
        self.aliases.first().map_or(self.canonical.as_str(), String::as_str)
    }

    /// Returns the root segment of the directory (`towers`).
    #[must_use]
    pub fn directory_root(&self) -> &str {
        self.directory.split('/').next().unwrap_or_default()
    }
}
