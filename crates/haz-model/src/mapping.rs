//! The validated, ordered association driving archive assembly.

/// One archive member: the source file on disk and its in-archive name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingEntry {
    /// Filesystem path of the access copy to read.
    pub access_copy_location: String,
    /// Name the file is stored under inside the archive.
    pub output_filename: String,
}

/// Ordered mapping from access copy location to output filename.
///
/// Entries follow export row order; that order fixes archive member order
/// and carries no other meaning. Key uniqueness is enforced during record
/// processing, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetMapping {
    entries: Vec<MappingEntry>,
}

impl AssetMapping {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: MappingEntry) {
        self.entries.push(entry);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MappingEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a AssetMapping {
    type Item = &'a MappingEntry;
    type IntoIter = std::slice::Iter<'a, MappingEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
