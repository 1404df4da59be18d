//! Loader for the newline-delimited list of rs identifiers to keep.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Error;
use crate::identifier::RsId;

/// The set of rs identifiers whose annotations are retained.
///
/// Built once and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct MembershipSet {
    ids: HashSet<RsId>,
}

impl MembershipSet {
    /// Read one identifier per line, each optionally prefixed with `rs`.
    ///
    /// Any line that is not an identifier, including a blank line, is an error.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut ids = HashSet::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line_num = line_num + 1;
            let line = line?;
            let id: RsId = line
                .trim()
                .parse()
                .map_err(|e| Error::Parse(format!("{e} (rs list line {line_num})")))?;
            ids.insert(id);
        }

        Ok(Self { ids })
    }

    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    #[must_use]
    pub fn contains(&self, id: RsId) -> bool {
        self.ids.contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<RsId> for MembershipSet {
    fn from_iter<I: IntoIterator<Item = RsId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn prefix_and_bare_are_equivalent() {
        let set = MembershipSet::from_reader(Cursor::new("rs123\n123\n")).unwrap();
        assert_eq!(set.len(), 1);
        assert!(set.contains(RsId::new(123)));
    }

    #[test]
    fn handles_crlf_and_missing_final_newline() {
        let set = MembershipSet::from_reader(Cursor::new("rs7\r\n42")).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains(RsId::new(7)));
        assert!(set.contains(RsId::new(42)));
    }

    #[test]
    fn blank_line_is_fatal() {
        let err = MembershipSet::from_reader(Cursor::new("rs1\n\nrs2\n")).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn malformed_entry_is_fatal() {
        let err = MembershipSet::from_reader(Cursor::new("rs1\nrsX9\n")).unwrap_err();
        assert!(err.to_string().contains("'X9'"));
    }

    #[test]
    fn empty_input_gives_empty_set() {
        let set = MembershipSet::from_reader(Cursor::new("")).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn from_file() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "rs100").unwrap();
        writeln!(f, "200").unwrap();
        let set = MembershipSet::from_file(f.path()).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains(RsId::new(100)));
        assert!(set.contains(RsId::new(200)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = MembershipSet::from_file(Path::new("/nonexistent/RSLIST.TXT")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
