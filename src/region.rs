//! Gene region classes and the dbSNP function-code priority table.

use std::fmt;

/// Priority class of a variant-to-gene relationship.
///
/// Variants are ordered from least to most significant, so `Ord` can be used
/// directly to pick the best annotation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum RegionClass {
    #[default]
    Null = 0,
    ThreePrimeUpstream = 1,
    FivePrimeUpstream = 2,
    ThreePrimeUtr = 3,
    FivePrimeUtr = 4,
    Intron = 5,
    Coding = 6,
}

impl RegionClass {
    /// Map a raw dbSNP gene function code to its region class.
    ///
    /// Codes outside the table have no class and return `None`.
    #[must_use]
    pub fn from_gene_code(code: u8) -> Option<Self> {
        match code {
            3 | 8 | 9 | 20 | 30 | 41 | 42 | 43 | 44 | 45 => Some(Self::Coding),
            6 | 73 | 75 => Some(Self::Intron),
            55 => Some(Self::FivePrimeUtr),
            53 => Some(Self::ThreePrimeUtr),
            15 => Some(Self::FivePrimeUpstream),
            13 => Some(Self::ThreePrimeUpstream),
            _ => None,
        }
    }
}

impl fmt::Display for RegionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Null => "none",
            Self::ThreePrimeUpstream => "3'-upstream",
            Self::FivePrimeUpstream => "5'-upstream",
            Self::ThreePrimeUtr => "3'-UTR",
            Self::FivePrimeUtr => "5'-UTR",
            Self::Intron => "intron",
            Self::Coding => "coding",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_order() {
        let ordered = [
            RegionClass::Null,
            RegionClass::ThreePrimeUpstream,
            RegionClass::FivePrimeUpstream,
            RegionClass::ThreePrimeUtr,
            RegionClass::FivePrimeUtr,
            RegionClass::Intron,
            RegionClass::Coding,
        ];
        for pair in ordered.windows(2) {
            assert!(pair[0] < pair[1], "{} should rank below {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn coding_codes() {
        for code in [20, 3, 8, 9, 41, 42, 43, 44, 45, 30] {
            assert_eq!(RegionClass::from_gene_code(code), Some(RegionClass::Coding));
        }
    }

    #[test]
    fn non_coding_codes() {
        for code in [6, 75, 73] {
            assert_eq!(RegionClass::from_gene_code(code), Some(RegionClass::Intron));
        }
        assert_eq!(RegionClass::from_gene_code(55), Some(RegionClass::FivePrimeUtr));
        assert_eq!(RegionClass::from_gene_code(53), Some(RegionClass::ThreePrimeUtr));
        assert_eq!(
            RegionClass::from_gene_code(15),
            Some(RegionClass::FivePrimeUpstream)
        );
        assert_eq!(
            RegionClass::from_gene_code(13),
            Some(RegionClass::ThreePrimeUpstream)
        );
    }

    #[test]
    fn unmapped_codes() {
        for code in [0, 1, 2, 4, 5, 7, 10, 14, 54, 74, 255] {
            assert_eq!(RegionClass::from_gene_code(code), None, "code {code}");
        }
    }

    #[test]
    fn default_is_null() {
        assert_eq!(RegionClass::default(), RegionClass::Null);
    }
}
