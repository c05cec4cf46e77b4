//! Release status values and their combination into query terms.

use std::{fmt, str};

use mbq_lucene::{Expression, SingleTerm, Term};

/// Editorial status of a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReleaseStatus {
    /// Sanctioned by the artist or their label.
    Official,
    /// Given away to promote an upcoming official release.
    Promotion,
    /// Not sanctioned by the artist or their label.
    Bootleg,
    /// Not a real release, such as an online-only pirated compilation.
    PseudoRelease,
}

impl ReleaseStatus {
    /// Every status, in listing order.
    pub const ALL: [Self; 4] = [
        Self::Official,
        Self::Promotion,
        Self::Bootleg,
        Self::PseudoRelease,
    ];

    /// The status as the search server expects it.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Official => "official",
            Self::Promotion => "promotion",
            Self::Bootleg => "bootleg",
            Self::PseudoRelease => "pseudo-release",
        }
    }

    /// Combines with `other` so releases with either status match.
    pub fn or(self, other: Self) -> StatusTerm {
        StatusTerm::from(self).or(other)
    }

    /// Combines with `other` so both statuses must match.
    pub fn and(self, other: Self) -> StatusTerm {
        StatusTerm::from(self).and(other)
    }
}

impl fmt::Display for ReleaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl str::FromStr for ReleaseStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "official" => Ok(Self::Official),
            "promotion" | "promo" => Ok(Self::Promotion),
            "bootleg" => Ok(Self::Bootleg),
            "pseudo-release" | "pseudorelease" | "pseudo_release" => Ok(Self::PseudoRelease),
            _ => Err(format!(
                "unknown status '{}', expected one of: official, promotion, bootleg, pseudo-release",
                s
            )),
        }
    }
}

impl From<ReleaseStatus> for Term {
    fn from(status: ReleaseStatus) -> Self {
        SingleTerm::new(status.as_str()).into()
    }
}

/// One or more release statuses combined with `OR` or `AND`, for use
/// with a status field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusTerm {
    /// The combined term.
    term: Term,
}

impl StatusTerm {
    /// Extends the term so releases with either status match.
    pub fn or(self, status: ReleaseStatus) -> Self {
        Self {
            term: self.term.or(Term::from(status)),
        }
    }

    /// Extends the term so both statuses must match.
    pub fn and(self, status: ReleaseStatus) -> Self {
        Self {
            term: self.term.and(Term::from(status)),
        }
    }
}

impl Expression for StatusTerm {
    fn append_to(&self, out: &mut String) {
        self.term.append_to(out);
    }
}

impl fmt::Display for StatusTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

impl From<ReleaseStatus> for StatusTerm {
    fn from(status: ReleaseStatus) -> Self {
        Self {
            term: Term::from(status),
        }
    }
}

impl From<StatusTerm> for Term {
    fn from(term: StatusTerm) -> Self {
        term.term
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use mbq_lucene::Field;

    #[test]
    fn status_renders_bare() {
        assert_eq!(Term::from(ReleaseStatus::Official).build(), "official");
        assert_eq!(ReleaseStatus::PseudoRelease.as_str(), "pseudo-release");
    }

    #[test]
    fn statuses_or_together() {
        let term = ReleaseStatus::Official.or(ReleaseStatus::Promotion);
        assert_eq!(term.build(), "(official OR promotion)");
    }

    #[test]
    fn or_accumulates_without_nesting() {
        let term = ReleaseStatus::Official
            .or(ReleaseStatus::Promotion)
            .or(ReleaseStatus::Bootleg);
        assert_eq!(term.build(), "(official OR promotion OR bootleg)");
    }

    #[test]
    fn status_term_in_field() {
        let field = Field::new("status", ReleaseStatus::Official.or(ReleaseStatus::Bootleg));
        assert_eq!(field.build(), "status:(official OR bootleg)");
    }

    #[test]
    fn parses_from_str() {
        assert_eq!(
            "official".parse::<ReleaseStatus>().unwrap(),
            ReleaseStatus::Official
        );
        assert_eq!(
            "promo".parse::<ReleaseStatus>().unwrap(),
            ReleaseStatus::Promotion
        );
        assert_eq!(
            "Pseudo-Release".parse::<ReleaseStatus>().unwrap(),
            ReleaseStatus::PseudoRelease
        );
        assert!("unknown".parse::<ReleaseStatus>().is_err());
    }
}
