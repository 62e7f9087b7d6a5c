//! Membership packages and their ingestion from API records.
//!
//! The remote API describes package type loosely: an `isVenueFee` flag on
//! some records, a nested `packageType.name` on others, and only a package
//! name on legacy ones. [`PackageRecord::normalize`] resolves this once into
//! a [`PackageType`] so nothing downstream re-derives it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ChapterId, Money, PackageId, ValidationError};

/// The two independent membership categories a member may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PackageType {
    /// Physical-venue usage rights.
    #[serde(rename = "VENUE")]
    Venue,

    /// Head-office / organisational membership.
    #[serde(rename = "HO")]
    HeadOffice,
}

impl PackageType {
    /// The other category, offered as a complementary package.
    pub fn complement(&self) -> Self {
        match self {
            PackageType::Venue => PackageType::HeadOffice,
            PackageType::HeadOffice => PackageType::Venue,
        }
    }

    /// Wire code used by the remote API.
    pub fn code(&self) -> &'static str {
        match self {
            PackageType::Venue => "VENUE",
            PackageType::HeadOffice => "HO",
        }
    }

    /// Parses a wire code, case-insensitively. Unknown codes yield `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "VENUE" => Some(PackageType::Venue),
            "HO" => Some(PackageType::HeadOffice),
            _ => None,
        }
    }
}

impl std::fmt::Display for PackageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A purchasable membership tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub id: PackageId,
    pub name: String,
    pub basic_fees: Money,
    pub period_months: u32,
    pub package_type: PackageType,
    /// `None` means visible to every chapter.
    pub chapter_id: Option<ChapterId>,
}

impl Package {
    /// True if the package is global or scoped to exactly `chapter`.
    ///
    /// A member without a chapter is only offered global packages.
    pub fn is_offered_to(&self, chapter: Option<ChapterId>) -> bool {
        self.chapter_id.is_none() || self.chapter_id == chapter
    }

    /// True if a member scoped to `chapter` may see this package.
    ///
    /// A member without a chapter sees the catalog unfiltered.
    pub fn is_visible_to(&self, chapter: Option<ChapterId>) -> bool {
        match (self.chapter_id, chapter) {
            (None, _) | (_, None) => true,
            (Some(own), Some(member)) => own == member,
        }
    }
}

/// Nested `packageType` object on API records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageTypeRecord {
    pub name: Option<String>,
}

/// Package as returned by the remote API, before normalisation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageRecord {
    pub id: i64,
    #[serde(default, alias = "packageName")]
    pub name: String,
    pub basic_fees: Decimal,
    pub period_months: u32,
    #[serde(default)]
    pub is_venue_fee: Option<bool>,
    #[serde(default)]
    pub package_type: Option<PackageTypeRecord>,
    #[serde(default)]
    pub chapter_id: Option<i64>,
}

impl PackageRecord {
    /// Resolves the package type from whichever signal the record carries.
    ///
    /// Priority: `isVenueFee`, then `packageType.name`, then the package
    /// name containing "VENUE". Anything else is head-office.
    pub fn resolve_type(&self) -> PackageType {
        if let Some(is_venue) = self.is_venue_fee {
            return if is_venue {
                PackageType::Venue
            } else {
                PackageType::HeadOffice
            };
        }

        if let Some(kind) = self
            .package_type
            .as_ref()
            .and_then(|t| t.name.as_deref())
            .and_then(PackageType::from_code)
        {
            return kind;
        }

        if self.name.to_ascii_uppercase().contains("VENUE") {
            PackageType::Venue
        } else {
            PackageType::HeadOffice
        }
    }

    /// Validates the record and converts it into a domain [`Package`].
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the id is not positive, the fee is not
    /// positive or exceeds [`MAX_FEE`](crate::domain::foundation::MAX_FEE),
    /// or the period is zero.
    pub fn normalize(&self) -> Result<Package, ValidationError> {
        let id = PackageId::new(self.id)?;
        let basic_fees = Money::positive("basic_fees", self.basic_fees)?;
        if self.period_months == 0 {
            return Err(ValidationError::out_of_range(
                "period_months",
                1,
                i64::from(u32::MAX),
                0,
            ));
        }
        let chapter_id = self.chapter_id.map(ChapterId::new).transpose()?;

        Ok(Package {
            id,
            name: self.name.trim().to_string(),
            basic_fees,
            period_months: self.period_months,
            package_type: self.resolve_type(),
            chapter_id,
        })
    }
}
