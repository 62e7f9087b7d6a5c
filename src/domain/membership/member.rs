//! Member records as seen by the pricing and eligibility computations.

use serde::{Deserialize, Serialize};

use super::package::{Package, PackageRecord, PackageType};
use crate::domain::foundation::{ChapterId, MemberId, ValidationError};

/// A membership the member already holds, with its package embedded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldMembership {
    pub active: bool,
    pub package: Package,
}

impl HeldMembership {
    pub fn is_active_of(&self, kind: PackageType) -> bool {
        self.active && self.package.package_type == kind
    }
}

/// A person or organisation record, read-only for one form session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    /// Leading two characters encode the GST state code.
    pub gst_number: Option<String>,
    pub state_name: Option<String>,
    pub location_text: Option<String>,
    pub organization_location_text: Option<String>,
    pub chapter_id: Option<ChapterId>,
    pub active_memberships: Vec<HeldMembership>,
}

impl Member {
    /// A member with only an id; the other attributes start empty.
    pub fn new(id: MemberId) -> Self {
        Self {
            id,
            gst_number: None,
            state_name: None,
            location_text: None,
            organization_location_text: None,
            chapter_id: None,
            active_memberships: Vec::new(),
        }
    }

    /// Which package types the member currently holds active memberships for.
    pub fn coverage(&self) -> ActiveCoverage {
        ActiveCoverage {
            venue: self
                .active_memberships
                .iter()
                .any(|m| m.is_active_of(PackageType::Venue)),
            head_office: self
                .active_memberships
                .iter()
                .any(|m| m.is_active_of(PackageType::HeadOffice)),
        }
    }
}

/// Active VENUE / HO holdings of a member.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveCoverage {
    pub venue: bool,
    pub head_office: bool,
}

impl ActiveCoverage {
    pub fn holds(&self, kind: PackageType) -> bool {
        match kind {
            PackageType::Venue => self.venue,
            PackageType::HeadOffice => self.head_office,
        }
    }

    pub fn holds_both(&self) -> bool {
        self.venue && self.head_office
    }
}

/// Membership entry embedded in a member API record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeldMembershipRecord {
    #[serde(default)]
    pub active: bool,
    pub package: PackageRecord,
}

/// Member as returned by the remote API, before normalisation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRecord {
    pub id: i64,
    #[serde(default)]
    pub gst_number: Option<String>,
    #[serde(default)]
    pub state_name: Option<String>,
    #[serde(default)]
    pub location_text: Option<String>,
    #[serde(default)]
    pub organization_location_text: Option<String>,
    #[serde(default)]
    pub chapter_id: Option<i64>,
    #[serde(default, alias = "memberships")]
    pub active_memberships: Vec<HeldMembershipRecord>,
}

impl MemberRecord {
    /// Converts the record into a domain [`Member`].
    ///
    /// Blank text fields are dropped so that later lookups treat them as absent.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if an id is invalid or an embedded package
    /// fails normalisation.
    pub fn normalize(&self) -> Result<Member, ValidationError> {
        let active_memberships = self
            .active_memberships
            .iter()
            .map(|held| {
                Ok(HeldMembership {
                    active: held.active,
                    package: held.package.normalize()?,
                })
            })
            .collect::<Result<Vec<_>, ValidationError>>()?;

        Ok(Member {
            id: MemberId::new(self.id)?,
            gst_number: non_blank(&self.gst_number),
            state_name: non_blank(&self.state_name),
            location_text: non_blank(&self.location_text),
            organization_location_text: non_blank(&self.organization_location_text),
            chapter_id: self.chapter_id.map(ChapterId::new).transpose()?,
            active_memberships,
        })
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
