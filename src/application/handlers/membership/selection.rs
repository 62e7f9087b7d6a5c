//! Shared lookup of the member and package a handler works on.

use tracing::warn;

use crate::domain::foundation::{MemberId, PackageId};
use crate::domain::membership::{Member, MembershipError, Package};
use crate::ports::{CatalogFilter, MemberReader, PackageCatalog};

/// A member, the package they selected and the catalog it came from.
pub(super) struct Selection {
    pub member: Member,
    pub package: Package,
    pub catalog: Vec<Package>,
}

pub(super) async fn load_member(
    members: &dyn MemberReader,
    member_id: MemberId,
) -> Result<Member, MembershipError> {
    match members.fetch_member(&member_id).await? {
        Some(member) => Ok(member),
        None => {
            warn!(member_id = %member_id, "Member not found");
            Err(MembershipError::member_not_found(member_id))
        }
    }
}

/// Loads the member and the selected package, checking chapter visibility.
pub(super) async fn load_selection(
    members: &dyn MemberReader,
    catalog: &dyn PackageCatalog,
    member_id: MemberId,
    package_id: PackageId,
) -> Result<Selection, MembershipError> {
    let member = load_member(members, member_id).await?;
    let packages = catalog.fetch_catalog(&CatalogFilter::all()).await?;

    let package = packages
        .iter()
        .find(|p| p.id == package_id)
        .cloned()
        .ok_or_else(|| {
            warn!(package_id = %package_id, "Package not in catalog");
            MembershipError::package_not_found(package_id)
        })?;

    if !package.is_visible_to(member.chapter_id) {
        return Err(MembershipError::package_not_visible(
            package_id,
            member.chapter_id,
        ));
    }

    Ok(Selection {
        member,
        package,
        catalog: packages,
    })
}
