//! Column catalog for the contact table and spreadsheet exchange.
//!
//! The catalog is the single source of truth for the canonical field
//! order, the wire keys used by the search endpoint, and the localized
//! display labels that appear as table headers and spreadsheet columns.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKey {
    FullName,
    MainCompany,
    JobTitle,
    MobilePhone,
    OfficePhone1,
    Extension1,
    OfficePhone2,
    Extension2,
    OfficePhone3,
    Extension3,
    Email,
    OfficeManagerName1,
    OfficeManagerMobile1,
    OfficeManagerName2,
    OfficeManagerMobile2,
    OfficeManagerName3,
    OfficeManagerMobile3,
    OfficeEmail,
    SubjectCategory,
    Country,
    Address,
    PostalCode,
    Description,
}

/// Every column in canonical order. Row rendering, export and import
/// validation all iterate this slice, never an ad-hoc subset.
pub const ALL_COLUMNS: [ColumnKey; 23] = [
    ColumnKey::FullName,
    ColumnKey::MainCompany,
    ColumnKey::JobTitle,
    ColumnKey::MobilePhone,
    ColumnKey::OfficePhone1,
    ColumnKey::Extension1,
    ColumnKey::OfficePhone2,
    ColumnKey::Extension2,
    ColumnKey::OfficePhone3,
    ColumnKey::Extension3,
    ColumnKey::Email,
    ColumnKey::OfficeManagerName1,
    ColumnKey::OfficeManagerMobile1,
    ColumnKey::OfficeManagerName2,
    ColumnKey::OfficeManagerMobile2,
    ColumnKey::OfficeManagerName3,
    ColumnKey::OfficeManagerMobile3,
    ColumnKey::OfficeEmail,
    ColumnKey::SubjectCategory,
    ColumnKey::Country,
    ColumnKey::Address,
    ColumnKey::PostalCode,
    ColumnKey::Description,
];

pub fn canonical_columns() -> &'static [ColumnKey] {
    &ALL_COLUMNS
}

impl ColumnKey {
    /// Wire key, matching the search endpoint's `sort_by` values and
    /// the contact JSON field names.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKey::FullName => "full_name",
            ColumnKey::MainCompany => "main_company",
            ColumnKey::JobTitle => "job_title",
            ColumnKey::MobilePhone => "mobile_phone",
            ColumnKey::OfficePhone1 => "office_phone1",
            ColumnKey::Extension1 => "extension1",
            ColumnKey::OfficePhone2 => "office_phone2",
            ColumnKey::Extension2 => "extension2",
            ColumnKey::OfficePhone3 => "office_phone3",
            ColumnKey::Extension3 => "extension3",
            ColumnKey::Email => "email",
            ColumnKey::OfficeManagerName1 => "office_manager_name1",
            ColumnKey::OfficeManagerMobile1 => "office_manager_mobile1",
            ColumnKey::OfficeManagerName2 => "office_manager_name2",
            ColumnKey::OfficeManagerMobile2 => "office_manager_mobile2",
            ColumnKey::OfficeManagerName3 => "office_manager_name3",
            ColumnKey::OfficeManagerMobile3 => "office_manager_mobile3",
            ColumnKey::OfficeEmail => "office_email",
            ColumnKey::SubjectCategory => "subject_category",
            ColumnKey::Country => "country",
            ColumnKey::Address => "address",
            ColumnKey::PostalCode => "postal_code",
            ColumnKey::Description => "description",
        }
    }

    /// Localized display label (table header / spreadsheet header).
    pub fn label(&self) -> &'static str {
        match self {
            ColumnKey::FullName => "نام و نام خانوادگی",
            ColumnKey::MainCompany => "شرکت / سازمان اصلی",
            ColumnKey::JobTitle => "عنوان شغلی",
            ColumnKey::MobilePhone => "شماره همراه",
            ColumnKey::OfficePhone1 => "تلفن اداری 1",
            ColumnKey::Extension1 => "داخلی 1",
            ColumnKey::OfficePhone2 => "تلفن اداری 2",
            ColumnKey::Extension2 => "داخلی 2",
            ColumnKey::OfficePhone3 => "تلفن اداری 3",
            ColumnKey::Extension3 => "داخلی 3",
            ColumnKey::Email => "ایمیل",
            ColumnKey::OfficeManagerName1 => "نام مسئول دفتر 1",
            ColumnKey::OfficeManagerMobile1 => "شماره همراه مسئول دفتر 1",
            ColumnKey::OfficeManagerName2 => "نام مسئول دفتر 2",
            ColumnKey::OfficeManagerMobile2 => "شماره همراه مسئول دفتر 2",
            ColumnKey::OfficeManagerName3 => "نام مسئول دفتر 3",
            ColumnKey::OfficeManagerMobile3 => "شماره همراه مسئول دفتر 3",
            ColumnKey::OfficeEmail => "ایمیل دفتر",
            ColumnKey::SubjectCategory => "دسته بندی موضوع",
            ColumnKey::Country => "کشور",
            ColumnKey::Address => "آدرس",
            ColumnKey::PostalCode => "کدپستی",
            ColumnKey::Description => "توضیحات",
        }
    }

    /// Pinned columns stay visible no matter what the visibility store
    /// says and cannot be toggled off.
    pub fn is_pinned(&self) -> bool {
        matches!(self, ColumnKey::FullName | ColumnKey::MainCompany)
    }

    /// Phone-typed columns get distinct rendering (LTR digits inside
    /// an RTL layout in the original UI).
    pub fn is_phone(&self) -> bool {
        matches!(
            self,
            ColumnKey::MobilePhone
                | ColumnKey::OfficePhone1
                | ColumnKey::Extension1
                | ColumnKey::OfficePhone2
                | ColumnKey::Extension2
                | ColumnKey::OfficePhone3
                | ColumnKey::Extension3
                | ColumnKey::OfficeManagerMobile1
                | ColumnKey::OfficeManagerMobile2
                | ColumnKey::OfficeManagerMobile3
        )
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ALL_COLUMNS
            .iter()
            .find(|key| key.as_str() == s)
            .copied()
            .ok_or_else(|| format!("unknown column key: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_keys_round_trip_through_from_str() {
        for key in ALL_COLUMNS {
            assert_eq!(key.as_str().parse::<ColumnKey>().unwrap(), key);
        }
    }

    #[test]
    fn exactly_two_pinned_columns() {
        let pinned: Vec<_> = ALL_COLUMNS.iter().filter(|k| k.is_pinned()).collect();
        assert_eq!(pinned.len(), 2);
        assert!(ColumnKey::FullName.is_pinned());
        assert!(ColumnKey::MainCompany.is_pinned());
    }

    #[test]
    fn serde_uses_wire_keys() {
        let json = serde_json::to_string(&ColumnKey::OfficeManagerMobile2).unwrap();
        assert_eq!(json, "\"office_manager_mobile2\"");
    }

    #[test]
    fn labels_are_unique() {
        let mut labels: Vec<_> = ALL_COLUMNS.iter().map(|k| k.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), ALL_COLUMNS.len());
    }
}
