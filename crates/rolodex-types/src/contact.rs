use crate::columns::ColumnKey;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(pub i64);

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A directory contact as returned by the backend.
///
/// Every field except `full_name` is optional on the wire; the table
/// and export layers read them through [`Contact::field`], which maps
/// absent values to the empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub full_name: String,
    #[serde(default)]
    pub main_company: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub mobile_phone: Option<String>,
    #[serde(default)]
    pub office_phone1: Option<String>,
    #[serde(default)]
    pub extension1: Option<String>,
    #[serde(default)]
    pub office_phone2: Option<String>,
    #[serde(default)]
    pub extension2: Option<String>,
    #[serde(default)]
    pub office_phone3: Option<String>,
    #[serde(default)]
    pub extension3: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub office_manager_name1: Option<String>,
    #[serde(default)]
    pub office_manager_mobile1: Option<String>,
    #[serde(default)]
    pub office_manager_name2: Option<String>,
    #[serde(default)]
    pub office_manager_mobile2: Option<String>,
    #[serde(default)]
    pub office_manager_name3: Option<String>,
    #[serde(default)]
    pub office_manager_mobile3: Option<String>,
    #[serde(default)]
    pub office_email: Option<String>,
    #[serde(default)]
    pub subject_category: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Contact {
    /// Value of the given column, with absent fields read as "".
    pub fn field(&self, key: ColumnKey) -> &str {
        fn opt(value: &Option<String>) -> &str {
            value.as_deref().unwrap_or("")
        }

        match key {
            ColumnKey::FullName => &self.full_name,
            ColumnKey::MainCompany => opt(&self.main_company),
            ColumnKey::JobTitle => opt(&self.job_title),
            ColumnKey::MobilePhone => opt(&self.mobile_phone),
            ColumnKey::OfficePhone1 => opt(&self.office_phone1),
            ColumnKey::Extension1 => opt(&self.extension1),
            ColumnKey::OfficePhone2 => opt(&self.office_phone2),
            ColumnKey::Extension2 => opt(&self.extension2),
            ColumnKey::OfficePhone3 => opt(&self.office_phone3),
            ColumnKey::Extension3 => opt(&self.extension3),
            ColumnKey::Email => opt(&self.email),
            ColumnKey::OfficeManagerName1 => opt(&self.office_manager_name1),
            ColumnKey::OfficeManagerMobile1 => opt(&self.office_manager_mobile1),
            ColumnKey::OfficeManagerName2 => opt(&self.office_manager_name2),
            ColumnKey::OfficeManagerMobile2 => opt(&self.office_manager_mobile2),
            ColumnKey::OfficeManagerName3 => opt(&self.office_manager_name3),
            ColumnKey::OfficeManagerMobile3 => opt(&self.office_manager_mobile3),
            ColumnKey::OfficeEmail => opt(&self.office_email),
            ColumnKey::SubjectCategory => opt(&self.subject_category),
            ColumnKey::Country => opt(&self.country),
            ColumnKey::Address => opt(&self.address),
            ColumnKey::PostalCode => opt(&self.postal_code),
            ColumnKey::Description => opt(&self.description),
        }
    }

    /// The contact's main company, or "" when unset.
    pub fn main_company(&self) -> &str {
        self.main_company.as_deref().unwrap_or("")
    }
}

/// Submission payload for creating or updating a contact.
///
/// The backend reads camelCase keys on POST/PUT even though it returns
/// snake_case rows, so the draft serializes separately from [`Contact`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDraft {
    pub full_name: String,
    #[serde(default)]
    pub main_company: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub mobile_phone: Option<String>,
    #[serde(default)]
    pub office_phone1: Option<String>,
    #[serde(default)]
    pub extension1: Option<String>,
    #[serde(default)]
    pub office_phone2: Option<String>,
    #[serde(default)]
    pub extension2: Option<String>,
    #[serde(default)]
    pub office_phone3: Option<String>,
    #[serde(default)]
    pub extension3: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub office_manager_name1: Option<String>,
    #[serde(default)]
    pub office_manager_mobile1: Option<String>,
    #[serde(default)]
    pub office_manager_name2: Option<String>,
    #[serde(default)]
    pub office_manager_mobile2: Option<String>,
    #[serde(default)]
    pub office_manager_name3: Option<String>,
    #[serde(default)]
    pub office_manager_mobile3: Option<String>,
    #[serde(default)]
    pub office_email: Option<String>,
    #[serde(default)]
    pub subject_category: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ContactDraft {
    /// Client-side validation, run before any request is sent.
    pub fn validate(&self) -> Result<()> {
        if self.full_name.trim().is_empty() {
            return Err(Error::Validation("full name is required".to_string()));
        }
        Ok(())
    }
}

impl From<&Contact> for ContactDraft {
    fn from(contact: &Contact) -> Self {
        ContactDraft {
            full_name: contact.full_name.clone(),
            main_company: contact.main_company.clone(),
            job_title: contact.job_title.clone(),
            mobile_phone: contact.mobile_phone.clone(),
            office_phone1: contact.office_phone1.clone(),
            extension1: contact.extension1.clone(),
            office_phone2: contact.office_phone2.clone(),
            extension2: contact.extension2.clone(),
            office_phone3: contact.office_phone3.clone(),
            extension3: contact.extension3.clone(),
            email: contact.email.clone(),
            office_manager_name1: contact.office_manager_name1.clone(),
            office_manager_mobile1: contact.office_manager_mobile1.clone(),
            office_manager_name2: contact.office_manager_name2.clone(),
            office_manager_mobile2: contact.office_manager_mobile2.clone(),
            office_manager_name3: contact.office_manager_name3.clone(),
            office_manager_mobile3: contact.office_manager_mobile3.clone(),
            office_email: contact.office_email.clone(),
            subject_category: contact.subject_category.clone(),
            country: contact.country.clone(),
            address: contact.address.clone(),
            postal_code: contact.postal_code.clone(),
            description: contact.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_read_as_empty() {
        let contact: Contact =
            serde_json::from_str(r#"{"id": 7, "full_name": "علی رضایی"}"#).unwrap();
        assert_eq!(contact.field(ColumnKey::FullName), "علی رضایی");
        assert_eq!(contact.field(ColumnKey::Email), "");
        assert_eq!(contact.main_company(), "");
    }

    #[test]
    fn draft_serializes_camel_case() {
        let draft = ContactDraft {
            full_name: "Ali".to_string(),
            office_manager_name1: Some("Sara".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["fullName"], "Ali");
        assert_eq!(json["officeManagerName1"], "Sara");
    }

    #[test]
    fn blank_full_name_fails_validation() {
        let draft = ContactDraft {
            full_name: "   ".to_string(),
            ..Default::default()
        };
        assert!(draft.validate().is_err());
    }
}
