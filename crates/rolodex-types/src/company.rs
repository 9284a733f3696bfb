use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyId(pub i64);

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A flat company row: a main company plus up to two nested
/// sub-company names. The hierarchy is inferred from these rows, never
/// stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub id: CompanyId,
    pub company_name: String,
    #[serde(default)]
    pub sub_company1: Option<String>,
    #[serde(default)]
    pub sub_company2: Option<String>,
}

impl CompanyRecord {
    /// First-level sub-company, with empty strings read as absent.
    pub fn sub1(&self) -> Option<&str> {
        self.sub_company1.as_deref().filter(|s| !s.is_empty())
    }

    /// Second-level sub-company, with empty strings read as absent.
    pub fn sub2(&self) -> Option<&str> {
        self.sub_company2.as_deref().filter(|s| !s.is_empty())
    }
}

/// Submission payload for creating or updating a company row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDraft {
    pub company_name: String,
    #[serde(default)]
    pub sub_company1: Option<String>,
    #[serde(default)]
    pub sub_company2: Option<String>,
}

impl CompanyDraft {
    pub fn validate(&self) -> Result<()> {
        if self.company_name.trim().is_empty() {
            return Err(Error::Validation("company name is required".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sub_company_reads_as_absent() {
        let record = CompanyRecord {
            id: CompanyId(1),
            company_name: "هلدینگ البرز".to_string(),
            sub_company1: Some(String::new()),
            sub_company2: None,
        };
        assert_eq!(record.sub1(), None);
        assert_eq!(record.sub2(), None);
    }

    #[test]
    fn draft_serializes_camel_case() {
        let draft = CompanyDraft {
            company_name: "Alborz".to_string(),
            sub_company1: Some("Alborz East".to_string()),
            sub_company2: None,
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["companyName"], "Alborz");
        assert_eq!(json["subCompany1"], "Alborz East");
    }
}
