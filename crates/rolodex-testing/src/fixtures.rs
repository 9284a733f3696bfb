//! Sample data for tests across the workspace.

use rolodex_types::{CompanyId, CompanyRecord, Contact, UserId, UserRecord};

/// A contact with the given id, name and optional main company; every
/// other field is absent.
pub fn contact(id: i64, full_name: &str, main_company: Option<&str>) -> Contact {
    let mut value = serde_json::json!({
        "id": id,
        "full_name": full_name,
    });
    if let Some(company) = main_company {
        value["main_company"] = serde_json::Value::String(company.to_string());
    }
    serde_json::from_value(value).expect("fixture contact is valid")
}

/// `count` contacts named `<prefix>0..` with ids from 1.
pub fn contacts(prefix: &str, count: usize) -> Vec<Contact> {
    (0..count)
        .map(|i| contact(i as i64 + 1, &format!("{}{}", prefix, i), None))
        .collect()
}

pub fn company(id: i64, name: &str, sub1: Option<&str>, sub2: Option<&str>) -> CompanyRecord {
    CompanyRecord {
        id: CompanyId(id),
        company_name: name.to_string(),
        sub_company1: sub1.map(str::to_string),
        sub_company2: sub2.map(str::to_string),
    }
}

/// A small realistic company list: one holding with two branches and a
/// distribution arm, plus an independent company.
pub fn sample_companies() -> Vec<CompanyRecord> {
    vec![
        company(1, "هلدینگ البرز", Some("البرز شرق"), Some("پخش البرز")),
        company(2, "هلدینگ البرز", Some("البرز غرب"), None),
        company(3, "گروه صنعتی سپهر", None, None),
    ]
}

pub fn user(id: i64, username: &str, role: &str) -> UserRecord {
    UserRecord {
        id: UserId(id),
        username: username.to_string(),
        role: role.to_string(),
    }
}
