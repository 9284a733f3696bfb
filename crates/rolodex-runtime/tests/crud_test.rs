use rolodex_client::api::DirectoryApi;
use rolodex_runtime::CompanyDirectory;
use rolodex_testing::fixtures;
use rolodex_testing::InMemoryApi;
use rolodex_types::{CompanyDraft, ContactDraft};

#[tokio::test]
async fn company_rows_added_and_removed_show_up_on_the_next_refresh() {
    let api = InMemoryApi::new(Vec::new(), vec![fixtures::company(1, "A", Some("B"), None)]);
    let mut directory = CompanyDirectory::new();
    directory.refresh(&api).await.unwrap();
    assert_eq!(directory.forest().get("A").unwrap().children, ["B"]);

    let draft = CompanyDraft {
        company_name: "A".to_string(),
        sub_company1: Some("C".to_string()),
        sub_company2: None,
    };
    let id = api.create_company(&draft).await.unwrap();
    assert_eq!(api.get_company(id).await.unwrap().sub1(), Some("C"));

    // The forest only changes once the directory is refreshed.
    assert_eq!(directory.forest().get("A").unwrap().children, ["B"]);
    directory.refresh(&api).await.unwrap();
    assert_eq!(directory.forest().get("A").unwrap().children, ["B", "C"]);

    api.delete_company(id).await.unwrap();
    directory.refresh(&api).await.unwrap();
    assert!(directory.forest().get("C").is_none());
    assert_eq!(directory.forest().get("A").unwrap().children, ["B"]);
}

#[tokio::test]
async fn company_update_rewires_the_branch() {
    let api = InMemoryApi::new(Vec::new(), vec![fixtures::company(1, "A", Some("B"), None)]);

    let draft = CompanyDraft {
        company_name: "A".to_string(),
        sub_company1: Some("D".to_string()),
        sub_company2: None,
    };
    api.update_company(rolodex_types::CompanyId(1), &draft)
        .await
        .unwrap();

    let mut directory = CompanyDirectory::new();
    directory.refresh(&api).await.unwrap();
    assert!(directory.forest().get("B").is_none());
    assert_eq!(directory.forest().get("D").unwrap().parent.as_deref(), Some("A"));
}

#[tokio::test]
async fn contact_round_trips_through_create_update_delete() {
    let api = InMemoryApi::new(Vec::new(), Vec::new());

    let draft = ContactDraft {
        full_name: "علی رضایی".to_string(),
        main_company: Some("هلدینگ البرز".to_string()),
        ..Default::default()
    };
    let id = api.create_contact(&draft).await.unwrap();

    let fetched = api.get_contact(id).await.unwrap();
    assert_eq!(fetched.full_name, "علی رضایی");
    assert_eq!(fetched.main_company(), "هلدینگ البرز");

    let mut updated = ContactDraft::from(&fetched);
    updated.full_name = "علی رضائی".to_string();
    api.update_contact(id, &updated).await.unwrap();
    assert_eq!(api.get_contact(id).await.unwrap().full_name, "علی رضائی");

    api.delete_contact(id).await.unwrap();
    assert!(api.get_contact(id).await.is_err());
}

#[tokio::test]
async fn blank_drafts_are_rejected_before_any_write() {
    let api = InMemoryApi::new(Vec::new(), Vec::new());

    let contact = ContactDraft {
        full_name: "   ".to_string(),
        ..Default::default()
    };
    assert!(api.create_contact(&contact).await.is_err());
    assert!(api.search_all("", None).await.unwrap().is_empty());

    let company = CompanyDraft::default();
    assert!(api.create_company(&company).await.is_err());
    assert!(api.list_companies().await.unwrap().is_empty());
}
