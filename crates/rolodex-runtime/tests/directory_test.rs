use rolodex_engine::list::CompanyField;
use rolodex_runtime::CompanyDirectory;
use rolodex_testing::fixtures;
use rolodex_testing::{InMemoryApi, ScriptedApi};
use rolodex_types::SortDirection;

#[tokio::test]
async fn refresh_builds_the_forest_from_flat_rows() {
    let companies = vec![fixtures::company(1, "A", Some("B"), Some("C"))];
    let api = InMemoryApi::new(Vec::new(), companies);

    let mut directory = CompanyDirectory::new();
    directory.refresh(&api).await.unwrap();

    assert_eq!(directory.find_root("C").name, "A");
    assert_eq!(directory.forest().get("A").unwrap().children, ["B"]);
    assert_eq!(directory.forest().get("B").unwrap().children, ["C"]);
}

#[tokio::test]
async fn tree_for_contact_starts_at_root_and_highlights() {
    let api = InMemoryApi::new(
        Vec::new(),
        vec![fixtures::company(1, "A", Some("B"), Some("C"))],
    );
    let mut directory = CompanyDirectory::new();
    directory.refresh(&api).await.unwrap();

    let contact = fixtures::contact(1, "x", Some("C"));
    let tree = directory.tree_for(&contact).unwrap();
    assert_eq!(tree.root.name, "A");
    assert_eq!(tree.root.children[0].children[0].name, "C");
    assert!(tree.root.children[0].children[0].highlighted);

    let homeless = fixtures::contact(2, "y", None);
    assert!(directory.tree_for(&homeless).is_none());
}

#[tokio::test]
async fn failed_refresh_keeps_the_previous_snapshot() {
    let good = InMemoryApi::new(Vec::new(), fixtures::sample_companies());
    let mut directory = CompanyDirectory::new();
    directory.refresh(&good).await.unwrap();
    let before = directory.companies().len();
    assert!(before > 0);

    // ScriptedApi has no company list scripted, so this fetch fails.
    let broken = ScriptedApi::new();
    assert!(directory.refresh(&broken).await.is_err());

    assert_eq!(directory.companies().len(), before);
    assert!(!directory.forest().is_empty());
}

#[tokio::test]
async fn sort_toggle_cycles_direction_per_column() {
    let api = InMemoryApi::new(
        Vec::new(),
        vec![
            fixtures::company(1, "beta", None, None),
            fixtures::company(2, "alpha", None, None),
        ],
    );
    let mut directory = CompanyDirectory::new();
    directory.refresh(&api).await.unwrap();

    // Unsorted listing preserves fetch order.
    assert_eq!(directory.sorted_companies()[0].company_name, "beta");

    let sort = directory.toggle_sort(CompanyField::CompanyName);
    assert_eq!(sort.direction, SortDirection::Asc);
    assert_eq!(directory.sorted_companies()[0].company_name, "alpha");

    let sort = directory.toggle_sort(CompanyField::CompanyName);
    assert_eq!(sort.direction, SortDirection::Desc);
    assert_eq!(directory.sorted_companies()[0].company_name, "beta");

    let sort = directory.toggle_sort(CompanyField::Id);
    assert_eq!(sort.direction, SortDirection::Asc);
    assert_eq!(directory.sorted_companies()[0].id.0, 1);
}
