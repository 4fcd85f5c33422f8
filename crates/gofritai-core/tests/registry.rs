use std::collections::HashSet;
use std::io::Write as _;

use gofritai_core::error::FritError;
use gofritai_core::provider::{Category, FreeTier, OfferDuration, Provider};
use gofritai_core::registry::Registry;

fn make_provider(id: &str, category: Category, requires_cc: bool) -> Provider {
    Provider {
        id: id.to_string(),
        name: id.to_uppercase(),
        category,
        free_tier: FreeTier {
            description: "test tier".to_string(),
            limits: Vec::new(),
            duration: OfferDuration::Forever,
        },
        requires_cc,
        url: format!("https://{id}.example.com"),
        api_endpoint: None,
        metadata: Default::default(),
    }
}

#[test]
fn lookup_finds_every_bundled_id() {
    let reg = Registry::bundled().unwrap();
    for p in reg.iter() {
        let found = reg.get(&p.id).expect("id should resolve");
        assert_eq!(found.id, p.id);
    }
}

#[test]
fn bundled_ids_are_unique() {
    let reg = Registry::bundled().unwrap();
    let ids: HashSet<&str> = reg.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids.len(), reg.len());
}

#[test]
fn lookup_oracle_arm() {
    let reg = Registry::bundled().unwrap();
    let p = reg.get("oracle-arm").expect("oracle-arm missing");
    assert_eq!(p.name, "Oracle Cloud ARM");
    assert_eq!(p.category, Category::Compute);
    assert!(!p.requires_cc);
    assert_eq!(p.free_tier.limits.len(), 3);
    assert_eq!(p.free_tier.limits[0].resource, "vcpu");
}

#[test]
fn lookup_unknown_is_none() {
    let reg = Registry::bundled().unwrap();
    assert!(reg.get("does-not-exist").is_none());
    assert!(reg.get("").is_none());
    // ids are exact, not case-folded
    assert!(reg.get("Oracle-ARM").is_none());
}

#[test]
fn llm_category_in_declaration_order() {
    let reg = Registry::bundled().unwrap();
    let ids: Vec<&str> = reg
        .by_category(Category::Llm)
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(ids, vec!["groq", "google-ai-studio", "openrouter"]);
}

#[test]
fn category_filter_partitions_registry() {
    let reg = Registry::bundled().unwrap();
    let mut total = 0;
    for c in Category::ALL {
        let matched = reg.by_category(c);
        assert!(matched.iter().all(|p| p.category == c), "{c}: wrong category returned");
        total += matched.len();
    }
    assert_eq!(total, reg.len());
}

#[test]
fn empty_category_is_empty_not_error() {
    let reg = Registry::bundled().unwrap();
    assert!(reg.by_category(Category::Auth).is_empty());
    assert!(reg.by_category(Category::Monitoring).is_empty());
    assert!(!reg.categories().contains(&Category::Auth));
}

#[test]
fn no_credit_card_is_exact_subset() {
    let reg = Registry::bundled().unwrap();
    let no_cc: HashSet<&str> = reg.no_credit_card().iter().map(|p| p.id.as_str()).collect();
    let cc: HashSet<&str> = reg
        .iter()
        .filter(|p| p.requires_cc)
        .map(|p| p.id.as_str())
        .collect();
    assert!(no_cc.is_disjoint(&cc));
    assert_eq!(no_cc.len() + cc.len(), reg.len());
    assert!(cc.contains("fly-io"));
    assert!(!no_cc.contains("fly-io"));
}

#[test]
fn no_credit_card_keeps_order() {
    let reg = Registry::bundled().unwrap();
    let expected: Vec<&str> = reg
        .iter()
        .filter(|p| !p.requires_cc)
        .map(|p| p.id.as_str())
        .collect();
    let got: Vec<&str> = reg.no_credit_card().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(got, expected);
    assert_eq!(got.first(), Some(&"oracle-arm"));
}

#[test]
fn substituted_catalogue_is_isolated() {
    let reg = Registry::new(vec![
        make_provider("a", Category::Auth, true),
        make_provider("b", Category::Monitoring, false),
        make_provider("c", Category::Auth, false),
    ])
    .unwrap();
    assert_eq!(reg.len(), 3);
    assert!(reg.get("oracle-arm").is_none());
    let auth: Vec<&str> = reg
        .by_category(Category::Auth)
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(auth, vec!["a", "c"]);
    let no_cc: Vec<&str> = reg.no_credit_card().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(no_cc, vec!["b", "c"]);
    assert_eq!(reg.categories(), vec![Category::Auth, Category::Monitoring]);
}

#[test]
fn duplicate_ids_are_rejected() {
    let err = Registry::new(vec![
        make_provider("dup", Category::Compute, false),
        make_provider("other", Category::Storage, false),
        make_provider("dup", Category::Database, true),
    ])
    .unwrap_err();
    match err {
        FritError::DuplicateProvider(id) => assert_eq!(id, "dup"),
        other => panic!("expected DuplicateProvider, got {other:?}"),
    }
}

#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[[provider]]
id = "clerk"
name = "Clerk"
category = "auth"
requires_cc = false
url = "https://clerk.com"

[provider.metadata]
plan = "hobby"

[provider.free_tier]
description = "10k MAU"
duration = "forever"
limits = [{{ resource = "users", amount = 10000, unit = "MAU", period = "month" }}]
"#
    )
    .unwrap();

    let reg = Registry::load(file.path()).unwrap();
    let p = reg.get("clerk").unwrap();
    assert_eq!(p.metadata.get("plan").map(String::as_str), Some("hobby"));
    assert_eq!(p.free_tier.limits[0].to_string(), "users: 10k MAU/month");
}

#[test]
fn load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Registry::load(&dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, FritError::Io(_)));
}

#[test]
fn json_uses_snake_case_field_names() {
    let reg = Registry::bundled().unwrap();
    let groq = serde_json::to_value(reg.get("groq").unwrap()).unwrap();
    assert_eq!(groq["requires_cc"], false);
    assert_eq!(groq["category"], "llm");
    assert_eq!(groq["free_tier"]["duration"], "forever");
    assert_eq!(groq["free_tier"]["limits"][0]["period"], "minute");
    assert_eq!(groq["api_endpoint"], "https://api.groq.com/openai/v1");
    assert!(groq.get("metadata").is_none(), "empty metadata should be omitted");

    let oracle = serde_json::to_value(reg.get("oracle-arm").unwrap()).unwrap();
    assert!(oracle.get("api_endpoint").is_none());
    assert!(oracle["free_tier"]["limits"][0].get("period").is_none());
}
