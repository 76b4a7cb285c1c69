//! Tests for building and resolving specifications

use orgspec_core::factories::DEFAULT_DB_USER;
use orgspec_core::{
    Component, ComponentField, DBConfig, EnvField, Environment, EnvironmentType, Error,
    Organisation, SpecRegistry, VaultSecret, build, init_config, resolve_organisation,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn builtin_spec() -> orgspec_core::Specification {
    build(&SpecRegistry::with_builtins()).expect("built-in specification should build")
}

fn expected_db_config(env: &str) -> DBConfig {
    DBConfig {
        db_user: "ATL_ENTERPRISE_OWNER".to_string(),
        db_password: VaultSecret {
            path: format!("atl/{}", env),
            keys: vec!["ATL_DB_PASSWORD".to_string()],
            namespace: None,
        },
    }
}

mod discovery {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_organisations_in_registration_order() {
        let spec = builtin_spec();
        let names: Vec<_> = spec.iter().map(|o| o.short_name.as_str()).collect();
        assert_eq!(names, vec!["org1", "org2"]);
    }

    #[rstest]
    #[case("org1", &["dev", "dev1"])]
    #[case("org2", &["dev", "tst", "stg", "prd"])]
    fn test_environments_match_source(#[case] short_name: &str, #[case] expected: &[&str]) {
        let spec = builtin_spec();
        let org = spec.get(short_name).unwrap();
        assert_eq!(org.env_names(), expected);
    }

    #[test]
    fn test_organisation_without_source_has_no_environments() {
        let mut registry = SpecRegistry::with_builtins();
        registry.register_organisation(Organisation::new("Org 3", "org3"));

        let spec = build(&registry).unwrap();
        assert!(spec.get("org3").unwrap().environments.is_empty());
    }

    #[test]
    fn test_registered_environments_are_replaced_by_discovery() {
        let mut registry = SpecRegistry::new();
        registry.register_organisation(
            Organisation::new("Org 3", "org3")
                .with_environment(Environment::new("stale", EnvironmentType::Dev)),
        );

        let spec = build(&registry).unwrap();
        assert!(spec.get("org3").unwrap().env("stale").is_none());
        // The registry keeps its own copy untouched
        assert_eq!(registry.organisation("org3").unwrap().environments.len(), 1);
    }
}

mod resolution {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_org1_literal_values() {
        let spec = builtin_spec();
        let org1 = spec.get("org1").unwrap();

        let dev = org1.env("dev").unwrap();
        assert_eq!(dev.env_type, EnvironmentType::Dev);
        assert!(dev.db_config.is_none());

        let dev1 = org1.env("dev1").unwrap();
        assert_eq!(dev1.env_type, EnvironmentType::Dev);
        assert_eq!(dev1.resolved_db_config(), Some(&expected_db_config("dev1")));
    }

    #[rstest]
    #[case("dev")]
    #[case("tst")]
    #[case("stg")]
    #[case("prd")]
    fn test_org2_db_config_follows_environment(#[case] env: &str) {
        let spec = builtin_spec();
        let resolved = spec.get("org2").unwrap().env(env).unwrap();
        assert_eq!(resolved.resolved_db_config(), Some(&expected_db_config(env)));
    }

    #[test]
    fn test_component_db_config_uses_owning_environment() {
        let spec = builtin_spec();
        let dev = spec.get("org1").unwrap().env("dev").unwrap();

        match &dev.components[0] {
            Component::Component1(cmp) => {
                let config = cmp.db_config.as_ref().and_then(|c| c.value()).unwrap();
                assert_eq!(config, &expected_db_config("dev"));
                assert!(cmp.foo.is_none());
            }
            other => panic!("expected Component1, got {:?}", other),
        }
    }

    #[test]
    fn test_component_foo_is_org_and_env_name() {
        let spec = builtin_spec();
        let dev1 = spec.get("org1").unwrap().env("dev1").unwrap();

        match &dev1.components[0] {
            Component::Component1(cmp) => {
                let foo = cmp.foo.as_ref().and_then(|f| f.value()).unwrap();
                assert_eq!(foo, "Org 1/dev1");
            }
            other => panic!("expected Component1, got {:?}", other),
        }
        let names: Vec<_> = dev1.components.iter().map(Component::name).collect();
        assert_eq!(
            names,
            vec!["Component 1", "Component 2", "Another Componnent #2"]
        );
    }

    #[test]
    fn test_whole_tree_resolved() {
        assert!(builtin_spec().is_resolved());
    }

    #[test]
    fn test_builds_are_independent_and_equal() {
        assert_eq!(builtin_spec(), builtin_spec());
    }

    #[test]
    fn test_init_config_matches_build() {
        let spec = init_config().unwrap();
        assert_eq!(spec, &builtin_spec());
    }
}

mod idempotence {
    use super::*;
    use pretty_assertions::assert_eq;

    fn counted_org(calls: &Arc<AtomicUsize>) -> Organisation {
        let env_calls = Arc::clone(calls);
        let foo_calls = Arc::clone(calls);
        Organisation::new("Acme", "acme").with_environment(
            Environment::new("dev", EnvironmentType::Dev)
                .with_db_config(EnvField::deferred(move |env| {
                    env_calls.fetch_add(1, Ordering::SeqCst);
                    Ok(orgspec_core::factories::env_based_db_config(
                        env,
                        DEFAULT_DB_USER,
                    ))
                }))
                .with_component(orgspec_core::Component1::new("api").with_foo(
                    ComponentField::deferred(move |_, org, env| {
                        foo_calls.fetch_add(1, Ordering::SeqCst);
                        Ok(format!("{}/{}", org.name, env.name))
                    }),
                )),
        )
    }

    #[test]
    fn test_second_pass_invokes_nothing() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut org = counted_org(&calls);

        resolve_organisation(&mut org).unwrap();
        let once = org.clone();
        resolve_organisation(&mut org).unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(org, once);
    }

    #[test]
    fn test_init_config_twice_is_same_tree() {
        let first = init_config().unwrap();
        let second = init_config().unwrap();
        assert!(std::ptr::eq(first, second));
    }
}

mod failures {
    use super::*;
    use pretty_assertions::assert_eq;

    fn failing_source() -> Vec<Environment> {
        vec![
            Environment::new("dev", EnvironmentType::Dev),
            Environment::new("prd", EnvironmentType::Prd).with_component(
                orgspec_core::Component1::new("api").with_foo(ComponentField::deferred(
                    |_, _, _| Err(Error::factory_failed("no foo for prd")),
                )),
            ),
        ]
    }

    #[test]
    fn test_factory_failure_aborts_build() {
        let mut registry = SpecRegistry::new();
        registry.register_organisation(Organisation::new("Broken", "broken"));
        registry.register_source("broken", failing_source);

        let err = build(&registry).unwrap_err();
        match err {
            Error::Factory { field, target, .. } => {
                assert_eq!(field, "foo");
                assert_eq!(target, "broken/prd/api");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
