use quay_core::module::{Artifact, ModuleDescriptor};
use quay_core::repository::RepositoryConfig;
use quay_core::version::{classify, VersionClass};
use quay_maven::credentials::MapEnv;
use quay_maven::publication::{assemble, PublishTarget};

fn widget(version: &str) -> ModuleDescriptor {
    ModuleDescriptor::new(
        "io.example",
        "widget",
        version,
        vec![
            Artifact::new(None, "jar", b"main".to_vec()),
            Artifact::new(Some("sources"), "jar", b"src".to_vec()),
        ],
        vec![],
    )
    .unwrap()
}

fn acme() -> RepositoryConfig {
    RepositoryConfig::new(
        "acme",
        "https://repo.example/acme",
        "ACME_USER",
        "ACME_PASS",
    )
}

fn mirror() -> RepositoryConfig {
    RepositoryConfig::new(
        "mirror",
        "https://mirror.example/maven",
        "MIRROR_USER",
        "MIRROR_PASS",
    )
}

fn full_env() -> MapEnv {
    MapEnv::new()
        .with("ACME_USER", "deployer")
        .with("ACME_PASS", "hunter2")
        .with("MIRROR_USER", "mirror-bot")
        .with("MIRROR_PASS", "s3cret")
}

#[test]
fn test_classify_examples() {
    assert_eq!(classify("2.0.2"), VersionClass::Release);
    assert_eq!(classify("2.0.2-SNAPSHOT"), VersionClass::Snapshot);
}

#[test]
fn test_snapshot_module_with_snapshot_repo_yields_two_targets() {
    let desc = assemble(
        widget("1.0-SNAPSHOT"),
        &[acme()],
        &full_env(),
    )
    .unwrap();

    assert_eq!(desc.targets.len(), 2);
    assert!(desc.unresolved.is_empty());
    assert!(matches!(desc.targets[0], PublishTarget::Local(_)));
    let remote: Vec<_> = desc.remote_targets().collect();
    assert_eq!(remote.len(), 1);
    assert_eq!(remote[0].display_name, "acmeSnapshots");
    assert_eq!(remote[0].url, "https://repo.example/acme/snapshots");
}

#[test]
fn test_snapshot_skips_repositories_without_snapshots() {
    let desc = assemble(
        widget("1.0-SNAPSHOT"),
        &[acme().without_snapshots(), mirror()],
        &full_env(),
    )
    .unwrap();

    let names: Vec<_> = desc.targets.iter().map(|t| t.display_name()).collect();
    assert_eq!(names, vec!["mavenLocal", "mirrorSnapshots"]);
}

#[test]
fn test_release_targets_preserve_config_order() {
    let desc = assemble(
        widget("1.0"),
        &[mirror(), acme()],
        &full_env(),
    )
    .unwrap();

    let names: Vec<_> = desc.targets.iter().map(|t| t.display_name()).collect();
    assert_eq!(names, vec!["mavenLocal", "mirrorReleases", "acmeReleases"]);
}

#[test]
fn test_assemble_is_idempotent() {
    let first = assemble(
        widget("1.0"),
        &[acme(), mirror()],
        &full_env(),
    )
    .unwrap();
    let second = assemble(
        widget("1.0"),
        &[acme(), mirror()],
        &full_env(),
    )
    .unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_missing_credential_only_affects_its_repository() {
    let env = MapEnv::new()
        .with("ACME_USER", "deployer")
        .with("ACME_PASS", "hunter2")
        .with("MIRROR_USER", "mirror-bot");

    let desc = assemble(
        widget("1.0"),
        &[acme(), mirror()],
        &env,
    )
    .unwrap();

    let remote: Vec<_> = desc.remote_targets().collect();
    assert_eq!(remote.len(), 1);
    assert_eq!(remote[0].display_name, "acmeReleases");
    assert_eq!(desc.unresolved.len(), 1);
    assert_eq!(desc.unresolved[0].display_name, "mirrorReleases");
    assert_eq!(desc.unresolved[0].error.slot, "MIRROR_PASS");
}

#[test]
fn test_configuration_error_aborts_whole_assembly() {
    let mut broken = mirror();
    broken.base_url = String::new();

    let err = assemble(
        widget("1.0"),
        &[acme(), broken],
        &full_env(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("empty url"), "got: {err}");
}
