//! Integration tests for localrepo

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    const CONFIG: &str = r#"
[repository]
digest = "rolling"

[[remotes]]
id = "central"
url = "https://repo.example.org/maven2"

[[remotes]]
id = "nexus"
url = "https://nexus.example.org/group"
repository_manager = true
mirror_of = ["b", "a"]
"#;

    /// Command isolated to a scratch config and repository
    fn localrepo(dir: &TempDir) -> Command {
        let config = dir.path().join("config.toml");
        if !config.exists() {
            fs::write(&config, CONFIG).unwrap();
        }
        let mut cmd = cargo_bin_cmd!("localrepo");
        cmd.env_remove("LOCALREPO_CONFIG")
            .env_remove("LOCALREPO_BASEDIR")
            .arg("--config")
            .arg(&config)
            .arg("--basedir")
            .arg(dir.path().join("repo"));
        cmd
    }

    #[test]
    fn help_displays() {
        cargo_bin_cmd!("localrepo")
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Local artifact repository"));
    }

    #[test]
    fn version_displays() {
        cargo_bin_cmd!("localrepo")
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("localrepo"));
    }

    #[test]
    fn snapshot_artifact_path() {
        let dir = TempDir::new().unwrap();
        localrepo(&dir)
            .args(["path", "artifact", "org.example:lib:1.0-20090208.132618-23"])
            .assert()
            .success()
            .stdout("org/example/lib/1.0-SNAPSHOT/lib-1.0-20090208.132618-23.jar\n");
    }

    #[test]
    fn remote_artifact_path_matches_local() {
        let dir = TempDir::new().unwrap();
        localrepo(&dir)
            .args([
                "path",
                "artifact",
                "org.example:lib:jar:sources:1.0",
                "--remote",
                "nexus",
                "--context",
                "release",
            ])
            .assert()
            .success()
            .stdout("org/example/lib/1.0/lib-1.0-sources.jar\n");
    }

    #[test]
    fn local_group_metadata_path() {
        let dir = TempDir::new().unwrap();
        localrepo(&dir)
            .args(["path", "metadata", "org.example"])
            .assert()
            .success()
            .stdout("org/example/maven-metadata-local.xml\n");
    }

    #[test]
    fn remote_metadata_path_uses_key() {
        let dir = TempDir::new().unwrap();
        localrepo(&dir)
            .args([
                "path",
                "metadata",
                "org.example",
                "lib",
                "--remote",
                "nexus",
                "--context",
                "release",
            ])
            .assert()
            .success()
            .stdout("org/example/lib/maven-metadata-nexus-f4055d373b.xml\n");
    }

    #[test]
    fn static_remote_key_is_id() {
        let dir = TempDir::new().unwrap();
        localrepo(&dir)
            .args(["key", "central", "--context", "release"])
            .assert()
            .success()
            .stdout("central\n");
    }

    #[test]
    fn unknown_remote_fails() {
        let dir = TempDir::new().unwrap();
        localrepo(&dir)
            .args(["key", "missing"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Remote repository not configured"));
    }

    #[test]
    fn invalid_coordinates_fail() {
        let dir = TempDir::new().unwrap();
        localrepo(&dir)
            .args(["path", "artifact", "org.example:lib"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid artifact coordinates"));
    }

    #[test]
    fn traversal_is_rejected() {
        let dir = TempDir::new().unwrap();
        localrepo(&dir)
            .args(["path", "artifact", "org.example:..:1.0"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid artifact id"));
    }

    #[test]
    fn find_reports_miss() {
        let dir = TempDir::new().unwrap();
        localrepo(&dir)
            .args(["find", "org.example:lib:1.0"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Not cached: org.example:lib:jar:1.0"));
    }

    #[test]
    fn find_reports_cached_file() {
        let dir = TempDir::new().unwrap();
        let file = dir
            .path()
            .join("repo")
            .join(Path::new("org/example/lib/1.0/lib-1.0.jar"));
        fs::create_dir_all(file.parent().unwrap()).unwrap();
        fs::write(&file, b"jar").unwrap();

        localrepo(&dir)
            .args(["find", "org.example:lib:1.0"])
            .assert()
            .success()
            .stdout(predicate::str::contains("lib-1.0.jar"))
            .stdout(predicate::str::contains("Not cached").not());
    }

    #[test]
    fn config_path() {
        let dir = TempDir::new().unwrap();
        localrepo(&dir)
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_show() {
        let dir = TempDir::new().unwrap();
        localrepo(&dir)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[repository]"))
            .stdout(predicate::str::contains("nexus"));
    }

    #[test]
    fn config_init_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("fresh").join("config.toml");

        cargo_bin_cmd!("localrepo")
            .env_remove("LOCALREPO_CONFIG")
            .arg("--config")
            .arg(&config)
            .args(["config", "init"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Configuration initialized"));

        let content = fs::read_to_string(&config).unwrap();
        assert!(content.contains("[listeners]"));
    }
}
