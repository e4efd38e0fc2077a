#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const CATALOG: &str = r#"[
    {"fullpath": "/path/to/document.ext", "type": "document",
     "metadata": {"creator": "Paul"}},
    {"fullpath": "/path/to/image.ext", "type": "image",
     "metadata": {"creator": "Paul", "resolution": "1024x768"}},
    {"fullpath": "/path/to/audio.ext", "type": "audio",
     "metadata": {"creator": "Hamza", "runtime": "3mins"}}
]"#;

struct Env {
    temp: TempDir,
    catalog: String,
}

impl Env {
    fn new() -> Self {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("config")).unwrap();
        let catalog = temp.path().join("lib.json");
        fs::write(&catalog, CATALOG).unwrap();
        let catalog = catalog.to_str().unwrap().to_string();
        Self { temp, catalog }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::new(cargo_bin("medialib"));
        cmd.env("MEDIALIB_CONFIG_DIR", self.temp.path().join("config"))
            .env_remove("MEDIALIB_LOG")
            .current_dir(self.temp.path());
        cmd
    }

    fn path(&self, name: &str) -> String {
        self.temp.path().join(name).to_str().unwrap().to_string()
    }
}

#[test]
fn test_load_and_search_from_prompt() {
    let env = Env::new();
    env.cmd()
        .write_stdin(format!("load {}\nlist Hamza\nquit\n", env.catalog))
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 3 files from"))
        .stdout(predicate::str::contains("/path/to/audio.ext"))
        .stdout(predicate::str::contains("runtime: 3mins"))
        .stdout(predicate::str::contains("/path/to/image.ext").not());
}

#[test]
fn test_files_on_command_line_are_loaded_first() {
    let env = Env::new();
    env.cmd()
        .arg(&env.catalog)
        .write_stdin("list 1024x768\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Collection contains 3 files."))
        .stdout(predicate::str::contains("/path/to/image.ext"));
}

#[test]
fn test_edit_and_save_search_round_trip() {
    let env = Env::new();
    let out = env.path("paul.json");

    env.cmd()
        .arg(&env.catalog)
        .write_stdin(format!(
            "list Paul\nadd 1 camera Leica\nsave-search {}\nquit\n",
            out
        ))
        .assert()
        .success()
        .stdout(predicate::str::contains("Added camera: Leica to /path/to/image.ext"));

    let saved = fs::read_to_string(&out).unwrap();
    assert!(saved.contains("\"camera\": \"Leica\""));
    assert!(saved.contains("/path/to/document.ext"));
    assert!(!saved.contains("/path/to/audio.ext"));

    env.cmd()
        .arg(&out)
        .write_stdin("list Leica\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Collection contains 2 files."))
        .stdout(predicate::str::contains("/path/to/image.ext"));
}

#[test]
fn test_required_keyword_is_not_deleted() {
    let env = Env::new();
    env.cmd()
        .arg(&env.catalog)
        .write_stdin("list Hamza\ndel 0 runtime\nlist 3mins\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"runtime\" is required by /path/to/audio.ext"));
}

#[test]
fn test_unknown_command_keeps_prompt_alive() {
    let env = Env::new();
    env.cmd()
        .write_stdin("frobnicate\nhelp\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Command \"frobnicate\" not found -- see \"help\" for details.",
        ))
        .stdout(predicate::str::contains("Metadata Commands:"));
}

#[test]
fn test_autoload_from_config() {
    let env = Env::new();
    fs::write(
        env.temp.path().join("config").join("config.json"),
        format!("{{\"autoload\": [\"{}\"], \"prompt\": \"media> \"}}", env.catalog),
    )
    .unwrap();

    env.cmd()
        .write_stdin("list\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("media> "))
        .stdout(predicate::str::contains("/path/to/document.ext"));
}

#[test]
fn test_bad_config_fails_startup() {
    let env = Env::new();
    fs::write(env.temp.path().join("config").join("config.json"), "{ nope").unwrap();

    env.cmd()
        .write_stdin("quit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}
