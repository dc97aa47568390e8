//! CLI 集成测试
//!
//! 使用 assert_cmd 进行命令行集成测试

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// 创建临时测试环境
fn create_test_env() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// 在临时目录中写入 .env
fn write_env(dir: &TempDir, content: &str) {
    fs::write(dir.path().join(".env"), content).unwrap();
}

/// 在指定目录运行 envenc，用户配置目录指向临时目录
fn envenc(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("envenc").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("ENVENC_LOG")
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join(".config"));
    cmd
}

mod basic_commands {
    use super::*;

    #[test]
    fn test_help_command() {
        let dir = create_test_env();
        envenc(&dir)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("dokku"));
    }

    #[test]
    fn test_version_command() {
        let dir = create_test_env();
        envenc(&dir)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

mod encode_defaults {
    use super::*;

    #[test]
    fn test_scenario_two_entries() {
        let dir = create_test_env();
        write_env(&dir, "A=1\n#comment\nB=hello world\n");

        envenc(&dir).assert().success().stdout(
            "dokku config:set export-service-only --encoded A=MQ== B=aGVsbG8gd29ybGQ=\n",
        );
    }

    #[test]
    fn test_empty_file_exits_zero() {
        let dir = create_test_env();
        write_env(&dir, "");

        envenc(&dir)
            .assert()
            .success()
            .stdout("dokku config:set export-service-only --encoded \n");
    }

    #[test]
    fn test_plain_text_line_is_ignored() {
        let dir = create_test_env();
        write_env(&dir, "justtext\n");

        envenc(&dir)
            .assert()
            .success()
            .stdout("dokku config:set export-service-only --encoded \n")
            .stderr(predicate::str::is_empty());
    }

    #[test]
    fn test_first_equals_splits() {
        let dir = create_test_env();
        write_env(&dir, "KEY=value1=value2\n");

        // base64("value1=value2")
        envenc(&dir)
            .assert()
            .success()
            .stdout(predicate::str::contains("KEY=dmFsdWUxPXZhbHVlMg=="));
    }

    #[test]
    fn test_comments_never_leak() {
        let dir = create_test_env();
        write_env(&dir, "#SECRET=hunter2\nA=1\n");

        envenc(&dir)
            .assert()
            .success()
            .stdout(predicate::str::contains("SECRET").not());
    }
}

mod errors {
    use super::*;

    #[test]
    fn test_missing_input_fails() {
        let dir = create_test_env();

        envenc(&dir)
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains(".env"));
    }

    #[test]
    fn test_non_ascii_value_fails() {
        let dir = create_test_env();
        write_env(&dir, "GREETING=héllo\n");

        envenc(&dir)
            .assert()
            .failure()
            .stderr(predicate::str::contains("GREETING"));
    }

    #[test]
    fn test_latin1_value_fails_with_key_and_line() {
        let dir = create_test_env();
        fs::write(dir.path().join(".env"), b"A=1\nGREETING=h\xe9llo\n").unwrap();

        envenc(&dir)
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("GREETING"))
            .stderr(predicate::str::contains("第 2 行"))
            .stderr(predicate::str::contains("--utf8"));
    }

    #[test]
    fn test_missing_explicit_config_fails() {
        let dir = create_test_env();
        write_env(&dir, "A=1\n");

        envenc(&dir)
            .args(["--config", "missing.toml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("missing.toml"));
    }
}

mod configuration {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let dir = create_test_env();
        fs::write(dir.path().join("prod.env"), "A=1\n").unwrap();

        envenc(&dir)
            .args(["--file", "prod.env", "--app", "billing"])
            .assert()
            .success()
            .stdout("dokku config:set billing --encoded A=MQ==\n");
    }

    #[test]
    fn test_config_file_in_cwd() {
        let dir = create_test_env();
        fs::write(dir.path().join("staging.env"), "A=1\n").unwrap();
        fs::write(
            dir.path().join("envenc.toml"),
            "input_path = \"staging.env\"\napp_name = \"staging\"\n",
        )
        .unwrap();

        envenc(&dir)
            .assert()
            .success()
            .stdout("dokku config:set staging --encoded A=MQ==\n");
    }

    #[test]
    fn test_flag_beats_config_file() {
        let dir = create_test_env();
        write_env(&dir, "A=1\n");
        fs::write(dir.path().join("envenc.toml"), "app_name = \"staging\"\n").unwrap();

        envenc(&dir)
            .args(["-a", "prod"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("dokku config:set prod "));
    }

    #[test]
    fn test_utf8_flag() {
        let dir = create_test_env();
        write_env(&dir, "GREETING=héllo\n");

        // base64("héllo") as UTF-8
        envenc(&dir)
            .arg("--utf8")
            .assert()
            .success()
            .stdout(predicate::str::contains("GREETING=aMOpbGxv"));
    }

    #[test]
    fn test_utf8_flag_encodes_latin1_bytes() {
        let dir = create_test_env();
        fs::write(dir.path().join(".env"), b"GREETING=h\xe9llo\n").unwrap();

        // base64(b"h\xe9llo")
        envenc(&dir)
            .arg("--utf8")
            .assert()
            .success()
            .stdout("dokku config:set export-service-only --encoded GREETING=aOlsbG8=\n");
    }

    #[test]
    fn test_latin1_comment_is_ignored() {
        let dir = create_test_env();
        fs::write(dir.path().join(".env"), b"# caf\xe9\nA=1\n").unwrap();

        envenc(&dir)
            .assert()
            .success()
            .stdout("dokku config:set export-service-only --encoded A=MQ==\n");
    }

    #[test]
    fn test_user_config_dir_is_read() {
        let dir = create_test_env();
        write_env(&dir, "A=1\n");
        let user_dir = dir.path().join(".config").join("envenc");
        fs::create_dir_all(&user_dir).unwrap();
        fs::write(user_dir.join("config.toml"), "app_name = \"from-user\"\n").unwrap();

        let assert = envenc(&dir).assert().success();
        // dirs 在 Linux 上读取 XDG_CONFIG_HOME
        if cfg!(target_os = "linux") {
            assert.stdout("dokku config:set from-user --encoded A=MQ==\n");
        }
    }

    #[test]
    fn test_json_format() {
        let dir = create_test_env();
        write_env(&dir, "A=1\nB=2\n");

        let output = envenc(&dir)
            .args(["--format", "json"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["app_name"], "export-service-only");
        assert_eq!(value["entries"][0]["key"], "A");
        assert_eq!(value["entries"][0]["encoded"], "MQ==");
        assert_eq!(value["entries"][1]["key"], "B");
    }
}
