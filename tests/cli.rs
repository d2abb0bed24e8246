//
//  tweet-poster
//  tests/cli.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use assert_cmd::Command;
use predicates::prelude::*;

fn tweet() -> Command {
    let mut cmd = Command::cargo_bin("tweet").unwrap();
    cmd.env_remove("TWEET_DEBUG")
        .env("TWITTER_ACCESS_TOKEN", "access-token")
        .env("TWITTER_ACCESS_TOKEN_SECRET", "access-secret")
        .env("TWITTER_CONSUMER_KEY", "consumer-key")
        .env("TWITTER_CONSUMER_SECRET", "consumer-secret");
    cmd
}

#[test]
fn test_version_command() {
    tweet()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(tweet_poster::VERSION));
}

#[test]
fn test_post_rejects_unknown_api_version() {
    tweet()
        .args(["post", "hello", "--api-version", "3"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid API version '3'"));
}

#[test]
fn test_post_requires_credentials() {
    Command::cargo_bin("tweet")
        .unwrap()
        .env_remove("TWITTER_ACCESS_TOKEN")
        .env_remove("TWITTER_ACCESS_TOKEN_SECRET")
        .env_remove("TWITTER_CONSUMER_KEY")
        .env_remove("TWITTER_CONSUMER_SECRET")
        .args(["post", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--access-token"));
}

#[cfg(target_os = "linux")]
mod with_config_home {
    use super::*;
    use mockito::Matcher;
    use std::path::Path;

    fn write_config(home: &Path, body: &str) {
        let dir = home.join("tweet");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("config.toml"), body).unwrap();
    }

    #[test]
    fn test_config_set_then_get() {
        let home = tempfile::tempdir().unwrap();

        tweet()
            .env("XDG_CONFIG_HOME", home.path())
            .args(["config", "set", "version", "v2"])
            .assert()
            .success();

        tweet()
            .env("XDG_CONFIG_HOME", home.path())
            .args(["config", "get", "version"])
            .assert()
            .success()
            .stdout("2\n");
    }

    #[test]
    fn test_config_set_rejects_invalid_version() {
        let home = tempfile::tempdir().unwrap();

        tweet()
            .env("XDG_CONFIG_HOME", home.path())
            .args(["config", "set", "version", "5"])
            .assert()
            .failure()
            .code(2);

        assert!(!home.path().join("tweet").join("config.toml").exists());
    }

    #[test]
    fn test_post_v2_against_configured_endpoint() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/2/tweets")
            .match_body(Matcher::Json(serde_json::json!({"text": "hello"})))
            .with_status(201)
            .with_body(r#"{"data":{"id":"123","text":"hello"}}"#)
            .create();

        let home = tempfile::tempdir().unwrap();
        write_config(
            home.path(),
            &format!("[api]\nversion = \"2\"\ntweets_base_url = \"{}/2\"\n", server.url()),
        );

        tweet()
            .env("XDG_CONFIG_HOME", home.path())
            .args(["post", "hello"])
            .assert()
            .success()
            .stdout(predicate::str::contains(r#"{"id":"123","text":"hello"}"#));

        mock.assert();
    }

    #[test]
    fn test_api_version_flag_overrides_bad_config_version() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/2/tweets")
            .with_status(201)
            .with_body(r#"{"data":{"id":"7","text":"hello"}}"#)
            .create();

        let home = tempfile::tempdir().unwrap();
        write_config(
            home.path(),
            &format!("[api]\nversion = \"3\"\ntweets_base_url = \"{}/2\"\n", server.url()),
        );

        tweet()
            .env("XDG_CONFIG_HOME", home.path())
            .args(["post", "hello", "--api-version", "2"])
            .assert()
            .success()
            .stdout(predicate::str::contains(r#"{"id":"7","text":"hello"}"#));

        mock.assert();
    }

    #[test]
    fn test_bad_config_version_without_flag_is_usage_error() {
        let home = tempfile::tempdir().unwrap();
        write_config(home.path(), "[api]\nversion = \"3\"\n");

        tweet()
            .env("XDG_CONFIG_HOME", home.path())
            .args(["post", "hello"])
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("Invalid API version '3'"));
    }

    #[test]
    fn test_post_rate_limited_exit_code() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", "/2/tweets")
            .with_status(429)
            .with_body(r#"{"status":429,"title":"Too Many Requests","detail":"rate limited"}"#)
            .create();

        let home = tempfile::tempdir().unwrap();
        write_config(
            home.path(),
            &format!("[api]\ntweets_base_url = \"{}/2\"\n", server.url()),
        );

        tweet()
            .env("XDG_CONFIG_HOME", home.path())
            .args(["post", "hello", "--api-version", "2"])
            .assert()
            .failure()
            .code(32)
            .stderr(predicate::str::contains(
                "API Too Many Requests error 429 : rate limited",
            ));
    }

    #[test]
    fn test_post_v1_prints_raw_body() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/1.1/statuses/update.json")
            .match_body(Matcher::Exact("status=hello".to_string()))
            .with_body("raw v1 body")
            .create();

        let home = tempfile::tempdir().unwrap();
        write_config(
            home.path(),
            &format!("[api]\nlegacy_base_url = \"{}/1.1\"\n", server.url()),
        );

        tweet()
            .env("XDG_CONFIG_HOME", home.path())
            .args(["post", "hello"])
            .assert()
            .success()
            .stdout("raw v1 body\n");

        mock.assert();
    }
}
