//! E2E tests for `wsmirror push`

mod common;

use common::TestEnv;

#[test]
fn push_with_missing_settings_fails() {
    let env = TestEnv::new();
    env.write_config(&format!(
        "remote_host = \"example.org\"\nlocal_base_dir = '{}'\nfolders_to_sync = ['{}']\n",
        env.root.display(),
        env.path("src").display()
    ));
    let file = env.write_file("src/main.rs", "");

    let result = env.run(&["push", file.to_str().unwrap()]);
    assert!(!result.success);
    assert!(
        result
            .stderr
            .contains("missing required settings: remote_user, remote_base_dir, timeout"),
        "stderr: {}",
        result.stderr
    );
    assert!(result.stderr.contains("File not synced"));
}

#[test]
fn push_without_config_file_points_to_init() {
    let env = TestEnv::new();
    let missing = env.path("nope/config.toml");

    let output = env
        .command_with_config(&missing, &["push", "src/main.rs"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("wsmirror init"), "stderr: {stderr}");
}

#[test]
fn push_of_excluded_file_is_skipped_and_fails() {
    let env = TestEnv::new();
    let file = env.write_file("src/secret/token.txt", "x");

    let result = env.run(&["push", file.to_str().unwrap()]);
    assert!(!result.success);
    assert!(
        result.stdout.contains("excluded by pattern 'secret'"),
        "{}",
        result.combined_output()
    );
    assert!(env.scp_calls().is_empty());
}

#[cfg(unix)]
#[test]
fn push_runs_scp_with_remote_destination() {
    let env = TestEnv::new();
    env.install_fake_scp(0, "");
    let file = env.write_file("src/nested/lib.rs", "pub fn f() {}\n");

    let result = env.run(&["push", file.to_str().unwrap()]);
    assert!(result.success, "{}", result.combined_output());

    let calls = env.scp_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0],
        format!(
            "{} deploy@example.org:/srv/app/src/nested/lib.rs",
            file.display()
        )
    );
    assert!(result.stdout.contains("Synced"), "{}", result.stdout);
    assert!(result.stdout.contains("wsmirror push"), "{}", result.stdout);
    assert!(result.stdout.contains("Pushed 1 file(s)"), "{}", result.stdout);
}

#[cfg(unix)]
#[test]
fn push_force_ignores_filter() {
    let env = TestEnv::new();
    env.install_fake_scp(0, "");
    let file = env.write_file("docs/notes.log", "x");

    let result = env.run(&["push", "--force", file.to_str().unwrap()]);
    assert!(result.success, "{}", result.combined_output());
    assert_eq!(env.scp_calls().len(), 1);
    assert!(env.scp_calls()[0].ends_with("deploy@example.org:/srv/app/docs/notes.log"));
}

#[cfg(unix)]
#[test]
fn push_failure_shows_scp_output() {
    let env = TestEnv::new();
    env.install_fake_scp(1, "lost connection");
    let file = env.write_file("src/main.rs", "");

    let result = env.run(&["push", file.to_str().unwrap()]);
    assert!(!result.success);
    assert!(result.stderr.contains("File not synced"), "{}", result.stderr);
    assert!(result.stderr.contains("lost connection"), "{}", result.stderr);
    assert!(
        result.stdout.contains("Pushed 0 of 1 file(s), 1 not synced"),
        "{}",
        result.stdout
    );
}

#[cfg(unix)]
#[test]
fn push_json_emits_transfer_events() {
    let env = TestEnv::new();
    env.install_fake_scp(0, "");
    let file = env.write_file("src/a.rs", "");

    let result = env.run(&["push", "--json", file.to_str().unwrap()]);
    assert!(result.success, "{}", result.combined_output());

    let events = common::json_lines(&result.stdout);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["event"], "transfer_succeeded");
    assert_eq!(events[0]["command"], "push");
    assert_eq!(events[0]["destination"], "deploy@example.org:/srv/app/src/a.rs");
}

#[cfg(unix)]
#[test]
fn disabled_config_blocks_push_without_force() {
    let env = TestEnv::new();
    env.install_fake_scp(0, "");
    env.write_config(&format!("{}enabled = false\n", env.default_config()));
    let file = env.write_file("src/a.rs", "");

    let result = env.run(&["push", file.to_str().unwrap()]);
    assert!(!result.success);
    assert!(env.scp_calls().is_empty());

    let result = env.run(&["push", "--force", file.to_str().unwrap()]);
    assert!(result.success, "{}", result.combined_output());
    assert_eq!(env.scp_calls().len(), 1);
}

#[cfg(unix)]
#[test]
fn password_file_wraps_scp_with_sshpass() {
    let env = TestEnv::new();
    env.install_fake_sshpass();
    let password = env.write_file("password", "hunter2\n");
    env.write_config(&format!(
        "{}password_file = '{}'\n",
        env.default_config(),
        password.display()
    ));
    let file = env.write_file("src/a.rs", "");

    let result = env.run(&["push", file.to_str().unwrap()]);
    assert!(result.success, "{}", result.combined_output());
    assert_eq!(
        env.scp_calls(),
        vec![format!(
            "sshpass -f {} scp {} deploy@example.org:/srv/app/src/a.rs",
            password.display(),
            file.display()
        )]
    );
}
