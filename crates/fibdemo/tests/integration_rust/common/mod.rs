use std::process::{Command, Output};

/// Runs the compiled `fibdemo` binary with `args`, isolated from the
/// environment variables that would change its behavior.
pub fn fibdemo(args: &[&str]) -> Output {
    fibdemo_with_env(args, &[])
}

/// Like [`fibdemo`], but sets `envs` on top of the isolated environment.
pub fn fibdemo_with_env(args: &[&str], envs: &[(&str, &str)]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fibdemo"))
        .args(args)
        .env_remove("FIBDEMO_INDEX")
        .env_remove("FIBDEMO_METRIC")
        .env_remove("FIBDEMO_NO_COMPARE")
        .env_remove("FIBDEMO_COLOR")
        .env_remove("FORCE_COLOR")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .envs(envs.iter().copied())
        .output()
        .expect("failed to spawn fibdemo")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
