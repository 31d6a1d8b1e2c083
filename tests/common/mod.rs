use assert_cmd::Command;

pub fn vent_cmd() -> Command {
    let mut cmd = Command::cargo_bin("vent").unwrap();
    cmd.env_remove("VENT_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}
