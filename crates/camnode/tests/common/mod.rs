//! Shared fixture: a fake video4linux registry plus a fake `v4l2-ctl`.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

pub const HIGH_RES: &str = "\t[0]: 'MJPG' (Motion-JPEG, compressed)\n\t\tSize: Discrete 3280x2464\n\t\t\tInterval: Discrete 0.040s (25.000 fps)\n";
pub const LOW_RES: &str = "\t[0]: 'YUYV' (YUYV 4:2:2)\n\t\tSize: Discrete 640x480\n";

pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        for sub in ["sys", "listings", "home", "bin"] {
            fs::create_dir_all(dir.path().join(sub)).expect("Failed to create fixture dir");
        }

        let tool = dir.path().join("bin").join("fake-v4l2-ctl");
        let listings = dir.path().join("listings");
        // Prints the listing stored for the device basename, fails otherwise
        fs::write(
            &tool,
            format!(
                "#!/bin/sh\n[ \"$1\" = \"--device\" ] && [ \"$3\" = \"--list-formats-ext\" ] || exit 2\necho 'failing loudly' >&2\ncat \"{}/$(basename \"$2\")\" 2>/dev/null || exit 1\n",
                listings.display()
            ),
        )
        .expect("Failed to write fake tool");
        fs::set_permissions(&tool, fs::Permissions::from_mode(0o755))
            .expect("Failed to mark fake tool executable");

        Self { dir }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    pub fn registry_root(&self) -> PathBuf {
        self.dir.path().join("sys")
    }

    pub fn tool(&self) -> PathBuf {
        self.dir.path().join("bin").join("fake-v4l2-ctl")
    }

    /// Add `/sys/.../<id>/name` and, if given, the listing the tool prints for it.
    pub fn add_node(&self, id: &str, name: &str, listing: Option<&str>) -> &Self {
        let node = self.registry_root().join(id);
        fs::create_dir_all(&node).expect("Failed to create node dir");
        fs::write(node.join("name"), format!("{name}\n")).expect("Failed to write name");
        if let Some(listing) = listing {
            fs::write(self.dir.path().join("listings").join(id), listing)
                .expect("Failed to write listing");
        }
        self
    }

    pub fn write_project_config(&self, content: &str) {
        let config_dir = self.dir.path().join(".camnode");
        fs::create_dir_all(&config_dir).expect("Failed to create .camnode dir");
        fs::write(config_dir.join("config.toml"), content).expect("Failed to write config");
    }

    /// `camnode` running inside the fixture with an isolated HOME and no log overrides.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_camnode"));
        cmd.current_dir(self.dir.path())
            .env("HOME", self.dir.path().join("home"))
            .env_remove("RUST_LOG")
            .env_remove("CAMNODE_LOG");
        cmd
    }

    /// `camnode` with registry and tool pointed at the fixture.
    pub fn run(&self, args: &[&str]) -> Output {
        self.command()
            .arg("--registry-root")
            .arg(self.registry_root())
            .arg("--dev-dir")
            .arg("/dev")
            .arg("--tool")
            .arg(self.tool())
            .args(args)
            .output()
            .expect("Failed to execute camnode")
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
