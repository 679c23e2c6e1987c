//! Vagrantfile generation from resolved settings
//!
//! This module takes a [`Settings`] record and produces the Vagrantfile
//! text consumed by Vagrant. The directive keywords, guest-side mount
//! points, box location, and credentials are fixed; only host paths and
//! the three resource numbers vary with user input.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::settings::Settings;

/// Name of the generated artifact
pub const VAGRANTFILE_NAME: &str = "Vagrantfile";

/// Guest-side mount point for Mindboggle output
pub const GUEST_OUT: &str = "/home/vagrant/mindboggled";
/// Guest-side mount point for intermediate working files
pub const GUEST_WORK: &str = "/home/vagrant/mindboggle_working";
/// Guest-side mount point for downloaded data
pub const GUEST_CACHE: &str = "/home/vagrant/mindboggle_cache";
/// Guest-side mount point for the FreeSurfer subjects directory
pub const GUEST_FREESURFER: &str = "/home/vagrant/freesurfer_subjects";
/// Guest-side mount point for the ANTs subjects directory
pub const GUEST_ANTS: &str = "/home/vagrant/ants_subjects";
/// Guest-side mount point for the extra atlases directory
pub const GUEST_ATLASES: &str = "/home/vagrant/atlases";

const BOX_NAME: &str = "mindboggle";
const BOX_URL: &str = "http://mindboggle.info/vm/mindboggle.box";
const WELCOME: &str = "Welcome to the Mindboggle virtual machine";
const NOTEBOOK_PORT: u16 = 8888;

/// Build the Vagrantfile incrementally, one directive at a time
struct VagrantfileBuilder {
    lines: Vec<String>,
}

impl VagrantfileBuilder {
    fn new() -> Self {
        Self { lines: Vec::new() }
    }

    fn line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    /// Add a synced-folder directive pairing a host path with its guest
    /// mount point
    fn synced_folder(&mut self, host: &Path, guest: &str) {
        self.lines.push(format!(
            r#"    config.vm.synced_folder "{}", "{}""#,
            host.display(),
            guest
        ));
    }

    fn finish(self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

/// Render the Vagrant configuration for `settings`.
///
/// Pure and deterministic: identical settings produce byte-identical
/// output. Optional directories that are absent produce no directive at
/// all rather than an empty placeholder.
pub fn render(settings: &Settings) -> String {
    let mut b = VagrantfileBuilder::new();

    b.line("# -*- mode: ruby -*-");
    b.line("# vi: set ft=ruby :");
    b.line("");
    b.line(r#"VAGRANTFILE_API_VERSION = "2""#);
    b.line("");
    b.line("Vagrant.configure(VAGRANTFILE_API_VERSION) do |config|");
    b.line(format!(r#"    config.vm.box = "{}""#, BOX_NAME));
    b.line(format!(r#"    config.vm.box_url = "{}""#, BOX_URL));
    b.line(format!(
        r#"    config.vm.provision "shell", privileged: false, inline: "echo '{}'""#,
        WELCOME
    ));

    b.synced_folder(&settings.out, GUEST_OUT);
    b.synced_folder(&settings.work, GUEST_WORK);
    b.synced_folder(&settings.cache, GUEST_CACHE);
    b.synced_folder(&settings.freesurfer, GUEST_FREESURFER);
    if let Some(ants) = &settings.ants {
        b.synced_folder(ants, GUEST_ANTS);
    }
    if let Some(atlases) = &settings.atlases {
        b.synced_folder(atlases, GUEST_ATLASES);
    }

    b.line(r#"    config.vm.provider "virtualbox" do |vb|"#);
    b.line(format!(
        r#"        vb.customize ["modifyvm", :id, "--cpus", "{}"]"#,
        settings.cpus
    ));
    b.line(format!(
        r#"        vb.customize ["modifyvm", :id, "--cpuexecutioncap", "{}"]"#,
        settings.cpumax
    ));
    b.line(format!(
        r#"        vb.customize ["modifyvm", :id, "--memory", "{}"]"#,
        settings.mem
    ));
    b.line("    end");
    b.line(format!(
        r#"    config.vm.network "forwarded_port", guest: {}, host: {}"#,
        NOTEBOOK_PORT, NOTEBOOK_PORT
    ));
    b.line(r#"    config.ssh.username = "vagrant""#);
    b.line(r#"    config.ssh.password = "vagrant""#);
    b.line("end");

    b.finish()
}

/// Render and write the Vagrantfile into `dir`.
///
/// The file is written in full, truncating any previous version, so
/// regeneration never leaves stale directives behind. Returns the path of
/// the written file.
pub fn write(settings: &Settings, dir: &Path) -> io::Result<PathBuf> {
    let path = dir.join(VAGRANTFILE_NAME);
    fs::write(&path, render(settings))?;
    log::info!("wrote {}", path.display());
    Ok(path)
}
