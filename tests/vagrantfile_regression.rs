//! Regression tests for the rendered Vagrantfile
//!
//! The artifact is consumed verbatim by Vagrant, so these tests pin the
//! full output rather than sampling individual directives.

use std::path::PathBuf;

use pretty_assertions::assert_eq;

use mindboggle_vagrant::{render, Settings};

fn full_settings() -> Settings {
    Settings {
        out: PathBuf::from("/srv/out"),
        work: PathBuf::from("/srv/work"),
        cache: PathBuf::from("/srv/cache"),
        freesurfer: PathBuf::from("/data/subjects"),
        ants: Some(PathBuf::from("/data/ants")),
        atlases: Some(PathBuf::from("/data/atlases")),
        cpus: 6,
        cpumax: 80,
        mem: 4096,
    }
}

#[test]
fn test_full_vagrantfile_snapshot() {
    let text = render(&full_settings());
    insta::assert_snapshot!(text, @r#"
# -*- mode: ruby -*-
# vi: set ft=ruby :

VAGRANTFILE_API_VERSION = "2"

Vagrant.configure(VAGRANTFILE_API_VERSION) do |config|
    config.vm.box = "mindboggle"
    config.vm.box_url = "http://mindboggle.info/vm/mindboggle.box"
    config.vm.provision "shell", privileged: false, inline: "echo 'Welcome to the Mindboggle virtual machine'"
    config.vm.synced_folder "/srv/out", "/home/vagrant/mindboggled"
    config.vm.synced_folder "/srv/work", "/home/vagrant/mindboggle_working"
    config.vm.synced_folder "/srv/cache", "/home/vagrant/mindboggle_cache"
    config.vm.synced_folder "/data/subjects", "/home/vagrant/freesurfer_subjects"
    config.vm.synced_folder "/data/ants", "/home/vagrant/ants_subjects"
    config.vm.synced_folder "/data/atlases", "/home/vagrant/atlases"
    config.vm.provider "virtualbox" do |vb|
        vb.customize ["modifyvm", :id, "--cpus", "6"]
        vb.customize ["modifyvm", :id, "--cpuexecutioncap", "80"]
        vb.customize ["modifyvm", :id, "--memory", "4096"]
    end
    config.vm.network "forwarded_port", guest: 8888, host: 8888
    config.ssh.username = "vagrant"
    config.ssh.password = "vagrant"
end
"#);
}

#[test]
fn test_minimal_vagrantfile_exact() {
    let settings = Settings {
        out: PathBuf::from("/home/arno/mindboggled"),
        work: PathBuf::from("/home/arno/mindboggle_working"),
        cache: PathBuf::from("/home/arno/mindboggle_cache"),
        freesurfer: PathBuf::from("/data/subjects"),
        ants: None,
        atlases: None,
        cpus: 1,
        cpumax: 80,
        mem: 4096,
    };

    let expected = concat!(
        "# -*- mode: ruby -*-\n",
        "# vi: set ft=ruby :\n",
        "\n",
        "VAGRANTFILE_API_VERSION = \"2\"\n",
        "\n",
        "Vagrant.configure(VAGRANTFILE_API_VERSION) do |config|\n",
        "    config.vm.box = \"mindboggle\"\n",
        "    config.vm.box_url = \"http://mindboggle.info/vm/mindboggle.box\"\n",
        "    config.vm.provision \"shell\", privileged: false, inline: \"echo 'Welcome to the Mindboggle virtual machine'\"\n",
        "    config.vm.synced_folder \"/home/arno/mindboggled\", \"/home/vagrant/mindboggled\"\n",
        "    config.vm.synced_folder \"/home/arno/mindboggle_working\", \"/home/vagrant/mindboggle_working\"\n",
        "    config.vm.synced_folder \"/home/arno/mindboggle_cache\", \"/home/vagrant/mindboggle_cache\"\n",
        "    config.vm.synced_folder \"/data/subjects\", \"/home/vagrant/freesurfer_subjects\"\n",
        "    config.vm.provider \"virtualbox\" do |vb|\n",
        "        vb.customize [\"modifyvm\", :id, \"--cpus\", \"1\"]\n",
        "        vb.customize [\"modifyvm\", :id, \"--cpuexecutioncap\", \"80\"]\n",
        "        vb.customize [\"modifyvm\", :id, \"--memory\", \"4096\"]\n",
        "    end\n",
        "    config.vm.network \"forwarded_port\", guest: 8888, host: 8888\n",
        "    config.ssh.username = \"vagrant\"\n",
        "    config.ssh.password = \"vagrant\"\n",
        "end\n",
    );

    assert_eq!(render(&settings), expected);
}

#[test]
fn test_optional_mounts_toggle_one_directive_each() {
    let mut settings = full_settings();
    let with_both = render(&settings);
    assert_eq!(with_both.matches("ants_subjects").count(), 1);
    assert_eq!(with_both.matches("/home/vagrant/atlases").count(), 1);

    settings.ants = None;
    settings.atlases = None;
    let without = render(&settings);
    assert!(!without.contains("ants_subjects"));
    assert!(!without.contains("/home/vagrant/atlases"));
}

#[test]
fn test_host_path_changes_leave_guest_side_constant() {
    let mut settings = full_settings();
    let before = render(&settings);
    settings.out = PathBuf::from("/elsewhere");
    let after = render(&settings);

    assert!(before.contains("\"/srv/out\", \"/home/vagrant/mindboggled\""));
    assert!(after.contains("\"/elsewhere\", \"/home/vagrant/mindboggled\""));
    // Same number of mount directives either way
    assert_eq!(
        before.matches("synced_folder").count(),
        after.matches("synced_folder").count()
    );
}
