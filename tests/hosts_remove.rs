//! Remove semantics: union of address/name/comment checks.

mod common;

use hostctl::entry::HostsEntry;
use hostctl::hosts::Hosts;
use std::fs;

#[test]
fn removes_on_address_match_with_disjoint_names() {
    let dir = common::temp_dir();
    let path = common::hosts_fixture(&dir, "127.0.0.1\tlocalhost\n");
    let mut hosts = Hosts::from_path(&path).unwrap();

    let probe = HostsEntry::ipv4("127.0.0.1", vec!["foo".into()]).unwrap();
    assert!(hosts.remove(&probe).unwrap());
    assert!(hosts.entries().is_empty());
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn removes_on_name_intersection() {
    let dir = common::temp_dir();
    let path = common::hosts_fixture(&dir, "10.0.0.1\tapp.test app.local\n");
    let mut hosts = Hosts::from_path(&path).unwrap();

    let probe = HostsEntry::ipv4("10.9.9.9", vec!["app.local".into()]).unwrap();
    assert!(hosts.remove(&probe).unwrap());
    assert!(hosts.entries().is_empty());
}

#[test]
fn removes_all_matches_preserving_order() {
    let dir = common::temp_dir();
    let path = common::hosts_fixture(
        &dir,
        "10.0.0.1\ta.test\n# note\n10.0.0.1\tb.test\n127.0.0.1\tlocalhost\n",
    );
    let mut hosts = Hosts::from_path(&path).unwrap();

    let probe = HostsEntry::ipv4("10.0.0.1", vec!["zzz.test".into()]).unwrap();
    assert!(hosts.remove(&probe).unwrap());
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "# note\n127.0.0.1\tlocalhost\n"
    );
}

#[test]
fn removes_comment_by_exact_text() {
    let dir = common::temp_dir();
    let path = common::hosts_fixture(&dir, "# decommissioned\n127.0.0.1\tlocalhost\n");
    let mut hosts = Hosts::from_path(&path).unwrap();

    let probe = HostsEntry::comment("# decommissioned").unwrap();
    assert!(hosts.remove(&probe).unwrap());
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "127.0.0.1\tlocalhost\n"
    );
}

#[test]
fn comment_probe_leaves_mappings_alone() {
    let dir = common::temp_dir();
    let path = common::hosts_fixture(&dir, "127.0.0.1\tlocalhost\n");
    let mut hosts = Hosts::from_path(&path).unwrap();

    let probe = HostsEntry::comment("# localhost").unwrap();
    assert!(!hosts.remove(&probe).unwrap());
    assert_eq!(hosts.entries().len(), 1);
}

#[test]
fn missing_entry_returns_false() {
    let dir = common::temp_dir();
    let path = common::hosts_fixture(&dir, "127.0.0.1\tlocalhost\n");
    let mut hosts = Hosts::from_path(&path).unwrap();

    let probe = HostsEntry::ipv4("10.0.0.1", vec!["nothere.test".into()]).unwrap();
    assert!(!hosts.remove(&probe).unwrap());
    assert_eq!(hosts.entries().len(), 1);
}

#[test]
fn removes_on_identical_name_list() {
    let dir = common::temp_dir();
    let path = common::hosts_fixture(&dir, "::1\tapp.test\n");
    let mut hosts = Hosts::from_path(&path).unwrap();

    let probe = HostsEntry::ipv6("fe80::2", vec!["app.test".into()]).unwrap();
    assert!(hosts.remove(&probe).unwrap());
    assert!(hosts.entries().is_empty());
}
