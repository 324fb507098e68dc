//! CLI definitions and command routing.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::entry::HostsEntry;
use crate::hosts::Hosts;
use crate::platform;
use crate::validate::{is_ipv4, is_ipv6, valid_hostnames};

#[derive(Parser)]
#[command(name = "hostctl")]
#[command(about = "Manage hosts-file entries with conflict-aware add/remove")]
pub struct Cli {
    /// Hosts file to operate on (default: the platform hosts file)
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add an address-to-names mapping; rejected on conflict unless --force
    Add {
        address: String,
        #[arg(num_args = 1..)]
        names: Vec<String>,
        /// Remove conflicting entries before adding
        #[arg(long)]
        force: bool,
    },

    /// Add one raw hosts-file line (mapping, comment or blank)
    AddLine {
        line: String,
        /// Remove conflicting entries before adding
        #[arg(long)]
        force: bool,
    },

    /// Remove entries matching an address and names, or a comment
    Remove {
        /// Address of the mapping to match
        address: Option<String>,
        /// Hostnames to match
        names: Vec<String>,
        /// Remove the comment line with exactly this text (leading '#' included)
        #[arg(long, conflicts_with_all = ["address", "names"])]
        comment: Option<String>,
    },

    /// Report address/name/comment match counts for a prospective mapping
    Check {
        address: String,
        #[arg(num_args = 1..)]
        names: Vec<String>,
    },

    /// Print all entries in file order
    List {
        /// Emit entries as JSON instead of hosts-file lines
        #[arg(long)]
        json: bool,
    },
}

/// Run CLI and dispatch to handlers.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let path = cli.file.unwrap_or_else(platform::hosts_path);

    match cli.command {
        Commands::Add {
            address,
            names,
            force,
        } => cmd_add(&path, &address, &names, force),
        Commands::AddLine { line, force } => cmd_add_line(&path, &line, force),
        Commands::Remove {
            address,
            names,
            comment,
        } => cmd_remove(&path, address.as_deref(), &names, comment.as_deref()),
        Commands::Check { address, names } => cmd_check(&path, &address, &names),
        Commands::List { json } => cmd_list(&path, json),
    }
}

/// Build an address entry, picking the family from the address syntax.
fn mapping_entry(address: &str, names: &[String]) -> Result<HostsEntry> {
    if !valid_hostnames(names) {
        anyhow::bail!("invalid hostname(s): {}", names.join(" "));
    }
    let entry = if is_ipv4(address) {
        HostsEntry::ipv4(address, names.to_vec())?
    } else if is_ipv6(address) {
        HostsEntry::ipv6(address, names.to_vec())?
    } else {
        anyhow::bail!("'{address}' is not a valid IPv4 or IPv6 address");
    };
    Ok(entry)
}

fn cmd_add(path: &Path, address: &str, names: &[String], force: bool) -> Result<()> {
    let entry = mapping_entry(address, names)?;
    let mut hosts = Hosts::from_path(path)?;
    if hosts.add(entry, force)? {
        println!("Added {address} -> {}", names.join(" "));
    } else {
        println!("Not added: conflicting entry exists (use --force to replace)");
    }
    Ok(())
}

fn cmd_add_line(path: &Path, line: &str, force: bool) -> Result<()> {
    let mut hosts = Hosts::from_path(path)?;
    if hosts.add_line(line, force)? {
        println!("Added line: {line}");
    } else {
        println!("Not added: conflicting entry exists (use --force to replace)");
    }
    Ok(())
}

fn cmd_remove(
    path: &Path,
    address: Option<&str>,
    names: &[String],
    comment: Option<&str>,
) -> Result<()> {
    let probe = match (comment, address) {
        (Some(text), _) => HostsEntry::comment(text)?,
        (None, Some(address)) if !names.is_empty() => mapping_entry(address, names)?,
        _ => anyhow::bail!("specify an address with at least one name, or --comment"),
    };
    let mut hosts = Hosts::from_path(path)?;
    if hosts.remove(&probe)? {
        println!("Removed matching entries");
    } else {
        println!("No matching entry");
    }
    Ok(())
}

fn cmd_check(path: &Path, address: &str, names: &[String]) -> Result<()> {
    let entry = mapping_entry(address, names)?;
    let hosts = Hosts::from_path(path)?;
    let counts = hosts.count(&entry);
    println!("address matches: {}", counts.address_matches);
    println!("name matches: {}", counts.name_matches);
    println!("comment matches: {}", counts.comment_matches);
    Ok(())
}

fn cmd_list(path: &Path, json: bool) -> Result<()> {
    let hosts = Hosts::from_path(path)?;
    if json {
        println!("{}", serde_json::to_string_pretty(hosts.entries())?);
    } else {
        for entry in hosts.entries() {
            println!("{entry}");
        }
    }
    Ok(())
}
