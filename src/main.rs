use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use treeparse::{parse_tree, ParseOptions, Registry};

const LONG_HELP: &str = "\
MODS
    --mods prints one 'mod group' pair per line:

        11111 001
        22222
        33333 002

    The first column is the mod id, the second the id of the group the mod
    belongs to (blank when the mod is not in a group). Results are not
    sorted; pipe through `sort` if needed.

TAGGING ENDS
    Group start tags carry an id, end tags do not, so every end tag looks
    the same. --tag-ends echoes the tree with each end tag appended with
    the id of the group it closes:

        group 001
        [ ] 11111 Some mod.
        end 001

    This makes group spans extractable, e.g.:

        treeparse --tag-ends tree.txt | awk '/group 001/,/end 001/'

ROOT ID
    --root-id prints the id of the root group of a group. A root group is
    one not contained in any other group; the root id of a root group is
    its own id.";

/// Parse dependency tree files: list mods, tag group ends, resolve root
/// groups.
#[derive(Parser)]
#[command(name = "treeparse", version, after_long_help = LONG_HELP)]
struct Cli {
    /// Tree files to parse; reads stdin when none are given
    files: Vec<PathBuf>,

    /// Echo input with end tags appended with their group id
    #[arg(short = 'e', long)]
    tag_ends: bool,

    /// Print a list of 'mod group' pairs
    #[arg(short, long)]
    mods: bool,

    /// Print the id of the root group of this group
    #[arg(short, long, value_name = "ID")]
    root_id: Option<u32>,

    /// Dump the merged registry as JSON
    #[arg(long)]
    json: bool,

    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    let options = ParseOptions {
        tag_ends: cli.tag_ends,
        ..ParseOptions::default()
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut registry = Registry::new();

    if cli.files.is_empty() {
        let stdin = io::stdin();
        let sink: Option<&mut dyn Write> = cli.tag_ends.then_some(&mut out as &mut dyn Write);
        let parsed = parse_tree(stdin.lock(), sink, &options).context("failed to parse stdin")?;
        registry.merge(parsed);
    } else {
        for path in &cli.files {
            let file =
                File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
            let sink: Option<&mut dyn Write> = cli.tag_ends.then_some(&mut out as &mut dyn Write);
            let parsed = parse_tree(BufReader::new(file), sink, &options)
                .with_context(|| format!("failed to parse {}", path.display()))?;
            registry.merge(parsed);
        }
    }

    if let Some(id) = cli.root_id {
        match registry.root_id(id) {
            Some(root) => writeln!(out, "{root:03}")?,
            None => bail!("group {id:03} not found in trees"),
        }
    }

    if cli.mods {
        for (mod_id, group_id) in registry.mod_pairs() {
            match group_id {
                Some(gid) => writeln!(out, "{mod_id:05} {gid:03}")?,
                None => writeln!(out, "{mod_id:05}")?,
            }
        }
    }

    if cli.json {
        serde_json::to_writer_pretty(&mut out, &registry)?;
        writeln!(out)?;
    }

    Ok(())
}
