//! ds2html - render a data sources CSV table as an HTML page

#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::path::{Path, PathBuf};

#[cfg(feature = "cli")]
use anyhow::{bail, Context, Result};
#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "cli")]
use tracing::{error, info, warn};
#[cfg(feature = "cli")]
use tracing_subscriber::EnvFilter;

#[cfg(feature = "cli")]
use srctable::{
    core::config::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR},
    data::profiles::{lookup_profile, profile_names},
    diagnostics::{check_table, format_diagnostics},
    read_table, render_table_with_template, ColumnMerge, DatasetConfig, DocumentTemplate,
    LinkRuleTable, ResolveOptions,
};

#[cfg(feature = "cli")]
#[derive(Parser, Debug)]
#[command(name = "ds2html")]
#[command(version)]
#[command(about = "Convert a data sources table CSV to HTML", long_about = None)]
struct Cli {
    /// Dataset name, selects the header width profile (e.g. MaizeMine)
    #[arg(required_unless_present = "list_profiles")]
    mine: Option<String>,

    /// Dataset version, e.g. 1.6
    #[arg(
        id = "mine_version",
        value_name = "VERSION",
        required_unless_present = "list_profiles"
    )]
    mine_version: Option<String>,

    /// Input CSV (default: <input-dir>/<MINE>_v<VERSION>_Data_Sources.csv)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output HTML (default: <output-dir>/dataSourcesTable_<MINE>_v<VERSION>.html)
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(long, default_value = DEFAULT_INPUT_DIR)]
    input_dir: PathBuf,

    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Comma-separated header widths, overriding the dataset profile
    #[arg(long, value_delimiter = ',')]
    widths: Option<Vec<String>>,

    /// Link rule table (TOML or JSON) replacing the built-in catalog
    #[arg(long)]
    links: Option<PathBuf>,

    /// Render without any link rules
    #[arg(long, conflicts_with = "links")]
    no_links: bool,

    /// Which columns may merge horizontally
    #[arg(long, value_enum, default_value_t = ColumnMergeArg::SkipCategory)]
    column_merge: ColumnMergeArg,

    /// Keep runs of empty cells separate
    #[arg(long)]
    no_blank_merge: bool,

    /// Emit the table only, without the page around it
    #[arg(long)]
    fragment: bool,

    /// Check the table for problems without rendering
    #[arg(long)]
    check: bool,

    /// Refuse to render when the check reports errors or warnings
    #[arg(long)]
    strict: bool,

    /// Write the page to stdout instead of a file
    #[arg(long, conflicts_with = "output")]
    stdout: bool,

    /// Use colored output (for check mode)
    #[arg(long, default_value_t = false)]
    color: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,

    /// List the registered width profiles and exit
    #[arg(long)]
    list_profiles: bool,
}

#[cfg(feature = "cli")]
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum ColumnMergeArg {
    /// Columns 0 and 1 never continue a horizontal merge
    SkipCategory,
    /// Every column after the first may continue a horizontal merge
    All,
    /// No horizontal merging
    Off,
}

#[cfg(feature = "cli")]
impl From<ColumnMergeArg> for ColumnMerge {
    fn from(arg: ColumnMergeArg) -> Self {
        match arg {
            ColumnMergeArg::SkipCategory => ColumnMerge::SKIP_CATEGORY,
            ColumnMergeArg::All => ColumnMerge::ALL,
            ColumnMergeArg::Off => ColumnMerge::Off,
        }
    }
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();
    init_tracing(cli.quiet);

    if let Err(err) = run(cli) {
        error!(error = %err, "render failed");
        for cause in err.chain().skip(1) {
            error!(cause = %cause, "caused by");
        }
        std::process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn init_tracing(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(feature = "cli")]
fn run(cli: Cli) -> Result<()> {
    if cli.list_profiles {
        for name in profile_names() {
            let widths = lookup_profile(name).unwrap_or_default();
            println!("{:<16} {}", name, widths.join(" "));
        }
        return Ok(());
    }

    let (Some(mine), Some(version)) = (cli.mine.as_deref(), cli.mine_version.as_deref()) else {
        bail!("dataset name and version are required");
    };

    // Configuration is validated before any file is touched
    let config = match cli.widths {
        Some(ref widths) => DatasetConfig::with_widths(mine, version, widths.clone())?,
        None => DatasetConfig::new(mine, version)?,
    };

    let links = load_links(&cli)?;
    let options = ResolveOptions {
        column_merge: cli.column_merge.into(),
        merge_blank_cells: !cli.no_blank_merge,
    };

    let input_path = cli
        .input
        .clone()
        .unwrap_or_else(|| config.input_path(&cli.input_dir));
    let csv = fs::read_to_string(&input_path)
        .with_context(|| format!("failed to read {}", input_path.display()))?;
    let table = read_table(&csv).with_context(|| format!("failed to parse {}", input_path.display()))?;
    info!(
        path = %input_path.display(),
        rows = table.rows.len(),
        columns = table.column_count(),
        "read table"
    );

    let widths = config.widths();

    if cli.check || cli.strict {
        let result = check_table(&table, &widths, &links);
        if cli.check {
            println!("{}", format_diagnostics(&result, cli.color));
            if result.has_errors() {
                std::process::exit(1);
            }
            return Ok(());
        }
        if result.has_problems() {
            eprintln!("{}", format_diagnostics(&result, cli.color));
            bail!("{} in strict mode", result.summary());
        }
    }

    let template = if cli.fragment {
        DocumentTemplate::fragment()
    } else {
        DocumentTemplate::default()
    };
    let output = render_table_with_template(&table, &widths, &links, &options, template)
        .with_context(|| format!("failed to render {}", input_path.display()))?;

    if cli.stdout {
        print!("{}", output.html);
        return Ok(());
    }

    let output_path = cli
        .output
        .clone()
        .unwrap_or_else(|| config.output_path(&cli.output_dir));
    write_output(&output_path, &output.html)?;

    info!(
        rows = output.stats.rows,
        categories = output.stats.category_boundaries + usize::from(output.stats.rows > 0),
        merged_cells = output.stats.hidden_cells,
        "Created HTML file {}",
        output_path.display()
    );

    Ok(())
}

#[cfg(feature = "cli")]
fn load_links(cli: &Cli) -> Result<LinkRuleTable> {
    if cli.no_links {
        return Ok(LinkRuleTable::new());
    }
    let Some(ref path) = cli.links else {
        return Ok(LinkRuleTable::builtin());
    };

    #[cfg(feature = "data-loading")]
    {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        let table = if is_json {
            LinkRuleTable::from_json_str(&text)
        } else {
            LinkRuleTable::from_toml_str(&text)
        }
        .with_context(|| format!("failed to load link rules from {}", path.display()))?;
        if table.is_empty() {
            warn!(path = %path.display(), "link rule file defines no rules");
        }
        Ok(table)
    }

    #[cfg(not(feature = "data-loading"))]
    {
        warn!(path = %path.display(), "ignoring link rule file");
        bail!("--links requires building with the data-loading feature");
    }
}

/// Write the finished page next to its destination, then move it into place
#[cfg(feature = "cli")]
fn write_output(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, html).with_context(|| format!("failed to write {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("failed to move output to {}", path.display()))?;
    Ok(())
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_version_positional_and_flag() {
        let cli = Cli::try_parse_from(["ds2html", "MaizeMine", "1.6"]).unwrap();
        assert_eq!(cli.mine.as_deref(), Some("MaizeMine"));
        assert_eq!(cli.mine_version.as_deref(), Some("1.6"));

        let err = Cli::try_parse_from(["ds2html", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_list_profiles_needs_no_positionals() {
        let cli = Cli::try_parse_from(["ds2html", "--list-profiles"]).unwrap();
        assert!(cli.list_profiles);
        assert!(Cli::try_parse_from(["ds2html"]).is_err());
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install srctable --features cli");
    eprintln!("  ds2html [OPTIONS] <MINE> <VERSION>");
}
