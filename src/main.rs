//! CLI entry point for lsq

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;
use std::time::SystemTime;

use clap::Parser;
use lsq::{DirWalker, HiddenPolicy, LineFormatter, ListingConfig, SystemAccounts};
use termcolor::{BufferedStandardStream, ColorChoice};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "lsq")]
#[command(about = "List directory contents")]
#[command(version)]
#[command(args_override_self = true)]
struct Args {
    /// Directory to list
    #[arg(default_value = "./")]
    path: PathBuf,

    /// Show all entries, including . and ..
    #[arg(short = 'a', long = "all", overrides_with = "almost_all")]
    all: bool,

    /// Show all entries except . and ..
    #[arg(short = 'A', long = "almost-all", overrides_with = "all")]
    almost_all: bool,

    /// Colorize names by type (only when stdout is a terminal)
    #[arg(short = 'C', long = "color")]
    color: bool,

    /// Append a type indicator (one of */@|=) to names
    #[arg(short = 'F', long = "classify")]
    classify: bool,

    /// Show permissions, links, owner, group, size and modification time
    #[arg(short = 'l', long = "long-format")]
    long_format: bool,

    /// List subdirectories recursively
    #[arg(short = 'R', long = "recursive")]
    recursive: bool,
}

impl Args {
    fn hidden_policy(&self) -> HiddenPolicy {
        match (self.all, self.almost_all) {
            (true, _) => HiddenPolicy::All,
            (false, true) => HiddenPolicy::Almost,
            (false, false) => HiddenPolicy::Default,
        }
    }

    fn listing_config(&self) -> ListingConfig {
        let config = ListingConfig {
            hidden: self.hidden_policy(),
            color: should_use_color(self.color),
            classify: self.classify,
            recursive: self.recursive,
            ..Default::default()
        };
        if self.long_format {
            config.with_long_format(SystemTime::now())
        } else {
            config
        }
    }
}

/// Color is only honored on a terminal, and never when NO_COLOR is set.
fn should_use_color(requested: bool) -> bool {
    if !requested {
        return false;
    }
    // Respect NO_COLOR environment variable (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    io::stdout().is_terminal()
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lsq=warn"));
    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();
}

fn main() {
    let args = Args::parse();
    init_tracing();

    let config = args.listing_config();
    tracing::debug!(?config, "resolved configuration");

    let choice = if config.color {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let stdout = BufferedStandardStream::stdout(choice);
    let stderr = io::stderr();
    let mut formatter = LineFormatter::new(&config, SystemAccounts::new(), stdout, stderr.lock());

    if let Err(e) = DirWalker::new(&config).walk(&args.path, &mut formatter) {
        // Reader went away (e.g. piped into head); nothing left to report
        if e.kind() == io::ErrorKind::BrokenPipe {
            return;
        }
        eprintln!("lsq: error writing output: {}", e);
        process::exit(1);
    }
}
