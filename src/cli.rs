use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use poe2_leagues::filter::Category;
use poe2_leagues::logging::LogOutput;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// True when any configuration operation was requested
pub fn is_config_operation(args: &Args) -> bool {
    args.new_source.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
}

/// Picks log outputs: the interactive UI and plain `--once` keep stdout clean.
pub fn log_output(args: &Args) -> LogOutput {
    if args.debug || args.html.is_some() || is_config_operation(args) {
        LogOutput::StdoutAndFile
    } else {
        LogOutput::FileOnly
    }
}

/// Path of Exile 2 league listings
///
/// Fetches the current league list (through the local relay by default),
/// hides SSF, hardcore and void leagues, and lets you search and filter what
/// remains. When the source is unreachable a small built-in sample list is
/// shown instead, clearly marked as sample data.
///
/// In interactive mode (default):
/// - Type to search league names, descriptions and rules
/// - Backspace deletes, Tab cycles the category (All, Main, Event)
/// - Esc or Ctrl-C quits
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
#[command(styles = get_styles())]
pub struct Args {
    /// Render the listing once and exit.
    #[arg(short, long)]
    pub once: bool,

    /// Write the listing as an HTML page to this path and exit.
    #[arg(long = "html", value_name = "PATH", help_heading = "Display Options")]
    pub html: Option<String>,

    /// Read the listing from this URL or JSON file instead of the configured source.
    #[arg(short = 's', long = "source", value_name = "URL|PATH", help_heading = "Display Options")]
    pub source: Option<String>,

    /// Initial search term.
    #[arg(long = "search", help_heading = "Display Options")]
    pub search: Option<String>,

    /// Initial category filter.
    #[arg(long = "category", value_enum, default_value_t = Category::All, help_heading = "Display Options")]
    pub category: Category,

    /// Save a new default listing source in the config file.
    #[arg(long = "set-source", value_name = "URL|PATH", help_heading = "Configuration")]
    pub new_source: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write logs to stdout.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
