// Argument parsing via clap.
//
// Note that you probably want to keep this as a single file so the build script doesn't
// trip all over itself.

use clap::*;
use indoc::indoc;

const TEMPLATE: &str = indoc! {
    "{name} {version}

    {about}

    {usage-heading} {usage}

    {all-args}"
};

const USAGE: &str = "cpustat [OPTIONS]";

const VERSION: &str = match option_env!("NIGHTLY_VERSION") {
    Some(nightly_version) => nightly_version,
    None => crate_version!(),
};

/// The arguments for cpustat.
#[derive(Parser, Debug, Default)]
#[command(
    name = crate_name!(),
    version = VERSION,
    about = crate_description!(),
    disable_help_flag = true,
    disable_version_flag = true,
    color = ColorChoice::Auto,
    help_template = TEMPLATE,
    override_usage = USAGE,
)]
pub struct Args {
    #[command(flatten)]
    pub(crate) general_args: GeneralArgs,

    #[command(flatten)]
    pub(crate) other_args: OtherArgs,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "General Options", rename_all = "snake_case")]
pub(crate) struct GeneralArgs {
    #[arg(
        short = 'C',
        long,
        value_name = "PATH",
        help = "Sets the location of the config file.",
        long_help = "Sets the location of the config file. Expects a config file in the TOML format. \
                    If it doesn't exist, a default config file is created at the path unless \
                    --no_write is set."
    )]
    pub(crate) config_location: Option<String>,

    #[arg(
        short = 'n',
        long,
        value_name = "N",
        help = "Stops after N samples.",
        long_help = "Stops after taking N samples. By default, or if set to 0, samples are taken \
                    until the program is interrupted."
    )]
    pub(crate) count: Option<u64>,

    #[arg(
        long,
        help = "Disables writing a default config file.",
        long_help = "Disables writing a default config file if one does not exist at the config \
                    location."
    )]
    pub(crate) no_write: bool,

    #[arg(
        short = 'r',
        long,
        value_name = "TIME",
        help = "Sets how often a sample is taken.",
        long_help = "Sets how often a sample is taken. Takes a number in milliseconds or a human-readable \
                    duration (e.g. 5s). The minimum is 250ms, and defaults to 5s."
    )]
    pub(crate) rate: Option<String>,

    #[arg(
        short = 's',
        long,
        value_name = "PATH",
        help = "Sets the file CPU counters are read from.",
        long_help = indoc! {
            "Sets the file CPU counters are read from. Defaults to /proc/stat. The file must use the
            /proc/stat format, where the first line looks like:

            cpu <user> <nice> <system> <idle> <iowait> <irq> <softirq> <steal> <guest> <guest_nice>"
        }
    )]
    pub(crate) source: Option<String>,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Other Options", rename_all = "snake_case")]
pub(crate) struct OtherArgs {
    #[cfg(feature = "logging")]
    #[arg(
        long,
        value_name = "PATH",
        help = "Writes debug logs to the given file."
    )]
    pub(crate) log_file: Option<String>,

    #[arg(
        short = 'h',
        long,
        action = ArgAction::Help,
        help = "Prints help info (for more details use '--help'.)"
    )]
    help: Option<bool>,

    #[arg(short = 'V', long, action = ArgAction::Version, help = "Prints version information.")]
    version: Option<bool>,
}

/// Returns the [`Command`] for cpustat.
pub fn build_cmd() -> Command {
    Args::command()
}

/// Returns an [`Args`].
pub fn get_args() -> Args {
    Args::parse()
}
