use indoc::indoc;

/// How often a sample is taken if nothing else is set.
pub const DEFAULT_RATE_IN_MILLISECONDS: u64 = 5000;

/// The smallest allowed sampling period.
pub const MINIMUM_RATE_IN_MILLISECONDS: u64 = 250;

/// Where the CPU counters are read from if nothing else is set.
pub const DEFAULT_SOURCE_PATH: &str = "/proc/stat";

/// Config file location, relative to the user's config directory.
pub const DEFAULT_CONFIG_FILE_LOCATION: &str = "cpustat/cpustat.toml";

/// The header written before each sample.
pub const SAMPLE_HEADER: &str = "user%\tnice%\tsystem%\tidle%";

/// The default config file contents, written if no config file exists.
pub const CONFIG_TEXT: &str = indoc! {r#"
    # This is a default config file for cpustat. All of the settings are commented
    # out by default; if you wish to change them, uncomment and modify as you see
    # fit. Command-line arguments take precedence over anything set here.

    [flags]
    # How often a sample is taken. Takes a number in milliseconds or a
    # human-readable duration (e.g. "5s"). The minimum is 250ms.
    #rate = "5s"

    # The file to read CPU counters from.
    #source = "/proc/stat"

    # Stop after this many samples. 0 means run until interrupted.
    #count = 0
"#};
