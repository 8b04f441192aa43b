use std::{collections::HashMap, env, ffi::OsString, path::Path, process::Command};

pub fn abs_path(path: &str) -> OsString {
    let path = Path::new(path);

    if path.exists() {
        path.canonicalize().unwrap().into_os_string()
    } else {
        // We are going to trust that the path given is valid...
        path.to_owned().into_os_string()
    }
}

/// Returns a QEMU runner target given an architecture.
fn get_qemu_target(arch: &str) -> &str {
    match arch {
        "armv7" => "arm",
        "i686" => "i386",
        "powerpc" => "ppc",
        "powerpc64le" => "ppc64le",
        _ => arch,
    }
}

/// Running binary tests via cross needs the right runner, which can be found
/// by inspecting env variables that only show up while using cross.
fn cross_runner() -> Option<String> {
    const TARGET_RUNNER: &str = "CARGO_TARGET_RUNNER";
    const CROSS_RUNNER: &str = "CROSS_RUNNER";

    let env_mapping = env::vars_os()
        .filter_map(|(k, v)| {
            let (k, v) = (k.to_string_lossy(), v.to_string_lossy());

            if k.starts_with("CARGO_TARGET_") && k.ends_with("_RUNNER") && !v.is_empty() {
                Some((TARGET_RUNNER.to_string(), v.to_string()))
            } else if k == CROSS_RUNNER && !v.is_empty() {
                Some((k.to_string(), v.to_string()))
            } else {
                None
            }
        })
        .collect::<HashMap<_, _>>();

    if let Some(cross_runner) = env_mapping.get(CROSS_RUNNER) {
        if cross_runner == "qemu-user" {
            env_mapping.get(TARGET_RUNNER).and_then(|target_runner| {
                target_runner
                    .split_ascii_whitespace()
                    .last()
                    .map(|arch| format!("qemu-{}", get_qemu_target(arch)))
            })
        } else {
            None
        }
    } else {
        env_mapping.get(TARGET_RUNNER).cloned()
    }
}

const CPUSTAT_EXE_PATH: &str = env!("CARGO_BIN_EXE_cpustat");
const DEFAULT_CFG: [&str; 2] = ["-C", "./tests/valid_configs/empty_config.toml"];

/// The header line written before every sample.
pub const HEADER: &str = "user%\tnice%\tsystem%\tidle%\n";

/// Returns the [`Command`] of a binary invocation of cpustat. Paths given to
/// `-C` and `-s` are made absolute.
pub fn cpustat_command(args: &[&str]) -> Command {
    let mut cmd = match cross_runner() {
        None => Command::new(CPUSTAT_EXE_PATH),
        Some(runner) => {
            let mut cmd = Command::new(runner);
            cmd.arg(CPUSTAT_EXE_PATH);
            cmd
        }
    };

    let mut prev = "";
    for arg in args.iter() {
        if prev == "-C" || prev == "-s" {
            cmd.arg(abs_path(arg));
        } else {
            cmd.arg(arg);
        }

        prev = arg;
    }

    cmd
}

/// Returns the [`Command`] of a binary invocation of cpustat with the default,
/// empty config file.
pub fn no_cfg_cpustat_command() -> Command {
    cpustat_command(&DEFAULT_CFG)
}
