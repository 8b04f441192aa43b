use std::{
    env, fs,
    io::Result,
    path::{Path, PathBuf},
};

use clap_complete::{generate_to, shells::Shell, Generator};

include!("src/options/args.rs");

fn create_dir(dir: &Path) -> Result<()> {
    let res = fs::create_dir_all(dir);
    if let Err(err) = &res {
        eprintln!(
            "Failed to create a directory at location {dir:?}, encountered error {err:?}. Aborting..."
        );
    }

    res
}

fn generate_completions<G>(to_generate: G, cmd: &mut Command, out_dir: &Path) -> Result<PathBuf>
where
    G: Generator,
{
    generate_to(to_generate, cmd, "cpustat", out_dir)
}

fn main() -> Result<()> {
    const COMPLETION_DIR: &str = "./target/tmp/cpustat/completion/";
    const MANPAGE_DIR: &str = "./target/tmp/cpustat/manpage/";

    match env::var_os("CPUSTAT_GENERATE") {
        Some(var) if !var.is_empty() => {
            let completion_out_dir = PathBuf::from(COMPLETION_DIR);
            let manpage_out_dir = PathBuf::from(MANPAGE_DIR);

            create_dir(&completion_out_dir)?;
            create_dir(&manpage_out_dir)?;

            // Generate completions
            let mut cmd = build_cmd();
            for shell in [
                Shell::Bash,
                Shell::Zsh,
                Shell::Fish,
                Shell::PowerShell,
                Shell::Elvish,
            ] {
                generate_completions(shell, &mut cmd, &completion_out_dir)?;
            }

            // Generate manpage
            let man = clap_mangen::Man::new(cmd);
            let mut buffer: Vec<u8> = Default::default();
            man.render(&mut buffer)?;
            fs::write(manpage_out_dir.join("cpustat.1"), buffer)?;
        }
        _ => {}
    }

    println!("cargo:rerun-if-env-changed=CPUSTAT_GENERATE");
    println!("cargo:rerun-if-changed=src/options/args.rs");

    Ok(())
}
