fn main() -> anyhow::Result<()> {
    cpustat::start_cpustat()
}
