// Transposes a semicolon-separated benchmark grid into tab-separated columns.

use bench_charts::reshape::transpose;
use log::info;

const INPUT: &str = "bench-times-no-cold-no-space.csv";
const OUTPUT: &str = "bench-times-tests.tsv";

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    transpose(INPUT, OUTPUT, b';')?;
    info!("transposed {INPUT} into {OUTPUT}");

    Ok(())
}
