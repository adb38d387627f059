// Expands row-per-benchmark measurement files into one (name, value) line
// per measurement, ready for spreadsheet pivoting.

use bench_charts::ingest::NumberFormat;
use bench_charts::reshape::expand_to_pairs;
use log::info;

const INPUT: &str = "bench-times-no-cold-no-space.csv";
const OUTPUT: &str = "transformed.csv";

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    expand_to_pairs(INPUT, OUTPUT, b';', NumberFormat::ThousandsComma)?;
    info!("expanded {INPUT} into {OUTPUT}");

    Ok(())
}
