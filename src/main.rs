use anyhow::{bail, Result};
use qetl::{Course, QaEtl};

const DATA_ROOT: &str = "./data";
const TRANSFORMED_ROOT: &str = "./transformed_data";

fn main() -> Result<()> {
    let arg = match std::env::args().nth(1) {
        Some(a) => a,
        None => bail!("usage: qetl <COURSE>   (e.g., qetl \"CPSC 213\")"),
    };
    let course = Course::parse(&arg)?;

    let report = QaEtl::new()
        .data_root(DATA_ROOT)
        .transformed_root(TRANSFORMED_ROOT)
        .progress(true)
        .transform(&course)?;

    println!(
        "{}: {} threads -> {} records written ({} filtered, {} files skipped)",
        course, report.threads, report.records_written, report.records_filtered, report.files_skipped
    );
    Ok(())
}
