use anyhow::{Context, Result};

use scour_panda::config::Config;
use scour_panda::data::loader::load_file;
use scour_panda::pipeline::{build_comparison, log_fit_summaries};
use scour_panda::render::render_comparison;

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::default();

    let table = load_file(&config.input_path)
        .with_context(|| format!("loading {}", config.input_path.display()))?;

    let comparison = build_comparison(&table, &config.constants);
    log_fit_summaries(&comparison);

    render_comparison(&comparison, &config.figure, &config.output_path)?;
    Ok(())
}
