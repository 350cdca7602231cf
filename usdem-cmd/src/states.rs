//! `states` subcommand.

use usdem_db::Dataset;

/// One state name per line, in dataset order.
pub fn render_states(dataset: &Dataset) -> anyhow::Result<String> {
    let mut out = String::new();
    for name in dataset.state_names()? {
        out.push_str(&name);
        out.push('\n');
    }
    Ok(out)
}
