//! `views` subcommand.

use usdem_db::Dataset;
use usdem_view::Variant;

/// Pretty JSON of the chart specs for `state`, or the default state when
/// none is given.
pub fn render_views(
    dataset: &Dataset,
    state: Option<&str>,
    variant: Variant,
) -> anyhow::Result<String> {
    let state = match state {
        Some(state) => state.to_string(),
        None => dataset.default_state()?,
    };
    let specs = variant.render(dataset, &state)?;
    Ok(serde_json::to_string_pretty(&specs)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{parse_dataset, SourceFormat};

    fn fixture() -> Dataset {
        parse_dataset(include_str!("../../fixtures/data.json"), SourceFormat::Json).unwrap()
    }

    #[test]
    fn defaults_to_first_state() {
        let json = render_views(&fixture(), None, Variant::Plain).unwrap();
        let specs: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(specs.as_array().unwrap().len(), 5);
        assert_eq!(specs[1]["data"][0]["label"], "Alabama");
    }

    #[test]
    fn dark_variant_has_four_specs() {
        let json = render_views(&fixture(), Some("Texas"), Variant::Dark).unwrap();
        let specs: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(specs.as_array().unwrap().len(), 4);
        assert_eq!(specs[0]["kind"], "pie");
        assert_eq!(specs[0]["config"]["theme"]["name"], "dark");
    }

    #[test]
    fn unknown_state_is_an_error() {
        let err = render_views(&fixture(), Some("Atlantis"), Variant::Plain).unwrap_err();
        assert!(err.to_string().contains("Atlantis"));
    }
}
