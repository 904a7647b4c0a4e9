use serde_json::{Map, Value, json};

use super::TokenFormat;
use crate::{error::Result, reference::ReferenceTree, system::SystemTree};

/// Nested token documents rooted at `md.ref.palette` and `md.sys`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Json;

impl TokenFormat for Json {
    fn kind(&self) -> &'static str {
        "tokens"
    }

    fn extension(&self) -> &'static str {
        "json"
    }

    fn render_reference(&self, tree: &ReferenceTree) -> Result<String> {
        let mut palette = Map::new();
        for family in tree.palettes() {
            let tones: Map<String, Value> = family
                .tokens
                .iter()
                .map(|token| {
                    (
                        token.tone.to_string(),
                        json!({ "value": token.value.to_string(), "type": token.token_type() }),
                    )
                })
                .collect();
            palette.insert(family.family.key().to_string(), Value::Object(tones));
        }
        pretty(json!({ "md": { "ref": { "palette": palette } } }))
    }

    fn render_system(&self, tree: &SystemTree) -> Result<String> {
        let mut modes = Map::new();
        for mode in tree.modes() {
            let mut groups = Map::new();
            for group in &mode.groups {
                let roles: Map<String, Value> = group
                    .tokens
                    .iter()
                    .map(|token| {
                        (
                            token.role.to_string(),
                            json!({ "value": token.alias.to_string(), "type": token.token_type() }),
                        )
                    })
                    .collect();
                groups.insert(group.group.key().to_string(), Value::Object(roles));
            }
            modes.insert(mode.mode.key().to_string(), Value::Object(groups));
        }
        pretty(json!({ "md": { "sys": modes } }))
    }
}

fn pretty(document: Value) -> Result<String> {
    let mut text = serde_json::to_string_pretty(&document)?;
    text.push('\n');
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        color::HexColor,
        family::{ColorFamily, ToneStops},
        palette::{TonalPalette, testing::FakeToneSource},
        system::{AliasPolicy, SystemColorMap},
    };

    fn primary_only() -> (ReferenceTree, SystemTree) {
        let stops = ToneStops::material();
        let palette = TonalPalette::generate(
            ColorFamily::Primary,
            HexColor::from_rgb(0x6750A4),
            &stops,
            &FakeToneSource,
        );
        let reference = ReferenceTree::build([&palette], &stops).unwrap();
        let map = SystemColorMap::material(&stops, AliasPolicy::Strict).unwrap();
        let system = SystemTree::build(&map, &reference);
        (reference, system)
    }

    #[test]
    fn reference_document_shape() {
        let (reference, _) = primary_only();
        let text = Json.render_reference(&reference).unwrap();
        assert!(text.starts_with("{\n  \"md\": {\n    \"ref\": {\n      \"palette\": {\n"));
        assert!(text.ends_with("}\n"));

        let doc: Value = serde_json::from_str(&text).unwrap();
        let primary = doc["md"]["ref"]["palette"]["primary"].as_object().unwrap();
        let keys: Vec<&str> = primary.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            ["0", "10", "20", "30", "40", "50", "60", "70", "80", "90", "95", "99", "100"]
        );
        assert_eq!(primary["40"]["value"], format!("#{:06x}", 0x6750A4 ^ 40));
        assert_eq!(primary["40"]["type"], "color");
        assert_eq!(doc["md"]["ref"]["palette"].as_object().unwrap().len(), 1);
    }

    #[test]
    fn system_document_keeps_alias_strings() {
        let (_, system) = primary_only();
        let doc: Value = serde_json::from_str(&Json.render_system(&system).unwrap()).unwrap();
        let sys = doc["md"]["sys"].as_object().unwrap();
        assert_eq!(sys.keys().collect::<Vec<_>>(), ["light", "dark"]);
        assert_eq!(
            doc["md"]["sys"]["light"]["primary-colors"]["primary"]["value"],
            "{md.ref.palette.primary.40}"
        );
        assert_eq!(
            doc["md"]["sys"]["dark"]["primary-colors"]["onPrimary"]["value"],
            "{md.ref.palette.primary.20}"
        );
        assert!(doc["md"]["sys"]["dark"].get("secondary-colors").is_none());
    }
}
