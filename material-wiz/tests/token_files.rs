use std::{collections::BTreeMap, fs};

use material_wiz::{
    AliasPolicy, BaseColors, ColorFamily, GeneratorOptions, HexColor, Mode, OutputLayout,
    TokenGenerator, ToneStops, system::SYSTEM_ROLES,
};
use serde_json::Value;

fn hex(value: &str) -> HexColor {
    HexColor::parse(value).unwrap()
}

fn all_families() -> BaseColors {
    BaseColors {
        primary: hex("#6750A4"),
        secondary: Some(hex("#625B71")),
        tertiary: Some(hex("#7D5260")),
        error: Some(hex("#B3261E")),
        neutral: Some(hex("#605D62")),
        neutral_variant: Some(hex("#605D66")),
    }
}

struct Written {
    _dir: tempfile::TempDir,
    files: BTreeMap<String, String>,
}

impl Written {
    fn get(&self, name: &str) -> &str {
        &self.files[name]
    }

    fn json(&self, name: &str) -> Value {
        serde_json::from_str(self.get(name)).unwrap()
    }
}

fn generate(colors: &BaseColors) -> Written {
    let dir = tempfile::tempdir().unwrap();
    let generator = TokenGenerator::new(GeneratorOptions::default()).unwrap();
    let paths = generator
        .generate(colors)
        .unwrap()
        .write(&OutputLayout::new(dir.path()))
        .unwrap();
    assert_eq!(paths.len(), 6);

    let files = paths
        .iter()
        .map(|path| {
            let relative = path.strip_prefix(dir.path()).unwrap();
            (
                relative.to_string_lossy().replace('\\', "/"),
                fs::read_to_string(path).unwrap(),
            )
        })
        .collect();
    Written { _dir: dir, files }
}

const REF_JSON: &str = "tokens/md/ref/md-ref-color-tokens.json";
const REF_CSS: &str = "tokens/md/ref/md-ref-color-variables.css";
const REF_SCSS: &str = "tokens/md/ref/md-ref-color-variables.scss";
const SYS_JSON: &str = "tokens/md/sys/md-sys-color-tokens.json";
const SYS_CSS: &str = "tokens/md/sys/md-sys-color-variables.css";
const SYS_SCSS: &str = "tokens/md/sys/md-sys-color-variables.scss";

#[test]
fn writes_the_six_files() {
    let written = generate(&all_families());
    let names: Vec<&str> = written.files.keys().map(String::as_str).collect();
    let mut expected = [REF_CSS, REF_JSON, REF_SCSS, SYS_CSS, SYS_JSON, SYS_SCSS];
    expected.sort();
    assert_eq!(names, expected);
}

#[test]
fn reference_formats_agree() {
    let written = generate(&all_families());
    let doc = written.json(REF_JSON);
    let palette = doc["md"]["ref"]["palette"].as_object().unwrap();

    let families: Vec<&str> = palette.keys().map(String::as_str).collect();
    assert_eq!(
        families,
        ["primary", "secondary", "tertiary", "error", "neutral", "neutral-variant"]
    );

    let css = written.get(REF_CSS);
    let scss = written.get(REF_SCSS);
    let mut declarations = 0;
    for (family, tones) in palette {
        let tones = tones.as_object().unwrap();
        let expected = if family.starts_with("neutral") { 24 } else { 13 };
        assert_eq!(tones.len(), expected, "{family}");

        for (tone, token) in tones {
            let value = token["value"].as_str().unwrap();
            assert_eq!(token["type"], "color");
            let name = format!("md-ref-palette-{family}-{tone}");
            assert!(
                css.contains(&format!("  --{name}: {value}; /* {family} {tone} */\n")),
                "css is missing {name}"
            );
            assert!(
                scss.contains(&format!("${name}: {value}; // {family} {tone}\n")),
                "scss is missing {name}"
            );
            declarations += 1;
        }
    }

    assert_eq!(css.matches("--md-ref-palette-").count(), declarations);
    assert_eq!(scss.lines().count(), declarations);
}

#[test]
fn system_formats_agree() {
    let written = generate(&all_families());
    let doc = written.json(SYS_JSON);
    let css = written.get(SYS_CSS);
    let scss = written.get(SYS_SCSS);
    let reference = written.get(REF_CSS);

    let mut declarations = 0;
    for mode in Mode::ALL {
        let groups = doc["md"]["sys"][mode.key()].as_object().unwrap();
        assert_eq!(
            groups.keys().map(String::as_str).collect::<Vec<_>>(),
            [
                "primary-colors",
                "surface-colors",
                "outline-colors",
                "error-colors",
                "secondary-colors",
                "tertiary-colors"
            ]
        );
        for roles in groups.values() {
            for (role, token) in roles.as_object().unwrap() {
                let alias = token["value"].as_str().unwrap();
                let path = alias
                    .strip_prefix("{md.ref.palette.")
                    .and_then(|rest| rest.strip_suffix('}'))
                    .unwrap();
                let (family, tone) = path.rsplit_once('.').unwrap();
                let target = format!("md-ref-palette-{family}-{tone}");

                assert!(reference.contains(&format!("--{target}:")), "{alias} dangles");
                assert!(css.contains(&format!("  --md-sys-{mode}-{role}: var(--{target});\n")));
                assert!(scss.contains(&format!("$md-sys-{mode}-{role}: ${target};\n")));
                declarations += 1;
            }
        }
    }

    assert_eq!(declarations, 2 * SYSTEM_ROLES.len());
    assert_eq!(css.matches("--md-sys-").count(), declarations);
    assert_eq!(scss.matches("$md-sys-").count(), declarations);
}

#[test]
fn primary_only_scenario() {
    let written = generate(&BaseColors::new(hex("#6750A4")));

    let doc = written.json(REF_JSON);
    let palette = doc["md"]["ref"]["palette"].as_object().unwrap();
    assert_eq!(palette.len(), 1);
    assert_eq!(palette["primary"].as_object().unwrap().len(), 13);
    assert_eq!(palette["primary"]["0"]["value"], "#000000");
    assert_eq!(palette["primary"]["100"]["value"], "#ffffff");
    assert_eq!(palette["primary"]["40"]["value"], "#6750a4");

    let sys = written.json(SYS_JSON);
    for mode in Mode::ALL {
        let groups = sys["md"]["sys"][mode.key()].as_object().unwrap();
        // Role-level filtering: surfaceTint and surfaceTintColor alias primary.
        assert_eq!(
            groups.keys().map(String::as_str).collect::<Vec<_>>(),
            ["primary-colors", "surface-colors"]
        );
        let surface = groups["surface-colors"].as_object().unwrap();
        assert_eq!(
            surface.keys().map(String::as_str).collect::<Vec<_>>(),
            ["surfaceTint", "surfaceTintColor"]
        );
        let primary = groups["primary-colors"].as_object().unwrap();
        assert_eq!(
            primary.keys().map(String::as_str).collect::<Vec<_>>(),
            [
                "primary",
                "onPrimary",
                "primaryContainer",
                "onPrimaryContainer",
                "primaryFixed",
                "onPrimaryFixed",
                "primaryFixedDim",
                "onPrimaryFixedVariant",
                "inversePrimary"
            ]
        );
        for group in groups.values() {
            for token in group.as_object().unwrap().values() {
                let alias = token["value"].as_str().unwrap();
                assert!(alias.starts_with("{md.ref.palette.primary."), "{alias}");
            }
        }
    }

    let css = written.get(SYS_CSS);
    assert!(css.contains("  --md-sys-light-primary: var(--md-ref-palette-primary-40);\n"));
    assert!(css.contains("  --md-sys-dark-primary: var(--md-ref-palette-primary-80);\n"));
    assert!(!css.contains("neutral"));
    assert!(!written.get(REF_CSS).contains("neutral"));
}

#[test]
fn omitted_family_leaves_no_trace() {
    let mut colors = all_families();
    colors.secondary = None;
    let written = generate(&colors);

    for name in [REF_JSON, REF_CSS, REF_SCSS, SYS_JSON, SYS_CSS, SYS_SCSS] {
        let text = written.get(name);
        assert!(!text.contains("palette.secondary"), "{name}");
        assert!(!text.contains("palette-secondary"), "{name}");
        assert!(!text.contains("secondary-colors"), "{name}");
    }
}

#[test]
fn neutral_variant_uses_neutral_stops() {
    let mut colors = BaseColors::new(hex("#6750A4"));
    colors.neutral_variant = Some(hex("#605D66"));
    let written = generate(&colors);
    let doc = written.json(REF_JSON);
    let variant = doc["md"]["ref"]["palette"]["neutral-variant"]
        .as_object()
        .unwrap();
    assert_eq!(variant.len(), 24);
    assert!(variant.contains_key("87"));
    assert!(
        written
            .get(REF_SCSS)
            .contains("$md-ref-palette-neutral-variant-94: ")
    );
}

#[test]
fn runs_are_byte_identical() {
    let first = generate(&all_families());
    let second = generate(&all_families());
    assert_eq!(first.files, second.files);
}

#[test]
fn lenient_policy_keeps_json_alias_but_drops_variables() {
    let stops = ToneStops::new(
        vec![0, 10, 20, 30, 50, 60, 70, 80, 90, 95, 99, 100],
        material_wiz::family::NEUTRAL_TONES.to_vec(),
    )
    .unwrap();
    let generator = TokenGenerator::new(GeneratorOptions {
        stops,
        policy: AliasPolicy::Lenient,
    })
    .unwrap();
    let tokens = generator
        .generate(&BaseColors::new(hex("#6750A4")))
        .unwrap();
    let files = tokens.render().unwrap();

    let sys_json = &files[3].contents;
    let sys_css = &files[4].contents;
    assert!(sys_json.contains("\"value\": \"{md.ref.palette.primary.40}\""));
    assert!(!sys_css.contains("primary-40"));
    assert!(sys_css.contains("--md-sys-dark-primary: var(--md-ref-palette-primary-80);"));
    assert!(!tokens.reference.contains_family(ColorFamily::Neutral));
}
