#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the catalog loaders.
///
/// Feeds arbitrary UTF-8 strings to both parsers. Anything that parses has
/// passed validation and must render without panicking.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let parsed = [
            prompt_cheatsheet::Catalog::from_yaml_str(s),
            prompt_cheatsheet::Catalog::from_json_str(s),
        ];
        for catalog in parsed.into_iter().flatten() {
            let _ = prompt_cheatsheet::render_table(catalog.records());
            let _ = prompt_cheatsheet::render_cards(catalog.records());
        }
    }
});
