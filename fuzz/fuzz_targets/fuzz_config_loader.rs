#![no_main]

use coursework::config::ConfigLoader;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Must not panic; anything that loads must load again from its own output.
    let loader = ConfigLoader::with_defaults();
    if let Ok(result) = loader.load_from_str(text) {
        let again = serde_json::to_string(&result.config.to_json_value()).unwrap();
        let reloaded = loader.load_from_str(&again).unwrap();
        assert_eq!(reloaded.config, result.config);
    }
});
