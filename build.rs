fn main() {
    // Validate embedded TOML files at compile time.
    validate_toml(
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    let value = match content.parse::<toml::Value>() {
        Ok(value) => value,
        Err(_) => panic!("{path} contains invalid TOML"),
    };
    for section in ["dictionary", "segmenter"] {
        if value.get(section).and_then(|v| v.as_table()).is_none() {
            panic!("{path} is missing the [{section}] table");
        }
    }
    println!("cargo:rerun-if-changed={path}");
}
