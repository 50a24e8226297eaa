pub mod config {
    use std::path::PathBuf;

    use anyhow::Context as _;
    use serde::{Deserialize, Serialize, de::DeserializeOwned};

    /// Load a TOML config file, returning `T::default()` if the file doesn't exist.
    pub fn load_config<T: Default + DeserializeOwned>(filename: &str) -> anyhow::Result<T> {
        match std::fs::read_to_string(filename) {
            Ok(contents) => {
                toml::from_str(&contents).with_context(|| format!("Failed to parse {filename}"))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("no config file found at {filename}, using defaults");
                Ok(T::default())
            }
            Err(e) => Err(e).with_context(|| format!("Failed to read {filename}")),
        }
    }

    #[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
    #[serde(default)]
    pub struct Config {
        #[serde(default)]
        pub paths: Paths,
    }
    impl Config {
        pub const FILENAME: &str = "sonostalgia.toml";
    }

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    #[serde(default)]
    pub struct Paths {
        /// Directory holding one YAML file per memory
        pub memories_dir: PathBuf,
        /// Directory the rendered pages are written to
        pub output_dir: PathBuf,
    }
    impl Default for Paths {
        fn default() -> Self {
            Self {
                memories_dir: PathBuf::from("src/memories"),
                output_dir: PathBuf::from("output"),
            }
        }
    }

}
