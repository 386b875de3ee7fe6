use std::{
    collections::HashMap,
    env, fs,
    io::{BufRead, BufReader},
    path::PathBuf,
};

use directories::BaseDirs;

/// Layered settings: built-in defaults, then `~/.config/cpprun/.cpprunrc`,
/// then the process environment (highest precedence).
#[derive(Debug, Clone)]
pub struct Config {
    inner: HashMap<String, String>,
    pub config_path: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        let mut map = default_map();
        let config_path = default_config_path();

        // Read .cpprunrc if exists
        if config_path.exists() {
            if let Ok(file) = fs::File::open(&config_path) {
                let reader = BufReader::new(file);
                for line in reader.lines().flatten() {
                    let line = line.trim();
                    if line.is_empty() || line.starts_with('#') {
                        continue;
                    }
                    if let Some((k, v)) = line.split_once('=') {
                        map.insert(k.trim().to_string(), v.trim().to_string());
                    }
                }
            }
        }

        // Overlay environment variables (take precedence)
        for (k, v) in env::vars() {
            if is_config_key(&k) {
                map.insert(k, v);
            }
        }

        Self { inner: map, config_path }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        // ENV first
        if let Ok(v) = env::var(key) {
            return Some(v);
        }
        self.inner.get(key).cloned()
    }

    /// CXXFLAGS-style values: whitespace-separated tokens.
    pub fn get_words(&self, key: &str) -> Vec<String> {
        self.get(key)
            .map(|v| v.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default()
    }

    #[cfg(test)]
    pub fn empty_for_tests() -> Self {
        Self {
            inner: HashMap::new(),
            config_path: PathBuf::new(),
        }
    }

    #[cfg(test)]
    pub fn set_for_tests(&mut self, key: &str, value: &str) {
        self.inner.insert(key.to_string(), value.to_string());
    }
}

fn is_config_key(k: &str) -> bool {
    // Accept known keys or CPPRUN_* for forward-compat
    const KEYS: &[&str] = &["CXX", "CXXFLAGS", "SHELL_NAME"];

    KEYS.contains(&k) || k.starts_with("CPPRUN_")
}

fn default_config_path() -> PathBuf {
    let base = BaseDirs::new()
        .map(|b| b.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.config"));
    base.join("cpprun").join(".cpprunrc")
}

fn default_map() -> HashMap<String, String> {
    let mut m = HashMap::new();
    m.insert("CXX".into(), "g++".into());
    m.insert("CXXFLAGS".into(), String::new());
    m.insert("SHELL_NAME".into(), "auto".into());
    m
}
