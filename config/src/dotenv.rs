//! Reads a project `.env` into a key-value map.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

fn dotenv_path(dir: Option<&Path>) -> Option<PathBuf> {
    let dir = match dir {
        Some(d) => d.to_path_buf(),
        None => std::env::current_dir().ok()?,
    };
    let path = dir.join(".env");
    path.is_file().then_some(path)
}

/// Strips one layer of matching quotes. Double quotes allow `\"`.
fn unquote(value: &str) -> String {
    if let Some(inner) = value.strip_prefix('"').and_then(|s| s.strip_suffix('"')) {
        return inner.replace("\\\"", "\"");
    }
    if let Some(inner) = value.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')) {
        return inner.to_string();
    }
    value.to_string()
}

/// One `KEY=VALUE` line; `export KEY=VALUE` is accepted. Comments, blanks, and lines
/// without `=` or with an empty key yield `None`.
fn parse_line(line: &str) -> Option<(String, String)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let line = line.strip_prefix("export ").unwrap_or(line);
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key.to_string(), unquote(value.trim())))
}

fn parse_dotenv(content: &str) -> HashMap<String, String> {
    content.lines().filter_map(parse_line).collect()
}

/// Missing file yields an empty map.
pub fn load_env_map(dir: Option<&Path>) -> std::io::Result<HashMap<String, String>> {
    match dotenv_path(dir) {
        Some(path) => Ok(parse_dotenv(&std::fs::read_to_string(path)?)),
        None => Ok(HashMap::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pairs_and_skips_noise() {
        let m = parse_dotenv("\n# comment\nTAVILY_API_KEY=abc\nNOT_A_PAIR\n=orphan\n");
        assert_eq!(m.len(), 1);
        assert_eq!(m["TAVILY_API_KEY"], "abc");
    }

    #[test]
    fn handles_quotes_and_export() {
        let m = parse_dotenv(
            "export SCOUT_MODEL=\"gpt 4\"\nA='single'\nB=\"say \\\"hi\\\"\"\nC=x#y\nD=\n",
        );
        assert_eq!(m["SCOUT_MODEL"], "gpt 4");
        assert_eq!(m["A"], "single");
        assert_eq!(m["B"], "say \"hi\"");
        assert_eq!(m["C"], "x#y");
        assert_eq!(m["D"], "");
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_env_map(Some(dir.path())).unwrap().is_empty());
    }

    #[test]
    fn reads_file_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".env"), "RAPIDAPI_KEY=r1\n").unwrap();
        let m = load_env_map(Some(dir.path())).unwrap();
        assert_eq!(m["RAPIDAPI_KEY"], "r1");
    }
}
