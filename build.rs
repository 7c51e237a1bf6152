use dotenv::dotenv;
use std::env;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use toml::Value;

const KEY_VAR: &str = "TASKBOARD_TOKEN_KEY";
const IV_VAR: &str = "TASKBOARD_TOKEN_IV";

/// Writer for `$OUT_DIR/app_metadata.rs`, pulled in with `include!`.
struct AppMetadata {
    file: File,
}

impl AppMetadata {
    fn create() -> io::Result<Self> {
        let out_dir = env::var("OUT_DIR").map_err(|e| io::Error::new(io::ErrorKind::NotFound, e))?;
        let file = File::create(Path::new(&out_dir).join("app_metadata.rs"))?;
        Ok(Self { file })
    }

    fn write_str(&mut self, key: &str, value: &str) -> io::Result<()> {
        writeln!(
            self.file,
            "#[allow(unused)]\npub const APP_METADATA_{}: &str = {:?};",
            key.to_uppercase(),
            value
        )
    }

    fn write_bytes(&mut self, key: &str, value: &[u8]) -> io::Result<()> {
        let bytes = value.iter().map(|b| b.to_string()).collect::<Vec<_>>().join(", ");
        writeln!(
            self.file,
            "#[allow(unused)]\npub const APP_METADATA_{}: &[u8; {}] = &[{}];",
            key.to_uppercase(),
            value.len(),
            bytes
        )
    }
}

/// Pads or truncates `seed` to exactly `len` bytes.
fn fit(seed: String, len: usize) -> Vec<u8> {
    let mut bytes = seed.into_bytes();
    bytes.truncate(len);
    bytes.resize(len, b'!');
    bytes
}

/// Token encryption material: from the environment (or `.env`) when both
/// variables are present, otherwise derived from the package name.
fn token_keys(package: &str) -> (Vec<u8>, Vec<u8>) {
    match (env::var(KEY_VAR), env::var(IV_VAR)) {
        (Ok(key), Ok(iv)) => {
            if key.len() != 32 {
                panic!("{} must be exactly 32 bytes long, got {} bytes", KEY_VAR, key.len());
            }
            if iv.len() != 16 {
                panic!("{} must be exactly 16 bytes long, got {} bytes", IV_VAR, iv.len());
            }
            (key.into_bytes(), iv.into_bytes())
        }
        _ => {
            println!("cargo:warning={} or {} not set, using package-derived token keys.", KEY_VAR, IV_VAR);
            println!("cargo:warning=For production builds put both into a .env file.");
            (
                fit(format!("{}_token_store_default_key", package), 32),
                fit(format!("{}_token_iv", package), 16),
            )
        }
    }
}

fn main() -> io::Result<()> {
    println!("cargo:rerun-if-changed=Cargo.toml");
    println!("cargo:rerun-if-env-changed={}", KEY_VAR);
    println!("cargo:rerun-if-env-changed={}", IV_VAR);

    let _ = dotenv();

    let package = env::var("CARGO_PKG_NAME").unwrap_or_else(|_| "taskboard".to_string());
    let mut metadata = AppMetadata::create()?;
    metadata.write_str("NAME", &package)?;
    metadata.write_str("VERSION", &env::var("CARGO_PKG_VERSION").unwrap_or_default())?;

    let manifest = fs::read_to_string("Cargo.toml")?;
    if let Ok(manifest) = toml::from_str::<Value>(&manifest) {
        if let Some(table) = manifest.get("package").and_then(|p| p.get("metadata")).and_then(|m| m.as_table()) {
            for (key, value) in table {
                if let Some(value) = value.as_str() {
                    metadata.write_str(key, value)?;
                }
            }
        }
    }

    let (key, iv) = token_keys(&package);
    metadata.write_bytes("TOKEN_KEY", &key)?;
    metadata.write_bytes("TOKEN_IV", &iv)?;

    Ok(())
}
