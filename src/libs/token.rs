//! Persisted session token.
//!
//! The bearer token returned by login/register is kept in a file named
//! `token` in the application data directory, AES-256-CBC encrypted with
//! keys embedded at build time and base64 encoded. It is removed on logout
//! and whenever the server rejects it during the start-up session check.

use super::data_storage::DataStorage;
use aes::Aes256;
use anyhow::Result;
use base64::prelude::*;
use block_modes::block_padding::Pkcs7;
use block_modes::{BlockMode, Cbc};
use std::fs;
use std::path::{Path, PathBuf};

// Generated by build.rs
include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

type Aes256Cbc = Cbc<Aes256, Pkcs7>;

pub const TOKEN_KEY: &str = "token";

#[derive(Clone, Debug)]
pub struct TokenStore {
    path: PathBuf,
    key: Vec<u8>,
    iv: Vec<u8>,
}

impl TokenStore {
    pub fn new() -> Result<Self> {
        Self::in_storage(&DataStorage::new())
    }

    pub fn in_storage(storage: &DataStorage) -> Result<Self> {
        Ok(Self {
            path: storage.get_path(TOKEN_KEY)?,
            key: APP_METADATA_TOKEN_KEY.to_vec(),
            iv: APP_METADATA_TOKEN_IV.to_vec(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored token, `None` when nothing has been saved.
    pub fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let encoded = fs::read_to_string(&self.path)?;
        let ciphertext = BASE64_STANDARD.decode(encoded.trim())?;
        let cipher = Aes256Cbc::new_from_slices(&self.key, &self.iv)?;
        let token = String::from_utf8(cipher.decrypt_vec(&ciphertext)?)?;
        Ok(Some(token))
    }

    pub fn save(&self, token: &str) -> Result<()> {
        let cipher = Aes256Cbc::new_from_slices(&self.key, &self.iv)?;
        let encoded = BASE64_STANDARD.encode(cipher.encrypt_vec(token.as_bytes()));
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, encoded)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))?;
        }
        tracing::debug!(path = %self.path.display(), "session token saved");
        Ok(())
    }

    /// Deletes the stored token. A missing file is fine.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "session token cleared");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
