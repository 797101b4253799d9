//! 세션 토큰 파일 저장소.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use crate::application::ports::TokenStore;
use crate::domain::session::{SessionToken, TOKEN_KEY};

/// `{"access_token": "..."}` 형태의 JSON 파일 하나에 토큰을 보관한다.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<SessionToken>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to read token file {}", self.path.display()));
            }
        };

        let value: Value = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse token file {}", self.path.display()))?;
        Ok(value
            .get(TOKEN_KEY)
            .and_then(Value::as_str)
            .and_then(SessionToken::new))
    }

    fn save(&self, token: &SessionToken) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }

        let mut body = Map::new();
        body.insert(TOKEN_KEY.to_string(), Value::String(token.as_str().to_string()));
        let rendered = serde_json::to_string_pretty(&Value::Object(body))?;
        write_private(&self.path, format!("{rendered}\n").as_bytes())
            .with_context(|| format!("failed to write token file {}", self.path.display()))
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err)
                .with_context(|| format!("failed to remove token file {}", self.path.display())),
        }
    }
}

/// 토큰 파일은 소유자만 읽고 쓸 수 있어야 한다(unix 0600).
#[cfg(unix)]
fn write_private(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    use std::fs::OpenOptions;
    use std::io::Write;
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    // 이전 버전이 만든 파일은 mode 옵션이 적용되지 않으므로 권한을 다시 맞춘다.
    file.set_permissions(fs::Permissions::from_mode(0o600))?;
    file.write_all(contents)
}

#[cfg(not(unix))]
fn write_private(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    fs::write(path, contents)
}
