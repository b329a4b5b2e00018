use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::models::Profile;
use crate::typewriter::TypewriterError;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to read profile {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("invalid profile {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("failed to serialize profile: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid typewriter settings: {0}")]
    Typewriter(#[from] TypewriterError),
}

/// 默认资料路径 (~/.config/folio/profile.toml)
pub fn default_profile_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("folio").join("profile.toml"))
}

/// 加载资料
///
/// 显式路径必须存在；否则尝试默认路径，不存在时使用内置资料。
pub fn load_profile(explicit: Option<&Path>) -> Result<Profile, ProfileError> {
    load_profile_from(explicit, default_profile_path())
}

/// 同 [`load_profile`]，默认路径由调用方给出
pub fn load_profile_from(
    explicit: Option<&Path>,
    default: Option<PathBuf>,
) -> Result<Profile, ProfileError> {
    let profile = match (explicit, default) {
        (Some(path), _) => read_profile(path)?,
        (None, Some(path)) if path.exists() => read_profile(&path)?,
        _ => {
            warn!("no profile file found, using built-in profile");
            Profile::default()
        }
    };

    // 提前校验 roles 和时间参数
    profile.typewriter()?;
    Ok(profile)
}

/// 从 TOML 文件读取资料
pub fn read_profile(path: &Path) -> Result<Profile, ProfileError> {
    let content = fs::read_to_string(path).map_err(|source| ProfileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let profile = toml::from_str(&content).map_err(|source| ProfileError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "profile loaded");
    Ok(profile)
}

/// 把资料序列化为 TOML 文本
pub fn render_profile(profile: &Profile) -> Result<String, ProfileError> {
    Ok(toml::to_string_pretty(profile)?)
}
