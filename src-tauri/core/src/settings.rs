//! 保存行为配置。既可以从 JSON 文件加载，也可以作为 Tauri 插件配置
//! （`plugins.media-store`）直接反序列化。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::SCOPED_STORAGE_MIN_SDK;

/// 构建时注入的默认相册名（见 build.rs）。
pub const DEFAULT_ALBUM: &str = env!("GALLERY_DEFAULT_ALBUM");
pub const DEFAULT_PICTURES_DIR: &str = "Pictures";
pub const DEFAULT_MIME_TYPE: &str = "image/jpeg";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write settings file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid setting `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// 复制失败后对已分配条目的处理方式。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrphanPolicy {
    /// 删除残留条目，相册里不会出现 0 字节/半截图片
    #[default]
    Delete,
    /// 保留残留条目，交给媒体库自行处理
    Keep,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GallerySettings {
    /// 相册目录名
    pub album: String,
    pub pictures_dir: String,
    pub mime_type: String,
    pub orphan_policy: OrphanPolicy,
    pub scoped_storage_min_sdk: u32,
}

impl Default for GallerySettings {
    fn default() -> Self {
        Self {
            album: DEFAULT_ALBUM.to_string(),
            pictures_dir: DEFAULT_PICTURES_DIR.to_string(),
            mime_type: DEFAULT_MIME_TYPE.to_string(),
            orphan_policy: OrphanPolicy::default(),
            scoped_storage_min_sdk: SCOPED_STORAGE_MIN_SDK,
        }
    }
}

impl GallerySettings {
    /// `Pictures/<album>`，作为 RELATIVE_PATH 提示。
    pub fn relative_path(&self) -> String {
        format!(
            "{}/{}",
            self.pictures_dir.trim_end_matches('/'),
            self.album
        )
    }

    pub fn from_json_str(content: &str) -> Result<Self, SettingsError> {
        // 空内容按默认值处理
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let settings: Self = serde_json::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// 读取设置文件；文件不存在时返回默认值。
    pub fn load(file: &Path) -> Result<Self, SettingsError> {
        if !file.exists() {
            tracing::debug!(path = %file.display(), "settings file not found, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(file).map_err(|source| SettingsError::Read {
            path: file.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// 先写临时文件再替换，避免写到一半的配置被读到。
    pub fn save(&self, file: &Path) -> Result<(), SettingsError> {
        self.validate()?;
        let write_err = |source| SettingsError::Write {
            path: file.to_path_buf(),
            source,
        };
        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        let tmp = file.with_extension("json.tmp");
        fs::write(&tmp, content).map_err(write_err)?;
        fs::rename(&tmp, file).map_err(write_err)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let album = self.album.trim();
        if album.is_empty() {
            return Err(SettingsError::Invalid {
                key: "album",
                reason: "must not be empty".to_string(),
            });
        }
        if album != self.album {
            return Err(SettingsError::Invalid {
                key: "album",
                reason: format!("`{}` has leading or trailing whitespace", self.album),
            });
        }
        if album.contains(['/', '\\']) || album == "." || album == ".." {
            return Err(SettingsError::Invalid {
                key: "album",
                reason: format!("`{}` is not a single folder name", self.album),
            });
        }
        if self.pictures_dir.trim().is_empty() {
            return Err(SettingsError::Invalid {
                key: "picturesDir",
                reason: "must not be empty".to_string(),
            });
        }
        if !self.mime_type.contains('/') {
            return Err(SettingsError::Invalid {
                key: "mimeType",
                reason: format!("`{}` is not a MIME type", self.mime_type),
            });
        }
        Ok(())
    }
}
