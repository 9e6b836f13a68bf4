//! 媒体库相关的数据模型。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Android Q（API 29）起媒体库支持 RELATIVE_PATH（分区存储）。
pub const SCOPED_STORAGE_MIN_SDK: u32 = 29;

/// 媒体库插入参数（对应 ContentValues 的 DISPLAY_NAME / MIME_TYPE / RELATIVE_PATH）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaMetadata {
    pub display_name: String,
    pub mime_type: String,
    /// 仅分区存储平台携带，例如 `Pictures/AI_Skin`。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_path: Option<String>,
}

/// 媒体库分配的条目句柄（Android 上是 content:// URI）。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaHandle(String);

impl MediaHandle {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 媒体库中的一条记录。创建后归媒体库所有，GallerySaver 不再修改。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaRecord {
    pub handle: MediaHandle,
    pub metadata: MediaMetadata,
    /// 实际落盘位置（目录媒体库）
    pub location: PathBuf,
    pub date_added: DateTime<Utc>,
}

/// 平台信息：只关心 SDK 版本，用于判断是否支持分区存储。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformInfo {
    pub sdk_int: u32,
}

impl PlatformInfo {
    pub fn new(sdk_int: u32) -> Self {
        Self { sdk_int }
    }

    /// 桌面端没有 SDK 版本概念，无论阈值配置为多少都按支持分区存储处理（图片归入相册目录）。
    pub fn desktop() -> Self {
        Self { sdk_int: u32::MAX }
    }

    pub fn supports_scoped_storage(&self, min_sdk: u32) -> bool {
        self.sdk_int >= min_sdk
    }
}

/// 保存成功的结果。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedImage {
    pub handle: MediaHandle,
    pub display_name: String,
    pub bytes_copied: u64,
}

/// 取路径最后一段作为显示名；`..`、根目录等没有文件名时回退为整个字符串。
pub fn display_name_of(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string())
}
