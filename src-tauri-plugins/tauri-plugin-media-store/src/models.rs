use serde::{Deserialize, Serialize};

/// platformInfo 的返回：Android SDK 版本。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformInfoResponse {
  pub sdk_int: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertImageArgs {
  pub display_name: String,
  pub mime_type: String,
  pub relative_path: Option<String>,
}

/// insertImage 的返回：媒体库拒绝时 uri 为空。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertImageResponse {
  pub uri: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryArgs {
  pub uri: String,
}

/// 追加写入一段 base64 数据。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteChunkArgs {
  pub uri: String,
  pub data: String,
}
