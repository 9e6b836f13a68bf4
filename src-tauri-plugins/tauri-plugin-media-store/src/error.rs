use gallery_saver_core::error::CODE_SAVE_FAILED;
use gallery_saver_core::{SaveError, SettingsError};
use serde::{ser::SerializeStruct, ser::Serializer, Serialize};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error(transparent)]
  Save(#[from] SaveError),
  #[error(transparent)]
  Settings(#[from] SettingsError),
  #[error(transparent)]
  Io(#[from] std::io::Error),
  #[error(transparent)]
  Tauri(#[from] tauri::Error),
  #[cfg(mobile)]
  #[error(transparent)]
  PluginInvoke(#[from] tauri::plugin::mobile::PluginInvokeError),
}

impl Error {
  /// 前端看到的错误码：`NO_PATH` / `SAVE_FAILED`。
  pub fn code(&self) -> &'static str {
    match self {
      Error::Save(e) => e.code(),
      _ => CODE_SAVE_FAILED,
    }
  }
}

/// 序列化为 `{ code, message }`，与 channel 上的错误结构一致。
impl Serialize for Error {
  fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    let mut s = serializer.serialize_struct("Error", 2)?;
    s.serialize_field("code", self.code())?;
    s.serialize_field("message", &self.to_string())?;
    s.end()
  }
}
