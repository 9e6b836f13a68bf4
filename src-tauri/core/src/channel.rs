//! `media_store` channel：方法名 + 参数表 → 成功 / 结构化错误 / 未实现。
//!
//! 宿主层（Tauri 命令、移动端消息通道）把调用转成 [`MethodCall`]，
//! 这里同步执行并返回带标签的 [`MethodResult`]，所有错误都在边界处转成响应。

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SaveError;
use crate::media_store::MediaStore;
use crate::saver::GallerySaver;

pub const CHANNEL_NAME: &str = "media_store";
pub const METHOD_SAVE_IMAGE: &str = "saveImage";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodCall {
    pub method: String,
    #[serde(default)]
    pub arguments: Value,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, arguments: Value) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }

    /// 读取字符串参数；缺失、null 或非字符串都视为没有提供。
    pub fn string_argument(&self, key: &str) -> Option<&str> {
        match self.arguments.get(key) {
            Some(Value::String(s)) => Some(s.as_str()),
            Some(Value::Null) | None => None,
            Some(other) => {
                tracing::warn!(key, value = %other, "ignoring non-string argument");
                None
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum MethodResult {
    Success {
        result: Value,
    },
    Error {
        code: String,
        message: String,
        #[serde(default)]
        details: Option<Value>,
    },
    NotImplemented,
}

impl MethodResult {
    pub fn success(result: impl Into<Value>) -> Self {
        Self::Success {
            result: result.into(),
        }
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Error {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

impl From<SaveError> for MethodResult {
    fn from(e: SaveError) -> Self {
        Self::error(e.code(), e.to_string())
    }
}

/// 挂在 `media_store` 上的处理器。
pub struct MediaChannel<S: MediaStore> {
    saver: GallerySaver<S>,
}

impl<S: MediaStore> MediaChannel<S> {
    pub fn new(saver: GallerySaver<S>) -> Self {
        Self { saver }
    }

    pub fn name(&self) -> &'static str {
        CHANNEL_NAME
    }

    pub fn saver(&self) -> &GallerySaver<S> {
        &self.saver
    }

    /// 分发一次调用。
    pub fn handle(&self, call: &MethodCall) -> MethodResult {
        match call.method.as_str() {
            METHOD_SAVE_IMAGE => self.handle_save_image(call),
            other => {
                tracing::debug!(method = other, channel = CHANNEL_NAME, "method not implemented");
                MethodResult::NotImplemented
            }
        }
    }

    fn handle_save_image(&self, call: &MethodCall) -> MethodResult {
        match self.saver.save_image(call.string_argument("path")) {
            Ok(_) => MethodResult::success(true),
            Err(e) => e.into(),
        }
    }
}
