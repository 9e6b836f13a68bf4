use tauri::{command, AppHandle, Runtime};

use crate::{MediaStoreExt, MethodCall, MethodResult, Result};

/// 保存图片到相册，成功返回 `true`；失败时错误为 `{ code, message }`。
#[command]
pub(crate) async fn save_image<R: Runtime>(app: AppHandle<R>, path: Option<String>) -> Result<bool> {
  app.media_store().save_image(path).await?;
  Ok(true)
}

/// 以 `media_store` channel 的形式调用（方法名 + 参数表）。
#[command]
pub(crate) async fn invoke_method<R: Runtime>(app: AppHandle<R>, call: MethodCall) -> Result<MethodResult> {
  app.media_store().handle(call).await
}
