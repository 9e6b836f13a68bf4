//! 复制是阻塞 IO，统一放到 blocking 线程池执行，避免卡住 IPC 线程。

use std::sync::Arc;

use gallery_saver_core::{MediaChannel, MediaStore};

use crate::{MethodCall, MethodResult, Result, SavedImage};

pub(crate) async fn save_image<S: MediaStore + 'static>(
  channel: Arc<MediaChannel<S>>,
  path: Option<String>,
) -> Result<SavedImage> {
  let saved = tauri::async_runtime::spawn_blocking(move || {
    channel.saver().save_image(path.as_deref())
  })
  .await??;
  Ok(saved)
}

pub(crate) async fn handle<S: MediaStore + 'static>(
  channel: Arc<MediaChannel<S>>,
  call: MethodCall,
) -> Result<MethodResult> {
  let result = tauri::async_runtime::spawn_blocking(move || channel.handle(&call)).await?;
  Ok(result)
}
