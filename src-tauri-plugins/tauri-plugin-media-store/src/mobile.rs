use std::io::{self, BufWriter, Write};
use std::sync::Arc;

use base64::Engine;
use gallery_saver_core::{
  GallerySaver, GallerySettings, LatchedWriter, MediaChannel, MediaHandle, MediaMetadata, MediaStore,
  PlatformInfo,
};
use serde::de::DeserializeOwned;
use tauri::{
  plugin::{PluginApi, PluginHandle},
  AppHandle, Runtime,
};

use crate::models::*;
use crate::{MethodCall, MethodResult, SavedImage};

/// 每次跨桥写入的数据量，避免每 8KB 调一次 Kotlin。
const CHUNK_SIZE: usize = 512 * 1024;

// initializes the Kotlin plugin class
pub fn init<R: Runtime, C: DeserializeOwned>(
  _app: &AppHandle<R>,
  api: PluginApi<R, C>,
  settings: GallerySettings,
) -> crate::Result<MediaStorePlugin<R>> {
  let handle = api.register_android_plugin("app.gallerysaver.plugin.mediastore", "MediaStorePlugin")?;
  let info: PlatformInfoResponse = handle.run_mobile_plugin("platformInfo", ())?;
  tracing::info!(sdk_int = info.sdk_int, album = %settings.album, "media-store plugin ready");

  let saver = GallerySaver::with_settings(
    PluginMediaStore(Arc::new(handle)),
    PlatformInfo::new(info.sdk_int),
    settings,
  );
  Ok(MediaStorePlugin {
    channel: Arc::new(MediaChannel::new(saver)),
  })
}

/// Access to the media-store APIs.
pub struct MediaStorePlugin<R: Runtime> {
  channel: Arc<MediaChannel<PluginMediaStore<R>>>,
}

impl<R: Runtime> MediaStorePlugin<R> {
  pub async fn save_image(&self, path: Option<String>) -> crate::Result<SavedImage> {
    crate::blocking::save_image(self.channel.clone(), path).await
  }

  pub async fn handle(&self, call: MethodCall) -> crate::Result<MethodResult> {
    crate::blocking::handle(self.channel.clone(), call).await
  }
}

/// 通过 Kotlin 插件访问 ContentResolver 的媒体库实现。
pub struct PluginMediaStore<R: Runtime>(Arc<PluginHandle<R>>);

fn bridge_err(e: tauri::plugin::mobile::PluginInvokeError) -> io::Error {
  io::Error::other(e.to_string())
}

impl<R: Runtime> MediaStore for PluginMediaStore<R> {
  type Writer = BufWriter<LatchedWriter<EntryWriter<R>>>;

  fn insert(&self, metadata: &MediaMetadata) -> io::Result<Option<MediaHandle>> {
    let resp: InsertImageResponse = self
      .0
      .run_mobile_plugin(
        "insertImage",
        InsertImageArgs {
          display_name: metadata.display_name.clone(),
          mime_type: metadata.mime_type.clone(),
          relative_path: metadata.relative_path.clone(),
        },
      )
      .map_err(bridge_err)?;
    Ok(resp.uri.map(MediaHandle::new))
  }

  fn open_write_stream(&self, handle: &MediaHandle) -> io::Result<Self::Writer> {
    // 相当于 openOutputStream(uri, "wt")：确认条目可写并清空
    self
      .0
      .run_mobile_plugin::<()>(
        "truncateEntry",
        EntryArgs {
          uri: handle.to_string(),
        },
      )
      .map_err(bridge_err)?;
    // 写失败后不再跨桥（BufWriter drop 时的 flush 也会被拦下）
    Ok(BufWriter::with_capacity(
      CHUNK_SIZE,
      LatchedWriter::new(EntryWriter {
        handle: self.0.clone(),
        uri: handle.to_string(),
      }),
    ))
  }

  fn delete(&self, handle: &MediaHandle) -> io::Result<()> {
    self
      .0
      .run_mobile_plugin::<()>(
        "deleteEntry",
        EntryArgs {
          uri: handle.to_string(),
        },
      )
      .map_err(bridge_err)
  }
}

/// 追加写入一个媒体条目；每次 write 对应一次 writeChunk。
pub struct EntryWriter<R: Runtime> {
  handle: Arc<PluginHandle<R>>,
  uri: String,
}

impl<R: Runtime> Write for EntryWriter<R> {
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    if buf.is_empty() {
      return Ok(0);
    }
    self
      .handle
      .run_mobile_plugin::<()>(
        "writeChunk",
        WriteChunkArgs {
          uri: self.uri.clone(),
          data: base64::engine::general_purpose::STANDARD.encode(buf),
        },
      )
      .map_err(bridge_err)?;
    Ok(buf.len())
  }

  fn flush(&mut self) -> io::Result<()> {
    Ok(())
  }
}
