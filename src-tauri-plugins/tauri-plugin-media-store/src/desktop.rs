use std::sync::Arc;

use gallery_saver_core::{DirectoryMediaStore, GallerySaver, GallerySettings, MediaChannel, PlatformInfo};
use serde::de::DeserializeOwned;
use tauri::{plugin::PluginApi, AppHandle, Runtime};

use crate::{MethodCall, MethodResult, SavedImage};

/// 桌面端：图片写入 `~/Pictures/<album>`。
pub fn init<R: Runtime, C: DeserializeOwned>(
  app: &AppHandle<R>,
  _api: PluginApi<R, C>,
  settings: GallerySettings,
) -> crate::Result<MediaStorePlugin<R>> {
  let store = DirectoryMediaStore::user_default()?;
  tracing::info!(root = %store.root().display(), album = %settings.album, "media-store plugin ready");
  let saver = GallerySaver::with_settings(store, PlatformInfo::desktop(), settings);
  Ok(MediaStorePlugin {
    _app: app.clone(),
    channel: Arc::new(MediaChannel::new(saver)),
  })
}

/// Access to the media-store APIs.
pub struct MediaStorePlugin<R: Runtime> {
  _app: AppHandle<R>,
  channel: Arc<MediaChannel<DirectoryMediaStore>>,
}

impl<R: Runtime> MediaStorePlugin<R> {
  pub async fn save_image(&self, path: Option<String>) -> crate::Result<SavedImage> {
    crate::blocking::save_image(self.channel.clone(), path).await
  }

  pub async fn handle(&self, call: MethodCall) -> crate::Result<MethodResult> {
    crate::blocking::handle(self.channel.clone(), call).await
  }
}
