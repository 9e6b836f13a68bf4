use tauri::{
  plugin::{Builder, TauriPlugin},
  Manager, Runtime,
};

pub use gallery_saver_core::{GallerySettings, MethodCall, MethodResult, SavedImage};
pub use models::*;

#[cfg(desktop)]
mod desktop;
#[cfg(mobile)]
mod mobile;

mod blocking;
mod commands;
mod error;
mod models;

pub use error::{Error, Result};

#[cfg(desktop)]
use desktop::MediaStorePlugin;
#[cfg(mobile)]
use mobile::MediaStorePlugin;

/// Extensions to [`tauri::App`], [`tauri::AppHandle`] and [`tauri::Window`] to access the media-store APIs.
pub trait MediaStoreExt<R: Runtime> {
  fn media_store(&self) -> &MediaStorePlugin<R>;
}

impl<R: Runtime, T: Manager<R>> crate::MediaStoreExt<R> for T {
  fn media_store(&self) -> &MediaStorePlugin<R> {
    self.state::<MediaStorePlugin<R>>().inner()
  }
}

/// Initializes the plugin. 配置取自 `plugins.media-store`，缺省时使用默认值。
pub fn init<R: Runtime>() -> TauriPlugin<R, Option<GallerySettings>> {
  Builder::<R, Option<GallerySettings>>::new("media-store")
    .invoke_handler(tauri::generate_handler![
      commands::save_image,
      commands::invoke_method,
    ])
    .setup(|app, api| {
      let settings = api.config().clone().unwrap_or_default();
      settings.validate()?;
      #[cfg(mobile)]
      let media_store = mobile::init(app, api, settings)?;
      #[cfg(desktop)]
      let media_store = desktop::init(app, api, settings)?;
      app.manage(media_store);
      Ok(())
    })
    .build()
}
