//! 把本地图片复制进共享相册。

use std::fs::File;
use std::io::{self, Read, Write};

use crate::error::{Result, SaveError};
use crate::media_store::MediaStore;
use crate::models::{display_name_of, MediaHandle, MediaMetadata, PlatformInfo, SavedImage};
use crate::settings::{GallerySettings, OrphanPolicy};

/// 同步阻塞的图片保存器。调用方负责把调用放到非 UI 线程。
pub struct GallerySaver<S: MediaStore> {
    store: S,
    platform: PlatformInfo,
    settings: GallerySettings,
}

impl<S: MediaStore> GallerySaver<S> {
    pub fn new(store: S, platform: PlatformInfo) -> Self {
        Self::with_settings(store, platform, GallerySettings::default())
    }

    pub fn with_settings(store: S, platform: PlatformInfo, settings: GallerySettings) -> Self {
        Self {
            store,
            platform,
            settings,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn settings(&self) -> &GallerySettings {
        &self.settings
    }

    /// 本次插入使用的参数。分区存储平台额外带上 `Pictures/<album>`。
    pub fn metadata_for(&self, path: &str) -> MediaMetadata {
        let relative_path = self
            .platform
            .supports_scoped_storage(self.settings.scoped_storage_min_sdk)
            .then(|| self.settings.relative_path());
        MediaMetadata {
            display_name: display_name_of(path),
            mime_type: self.settings.mime_type.clone(),
            relative_path,
        }
    }

    /// 保存一张图片。成功时媒体库中恰好多出一个条目，内容与源文件逐字节一致。
    pub fn save_image(&self, path: Option<&str>) -> Result<SavedImage> {
        let Some(path) = path.filter(|p| !p.is_empty()) else {
            tracing::warn!("saveImage called without a path");
            return Err(SaveError::MissingArgument);
        };
        tracing::debug!(path, sdk_int = self.platform.sdk_int, "saving image to gallery");

        // 先打开源文件：源文件不存在时不会在相册里留下空条目
        let source = open_source(path).map_err(|e| {
            tracing::warn!(path, error = %e, "failed to open source image");
            SaveError::copy(e)
        })?;

        let metadata = self.metadata_for(path);
        let handle = match self.store.insert(&metadata) {
            Ok(Some(handle)) => handle,
            Ok(None) => {
                tracing::warn!(path, "media store returned no entry");
                return Err(SaveError::allocation("no entry returned"));
            }
            Err(e) => {
                tracing::warn!(path, error = %e, "media store insert failed");
                return Err(SaveError::allocation(e.to_string()));
            }
        };

        match self.copy_into(source, &handle) {
            Ok(bytes) => {
                tracing::info!(path, handle = %handle, bytes, "image saved to gallery");
                Ok(SavedImage {
                    handle,
                    display_name: metadata.display_name,
                    bytes_copied: bytes,
                })
            }
            Err(e) => {
                tracing::warn!(path, handle = %handle, error = %e, "copy into media entry failed");
                self.discard_orphan(&handle);
                Err(SaveError::copy(e))
            }
        }
    }

    /// 两个流都在这里持有所有权，任何返回路径上都只关闭一次。
    fn copy_into<R: Read>(&self, mut source: R, handle: &MediaHandle) -> io::Result<u64> {
        let mut out = self.store.open_write_stream(handle)?;
        let bytes = io::copy(&mut source, &mut out)?;
        out.flush()?;
        Ok(bytes)
    }

    fn discard_orphan(&self, handle: &MediaHandle) {
        match self.settings.orphan_policy {
            OrphanPolicy::Keep => {
                tracing::debug!(handle = %handle, "keeping partial media entry");
            }
            OrphanPolicy::Delete => {
                if let Err(e) = self.store.delete(handle) {
                    tracing::warn!(handle = %handle, error = %e, "failed to delete partial media entry");
                }
            }
        }
    }
}

fn open_source(path: &str) -> io::Result<File> {
    let file = File::open(path)?;
    if !file.metadata()?.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Source is not a file: {}", path),
        ));
    }
    Ok(file)
}
