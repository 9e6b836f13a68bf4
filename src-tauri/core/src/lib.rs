//! Gallery Saver 核心库：把本地图片写入系统共享相册（媒体库），供 Tauri 插件与其他宿主复用。

pub mod channel;
pub mod error;
pub mod media_store;
pub mod models;
pub mod saver;
pub mod settings;

pub use channel::{MediaChannel, MethodCall, MethodResult, CHANNEL_NAME, METHOD_SAVE_IMAGE};
pub use error::{Result, SaveError};
pub use media_store::{DirectoryMediaStore, LatchedWriter, MediaStore};
pub use models::{
    MediaHandle, MediaMetadata, MediaRecord, PlatformInfo, SavedImage,
    SCOPED_STORAGE_MIN_SDK,
};
pub use saver::GallerySaver;
pub use settings::{GallerySettings, OrphanPolicy, SettingsError};
