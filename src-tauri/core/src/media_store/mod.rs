//! 媒体库抽象：宿主平台的内容索引服务（Android MediaStore / 桌面目录）。
//!
//! GallerySaver 只通过这个 trait 访问媒体库，测试中可以替换成记录调用的假实现。

use std::io::{self, Write};

use crate::models::{MediaHandle, MediaMetadata};

mod directory;
mod latched;
#[cfg(test)]
pub(crate) mod fake;

pub use directory::DirectoryMediaStore;
pub use latched::LatchedWriter;

pub trait MediaStore: Send + Sync {
    type Writer: Write;

    /// 分配一个新的图片条目。平台拒绝时返回 `Ok(None)`。
    fn insert(&self, metadata: &MediaMetadata) -> io::Result<Option<MediaHandle>>;

    /// 打开条目的只写流。流在 drop 时关闭。
    fn open_write_stream(&self, handle: &MediaHandle) -> io::Result<Self::Writer>;

    /// 删除条目（复制失败后的残留清理）。
    fn delete(&self, handle: &MediaHandle) -> io::Result<()>;
}

impl<S: MediaStore + ?Sized> MediaStore for std::sync::Arc<S> {
    type Writer = S::Writer;

    fn insert(&self, metadata: &MediaMetadata) -> io::Result<Option<MediaHandle>> {
        (**self).insert(metadata)
    }

    fn open_write_stream(&self, handle: &MediaHandle) -> io::Result<Self::Writer> {
        (**self).open_write_stream(handle)
    }

    fn delete(&self, handle: &MediaHandle) -> io::Result<()> {
        (**self).delete(handle)
    }
}
