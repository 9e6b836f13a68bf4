//! 桌面端媒体库：以一个根目录模拟共享媒体索引。
//!
//! - RELATIVE_PATH 存在时写入 `<root>/<relative_path>/`，否则写入 `<root>/<default_dir>/`
//! - 显示名冲突时按 `name (1).jpg`、`name (2).jpg` 递增，用 create_new 保证并发下不会复用同一文件
//! - 记录只是本次会话的登记表（最多 `record_limit` 条，超出淘汰最早的），进程退出后只剩文件本身

use chrono::Utc;
use std::collections::{HashMap, VecDeque};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use super::MediaStore;
use crate::models::{MediaHandle, MediaMetadata, MediaRecord};
use crate::settings::DEFAULT_PICTURES_DIR;

/// 同名文件最多尝试的后缀数量。
const MAX_NAME_ATTEMPTS: u32 = 10_000;
/// 登记表默认容量。淘汰只影响登记，不删除文件。
const DEFAULT_RECORD_LIMIT: usize = 1024;

#[derive(Default)]
struct Registry {
    records: HashMap<MediaHandle, MediaRecord>,
    order: VecDeque<MediaHandle>,
}

impl Registry {
    fn insert(&mut self, record: MediaRecord, limit: usize) {
        while self.records.len() >= limit.max(1) {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            self.records.remove(&oldest);
        }
        self.order.push_back(record.handle.clone());
        self.records.insert(record.handle.clone(), record);
    }

    fn remove(&mut self, handle: &MediaHandle) -> Option<MediaRecord> {
        let record = self.records.remove(handle)?;
        self.order.retain(|h| h != handle);
        Some(record)
    }
}

pub struct DirectoryMediaStore {
    root: PathBuf,
    default_dir: String,
    record_limit: usize,
    registry: Mutex<Registry>,
}

impl DirectoryMediaStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            default_dir: DEFAULT_PICTURES_DIR.to_string(),
            record_limit: DEFAULT_RECORD_LIMIT,
            registry: Mutex::new(Registry::default()),
        }
    }

    /// 以用户主目录为根（图片落到 `~/Pictures/...`）。
    pub fn user_default() -> io::Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Failed to get home directory")
        })?;
        Ok(Self::new(home))
    }

    /// 没有 RELATIVE_PATH 时使用的目录（相对于根目录）。
    pub fn with_default_dir(mut self, dir: impl Into<String>) -> Self {
        self.default_dir = dir.into();
        self
    }

    /// 登记表容量（至少 1）。
    pub fn with_record_limit(mut self, limit: usize) -> Self {
        self.record_limit = limit.max(1);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 本次会话登记的记录，按落盘路径排序。
    pub fn records(&self) -> io::Result<Vec<MediaRecord>> {
        let mut list: Vec<MediaRecord> = self.lock()?.records.values().cloned().collect();
        list.sort_by(|a, b| a.location.cmp(&b.location));
        Ok(list)
    }

    pub fn record(&self, handle: &MediaHandle) -> io::Result<Option<MediaRecord>> {
        Ok(self.lock()?.records.get(handle).cloned())
    }

    fn lock(&self) -> io::Result<MutexGuard<'_, Registry>> {
        self.registry
            .lock()
            .map_err(|_| io::Error::other("media index lock poisoned"))
    }

    fn target_dir(&self, relative_path: Option<&str>) -> io::Result<PathBuf> {
        let rel = relative_path.unwrap_or(&self.default_dir);
        let rel_path = Path::new(rel);
        let escapes = rel_path
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Relative path must stay inside the media root: {}", rel),
            ));
        }
        Ok(self.root.join(rel_path))
    }

    /// 以 create_new 占位一个不重名的文件，返回其路径。
    fn create_unique(dir: &Path, display_name: &str) -> io::Result<PathBuf> {
        let name = Path::new(display_name);
        let stem = name
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| display_name.to_string());
        let ext = name.extension().map(|e| e.to_string_lossy().to_string());

        for n in 0..MAX_NAME_ATTEMPTS {
            let candidate = match (n, &ext) {
                (0, _) => display_name.to_string(),
                (_, Some(ext)) => format!("{} ({}).{}", stem, n, ext),
                (_, None) => format!("{} ({})", stem, n),
            };
            let path = dir.join(candidate);
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(_) => return Ok(path),
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(e),
            }
        }
        Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Too many files named {} in {}", display_name, dir.display()),
        ))
    }
}

impl MediaStore for DirectoryMediaStore {
    type Writer = File;

    fn insert(&self, metadata: &MediaMetadata) -> io::Result<Option<MediaHandle>> {
        if metadata.display_name.is_empty()
            || metadata.display_name.contains(['/', '\\'])
            || metadata.display_name == ".."
        {
            // 与 MediaStore 一致：无效显示名时拒绝插入而不是抛错
            tracing::warn!(display_name = %metadata.display_name, "rejecting invalid display name");
            return Ok(None);
        }

        let dir = self.target_dir(metadata.relative_path.as_deref())?;
        fs::create_dir_all(&dir)?;
        let location = Self::create_unique(&dir, &metadata.display_name)?;

        let handle = MediaHandle::new(format!("media://{}", uuid::Uuid::new_v4()));
        let record = MediaRecord {
            handle: handle.clone(),
            metadata: metadata.clone(),
            location,
            date_added: Utc::now(),
        };
        self.lock()?.insert(record, self.record_limit);
        Ok(Some(handle))
    }

    fn open_write_stream(&self, handle: &MediaHandle) -> io::Result<File> {
        let location = self
            .lock()?
            .records
            .get(handle)
            .map(|r| r.location.clone())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("Unknown media entry: {}", handle),
                )
            })?;
        OpenOptions::new().write(true).truncate(true).open(location)
    }

    fn delete(&self, handle: &MediaHandle) -> io::Result<()> {
        let Some(record) = self.lock()?.remove(handle) else {
            return Ok(());
        };
        match fs::remove_file(&record.location) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}
