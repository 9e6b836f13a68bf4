//! 测试用媒体库：记录每次调用，并可按需注入失败。

use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::MediaStore;
use crate::models::{MediaHandle, MediaMetadata};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailMode {
    #[default]
    None,
    /// insert 返回 None
    RefuseInsert,
    /// insert 返回错误
    InsertError,
    /// open_write_stream 返回错误
    OpenError,
    /// 写入指定字节数后报错
    WriteAfter(usize),
}

#[derive(Default)]
pub struct FakeMediaStore {
    pub fail: FailMode,
    pub inserted: Mutex<Vec<MediaMetadata>>,
    pub entries: Mutex<HashMap<MediaHandle, Arc<Mutex<Vec<u8>>>>>,
    pub deleted: Mutex<Vec<MediaHandle>>,
    pub opened: AtomicUsize,
    pub closed: Arc<AtomicUsize>,
    next_id: AtomicUsize,
}

impl FakeMediaStore {
    pub fn failing(fail: FailMode) -> Self {
        Self {
            fail,
            ..Self::default()
        }
    }

    pub fn inserted(&self) -> Vec<MediaMetadata> {
        self.inserted.lock().unwrap().clone()
    }

    pub fn contents(&self, handle: &MediaHandle) -> Option<Vec<u8>> {
        self.entries
            .lock()
            .unwrap()
            .get(handle)
            .map(|b| b.lock().unwrap().clone())
    }

    pub fn entry_count(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// 任何 media index 调用都会留下痕迹
    pub fn touched(&self) -> bool {
        !self.inserted.lock().unwrap().is_empty()
            || self.opened.load(Ordering::SeqCst) > 0
            || !self.deleted.lock().unwrap().is_empty()
    }

    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    pub fn closed(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }
}

pub struct FakeWriter {
    buf: Arc<Mutex<Vec<u8>>>,
    closed: Arc<AtomicUsize>,
    fail_after: Option<usize>,
}

impl Write for FakeWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let mut buf = self.buf.lock().unwrap();
        if let Some(limit) = self.fail_after {
            if buf.len() >= limit {
                return Err(io::Error::other("No space left on device"));
            }
            let n = data.len().min(limit - buf.len());
            buf.extend_from_slice(&data[..n]);
            return Ok(n);
        }
        buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for FakeWriter {
    fn drop(&mut self) {
        self.closed.fetch_add(1, Ordering::SeqCst);
    }
}

impl MediaStore for FakeMediaStore {
    type Writer = FakeWriter;

    fn insert(&self, metadata: &MediaMetadata) -> io::Result<Option<MediaHandle>> {
        self.inserted.lock().unwrap().push(metadata.clone());
        match self.fail {
            FailMode::RefuseInsert => return Ok(None),
            FailMode::InsertError => return Err(io::Error::other("media provider unavailable")),
            _ => {}
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let handle = MediaHandle::new(format!("content://media/external/images/media/{}", id));
        self.entries
            .lock()
            .unwrap()
            .insert(handle.clone(), Arc::new(Mutex::new(Vec::new())));
        Ok(Some(handle))
    }

    fn open_write_stream(&self, handle: &MediaHandle) -> io::Result<FakeWriter> {
        self.opened.fetch_add(1, Ordering::SeqCst);
        if self.fail == FailMode::OpenError {
            return Err(io::Error::other("openOutputStream returned null"));
        }
        let buf = self
            .entries
            .lock()
            .unwrap()
            .get(handle)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, handle.to_string()))?;
        let fail_after = match self.fail {
            FailMode::WriteAfter(n) => Some(n),
            _ => None,
        };
        Ok(FakeWriter {
            buf,
            closed: self.closed.clone(),
            fail_after,
        })
    }

    fn delete(&self, handle: &MediaHandle) -> io::Result<()> {
        self.deleted.lock().unwrap().push(handle.clone());
        self.entries.lock().unwrap().remove(handle);
        Ok(())
    }
}
