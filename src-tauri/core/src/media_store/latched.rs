//! 出错后锁死的写入流。
//!
//! `BufWriter` 在 drop 时会把剩余缓冲再 flush 一次；跨桥写入的条目在复制失败后
//! 马上会被删除，这次 flush 不能再发到平台上。

use std::io::{self, Write};

pub struct LatchedWriter<W: Write> {
    inner: W,
    failed: bool,
}

impl<W: Write> LatchedWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            failed: false,
        }
    }

    pub fn has_failed(&self) -> bool {
        self.failed
    }

    fn latched() -> io::Error {
        io::Error::other("media entry stream failed earlier")
    }
}

impl<W: Write> Write for LatchedWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.failed {
            return Err(Self::latched());
        }
        self.inner.write(buf).inspect_err(|_| self.failed = true)
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.failed {
            return Err(Self::latched());
        }
        self.inner.flush().inspect_err(|_| self.failed = true)
    }
}
