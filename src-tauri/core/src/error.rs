use serde::{ser::Serializer, Serialize};

/// channel 错误码：缺少 path 参数。
pub const CODE_NO_PATH: &str = "NO_PATH";
/// channel 错误码：分配条目或复制失败。
pub const CODE_SAVE_FAILED: &str = "SAVE_FAILED";

pub type Result<T> = std::result::Result<T, SaveError>;

/// 保存图片的失败类型。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SaveError {
    /// 调用方没有提供 path（null 或空串），未做任何 IO。
    #[error("Image path is null")]
    MissingArgument,
    /// 媒体库拒绝创建条目，没有写入任何数据。
    #[error("MediaStore insert failed: {message}")]
    StorageAllocationFailed { message: String },
    /// 复制过程中出错；条目可能已经存在（见 OrphanPolicy）。
    #[error("{message}")]
    CopyFailed { message: String },
}

impl SaveError {
    pub fn allocation(message: impl Into<String>) -> Self {
        Self::StorageAllocationFailed {
            message: message.into(),
        }
    }

    pub fn copy(err: impl ToString) -> Self {
        Self::CopyFailed {
            message: err.to_string(),
        }
    }

    /// 对应 channel 上的错误码。
    pub fn code(&self) -> &'static str {
        match self {
            SaveError::MissingArgument => CODE_NO_PATH,
            SaveError::StorageAllocationFailed { .. } | SaveError::CopyFailed { .. } => {
                CODE_SAVE_FAILED
            }
        }
    }
}

impl Serialize for SaveError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_and_messages() {
        assert_eq!(SaveError::MissingArgument.code(), "NO_PATH");
        assert_eq!(SaveError::MissingArgument.to_string(), "Image path is null");

        let e = SaveError::allocation("returned no handle");
        assert_eq!(e.code(), "SAVE_FAILED");
        assert_eq!(e.to_string(), "MediaStore insert failed: returned no handle");

        let io = std::io::Error::new(std::io::ErrorKind::Other, "No space left on device");
        let e = SaveError::copy(io);
        assert_eq!(e.code(), "SAVE_FAILED");
        assert_eq!(e.to_string(), "No space left on device");
    }
}
