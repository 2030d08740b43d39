use std::{
    io,
    path::{Path, PathBuf},
    sync::atomic::{AtomicI64, Ordering},
};

use chrono::Utc;
use tokio::{fs, io::AsyncWriteExt};

/// 上传文件对外访问的 URL 前缀
pub const PUBLIC_PREFIX: &str = "/uploads";

/// 已保存的上传文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// 生成的文件名
    pub file_name: String,
    /// 对外访问路径，形如 `/uploads/<file_name>`
    pub url: String,
}

/// 本地磁盘上的上传目录
///
/// 文件名由单调递增的纳秒时间戳加原始扩展名组成，同一进程内不会重复。
/// 文件只写不删。
#[derive(Debug)]
pub struct UploadStore {
    dir: PathBuf,
    last_stamp: AtomicI64,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            last_stamp: AtomicI64::new(0),
        }
    }

    /// 上传目录
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// 将内容写入新文件，目录不存在时自动创建
    pub async fn save(&self, original_name: Option<&str>, data: &[u8]) -> io::Result<StoredFile> {
        fs::create_dir_all(&self.dir).await?;

        let file_name = format!("{}{}", self.next_stamp(), extension_of(original_name));
        let path = self.dir.join(&file_name);

        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await?;
        file.write_all(data).await?;
        file.flush().await?;

        tracing::debug!(path = %path.display(), size = data.len(), "upload saved");

        Ok(StoredFile {
            url: format!("{PUBLIC_PREFIX}/{file_name}"),
            file_name,
        })
    }

    /// 取当前纳秒时间戳，保证严格大于上一次的结果
    fn next_stamp(&self) -> i64 {
        let now = Utc::now().timestamp_nanos_opt().unwrap_or(i64::MAX);
        let mut prev = self.last_stamp.load(Ordering::Relaxed);
        loop {
            let next = now.max(prev.saturating_add(1));
            match self.last_stamp.compare_exchange_weak(
                prev,
                next,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return next,
                Err(actual) => prev = actual,
            }
        }
    }
}

/// 提取原始文件名中的扩展名（含 `.`，转为小写）
///
/// 只接受字母数字组成的扩展名，其余情况返回空字符串。
fn extension_of(original_name: Option<&str>) -> String {
    original_name
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of(Some("photo.JPG")), ".jpg");
        assert_eq!(extension_of(Some("archive.tar.gz")), ".gz");
        assert_eq!(extension_of(Some("no_extension")), "");
        assert_eq!(extension_of(Some("../../etc/passwd")), "");
        assert_eq!(extension_of(Some("evil.p/ng")), "");
        assert_eq!(extension_of(None), "");
    }

    #[test]
    fn test_stamps_strictly_increase() {
        let store = UploadStore::new("unused");
        let mut prev = store.next_stamp();
        for _ in 0..1000 {
            let next = store.next_stamp();
            assert!(next > prev);
            prev = next;
        }
    }

    #[tokio::test]
    async fn test_save_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("uploads");
        let store = UploadStore::new(&dir);

        let stored = store.save(Some("cat.png"), b"\x89PNG\r\n\x1a\n").await.unwrap();

        assert!(stored.file_name.ends_with(".png"));
        assert_eq!(stored.url, format!("/uploads/{}", stored.file_name));
        let written = std::fs::read(dir.join(&stored.file_name)).unwrap();
        assert_eq!(written, b"\x89PNG\r\n\x1a\n");
    }

    #[tokio::test]
    async fn test_concurrent_saves_get_unique_names() {
        let tmp = tempfile::tempdir().unwrap();
        let store = Arc::new(UploadStore::new(tmp.path()));

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.save(Some("a.gif"), b"GIF89a").await })
            })
            .collect();

        let mut names = Vec::new();
        for handle in handles {
            names.push(handle.await.unwrap().unwrap().file_name);
        }
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 16);
    }
}
