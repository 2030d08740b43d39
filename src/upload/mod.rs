mod sniff;
mod store;

pub use self::{
    sniff::sniff_image,
    store::{PUBLIC_PREFIX, StoredFile, UploadStore},
};

/// 上传请求体大小上限（10 MiB）
pub const MAX_UPLOAD_SIZE: usize = 10 * 1024 * 1024;
