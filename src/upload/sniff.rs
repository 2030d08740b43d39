/// 已知图片格式的文件头
const IMAGE_SIGNATURES: &[(&[u8], &str)] = &[
    (b"\x89PNG\r\n\x1a\n", "image/png"),
    (b"\xff\xd8\xff", "image/jpeg"),
    (b"GIF87a", "image/gif"),
    (b"GIF89a", "image/gif"),
    (b"BM", "image/bmp"),
    (b"\x00\x00\x01\x00", "image/x-icon"),
    (b"\x00\x00\x02\x00", "image/x-icon"),
];

/// 根据内容前缀判断是否为图片，返回对应的 MIME 类型
///
/// 只看文件内容，不看文件名。
pub fn sniff_image(data: &[u8]) -> Option<&'static str> {
    // RIFF 容器：4 字节长度之后是 WEBPVP
    if data.len() >= 14 && data.starts_with(b"RIFF") && &data[8..14] == b"WEBPVP" {
        return Some("image/webp");
    }

    IMAGE_SIGNATURES
        .iter()
        .find(|(sig, _)| data.starts_with(sig))
        .map(|(_, mime)| *mime)
}
