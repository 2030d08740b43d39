/// 根据标题生成文章 slug
///
/// 规则依次为：
///
/// 1. 全部转为小写
/// 2. 空格替换为 `-`
/// 3. `/` 与 `\` 替换为 `-`
/// 4. 删除 `?`、`!`、`.`、`,`
///
/// 不合并连续的 `-`，也不检查与已有文章是否重复。
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .filter_map(|c| match c {
            ' ' | '/' | '\\' => Some('-'),
            '?' | '!' | '.' | ',' => None,
            c => Some(c),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_and_spaces() {
        assert_eq!(slugify("Hello World"), "hello-world");
    }

    #[test]
    fn test_slashes_become_dashes() {
        assert_eq!(slugify("CI/CD and C:\\Paths"), "ci-cd-and-c:-paths");
    }

    #[test]
    fn test_punctuation_removed() {
        assert_eq!(slugify("Why Rust? Because, fast!"), "why-rust-because-fast");
        assert_eq!(slugify("v1.2.3 released."), "v123-released");
    }

    #[test]
    fn test_no_dash_collapsing() {
        assert_eq!(slugify("a  b / c"), "a--b---c");
        assert_eq!(slugify(" leading"), "-leading");
    }

    #[test]
    fn test_other_characters_kept() {
        assert_eq!(slugify("Café_Über-Guide"), "café_über-guide");
        assert_eq!(slugify("Rust 中文 指南"), "rust-中文-指南");
    }

    #[test]
    fn test_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("?!.,"), "");
    }
}
