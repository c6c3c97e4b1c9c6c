//! 日志中的SQL预览
//! 多行SQL压成单行，超长部分截断，不产生中间 String

use std::fmt::{self, Write};

/// 单行SQL预览，通过 Display 惰性输出
pub struct SqlPreview<'a> {
    sql: &'a str,
    max_chars: usize,
}

impl fmt::Display for SqlPreview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tokens = self.sql.split_whitespace().peekable();
        let mut written = 0;

        while let Some(token) = tokens.next() {
            for ch in token.chars() {
                if written == self.max_chars {
                    return f.write_char('…');
                }
                f.write_char(ch)?;
                written += 1;
            }
            if tokens.peek().is_some() {
                if written == self.max_chars {
                    return f.write_char('…');
                }
                f.write_char(' ')?;
                written += 1;
            }
        }
        Ok(())
    }
}

/// 构造SQL预览：空白折叠为单个空格，最多输出 `max_chars` 个字符
pub fn sql_preview(sql: &str, max_chars: usize) -> SqlPreview<'_> {
    SqlPreview { sql, max_chars }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_collapses_whitespace() {
        let sql = "\n    select\n    a, b\n    from t\n";
        assert_eq!(sql_preview(sql, 100).to_string(), "select a, b from t");
    }

    #[test]
    fn test_preview_truncates() {
        let sql = "select * from very_long_table_name";
        assert_eq!(sql_preview(sql, 8).to_string(), "select *…");
    }

    #[test]
    fn test_preview_exact_length_has_no_ellipsis() {
        assert_eq!(sql_preview("abc", 3).to_string(), "abc");
        assert_eq!(sql_preview("  abc \n", 3).to_string(), "abc");
    }
}
