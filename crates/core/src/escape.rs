//! Escaping for text embedded in automation scripts.
//!
//! Only the characters that would terminate the surrounding string literal
//! are handled. Shell metacharacters such as `$`, backticks or newlines pass
//! through untouched and will be interpreted by the shell that finally runs
//! the command.

/// Escapes text for an AppleScript double-quoted string literal.
///
/// Backslashes are escaped before double quotes so the added backslashes are
/// not themselves doubled.
///
/// # Examples
///
/// ```
/// use termlaunch_core::escape::applescript_string;
///
/// assert_eq!(applescript_string(r#"echo "a\b""#), r#"echo \"a\\b\""#);
/// ```
pub fn applescript_string(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Escapes text for a PowerShell single-quoted string literal.
///
/// # Examples
///
/// ```
/// use termlaunch_core::escape::powershell_single_quoted;
///
/// assert_eq!(powershell_single_quoted("it's"), "it''s");
/// ```
pub fn powershell_single_quoted(text: &str) -> String {
    text.replace('\'', "''")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reads an AppleScript string literal body back the way `osascript` does.
    fn applescript_unescape(literal: &str) -> String {
        let mut result = String::new();
        let mut chars = literal.chars();
        while let Some(c) = chars.next() {
            if c == '\\' {
                if let Some(next) = chars.next() {
                    result.push(next);
                }
            } else {
                result.push(c);
            }
        }
        result
    }

    #[test]
    fn test_applescript_round_trip() {
        let original = r#"cd '/tmp/x' && printf "%s\n" "a\"b" C:\dir"#;
        let escaped = applescript_string(original);
        assert_eq!(applescript_unescape(&escaped), original);
    }

    #[test]
    fn test_applescript_escapes_backslash_before_quote() {
        assert_eq!(applescript_string(r#"\""#), r#"\\\""#);
    }

    #[test]
    fn test_applescript_leaves_other_metacharacters() {
        let text = "echo $HOME `date`\nls";
        assert_eq!(applescript_string(text), text);
    }

    #[test]
    fn test_applescript_leaves_single_quotes() {
        assert_eq!(applescript_string("cd '/a b'"), "cd '/a b'");
    }

    #[test]
    fn test_powershell_doubles_single_quotes() {
        assert_eq!(powershell_single_quoted("'a' 'b'"), "''a'' ''b''");
    }

    #[test]
    fn test_powershell_leaves_double_quotes_and_backslashes() {
        let text = r#"cd /d "C:\Users\me" && echo $x"#;
        assert_eq!(powershell_single_quoted(text), text);
    }
}
