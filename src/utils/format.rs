//! Formatting utilities for file sizes and language detection.

/// Format file size for display (e.g., "1.5K", "3.4M").
pub fn format_size(size: Option<u64>) -> String {
    match size {
        None => "-".to_string(),
        Some(bytes) => {
            if bytes >= 1_000_000 {
                format!("{:.1}M", bytes as f64 / 1_000_000.0)
            } else if bytes >= 1_000 {
                format!("{:.1}K", bytes as f64 / 1_000.0)
            } else {
                format!("{}B", bytes)
            }
        }
    }
}

/// Map a filename to the highlighter language label shown in the code pane.
///
/// Detection is by the last dot-separated component, which also catches
/// extensionless names like `Dockerfile`. Unrecognized names fall back to
/// `"text"`.
pub fn language_from_extension(filename: &str) -> &'static str {
    let ext = filename
        .rsplit('/')
        .next()
        .and_then(|name| name.rsplit('.').next())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        // JavaScript/TypeScript
        "js" | "mjs" => "javascript",
        "jsx" => "jsx",
        "ts" => "typescript",
        "tsx" => "tsx",
        // Python
        "py" | "pyw" => "python",
        // Java/C/C++
        "java" => "java",
        "c" | "h" => "c",
        "cpp" | "cc" | "cxx" | "hpp" => "cpp",
        // Web
        "html" | "htm" => "html",
        "css" | "less" => "css",
        "scss" | "sass" => "scss",
        // Data/Config
        "json" => "json",
        "xml" => "xml",
        "yaml" | "yml" => "yaml",
        "toml" => "toml",
        "ini" => "ini",
        // Database
        "sql" => "sql",
        // Shell/Scripts
        "sh" | "bash" | "zsh" | "fish" => "bash",
        "ps1" => "powershell",
        // Documentation
        "md" | "markdown" => "markdown",
        "rst" => "rest",
        // Other languages
        "php" => "php",
        "go" => "go",
        "rs" => "rust",
        "rb" => "ruby",
        "swift" => "swift",
        "kt" => "kotlin",
        "scala" => "scala",
        "r" => "r",
        "dockerfile" => "docker",
        "gitignore" => "text",
        _ => "text",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(None), "-");
        assert_eq!(format_size(Some(500)), "500B");
        assert_eq!(format_size(Some(1500)), "1.5K");
        assert_eq!(format_size(Some(1_500_000)), "1.5M");
    }

    #[test]
    fn test_language_from_extension() {
        assert_eq!(language_from_extension("main.rs"), "rust");
        assert_eq!(language_from_extension("src/app.tsx"), "tsx");
        assert_eq!(language_from_extension("Dockerfile"), "docker");
        assert_eq!(language_from_extension("config.yml"), "yaml");
        assert_eq!(language_from_extension("LICENSE"), "text");
        assert_eq!(language_from_extension(".gitignore"), "text");
    }
}
