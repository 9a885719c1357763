// ABOUTME: Renders parsed Host blocks back into SSH config text with sorted sections
// ABOUTME: Adds banner comments above GitHub and SSH server blocks recognized by their Host pattern

use crate::ssh::parser::{Block, BlockKind};
use std::cmp::Ordering;

pub const DELIMITER: &str = "==============================";

/// Provider banner derived from a block's `Host` line.
///
/// Matching is exact: only `Host github.<domain>` and `Host ssh.<domain>`
/// headers with a single space after `Host` are recognized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Banner {
    GitHub(String),
    Ssh(String),
    Unrecognized,
}

impl Banner {
    pub fn from_header(header: &str) -> Self {
        let mut segments = header.split('.');
        let kind = segments.next().unwrap_or_default();
        let Some(domain) = segments.next() else {
            return Banner::Unrecognized;
        };

        match kind {
            "Host github" => Banner::GitHub(domain.to_string()),
            "Host ssh" => Banner::Ssh(domain.to_string()),
            _ => Banner::Unrecognized,
        }
    }

    pub fn title(&self) -> Option<String> {
        match self {
            Banner::GitHub(domain) => Some(format!("GitHub [{}] Server", domain)),
            Banner::Ssh(domain) => Some(format!("SSH [{}] Server", domain)),
            Banner::Unrecognized => None,
        }
    }
}

fn comment_header(title: &str) -> String {
    format!("# {DELIMITER}\n# {title}\n# {DELIMITER}")
}

fn header_line(block: &str) -> &str {
    block.lines().next().unwrap_or_default()
}

/// A host block preceded by a blank line and, when recognized, its banner.
pub fn format_host(block: &str) -> String {
    match Banner::from_header(header_line(block)).title() {
        Some(title) => format!("\n{}\n{}", comment_header(&title), block),
        None => format!("\n{}", block),
    }
}

/// Orders by UTF-16 code units, so characters outside the Basic Multilingual
/// Plane sort before U+E000..=U+FFFF rather than after as in byte order.
fn utf16_order(a: &str, b: &str) -> Ordering {
    a.encode_utf16().cmp(b.encode_utf16())
}

/// Sections split by kind, each sorted by full block text.
#[derive(Debug, Default)]
pub struct Sections<'a> {
    pub globals: Vec<&'a str>,
    pub hosts: Vec<&'a str>,
}

impl<'a> Sections<'a> {
    pub fn from_blocks(blocks: &'a [Block]) -> Self {
        let mut sections = Sections::default();

        for block in blocks {
            match block.kind {
                BlockKind::Global => sections.globals.push(&block.text),
                BlockKind::Host => sections.hosts.push(&block.text),
            }
        }

        sections.globals.sort_by(|a, b| utf16_order(a, b));
        sections.hosts.sort_by(|a, b| utf16_order(a, b));
        sections
    }

    pub fn annotated_count(&self) -> usize {
        self.hosts
            .iter()
            .filter(|host| Banner::from_header(header_line(host)) != Banner::Unrecognized)
            .count()
    }

    pub fn render(&self) -> String {
        let formatted_hosts: Vec<String> =
            self.hosts.iter().map(|host| format_host(host)).collect();

        let content = format!(
            "{}\n{}\n{}",
            comment_header("Global SSH settings"),
            self.globals.join("\n"),
            formatted_hosts.join("\n"),
        );

        content.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(text: &str) -> Block {
        Block::new(text.to_string())
    }

    fn render(blocks: &[Block]) -> String {
        Sections::from_blocks(blocks).render()
    }

    #[test]
    fn test_delimiter_width() {
        assert_eq!(DELIMITER.len(), 30);
        assert!(DELIMITER.chars().all(|c| c == '='));
    }

    #[test]
    fn test_banner_from_header() {
        assert_eq!(
            Banner::from_header("Host github.example"),
            Banner::GitHub("example".to_string())
        );
        assert_eq!(
            Banner::from_header("Host ssh.myserver"),
            Banner::Ssh("myserver".to_string())
        );
        assert_eq!(Banner::from_header("Host prod-box"), Banner::Unrecognized);
    }

    #[test]
    fn test_banner_exact_match_only() {
        assert_eq!(Banner::from_header("Host  github.work"), Banner::Unrecognized);
        assert_eq!(Banner::from_header("Host gitlab.work"), Banner::Unrecognized);
        assert_eq!(Banner::from_header("Host my.github.work"), Banner::Unrecognized);
        assert_eq!(Banner::from_header("Host github"), Banner::Unrecognized);
        assert_eq!(Banner::from_header("Host SSH.box"), Banner::Unrecognized);
    }

    #[test]
    fn test_banner_domain_is_second_segment() {
        assert_eq!(
            Banner::from_header("Host github.work.example.com"),
            Banner::GitHub("work".to_string())
        );
    }

    #[test]
    fn test_format_host_with_banner() {
        let formatted = format_host("Host github.example\n    User git");

        assert_eq!(
            formatted,
            "\n# ==============================\n# GitHub [example] Server\n# ==============================\nHost github.example\n    User git"
        );
    }

    #[test]
    fn test_format_host_ssh_banner() {
        let formatted = format_host("Host ssh.myserver");
        assert!(formatted.contains("# SSH [myserver] Server"));
        assert!(formatted.ends_with("\nHost ssh.myserver"));
    }

    #[test]
    fn test_format_host_without_banner() {
        let formatted = format_host("Host prod-box\n    User deploy");

        assert_eq!(formatted, "\nHost prod-box\n    User deploy");
        assert!(!formatted.contains(DELIMITER));
    }

    #[test]
    fn test_sections_sorted_and_segregated() {
        let blocks = vec![
            block("Host zeta\n    User z"),
            block("Host *.corp\n    User corp"),
            block("Host alpha\n    User a"),
            block("Host *\n    Compression yes"),
        ];

        let sections = Sections::from_blocks(&blocks);

        assert_eq!(
            sections.globals,
            vec!["Host *\n    Compression yes", "Host *.corp\n    User corp"]
        );
        assert_eq!(
            sections.hosts,
            vec!["Host alpha\n    User a", "Host zeta\n    User z"]
        );
    }

    #[test]
    fn test_sort_uses_full_block_text() {
        let blocks = vec![block("Host same\n    User b"), block("Host same\n    User a")];

        let sections = Sections::from_blocks(&blocks);

        assert_eq!(
            sections.hosts,
            vec!["Host same\n    User a", "Host same\n    User b"]
        );
    }

    #[test]
    fn test_sort_uses_utf16_code_units() {
        // U+1F600 is a surrogate pair (0xD83D..) and U+FF21 a single unit (0xFF21).
        let blocks = vec![block("Host \u{FF21}"), block("Host \u{1F600}")];

        let sections = Sections::from_blocks(&blocks);

        assert_eq!(sections.hosts, vec!["Host \u{1F600}", "Host \u{FF21}"]);
    }

    #[test]
    fn test_crlf_header_banner_drops_carriage_return() {
        let formatted = format_host("Host github.w\r\n    User git\r");

        assert!(formatted.contains("# GitHub [w] Server\n"));
        assert!(formatted.ends_with("Host github.w\r\n    User git\r"));
    }

    #[test]
    fn test_annotated_count() {
        let blocks = vec![
            block("Host github.work"),
            block("Host ssh.box"),
            block("Host plain"),
        ];

        assert_eq!(Sections::from_blocks(&blocks).annotated_count(), 2);
    }

    #[test]
    fn test_render_layout() {
        let blocks = vec![
            block("Host prod-box\n    User deploy"),
            block("Host *\n    ServerAliveInterval 60"),
            block("Host github.work\n    User git"),
        ];

        let expected = "# ==============================
# Global SSH settings
# ==============================
Host *
    ServerAliveInterval 60

# ==============================
# GitHub [work] Server
# ==============================
Host github.work
    User git

Host prod-box
    User deploy";

        assert_eq!(render(&blocks), expected);
    }

    #[test]
    fn test_render_without_globals() {
        let blocks = vec![block("Host alpha\n    User a")];

        let rendered = render(&blocks);

        assert_eq!(
            rendered,
            "# ==============================\n# Global SSH settings\n# ==============================\n\n\nHost alpha\n    User a"
        );
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(
            render(&[]),
            "# ==============================\n# Global SSH settings\n# =============================="
        );
    }
}
