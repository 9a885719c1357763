// ABOUTME: Segments SSH config text into Host blocks, strips comments and blank lines
// ABOUTME: Classifies each cleaned block as a global wildcard block or a specific host block

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockKind {
    Global, // Header starts with `Host *`
    Host,
}

/// A cleaned Host block: the header line followed by its directives, joined with `\n`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub text: String,
}

impl Block {
    pub fn new(text: String) -> Self {
        Self {
            kind: classify(&text),
            text,
        }
    }
}

/// Lines collected for one block before cleaning.
pub type RawBlock<'a> = Vec<&'a str>;

/// True when the first whitespace-delimited token is exactly `Host`.
/// `HostName` and friends are directives, not headers.
pub fn is_host_header(line: &str) -> bool {
    match line.strip_prefix("Host") {
        Some(rest) => rest.is_empty() || rest.starts_with(char::is_whitespace),
        None => false,
    }
}

fn is_directive(line: &str) -> bool {
    !line.is_empty() && !line.starts_with('#')
}

/// Splits content into raw blocks, one per `Host` header.
///
/// Lines before the first header are dropped. The final line of the input
/// always closes the in-progress block and is appended to it whatever it
/// contains, even a comment or another `Host` header. Comments and blanks
/// admitted this way are removed again by [`clean`].
pub fn segment(content: &str) -> Vec<RawBlock<'_>> {
    let lines: Vec<&str> = content.split('\n').filter(|line| !line.is_empty()).collect();
    let last = lines.len().saturating_sub(1);

    let mut blocks = Vec::new();
    let mut current: Option<RawBlock<'_>> = None;

    for (index, line) in lines.iter().copied().enumerate() {
        let is_last = index == last;

        if is_host_header(line) || is_last {
            if let Some(mut block) = current.take() {
                if is_last {
                    block.push(line);
                }
                blocks.push(block);
            }
            current = Some(vec![line]);
        } else if is_directive(line) {
            if let Some(block) = current.as_mut() {
                block.push(line);
            }
        }
    }

    blocks
}

/// Drops blank and comment lines, joining the rest with `\n`.
pub fn clean(raw: &[&str]) -> String {
    raw.iter()
        .copied()
        .filter(|line| is_directive(line))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn classify(cleaned: &str) -> BlockKind {
    if cleaned.starts_with("Host *") {
        BlockKind::Global
    } else {
        BlockKind::Host
    }
}

pub fn parse_blocks(content: &str) -> Vec<Block> {
    segment(content)
        .iter()
        .filter_map(|raw| {
            let text = clean(raw);
            if text.is_empty() {
                tracing::debug!("Skipping block with no content after cleaning");
                None
            } else {
                Some(Block::new(text))
            }
        })
        .collect()
}
