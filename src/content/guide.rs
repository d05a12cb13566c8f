use super::{Block, ContentProvider, Document};
use crate::catalog::SubtopicId;
use anyhow::{Result, bail};

/// A parsed guide page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Guide {
    id: SubtopicId,
    document: Document,
}

impl Guide {
    pub fn id(&self) -> &SubtopicId {
        &self.id
    }

    #[cfg(test)]
    pub(crate) fn document(&self) -> &Document {
        &self.document
    }
}

impl ContentProvider for Guide {
    fn render(&self) -> Document {
        self.document.clone()
    }
}

/// Parses the small markdown dialect the guides are written in:
/// `# ` title (first non-blank line), `## ` headings, `- ` bullets,
/// fenced code blocks, and paragraphs separated by blank lines.
pub fn parse_guide(id: SubtopicId, source: &str) -> Result<Guide> {
    let mut title: Option<String> = None;
    let mut blocks = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();
    let mut code: Option<(Option<String>, Vec<&str>)> = None;

    for (line_no, line) in source.lines().enumerate() {
        if let Some((lang, lines)) = code.as_mut() {
            if line.trim_start().starts_with("```") {
                blocks.push(Block::Code {
                    lang: lang.take(),
                    text: lines.join("\n"),
                });
                code = None;
            } else {
                lines.push(line);
            }
            continue;
        }

        let trimmed = line.trim();

        if title.is_none() {
            if trimmed.is_empty() {
                continue;
            }
            match trimmed.strip_prefix("# ") {
                Some(text) => {
                    title = Some(text.trim().to_string());
                    continue;
                }
                None => bail!("guide {id}: line {} comes before the title", line_no + 1),
            }
        }

        if trimmed.is_empty() {
            flush_paragraph(&mut paragraph, &mut blocks);
        } else if let Some(fence) = trimmed.strip_prefix("```") {
            flush_paragraph(&mut paragraph, &mut blocks);
            let lang = fence.trim();
            let lang = (!lang.is_empty()).then(|| lang.to_string());
            code = Some((lang, Vec::new()));
        } else if let Some(text) = trimmed.strip_prefix("## ") {
            flush_paragraph(&mut paragraph, &mut blocks);
            blocks.push(Block::Heading(text.trim().to_string()));
        } else if let Some(text) = trimmed.strip_prefix("- ") {
            flush_paragraph(&mut paragraph, &mut blocks);
            blocks.push(Block::Bullet(text.trim().to_string()));
        } else {
            paragraph.push(trimmed);
        }
    }

    if code.is_some() {
        bail!("guide {id}: unterminated code block");
    }
    flush_paragraph(&mut paragraph, &mut blocks);

    let Some(title) = title else {
        bail!("guide {id}: missing title line");
    };

    Ok(Guide {
        id,
        document: Document { title, blocks },
    })
}

fn flush_paragraph(paragraph: &mut Vec<&str>, blocks: &mut Vec<Block>) {
    if !paragraph.is_empty() {
        blocks.push(Block::Paragraph(paragraph.join(" ")));
        paragraph.clear();
    }
}
