//! Line-prefix markup used by article bodies.
//!
//! A body is a series of paragraphs separated by blank lines. Each paragraph
//! is classified by how it starts:
//!
//! - `# `, `## `, `### ` start a heading
//! - `- ` starts a bullet list, one item per line
//! - `1. ` (any number) starts a numbered list, one item per line
//! - a run of three or more `-` is a separator
//!
//! Everything else is a plain paragraph. Parsing never fails.

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph(String),
    BulletList(Vec<String>),
    NumberedList(Vec<String>),
    Separator,
}

pub fn parse_body(body: &str) -> Vec<Block> {
    split_paragraphs(body).map(classify).collect()
}

fn split_paragraphs(body: &str) -> impl Iterator<Item = String> + '_ {
    let mut lines = body.lines().peekable();
    std::iter::from_fn(move || {
        while lines.peek().map_or(false, |l| l.trim().is_empty()) {
            lines.next();
        }
        lines.peek()?;
        let mut paragraph = Vec::new();
        while let Some(line) = lines.next_if(|l| !l.trim().is_empty()) {
            paragraph.push(line);
        }
        Some(paragraph.join("\n").trim().to_string())
    })
}

fn classify(paragraph: String) -> Block {
    if let Some((level, text)) = heading(&paragraph) {
        return Block::Heading { level, text: text.to_string() };
    }
    if is_separator(&paragraph) {
        return Block::Separator;
    }
    if paragraph.starts_with("- ") {
        let items = paragraph
            .lines()
            .map(|line| line.trim().strip_prefix("- ").unwrap_or(line.trim()).to_string())
            .collect();
        return Block::BulletList(items);
    }
    if numbered_item(&paragraph).is_some() {
        let items = paragraph
            .lines()
            .map(|line| numbered_item(line.trim()).unwrap_or(line.trim()).to_string())
            .collect();
        return Block::NumberedList(items);
    }
    Block::Paragraph(paragraph)
}

fn heading(paragraph: &str) -> Option<(u8, &str)> {
    [("### ", 3), ("## ", 2), ("# ", 1)]
        .into_iter()
        .find_map(|(marker, level)| paragraph.strip_prefix(marker).map(|text| (level, text.trim())))
}

fn is_separator(paragraph: &str) -> bool {
    paragraph.len() >= 3 && paragraph.chars().all(|c| c == '-')
}

/// Text after a leading `<digits>. ` marker.
fn numbered_item(line: &str) -> Option<&str> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    line[digits..].strip_prefix(". ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_paragraph_and_bullets() {
        let blocks = parse_body("# Title\n\nSome text\n\n- item one\n- item two");
        assert_eq!(
            blocks,
            vec![
                Block::Heading { level: 1, text: "Title".into() },
                Block::Paragraph("Some text".into()),
                Block::BulletList(vec!["item one".into(), "item two".into()]),
            ]
        );
    }

    #[test]
    fn heading_levels() {
        let blocks = parse_body("## Sub\n\n### Minor");
        assert_eq!(
            blocks,
            vec![
                Block::Heading { level: 2, text: "Sub".into() },
                Block::Heading { level: 3, text: "Minor".into() },
            ]
        );
    }

    #[test]
    fn numbered_lists_strip_any_number() {
        let blocks = parse_body("1. Call us\n2. We come to you\n10. Drive away");
        assert_eq!(
            blocks,
            vec![Block::NumberedList(vec![
                "Call us".into(),
                "We come to you".into(),
                "Drive away".into(),
            ])]
        );
    }

    #[test]
    fn separators_and_blank_runs() {
        let blocks = parse_body("\n\n  first  \n\n\n---\n\n   \n\nlast\n");
        assert_eq!(
            blocks,
            vec![
                Block::Paragraph("first".into()),
                Block::Separator,
                Block::Paragraph("last".into()),
            ]
        );
    }

    #[test]
    fn only_the_leading_marker_decides() {
        // a list that does not open the paragraph stays inside it
        let blocks = parse_body("Ignoring this leads to:\n- limp mode\n- failed MOT");
        assert_eq!(
            blocks,
            vec![Block::Paragraph("Ignoring this leads to:\n- limp mode\n- failed MOT".into())]
        );
        assert_eq!(parse_body("2020. A year"), vec![Block::NumberedList(vec!["A year".into()])]);
        assert_eq!(parse_body("3.5 litre engine"), vec![Block::Paragraph("3.5 litre engine".into())]);
        assert_eq!(parse_body("-- not quite"), vec![Block::Paragraph("-- not quite".into())]);
    }

    #[test]
    fn empty_body_has_no_blocks() {
        assert!(parse_body("").is_empty());
        assert!(parse_body("\n \n\t\n").is_empty());
    }

    #[test]
    fn authored_articles_parse() {
        for article in crate::content::articles::ARTICLES {
            let blocks = parse_body(article.body);
            assert_eq!(
                blocks.first(),
                Some(&Block::Heading { level: 1, text: article.title.to_string() })
            );
            assert!(blocks.contains(&Block::Separator));
        }
    }
}
