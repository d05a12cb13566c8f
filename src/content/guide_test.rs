#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::catalog::SubtopicId;

    fn parse(source: &str) -> anyhow::Result<Guide> {
        parse_guide(SubtopicId::new("1.10"), source)
    }

    #[test]
    fn test_parse_blocks() {
        let guide = parse(
            "# 1.10 Closures\n\
             \n\
             ## What is a closure?\n\
             A closure keeps access\n\
             to outer variables.\n\
             - remembers its environment\n\
             - enables privacy\n\
             \n\
             ```js\n\
             function outer() {\n\
             \x20 return 1;\n\
             }\n\
             ```\n",
        )
        .unwrap();

        let doc = guide.render();
        assert_eq!(doc.title, "1.10 Closures");
        assert_eq!(
            doc.blocks,
            vec![
                Block::Heading("What is a closure?".to_string()),
                Block::Paragraph("A closure keeps access to outer variables.".to_string()),
                Block::Bullet("remembers its environment".to_string()),
                Block::Bullet("enables privacy".to_string()),
                Block::Code {
                    lang: Some("js".to_string()),
                    text: "function outer() {\n  return 1;\n}".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_code_block_keeps_markdown_lookalikes() {
        let guide = parse("# T\n```\n# not a title\n- not a bullet\n```\n").unwrap();

        assert_eq!(
            guide.document().blocks,
            vec![Block::Code {
                lang: None,
                text: "# not a title\n- not a bullet".to_string(),
            }]
        );
    }

    #[test]
    fn test_missing_title_is_an_error() {
        let err = parse("## Heading only\n").unwrap_err();
        assert!(err.to_string().contains("before the title"));

        let err = parse("\n\n").unwrap_err();
        assert!(err.to_string().contains("missing title"));
    }

    #[test]
    fn test_unterminated_code_block_is_an_error() {
        let err = parse("# T\n```js\nlet x = 1;\n").unwrap_err();
        assert!(err.to_string().contains("unterminated"));
    }

    #[test]
    fn test_every_builtin_guide_parses() {
        let registry = GuideRegistry::builtin();

        for id in registry.ids() {
            let source = registry.source(id).unwrap();
            let guide = parse_guide(id.clone(), source)
                .unwrap_or_else(|e| panic!("guide {id} failed to parse: {e}"));
            let doc = guide.render();
            assert!(doc.title.starts_with(id.as_str()), "title of {id}: {}", doc.title);
            assert!(!doc.blocks.is_empty(), "guide {id} is empty");
        }
    }

    #[test]
    fn test_placeholder_render() {
        let placeholder = Placeholder::new(SubtopicId::new("9.9"), "Unwritten topic");

        let doc = placeholder.render();

        assert_eq!(doc.title, "9.9 Unwritten topic");
        assert_eq!(
            doc.blocks,
            vec![
                Block::Heading("Description".to_string()),
                Block::Paragraph("Description will go here...".to_string()),
                Block::Heading("Example".to_string()),
            ]
        );
    }

    #[test]
    fn test_document_to_text() {
        let doc = Document {
            title: "3.2 Arrow functions".to_string(),
            blocks: vec![
                Block::Heading("Syntax".to_string()),
                Block::Bullet("No own this".to_string()),
                Block::Code {
                    lang: Some("js".to_string()),
                    text: "const f = () => 1;".to_string(),
                },
            ],
        };

        assert_eq!(
            document_to_text(&doc),
            "3.2 Arrow functions\n\nSyntax\n  • No own this\n    const f = () => 1;\n"
        );
    }
}
