use anyhow::{Result, anyhow};
use std::collections::HashMap;
use std::sync::Arc;
use swc_common::{
    BytePos, FileName, Globals, SourceMap,
    comments::{Comment, SingleThreadedComments},
};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

/// Comments keyed by the position they are attached to.
pub type CommentMap = HashMap<BytePos, Vec<Comment>>;

/// Owned copy of the parser's comment trivia.
///
/// `SingleThreadedComments` is not `Send`; this copy is plain data.
#[derive(Debug, Clone)]
pub struct ExtractedComments {
    pub leading: CommentMap,
    pub trailing: CommentMap,
}

impl ExtractedComments {
    /// Copy leading and trailing comments out of the parser's store.
    pub fn from_swc(comments: &SingleThreadedComments) -> Self {
        let (leading, trailing) = comments.borrow_all();
        Self {
            leading: leading.iter().map(|(k, v)| (*k, v.clone())).collect(),
            trailing: trailing.iter().map(|(k, v)| (*k, v.clone())).collect(),
        }
    }

    /// All comments of the file, in source order, each once.
    pub fn all_sorted(&self) -> Vec<&Comment> {
        let mut all: Vec<&Comment> = self
            .leading
            .values()
            .chain(self.trailing.values())
            .flatten()
            .collect();
        all.sort_by_key(|cmt| cmt.span.lo);
        all.dedup_by_key(|cmt| cmt.span.lo);
        all
    }
}

pub struct ParsedJSX {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
    pub comments: ExtractedComments,
}

/// Plain `.ts` files are parsed without JSX so that `<T>expr` casts keep working.
fn syntax_for(file_path: &str) -> Syntax {
    Syntax::Typescript(TsSyntax {
        tsx: !file_path.ends_with(".ts"),
        decorators: true,
        ..Default::default()
    })
}

/// Parse one JS/TS/JSX/TSX source into a module.
///
/// The error names the file and the swc error kind.
pub fn parse_jsx_source(
    code: String,
    file_path: &str,
    source_map: Arc<SourceMap>,
) -> Result<ParsedJSX> {
    use swc_common::GLOBALS;

    // swc needs its globals set on the current thread.
    GLOBALS.set(&Globals::new(), || {
        let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let comments = SingleThreadedComments::default();
        let mut parser = Parser::new(
            syntax_for(file_path),
            StringInput::from(&*source_file),
            Some(&comments),
        );

        let module = parser
            .parse_module()
            .map_err(|e| anyhow!("Failed to parse {}: {:?}", file_path, e.kind()))?;

        let extracted_comments = ExtractedComments::from_swc(&comments);

        Ok(ParsedJSX {
            module,
            source_map,
            comments: extracted_comments,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(code: &str, path: &str) -> Result<ParsedJSX> {
        parse_jsx_source(code.to_string(), path, Arc::new(SourceMap::default()))
    }

    #[test]
    fn test_parse_tsx() {
        let parsed = parse("const a = <div>{_t('Hello')}</div>;", "app.tsx").unwrap();
        assert_eq!(parsed.module.body.len(), 1);
    }

    #[test]
    fn test_parse_ts_angle_bracket_cast() {
        assert!(parse("const a = <number>value;", "util.ts").is_ok());
    }

    #[test]
    fn test_parse_error() {
        let err = parse("const = ;", "broken.tsx").err().unwrap();
        assert!(err.to_string().contains("broken.tsx"));
    }

    #[test]
    fn test_comments_sorted() {
        let parsed = parse(
            "// first\nconst a = 1;\n/* second */\nconst b = 2; // third\n",
            "app.ts",
        )
        .unwrap();
        let texts: Vec<String> = parsed
            .comments
            .all_sorted()
            .iter()
            .map(|c| c.text.trim().to_string())
            .collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }
}
