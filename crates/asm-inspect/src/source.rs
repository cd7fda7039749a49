// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Source-location directives
//!
//! `.file` lines register a file number; `.loc` lines are turned into
//! [`LineKind::SourceFileLocation`] records and rendered as a comment naming
//! the file, line and column, followed by the source line when the file
//! could be read.
//!
//! ```text
//! .file 1 "src/main.c"        (registers file 1)
//! .loc 1 12 5                 -> "# main.c(12, 6)    return a + b;"
//! .cv_loc 0 1 12 5            -> same, the function id is skipped
//! ```

use std::{collections::HashMap, fs, io, path::Path};

use asm_lexer::{Token, TokenKind};
use tracing::{debug, warn};

use crate::{
    error::{AnalyzeError, AnalyzeResult},
    model::LineKind,
};

/// A file registered by a `.file` directive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path as written in the directive, with `/` separators
    pub name: String,
    /// Lines of the file, if it was read
    pub lines: Option<Vec<String>>,
}

impl SourceFile {
    /// File name without its directories
    pub fn base_name(&self) -> &str {
        Path::new(&self.name)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(&self.name)
    }

    /// Text of 1-based line `line_no`
    pub fn line(&self, line_no: u32) -> Option<&str> {
        let index = usize::try_from(line_no).ok()?.checked_sub(1)?;
        self.lines.as_ref()?.get(index).map(String::as_str)
    }
}

/// Tokens of a line that carry meaning for directive parsing
fn operands<'t>(tokens: &'t [Token]) -> impl Iterator<Item = &'t Token> {
    tokens.iter().filter(|t| {
        !matches!(
            t.kind,
            TokenKind::Misc | TokenKind::NewLine | TokenKind::Comment
        )
    })
}

fn parse_number(text: &str, token: &Token, directive: &'static str) -> AnalyzeResult<u32> {
    let digits = token.text(text);
    digits
        .parse::<u32>()
        .map_err(|source| AnalyzeError::MalformedNumber {
            directive,
            text: digits.to_string(),
            position: token.position,
            source,
        })
}

/// Path text of a string operand, escapes undone and `/` separated.
fn unquote_path(quoted: &str) -> String {
    quoted
        .trim_matches('"')
        .replace("\\\\", "\\")
        .replace('\\', "/")
}

fn read_lines(path: &str) -> Option<Vec<String>> {
    match fs::read_to_string(path) {
        Ok(contents) => Some(contents.lines().map(str::to_string).collect()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path, "source file not found");
            None
        }
        Err(e) => {
            warn!(path, error = %e, "failed to read source file");
            None
        }
    }
}

/// Files registered so far, by directive file number
#[derive(Debug, Default)]
pub struct SourceFiles {
    files: HashMap<u32, SourceFile>,
}

impl SourceFiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, file_no: u32) -> Option<&SourceFile> {
        self.files.get(&file_no)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Register the file named by a `.file`/`.cv_file` line.
    ///
    /// Accepts `.file N "name"`, `.file N "dir" "name"` (trailing `md5`
    /// and `source` operands ignored), `.file "name"` (registered as file 0)
    /// and `.cv_file N "path" ["checksum" kind]`. Reading the file is best
    /// effort.
    pub fn register_file(
        &mut self,
        text: &str,
        tokens: &[Token],
        load_contents: bool,
    ) -> AnalyzeResult<()> {
        let mut it = operands(tokens).peekable();
        let directive = match it.next() {
            Some(token) if token.text(text) == ".cv_file" => ".cv_file",
            _ => ".file",
        };

        let mut file_no = 0;
        if let Some(token) = it.next_if(|t| t.kind == TokenKind::Number) {
            file_no = parse_number(text, token, directive)?;
        }

        // a CodeView path is followed by its checksum, never by a name
        let max_parts = if directive == ".cv_file" { 1 } else { 2 };
        let parts: Vec<String> = it
            .take_while(|t| t.kind == TokenKind::String)
            .take(max_parts)
            .map(|t| unquote_path(t.text(text)))
            .collect();
        let name = match parts.as_slice() {
            [] => return Ok(()),
            [name] => name.clone(),
            [dir, name] if Path::new(name).is_absolute() || dir.is_empty() => name.clone(),
            [dir, name] => format!("{}/{}", dir.trim_end_matches('/'), name),
            [..] => return Ok(()),
        };

        let lines = if load_contents { read_lines(&name) } else { None };
        debug!(file_no, name = %name, loaded = lines.is_some(), "registered source file");
        self.files.insert(file_no, SourceFile { name, lines });
        Ok(())
    }

    /// Resolve a `.loc`/`.cv_loc` line into a source file location.
    ///
    /// Missing or non-numeric operands default to 0.
    pub fn resolve_location(&self, text: &str, tokens: &[Token]) -> AnalyzeResult<LineKind> {
        let mut it = operands(tokens);
        let directive = it.next();
        if directive.is_some_and(|t| t.text(text) == ".cv_loc") {
            it.next();
        }

        let mut numbers = [0u32; 3];
        for slot in &mut numbers {
            match it.next() {
                Some(token) if token.kind == TokenKind::Number => {
                    *slot = parse_number(text, token, ".loc")?;
                }
                Some(_) => {}
                None => break,
            }
        }
        let [file, line, column] = numbers;
        Ok(LineKind::SourceFileLocation { file, line, column })
    }

    /// Uncolored text of a source annotation, without its line break.
    ///
    /// Empty for file 0 and for unregistered files.
    pub fn annotation(&self, comment_start: char, file: u32, line: u32, column: u32) -> String {
        let Some(source) = (file != 0).then(|| self.get(file)).flatten() else {
            return String::new();
        };
        let mut out = format!("{comment_start} {}", source.base_name());
        if line != 0 {
            out.push_str(&format!("({line}, {})", u64::from(column) + 1));
            if let Some(source_line) = source.line(line) {
                out.push_str(source_line);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use asm_lexer::{tokenize, Architecture};

    use super::*;

    fn register(files: &mut SourceFiles, line: &str, load: bool) -> AnalyzeResult<()> {
        let tokens = tokenize(line, Architecture::Intel);
        files.register_file(line, &tokens, load)
    }

    fn location(files: &SourceFiles, line: &str) -> AnalyzeResult<LineKind> {
        let tokens = tokenize(line, Architecture::Intel);
        files.resolve_location(line, &tokens)
    }

    #[test]
    fn test_register_forms() {
        let mut files = SourceFiles::new();
        register(&mut files, ".file 1 \"C:\\\\src\\\\a.c\"\n", false).unwrap();
        register(&mut files, ".file 2 \"/work\" \"lib/b.c\"\n", false).unwrap();
        register(&mut files, ".file \"c.c\"\n", false).unwrap();
        assert_eq!(files.get(2).unwrap().name, "/work/lib/b.c");
        assert_eq!(files.get(2).unwrap().base_name(), "b.c");
        assert_eq!(files.get(0).unwrap().name, "c.c");
        assert!(files.get(1).unwrap().name.ends_with("a.c"));
        assert!(!files.get(1).unwrap().name.contains('\\'));
    }

    #[test]
    fn test_cv_file_takes_path_only() {
        let mut files = SourceFiles::new();
        register(
            &mut files,
            ".cv_file 1 \"C:\\\\src\\\\job.cs\" \"0A1B2C3D4E5F\" 1\n",
            false,
        )
        .unwrap();
        assert_eq!(files.get(1).unwrap().name, "C:/src/job.cs");
        assert_eq!(files.get(1).unwrap().base_name(), "job.cs");

        register(&mut files, ".file 2 \"/work\" \"b.c\" md5 0x00112233\n", false).unwrap();
        assert_eq!(files.get(2).unwrap().name, "/work/b.c");
    }

    #[test]
    fn test_loc_and_cv_loc() {
        let files = SourceFiles::new();
        assert_eq!(
            location(&files, ".loc 1 12 5 prologue_end\n").unwrap(),
            LineKind::SourceFileLocation {
                file: 1,
                line: 12,
                column: 5
            }
        );
        assert_eq!(
            location(&files, ".cv_loc 7 2 30 0\n").unwrap(),
            LineKind::SourceFileLocation {
                file: 2,
                line: 30,
                column: 0
            }
        );
        assert_eq!(
            location(&files, ".loc 3\n").unwrap(),
            LineKind::SourceFileLocation {
                file: 3,
                line: 0,
                column: 0
            }
        );
    }

    #[test]
    fn test_malformed_number() {
        let files = SourceFiles::new();
        let err = location(&files, ".loc 1 0x1f 0\n").unwrap_err();
        match err {
            AnalyzeError::MalformedNumber {
                directive,
                text,
                position,
                ..
            } => {
                assert_eq!(directive, ".loc");
                assert_eq!(text, "0x1f");
                assert_eq!(position, 7);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_annotation_text() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("main.c");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "int main() {{").unwrap();
        writeln!(file, "    return 0;").unwrap();
        let path = path.to_string_lossy().replace('\\', "/");

        let mut files = SourceFiles::new();
        register(&mut files, &format!(".file 1 \"{path}\"\n"), true).unwrap();
        register(&mut files, ".file 2 \"missing.c\"\n", true).unwrap();

        assert_eq!(files.annotation('#', 1, 2, 4), "# main.c(2, 5)    return 0;");
        assert_eq!(files.annotation('#', 1, 0, 0), "# main.c");
        assert_eq!(files.annotation('#', 1, 9, 0), "# main.c(9, 1)");
        assert_eq!(files.annotation(';', 2, 3, 0), "; missing.c(3, 1)");
        assert_eq!(files.annotation('#', 0, 3, 0), "");
        assert_eq!(files.annotation('#', 5, 3, 0), "");
    }
}
