//! Bridge between text and SWC.
//!
//! Input is JavaScript compiled from MDX with `outputFormat: 'function-body'`:
//! a module-like body that can use top-level `await` and `return`.

use crate::error::Error;
use crate::swc_utils::bytepos_to_point;
use markdown::Location;
use swc_core::common::comments::{Comment, Comments, SingleThreadedComments};
use swc_core::common::{sync::Lrc, BytePos, FilePathMapping, SourceMap, Span, Spanned};
use swc_core::ecma::ast::{EsVersion, Module};
use swc_core::ecma::codegen::{text_writer::JsWriter, Config, Emitter};
use swc_core::ecma::parser::{lexer::Lexer, EsSyntax, Parser, StringInput, Syntax};
use swc_core::ecma::visit::{noop_visit_type, Visit, VisitWith};

/// A parsed document.
#[derive(Debug, Clone)]
pub struct Program {
    /// File path.
    pub path: Option<String>,
    /// JS AST.
    pub module: Module,
    /// Comments relating to AST.
    pub comments: Vec<Comment>,
}

/// Parse a function body.
///
/// ## Errors
///
/// Errors on syntax errors, with the place where they occurred.
pub fn parse(value: &str, path: Option<String>) -> Result<Program, Error> {
    let location = Location::new(value.as_bytes());
    let comments = SingleThreadedComments::default();
    // SWC byte positions are offset by one.
    let input = StringInput::new(value, BytePos(1), BytePos(value.len() as u32 + 1));
    let lexer = Lexer::new(
        Syntax::Es(EsSyntax {
            jsx: true,
            allow_return_outside_function: true,
            ..EsSyntax::default()
        }),
        EsVersion::Es2022,
        input,
        Some(&comments),
    );
    let mut parser = Parser::new_from(lexer);

    let module = parser.parse_module().map_err(|error| Error {
        msg: error.kind().msg().into(),
        point: bytepos_to_point(error.span().lo, Some(&location)),
    })?;

    // Recoverable errors are still errors for us.
    if let Some(error) = parser.take_errors().into_iter().next() {
        return Err(Error {
            msg: error.kind().msg().into(),
            point: bytepos_to_point(error.span().lo, Some(&location)),
        });
    }

    let (leading, trailing) = comments.take_all();
    let mut list: Vec<Comment> = leading
        .borrow()
        .values()
        .chain(trailing.borrow().values())
        .flat_map(|comments| comments.iter().cloned())
        .collect();
    list.sort_by_key(|comment| comment.span.lo);

    Ok(Program {
        path,
        module,
        comments: list,
    })
}

/// Serialize a program.
///
/// ## Errors
///
/// Errors if writing fails, which does not happen for in-memory buffers.
pub fn serialize(program: &Program) -> Result<String, Error> {
    let comments = SingleThreadedComments::default();
    let mut positions = Positions::default();
    program.module.visit_with(&mut positions);
    positions.starts.sort_unstable();
    positions.ends.sort_unstable();

    // Comments are printed at the start of the node after them.
    // Comments in otherwise empty nodes (`{/* a */}`) go before that node,
    // and comments at the end go after the node before them.
    // Comments at the end of a line move to their own line.
    for comment in &program.comments {
        let index = positions.starts.partition_point(|d| *d < comment.span.hi);
        let next = positions.starts.get(index).copied();
        let enclosing = positions.enclosing(comment.span);

        match (next, enclosing) {
            (next, Some(enclosing)) if next.map_or(true, |next| next >= enclosing.hi) => {
                comments.add_leading(enclosing.lo, comment.clone());
            }
            (Some(next), _) => {
                comments.add_leading(next, comment.clone());
            }
            (None, _) => {
                let index = positions.ends.partition_point(|d| *d <= comment.span.lo);
                let pos = index
                    .checked_sub(1)
                    .and_then(|index| positions.ends.get(index))
                    .copied()
                    .unwrap_or(comment.span.lo);
                comments.add_trailing(pos, comment.clone());
            }
        }
    }

    let mut buf = vec![];
    let cm = Lrc::new(SourceMap::new(FilePathMapping::empty()));

    {
        let mut emitter = Emitter {
            cfg: Config::default(),
            cm: cm.clone(),
            comments: Some(&comments),
            wr: JsWriter::new(cm, "\n", &mut buf, None),
        };

        emitter
            .emit_module(&program.module)
            .map_err(|error| Error::from(format!("Cannot serialize program: {}", error)))?;
    }

    Ok(String::from_utf8_lossy(&buf).into())
}

/// Places where nodes start and end.
#[derive(Debug, Default)]
struct Positions {
    spans: Vec<Span>,
    starts: Vec<BytePos>,
    ends: Vec<BytePos>,
}

impl Positions {
    /// Get the smallest node that contains `span`.
    fn enclosing(&self, span: Span) -> Option<Span> {
        self.spans
            .iter()
            .filter(|node| node.lo < span.lo && node.hi >= span.hi)
            .min_by_key(|node| node.hi - node.lo)
            .copied()
    }
}

impl Visit for Positions {
    noop_visit_type!();

    fn visit_span(&mut self, span: &Span) {
        if !span.is_dummy() {
            self.spans.push(*span);
            self.starts.push(span.lo);
            self.ends.push(span.hi);
        }
    }
}
