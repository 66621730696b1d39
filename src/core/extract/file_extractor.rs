//! AST walk that finds translation calls and feeds them to the handlers.
//!
//! Every call expression is checked against the handler registry, then its
//! children are visited too, so calls nested in arguments, conditionals,
//! logical fallbacks, object literals or JSX containers are all found:
//!
//! ```ts
//! i18n._pt('Item', 'Translation %1 %2 %3', [
//!   1,
//!   cond ? i18n._t('valid') : fallback() || i18n._t('invalid'),
//!   3,
//! ]);
//! ```

use swc_common::{SourceMap, Span};
use swc_ecma_ast::{CallExpr, Callee, Expr, ExprOrSpread, Lit, MemberProp, Module};
use swc_ecma_visit::{Visit, VisitWith};

use crate::core::catalog::{Catalog, IdentInfo};
use crate::core::diagnostics::Reporter;
use crate::core::extract::comments::TranslatorComments;
use crate::core::handlers::{CallArg, Handle, HandlerRegistry};

/// Walks one file's AST and builds that file's catalog.
pub struct FileExtractor<'a> {
    /// Path recorded in occurrences and diagnostics.
    file_path: &'a str,

    /// SWC source map for looking up line/column positions.
    source_map: &'a SourceMap,

    /// Callee names recognized as translation calls.
    handlers: &'a HandlerRegistry,

    /// Translator comments of this file.
    comments: &'a TranslatorComments,

    reporter: &'a mut dyn Reporter,

    catalog: Catalog,
}

impl<'a> FileExtractor<'a> {
    pub fn new(
        file_path: &'a str,
        source_map: &'a SourceMap,
        handlers: &'a HandlerRegistry,
        comments: &'a TranslatorComments,
        reporter: &'a mut dyn Reporter,
    ) -> Self {
        Self {
            file_path,
            source_map,
            handlers,
            comments,
            reporter,
            catalog: Catalog::new(),
        }
    }

    /// Main entry point: walk a module and return its catalog.
    pub fn extract(mut self, module: &Module) -> Catalog {
        self.visit_module(module);
        self.catalog
    }

    fn ident_info(&self, span: Span) -> IdentInfo {
        let loc = self.source_map.lookup_char_pos(span.lo);
        IdentInfo::new(self.file_path, loc.line - 1, loc.col.0)
    }
}

impl Visit for FileExtractor<'_> {
    fn visit_call_expr(&mut self, node: &CallExpr) {
        if let Some((name, ident_span)) = callee_name(&node.callee)
            && let Some(handler) = self.handlers.get(name)
        {
            let ident = self.ident_info(ident_span);
            let call_line = self.source_map.lookup_char_pos(node.span.lo).line;
            let comments = self.comments.comments_for(call_line, node.span.lo);
            let args: Vec<CallArg> = node.args.iter().map(describe_arg).collect();

            handler.handle(
                &mut self.catalog,
                &args,
                &ident,
                &comments,
                &mut *self.reporter,
            );
        }

        node.visit_children_with(self);
    }
}

/// Name and span of the called identifier.
///
/// - `_t(...)` → `_t`
/// - `i18n._t(...)`, `this.i18n._t(...)` → `_t`
fn callee_name(callee: &Callee) -> Option<(&str, Span)> {
    let Callee::Expr(expr) = callee else {
        return None;
    };
    match &**expr {
        Expr::Ident(ident) => Some((ident.sym.as_str(), ident.span)),
        Expr::Member(member) => match &member.prop {
            MemberProp::Ident(prop) => Some((prop.sym.as_str(), prop.span)),
            _ => None,
        },
        _ => None,
    }
}

fn describe_arg(arg: &ExprOrSpread) -> CallArg {
    if arg.spread.is_some() {
        return CallArg::Spread;
    }
    describe_expr(&arg.expr)
}

fn describe_expr(expr: &Expr) -> CallArg {
    match expr {
        Expr::Lit(Lit::Str(s)) => match s.value.as_str() {
            Some(value) => CallArg::Str(value.to_owned()),
            // Lone surrogates cannot be represented as UTF-8.
            None => CallArg::Expr,
        },
        Expr::Array(array) => CallArg::Array(
            array
                .elems
                .iter()
                .map(|elem| elem.as_ref().map_or(CallArg::Hole, describe_arg))
                .collect(),
        ),
        Expr::Paren(paren) => describe_expr(&paren.expr),
        _ => CallArg::Expr,
    }
}
