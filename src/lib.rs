use swc_core::{
    common::{SyntaxContext, DUMMY_SP},
    ecma::{
        ast::*,
        visit::{VisitMut, VisitMutWith},
    },
    plugin::{plugin_transform, proxies::TransformPluginProgramMetadata},
};

// -----------------------------------------------------------------------------
// Replacement builders
// -----------------------------------------------------------------------------

/// `() => undefined`
fn noop_handler() -> Expr {
    Expr::Arrow(ArrowExpr {
        span: DUMMY_SP,
        ctxt: SyntaxContext::empty(),
        params: vec![],
        body: Box::new(BlockStmtOrExpr::Expr(Box::new(Expr::Ident(Ident::new(
            "undefined".into(),
            DUMMY_SP,
            SyntaxContext::empty(),
        ))))),
        is_async: false,
        is_generator: false,
        type_params: None,
        return_type: None,
    })
}

/// `{ then: () => undefined, catch: () => undefined }`
///
/// Each branch gets its own freshly built handler; the two literals share no
/// structure.
fn noop_thenable() -> Expr {
    fn prop(key: &str, value: Expr) -> PropOrSpread {
        PropOrSpread::Prop(Box::new(Prop::KeyValue(KeyValueProp {
            key: PropName::Ident(IdentName::new(key.into(), DUMMY_SP)),
            value: Box::new(value),
        })))
    }

    Expr::Object(ObjectLit {
        span: DUMMY_SP,
        props: vec![prop("then", noop_handler()), prop("catch", noop_handler())],
    })
}

// -----------------------------------------------------------------------------
// Dynamic import rewrite
// -----------------------------------------------------------------------------

/// True only for `import(...)` call sites. Static import declarations are a
/// different node kind, and ordinary calls carry an expression callee, so
/// neither can match.
fn is_dynamic_import(call: &CallExpr) -> bool {
    matches!(call.callee, Callee::Import(_))
}

/// Replaces every dynamic `import(...)` call with an inert thenable stub.
///
/// The whole call expression goes away, module specifier included. The two
/// no-op branches keep `.then(...)` / `.catch(...)` chains on the old call
/// site well-formed.
#[derive(Debug, Default)]
pub struct DynamicImportNoop;

impl VisitMut for DynamicImportNoop {
    fn visit_mut_expr(&mut self, expr: &mut Expr) {
        expr.visit_mut_children_with(self);

        if let Expr::Call(call) = expr {
            if is_dynamic_import(call) {
                *expr = noop_thenable();
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Pass composition
// -----------------------------------------------------------------------------

/// Two visitor rule sets scheduled as one pass: `first`'s rules run over the
/// whole tree, then `second`'s. Neither set is inspected or altered, and no
/// rule is dropped.
pub struct ComposedPass<A, B> {
    first: A,
    second: B,
}

pub fn compose<A: VisitMut, B: VisitMut>(first: A, second: B) -> ComposedPass<A, B> {
    ComposedPass { first, second }
}

impl<A: VisitMut, B: VisitMut> VisitMut for ComposedPass<A, B> {
    fn visit_mut_program(&mut self, n: &mut Program) {
        n.visit_mut_with(&mut self.first);
        n.visit_mut_with(&mut self.second);
    }

    fn visit_mut_module(&mut self, n: &mut Module) {
        n.visit_mut_with(&mut self.first);
        n.visit_mut_with(&mut self.second);
    }

    fn visit_mut_script(&mut self, n: &mut Script) {
        n.visit_mut_with(&mut self.first);
        n.visit_mut_with(&mut self.second);
    }
}

// -----------------------------------------------------------------------------
// Entrypoint
// -----------------------------------------------------------------------------

#[plugin_transform]
pub fn process_transform(
    mut program: Program,
    _metadata: TransformPluginProgramMetadata,
) -> Program {
    // The host parser already recognizes `import(...)`; no companion syntax
    // rules are needed at this stage.
    program.visit_mut_with(&mut DynamicImportNoop);
    program
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
