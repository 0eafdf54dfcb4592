pub mod serializer;
pub use serializer::{Params, Placeholder, Serializer};

pub use rowkit_core::stmt::{self, Statement};

/// Renders `stmt` with every literal inlined as SQL text.
///
/// The output is meant for logs and assertions, not for execution: drivers
/// serialize with their own flavor and bind the values as parameters.
pub fn inline(stmt: &Statement) -> String {
    let mut params = Vec::<stmt::Value>::new();
    let sql = Serializer::inline().serialize(stmt, &mut params);
    debug_assert!(params.is_empty(), "inline rendering must not bind params");
    sql
}

/// Renders a single expression with its literals inlined.
pub fn inline_expr(expr: &stmt::Expr) -> String {
    let mut params = Vec::<stmt::Value>::new();
    Serializer::inline().serialize_expr(expr, &mut params)
}
