use super::{Delimited, Ident, Params, ToSql};

use rowkit_core::stmt;

impl ToSql for &stmt::Expr {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        use stmt::Expr::*;

        match self {
            And(expr) => {
                fmt!(f, Delimited(&expr.operands, " AND "));
            }
            BinaryOp(expr) => {
                assert!(
                    !matches!(*expr.lhs, Value(stmt::Value::Null))
                        && !matches!(*expr.rhs, Value(stmt::Value::Null)),
                    "comparing against NULL is always unknown; expr={expr:?}"
                );

                let lhs = &*expr.lhs;
                let rhs = &*expr.rhs;

                fmt!(f, lhs " " expr.op " " rhs);
            }
            Column(expr) => {
                fmt!(f, Ident(&expr.name));
            }
            Like(like) => {
                let expr = &*like.expr;
                let pattern = &*like.pattern;

                fmt!(f, expr " LIKE " pattern);
            }
            Value(value) => value.to_sql(f),
        }
    }
}

impl ToSql for stmt::BinaryOp {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        f.dst.push_str(match self {
            stmt::BinaryOp::Eq => "=",
        })
    }
}
