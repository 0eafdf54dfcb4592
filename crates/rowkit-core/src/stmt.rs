mod delete;
pub use delete::Delete;

mod expr;
pub use expr::Expr;

mod expr_and;
pub use expr_and::ExprAnd;

mod expr_binary_op;
pub use expr_binary_op::ExprBinaryOp;

mod expr_column;
pub use expr_column::ExprColumn;

mod expr_like;
pub use expr_like::ExprLike;

mod insert;
pub use insert::Insert;

mod limit;
pub use limit::Limit;

mod op_binary;
pub use op_binary::BinaryOp;

mod raw;
pub use raw::Raw;

mod select;
pub use select::Select;

mod update;
pub use update::{Assignment, Update};

mod value;
pub use value::Value;

/// A SQL statement issued against a single table.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Delete(Delete),
    Insert(Insert),
    Raw(Raw),
    Select(Select),
    Update(Update),
}

