mod argument;
pub use argument::Argument;

mod direction;
pub use direction::Direction;

mod expr;
pub use expr::Expr;

mod expr_aggregate;
pub use expr_aggregate::{AggregateFunc, ExprAggregate};

mod expr_alias;
pub use expr_alias::ExprAlias;

mod expr_and;
pub use expr_and::ExprAnd;

mod expr_between;
pub use expr_between::ExprBetween;

mod expr_binary_op;
pub use expr_binary_op::ExprBinaryOp;

mod expr_column;
pub use expr_column::ExprColumn;

mod expr_exists;
pub use expr_exists::ExprExists;

mod expr_func;
pub use expr_func::ExprFunc;

mod expr_in_list;
pub use expr_in_list::ExprInList;

mod expr_in_subquery;
pub use expr_in_subquery::ExprInSubquery;

mod expr_is_null;
pub use expr_is_null::ExprIsNull;

mod expr_or;
pub use expr_or::ExprOr;

mod join;
pub use join::{Join, JoinKind};

mod op_binary;
pub use op_binary::BinaryOp;

mod op_set;
pub use op_set::SetOp;

mod order_by;
pub use order_by::OrderByExpr;

mod query;
pub use query::Query;

mod select;
pub use select::Select;

mod source;
pub use source::Source;

mod table_ref;
pub use table_ref::TableRef;

mod ty;
pub use ty::Type;

mod union;
pub use union::Union;

mod value;
pub use value::Value;
