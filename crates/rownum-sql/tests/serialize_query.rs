use pretty_assertions::assert_eq;
use rownum_sql::{
    stmt::{
        AggregateFunc, Argument, Expr, Join, JoinKind, OrderByExpr, Query, Select, Source,
        TableRef, Type, Value,
    },
    Serializer,
};

fn employees() -> Select {
    Select::new(TableRef::new("employees").alias("e"))
        .column(Expr::qualified_column("e", "name"))
        .filter(Expr::eq(
            Expr::qualified_column("e", "dept"),
            Expr::arg("sales"),
        ))
        .order_by(OrderByExpr::asc(Expr::qualified_column("e", "name")))
}

fn values(params: &[Argument]) -> Vec<Value> {
    params.iter().map(|arg| arg.value.clone()).collect()
}

#[test]
fn select_generic() {
    let (sql, params) = Serializer::generic()
        .render(&Query::from(employees()))
        .unwrap();

    assert_eq!(
        sql,
        "SELECT e.name FROM employees e WHERE e.dept = ? ORDER BY e.name ASC"
    );
    assert_eq!(params, vec![Argument::new("sales", Type::Text)]);
}

#[test]
fn select_star() {
    let (sql, _) = Serializer::generic()
        .render(&Query::from(Select::new("users").distinct()))
        .unwrap();

    assert_eq!(sql, "SELECT DISTINCT * FROM users");
}

#[test]
fn limit_offset_postgresql() {
    let query = Query::from(employees().limit(10).offset(20));
    let (sql, params) = Serializer::postgresql().render(&query).unwrap();

    assert_eq!(
        sql,
        "SELECT e.name FROM employees e WHERE e.dept = $1 ORDER BY e.name ASC LIMIT $2 OFFSET $3"
    );
    assert_eq!(
        values(&params),
        vec![Value::from("sales"), Value::I64(10), Value::I64(20)]
    );
}

#[test]
fn limit_offset_mysql() {
    let query = Query::from(employees().limit(10).offset(20));
    let (sql, params) = Serializer::mysql().render(&query).unwrap();

    assert_eq!(
        sql,
        "SELECT e.name FROM employees e WHERE e.dept = ? ORDER BY e.name ASC LIMIT ?, ?"
    );
    assert_eq!(
        values(&params),
        vec![Value::from("sales"), Value::I64(20), Value::I64(10)]
    );
}

#[test]
fn offset_only_mysql() {
    let query = Query::from(Select::new("users").offset(5));
    let (sql, params) = Serializer::mysql().render(&query).unwrap();

    assert_eq!(sql, "SELECT * FROM users LIMIT ?, ?");
    assert_eq!(values(&params), vec![Value::I64(5), Value::I64(i64::MAX)]);
}

#[test]
fn offset_only_sqlite() {
    let query = Query::from(
        Select::new("users")
            .filter(Expr::eq(Expr::column("active"), Expr::arg(true)))
            .offset(5),
    );
    let (sql, params) = Serializer::sqlite().render(&query).unwrap();

    assert_eq!(sql, "SELECT * FROM users WHERE active = ?1 LIMIT ?2 OFFSET ?3");
    assert_eq!(
        values(&params),
        vec![Value::Bool(true), Value::I64(-1), Value::I64(5)]
    );
}

#[test]
fn for_update_unsupported_on_sqlite() {
    let query = Query::from(Select::new("users").for_update());
    let err = Serializer::sqlite().render(&query).unwrap_err();

    assert!(err.is_unsupported_feature());
}

#[test]
fn for_update_after_limit() {
    let query = Query::from(Select::new("users").limit(1).for_update());
    let (sql, _) = Serializer::postgresql().render(&query).unwrap();

    assert_eq!(sql, "SELECT * FROM users LIMIT $1 FOR UPDATE");
}

#[test]
fn union_with_order_and_limit() {
    let ids = |table: &str| Select::new(table).column(Expr::column("id"));
    let query = Query::from(
        Query::from(Query::from(ids("a")).union(ids("b")))
            .union_all(ids("c"))
            .order_by(OrderByExpr::desc(Expr::column("id")))
            .limit(2),
    );

    let (sql, params) = Serializer::postgresql().render(&query).unwrap();

    assert_eq!(
        sql,
        "(SELECT id FROM a) UNION (SELECT id FROM b) UNION ALL (SELECT id FROM c) \
         ORDER BY id DESC LIMIT $1"
    );
    assert_eq!(values(&params), vec![Value::I64(2)]);
}

#[test]
fn ordered_union_on_the_left_keeps_parentheses() {
    let ids = |table: &str| Select::new(table).column(Expr::column("id"));
    let ordered = Query::from(ids("a"))
        .union(ids("b"))
        .order_by(OrderByExpr::asc(Expr::column("id")));
    let query = Query::from(Query::from(ordered).union(ids("c")));

    let (sql, _) = Serializer::generic().render(&query).unwrap();

    assert_eq!(
        sql,
        "((SELECT id FROM a) UNION (SELECT id FROM b) ORDER BY id ASC) \
         UNION (SELECT id FROM c)"
    );
}

#[test]
fn comparisons_and_negated_predicates() {
    let source = Source::from(TableRef::new("users").alias("u")).inner_join(
        TableRef::new("orders").alias("o"),
        Expr::eq(
            Expr::qualified_column("u", "id"),
            Expr::qualified_column("o", "user_id"),
        ),
    );

    let query = Query::from(
        Select::new(source)
            .column(Expr::qualified_column("o", "id"))
            .filter(Expr::ge(Expr::qualified_column("o", "total"), Expr::arg(10)))
            .filter(Expr::le(Expr::qualified_column("o", "total"), Expr::arg(500)))
            .filter(Expr::ne(Expr::qualified_column("o", "status"), Expr::arg("void")))
            .filter(Expr::not_in_list(
                Expr::qualified_column("u", "role"),
                [Expr::arg("bot")],
            ))
            .filter(Expr::not_exists(Select::new("refunds").filter(Expr::eq(
                Expr::qualified_column("refunds", "order_id"),
                Expr::qualified_column("o", "id"),
            )))),
    );

    let (sql, params) = Serializer::mysql().render(&query).unwrap();

    assert_eq!(
        sql,
        "SELECT o.id FROM users u INNER JOIN orders o ON u.id = o.user_id \
         WHERE o.total >= ? AND o.total <= ? AND o.status <> ? AND u.role NOT IN (?) \
         AND NOT EXISTS (SELECT * FROM refunds WHERE refunds.order_id = o.id)"
    );
    assert_eq!(
        values(&params),
        vec![
            Value::I32(10),
            Value::I32(500),
            Value::from("void"),
            Value::from("bot"),
        ]
    );
}

#[test]
fn joins() {
    let source = Source::from(TableRef::new("users").alias("u"))
        .left_join(
            TableRef::new("orders").schema("sales").alias("o"),
            Expr::eq(
                Expr::qualified_column("u", "id"),
                Expr::qualified_column("o", "user_id"),
            ),
        )
        .cross_join(TableRef::new("regions"));

    let query = Query::from(
        Select::new(source)
            .column(Expr::qualified_column("u", "id"))
            .column(Expr::qualified_column("o", "total")),
    );

    let (sql, _) = Serializer::generic().render(&query).unwrap();

    assert_eq!(
        sql,
        "SELECT u.id, o.total FROM users u LEFT JOIN sales.orders o ON u.id = o.user_id \
         CROSS JOIN regions"
    );
}

#[test]
fn join_without_condition_is_invalid() {
    let source = Source::Join(Box::new(Join {
        kind: JoinKind::Inner,
        left: Source::from("users"),
        right: Source::from("orders"),
        condition: None,
    }));

    let err = Serializer::generic()
        .render(&Query::from(Select::new(source)))
        .unwrap_err();

    assert!(err.is_invalid_statement());
}

#[test]
fn aggregates_and_grouping() {
    let query = Query::from(
        Select::new("orders")
            .column(Expr::column("customer_id"))
            .column_as(Expr::count_star(), "order_count")
            .column_as(
                Expr::aggregate_distinct(AggregateFunc::Count, Expr::column("product_id")),
                "products",
            )
            .column_as(Expr::aggregate(AggregateFunc::Sum, Expr::column("total")), "spent")
            .group_by(Expr::column("customer_id"))
            .having(Expr::gt(Expr::count_star(), Expr::arg(1))),
    );

    let (sql, params) = Serializer::generic().render(&query).unwrap();

    assert_eq!(
        sql,
        "SELECT customer_id, COUNT(*) AS order_count, COUNT(DISTINCT product_id) AS products, \
         SUM(total) AS spent FROM orders GROUP BY customer_id HAVING COUNT(*) > ?"
    );
    assert_eq!(values(&params), vec![Value::I32(1)]);
}

#[test]
fn predicates() {
    let banned = Select::new("bans").column(Expr::column("user_id"));

    let query = Query::from(
        Select::new("users")
            .column(Expr::func("LOWER", [Expr::column("email")]))
            .filter(Expr::or(
                Expr::eq(Expr::column("role"), Expr::arg("admin")),
                Expr::in_list(Expr::column("id"), [Expr::arg(1), Expr::arg(2)]),
            ))
            .filter(Expr::between(
                Expr::column("age"),
                Expr::arg(18),
                Expr::arg(65),
            ))
            .filter(Expr::is_not_null(Expr::column("email")))
            .filter(Expr::not_in_subquery(Expr::column("id"), banned))
            .filter(Expr::not(Expr::exists(
                Select::new("audits").filter(Expr::eq(
                    Expr::qualified_column("audits", "user_id"),
                    Expr::qualified_column("users", "id"),
                )),
            ))),
    );

    let (sql, params) = Serializer::postgresql().render(&query).unwrap();

    assert_eq!(
        sql,
        "SELECT LOWER(email) FROM users WHERE (role = $1 OR id IN ($2, $3)) \
         AND age BETWEEN $4 AND $5 AND email IS NOT NULL \
         AND id NOT IN (SELECT user_id FROM bans) \
         AND NOT EXISTS (SELECT * FROM audits WHERE audits.user_id = users.id)"
    );
    assert_eq!(params.len(), 5);
}

#[test]
fn arithmetic_operands_are_parenthesized() {
    let query = Query::from(Select::new("items").column(Expr::binary_op(
        Expr::add(Expr::column("price"), Expr::column("tax")),
        rownum_sql::stmt::BinaryOp::Mul,
        Expr::column("quantity"),
    )));

    let (sql, _) = Serializer::generic().render(&query).unwrap();

    assert_eq!(sql, "SELECT (price + tax) * quantity FROM items");
}

#[test]
fn empty_in_list_is_invalid() {
    let query = Query::from(Select::new("users").filter(Expr::in_list(Expr::column("id"), Vec::new())));
    let err = Serializer::generic().render(&query).unwrap_err();

    assert!(err.is_invalid_statement());
}

#[test]
fn pretty_select() {
    let query = Query::from(
        Select::new("users")
            .column(Expr::column("id"))
            .filter(Expr::gt(Expr::column("age"), Expr::arg(18)))
            .order_by(OrderByExpr::from(Expr::column("id")))
            .limit(5),
    );

    let (sql, _) = Serializer::postgresql().pretty(2).render(&query).unwrap();

    assert_eq!(
        sql,
        "SELECT id\nFROM users\nWHERE age > $1\nORDER BY id\nLIMIT $2"
    );
}

#[test]
fn serializer_is_reusable() {
    let serializer = Serializer::postgresql();
    let query = Query::from(employees().limit(1));

    let first = serializer.render(&query).unwrap();
    let second = serializer.render(&query).unwrap();

    // Placeholder numbering restarts for every call
    assert_eq!(first, second);
}
