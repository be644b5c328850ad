use pretty_assertions::assert_eq;
use rownum_sql::{
    stmt::{Argument, Expr, OrderByExpr, Query, Select, Source, TableRef, Type, Value},
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

fn row_bounds(params: &[Argument]) -> Vec<i64> {
    params
        .iter()
        .map(|arg| {
            assert_eq!(arg.ty, Type::Long);
            arg.value.as_i64().unwrap()
        })
        .collect()
}

#[test]
fn limit_and_offset() {
    let query = Query::from(employees().limit(10).offset(20));
    let (sql, params) = Serializer::oracle().render(&query).unwrap();

    assert_eq!(
        sql,
        "SELECT * FROM (SELECT \"_t\".*, ROWNUM \"_rn\" FROM (SELECT e.name FROM employees e \
         WHERE e.dept = ? ORDER BY e.name ASC) \"_t\" WHERE ROWNUM <= ?) WHERE \"_rn\" >= ?"
    );

    assert_eq!(
        params,
        vec![
            Argument::new("sales", Type::Text),
            Argument::long(30),
            Argument::long(21),
        ]
    );
}

#[test]
fn limit_without_offset() {
    let query = Query::from(Select::new("users").column(Expr::column("id")).limit(10));
    let (sql, params) = Serializer::oracle().render(&query).unwrap();

    assert_eq!(
        sql,
        "SELECT * FROM (SELECT \"_t\".*, ROWNUM \"_rn\" FROM (SELECT id FROM users) \"_t\" \
         WHERE ROWNUM <= ?) WHERE \"_rn\" >= ?"
    );
    assert_eq!(row_bounds(&params), vec![10, 1]);
}

#[test]
fn offset_without_limit() {
    let query = Query::from(Select::new("users").offset(5));
    let (_, params) = Serializer::oracle().render(&query).unwrap();

    assert_eq!(row_bounds(&params), vec![i64::MAX, 6]);
}

#[test]
fn bounds_follow_limit_and_offset() {
    let serializer = Serializer::oracle();

    for offset in 0..25 {
        for limit in 1..12 {
            let query = Query::from(Select::new("users").limit(limit).offset(offset));
            let (_, params) = serializer.render(&query).unwrap();

            let expected = vec![(offset + limit) as i64, (offset + 1) as i64];
            assert_eq!(row_bounds(&params), expected, "limit={limit} offset={offset}");
        }
    }
}

#[test]
fn placeholders_match_arguments() {
    let orders = Select::new("orders")
        .column(Expr::column("user_id"))
        .filter(Expr::gt(Expr::column("total"), Expr::arg(100)));

    let query = Query::from(
        Select::new("users")
            .column(Expr::column("id"))
            .filter(Expr::in_subquery(Expr::column("id"), orders))
            .filter(Expr::like(Expr::column("email"), Expr::arg("%@example.com")))
            .limit(3)
            .offset(6),
    );

    let (sql, params) = Serializer::oracle().render(&query).unwrap();

    assert_eq!(sql.matches('?').count(), params.len());
    assert_eq!(
        params.iter().map(|arg| arg.value.clone()).collect::<Vec<_>>(),
        vec![
            Value::I32(100),
            Value::from("%@example.com"),
            Value::I64(9),
            Value::I64(7),
        ]
    );
}

#[test]
fn paginated_query_is_not_modified() {
    let query = Query::from(employees().limit(10).offset(20).alias("emp"));
    let before = query.clone();

    Serializer::oracle().render(&query).unwrap();

    assert_eq!(query, before);
}

#[test]
fn union_is_rewritten_like_select() {
    let ids = |table: &str| Select::new(table).column(Expr::column("id"));
    let query = Query::from(Query::from(ids("customers")).union_all(ids("suppliers")).limit(5));

    let (sql, params) = Serializer::oracle().render(&query).unwrap();

    assert_eq!(
        sql,
        "SELECT * FROM (SELECT \"_t\".*, ROWNUM \"_rn\" FROM ((SELECT id FROM customers) \
         UNION ALL (SELECT id FROM suppliers)) \"_t\" WHERE ROWNUM <= ?) WHERE \"_rn\" >= ?"
    );
    assert_eq!(row_bounds(&params), vec![5, 1]);
}

#[test]
fn paginated_derived_table() {
    let recent = Select::new("orders")
        .column(Expr::column("id"))
        .order_by(OrderByExpr::desc(Expr::column("created_at")))
        .limit(3)
        .alias("o");

    let query = Query::from(Select::new(Source::from(recent)).column(Expr::qualified_column("o", "id")));
    let (sql, params) = Serializer::oracle().render(&query).unwrap();

    assert_eq!(
        sql,
        "SELECT o.id FROM (SELECT * FROM (SELECT \"_t\".*, ROWNUM \"_rn\" FROM (SELECT id \
         FROM orders ORDER BY created_at DESC) \"_t\" WHERE ROWNUM <= ?) WHERE \"_rn\" >= ?) o"
    );
    assert_eq!(row_bounds(&params), vec![3, 1]);
}

#[test]
fn for_update_with_pagination_is_unsupported() {
    let serializer = Serializer::oracle();

    for query in [
        employees().limit(1).for_update(),
        employees().offset(1).for_update(),
        employees().limit(1).offset(1).for_update(),
    ] {
        let err = serializer.render(&Query::from(query)).unwrap_err();
        assert!(err.is_unsupported_feature(), "{err}");
    }
}

#[test]
fn for_update_without_pagination() {
    let query = Query::from(Select::new("users").column(Expr::column("id")).for_update());
    let (sql, params) = Serializer::oracle().render(&query).unwrap();

    assert_eq!(sql, "SELECT id FROM users FOR UPDATE");
    assert!(params.is_empty());
}

#[test]
fn unpaginated_query_matches_base_rendering() {
    let query = Query::from(employees());

    let oracle = Serializer::oracle().render(&query).unwrap();
    let generic = Serializer::generic().render(&query).unwrap();

    assert_eq!(oracle, generic);
    assert!(!oracle.0.contains("ROWNUM"));
    assert!(!oracle.0.contains("_t"));
    assert_eq!(oracle.1.len(), 1);
}

#[test]
fn pretty_output() {
    let query = Query::from(Select::new("users").column(Expr::column("id")).limit(10));
    let (sql, _) = Serializer::oracle().pretty(4).render(&query).unwrap();

    assert_eq!(
        sql,
        [
            "SELECT *",
            "FROM (",
            "    SELECT \"_t\".*, ROWNUM \"_rn\"",
            "    FROM (",
            "        SELECT id",
            "        FROM users",
            "    ) \"_t\"",
            "    WHERE ROWNUM <= ?",
            ")",
            "WHERE \"_rn\" >= ?",
        ]
        .join("\n")
    );
}
