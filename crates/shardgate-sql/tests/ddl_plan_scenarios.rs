//! End-to-end DDL planning scenarios.
//!
//! Each test drives the full pipeline (classify, resolve, validate, look
//! up, rewrite) against an in-memory router, checking the exact backend
//! SQL and the exact client-visible error strings.

use regex::Regex;
use shardgate_commons::execution::RequestMode;
use shardgate_commons::models::BackendName;
use shardgate_router::ShardRouter;
use shardgate_sql::{classify, DdlPlan, PlanKind};

fn test_router() -> ShardRouter {
    let router = ShardRouter::new(vec![
        BackendName::new("backend0"),
        BackendName::new("backend1"),
    ]);
    router.create_database("test").unwrap();
    router.register_hash_table_with("test", "t1", "id", 2).unwrap();
    router.register_hash_table_with("test", "t5", "a", 2).unwrap();
    router.register_global_table("test", "t2").unwrap();
    router
}

fn build(session_db: &str, sql: &str, router: &ShardRouter) -> Result<DdlPlan, String> {
    let statement = classify(sql).map_err(|e| e.wire_format())?;
    DdlPlan::build(session_db, &statement, router).map_err(|e| e.wire_format())
}

#[test]
fn test_create_partitioned_table_rewrites_per_shard() {
    let router = test_router();
    let plan = build(
        "test",
        "create table t1(id int, b int) partition by hash(id)",
        &router,
    )
    .unwrap();

    assert_eq!(plan.request_mode(), RequestMode::Targeted);
    assert_eq!(plan.queries().len(), 2);

    assert_eq!(
        plan.queries()[0].sql,
        "create table `test`.`t1_0000`(id int, b int) partition by hash(id)"
    );
    assert_eq!(plan.queries()[0].backend.as_str(), "backend0");
    assert_eq!(plan.queries()[0].range, "[0-2048)");

    assert_eq!(
        plan.queries()[1].sql,
        "create table `test`.`t1_0001`(id int, b int) partition by hash(id)"
    );
    assert_eq!(plan.queries()[1].backend.as_str(), "backend1");
    assert_eq!(plan.queries()[1].range, "[2048-4096)");
}

#[test]
fn test_plan_soundness_no_bare_logical_name_survives() {
    let router = test_router();
    let plan = build(
        "test",
        "create table t1(id int, b int) partition by hash(id)",
        &router,
    )
    .unwrap();

    let segments = router.lookup("test", "t1", None, None).unwrap();
    assert_eq!(plan.queries().len(), segments.len());

    let bare = Regex::new(r"\bt1\b").unwrap();
    for tuple in plan.queries() {
        assert!(tuple.sql.contains("`test`.`t1_00"));
        assert!(!bare.is_match(&tuple.sql), "bare name in: {}", tuple.sql);
    }
}

#[test]
fn test_create_table_without_default_database() {
    let router = test_router();
    let err = build("", "create table t1(a int, b int)", &router).unwrap_err();
    assert_eq!(err, "Unknown database '' (errno 1049) (sqlstate 42000)");
}

#[test]
fn test_alter_cannot_drop_shard_key() {
    let router = test_router();
    let err = build("test", "alter table t1 drop column id", &router).unwrap_err();
    assert_eq!(
        err,
        "unsupported: cannot.drop.the.column.on.shard.key (errno 1105) (sqlstate HY000)"
    );
}

#[test]
fn test_alter_cannot_modify_shard_key() {
    let router = test_router();
    let err = build("test", "alter table t1 modify column id bigint", &router).unwrap_err();
    assert_eq!(
        err,
        "unsupported: cannot.modify.the.column.on.shard.key (errno 1105) (sqlstate HY000)"
    );
}

#[test]
fn test_alter_non_shard_key_columns_pass() {
    let router = test_router();

    let plan = build(
        "test",
        "alter table t1 add column(c1 int, c2 varchar(100))",
        &router,
    )
    .unwrap();
    assert_eq!(plan.queries().len(), 2);
    assert_eq!(
        plan.queries()[0].sql,
        "alter table `test`.`t1_0000` add column(c1 int, c2 varchar(100))"
    );

    build("test", "alter table t1 drop column c2", &router).unwrap();
    build("test", "alter table t1 modify column c2 varchar(1)", &router).unwrap();
}

#[test]
fn test_alter_global_table_unrestricted() {
    let router = test_router();
    // No sharding key, so even "id" may be dropped or modified.
    build("test", "alter table t2 drop column id", &router).unwrap();
    build("test", "alter table t2 modify column id bigint", &router).unwrap();
}

#[test]
fn test_create_table_with_primary_key_on_shard_key() {
    let router = test_router();
    let plan = build(
        "test",
        "create table t5(a int primary key, b int) partition by hash(a)",
        &router,
    )
    .unwrap();
    assert_eq!(plan.queries().len(), 2);
    assert_eq!(
        plan.queries()[0].sql,
        "create table `test`.`t5_0000`(a int primary key, b int) partition by hash(a)"
    );
}

#[test]
fn test_create_table_with_constraint_off_shard_key() {
    let router = test_router();
    let err = build(
        "test",
        "create table t1(a int unique, b int unique) partition by hash(a)",
        &router,
    )
    .unwrap_err();
    assert_eq!(
        err,
        "The unique/primary constraint should be only defined on the sharding key column[a] (errno 1105) (sqlstate HY000)"
    );
}

#[test]
fn test_create_table_constraint_permutations_rejected() {
    let router = test_router();
    let cases = [
        "create table t1(a int, b int unique) partition by hash(a)",
        "create table t1(a int, b int primary key) PARTITION BY hash(a)",
        "create table t1(a int, b int, primary key(a,b)) partition by hash(a)",
        "create table t1(a int unique, b int, c int, primary key(b)) partition by hash(a)",
        "create table t1(a int unique, b int, c int, unique key `name` (`b`, `c`)) partition by hash(a)",
    ];
    for sql in cases {
        let err = build("test", sql, &router).unwrap_err();
        assert_eq!(
            err,
            "The unique/primary constraint should be only defined on the sharding key column[a] (errno 1105) (sqlstate HY000)",
            "{}",
            sql
        );
    }
}

#[test]
fn test_scatter_short_circuit_for_database_ddl() {
    // No databases registered at all: database DDL never consults the
    // router.
    let router = ShardRouter::new(vec![BackendName::new("backend0")]);

    for sql in ["create database sbtest", "drop database sbtest"] {
        let plan = build("", sql, &router).unwrap();
        assert_eq!(plan.request_mode(), RequestMode::Scatter);
        assert!(plan.queries().is_empty());
        assert_eq!(plan.raw_query(), sql);
    }
}

#[test]
fn test_multi_target_drop_concatenates_plans() {
    let router = ShardRouter::new(vec![
        BackendName::new("backend0"),
        BackendName::new("backend1"),
    ]);
    router.create_database("db1").unwrap();
    router.create_database("db2").unwrap();
    router.register_hash_table_with("db1", "t1", "id", 2).unwrap();
    router.register_global_table("db1", "t2").unwrap();
    router.register_single_table("db2", "t3").unwrap();

    let plan = build("db1", "drop table db2.t3, t2, db1.t1", &router).unwrap();
    assert_eq!(plan.request_mode(), RequestMode::Targeted);
    assert_eq!(plan.raw_query(), "drop table db2.t3, t2, db1.t1");

    let sqls: Vec<&str> = plan.queries().iter().map(|q| q.sql.as_str()).collect();
    assert_eq!(
        sqls,
        vec![
            "drop table `db2`.`t3`",
            "drop table `db1`.`t2`",
            "drop table `db1`.`t2`",
            "drop table `db1`.`t1_0000`",
            "drop table `db1`.`t1_0001`",
        ]
    );
    assert_eq!(plan.queries()[0].backend.as_str(), "backend0");
    assert_eq!(plan.queries()[3].backend.as_str(), "backend0");
    assert_eq!(plan.queries()[4].backend.as_str(), "backend1");
}

#[test]
fn test_index_statements_rewrite_table_reference() {
    let router = test_router();

    let plan = build("test", "create index index1 on t1(a,b)", &router).unwrap();
    assert_eq!(plan.queries().len(), 2);
    assert_eq!(
        plan.queries()[0].sql,
        "create index index1 on `test`.`t1_0000`(a,b)"
    );

    let plan = build("test", "drop index index1 on t1", &router).unwrap();
    assert_eq!(plan.queries()[1].sql, "drop index index1 on `test`.`t1_0001`");

    let plan = build("test", "create fulltext index fts1 on t1(a)", &router).unwrap();
    assert_eq!(
        plan.queries()[0].sql,
        "create fulltext index fts1 on `test`.`t1_0000`(a)"
    );
}

#[test]
fn test_index_on_unknown_database() {
    let router = test_router();
    let err = build("", "create index index1 on xx.t1(a,b)", &router).unwrap_err();
    assert_eq!(err, "Unknown database 'xx' (errno 1049) (sqlstate 42000)");
}

#[test]
fn test_drop_unknown_table_and_database() {
    let router = test_router();

    let err = build("", "drop table test.missing", &router).unwrap_err();
    assert_eq!(err, "Table 'missing' doesn't exist (errno 1146) (sqlstate 42S02)");

    let err = build("", "drop table sbtest1.t1", &router).unwrap_err();
    assert_eq!(err, "Unknown database 'sbtest1' (errno 1049) (sqlstate 42000)");
}

#[test]
fn test_truncate_and_engine_and_charset() {
    let router = test_router();

    let plan = build("test", "truncate table t1", &router).unwrap();
    assert_eq!(plan.queries()[0].sql, "truncate table `test`.`t1_0000`");

    let plan = build("test", "alter table t1 engine=tokudb", &router).unwrap();
    assert_eq!(plan.queries()[0].sql, "alter table `test`.`t1_0000` engine=tokudb");

    let plan = build(
        "test",
        "alter table t1 convert to character set utf8mb",
        &router,
    )
    .unwrap();
    assert_eq!(
        plan.queries()[1].sql,
        "alter table `test`.`t1_0001` convert to character set utf8mb"
    );
}

#[test]
fn test_global_create_replicates_to_every_backend() {
    let router = test_router();
    router.register_global_table("test", "t8").unwrap();

    let plan = build("test", "create table t8(a int primary key, b int) GLOBAL", &router).unwrap();
    assert_eq!(plan.queries().len(), 2);
    assert_eq!(
        plan.queries()[0].sql,
        "create table `test`.`t8`(a int primary key, b int) GLOBAL"
    );
    assert!(plan.queries()[0].range.is_empty());
}

#[test]
fn test_single_table_create_rejected() {
    let router = test_router();
    let err = build("test", "CREATE TABLE t3(a int primary key,b int ) SINGLE", &router)
        .unwrap_err();
    assert_eq!(err, "single.table.not.impl.yet (errno 1105) (sqlstate HY000)");
}

#[test]
fn test_reserved_dual_rejected() {
    let router = test_router();
    let err = build("test", "create table dual(a int) partition by hash(a)", &router).unwrap_err();
    assert_eq!(
        err,
        "spanner.ddl.check.create.table[dual].error:not support (errno 1105) (sqlstate HY000)"
    );
}

#[test]
fn test_missing_shard_key_column_rejected() {
    let router = test_router();
    let err = build(
        "test",
        "CREATE TABLE t1(a int,b int ) PARTITION BY HASH(c);",
        &router,
    )
    .unwrap_err();
    assert_eq!(
        err,
        "Sharding Key column 'c' doesn't exist in table (errno 1105) (sqlstate HY000)"
    );
}

#[test]
fn test_hint_required_for_constrained_table() {
    let router = test_router();
    let err = build("test", "CREATE TABLE t1(a int primary key,b int )", &router).unwrap_err();
    assert_eq!(
        err,
        "The unique/primary constraint shoule be defined or add 'PARTITION BY HASH' to mandatory indication (errno 1105) (sqlstate HY000)"
    );
}

#[test]
fn test_explain_and_size() {
    let router = test_router();

    let plan = build("test", "truncate table t1", &router).unwrap();
    assert_eq!(plan.kind(), PlanKind::Ddl);
    let explain = plan.explain();
    assert!(explain.contains("\"RawQuery\""));
    assert!(explain.contains("\"Partitions\""));
    assert!(explain.contains("`test`.`t1_0000`"));

    let expected = plan.raw_query().len()
        + plan.queries().iter().map(|q| q.sql.len()).sum::<usize>();
    assert_eq!(plan.size(), expected);

    // Scatter plans omit the partition list entirely.
    let plan = build("", "create database sbtest", &router).unwrap();
    let explain = plan.explain();
    assert!(explain.contains("\"RawQuery\""));
    assert!(!explain.contains("\"Partitions\""));
}

#[test]
fn test_rename_is_not_part_of_the_grammar() {
    let router = test_router();
    let err = build("test", "rename table t1 to t2", &router).unwrap_err();
    assert!(err.starts_with("You have an error in your SQL syntax;"));
    assert!(err.ends_with("(errno 1149) (sqlstate 42000)"));
}
