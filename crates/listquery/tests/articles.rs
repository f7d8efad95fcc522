use chrono::DateTime;
use listquery::{
    core::{
        error::{ErrorClass, QueryError},
        exec::{count_matching, execute, execute_filtered},
        input::ValidationError,
        policy::PaginationPolicy,
    },
    prelude::*,
};
use proptest::prelude::*;
use serde_json::json;

sort_columns! {
    pub enum ArticleSort {
        Id("id") => "id",
        Title("title") => "title",
        CreatedAt("createdAt") => "created_at",
        Score("score") => "score",
    }
}

const ID: ColumnRef = ColumnRef::new("id");
const SCORE: ColumnRef = ColumnRef::new("score");

const ARTICLES: ListQueryDefinition<ArticleSort> =
    ListQueryDefinition::new(ID, SortSpec::desc(ArticleSort::CreatedAt));

///
/// Article
///

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct Article {
    id: String,
    title: String,
    created_at: i64,
    score: f64,
}

impl Article {
    fn new(id: &str, title: &str, created_at_secs: i64, score: f64) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            created_at: created_at_secs,
            score,
        }
    }
}

impl Row for Article {
    fn field(&self, column: ColumnRef) -> Option<Value> {
        match column.name() {
            "id" => Some(Value::Text(self.id.clone())),
            "title" => Some(Value::Text(self.title.clone())),
            "created_at" => DateTime::from_timestamp(self.created_at, 0).map(Value::Date),
            "score" => Some(Value::Number(self.score)),
            _ => None,
        }
    }
}

fn scenario() -> Vec<Article> {
    vec![
        Article::new("1", "A", 1_000, 1.0),
        Article::new("2", "B", 1_000, 2.5),
        Article::new("3", "C", 2_000, 2.5),
    ]
}

fn ids(rows: &[Article]) -> Vec<&str> {
    rows.iter().map(|row| row.id.as_str()).collect()
}

fn request(limit: u32, cursor: Option<&str>, sort: Option<(&str, &str)>) -> String {
    let mut body = json!({ "pagination": { "mode": "cursor", "limit": limit } });
    if let Some(cursor) = cursor {
        body["pagination"]["cursor"] = json!(cursor);
    }
    if let Some((column, direction)) = sort {
        body["sort"] = json!([{ "column": column, "direction": direction }]);
    }

    body.to_string()
}

#[test]
fn version_is_exported() {
    assert!(!listquery::VERSION.is_empty());
}

#[test]
fn cursor_pages_serialize_like_the_api_response() {
    let rows = scenario();

    let compiled = compile_json(&request(2, None, None), &ARTICLES).expect("first page compiles");
    let page = compiled.into_cursor_page(execute(&rows, &compiled));
    let body = serde_json::to_value(&page).expect("page should serialize");

    assert_eq!(body["data"][0]["id"], "3");
    assert_eq!(body["data"][1]["id"], "2");
    assert_eq!(body["pagination"]["hasNextPage"], true);
    let cursor = body["pagination"]["nextCursor"]
        .as_str()
        .expect("first page should carry a cursor")
        .to_string();

    let compiled =
        compile_json(&request(2, Some(&cursor), None), &ARTICLES).expect("second page compiles");
    let page = compiled.into_cursor_page(execute(&rows, &compiled));
    let body = serde_json::to_value(&page).expect("page should serialize");

    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["data"][0]["id"], "1");
    assert_eq!(
        body["pagination"],
        json!({ "hasNextPage": false, "nextCursor": null })
    );
}

#[test]
fn numeric_sort_walks_ties_by_identity() {
    let rows = scenario();

    let compiled = compile_json(&request(1, None, Some(("score", "desc"))), &ARTICLES)
        .expect("score sort compiles");
    let first = compiled.into_cursor_page(execute(&rows, &compiled));
    assert_eq!(ids(first.data()), ["3"]);

    let cursor = first.pagination().next_cursor.clone();
    let compiled = compile_json(&request(1, cursor.as_deref(), Some(("score", "desc"))), &ARTICLES)
        .expect("score sort compiles");
    let second = compiled.into_cursor_page(execute(&rows, &compiled));
    assert_eq!(ids(second.data()), ["2"]);

    let cursor = second.pagination().next_cursor.clone();
    let compiled = compile_json(&request(1, cursor.as_deref(), Some(("score", "desc"))), &ARTICLES)
        .expect("score sort compiles");
    let third = compiled.into_cursor_page(execute(&rows, &compiled));
    assert_eq!(ids(third.data()), ["1"]);
    assert!(!third.pagination().has_next_page);
}

#[test]
fn offset_pages_report_totals() {
    let rows = scenario();
    let body = r#"{
        "pagination": { "mode": "offset", "page": 2, "pageSize": 2 },
        "sort": [{ "column": "title", "direction": "asc" }]
    }"#;

    let compiled = compile_json(body, &ARTICLES).expect("offset page compiles");
    let page = compiled.into_offset_page(execute(&rows, &compiled), count_matching(&rows, None));

    assert_eq!(ids(page.data()), ["3"]);
    assert_eq!(
        serde_json::to_value(page.pagination()).expect("meta should serialize"),
        json!({ "page": 2, "pageSize": 2, "pageCount": 2, "total": 3 })
    );
}

#[test]
fn caller_filters_combine_with_the_seek_predicate() {
    let rows = scenario();
    let filter = Predicate::gt(SCORE, 2.0);

    let compiled = compile_json(&request(1, None, None), &ARTICLES).expect("first page compiles");
    let page = compiled.into_cursor_page(execute_filtered(&rows, &compiled, Some(filter.clone())));
    assert_eq!(ids(page.data()), ["3"]);

    let cursor = page.pagination().next_cursor.clone();
    let compiled =
        compile_json(&request(1, cursor.as_deref(), None), &ARTICLES).expect("page compiles");
    let page = compiled.into_cursor_page(execute_filtered(&rows, &compiled, Some(filter)));
    assert_eq!(ids(page.data()), ["2"]);
    assert!(!page.pagination().has_next_page);
}

#[test]
fn request_errors_are_classified_for_transport_mapping() {
    let err = compile_json(&request(129, None, None), &ARTICLES)
        .expect_err("limit above maximum should be rejected");
    assert_eq!(
        err,
        QueryError::Validation(ValidationError::LimitOutOfRange {
            limit: 129,
            max: 128
        })
    );
    assert_eq!(err.class(), ErrorClass::Rejected);

    let err = compile_json(&request(2, Some("%%%"), None), &ARTICLES)
        .expect_err("garbage cursor should be rejected");
    assert!(matches!(err, QueryError::Decode(_)));
    assert_eq!(err.class(), ErrorClass::Rejected);

    let err = compile_json(&request(2, None, Some(("body", "asc"))), &ARTICLES)
        .expect_err("unknown column should be rejected");
    assert_eq!(
        err,
        QueryError::Validation(ValidationError::UnknownSortColumn {
            column: "body".to_string()
        })
    );
}

#[test]
fn deployments_can_tighten_the_policy() {
    let policy = PaginationPolicy::from_json(r#"{ "default_limit": 2, "max_limit": 2 }"#)
        .expect("policy document should parse");
    let definition = ARTICLES
        .with_policy(policy)
        .expect("tightened policy should install");

    let compiled = compile_json("{}", &definition).expect("default request compiles");
    assert_eq!(compiled.page_limit(), 2);

    let err = compile_json(&request(3, None, None), &definition)
        .expect_err("limit above the tightened maximum should be rejected");
    assert!(err.is_rejected());
}

#[test]
fn invalid_policy_documents_never_reach_a_definition() {
    let policy = PaginationPolicy {
        default_limit: 10,
        max_limit: 5,
        ..PaginationPolicy::DEFAULT
    };

    let err = ARTICLES
        .with_policy(policy)
        .map_err(QueryError::from)
        .expect_err("default above maximum should be rejected");
    assert!(matches!(err, QueryError::Policy(_)));
    assert_eq!(err.class(), ErrorClass::Internal);
    assert!(!err.is_rejected());
}

proptest! {
    #[test]
    fn filtered_walk_returns_every_match_once(
        scores in prop::collection::vec(0u8..4, 0..20),
        limit in 1u32..5,
    ) {
        let rows: Vec<Article> = scores
            .iter()
            .enumerate()
            .map(|(i, score)| {
                let id = format!("{i:02}");
                Article::new(&id, &id, 1_000 + i64::from(*score % 2), f64::from(*score))
            })
            .collect();
        let filter = Predicate::gt(SCORE, 0.5);

        let mut seen = Vec::new();
        let mut cursor: Option<String> = None;
        for _ in 0..rows.len() + 2 {
            let compiled = compile_json(&request(limit, cursor.as_deref(), Some(("score", "asc"))), &ARTICLES)
                .expect("page should compile");
            let page = compiled.into_cursor_page(execute_filtered(&rows, &compiled, Some(filter.clone())));
            seen.extend(page.data().iter().map(|row| row.id.clone()));

            cursor = page.pagination().next_cursor.clone();
            if cursor.is_none() {
                break;
            }
        }

        let mut expected: Vec<String> = rows
            .iter()
            .filter(|row| row.score > 0.5)
            .map(|row| row.id.clone())
            .collect();
        let total = usize::try_from(count_matching(&rows, Some(&filter))).unwrap_or(usize::MAX);
        prop_assert_eq!(total, expected.len());

        expected.sort();
        seen.sort();
        prop_assert_eq!(seen, expected);
    }
}
