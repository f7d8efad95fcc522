use crate::{
    definition::{ColumnRef, ListQueryDefinition, SortColumn, SortSpec},
    predicate::Row,
    value::Value,
};
use chrono::{DateTime, Utc};

sort_columns! {
    /// Sortable columns of the page fixture entity.
    pub(crate) enum PageSort {
        Id("id") => "id",
        Title("title") => "title",
        CreatedAt("createdAt") => "created_at",
    }
}

///
/// HiddenSort
///
/// Sort table whose `Archived` variant is deliberately left out of `ALL`.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum HiddenSort {
    Title,
    Archived,
}

impl SortColumn for HiddenSort {
    const ALL: &'static [Self] = &[Self::Title];

    fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Archived => "archived",
        }
    }

    fn column(self) -> ColumnRef {
        match self {
            Self::Title => ColumnRef::new("title"),
            Self::Archived => ColumnRef::new("archived_at"),
        }
    }
}

pub(crate) const ID: ColumnRef = ColumnRef::new("id");
pub(crate) const TITLE: ColumnRef = ColumnRef::new("title");
pub(crate) const CREATED_AT: ColumnRef = ColumnRef::new("created_at");

pub(crate) const PAGES: ListQueryDefinition<PageSort> =
    ListQueryDefinition::new(ID, SortSpec::desc(PageSort::CreatedAt));

///
/// PageRow
///

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PageRow {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) created_at: Option<DateTime<Utc>>,
}

impl PageRow {
    pub(crate) fn new(id: &str, title: &str, created_at_secs: i64) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            created_at: Some(at(created_at_secs)),
        }
    }
}

impl Row for PageRow {
    fn field(&self, column: ColumnRef) -> Option<Value> {
        match column.name() {
            "id" => Some(Value::Text(self.id.clone())),
            "title" => Some(Value::Text(self.title.clone())),
            "created_at" => self.created_at.map(Value::Date),
            _ => None,
        }
    }
}

pub(crate) fn at(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).expect("fixture timestamp should be in range")
}

pub(crate) fn ids(rows: &[PageRow]) -> Vec<&str> {
    rows.iter().map(|row| row.id.as_str()).collect()
}
