//! Read-query representation and SQL construction.

use keepsake_core::{EntityDef, ReadOptions, Value};

/// Request kind tag. Only select-class reads are subject to soft-delete
/// filtering; other kinds pass through the filter untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Select,
    Update,
    Delete,
}

/// Comparison operator for a single-column predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CompareOp {
    fn as_sql(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "<>",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
        }
    }
}

/// A single-column predicate. Predicates compose by logical AND.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub column: String,
    pub op: CompareOp,
    pub value: Value,
}

impl Condition {
    pub fn new(column: impl Into<String>, op: CompareOp, value: impl Into<Value>) -> Self {
        Self {
            column: column.into(),
            op,
            value: value.into(),
        }
    }

    /// Equality predicate.
    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(column, CompareOp::Eq, value)
    }

    /// Inequality predicate.
    pub fn ne(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(column, CompareOp::Ne, value)
    }
}

/// A joined source. `on` is a raw join predicate.
#[derive(Debug, Clone)]
pub struct Join {
    pub table: String,
    pub alias: Option<String>,
    pub on: String,
}

impl Join {
    pub fn new(table: impl Into<String>, on: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            alias: None,
            on: on.into(),
        }
    }

    /// Alias the joined source.
    pub fn aliased(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

/// A request against one entity's table: a mutable condition set, a request
/// kind, the read options, and a marker recording whether soft-delete filter
/// injection already ran for this request instance.
#[derive(Debug, Clone)]
pub struct Query {
    table: String,
    alias: Option<String>,
    kind: QueryKind,
    joins: Vec<Join>,
    conditions: Vec<Condition>,
    options: ReadOptions,
    soft_delete_applied: bool,
}

impl Query {
    fn new(entity: &EntityDef, kind: QueryKind) -> Self {
        Self {
            table: entity.table().to_string(),
            alias: None,
            kind,
            joins: Vec::new(),
            conditions: Vec::new(),
            options: ReadOptions::default(),
            soft_delete_applied: false,
        }
    }

    /// A select-class read against the entity's table.
    pub fn select(entity: &EntityDef) -> Self {
        Self::new(entity, QueryKind::Select)
    }

    /// An update-class request (not subject to read filtering).
    pub fn update(entity: &EntityDef) -> Self {
        Self::new(entity, QueryKind::Update)
    }

    /// A delete-class request (not subject to read filtering).
    pub fn delete(entity: &EntityDef) -> Self {
        Self::new(entity, QueryKind::Delete)
    }

    /// Alias the primary source.
    pub fn aliased(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Add a joined source.
    pub fn join(mut self, join: Join) -> Self {
        self.joins.push(join);
        self
    }

    /// AND a predicate into the condition set.
    pub fn and_where(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Replace the read options.
    pub fn with_options(mut self, options: ReadOptions) -> Self {
        self.options = options;
        self
    }

    /// Disable soft-delete filtering for this request only.
    pub fn with_deleted(mut self) -> Self {
        self.options.with_deleted = true;
        self
    }

    pub fn kind(&self) -> QueryKind {
        self.kind
    }

    pub fn options(&self) -> &ReadOptions {
        &self.options
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// The name the primary source goes by in rendered SQL: the alias if one
    /// is set, the table name otherwise.
    pub fn source(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.table)
    }

    /// Whether soft-delete filter injection already ran for this request.
    pub fn soft_delete_applied(&self) -> bool {
        self.soft_delete_applied
    }

    pub(crate) fn mark_soft_delete_applied(&mut self) {
        self.soft_delete_applied = true;
    }

    pub(crate) fn push_condition(&mut self, condition: Condition) {
        self.conditions.push(condition);
    }

    /// Render to SQL and bind parameters.
    pub fn to_sql(&self) -> (String, Vec<Value>) {
        let mut sql = String::from("SELECT ");
        if self.joins.is_empty() {
            sql.push('*');
        } else {
            sql.push_str(self.source());
            sql.push_str(".*");
        }
        sql.push_str(" FROM ");
        sql.push_str(&self.table);
        if let Some(alias) = &self.alias {
            sql.push_str(" AS ");
            sql.push_str(alias);
        }
        for join in &self.joins {
            sql.push_str(" JOIN ");
            sql.push_str(&join.table);
            if let Some(alias) = &join.alias {
                sql.push_str(" AS ");
                sql.push_str(alias);
            }
            sql.push_str(" ON ");
            sql.push_str(&join.on);
        }
        let (clause, params) = render_conditions(&self.conditions);
        if !clause.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clause);
        }
        (sql, params)
    }
}

/// Render a condition set as an AND-joined WHERE clause with `?`
/// placeholders, returning the clause and the bind values in order.
pub(crate) fn render_conditions(conditions: &[Condition]) -> (String, Vec<Value>) {
    let clauses: Vec<String> = conditions
        .iter()
        .map(|c| format!("{} {} ?", c.column, c.op.as_sql()))
        .collect();
    let params = conditions.iter().map(|c| c.value.clone()).collect();
    (clauses.join(" AND "), params)
}
