//! SQLite-backed catalog. Filtering, scoring, ordering and the limit all run
//! inside one SELECT; only the per-item breakdown is recomputed in Rust.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::types::ToSql;
use rusqlite::{Connection, Row};
use tracing::{debug, info};

use carmatch_core::dimension::Dimension;
use carmatch_core::errors::{CarmatchError, CarmatchResult, CatalogError};
use carmatch_core::models::ranking_query::{
    BudgetCeiling, FilterPredicate, ItemCondition, RankedItem, RankingQuery, ScoringExpression,
};
use carmatch_core::models::{BodyType, CatalogItem, EcoLabel, MechanicalType};
use carmatch_core::traits::ICatalogStore;

use crate::to_catalog_err;

/// Base SELECT columns (17 columns, indices 0-16). Feature columns follow.
const VEHICLE_COLUMNS: &str = "id, name, mechanical_type, body_type, eco_label, price,
     monthly_installment, seats, aesthetics_score, premium_score, singularity_score,
     model_year, all_wheel_drive, low_range_gearing, low_cost_trim, sporty_trim, automatic";

const BASE_COLUMN_COUNT: usize = 17;

type DynParams = Vec<Box<dyn ToSql>>;

fn feature_column(dimension: Dimension) -> String {
    format!("f_{}", dimension.as_str())
}

fn feature_columns() -> Vec<String> {
    Dimension::ALL.iter().map(|d| feature_column(*d)).collect()
}

fn create_table_sql() -> String {
    let features = feature_columns()
        .iter()
        .map(|c| format!("{c} REAL NOT NULL DEFAULT 0"))
        .collect::<Vec<_>>()
        .join(",\n            ");
    format!(
        "CREATE TABLE IF NOT EXISTS vehicles (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            mechanical_type TEXT NOT NULL,
            body_type TEXT NOT NULL,
            eco_label TEXT NOT NULL,
            price REAL NOT NULL,
            monthly_installment REAL,
            seats INTEGER NOT NULL,
            aesthetics_score REAL NOT NULL,
            premium_score REAL NOT NULL,
            singularity_score REAL NOT NULL,
            model_year INTEGER NOT NULL,
            all_wheel_drive INTEGER NOT NULL DEFAULT 0,
            low_range_gearing INTEGER NOT NULL DEFAULT 0,
            low_cost_trim INTEGER NOT NULL DEFAULT 0,
            sporty_trim INTEGER NOT NULL DEFAULT 0,
            automatic INTEGER NOT NULL DEFAULT 0,
            {features}
        );
        CREATE INDEX IF NOT EXISTS idx_vehicles_mechanical ON vehicles(mechanical_type);
        CREATE INDEX IF NOT EXISTS idx_vehicles_body ON vehicles(body_type);"
    )
}

/// Catalog stored in a single `vehicles` table.
pub struct SqliteCatalog {
    conn: Mutex<Connection>,
}

impl SqliteCatalog {
    /// Open (or create) a catalog database file.
    pub fn open(path: &Path) -> CarmatchResult<Self> {
        let conn = Connection::open(path).map_err(|e| unavailable(e.to_string()))?;
        info!(path = %path.display(), "sqlite catalog opened");
        Self::with_connection(conn)
    }

    /// Fresh in-memory catalog (for testing).
    pub fn open_in_memory() -> CarmatchResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| unavailable(e.to_string()))?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> CarmatchResult<Self> {
        conn.execute_batch(&create_table_sql())
            .map_err(|e| to_catalog_err(e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn with_conn<F, T>(&self, f: F) -> CarmatchResult<T>
    where
        F: FnOnce(&mut Connection) -> CarmatchResult<T>,
    {
        let mut guard = self
            .conn
            .lock()
            .map_err(|e| unavailable(format!("catalog connection lock poisoned: {e}")))?;
        f(&mut guard)
    }

    /// Insert or replace rows in one transaction.
    pub fn insert_items(&self, items: &[CatalogItem]) -> CarmatchResult<usize> {
        self.with_conn(|conn| {
            let tx = conn.transaction().map_err(|e| to_catalog_err(e.to_string()))?;
            let features = feature_columns();
            let column_count = BASE_COLUMN_COUNT + features.len();
            let placeholders = (1..=column_count)
                .map(|i| format!("?{i}"))
                .collect::<Vec<_>>()
                .join(", ");
            let sql = format!(
                "INSERT OR REPLACE INTO vehicles ({VEHICLE_COLUMNS}, {}) VALUES ({placeholders})",
                features.join(", ")
            );
            {
                let mut stmt = tx.prepare(&sql).map_err(|e| to_catalog_err(e.to_string()))?;
                for item in items {
                    let params = item_params(item);
                    let refs: Vec<&dyn ToSql> = params.iter().map(|p| p.as_ref()).collect();
                    stmt.execute(refs.as_slice())
                        .map_err(|e| to_catalog_err(format!("insert {}: {e}", item.id)))?;
                }
            }
            tx.commit().map_err(|e| to_catalog_err(e.to_string()))?;
            debug!(rows = items.len(), "catalog rows inserted");
            Ok(items.len())
        })
    }

    /// Number of rows in the catalog.
    pub fn count(&self) -> CarmatchResult<usize> {
        self.with_conn(|conn| {
            let count: i64 = conn
                .query_row("SELECT COUNT(*) FROM vehicles", [], |row| row.get(0))
                .map_err(|e| to_catalog_err(e.to_string()))?;
            Ok(usize::try_from(count).unwrap_or(0))
        })
    }
}

fn unavailable(reason: impl Into<String>) -> CarmatchError {
    CatalogError::Unavailable {
        reason: reason.into(),
    }
    .into()
}

fn item_params(item: &CatalogItem) -> DynParams {
    let mut params: DynParams = vec![
        Box::new(item.id.clone()),
        Box::new(item.name.clone()),
        Box::new(item.mechanical_type.as_str()),
        Box::new(item.body_type.as_str()),
        Box::new(item.eco_label.as_str()),
        Box::new(item.price),
        Box::new(item.monthly_installment),
        Box::new(item.seats),
        Box::new(item.aesthetics_score),
        Box::new(item.premium_score),
        Box::new(item.singularity_score),
        Box::new(item.model_year),
        Box::new(item.all_wheel_drive),
        Box::new(item.low_range_gearing),
        Box::new(item.low_cost_trim),
        Box::new(item.sporty_trim),
        Box::new(item.automatic),
    ];
    for dimension in Dimension::ALL {
        params.push(Box::new(item.feature(dimension)));
    }
    params
}

fn in_list(column: &str, values: &[&'static str], params: &mut DynParams) -> String {
    if values.is_empty() {
        return "0".to_string();
    }
    for value in values {
        params.push(Box::new(*value));
    }
    let placeholders = vec!["?"; values.len()].join(", ");
    format!("{column} IN ({placeholders})")
}

fn condition_sql(condition: &ItemCondition, params: &mut DynParams) -> String {
    match condition {
        ItemCondition::MechanicalIn(types) => {
            let keys: Vec<&'static str> = types.iter().map(|t| t.as_str()).collect();
            in_list("mechanical_type", &keys, params)
        }
        ItemCondition::BodyIn(types) => {
            let keys: Vec<&'static str> = types.iter().map(|t| t.as_str()).collect();
            in_list("body_type", &keys, params)
        }
        ItemCondition::EcoLabelIn(labels) => {
            let keys: Vec<&'static str> = labels.iter().map(|l| l.as_str()).collect();
            in_list("eco_label", &keys, params)
        }
        ItemCondition::AllWheelDrive => "all_wheel_drive = 1".to_string(),
        ItemCondition::LowRangeGearing => "low_range_gearing = 1".to_string(),
        ItemCondition::LowCostTrim => "low_cost_trim = 1".to_string(),
        ItemCondition::SportyTrim => "sporty_trim = 1".to_string(),
        ItemCondition::Automatic => "automatic = 1".to_string(),
        ItemCondition::Manual => "automatic = 0".to_string(),
        ItemCondition::ModelYearBefore(year) => {
            params.push(Box::new(*year));
            "model_year < ?".to_string()
        }
    }
}

/// `(Σ f_d × w_d) + (Σ CASE WHEN condition THEN magnitude ELSE 0 END)`.
fn score_sql(expression: &ScoringExpression, params: &mut DynParams) -> String {
    let mut weighted = String::from("0.0");
    for term in &expression.terms {
        weighted.push_str(&format!(" + {} * ?", feature_column(term.dimension)));
        params.push(Box::new(term.weight));
    }
    let mut adjustments = String::from("0.0");
    for adjustment in &expression.adjustments {
        let condition = condition_sql(&adjustment.condition, params);
        adjustments.push_str(&format!(" + CASE WHEN {condition} THEN ? ELSE 0.0 END"));
        params.push(Box::new(adjustment.magnitude));
    }
    format!("({weighted}) + ({adjustments})")
}

fn where_sql(predicate: &FilterPredicate, params: &mut DynParams) -> String {
    let mut clauses = Vec::new();
    if !predicate.mechanical_types.is_empty() {
        let keys: Vec<&'static str> = predicate.mechanical_types.iter().map(|t| t.as_str()).collect();
        clauses.push(in_list("mechanical_type", &keys, params));
    }
    if !predicate.body_types.is_empty() {
        let keys: Vec<&'static str> = predicate.body_types.iter().map(|t| t.as_str()).collect();
        clauses.push(in_list("body_type", &keys, params));
    }
    match predicate.budget {
        Some(BudgetCeiling::CashPrice(max)) => {
            clauses.push("price <= ?".to_string());
            params.push(Box::new(max));
        }
        Some(BudgetCeiling::MonthlyInstallment(max)) => {
            clauses.push("monthly_installment IS NOT NULL AND monthly_installment <= ?".to_string());
            params.push(Box::new(max));
        }
        None => {}
    }
    if let Some(min) = predicate.min_seats {
        clauses.push("seats >= ?".to_string());
        params.push(Box::new(min));
    }
    let minimums = [
        ("aesthetics_score", predicate.min_aesthetics),
        ("premium_score", predicate.min_premium),
        ("singularity_score", predicate.min_singularity),
    ];
    for (column, min) in minimums {
        if let Some(min) = min {
            clauses.push(format!("{column} >= ?"));
            params.push(Box::new(min));
        }
    }
    if clauses.is_empty() {
        "1".to_string()
    } else {
        clauses.join(" AND ")
    }
}

fn parse_key<T>(id: &str, column: &str, raw: &str, parse: fn(&str) -> Option<T>) -> CarmatchResult<T> {
    parse(raw).ok_or_else(|| {
        CatalogError::MalformedRow {
            id: id.to_string(),
            reason: format!("unknown {column} '{raw}'"),
        }
        .into()
    })
}

/// Parse one vehicle row; the score sits after the feature columns.
fn parse_vehicle_row(row: &Row<'_>) -> CarmatchResult<(CatalogItem, f64)> {
    let get_err = |e: rusqlite::Error| to_catalog_err(e.to_string());

    let id: String = row.get(0).map_err(get_err)?;
    let mechanical: String = row.get(2).map_err(get_err)?;
    let body: String = row.get(3).map_err(get_err)?;
    let label: String = row.get(4).map_err(get_err)?;

    let mut item = CatalogItem {
        name: row.get(1).map_err(get_err)?,
        mechanical_type: parse_key(&id, "mechanical_type", &mechanical, MechanicalType::from_key)?,
        body_type: parse_key(&id, "body_type", &body, BodyType::from_key)?,
        eco_label: parse_key(&id, "eco_label", &label, EcoLabel::from_key)?,
        price: row.get(5).map_err(get_err)?,
        monthly_installment: row.get(6).map_err(get_err)?,
        seats: row.get(7).map_err(get_err)?,
        aesthetics_score: row.get(8).map_err(get_err)?,
        premium_score: row.get(9).map_err(get_err)?,
        singularity_score: row.get(10).map_err(get_err)?,
        model_year: row.get(11).map_err(get_err)?,
        all_wheel_drive: row.get(12).map_err(get_err)?,
        low_range_gearing: row.get(13).map_err(get_err)?,
        low_cost_trim: row.get(14).map_err(get_err)?,
        sporty_trim: row.get(15).map_err(get_err)?,
        automatic: row.get(16).map_err(get_err)?,
        features: Default::default(),
        id,
    };
    for (offset, dimension) in Dimension::ALL.iter().enumerate() {
        let value: f64 = row.get(BASE_COLUMN_COUNT + offset).map_err(get_err)?;
        item.features.insert(*dimension, value);
    }
    let score: f64 = row
        .get(BASE_COLUMN_COUNT + Dimension::ALL.len())
        .map_err(get_err)?;
    Ok((item, score))
}

impl ICatalogStore for SqliteCatalog {
    fn rank(&self, query: &RankingQuery) -> CarmatchResult<Vec<RankedItem>> {
        let mut dyn_params: DynParams = Vec::new();
        let score = score_sql(&query.expression, &mut dyn_params);
        let filter = where_sql(&query.predicate, &mut dyn_params);
        dyn_params.push(Box::new(i64::try_from(query.limit).unwrap_or(i64::MAX)));

        let sql = format!(
            "SELECT {VEHICLE_COLUMNS}, {}, {score} AS score FROM vehicles
             WHERE {filter}
             ORDER BY score DESC, id ASC
             LIMIT ?",
            feature_columns().join(", ")
        );

        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&sql).map_err(|e| to_catalog_err(e.to_string()))?;
            let params_refs: Vec<&dyn ToSql> = dyn_params.iter().map(|p| p.as_ref()).collect();
            let rows = stmt
                .query_map(params_refs.as_slice(), |row| Ok(parse_vehicle_row(row)))
                .map_err(|e| to_catalog_err(e.to_string()))?;

            let mut ranked = Vec::new();
            for row in rows {
                let (item, score) = row.map_err(|e| to_catalog_err(e.to_string()))??;
                let breakdown = query.expression.evaluate(&item);
                ranked.push(RankedItem {
                    item,
                    score,
                    breakdown,
                });
            }
            debug!(returned = ranked.len(), limit = query.limit, "sqlite catalog ranked");
            Ok(ranked)
        })
    }

    fn name(&self) -> &str {
        "sqlite"
    }
}
