//! SQLite-backed flight leg and airport store.
//!
//! Owns a single `rusqlite::Connection`. Upstream ingestion is known to be
//! unreliable, so rows are re-validated through the domain constructors on
//! the way out: a row that fails validation is skipped with a warning
//! instead of failing the whole query.

use std::path::Path;

use rusqlite::{Connection, params};
use tracing::warn;

use crate::domain::{
    Airport, AirportCode, ClockTime, DaysOfWeek, FlightLeg, LegStatus,
};

use super::{AirportStore, LegFilter, LegStore, StoreError};

/// SQLite store for flight legs and airport reference data.
pub struct SqliteStore {
    conn: Connection,
}

/// Raw row out of the flights table, before domain validation.
struct LegRow {
    flight_number: String,
    airline_code: String,
    airline_name: String,
    origin: String,
    destination: String,
    departure_time: String,
    arrival_time: String,
    duration_minutes: i64,
    aircraft_type: Option<String>,
    days_of_week: String,
    status: String,
}

impl SqliteStore {
    /// Open (or create) a database file and ensure the schema exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|e| StoreError::Open {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Open an in-memory database with the schema initialized.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(|e| StoreError::Open {
            path: ":memory:".into(),
            message: e.to_string(),
        })?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Create the flights and airports tables if they don't exist.
    fn init_schema(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS airports (
                code      TEXT PRIMARY KEY,
                name      TEXT NOT NULL,
                city      TEXT NOT NULL,
                country   TEXT NOT NULL,
                timezone  TEXT NOT NULL,
                latitude  REAL,
                longitude REAL
            );
            CREATE TABLE IF NOT EXISTS flights (
                id               INTEGER PRIMARY KEY AUTOINCREMENT,
                flight_number    TEXT NOT NULL,
                airline_code     TEXT NOT NULL,
                airline_name     TEXT NOT NULL,
                origin           TEXT NOT NULL,
                destination      TEXT NOT NULL,
                departure_time   TEXT NOT NULL,
                arrival_time     TEXT NOT NULL,
                duration_minutes INTEGER NOT NULL,
                aircraft_type    TEXT,
                days_of_week     TEXT NOT NULL DEFAULT '1111111',
                status           TEXT NOT NULL DEFAULT 'active'
            );
            CREATE INDEX IF NOT EXISTS idx_flights_origin ON flights (origin);
            CREATE INDEX IF NOT EXISTS idx_flights_destination ON flights (destination);",
        )?;
        Ok(())
    }

    /// Insert an airport record, replacing any existing row for the code.
    pub fn insert_airport(&self, airport: &Airport) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO airports
                 (code, name, city, country, timezone, latitude, longitude)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                airport.code.as_str(),
                airport.name,
                airport.city,
                airport.country,
                airport.timezone,
                airport.latitude,
                airport.longitude,
            ],
        )?;
        Ok(())
    }

    /// Insert a flight leg.
    pub fn insert_leg(&self, leg: &FlightLeg) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO flights
                 (flight_number, airline_code, airline_name, origin, destination,
                  departure_time, arrival_time, duration_minutes, aircraft_type,
                  days_of_week, status)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            params![
                leg.flight_number(),
                leg.airline_code(),
                leg.airline_name(),
                leg.origin().as_str(),
                leg.destination().as_str(),
                leg.departure().to_string(),
                leg.arrival().to_string(),
                leg.duration_minutes(),
                leg.aircraft_type(),
                leg.days().as_bitstring(),
                leg.status().as_str(),
            ],
        )?;
        Ok(())
    }

    /// Number of leg rows, including rows the engine would reject.
    pub fn leg_count(&self) -> Result<usize, StoreError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM flights", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn query_legs(&self, filter: &LegFilter) -> Result<Vec<FlightLeg>, StoreError> {
        let mut sql = String::from(
            "SELECT flight_number, airline_code, airline_name, origin, destination,
                    departure_time, arrival_time, duration_minutes, aircraft_type,
                    days_of_week, status
             FROM flights",
        );
        let mut conditions = Vec::new();
        let mut values: Vec<String> = Vec::new();

        if let Some(origin) = filter.origin {
            values.push(origin.as_str().to_string());
            conditions.push(format!("origin = ?{}", values.len()));
        }
        if let Some(destination) = filter.destination {
            values.push(destination.as_str().to_string());
            conditions.push(format!("destination = ?{}", values.len()));
        }
        if let Some(status) = filter.status {
            values.push(status.as_str().to_string());
            conditions.push(format!("status = ?{}", values.len()));
        }

        if !conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(rusqlite::params_from_iter(values.iter()), |row| {
            Ok(LegRow {
                flight_number: row.get(0)?,
                airline_code: row.get(1)?,
                airline_name: row.get(2)?,
                origin: row.get(3)?,
                destination: row.get(4)?,
                departure_time: row.get(5)?,
                arrival_time: row.get(6)?,
                duration_minutes: row.get(7)?,
                aircraft_type: row.get(8)?,
                days_of_week: row.get(9)?,
                status: row.get(10)?,
            })
        })?;

        let mut legs = Vec::new();
        for row in rows {
            let row = row?;
            match decode_leg(&row) {
                Some(leg) => legs.push(leg),
                None => {
                    warn!(
                        flight_number = %row.flight_number,
                        origin = %row.origin,
                        destination = %row.destination,
                        "skipping malformed flight row"
                    );
                }
            }
        }
        Ok(legs)
    }
}

/// Validate a raw row through the domain constructors.
///
/// Returns `None` for rows the engine must not see: bad codes or times,
/// self-loops, non-positive durations, unknown status values.
fn decode_leg(row: &LegRow) -> Option<FlightLeg> {
    let origin = AirportCode::parse(&row.origin).ok()?;
    let destination = AirportCode::parse(&row.destination).ok()?;
    let departure = ClockTime::parse_hhmm(&row.departure_time).ok()?;
    let arrival = ClockTime::parse_hhmm(&row.arrival_time).ok()?;
    let days = DaysOfWeek::parse(&row.days_of_week).ok()?;
    let status = LegStatus::parse(&row.status)?;

    let mut leg = FlightLeg::new(
        row.flight_number.clone(),
        row.airline_code.clone(),
        row.airline_name.clone(),
        origin,
        destination,
        departure,
        arrival,
        row.duration_minutes,
    )
    .ok()?
    .with_days(days)
    .with_status(status);

    if let Some(aircraft) = &row.aircraft_type {
        leg = leg.with_aircraft_type(aircraft.clone());
    }

    Some(leg)
}

impl LegStore for SqliteStore {
    fn find_legs(&self, filter: &LegFilter) -> Result<Vec<FlightLeg>, StoreError> {
        self.query_legs(filter)
    }
}

impl AirportStore for SqliteStore {
    fn airport(&self, code: AirportCode) -> Result<Option<Airport>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT code, name, city, country, timezone, latitude, longitude
             FROM airports WHERE code = ?1",
        )?;
        let mut rows = stmt.query_map(params![code.as_str()], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, Option<f64>>(5)?,
                row.get::<_, Option<f64>>(6)?,
            ))
        })?;

        match rows.next() {
            Some(row) => {
                let (code_s, name, city, country, timezone, latitude, longitude) = row?;
                match AirportCode::parse(&code_s) {
                    Ok(code) => Ok(Some(Airport {
                        code,
                        name,
                        city,
                        country,
                        timezone,
                        latitude,
                        longitude,
                    })),
                    Err(_) => {
                        warn!(code = %code_s, "skipping malformed airport row");
                        Ok(None)
                    }
                }
            }
            None => Ok(None),
        }
    }
}
