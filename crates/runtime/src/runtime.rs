//! High-level runtime orchestrator.
//!
//! The runtime owns its collaborators (store, escrow, clock, event sink) and
//! runs every operation to completion: reads and writes go through a
//! [`StagedStore`], payouts and events are queued, and only an operation that
//! passed every check gets committed.

use std::env;
use std::sync::Arc;

use chrono::Duration;

use crate::api::{Result, RuntimeError};
use crate::clock::{Clock, SystemClock};
use crate::escrow::{Escrow, Transfer};
use crate::events::{Event, EventSink, TracingEventSink};
use crate::repository::{StagedStore, Store, SystemInfo};
use crate::types::Timestamp;

/// Runtime configuration shared by every operation.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Time a player has to answer before the game can be forfeited.
    pub turn_duration: Duration,
    /// Maximum number of leaderboard entries.
    pub leaderboard_capacity: usize,
    /// Denomination used when a create request names none.
    pub default_denom: String,
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables, falling
    /// back to defaults for anything missing or unparsable.
    ///
    /// - `CHECKERS_TURN_DURATION_SECS`
    /// - `CHECKERS_LEADERBOARD_CAPACITY`
    /// - `CHECKERS_DEFAULT_DENOM`
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(duration) = read_env::<i64>("CHECKERS_TURN_DURATION_SECS")
            .filter(|secs| *secs > 0)
            .and_then(Duration::try_seconds)
        {
            config.turn_duration = duration;
        }

        if let Some(capacity) = read_env::<usize>("CHECKERS_LEADERBOARD_CAPACITY") {
            config.leaderboard_capacity = capacity;
        }

        if let Some(denom) = env::var("CHECKERS_DEFAULT_DENOM")
            .ok()
            .filter(|denom| !denom.is_empty())
        {
            config.default_denom = denom;
        }

        config
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            turn_duration: Duration::hours(24),
            leaderboard_capacity: 100,
            default_denom: "stake".to_string(),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

/// Writes, payouts and events of one operation, applied only on commit.
pub(crate) struct Operation<'a> {
    pub stage: StagedStore<'a>,
    pub now: Timestamp,
    transfers: Vec<Transfer>,
    events: Vec<Event>,
}

impl Operation<'_> {
    pub fn transfer(&mut self, transfer: Option<Transfer>) {
        self.transfers.extend(transfer);
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    /// The singleton counter record. Its absence means the store was never
    /// initialised or was wiped.
    pub fn system_info(&self) -> Result<SystemInfo> {
        self.stage
            .system_info()?
            .ok_or(RuntimeError::MissingSystemInfo)
    }
}

/// Main runtime that executes game operations against a store.
pub struct Runtime {
    pub(crate) config: RuntimeConfig,
    pub(crate) store: Arc<dyn Store>,
    escrow: Arc<dyn Escrow>,
    clock: Arc<dyn Clock>,
    events: Arc<dyn EventSink>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Opens a stage over the store, reading the clock once.
    pub(crate) fn begin(&self) -> Operation<'_> {
        Operation {
            stage: StagedStore::new(self.store.as_ref()),
            now: self.clock.now(),
            transfers: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Executes queued payouts as one batch, writes staged records and
    /// publishes events.
    pub(crate) fn commit(&self, operation: Operation<'_>) -> Result<()> {
        let Operation {
            stage,
            transfers,
            events,
            ..
        } = operation;

        if !transfers.is_empty() {
            self.escrow.execute(&transfers)?;
        }
        let written = stage.commit()?;
        let published = events.len();
        for event in events {
            self.events.emit(event);
        }

        tracing::debug!(
            written,
            transfers = transfers.len(),
            published,
            "operation committed"
        );
        Ok(())
    }

    /// Logs an operation failure at a level matching its severity.
    pub(crate) fn report<T>(&self, operation: &str, result: Result<T>) -> Result<T> {
        if let Err(err) = &result {
            if err.severity().is_internal() {
                tracing::error!(operation, error = %err, severity = err.severity().as_str(), "operation aborted");
            } else {
                tracing::debug!(operation, error = %err, "operation rejected");
            }
        }
        result
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    store: Option<Arc<dyn Store>>,
    escrow: Option<Arc<dyn Escrow>>,
    clock: Option<Arc<dyn Clock>>,
    events: Option<Arc<dyn EventSink>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            store: None,
            escrow: None,
            clock: None,
            events: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set required store
    pub fn store(mut self, store: Arc<dyn Store>) -> Self {
        self.store = Some(store);
        self
    }

    /// Set required escrow
    pub fn escrow(mut self, escrow: Arc<dyn Escrow>) -> Self {
        self.escrow = Some(escrow);
        self
    }

    /// Set the clock (default: [`SystemClock`])
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Set the event sink (default: [`TracingEventSink`])
    pub fn events(mut self, events: Arc<dyn EventSink>) -> Self {
        self.events = Some(events);
        self
    }

    /// Build the runtime
    ///
    /// A store without a `SystemInfo` record gets the initial singletons
    /// (counter at 1, empty registry, empty leaderboard). An initialised
    /// store is left untouched.
    pub fn build(self) -> Result<Runtime> {
        let store = self.store.ok_or(RuntimeError::MissingCollaborator("a store"))?;
        let escrow = self
            .escrow
            .ok_or(RuntimeError::MissingCollaborator("an escrow"))?;

        if store.load_system_info()?.is_none() {
            store.save_leaderboard(&Default::default())?;
            store.save_system_info(&SystemInfo::default())?;
            tracing::info!("initialised empty checkers store");
        }

        Ok(Runtime {
            config: self.config,
            store,
            escrow,
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            events: self.events.unwrap_or_else(|| Arc::new(TracingEventSink)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::escrow::InMemoryEscrow;
    use crate::repository::{InMemoryStore, LeaderboardRepository, SystemInfoRepository};

    #[test]
    fn default_config() {
        let config = RuntimeConfig::default();
        assert_eq!(config.turn_duration, Duration::hours(24));
        assert_eq!(config.leaderboard_capacity, 100);
        assert_eq!(config.default_denom, "stake");
    }

    #[test]
    fn build_requires_store_and_escrow() {
        let missing_store = Runtime::builder()
            .escrow(Arc::new(InMemoryEscrow::new()))
            .build();
        assert!(matches!(
            missing_store,
            Err(RuntimeError::MissingCollaborator(_))
        ));

        let missing_escrow = Runtime::builder()
            .store(Arc::new(InMemoryStore::new()))
            .build();
        assert!(matches!(
            missing_escrow,
            Err(RuntimeError::MissingCollaborator(_))
        ));
    }

    #[test]
    fn build_initialises_singletons_once() {
        let store = Arc::new(InMemoryStore::new());
        Runtime::builder()
            .store(store.clone())
            .escrow(Arc::new(InMemoryEscrow::new()))
            .build()
            .unwrap();
        assert_eq!(store.load_system_info().unwrap(), Some(SystemInfo::default()));
        assert_eq!(store.load_leaderboard().unwrap(), Some(Default::default()));

        let mut advanced = SystemInfo::default();
        advanced.next_id = 9;
        store.save_system_info(&advanced).unwrap();
        Runtime::builder()
            .store(store.clone())
            .escrow(Arc::new(InMemoryEscrow::new()))
            .build()
            .unwrap();
        assert_eq!(store.load_system_info().unwrap(), Some(advanced));
    }
}
