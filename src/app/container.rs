//! Dependency injection container for the rote application.
//!
//! The container decides which memory repository backs a session and provides
//! factory methods for controllers and fresh stores.

use std::sync::Arc;

use super::config::{SessionConfig, StoreFormat};
use crate::{
    Result,
    adapters::{FlatFileRepository, InMemoryRepository, MsgPackRepository},
    controller::{GameController, SharedRepository},
    game::{GameMove, RuleModule},
    memory::{MoveMemory, seed_memory},
};

#[derive(Debug, Clone)]
enum Backend {
    /// Files on disk, encoded per [`StoreFormat`]
    Files,
    /// Shared in-process storage; the configured format is ignored
    InMemory(InMemoryRepository),
}

/// Application with dependency injection.
///
/// # Examples
///
/// ## Production usage
///
/// ```no_run
/// use rote::app::{App, SessionConfig};
/// use rote::variants::TicTacToe;
///
/// let app = App::new();
/// let config = SessionConfig::new("ttt_ai_file.txt").with_seed(42);
/// let controller = app.open_session(TicTacToe, &config)?;
/// # Ok::<(), rote::Error>(())
/// ```
///
/// ## Testing with dependency injection
///
/// ```
/// use rote::app::App;
/// use rote::adapters::InMemoryRepository;
///
/// let app = App::for_testing()
///     .with_repository(InMemoryRepository::new())
///     .with_default_seed(42)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct App {
    backend: Backend,
    /// Default random seed (None = non-deterministic)
    default_seed: Option<u64>,
}

impl App {
    /// Create a new app with production defaults.
    ///
    /// Uses file-backed repositories and no default seed.
    pub fn new() -> Self {
        Self {
            backend: Backend::Files,
            default_seed: None,
        }
    }

    /// Create a builder for constructing app with custom dependencies.
    pub fn for_testing() -> AppBuilder {
        AppBuilder::new()
    }

    /// Repository for stores in `format`.
    ///
    /// Returns an Arc-wrapped repository that sessions can share.
    pub fn repository<M: GameMove>(&self, format: StoreFormat) -> SharedRepository<M> {
        match (&self.backend, format) {
            (Backend::InMemory(repo), _) => Arc::new(repo.clone()),
            (Backend::Files, StoreFormat::Flat) => Arc::new(FlatFileRepository::new()),
            (Backend::Files, StoreFormat::MsgPack) => Arc::new(MsgPackRepository::new()),
        }
    }

    /// Open a game session with memory loaded from the configured store.
    ///
    /// The config's seed takes precedence over the app default.
    ///
    /// # Errors
    ///
    /// Fails if the store is missing or malformed.
    pub fn open_session<R: RuleModule>(
        &self,
        rules: R,
        config: &SessionConfig,
    ) -> Result<GameController<R>> {
        GameController::open(
            rules,
            self.repository(config.format),
            config.memory_path(),
            config.seed.or(self.default_seed),
        )
    }

    /// Load the memory from the configured store without starting a session.
    pub fn load_memory<M: GameMove>(&self, config: &SessionConfig) -> Result<MoveMemory<M>> {
        self.repository::<M>(config.format)
            .load(config.memory_path())
    }

    /// Write a freshly seeded memory for `rules` to the configured store.
    ///
    /// Any existing store at the path is replaced.
    pub fn seed_store<R: RuleModule>(
        &self,
        rules: &R,
        config: &SessionConfig,
    ) -> Result<MoveMemory<R::Move>> {
        let memory = seed_memory(rules)?;
        self.repository::<R::Move>(config.format)
            .save(&memory, config.memory_path())?;
        Ok(memory)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing app with custom dependencies.
///
/// Primarily used for testing to inject in-memory storage and control
/// randomness.
///
/// # Examples
///
/// ```
/// use rote::app::AppBuilder;
/// use rote::adapters::InMemoryRepository;
///
/// let app = AppBuilder::new()
///     .with_repository(InMemoryRepository::new())
///     .with_default_seed(42)
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct AppBuilder {
    repository: Option<InMemoryRepository>,
    default_seed: Option<u64>,
}

impl AppBuilder {
    /// Create a new app builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep every store in `repo` instead of on disk.
    pub fn with_repository(mut self, repo: InMemoryRepository) -> Self {
        self.repository = Some(repo);
        self
    }

    /// Set a default random seed for all sessions opened by this app.
    pub fn with_default_seed(mut self, seed: u64) -> Self {
        self.default_seed = Some(seed);
        self
    }

    /// Build the app with the configured dependencies.
    ///
    /// If no repository was specified, stores live on disk.
    pub fn build(self) -> App {
        App {
            backend: self
                .repository
                .map_or(Backend::Files, Backend::InMemory),
            default_seed: self.default_seed,
        }
    }
}
