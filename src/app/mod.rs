//! Application layer with dependency injection container.
//!
//! The container owns the choice of memory repository and hands out game
//! controllers wired to it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │           Application Layer (app)           │
//! │  ┌──────────────────────────────────────┐   │
//! │  │            App (container)           │   │
//! │  └──────────────┬───────────────────────┘   │
//! │                 │ owns                       │
//! │                 ▼                            │
//! │  ┌──────────────────────────────────────┐   │
//! │  │  Infrastructure (adapters)           │   │
//! │  │  - FlatFileRepository                │   │
//! │  │  - MsgPackRepository                 │   │
//! │  │  - InMemoryRepository (testing)      │   │
//! │  └──────────────┬───────────────────────┘   │
//! │                 │ implements                 │
//! │                 ▼                            │
//! │  ┌──────────────────────────────────────┐   │
//! │  │  Domain Ports (ports)                │   │
//! │  │  - MemoryRepository trait            │   │
//! │  └──────────────┬───────────────────────┘   │
//! │                 │ used by                    │
//! │                 ▼                            │
//! │  ┌──────────────────────────────────────┐   │
//! │  │  Domain Logic                        │   │
//! │  │  - GameController                    │   │
//! │  │  - MoveMemory                        │   │
//! │  └──────────────────────────────────────┘   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use rote::app::{App, SessionConfig};
//! use rote::adapters::InMemoryRepository;
//! use rote::variants::Hexapawn;
//!
//! let app = App::for_testing()
//!     .with_repository(InMemoryRepository::new())
//!     .with_default_seed(42)
//!     .build();
//!
//! let config = SessionConfig::new("hp_ai_file.txt");
//! app.seed_store(&Hexapawn, &config)?;
//! let controller = app.open_session(Hexapawn, &config)?;
//! # Ok::<(), rote::Error>(())
//! ```

pub mod config;
pub mod container;

pub use config::{SessionConfig, StoreFormat};
pub use container::{App, AppBuilder};
