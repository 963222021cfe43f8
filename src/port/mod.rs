//! Trait definitions (hexagonal ports).
//!
//! Outbound ports depend only on domain. The inbound port hands
//! application services to front ends.
//!
//! Ports are the seams between the bootstrap core and everything it treats
//! as external: persisted settings, the domain collaborators, the
//! authentication gate, page navigation and progress reporting.
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!                    │                         │
//!     ┌──────────────┤  Domain + Port          ├──────────────┐
//!     │              │                         │              │
//!     │              └─────────────────────────┘              │
//!     │                         │                             │
//!     ▼                         ▼                             ▼
//! ┌─────────┐            ┌──────────────┐             ┌────────────┐
//! │Settings │            │ Collaborator │             │ Auth / Nav │
//! │  Store  │            │   Adapters   │             │  Adapters  │
//! └─────────┘            └──────────────┘             └────────────┘
//! ```

pub mod inbound;
pub mod outbound;
