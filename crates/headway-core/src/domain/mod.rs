//! Domain model (IDs, progress, records, phases, errors, events).

pub mod errors;
pub mod events;
pub mod ids;
pub mod progress;
pub mod record;
pub mod state;

pub use self::errors::HeadwayError;
pub use self::events::JobEvent;
pub use self::ids::{JobId, ParseJobIdError};
pub use self::progress::Progress;
pub use self::record::{JobRecord, JobSnapshot};
pub use self::state::JobPhase;
