pub mod action;
pub mod band;
pub mod camera;
pub mod constants;
pub mod content;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod panel;
pub mod persist;
pub mod rotation;
pub mod score;
pub mod session;
pub mod token;
pub mod visual;
pub mod wheel;

pub use action::{Action, Actions, PanelKind};
pub use band::{classify_band, Band, RingRadii};
pub use camera::Camera;
pub use content::Dataset;
pub use error::{HashError, PersistError, StoreError, UnknownBand};
pub use geometry::Viewport;
pub use persist::{MemoryBackend, PersistenceBackend, Snapshot};
pub use session::{Changes, Session};
pub use token::{Token, TokenId};
pub use wheel::Wheel;
