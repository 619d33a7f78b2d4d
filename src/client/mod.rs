//! Client side of the relay: the controller that turns typed input into
//! transcript entries, and the transport it uses to reach `POST /chat`.

pub mod controller;
pub mod transcript;
pub mod transport;

pub use controller::{ChatController, Completion, PendingSend, TRANSPORT_FALLBACK};
pub use transcript::{Author, Entry, EntryBody, Transcript};
pub use transport::{HttpRelay, RelayTransport, TransportError};
