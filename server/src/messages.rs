//! Message definitions for requests and responses exchanged with the fixture server.

use serde::{Deserialize, Serialize};

/// Response to a request asking whether a credential schema is one of the served fixtures.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct MatchResponse {
    /// Whether a served schema has the same id and type as the one in the request.
    pub known: bool,
}
