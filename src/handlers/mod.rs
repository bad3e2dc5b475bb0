// Two handler tiers: public (anonymous catalog reads, search, scripture)
// and protected (per-user library operations behind the auth gate).

pub mod protected;
pub mod public;

use crate::database::Storage;

/// Shared router state, constructed once in `main` and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub storage: Storage,
}
