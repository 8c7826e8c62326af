//! Secret palette invariant: the hidden sequence uses only playable colours.

use super::Invariant;
use crate::session::GameSession;

/// Invariant: every secret colour falls within the configured palette, so
/// the player can always reproduce the hidden sequence through the cycle.
pub struct SecretInPaletteInvariant;

impl Invariant<GameSession> for SecretInPaletteInvariant {
    fn holds(session: &GameSession) -> bool {
        let palette_size = session.config().palette_size();
        session
            .reveal_secret()
            .colours()
            .iter()
            .all(|colour| colour.to_index() < palette_size)
    }

    fn description() -> &'static str {
        "every secret colour falls within the configured palette"
    }
}
