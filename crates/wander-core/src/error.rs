/// Alias for `Result<T, WanderError>`.
pub type WanderResult<T> = Result<T, WanderError>;

/// Errors raised while configuring vocabularies or the room graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WanderError {
    /// A phrase contained no tokens after whitespace splitting.
    #[error("empty phrase")]
    EmptyPhrase,

    /// An alias is already registered, either in another entry or twice in
    /// the same one.
    #[error("alias \"{alias}\" already belongs to \"{canonical}\"")]
    DuplicateAlias {
        /// The offending alias.
        alias: String,
        /// Canonical form of the entry that already owns the alias.
        canonical: String,
    },

    /// A phrase could not be resolved to any known entry.
    #[error("unknown phrase: \"{0}\"")]
    UnknownPhrase(String),

    /// A room with the same name is already registered.
    #[error("room already exists: \"{0}\"")]
    DuplicateRoom(String),

    /// The room was never registered in the graph.
    #[error("unknown room: \"{0}\"")]
    UnknownRoom(String),

    /// The room already has an exit with this direction label.
    #[error("room \"{room}\" already has an exit to the {direction}")]
    DuplicateExit {
        /// The room the exit leaves from.
        room: String,
        /// The repeated direction label.
        direction: String,
    },
}
