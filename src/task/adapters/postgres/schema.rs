//! Diesel schema for task persistence.

diesel::table! {
    /// Per-user task records.
    tasks (id) {
        /// Store-assigned task identifier.
        id -> Int8,
        /// Verified identity of the task owner.
        #[max_length = 255]
        owner_id -> Varchar,
        /// Task title.
        #[max_length = 200]
        title -> Varchar,
        /// Task description.
        description -> Text,
        /// Completion flag.
        completed -> Bool,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last mutation timestamp.
        updated_at -> Timestamptz,
    }
}
