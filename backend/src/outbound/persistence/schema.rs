//! Diesel table definitions. Must match `backend/migrations` exactly.

diesel::table! {
    /// Directory users referenced by complaints.
    users (id) {
        id -> Uuid,
        name -> Varchar,
        email -> Varchar,
        phone -> Nullable<Varchar>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Filed complaints. Enum columns hold the wire names.
    complaints (id) {
        id -> Uuid,
        user_id -> Uuid,
        title -> Text,
        description -> Text,
        category -> Varchar,
        priority -> Varchar,
        status -> Varchar,
        assigned_department -> Nullable<Varchar>,
        assigned_staff_name -> Nullable<Varchar>,
        assigned_at -> Nullable<Timestamptz>,
        admin_response -> Nullable<Text>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
        resolved_at -> Nullable<Timestamptz>,
        /// Optimistic-concurrency counter, starts at 1.
        revision -> Int4,
    }
}

diesel::joinable!(complaints -> users (user_id));
diesel::allow_tables_to_appear_in_same_query!(complaints, users);
