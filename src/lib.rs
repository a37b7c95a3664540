pub mod core {
    pub mod config;
    pub mod error;
    pub mod routes;
    pub mod startup;
    pub mod state;
    pub mod tracing_init;
}

pub mod handlers {
    pub mod account;
    pub mod directory;
    pub mod fallback;
    pub mod health;
}

pub mod models {
    pub mod blood_bank;
    pub mod forms;
    pub mod user;
}

pub mod stores {
    pub mod account_store;
    pub mod directory;
    pub mod session_store;
    pub mod user_table;
}

pub mod utils {
    pub mod auth;
    pub mod digest;
    pub mod time;
}

pub mod validation {
    pub mod form;
}
