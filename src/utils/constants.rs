use std::env;

use lazy_static::lazy_static;

lazy_static! {
    pub static ref ADDRESS: String = set_address();
    pub static ref PORT: u16 = set_port();
    pub static ref DATABASE_URL: String = set_database_url();
    pub static ref ALLOWED_ORIGINS: Vec<String> = allowed_origins();
}

fn set_address() -> String {
    dotenv::dotenv().ok();
    env::var("ADDRESS").unwrap_or("0.0.0.0".to_owned())
}

fn set_port() -> u16 {
    dotenv::dotenv().ok();
    env::var("PORT")
        .unwrap_or("3000".to_owned())
        .parse::<u16>()
        .expect("Failed to parse 'PORT' as a valid u16 value.")
}

fn set_database_url() -> String {
    dotenv::dotenv().ok();
    env::var("DATABASE_URL").expect("Environment variable 'DATABASE_URL' is required but not set.")
}

fn allowed_origins() -> Vec<String> {
    dotenv::dotenv().ok();
    env::var("ALLOWED_ORIGINS")
        .unwrap_or_else(|_| {
            "http://localhost:8080,http://127.0.0.1:8080,https://dcc060-clinica-medica-front.onrender.com"
                .to_owned()
        })
        .split(',')
        .map(|s| s.trim().to_string())
        .collect::<Vec<String>>()
}
