use envbind::Config;
use tracing_subscriber::EnvFilter;

envbind::record! {
    #[derive(Debug, Default)]
    struct AppConfig {
        app: AppSection,
        database: DatabaseSection,
    }
}

envbind::record! {
    #[derive(Debug, Default)]
    struct AppSection {
        name: String,
        debug: bool,
    }
}

envbind::record! {
    #[derive(Debug, Default)]
    #[allow(dead_code)]
    struct DatabaseSection {
        host: String,
        port: u16,
        name: String,
        dsn: String,
        pool_size: u32 => { default = "8" },
    }
}

fn main() -> Result<(), envbind::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config: AppConfig = Config::builder()
        .with_file("demos/app.env", true)
        .with_file("demos/local.env", false)
        .build()?;

    println!("App: {} (debug={})", config.app.name, config.app.debug);
    println!("Database DSN: {}", config.database.dsn);
    println!("Pool size: {}", config.database.pool_size);

    Ok(())
}
