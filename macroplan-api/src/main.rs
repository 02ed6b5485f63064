use std::{error::Error, path::Path, sync::Arc};

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::{info, warn, LevelFilter};
use log4rs::{
    append::console::ConsoleAppender,
    config::{Appender, Config as LogConfig, Root},
};
use macroplan_api::{config::Config, configure, cors, cors_headers, fallback, AppState};

const LOG_CONFIG: &str = "log4rs.yml";

fn init_logging() -> Result<(), Box<dyn Error>> {
    if Path::new(LOG_CONFIG).exists() {
        log4rs::init_file(LOG_CONFIG, Default::default())?;
    } else {
        let stdout = ConsoleAppender::builder().build();
        let config = LogConfig::builder()
            .appender(Appender::builder().build("stdout", Box::new(stdout)))
            .build(Root::builder().appender("stdout").build(LevelFilter::Info))?;
        log4rs::init_config(config)?;
    }
    Ok(())
}

#[actix_web::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_logging()?;

    let config = Config::from_env();
    let food_lookup = match config.usda.clone() {
        Some(usda) => {
            info!("Food lookup enabled against {}", usda.base_url);
            Some(Arc::from(macroplan_client::create(usda)?))
        }
        None => {
            warn!("USDA_API_KEY not set, food lookup disabled");
            None
        }
    };
    let state = web::Data::new(AppState::new(config.static_dir.clone(), food_lookup));

    info!("Listening on http://{}:{}", config.host, config.port);
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(cors())
            .wrap(cors_headers())
            .wrap(Logger::default())
            .configure(configure)
            .default_service(web::route().to(fallback))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
